//! Wire shapes for the two API endpoints a roll touches.
//!
//! Only the fields the normalizer reads are declared; serde ignores the rest of
//! the (very large) PokeAPI documents.

use serde::Deserialize;

/// `GET /pokemon/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct CreaturePayload {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
}

/// Sprite URLs. PokeAPI returns `null` for forms without artwork.
#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    /// Present in the API but never consulted; stats are read by position.
    #[serde(default)]
    pub stat: Option<NamedResource>,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesPayload {
    #[serde(default)]
    pub id: Option<u32>,
    pub generation: NamedResource,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// PokeAPI's `{ "name": ..., "url": ... }` reference object.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}
