//! Test utilities & fixtures.
//! Payloads under `tests/fixtures/` are trimmed copies of real PokeAPI responses for #25.
#![allow(dead_code)]

use dexroll::dex::payload::{CreaturePayload, SpeciesPayload};
use dexroll::dex::record::Stats;
use dexroll::dex::{DexSource, DisplayRecord, RollError};

pub const CREATURE_25_JSON: &str = include_str!("fixtures/pokemon_25.json");
pub const SPECIES_25_JSON: &str = include_str!("fixtures/pokemon_species_25.json");

pub fn creature_25() -> CreaturePayload {
    serde_json::from_str(CREATURE_25_JSON).expect("creature fixture")
}

pub fn species_25() -> SpeciesPayload {
    serde_json::from_str(SPECIES_25_JSON).expect("species fixture")
}

/// Answers every id with the #25 fixtures.
pub struct FixtureSource;

impl DexSource for FixtureSource {
    async fn creature(&self, _id: u32) -> Result<CreaturePayload, RollError> {
        Ok(creature_25())
    }

    async fn species(&self, _id: u32) -> Result<SpeciesPayload, RollError> {
        Ok(species_25())
    }
}

/// Creature lookups succeed, species lookups fail with a 503.
pub struct BrokenSpeciesSource;

impl DexSource for BrokenSpeciesSource {
    async fn creature(&self, _id: u32) -> Result<CreaturePayload, RollError> {
        Ok(creature_25())
    }

    async fn species(&self, id: u32) -> Result<SpeciesPayload, RollError> {
        Err(RollError::Status {
            url: format!("http://fixture/pokemon-species/{id}"),
            status: 503,
        })
    }
}

/// Minimal record for state and history tests.
pub fn record(id: u32) -> DisplayRecord {
    DisplayRecord {
        id,
        name: format!("creature-{id}"),
        sprite: Some(format!("https://sprites.test/{id}.png")),
        is_shiny: false,
        is_legendary: false,
        is_mythical: false,
        generation: "I".to_string(),
        flavor_text: String::new(),
        types: vec!["normal".to_string()],
        stats: Stats::default(),
    }
}
