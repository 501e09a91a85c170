//! Record normalizer: turns the creature and species payloads of one roll into
//! the flat [`DisplayRecord`] every view renders from.
//!
//! Rules
//! - Sprite: `front_shiny` when the roll was shiny, otherwise `front_default`
//! - Generation: segment after the first `-` of `generation.name`, upper-cased
//! - Flavor text: first entry in [`FLAVOR_LOCALE`], form-feeds and newlines turned into spaces
//! - Stats: read by position through [`STAT_ORDER`], names in the payload are ignored
//!
//! The two payloads are trusted to describe the same creature; no cross-check is
//! made here (the roller logs a mismatch).

use serde::Serialize;

use super::errors::RollError;
use super::payload::{CreaturePayload, SpeciesPayload};

/// The only language flavor text is taken from.
pub const FLAVOR_LOCALE: &str = "en";

/// Which stat lives at which index of the API's `stats` array.
///
/// This is a contract with PokeAPI, which has always returned base stats in
/// this order. Entries past the sixth are ignored.
pub const STAT_ORDER: [StatKind; 6] = [
    StatKind::Hp,
    StatKind::Attack,
    StatKind::Defense,
    StatKind::SpecialAttack,
    StatKind::SpecialDefense,
    StatKind::Speed,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    /// Short label used on the card.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Hp => "HP",
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::SpecialAttack => "Sp. Atk",
            StatKind::SpecialDefense => "Sp. Def",
            StatKind::Speed => "Speed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    fn set(&mut self, kind: StatKind, value: u32) {
        match kind {
            StatKind::Hp => self.hp = value,
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::SpecialAttack => self.special_attack = value,
            StatKind::SpecialDefense => self.special_defense = value,
            StatKind::Speed => self.speed = value,
        }
    }

    /// Values in [`STAT_ORDER`] order.
    pub fn as_array(&self) -> [u32; 6] {
        STAT_ORDER.map(|kind| self.get(kind))
    }
}

/// One rolled creature, ready for display. Never mutated after [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    pub is_shiny: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub generation: String,
    pub flavor_text: String,
    pub types: Vec<String>,
    pub stats: Stats,
}

/// Build a [`DisplayRecord`] from one roll's payloads and its pre-drawn shiny flag.
pub fn normalize(
    creature: &CreaturePayload,
    species: &SpeciesPayload,
    is_shiny: bool,
) -> Result<DisplayRecord, RollError> {
    let sprite = if is_shiny {
        creature.sprites.front_shiny.clone()
    } else {
        creature.sprites.front_default.clone()
    };

    Ok(DisplayRecord {
        id: creature.id,
        name: creature.name.clone(),
        sprite,
        is_shiny,
        is_legendary: species.is_legendary,
        is_mythical: species.is_mythical,
        generation: generation_label(&species.generation.name)?,
        flavor_text: flavor_text(species),
        types: creature.types.iter().map(|t| t.kind.name.clone()).collect(),
        stats: positional_stats(creature)?,
    })
}

/// `"generation-iv"` becomes `"IV"`. Only the segment right after the first
/// hyphen is kept, so `"generation-iv-extra"` is also `"IV"`.
pub fn generation_label(name: &str) -> Result<String, RollError> {
    name.split('-')
        .nth(1)
        .map(str::to_uppercase)
        .ok_or_else(|| RollError::MalformedPayload(format!("generation name '{}' has no hyphen", name)))
}

/// First English flavor text with form-feeds and newlines replaced by spaces,
/// or an empty string when the species has no English entry.
pub fn flavor_text(species: &SpeciesPayload) -> String {
    species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == FLAVOR_LOCALE)
        .map(|entry| entry.flavor_text.replace(['\u{000C}', '\n'], " "))
        .unwrap_or_default()
}

fn positional_stats(creature: &CreaturePayload) -> Result<Stats, RollError> {
    if creature.stats.len() < STAT_ORDER.len() {
        return Err(RollError::MalformedPayload(format!(
            "expected {} stats for #{}, got {}",
            STAT_ORDER.len(),
            creature.id,
            creature.stats.len()
        )));
    }
    let mut stats = Stats::default();
    for (kind, entry) in STAT_ORDER.iter().zip(&creature.stats) {
        stats.set(*kind, entry.base_stat);
    }
    Ok(stats)
}
