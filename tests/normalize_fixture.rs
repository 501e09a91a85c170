//! Normalizer against real-shaped PokeAPI payloads.
mod common;

use dexroll::dex::normalize;
use dexroll::dex::payload::{FlavorTextEntry, NamedResource};

#[test]
fn pikachu_fixture_normalizes() {
    let creature = common::creature_25();
    let species = common::species_25();
    let record = normalize(&creature, &species, false).expect("normalize");

    assert_eq!(record.id, 25);
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.types, vec!["electric".to_string()]);
    let fixture_stats: Vec<u32> = creature.stats.iter().map(|s| s.base_stat).collect();
    assert_eq!(record.stats.as_array().to_vec(), fixture_stats);
    assert_eq!(record.stats.hp, 35);
    assert_eq!(record.stats.speed, 90);
    assert_eq!(record.generation, "I");
    assert!(!record.is_legendary);
    assert!(!record.is_mythical);
    assert_eq!(
        record.sprite.as_deref(),
        Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png")
    );
}

#[test]
fn pikachu_flavor_text_is_first_english_entry_flattened() {
    let record = normalize(&common::creature_25(), &common::species_25(), false).unwrap();
    assert_eq!(
        record.flavor_text,
        "When several of these POKéMON gather, their electricity could build and cause lightning storms."
    );
    assert!(!record.flavor_text.contains('\n'));
    assert!(!record.flavor_text.contains('\u{000C}'));
}

#[test]
fn each_break_becomes_one_space() {
    let mut species = common::species_25();
    species.flavor_text_entries = vec![FlavorTextEntry {
        flavor_text: "a\u{000C}\nb".to_string(),
        language: NamedResource {
            name: "en".to_string(),
        },
    }];
    let record = normalize(&common::creature_25(), &species, false).unwrap();
    assert_eq!(record.flavor_text, "a  b");
}

#[test]
fn shiny_roll_surfaces_shiny_sprite() {
    let record = normalize(&common::creature_25(), &common::species_25(), true).unwrap();
    assert!(record.is_shiny);
    assert!(record.sprite.unwrap().contains("/shiny/25.png"));
}

#[test]
fn json_output_uses_camel_case() {
    let record = normalize(&common::creature_25(), &common::species_25(), false).unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["isShiny"], false);
    assert_eq!(value["flavorText"].as_str().map(|s| s.is_empty()), Some(false));
    assert_eq!(value["stats"]["specialAttack"], 50);
    assert_eq!(value["types"][0], "electric");
}
