//! Badge precedence on cards and history cells.
mod common;

use dexroll::dex::render::{render_card, render_history};
use dexroll::dex::{Badge, HistoryRing};

#[test]
fn all_flags_yield_only_shiny_legendary() {
    let mut record = common::record(150);
    record.is_shiny = true;
    record.is_legendary = true;
    record.is_mythical = true;

    assert_eq!(Badge::for_record(&record), Some(Badge::ShinyLegendary));
    let card = render_card(Some(&record));
    assert!(card.contains("SHINY LEGENDARY!"));
    assert!(!card.contains("SHINY MYTHICAL"));
    assert!(!card.contains("*** SHINY! ***"));
    assert!(!card.contains("*** MYTHICAL ***"));
}

#[test]
fn precedence_table() {
    let cases = vec![
        ((true, true, false), Some(Badge::ShinyLegendary)),
        ((true, false, true), Some(Badge::ShinyMythical)),
        ((true, false, false), Some(Badge::Shiny)),
        ((false, true, false), Some(Badge::Legendary)),
        ((false, false, true), Some(Badge::Mythical)),
        ((false, false, false), None),
    ];
    for ((shiny, legendary, mythical), expected) in cases {
        assert_eq!(
            Badge::for_flags(shiny, legendary, mythical),
            expected,
            "flags shiny={} legendary={} mythical={}",
            shiny,
            legendary,
            mythical
        );
    }
}

#[test]
fn history_uses_short_markers() {
    let mut ring = HistoryRing::new(50);
    let mut shiny_legend = common::record(144);
    shiny_legend.is_shiny = true;
    shiny_legend.is_legendary = true;
    ring.push(common::record(1));
    ring.push(shiny_legend);
    let view = render_history(&ring).unwrap();
    assert!(view.contains("[SL] #144"));
    assert!(view.contains("#1 creature-1"));
    assert!(!view.contains("[S] #1 "));
}
