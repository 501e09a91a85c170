//! Plain-text views of the roller state: the current card and the history grid.

use std::fmt::Write;

use super::badge::Badge;
use super::history::HistoryRing;
use super::record::{DisplayRecord, STAT_ORDER};

/// Shown in place of a card before the first successful roll.
pub const EMPTY_CARD: &str = "Press Enter to roll a creature!";

/// History entries per row of the grid.
const GRID_COLUMNS: usize = 5;

pub fn render_card(record: Option<&DisplayRecord>) -> String {
    let Some(record) = record else {
        return EMPTY_CARD.to_string();
    };

    let mut out = String::new();
    if let Some(badge) = Badge::for_record(record) {
        let _ = writeln!(out, "*** {} ***", badge.label());
    }
    let _ = writeln!(out, "{}", record.name);
    let _ = writeln!(out, "ID: #{}", record.id);
    let _ = writeln!(out, "Generation: {}", record.generation);
    let _ = writeln!(out, "Types: {}", record.types.join(", "));
    for pair in STAT_ORDER.chunks(2) {
        let row: Vec<String> = pair
            .iter()
            .map(|kind| format!("{}: {}", kind.label(), record.stats.get(*kind)))
            .collect();
        let _ = writeln!(out, "{}", row.join("  "));
    }
    if let Some(sprite) = &record.sprite {
        let _ = writeln!(out, "Sprite: {}", sprite);
    }
    if !record.flavor_text.is_empty() {
        let _ = writeln!(out, "\"{}\"", record.flavor_text);
    }
    out.trim_end().to_string()
}

/// `None` while the history is empty; the view is hidden entirely then.
pub fn render_history(history: &HistoryRing) -> Option<String> {
    if history.is_empty() {
        return None;
    }
    let cells: Vec<String> = history.iter().map(history_cell).collect();
    let mut out = format!("Past {} Rolls", history.capacity());
    for row in cells.chunks(GRID_COLUMNS) {
        out.push('\n');
        out.push_str(&row.join("  "));
    }
    Some(out)
}

fn history_cell(record: &DisplayRecord) -> String {
    match Badge::for_record(record) {
        Some(badge) => format!("[{}] #{} {}", badge.short_label(), record.id, record.name),
        None => format!("#{} {}", record.id, record.name),
    }
}
