//! Process-wide roll counters. Printed when a session ends.
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dex::record::DisplayRecord;

static ROLLS_STARTED: AtomicU64 = AtomicU64::new(0);
static ROLLS_SUCCEEDED: AtomicU64 = AtomicU64::new(0);
static ROLLS_FAILED: AtomicU64 = AtomicU64::new(0);
static SHINIES: AtomicU64 = AtomicU64::new(0);
static LEGENDARIES: AtomicU64 = AtomicU64::new(0);
static MYTHICALS: AtomicU64 = AtomicU64::new(0);

pub fn inc_rolls_started() {
    ROLLS_STARTED.fetch_add(1, Ordering::Relaxed);
}

pub fn inc_rolls_failed() {
    ROLLS_FAILED.fetch_add(1, Ordering::Relaxed);
}

/// Count a finished roll and its rarity flags.
pub fn record_success(record: &DisplayRecord) {
    ROLLS_SUCCEEDED.fetch_add(1, Ordering::Relaxed);
    if record.is_shiny {
        SHINIES.fetch_add(1, Ordering::Relaxed);
    }
    if record.is_legendary {
        LEGENDARIES.fetch_add(1, Ordering::Relaxed);
    }
    if record.is_mythical {
        MYTHICALS.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub rolls_started: u64,
    pub rolls_succeeded: u64,
    pub rolls_failed: u64,
    pub shinies: u64,
    pub legendaries: u64,
    pub mythicals: u64,
}

impl Snapshot {
    /// One-line summary for the end of a session.
    pub fn summary(&self) -> String {
        format!(
            "{} rolls ({} ok, {} failed): {} shiny, {} legendary, {} mythical",
            self.rolls_started,
            self.rolls_succeeded,
            self.rolls_failed,
            self.shinies,
            self.legendaries,
            self.mythicals
        )
    }
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        rolls_started: ROLLS_STARTED.load(Ordering::Relaxed),
        rolls_succeeded: ROLLS_SUCCEEDED.load(Ordering::Relaxed),
        rolls_failed: ROLLS_FAILED.load(Ordering::Relaxed),
        shinies: SHINIES.load(Ordering::Relaxed),
        legendaries: LEGENDARIES.load(Ordering::Relaxed),
        mythicals: MYTHICALS.load(Ordering::Relaxed),
    }
}
