//! Badge shown on a card and in the history grid.
//!
//! At most one badge per record. Precedence, highest first:
//! shiny+legendary, shiny+mythical, shiny, legendary, mythical.

use super::record::DisplayRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    ShinyLegendary,
    ShinyMythical,
    Shiny,
    Legendary,
    Mythical,
}

impl Badge {
    pub fn for_flags(is_shiny: bool, is_legendary: bool, is_mythical: bool) -> Option<Badge> {
        match (is_shiny, is_legendary, is_mythical) {
            (true, true, _) => Some(Badge::ShinyLegendary),
            (true, false, true) => Some(Badge::ShinyMythical),
            (true, false, false) => Some(Badge::Shiny),
            (false, true, _) => Some(Badge::Legendary),
            (false, false, true) => Some(Badge::Mythical),
            (false, false, false) => None,
        }
    }

    pub fn for_record(record: &DisplayRecord) -> Option<Badge> {
        Self::for_flags(record.is_shiny, record.is_legendary, record.is_mythical)
    }

    /// Card banner text.
    pub fn label(self) -> &'static str {
        match self {
            Badge::ShinyLegendary => "SHINY LEGENDARY!",
            Badge::ShinyMythical => "SHINY MYTHICAL",
            Badge::Shiny => "SHINY!",
            Badge::Legendary => "LEGENDARY",
            Badge::Mythical => "MYTHICAL",
        }
    }

    /// History grid marker.
    pub fn short_label(self) -> &'static str {
        match self {
            Badge::ShinyLegendary => "SL",
            Badge::ShinyMythical => "SM",
            Badge::Shiny => "S",
            Badge::Legendary => "L",
            Badge::Mythical => "M",
        }
    }
}
