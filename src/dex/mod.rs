//! Creature rolling: payloads, normalization, the roll itself, and the state and
//! views a front end builds on top.
//!
//! - [`api`] - [`DexSource`] seam and the PokeAPI HTTP client
//! - [`payload`] - JSON shapes of the two endpoints
//! - [`record`] - normalizer producing [`DisplayRecord`]
//! - [`roller`] - random id, fetches, shiny flip
//! - [`history`] - bounded newest-first history
//! - [`state`] - current selection plus history
//! - [`badge`], [`render`] - presentation

pub mod api;
pub mod badge;
pub mod errors;
pub mod history;
pub mod payload;
pub mod record;
pub mod render;
pub mod roller;
pub mod state;

pub use api::{DexSource, PokeApiClient};
pub use badge::Badge;
pub use errors::RollError;
pub use history::HistoryRing;
pub use record::{normalize, DisplayRecord, Stats};
pub use roller::Roller;
pub use state::RollerState;
