//! # dexroll - Random Creature Roller
//!
//! dexroll rolls a random creature from [PokeAPI](https://pokeapi.co), shows it as
//! a card, and keeps a rolling history of the last 50 rolls.
//!
//! ## Features
//!
//! - **Random Rolls**: Uniform id in `1..=1010`, one-in-eight shiny odds.
//! - **Normalization**: Creature and species payloads flattened into one [`dex::DisplayRecord`].
//! - **History**: Newest-first recency window, duplicates kept.
//! - **Badges**: Shiny / legendary / mythical markers with fixed precedence.
//! - **Async Design**: Tokio + reqwest, no retries, explicit `Result` per roll.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dexroll::config::Config;
//! use dexroll::dex::{render, PokeApiClient, Roller, RollerState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml").await?;
//!     let client = PokeApiClient::new(&config.api);
//!     let mut roller = Roller::new(client, config.roll.clone());
//!     let mut state = RollerState::new(config.roll.history_capacity);
//!
//!     state.apply_roll(roller.roll().await?);
//!     println!("{}", render::render_card(state.current()));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`dex`] - Rolling, normalization, history, state and views
//! - [`config`] - Configuration management and validation
//! - [`metrics`] - Roll counters
//! - [`logutil`] - Single-line log previews

pub mod config;
pub mod dex;
pub mod logutil;
pub mod metrics;
