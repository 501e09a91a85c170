//! Roll orchestrator.
//!
//! One roll: draw an id in `1..=max_id`, fetch the creature then the species
//! for that id, flip the shiny coin, and normalize. The outcome is returned as a
//! `Result`; [`Roller::roll_into`] applies it to a [`RollerState`] only on
//! success. Nothing is retried.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::api::DexSource;
use super::errors::RollError;
use super::payload::{CreaturePayload, SpeciesPayload};
use super::record::{normalize, DisplayRecord};
use super::state::RollerState;
use crate::config::RollConfig;
use crate::logutil::single_line;
use crate::metrics;

/// Uniform id in `1..=max_id`. A `max_id` of zero is treated as one.
pub fn roll_id<R: Rng + ?Sized>(rng: &mut R, max_id: u32) -> u32 {
    rng.gen_range(1..=max_id.max(1))
}

/// Bernoulli draw with probability `rate`.
pub fn roll_shiny<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> bool {
    rng.gen::<f64>() < rate
}

pub struct Roller<S> {
    source: S,
    settings: RollConfig,
    rng: StdRng,
}

impl<S: DexSource> Roller<S> {
    /// Seeds from `settings.seed` when set, otherwise from OS entropy.
    pub fn new(source: S, settings: RollConfig) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(source, settings, rng)
    }

    pub fn with_rng(source: S, settings: RollConfig, rng: StdRng) -> Self {
        Self {
            source,
            settings,
            rng,
        }
    }

    pub fn settings(&self) -> &RollConfig {
        &self.settings
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Roll a random creature.
    pub async fn roll(&mut self) -> Result<DisplayRecord, RollError> {
        let id = roll_id(&mut self.rng, self.settings.max_id);
        self.roll_for(id).await
    }

    /// Roll and apply the result to `state`. On failure `state` is left untouched.
    pub async fn roll_into(&mut self, state: &mut RollerState) -> Result<(), RollError> {
        let outcome = self.roll().await;
        state.apply_outcome(outcome)
    }

    /// Roll a specific id. The shiny flag is still random.
    pub async fn roll_for(&mut self, id: u32) -> Result<DisplayRecord, RollError> {
        metrics::inc_rolls_started();
        match self.fetch_and_normalize(id).await {
            Ok(record) => {
                metrics::record_success(&record);
                info!(
                    "Rolled #{} {}{}",
                    record.id,
                    record.name,
                    if record.is_shiny { " (shiny)" } else { "" }
                );
                Ok(record)
            }
            Err(e) => {
                metrics::inc_rolls_failed();
                Err(e)
            }
        }
    }

    async fn fetch_and_normalize(&mut self, id: u32) -> Result<DisplayRecord, RollError> {
        debug!("Rolling id {}", id);
        let (creature, species) = self.fetch_pair(id).await?;
        check_ids(id, &creature, &species);

        let is_shiny = roll_shiny(&mut self.rng, self.settings.shiny_rate);
        let record = normalize(&creature, &species, is_shiny)?;
        debug!("Flavor text for #{}: {}", record.id, single_line(&record.flavor_text));
        Ok(record)
    }

    async fn fetch_pair(&self, id: u32) -> Result<(CreaturePayload, SpeciesPayload), RollError> {
        if self.settings.concurrent_fetch {
            let (creature, species) =
                tokio::join!(self.source.creature(id), self.source.species(id));
            Ok((creature?, species?))
        } else {
            let creature = self.source.creature(id).await?;
            let species = self.source.species(id).await?;
            Ok((creature, species))
        }
    }
}

/// Payloads are trusted to match; a mismatch is only reported.
fn check_ids(requested: u32, creature: &CreaturePayload, species: &SpeciesPayload) {
    if creature.id != requested {
        warn!(
            "Creature payload id {} does not match requested id {}",
            creature.id, requested
        );
    }
    if let Some(species_id) = species.id {
        if species_id != requested {
            warn!(
                "Species payload id {} does not match requested id {}",
                species_id, requested
            );
        }
    }
}
