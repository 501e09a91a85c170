//! The single state container a front end owns: the current selection and the
//! history ring. Views read it; only the transitions below mutate it.

use super::errors::RollError;
use super::history::HistoryRing;
use super::record::DisplayRecord;

#[derive(Debug, Clone, Default)]
pub struct RollerState {
    current: Option<DisplayRecord>,
    history: HistoryRing,
}

impl RollerState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            current: None,
            history: HistoryRing::new(history_capacity),
        }
    }

    pub fn current(&self) -> Option<&DisplayRecord> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    pub fn set_selection(&mut self, record: DisplayRecord) {
        self.current = Some(record);
    }

    pub fn push_history(&mut self, record: DisplayRecord) {
        self.history.push(record);
    }

    /// A finished roll becomes the current selection and the head of history.
    pub fn apply_roll(&mut self, record: DisplayRecord) {
        self.push_history(record.clone());
        self.set_selection(record);
    }

    /// Apply a roll result: success goes through [`apply_roll`](Self::apply_roll),
    /// failure leaves selection and history as they were and is handed back.
    pub fn apply_outcome(
        &mut self,
        outcome: Result<DisplayRecord, RollError>,
    ) -> Result<(), RollError> {
        self.apply_roll(outcome?);
        Ok(())
    }
}
