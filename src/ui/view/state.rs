use std::sync::Arc;

use crate::api::Pokemon;
use crate::ui::mvi::UiState;

pub const MIN_ID: u16 = 1;
pub const MAX_ID: u16 = 800;

/// Where the current fetch cycle stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Latest fetch failed. The previous record, if any, is kept.
    Failed { reason: String },
}

/// Everything the card view needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub requested_id: u16,
    pub phase: LoadPhase,
    pub record: Option<Arc<Pokemon>>,
    /// Set by `Reveal`, cleared by `StartLoading`.
    pub revealed: bool,
    /// Sequence number of the most recently issued fetch.
    pub latest_seq: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::starting_at(MIN_ID)
    }
}

impl UiState for ViewState {}

impl ViewState {
    pub fn starting_at(id: u16) -> Self {
        Self {
            requested_id: id.clamp(MIN_ID, MAX_ID),
            phase: LoadPhase::Idle,
            record: None,
            revealed: false,
            latest_seq: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// Id buttons are disabled while a fetch is in flight.
    pub fn controls_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn show_record(&self) -> bool {
        self.revealed && self.record.is_some()
    }
}
