use std::sync::Arc;
use std::time::Duration;

use crate::api::{FetchError, Pokemon};
use crate::fetch::FetchOrchestrator;
use crate::ui::loader::{LoaderSettings, LoaderStep, LoaderTimeline};
use crate::ui::mvi::Reducer;
use crate::ui::view::{IdDirection, ViewError, ViewIntent, ViewReducer, ViewState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Card state (MVI pattern). Only changed through `ViewReducer`.
    view: ViewState,
    /// Loader animation for the current fetch cycle, if still running.
    loader: Option<LoaderTimeline>,
    loader_settings: LoaderSettings,
    /// Fetch resource, managed outside MVI.
    orchestrator: FetchOrchestrator,
}

impl App {
    pub fn new(orchestrator: FetchOrchestrator, start_id: u16, loader_settings: LoaderSettings) -> Self {
        Self {
            should_quit: false,
            view: ViewState::starting_at(start_id),
            loader: None,
            loader_settings,
            orchestrator,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn loader(&self) -> Option<&LoaderTimeline> {
        self.loader.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Fetch the starting id.
    pub fn start(&mut self) {
        self.begin_fetch();
    }

    /// Move the requested id. Ignored while a fetch is in flight.
    ///
    /// Returns `true` when the id changed and a fetch was started.
    pub fn request_id_change(&mut self, direction: IdDirection) -> bool {
        if !self.view.controls_enabled() {
            return false;
        }
        let previous = self.view.requested_id;
        self.dispatch(ViewIntent::RequestIdChange(direction));
        if self.view.requested_id == previous {
            return false;
        }
        self.begin_fetch();
        true
    }

    /// Like [`request_id_change`](Self::request_id_change) for a button name.
    pub fn press(&mut self, button: &str) -> Result<bool, ViewError> {
        let direction: IdDirection = button.parse()?;
        Ok(self.request_id_change(direction))
    }

    /// Re-issue the fetch for the current id after a failure.
    pub fn retry(&mut self) -> bool {
        if self.view.failure().is_none() {
            return false;
        }
        tracing::info!(id = self.view.requested_id, "Retrying fetch");
        self.begin_fetch();
        true
    }

    pub fn on_fetched(&mut self, seq: u64, id: u16, outcome: Result<Pokemon, FetchError>) {
        if seq != self.view.latest_seq {
            tracing::debug!(seq, id, latest = self.view.latest_seq, "Discarding stale fetch result");
        }
        match outcome {
            Ok(pokemon) => self.dispatch(ViewIntent::DataArrived {
                seq,
                record: Arc::new(pokemon),
            }),
            Err(err) => {
                let reason = format!("{}: {}", err.user_message(), err);
                self.dispatch(ViewIntent::FetchFailed { seq, reason });
                if self.view.failure().is_some() {
                    self.loader = None;
                }
            }
        }
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        let is_loading = self.view.is_loading();
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        if loader.advance(elapsed, is_loading) == LoaderStep::Reveal {
            self.loader = None;
            self.dispatch(ViewIntent::Reveal);
        }
    }

    fn begin_fetch(&mut self) {
        let intent = self.orchestrator.begin(self.view.requested_id);
        self.dispatch(intent);
        self.loader = Some(LoaderTimeline::new(self.loader_settings));
    }

    fn dispatch(&mut self, intent: ViewIntent) {
        dispatch_mvi!(self, view, ViewReducer, intent);
    }
}
