use crate::ui::mvi::Reducer;
use crate::ui::view::intent::{IdDirection, ViewIntent};
use crate::ui::view::state::{LoadPhase, ViewState, MAX_ID, MIN_ID};

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::RequestIdChange(direction) => {
                let requested_id = match direction {
                    IdDirection::Random { pick } => pick.clamp(MIN_ID, MAX_ID),
                    IdDirection::Increment => state.requested_id.saturating_add(1).min(MAX_ID),
                    IdDirection::Decrement => state.requested_id.saturating_sub(1).max(MIN_ID),
                };
                ViewState {
                    requested_id,
                    ..state
                }
            }
            ViewIntent::StartLoading { seq } => ViewState {
                phase: LoadPhase::Loading,
                revealed: false,
                latest_seq: state.latest_seq.max(seq),
                ..state
            },
            // Completions for anything but the latest fetch are stale.
            ViewIntent::DataArrived { seq, record } if seq == state.latest_seq => ViewState {
                record: Some(record),
                phase: LoadPhase::Loaded,
                ..state
            },
            ViewIntent::FetchFailed { seq, reason } if seq == state.latest_seq => ViewState {
                phase: LoadPhase::Failed { reason },
                ..state
            },
            ViewIntent::DataArrived { .. } | ViewIntent::FetchFailed { .. } => state,
            ViewIntent::Reveal => ViewState {
                revealed: true,
                ..state
            },
        }
    }
}
