//! Card view state machine.
//!
//! ```text
//! Idle ──StartLoading──→ Loading ──DataArrived──→ Loaded (hidden)
//!                          │                          │ Reveal
//!                          └──FetchFailed──→ Failed   └──→ Loaded (shown)
//! ```
//!
//! `RequestIdChange` only moves the requested id; the caller starts the
//! fetch when the id actually changed.

mod intent;
mod reducer;
mod state;

pub use intent::{IdDirection, ViewError, ViewIntent};
pub use reducer::ViewReducer;
pub use state::{LoadPhase, ViewState, MAX_ID, MIN_ID};
