use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::api::Pokemon;
use crate::ui::mvi::Intent;
use crate::ui::view::state::{MAX_ID, MIN_ID};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Unrecognized trigger '{name}'")]
    InvalidTrigger { name: String },
}

/// How `RequestIdChange` moves the requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdDirection {
    /// Jump to `pick`, drawn by the caller so reduction stays deterministic.
    Random { pick: u16 },
    Increment,
    Decrement,
}

impl IdDirection {
    /// Uniform pick in `[MIN_ID, MAX_ID]`. May equal the current id.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        IdDirection::Random {
            pick: rng.gen_range(MIN_ID..=MAX_ID),
        }
    }
}

impl FromStr for IdDirection {
    type Err = ViewError;

    /// Accepts the button names `random`, `up`, `down` and their long forms.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "random" => Ok(Self::random(&mut rand::thread_rng())),
            "up" | "increment" => Ok(IdDirection::Increment),
            "down" | "decrement" => Ok(IdDirection::Decrement),
            other => Err(ViewError::InvalidTrigger {
                name: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ViewIntent {
    RequestIdChange(IdDirection),
    /// A fetch tagged `seq` was issued.
    StartLoading { seq: u64 },
    DataArrived { seq: u64, record: Arc<Pokemon> },
    FetchFailed { seq: u64, reason: String },
    /// Make the loaded record visible.
    Reveal,
}

impl Intent for ViewIntent {}

impl ViewIntent {
    /// Parses the payload-free triggers by name.
    ///
    /// `RequestIdChange` is spelled `set_id:<direction>`. Payload-carrying
    /// triggers cannot be built from a name and are rejected.
    pub fn from_name(name: &str) -> Result<Self, ViewError> {
        if let Some(direction) = name.strip_prefix("set_id:") {
            return direction.parse().map(ViewIntent::RequestIdChange);
        }
        match name {
            "reveal" | "show_info" => Ok(ViewIntent::Reveal),
            other => Err(ViewError::InvalidTrigger {
                name: other.to_string(),
            }),
        }
    }
}
