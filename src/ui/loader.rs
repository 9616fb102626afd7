//! Loading animation timeline.
//!
//! The bar fills over a fixed duration so that a fast response still shows
//! the animation briefly. Once data is in, the remainder plays faster. The
//! timeline only decides when to reveal; the view state never sees timing.

use std::time::Duration;

use crate::config::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderSettings {
    /// Wait before the bar starts moving.
    pub delay: Duration,
    /// Time to fill the bar at normal speed.
    pub duration: Duration,
    /// Speed multiplier once loading has finished.
    pub fast_forward: f64,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for LoaderSettings {
    fn from(ui: &UiConfig) -> Self {
        Self {
            delay: Duration::from_millis(ui.loader_delay_ms),
            duration: Duration::from_millis(ui.loader_duration_ms),
            fast_forward: ui.loader_fast_forward.max(1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStep {
    Pending,
    /// Fired exactly once per timeline.
    Reveal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Waiting { waited: Duration },
    Running { progress: f64 },
    Done,
}

#[derive(Debug, Clone)]
pub struct LoaderTimeline {
    settings: LoaderSettings,
    stage: Stage,
}

impl LoaderTimeline {
    pub fn new(settings: LoaderSettings) -> Self {
        Self {
            settings,
            stage: Stage::Waiting {
                waited: Duration::ZERO,
            },
        }
    }

    /// Fill ratio in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        match self.stage {
            Stage::Waiting { .. } => 0.0,
            Stage::Running { progress } => progress,
            Stage::Done => 1.0,
        }
    }

    pub fn advance(&mut self, elapsed: Duration, is_loading: bool) -> LoaderStep {
        match self.stage {
            Stage::Waiting { .. } if !is_loading => {
                // Data beat the animation: skip it entirely.
                self.stage = Stage::Done;
                LoaderStep::Reveal
            }
            Stage::Waiting { waited } => {
                let waited = waited + elapsed;
                self.stage = if waited >= self.settings.delay {
                    Stage::Running { progress: 0.0 }
                } else {
                    Stage::Waiting { waited }
                };
                LoaderStep::Pending
            }
            Stage::Running { progress } => {
                let rate = if is_loading {
                    1.0
                } else {
                    self.settings.fast_forward
                };
                let total = self.settings.duration.as_secs_f64();
                let step = if total > 0.0 {
                    elapsed.as_secs_f64() / total * rate
                } else {
                    1.0
                };
                let progress = progress + step;
                if progress >= 1.0 {
                    self.stage = Stage::Done;
                    LoaderStep::Reveal
                } else {
                    self.stage = Stage::Running { progress };
                    LoaderStep::Pending
                }
            }
            Stage::Done => LoaderStep::Pending,
        }
    }
}
