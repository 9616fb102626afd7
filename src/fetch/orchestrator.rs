use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::api::PokemonSource;
use crate::ui::events::AppEvent;
use crate::ui::view::ViewIntent;

/// Issues fetches and tags each with a monotonically increasing sequence
/// number.
///
/// Fetches are never cancelled. A response that is not for the latest
/// sequence number is dropped by the view reducer.
pub struct FetchOrchestrator {
    source: Arc<dyn PokemonSource>,
    runtime: Handle,
    events: Sender<AppEvent>,
    next_seq: u64,
}

impl FetchOrchestrator {
    pub fn new(source: Arc<dyn PokemonSource>, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            source,
            runtime,
            events,
            next_seq: 0,
        }
    }

    /// Spawns the fetch for `id` and returns the `StartLoading` intent the
    /// caller must dispatch before handling any later event.
    pub fn begin(&mut self, id: u16) -> ViewIntent {
        self.next_seq += 1;
        let seq = self.next_seq;
        let source = Arc::clone(&self.source);
        let events = self.events.clone();

        tracing::debug!(id, seq, "Fetching record");
        self.runtime.spawn(async move {
            let started = Instant::now();
            let outcome = source.fetch(id).await;
            match &outcome {
                Ok(pokemon) => tracing::info!(
                    id,
                    seq,
                    name = %pokemon.name,
                    latency_ms = started.elapsed().as_millis() as u64,
                    "Record fetched"
                ),
                Err(err) => tracing::warn!(id, seq, error = %err, "Fetch failed"),
            }
            if events.send(AppEvent::Fetched { seq, id, outcome }).is_err() {
                tracing::trace!(seq, "Fetch result dropped (event loop gone)");
            }
        });

        ViewIntent::StartLoading { seq }
    }
}
