//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pokecard::api::{FetchError, NamedResource, Pokemon, PokemonSource, Sprites, StatSlot, TypeSlot};
use pokecard::fetch::FetchOrchestrator;
use pokecard::ui::app::App;
use pokecard::ui::events::AppEvent;
use pokecard::ui::loader::LoaderSettings;

/// Build a record with six canonical stats and one or two types.
pub fn sample_pokemon(id: u32) -> Pokemon {
    let named = |name: &str| NamedResource {
        name: name.to_string(),
        url: None,
    };
    Pokemon {
        id,
        name: format!("mon-{id}"),
        sprites: Sprites {
            front_default: Some(format!("https://sprites.example/{id}.png")),
        },
        types: vec![
            TypeSlot {
                slot: 1,
                kind: named("grass"),
            },
            TypeSlot {
                slot: 2,
                kind: named("poison"),
            },
        ],
        stats: [
            ("hp", 45),
            ("attack", 49),
            ("defense", 49),
            ("special-attack", 65),
            ("special-defense", 65),
            ("speed", 45),
        ]
        .into_iter()
        .map(|(name, base_stat)| StatSlot {
            stat: named(name),
            base_stat,
        })
        .collect(),
    }
}

/// JSON body shaped like a real PokeAPI response.
pub fn sample_body(id: u32) -> String {
    format!(
        r#"{{
            "id": {id},
            "name": "mon-{id}",
            "base_experience": 64,
            "sprites": {{ "front_default": "https://sprites.example/{id}.png", "back_default": null }},
            "types": [
                {{ "slot": 1, "type": {{ "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" }} }},
                {{ "slot": 2, "type": {{ "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" }} }}
            ],
            "stats": [
                {{ "base_stat": 45, "effort": 0, "stat": {{ "name": "hp", "url": "" }} }},
                {{ "base_stat": 49, "effort": 0, "stat": {{ "name": "attack", "url": "" }} }},
                {{ "base_stat": 49, "effort": 0, "stat": {{ "name": "defense", "url": "" }} }},
                {{ "base_stat": 65, "effort": 1, "stat": {{ "name": "special-attack", "url": "" }} }},
                {{ "base_stat": 65, "effort": 0, "stat": {{ "name": "special-defense", "url": "" }} }},
                {{ "base_stat": 45, "effort": 0, "stat": {{ "name": "speed", "url": "" }} }}
            ]
        }}"#
    )
}

/// In-memory source. Ids in `failing` answer with a 500.
#[derive(Default)]
pub struct FakeSource {
    pub failing: Mutex<HashSet<u16>>,
    pub calls: Mutex<Vec<u16>>,
}

impl FakeSource {
    pub fn fail_for(&self, id: u16) {
        self.failing.lock().unwrap().insert(id);
    }

    pub fn recover(&self, id: u16) {
        self.failing.lock().unwrap().remove(&id);
    }

    pub fn calls(&self) -> Vec<u16> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PokemonSource for FakeSource {
    async fn fetch(&self, id: u16) -> Result<Pokemon, FetchError> {
        self.calls.lock().unwrap().push(id);
        if self.failing.lock().unwrap().contains(&id) {
            return Err(FetchError::Status { id, status: 500 });
        }
        Ok(sample_pokemon(id as u32))
    }
}

/// App wired to a fake source on a private tokio runtime.
pub struct Harness {
    pub app: App,
    pub source: Arc<FakeSource>,
    pub events: Receiver<AppEvent>,
    _runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn new(start_id: u16) -> Self {
        Self::with_settings(start_id, LoaderSettings::default())
    }

    pub fn with_settings(start_id: u16, settings: LoaderSettings) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime");
        let source = Arc::new(FakeSource::default());
        let (tx, rx) = mpsc::channel();
        let orchestrator = FetchOrchestrator::new(
            Arc::clone(&source) as Arc<dyn PokemonSource>,
            runtime.handle().clone(),
            tx,
        );
        Self {
            app: App::new(orchestrator, start_id, settings),
            source,
            events: rx,
            _runtime: runtime,
        }
    }

    /// Wait for the next fetch completion and feed it to the app.
    pub fn deliver_next(&mut self) -> (u64, u16) {
        loop {
            let event = self
                .events
                .recv_timeout(Duration::from_secs(5))
                .expect("fetch result");
            if let AppEvent::Fetched { seq, id, outcome } = event {
                self.app.on_fetched(seq, id, outcome);
                return (seq, id);
            }
        }
    }

    /// Tick until the loader reveals the record or `max_ticks` pass.
    pub fn tick_until_revealed(&mut self, step: Duration, max_ticks: usize) -> usize {
        for n in 1..=max_ticks {
            self.app.on_tick(step);
            if self.app.view().revealed {
                return n;
            }
        }
        panic!("record not revealed after {max_ticks} ticks");
    }
}
