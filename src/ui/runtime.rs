use crate::api::PokemonSource;
use crate::config::Config;
use crate::fetch::FetchOrchestrator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::loader::LoaderSettings;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Runs the card viewer until the user quits.
///
/// Must be called from a plain thread; fetches are spawned on `runtime`.
pub fn run(config: &Config, source: Arc<dyn PokemonSource>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);
    let orchestrator = FetchOrchestrator::new(source, runtime, events.sender());
    let mut app = App::new(
        orchestrator,
        config.ui.start_id,
        LoaderSettings::from(&config.ui),
    );

    tracing::info!(start_id = config.ui.start_id, "Viewer started");
    app.start();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {
                app.on_tick(last_tick.elapsed());
                last_tick = Instant::now();
            }
            // Layout follows `frame.area()`; the next draw picks up the new size.
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Fetched { seq, id, outcome }) => app.on_fetched(seq, id, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Viewer stopped");
    drop(guard);
    Ok(())
}
