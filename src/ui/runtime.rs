use crate::fact::FactSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive fact screen until the user quits.
///
/// Fetches run on `runtime` and report back through the event channel, so
/// the app state is only ever touched from this thread.
pub fn run(mut app: App, source: Arc<dyn FactSource>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let mut input_error = None;
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Fetch {
                    spawn_fetch(&runtime, Arc::clone(&source), events.sender());
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::FactLoaded(result)) => app.on_fact_loaded(result),
            Ok(AppEvent::InputClosed(err)) => {
                input_error = Some(err);
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    match input_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn spawn_fetch(runtime: &Handle, source: Arc<dyn FactSource>, tx: Sender<AppEvent>) {
    runtime.spawn(async move {
        let result = source.fetch_fact().await;
        match &result {
            Ok(fact) => tracing::info!(
                source = source.name(),
                chars = fact.chars().count(),
                "fact fetched"
            ),
            Err(err) => tracing::warn!(source = source.name(), error = %err, "fact fetch failed"),
        }
        let _ = tx.send(AppEvent::FactLoaded(result));
    });
}
