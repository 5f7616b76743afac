//! Tui command - the interactive decoder.

use std::io;

use anyhow::{Context, Result};
use clap::Args;
use ratatui::{backend::CrosstermBackend, Terminal};

use debase::config::AppConfig;
use debase::storage::{FileStorage, Storage};
use debase::tui::{
    handle_key_event, init_terminal, render, restore_terminal, Event, EventHandler, KeyAction,
    TuiApp,
};

use super::CommandExecutor;

/// Open the interactive decoder.
#[derive(Args, Debug, Default)]
pub struct TuiCommand {}

impl CommandExecutor for TuiCommand {
    fn execute(&self) -> Result<()> {
        let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        rt.block_on(run())
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let storage =
        FileStorage::in_user_data_dir().context("Could not determine a data directory")?;

    let mut events = EventHandler::new();
    EventHandler::spawn_reader(events.sender(), config.tick_rate());

    let mut app = TuiApp::new(storage, &config, events.sender());

    let mut terminal = init_terminal().context("Failed to initialize terminal")?;
    let result = event_loop(&mut terminal, &mut app, &mut events).await;
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;
    result
}

async fn event_loop<S: Storage>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp<S>,
    events: &mut EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, app))
            .context("Failed to draw frame")?;

        match events.next().await {
            Some(Event::Tick) => app.on_tick(),
            Some(Event::Key(key)) => {
                if handle_key_event(app, key) == KeyAction::Quit {
                    app.should_quit = true;
                }
            }
            Some(Event::Resize(_, _)) => {}
            Some(Event::TransitionDone(transition)) => app.on_transition_done(transition),
            None => break,
        }
    }
    Ok(())
}
