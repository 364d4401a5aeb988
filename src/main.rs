mod app;
mod board;
mod config;
mod data;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::board::{BoardState, Lead};
use crate::logging::ActivityLogger;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    init_tracing();

    // Load config and seed data
    let cfg = config::load_config()?;
    let leads = data::load_leads(&cfg).context("failed to load lead data")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, leads).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Trace to a file; stdout belongs to the TUI. Logging is best-effort and
/// never blocks startup.
fn init_tracing() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("leadflow")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("leadflow.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    leads: Vec<Lead>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone(), BoardState::new(leads), data::sample_metrics());
    let mut activity_logger = ActivityLogger::new(&cfg.activity);
    tracing::info!(leads = state.board.len(), "started");

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Hit-testing needs the viewport before the first input arrives
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::MoveLead { lead_id, to } => {
                    match state.board.move_lead(&lead_id, to) {
                        Some(change) => {
                            tracing::info!(
                                lead = %change.lead_id,
                                from = change.from.name(),
                                to = change.to.name(),
                                "stage change"
                            );
                            let moved = state.board.lead(&change.lead_id).cloned();
                            if let Some(lead) = moved {
                                activity_logger.log_change(&lead, &change);
                                state.set_status(format!(
                                    "{} moved to {}",
                                    lead.name,
                                    change.to.title()
                                ));
                            }
                            state.select_lead(&change.lead_id);
                            state.clamp_selection();
                        }
                        None => {
                            tracing::debug!(lead = %lead_id, "move ignored, unknown lead");
                        }
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            let size = terminal.size()?;
            state.viewport = Rect::new(0, 0, size.width, size.height);
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    tracing::info!("shutting down");
    Ok(())
}
