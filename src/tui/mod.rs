//! Terminal front end for a Tower of Hanoi session.
//!
//! A thin layer: it renders [`ViewState`](crate::ViewState) snapshots and
//! forwards key presses to the controller as intents. Key reading happens
//! on a blocking task; timer ticks come from a [`Ticker`] that is only
//! armed while the session timer runs.

mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::{GameConfig, GameController, IntentOutcome, SelectOutcome, Ticker, ViewState};
use input::{KeyAction, map_key};

/// Runs an interactive session until the user quits.
///
/// Callers should route logs away from stdout first, since the terminal is
/// in raw mode for the whole session. Returns the final view-state.
pub async fn run_tui(config: GameConfig) -> Result<ViewState> {
    info!("Starting Strictly Tower TUI");

    let mut controller = GameController::new(config)?;

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(error = %err, "Terminal setup failed");
            disable_raw_mode()?;
            return Err(err.into());
        }
    };

    let res = run_session(&mut terminal, &mut controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Session loop error");
    }
    res?;

    info!("Session ended");
    Ok(controller.view_state())
}

/// Switches to the alternate screen and builds the terminal.
fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    })
}

/// Event loop: draw, then wait for either a key or a timer tick.
#[instrument(skip_all)]
async fn run_session(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut GameController,
) -> Result<()> {
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let reader = tokio::task::spawn_blocking(move || read_keys(key_tx));

    let period = Duration::from_millis(*controller.config().tick_interval_ms());
    let mut ticker = Ticker::new(period);
    let mut status: Option<String> = None;

    loop {
        ticker.sync(controller.is_timer_running());

        let view = controller.view_state();
        terminal.draw(|f| ui::draw(f, &view, controller.config(), status.as_deref()))?;

        tokio::select! {
            key = key_rx.recv() => {
                let Some(key) = key else {
                    debug!("Key reader closed");
                    break;
                };
                match map_key(key, &view) {
                    KeyAction::Quit => {
                        info!("User quit");
                        break;
                    }
                    KeyAction::Intent(intent) => {
                        let outcome = controller.handle(intent);
                        debug!(?outcome, "Intent handled");
                        status = feedback(outcome);
                    }
                    KeyAction::Ignore => {}
                }
            }
            _ = ticker.tick() => {
                controller.tick();
            }
        }
    }

    ticker.cancel();
    drop(key_rx);
    reader.await??;
    Ok(())
}

/// Status line text for an intent's outcome, if it deserves one.
fn feedback(outcome: IntentOutcome) -> Option<String> {
    match outcome {
        IntentOutcome::Select(SelectOutcome::Rejected(action)) => {
            Some(format!("Illegal move: {}", action))
        }
        IntentOutcome::Reset { rank: Some(rank) } => {
            Some(format!("Time recorded at #{}", rank + 1))
        }
        _ => None,
    }
}

/// Forwards key presses until the receiving side goes away.
fn read_keys(tx: mpsc::UnboundedSender<KeyEvent>) -> io::Result<()> {
    while !tx.is_closed() {
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if tx.send(key).is_err() {
                break;
            }
        }
    }
    Ok(())
}
