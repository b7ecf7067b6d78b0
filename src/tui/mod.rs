//! Terminal UI: event loop, rendering, and themes.

mod app;
mod theme;
mod ui;

use crate::games::tictactoe::GameMode;
use crate::players::MoveSource;
use anyhow::Result;
use app::{AiMove, App};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Runs the game until the user quits.
///
/// Owns the terminal for the duration: raw mode plus the alternate
/// screen, restored on the way out even when the loop errors.
pub async fn run(mode: GameMode, source: Arc<dyn MoveSource>, move_delay: Duration) -> Result<()> {
    info!(mode = mode.name(), source = source.name(), "starting game");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, mode, source, move_delay).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
    }
    res
}

/// The single-threaded event loop.
///
/// Each tick: render, spawn an automated move task if one is due, drain
/// resolved moves, then poll the keyboard. All state mutation happens
/// here; the spawned tasks only compute a choice and sleep the pacing
/// delay before reporting back.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mode: GameMode,
    source: Arc<dyn MoveSource>,
    move_delay: Duration,
) -> Result<()> {
    let (move_tx, mut move_rx) = mpsc::unbounded_channel::<AiMove>();
    let mut app = App::new(mode);

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        if app.wants_ai_move() {
            let (epoch, board, mark) = app.begin_ai_request();
            let source = Arc::clone(&source);
            let tx = move_tx.clone();
            tokio::spawn(async move {
                let choice = match source.choose(&board, mark).await {
                    Ok(choice) => choice,
                    Err(e) => {
                        // Only reachable on a full board, which is terminal.
                        warn!(error = %e, "automated source produced no move");
                        return;
                    }
                };
                // Pacing delay so the move lands at human speed.
                tokio::time::sleep(move_delay).await;
                let _ = tx.send(AiMove { epoch, choice });
            });
        }

        while let Ok(msg) = move_rx.try_recv() {
            app.apply_ai_move(msg);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
