//! Terminal 2048 runner (default binary).
//!
//! Owns the terminal, feeds keyboard and mouse-drag input into the board
//! engine, redraws after every state change, and keeps the best score on disk.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::{info, warn};

use tui_2048::config::{init_logging, Config};
use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit, SwipeConfig, SwipeDetector};
use tui_2048::persist::BestScoreStore;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let config = Config::load();
    init_logging(config.log_file.as_deref())?;

    let mut store = BestScoreStore::new(config.best_score_path());
    let mut game = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };
    game.set_best_score(store.load_or_default());
    info!("starting with seed {}", game.seed());

    let mut term = TerminalRenderer::new().with_mouse(config.mouse);
    if !term.mouse_enabled() {
        info!("mouse capture off, drag swipes disabled");
    }
    term.enter()?;

    let result = run(&mut term, &mut game, &mut store);

    // Always try to restore terminal state.
    let _ = term.exit();

    let saved = store.checkpoint(game.best_score()).map(|_| ());
    result.and(saved)
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, store: &mut BestScoreStore) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut swipe = SwipeDetector::new(SwipeConfig::terminal());
    let clock = Instant::now();
    let mut drawn: Option<u64> = None;

    loop {
        // Render only when something visible changed.
        let snap = game.snapshot();
        let fingerprint = snap.fingerprint();
        if drawn != Some(fingerprint) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some(fingerprint);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    apply(game, action, store);
                }
            }
            Event::Mouse(mouse) => {
                let now_ms = clock.elapsed().as_millis() as u64;
                let (x, y) = (mouse.column as f32, mouse.row as f32);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => swipe.press(x, y, now_ms),
                    MouseEventKind::Up(MouseButton::Left) => {
                        if let Some(direction) = swipe.release(x, y, now_ms) {
                            apply(game, GameAction::Move(direction), store);
                        }
                    }
                    _ => {}
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                drawn = None;
            }
            _ => {}
        }
    }
}

/// Apply one action, saving the best score when a game ends or restarts.
fn apply(game: &mut GameState, action: GameAction, store: &mut BestScoreStore) {
    let was_over = game.is_game_over();
    if !game.apply_action(action) {
        return;
    }

    let ended = !was_over && game.is_game_over();
    if ended || action == GameAction::NewGame {
        if let Err(e) = store.checkpoint(game.best_score()) {
            warn!("could not save best score: {:#}", e);
        }
    }
}
