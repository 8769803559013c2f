//! # netwise
//!
//! Terminal mini-games for digital-citizenship lessons: short scored
//! rounds of "spot the phish" style items, with a coin/XP payout at the
//! end of each run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use netwise::{Game, GameError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GameError> {
//!     // Load a game definition from a JSON file
//!     let game = Game::from_json("games/phishing-inbox.json")?;
//!
//!     // Play it in the terminal
//!     game.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The pieces compose separately too: [`Engine`] is the bare state
//! machine, [`Session`] adds the timed auto-advance, and [`App`] is the
//! terminal host around both.

mod app;
mod catalog;
mod data;
mod engine;
mod feedback;
mod models;
mod rewards;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

pub use app::App;
pub use catalog::{CatalogEntry, DuplicateGameId, GameCatalog};
pub use data::{LoadError, load_catalog, load_game};
pub use engine::{ConfigError, Engine, InvalidChoice, Phase, SubmitOutcome};
pub use feedback::{FeedbackEvent, FeedbackSink, NullFeedback};
pub use models::{AppState, Choice, ChoiceSpec, GameSpec, ItemSpec, Prompt, QuizItem};
pub use rewards::{
    LearnerProfile, RewardGrant, RewardLedger, RewardOverrides, RewardPlan,
};
pub use session::{AdvanceDelays, Session};

/// Error type for building and running a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Error loading the game or catalog file.
    #[error("failed to load content: {0}")]
    Load(#[from] LoadError),
    /// The game content cannot back a playable run.
    #[error("invalid game content: {0}")]
    Config(#[from] ConfigError),
    /// IO error during play.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A playable mini-game bound to a terminal host.
pub struct Game {
    app: App,
    feedback: mpsc::UnboundedReceiver<FeedbackEvent>,
}

impl Game {
    /// Build a game from an already-loaded spec.
    pub fn new(spec: GameSpec) -> Result<Self, GameError> {
        Self::with_rewards(spec, None)
    }

    /// Build a game with caller-side reward overrides. Values pinned in
    /// the game file still win over these.
    pub fn with_rewards(
        spec: GameSpec,
        overrides: Option<RewardOverrides>,
    ) -> Result<Self, GameError> {
        let (app, feedback) = App::new(spec, overrides)?;
        Ok(Self { app, feedback })
    }

    /// Load a game from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Self::new(load_game(path)?)
    }

    /// Attach the platform catalog, enabling the "up next" hint.
    pub fn with_catalog(mut self, catalog: GameCatalog) -> Self {
        self.app.set_catalog(catalog);
        self
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run the game in the terminal.
    ///
    /// Takes over the terminal, plays until the user quits, and restores
    /// the terminal before returning.
    pub async fn run(mut self) -> Result<(), GameError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &mut self.feedback).await;
        terminal::restore()?;
        result
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    feedback: &mut mpsc::UnboundedReceiver<FeedbackEvent>,
) -> Result<(), GameError> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Deadline is read fresh each turn; quitting the loop drops the
        // armed sleep, so a pending advance dies with the session.
        let deadline = app.advance_deadline();

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_input(app, key.code) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            Some(cue) = feedback.recv() => {
                app.show_feedback(cue);
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                app.fire_advance();
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_game();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_choice();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_choice();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_selected();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
