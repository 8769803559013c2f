//! Host screen state.
//!
//! `App` owns one session plus everything the screens need to render it:
//! the resolved reward plan, the player's running totals, the optional
//! catalog for the "up next" hint, the choice cursor and the current
//! feedback flash.

use log::warn;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::catalog::{CatalogEntry, GameCatalog};
use crate::engine::{ConfigError, Engine, Phase, SubmitOutcome};
use crate::feedback::FeedbackEvent;
use crate::models::{AppState, GameSpec, QuizItem};
use crate::rewards::{LearnerProfile, RewardGrant, RewardLedger, RewardOverrides, RewardPlan};
use crate::session::Session;

pub struct App {
    pub state: AppState,
    game_id: String,
    title: String,
    tagline: Option<String>,
    session: Session,
    plan: RewardPlan,
    profile: LearnerProfile,
    catalog: Option<GameCatalog>,
    selected: usize,
    flash: Option<FeedbackEvent>,
    last_grant: Option<RewardGrant>,
}

impl App {
    /// Build the host for one game. Returns the receiving end of the
    /// feedback channel alongside, for the event loop to drain.
    pub fn new(
        spec: GameSpec,
        caller_rewards: Option<RewardOverrides>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<FeedbackEvent>), ConfigError> {
        let plan = RewardPlan::resolve(spec.rewards.as_ref(), caller_rewards.as_ref());
        let game_id = spec.id.clone();
        let title = spec.title.clone();
        let tagline = spec.tagline.clone();

        let (tx, rx) = mpsc::unbounded_channel();
        let engine = Engine::new(spec.into_items())?;
        let session = Session::new(engine).with_feedback(tx);

        let app = Self {
            state: AppState::Welcome,
            game_id,
            title,
            tagline,
            session,
            plan,
            profile: LearnerProfile::default(),
            catalog: None,
            selected: 0,
            flash: None,
            last_grant: None,
        };
        Ok((app, rx))
    }

    pub fn set_catalog(&mut self, catalog: GameCatalog) {
        self.catalog = Some(catalog);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    pub fn plan(&self) -> RewardPlan {
        self.plan
    }

    pub fn profile(&self) -> LearnerProfile {
        self.profile
    }

    pub fn current_item(&self) -> &QuizItem {
        self.session.engine().current_item()
    }

    pub fn item_number(&self) -> usize {
        self.session.engine().current_index() + 1
    }

    pub fn total_items(&self) -> usize {
        self.session.engine().total_items()
    }

    pub fn score(&self) -> usize {
        self.session.engine().score()
    }

    pub fn selected_choice(&self) -> usize {
        self.selected
    }

    /// True while the current item is locked behind its feedback delay.
    pub fn answered(&self) -> bool {
        self.session.engine().phase() == Phase::Locked
    }

    pub fn flash(&self) -> Option<FeedbackEvent> {
        self.flash
    }

    pub fn last_grant(&self) -> Option<RewardGrant> {
        self.last_grant
    }

    /// The catalog entry after this game, for the results screen hint.
    pub fn next_game(&self) -> Option<&CatalogEntry> {
        self.catalog.as_ref()?.next_after(&self.game_id)
    }

    pub fn select_next_choice(&mut self) {
        let n = self.current_item().choices.len();
        self.selected = (self.selected + 1) % n;
    }

    pub fn select_previous_choice(&mut self) {
        let n = self.current_item().choices.len();
        self.selected = (self.selected + n - 1) % n;
    }

    pub fn start_game(&mut self) {
        self.state = AppState::Quiz;
    }

    /// Submit the choice under the cursor. Locked items and the terminal
    /// state ignore this, so key repeat cannot double-score.
    pub fn submit_selected(&mut self) {
        let choice_id = {
            let item = self.current_item();
            match item.choices.get(self.selected) {
                Some(choice) => choice.id.clone(),
                None => return,
            }
        };

        match self.session.submit(&choice_id) {
            Ok(SubmitOutcome::Scored { .. }) | Ok(SubmitOutcome::Ignored) => {}
            Err(e) => warn!("dropped submission: {}", e),
        }
    }

    pub fn show_feedback(&mut self, cue: FeedbackEvent) {
        self.flash = Some(cue);
    }

    pub fn advance_deadline(&self) -> Option<Instant> {
        self.session.advance_deadline()
    }

    /// Apply the due advance. Reaching the end of the run credits the
    /// payout and switches to the results screen.
    pub fn fire_advance(&mut self) {
        self.flash = None;
        match self.session.fire_advance() {
            Phase::Terminal => {
                let grant = self.plan.payout(self.score());
                self.profile.credit(&self.game_id, grant);
                self.last_grant = Some(grant);
                self.state = AppState::Result;
            }
            Phase::Awaiting | Phase::Locked => {
                self.selected = 0;
            }
        }
    }

    /// Back to the welcome screen with a fresh run. Wallet totals stay;
    /// replaying a game earns again.
    pub fn restart(&mut self) {
        self.session.reset();
        self.selected = 0;
        self.flash = None;
        self.last_grant = None;
        self.state = AppState::Welcome;
    }
}
