//! One run of a game, with the timed auto-advance.
//!
//! A [`Session`] wraps the engine and turns each scored submission into a
//! feedback cue plus an advance deadline. The deadline is plain data: the
//! host arms a `sleep_until` on it inside its event loop and calls
//! [`Session::fire_advance`] when it elapses. Dropping the host (and with
//! it the session and the armed sleep) cancels a pending advance instead
//! of applying it to a torn-down run.

use std::time::Duration;

use log::debug;
use tokio::time::Instant;
use uuid::Uuid;

use crate::engine::{Engine, InvalidChoice, Phase, SubmitOutcome};
use crate::feedback::{FeedbackEvent, FeedbackSink, NullFeedback};

/// How long the feedback stays on screen before the next item replaces
/// it. Purely presentational; incorrect answers linger a little less.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceDelays {
    pub correct: Duration,
    pub incorrect: Duration,
}

impl Default for AdvanceDelays {
    fn default() -> Self {
        Self {
            correct: Duration::from_millis(900),
            incorrect: Duration::from_millis(600),
        }
    }
}

impl AdvanceDelays {
    fn for_outcome(&self, correct: bool) -> Duration {
        if correct { self.correct } else { self.incorrect }
    }
}

pub struct Session {
    id: Uuid,
    engine: Engine,
    delays: AdvanceDelays,
    feedback: Box<dyn FeedbackSink>,
    pending_advance: Option<Instant>,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Self {
            id: Uuid::new_v4(),
            engine,
            delays: AdvanceDelays::default(),
            feedback: Box::new(NullFeedback),
            pending_advance: None,
        }
    }

    pub fn with_delays(mut self, delays: AdvanceDelays) -> Self {
        self.delays = delays;
        self
    }

    pub fn with_feedback(mut self, sink: impl FeedbackSink + 'static) -> Self {
        self.feedback = Box::new(sink);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Submit a response for the current item. A scored submission
    /// notifies the feedback sink and schedules the advance; an ignored
    /// one changes nothing.
    pub fn submit(&mut self, choice_id: &str) -> Result<SubmitOutcome, InvalidChoice> {
        let outcome = self.engine.submit(choice_id)?;

        if let SubmitOutcome::Scored { correct } = outcome {
            let points = if correct { 1 } else { 0 };
            self.feedback.notify(FeedbackEvent {
                points_awarded: points,
                was_correct: correct,
            });

            let delay = self.delays.for_outcome(correct);
            self.pending_advance = Some(Instant::now() + delay);
            debug!(
                "session {}: item {} scored (correct: {}), advancing in {:?}",
                self.id,
                self.engine.current_index(),
                correct,
                delay
            );
        }

        Ok(outcome)
    }

    /// Deadline of the scheduled advance, if one is pending.
    pub fn advance_deadline(&self) -> Option<Instant> {
        self.pending_advance
    }

    /// Apply the scheduled advance now.
    pub fn fire_advance(&mut self) -> Phase {
        self.pending_advance = None;
        let phase = self.engine.advance();
        debug!("session {}: advanced to {:?}", self.id, phase);
        phase
    }

    /// Back to the start of the same item list. Clears any pending
    /// advance first, so a stale deadline cannot touch the fresh run.
    pub fn reset(&mut self) {
        self.pending_advance = None;
        self.engine.reset();
        debug!("session {}: reset", self.id);
    }
}
