//! Sequential scored quiz engine.
//!
//! Drives a finite ordered list of items, accepts exactly one scored
//! response per item, and freezes once the last item has been advanced
//! past. The engine is synchronous; the submit→advance delay lives in
//! [`crate::session`].

use crate::models::QuizItem;

/// Where the run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting exactly one submission for the current item.
    Awaiting,
    /// Submission recorded, waiting for the advance to fire.
    Locked,
    /// Past the last item. Index and score are frozen until `reset`.
    Terminal,
}

/// Rejected game content, detected before a run can start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a game needs at least one item")]
    NoItems,

    #[error("item `{item_id}` has no choices")]
    NoChoices { item_id: String },

    #[error("item `{item_id}` has no correct choice")]
    NoCorrectChoice { item_id: String },

    #[error("duplicate item id `{item_id}`")]
    DuplicateItemId { item_id: String },

    #[error("duplicate choice id `{choice_id}` in item `{item_id}`")]
    DuplicateChoiceId { item_id: String, choice_id: String },
}

/// A submission naming a choice the current item does not have.
///
/// The submission is rejected outright: the item stays open and the
/// score is untouched. The same policy applies at every index.
#[derive(Debug, thiserror::Error)]
#[error("item `{item_id}` has no choice `{choice_id}`")]
pub struct InvalidChoice {
    pub item_id: String,
    pub choice_id: String,
}

/// What a call to [`Engine::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was scored against the current item.
    Scored { correct: bool },
    /// Dropped without effect: the item is already locked or the run is
    /// over. Duplicate UI events (double-click, key repeat) land here.
    Ignored,
}

/// The quiz state machine. `Awaiting --submit--> Locked --advance-->
/// Awaiting(next) | Terminal`, with `Terminal` exited only by `reset`.
pub struct Engine {
    items: Vec<QuizItem>,
    index: usize,
    score: usize,
    phase: Phase,
}

impl Engine {
    /// Build an engine over `items`, validating the content first.
    pub fn new(items: Vec<QuizItem>) -> Result<Self, ConfigError> {
        validate(&items)?;
        Ok(Self {
            items,
            index: 0,
            score: 0,
            phase: Phase::Awaiting,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Index of the item currently on screen. Stays at the last index
    /// once the run is terminal.
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn current_item(&self) -> &QuizItem {
        &self.items[self.index]
    }

    /// Record a response for the current item.
    ///
    /// At most one submission per item is scored; anything after that is
    /// [`SubmitOutcome::Ignored`]. An unknown choice id is an
    /// [`InvalidChoice`] error and leaves the item open.
    pub fn submit(&mut self, choice_id: &str) -> Result<SubmitOutcome, InvalidChoice> {
        if self.phase != Phase::Awaiting {
            return Ok(SubmitOutcome::Ignored);
        }

        let item = &self.items[self.index];
        let Some(choice) = item.choice(choice_id) else {
            return Err(InvalidChoice {
                item_id: item.id.clone(),
                choice_id: choice_id.to_string(),
            });
        };

        let correct = choice.correct;
        if correct {
            self.score += 1;
        }
        self.phase = Phase::Locked;
        Ok(SubmitOutcome::Scored { correct })
    }

    /// Move past the locked item. On the last item this makes the run
    /// terminal instead of bumping the index. A no-op unless locked, so
    /// a stray timer cannot skip an unanswered item.
    pub fn advance(&mut self) -> Phase {
        if self.phase == Phase::Locked {
            if self.index + 1 < self.items.len() {
                self.index += 1;
                self.phase = Phase::Awaiting;
            } else {
                self.phase = Phase::Terminal;
            }
        }
        self.phase
    }

    /// Return to the state right after construction, keeping the items.
    pub fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
        self.phase = Phase::Awaiting;
    }
}

fn validate(items: &[QuizItem]) -> Result<(), ConfigError> {
    if items.is_empty() {
        return Err(ConfigError::NoItems);
    }

    let mut seen_items = std::collections::HashSet::new();
    for item in items {
        if !seen_items.insert(item.id.as_str()) {
            return Err(ConfigError::DuplicateItemId {
                item_id: item.id.clone(),
            });
        }

        if item.choices.is_empty() {
            return Err(ConfigError::NoChoices {
                item_id: item.id.clone(),
            });
        }
        if !item.choices.iter().any(|c| c.correct) {
            return Err(ConfigError::NoCorrectChoice {
                item_id: item.id.clone(),
            });
        }

        let mut seen_choices = std::collections::HashSet::new();
        for choice in &item.choices {
            if !seen_choices.insert(choice.id.as_str()) {
                return Err(ConfigError::DuplicateChoiceId {
                    item_id: item.id.clone(),
                    choice_id: choice.id.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, Prompt, QuizItem};

    fn item(id: &str, correct_id: &str, wrong_id: &str) -> QuizItem {
        QuizItem {
            id: id.to_string(),
            prompt: Prompt {
                emoji: None,
                text: format!("prompt {}", id),
                detail: None,
            },
            choices: vec![
                Choice {
                    id: wrong_id.to_string(),
                    display: "wrong".to_string(),
                    correct: false,
                },
                Choice {
                    id: correct_id.to_string(),
                    display: "right".to_string(),
                    correct: true,
                },
            ],
        }
    }

    fn engine(n: usize) -> Engine {
        let items = (0..n).map(|i| item(&format!("q{}", i), "y", "x")).collect();
        Engine::new(items).unwrap()
    }

    #[test]
    fn all_correct_reaches_full_score() {
        let mut e = engine(3);
        for _ in 0..3 {
            assert_eq!(
                e.submit("y").unwrap(),
                SubmitOutcome::Scored { correct: true }
            );
            e.advance();
        }
        assert!(e.is_terminal());
        assert_eq!(e.score(), 3);
    }

    #[test]
    fn index_is_monotone_and_bounded() {
        let mut e = engine(4);
        let mut last = 0;
        while !e.is_terminal() {
            let idx = e.current_index();
            assert!(idx >= last);
            assert!(idx < e.total_items());
            last = idx;
            e.submit("x").unwrap();
            e.advance();
        }
        assert_eq!(e.current_index(), e.total_items() - 1);
    }

    #[test]
    fn second_submit_before_advance_is_ignored() {
        let mut e = engine(2);
        e.submit("y").unwrap();
        assert_eq!(e.score(), 1);

        // Same item again, correct answer or not: no effect.
        assert_eq!(e.submit("y").unwrap(), SubmitOutcome::Ignored);
        assert_eq!(e.submit("x").unwrap(), SubmitOutcome::Ignored);
        assert_eq!(e.score(), 1);
        assert_eq!(e.phase(), Phase::Locked);
    }

    #[test]
    fn submit_after_terminal_is_ignored() {
        let mut e = engine(1);
        e.submit("y").unwrap();
        e.advance();
        assert!(e.is_terminal());

        assert_eq!(e.submit("y").unwrap(), SubmitOutcome::Ignored);
        assert_eq!(e.score(), 1);
    }

    #[test]
    fn reset_restores_the_start_state() {
        let mut e = engine(2);
        e.submit("y").unwrap();
        e.advance();
        e.submit("x").unwrap();
        e.advance();
        assert!(e.is_terminal());

        e.reset();
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.score(), 0);
        assert_eq!(e.phase(), Phase::Awaiting);
    }

    #[test]
    fn single_item_run_terminates_after_one_pair() {
        let mut e = engine(1);
        e.submit("x").unwrap();
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.advance(), Phase::Terminal);
        // The index never moved.
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.score(), 0);
    }

    #[test]
    fn correct_choice_then_terminal_keeps_score() {
        // items = [{x: wrong, y: right}], submit("y") → score 1, then
        // the advance makes the run terminal with the score intact.
        let mut e = engine(1);
        assert_eq!(
            e.submit("y").unwrap(),
            SubmitOutcome::Scored { correct: true }
        );
        assert_eq!(e.score(), 1);
        assert_eq!(e.advance(), Phase::Terminal);
        assert_eq!(e.score(), 1);
    }

    #[test]
    fn two_wrong_answers_score_zero() {
        let mut e = engine(2);
        assert_eq!(
            e.submit("x").unwrap(),
            SubmitOutcome::Scored { correct: false }
        );
        e.advance();
        e.submit("x").unwrap();
        assert_eq!(e.advance(), Phase::Terminal);
        assert_eq!(e.score(), 0);
    }

    #[test]
    fn unknown_choice_is_rejected_and_leaves_the_item_open() {
        let mut e = engine(1);
        let err = e.submit("nope").unwrap_err();
        assert_eq!(err.item_id, "q0");
        assert_eq!(err.choice_id, "nope");

        // Rejected, not scored-as-incorrect: still awaiting.
        assert_eq!(e.phase(), Phase::Awaiting);
        assert_eq!(e.score(), 0);
        assert_eq!(
            e.submit("y").unwrap(),
            SubmitOutcome::Scored { correct: true }
        );
    }

    #[test]
    fn unknown_choice_policy_holds_at_every_index() {
        let mut e = engine(3);
        for _ in 0..3 {
            assert!(e.submit("nope").is_err());
            assert_eq!(e.phase(), Phase::Awaiting);
            e.submit("y").unwrap();
            e.advance();
        }
        assert!(e.is_terminal());
        assert_eq!(e.score(), 3);
    }

    #[test]
    fn advance_without_submit_does_nothing() {
        let mut e = engine(2);
        assert_eq!(e.advance(), Phase::Awaiting);
        assert_eq!(e.current_index(), 0);
    }

    #[test]
    fn score_never_exceeds_items_seen() {
        let mut e = engine(5);
        while !e.is_terminal() {
            e.submit("y").unwrap();
            assert!(e.score() <= e.current_index() + 1);
            e.advance();
        }
    }

    #[test]
    fn empty_item_list_is_a_config_error() {
        assert!(matches!(Engine::new(Vec::new()), Err(ConfigError::NoItems)));
    }

    #[test]
    fn item_without_choices_is_a_config_error() {
        let bad = QuizItem {
            id: "q0".to_string(),
            prompt: Prompt {
                emoji: None,
                text: "?".to_string(),
                detail: None,
            },
            choices: Vec::new(),
        };
        assert!(matches!(
            Engine::new(vec![bad]),
            Err(ConfigError::NoChoices { .. })
        ));
    }

    #[test]
    fn item_without_a_correct_choice_is_a_config_error() {
        let mut bad = item("q0", "y", "x");
        for c in &mut bad.choices {
            c.correct = false;
        }
        assert!(matches!(
            Engine::new(vec![bad]),
            Err(ConfigError::NoCorrectChoice { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_config_errors() {
        let items = vec![item("q0", "y", "x"), item("q0", "y", "x")];
        assert!(matches!(
            Engine::new(items),
            Err(ConfigError::DuplicateItemId { .. })
        ));

        let twin = item("q0", "y", "y");
        assert!(matches!(
            Engine::new(vec![twin]),
            Err(ConfigError::DuplicateChoiceId { .. })
        ));
    }
}
