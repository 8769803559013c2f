//! Serde model of a game file.
//!
//! A game is a JSON document naming the mini-game and listing its items.
//! Reflex items (snap trust/block calls) are normalized into two-choice
//! items here, so the rest of the crate only ever scores choices.

use serde::Deserialize;

use crate::rewards::RewardOverrides;

use super::item::{Choice, Prompt, QuizItem};

/// Choice id given to the "accept" action of a reflex item.
pub const REFLEX_ACCEPT: &str = "accept";
/// Choice id given to the "reject" action of a reflex item.
pub const REFLEX_REJECT: &str = "reject";

/// A complete mini-game as loaded from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSpec {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Per-game reward parameters; anything left unset falls through to
    /// the caller override and then the static defaults.
    #[serde(default)]
    pub rewards: Option<RewardOverrides>,
    pub items: Vec<ItemSpec>,
}

/// One item as authored in the game file.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemSpec {
    /// Pick the right option among several.
    MultipleChoice {
        id: String,
        prompt: Prompt,
        choices: Vec<ChoiceSpec>,
    },
    /// One scenario, one yes/no call (e.g. "report" vs "looks safe").
    /// `truth` is the hidden property of the scenario; taking the
    /// `accept` action is correct exactly when it is set.
    Reflex {
        id: String,
        prompt: Prompt,
        truth: bool,
        accept: String,
        reject: String,
    },
}

/// One authored answer option.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceSpec {
    pub id: String,
    pub display: String,
    #[serde(default)]
    pub correct: bool,
}

impl GameSpec {
    /// Normalize the authored items into engine items.
    pub fn into_items(self) -> Vec<QuizItem> {
        self.items.into_iter().map(ItemSpec::into_item).collect()
    }
}

impl ItemSpec {
    fn into_item(self) -> QuizItem {
        match self {
            ItemSpec::MultipleChoice { id, prompt, choices } => QuizItem {
                id,
                prompt,
                choices: choices
                    .into_iter()
                    .map(|c| Choice {
                        id: c.id,
                        display: c.display,
                        correct: c.correct,
                    })
                    .collect(),
            },
            ItemSpec::Reflex {
                id,
                prompt,
                truth,
                accept,
                reject,
            } => QuizItem {
                id,
                prompt,
                choices: vec![
                    Choice {
                        id: REFLEX_ACCEPT.to_string(),
                        display: accept,
                        correct: truth,
                    },
                    Choice {
                        id: REFLEX_REJECT.to_string(),
                        display: reject,
                        correct: !truth,
                    },
                ],
            },
        }
    }
}
