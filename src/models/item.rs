use serde::Deserialize;

/// Display payload for one item. The engine never looks inside it.
#[derive(Debug, Clone, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub emoji: Option<String>,
    pub text: String,
    /// Longer situation text shown under the headline, if any.
    #[serde(default)]
    pub detail: Option<String>,
}

/// One selectable answer belonging to an item.
#[derive(Debug, Clone)]
pub struct Choice {
    pub id: String,
    pub display: String,
    pub correct: bool,
}

/// One question or scenario in a game, already normalized so that
/// correctness lives on the choices.
#[derive(Debug, Clone)]
pub struct QuizItem {
    pub id: String,
    pub prompt: Prompt,
    pub choices: Vec<Choice>,
}

impl QuizItem {
    /// Look up a choice by id.
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}
