mod game;
mod item;

pub use game::{ChoiceSpec, GameSpec, ItemSpec};
pub use item::{Choice, Prompt, QuizItem};

/// Which screen the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
