//! Navigation actions for `walk`

use fuelstory_core::{SceneCoordinator, ScenePass, StoryResult};

/// Scene navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance to the following scene
    Next,
    /// Return to the preceding scene
    Prev,
    /// Jump to a scene by number
    GoTo(u8),
}

impl Action {
    /// Apply the action to the coordinator
    pub fn apply<'a>(&self, coordinator: &'a mut SceneCoordinator) -> StoryResult<&'a ScenePass> {
        match self {
            Action::Next => coordinator.next(),
            Action::Prev => coordinator.prev(),
            Action::GoTo(n) => coordinator.go_to(*n),
        }
    }
}

/// Parse an action word
///
/// Accepts `next`/`n`/`l`, `prev`/`p`/`h`, or a scene number. Numbers are not
/// range-checked here; the coordinator rejects them.
pub fn parse_action(word: &str) -> Option<Action> {
    match word.trim().to_ascii_lowercase().as_str() {
        "next" | "n" | "l" | "right" => Some(Action::Next),
        "prev" | "p" | "h" | "left" => Some(Action::Prev),
        other => other.parse::<u8>().ok().map(Action::GoTo),
    }
}
