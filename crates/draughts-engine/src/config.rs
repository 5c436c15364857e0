//! Game configuration knobs.

use draughts_core::Color;

/// Settings fixed when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The side that makes the first move.
    pub first_player: Color,
    /// Only a legal *capturing* move from the landing square keeps the turn.
    ///
    /// When `false`, any legal move found by the continuation probe keeps the
    /// turn, which lets a king's plain slide count as a continuation.
    pub strict_continuation: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Color::Light,
            strict_continuation: false,
        }
    }
}

impl GameConfig {
    /// Return this config with `color` moving first.
    pub fn with_first_player(mut self, color: Color) -> Self {
        self.first_player = color;
        self
    }

    /// Return this config with the strict continuation rule set to `strict`.
    pub fn with_strict_continuation(mut self, strict: bool) -> Self {
        self.strict_continuation = strict;
        self
    }
}
