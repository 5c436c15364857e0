//! Turn engine for draughts: move submission, captures, promotion, and turn order.

pub mod capture;
pub mod config;
pub mod game;

pub use capture::piece_can_capture;
pub use config::GameConfig;
pub use game::{GameState, MoveOutcome};
