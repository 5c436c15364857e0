//! Turn engine: applies validated moves and tracks whose turn it is.

use tracing::{debug, info};

use draughts_core::rules::{CapturePath, validate};
use draughts_core::{Board, Color, IllegalMove, Piece, Square};

use crate::capture::piece_can_capture;
use crate::config::GameConfig;

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Square the piece left.
    pub start: Square,
    /// Square the piece landed on.
    pub end: Square,
    /// Squares whose pieces were removed.
    pub captured: CapturePath,
    /// The moving piece was crowned on landing.
    pub promoted: bool,
    /// The side to move after this one.
    pub next_player: Color,
    /// The mover keeps the turn to continue capturing.
    pub turn_retained: bool,
}

impl MoveOutcome {
    /// Every square whose contents changed: start, end, then the captures.
    pub fn changed_squares(&self) -> impl Iterator<Item = Square> + '_ {
        [self.start, self.end].into_iter().chain(self.captured.squares())
    }
}

/// A game in progress: the board, the side to move, and the game-over flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Color,
    game_over: bool,
    config: GameConfig,
}

impl GameState {
    /// Start a new game from the standard layout with default settings.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Start a new game from the standard layout.
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::starting_position(), config)
    }

    /// Start a game from an arbitrary position, with `config.first_player` to move.
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            current_player: config.first_player,
            game_over: false,
            config,
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Return the side to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Return `true` once the game has been ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Return the settings this game was created with.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Call `f` once for every square in row-major order, row 0 first.
    pub fn traverse<F>(&self, mut f: F)
    where
        F: FnMut(Square, Option<Piece>),
    {
        for sq in Square::all() {
            f(sq, self.board.piece_at(sq));
        }
    }

    /// Move the piece on `start` to `end` for the side to move.
    ///
    /// On success the captured piece is removed, the mover is crowned if it
    /// reached its promotion row, and the turn passes unless the piece can
    /// continue from `end`.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks. The game is left untouched.
    pub fn submit_move(&mut self, start: Square, end: Square) -> Result<MoveOutcome, IllegalMove> {
        let outcome = self.try_move(start, end);
        if let Err(reason) = &outcome {
            debug!(%start, %end, %reason, player = %self.current_player, "move rejected");
        }
        outcome
    }

    /// Copy-make variant of [`submit_move`](Self::submit_move): `self` is not modified.
    ///
    /// # Errors
    ///
    /// Same as [`submit_move`](Self::submit_move).
    pub fn with_move(&self, start: Square, end: Square) -> Result<(GameState, MoveOutcome), IllegalMove> {
        let mut next = self.clone();
        let outcome = next.submit_move(start, end)?;
        Ok((next, outcome))
    }

    /// Hand the turn to the other side without moving.
    ///
    /// This is how a player declines a continuation the engine offered.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::GameOver`] once the game has ended.
    pub fn end_turn(&mut self) -> Result<Color, IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        self.current_player = self.current_player.flip();
        debug!(player = %self.current_player, "turn ended by player");
        Ok(self.current_player)
    }

    /// Mark the game as finished. Every later move is rejected.
    pub fn set_game_over(&mut self) {
        if !self.game_over {
            info!(last_player = %self.current_player, "game over");
        }
        self.game_over = true;
    }

    fn try_move(&mut self, start: Square, end: Square) -> Result<MoveOutcome, IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }

        if let Some(piece) = self.board.piece_at(start)
            && piece.color() != self.current_player
        {
            return Err(IllegalMove::NotYourTurn {
                current: self.current_player,
            });
        }

        let captured = validate(&self.board, self.current_player, start, end)?;

        self.board.move_piece(start, end);
        for sq in captured.squares() {
            self.board.remove(sq);
            debug!(square = %sq, "piece captured");
        }

        let promoted = self.crowns_on(end) && self.board.promote(end);
        if promoted {
            debug!(square = %end, player = %self.current_player, "piece crowned");
        }

        let turn_retained = piece_can_capture(&self.board, end, self.config.strict_continuation);
        if !turn_retained {
            self.current_player = self.current_player.flip();
        }
        debug!(%start, %end, turn_retained, next = %self.current_player, "move applied");

        Ok(MoveOutcome {
            start,
            end,
            captured,
            promoted,
            next_player: self.current_player,
            turn_retained,
        })
    }

    /// Return `true` if the piece on `sq` stands on its own promotion row.
    fn crowns_on(&self, sq: Square) -> bool {
        self.board
            .piece_at(sq)
            .is_some_and(|piece| sq.row() == piece.color().promotion_row())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
