//! Game state module - the falling piece, the surface and the end flag
//!
//! This module ties together the board and the current piece. It handles
//! lateral movement, gravity, locking, line clears, spawning and top-out.
//!
//! The state machine has two states:
//!
//! - **Falling**: `terminated == false`; moves and advances apply.
//! - **Terminated**: reached when a new piece cannot be placed at its spawn
//!   position. Absorbing: every later move or advance is a no-op.
//!
//! The current piece is always held as a [`Shape`] field and is never written
//! into the board until it locks.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::ContractViolation;
use crate::shape::Shape;
use crate::snapshot::GameSnapshot;
use crate::types::Direction;

/// What a single gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The piece moved down one row.
    Descended,
    /// The piece locked, lines were cleared and the next piece spawned.
    Locked { lines_cleared: u32 },
    /// The piece locked but the next piece did not fit; the game is over.
    ToppedOut { lines_cleared: u32 },
    /// The game was already over; nothing changed.
    Halted,
}

impl AdvanceOutcome {
    /// True when the supplied next piece was consumed, so the caller must
    /// provide a fresh one for the following advance.
    pub fn changed_piece(&self) -> bool {
        matches!(
            self,
            AdvanceOutcome::Locked { .. } | AdvanceOutcome::ToppedOut { .. }
        )
    }

    pub fn lines_cleared(&self) -> u32 {
        match self {
            AdvanceOutcome::Locked { lines_cleared }
            | AdvanceOutcome::ToppedOut { lines_cleared } => *lines_cleared,
            AdvanceOutcome::Descended | AdvanceOutcome::Halted => 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current: Shape,
    terminated: bool,
}

impl GameState {
    /// Start a game on an empty board with `initial` at its spawn position.
    pub fn new(initial: Shape) -> Self {
        Self {
            board: Board::new(),
            current: initial.spawn_position(),
            terminated: false,
        }
    }

    /// Build a falling state from a prepared board and an already placed piece.
    ///
    /// The piece is taken as-is (no spawn translation) and must lie on the
    /// board without touching the surface.
    pub fn from_parts(board: Board, piece: Shape) -> Result<Self, ContractViolation> {
        for &(x, y) in piece.cells() {
            if board.is_out_of_bounds(x, y) {
                return Err(ContractViolation::OutOfBounds { x, y });
            }
            if board.is_occupied(x, y) {
                return Err(ContractViolation::Overlap { x, y });
            }
        }
        Ok(Self {
            board,
            current: piece,
            terminated: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells of the falling piece
    pub fn current_piece(&self) -> &Shape {
        &self.current
    }

    pub fn terminated(&self) -> bool {
        self.terminated
    }

    /// (width, height) of the board
    pub fn dimensions(&self) -> (u8, u8) {
        self.board.dimensions()
    }

    /// Whether (x, y) is part of the locked surface.
    pub fn is_surface(&self, x: i32, y: i32) -> Result<bool, ContractViolation> {
        self.board.is_surface(x, y)
    }

    /// Try to shift the current piece one column.
    ///
    /// Returns false, leaving the state untouched, when the game is over or
    /// the shifted piece would leave the board or overlap the surface.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if self.terminated {
            return false;
        }

        let candidate = self.current.translate(direction.dx(), 0);
        if !self.board.fits(&candidate) {
            trace!(direction = direction.as_str(), "move blocked");
            return false;
        }

        self.current = candidate;
        true
    }

    /// Apply one gravity step.
    ///
    /// The piece drops a row if it can. Otherwise it locks into the surface,
    /// full rows are removed, and `next` is placed at its spawn position; if
    /// that spot is already taken the game ends with `next` left there as the
    /// current piece. Lock, clear and spawn check happen in that order.
    pub fn advance(&mut self, next: &Shape) -> AdvanceOutcome {
        if self.terminated {
            return AdvanceOutcome::Halted;
        }

        let lowered = self.current.translate(0, 1);
        if self.board.fits(&lowered) {
            trace!("piece descended");
            self.current = lowered;
            return AdvanceOutcome::Descended;
        }

        let locked = self.board.lock(&self.current);
        debug_assert!(locked, "falling piece overlapped the surface");

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        debug!(
            lines_cleared,
            filled = self.board.filled_count(),
            "piece locked"
        );

        let spawned = next.spawn_position();
        self.current = spawned;

        if !self.board.fits(&spawned) {
            self.terminated = true;
            info!(lines_cleared, "spawn position blocked, game over");
            return AdvanceOutcome::ToppedOut { lines_cleared };
        }

        AdvanceOutcome::Locked { lines_cleared }
    }

    /// Value form of [`GameState::try_move`]: the moved state, or an
    /// identical copy when the move is rejected.
    pub fn moved(&self, direction: Direction) -> GameState {
        let mut next = self.clone();
        next.try_move(direction);
        next
    }

    /// Value form of [`GameState::advance`]: the new state and whether the
    /// next piece was consumed.
    pub fn advanced(&self, next: &Shape) -> (GameState, bool) {
        let mut state = self.clone();
        let outcome = state.advance(next);
        (state, outcome.changed_piece())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.piece = *self.current.cells();
        out.terminated = self.terminated;
        out.overlay_piece();
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
