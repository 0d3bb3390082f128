//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains the rules of a falling-block puzzle on a fixed 9x18 grid:
//! the board, the falling piece, lateral movement, gravity, locking, line
//! clearing and top-out. It has **zero dependencies** on UI, input or timing:
//!
//! - **Deterministic**: the only randomness comes from the generator passed to
//!   [`generate_piece`]; [`SimpleRng`] replays the same pieces for the same seed
//! - **Value semantics**: a [`GameState`] owns its board by value, so copies
//!   never share rows
//! - **No hidden failure**: blocked moves and landings are return values;
//!   only broken contracts surface as [`ContractViolation`]
//!
//! # Module Structure
//!
//! - [`board`]: 9x18 surface with collision checks and line clearing
//! - [`game_state`]: falling piece + surface + terminated flag, move and advance
//! - [`pieces`]: the fixed catalog of seven piece shapes
//! - [`shape`]: four absolute cells, translation and spawn placement
//! - [`rng`]: seeded LCG usable as a `rand::RngCore`
//! - [`rules`]: value-returning entry points
//! - [`snapshot`]: plain-data copy for renderers
//!
//! # Game Rules
//!
//! - Pieces have one fixed orientation; there is no rotation
//! - A new piece enters with its top row at y = 0, horizontally centered
//! - Each advance drops the piece one row; when it cannot drop it locks,
//!   full rows vanish and the caller's next piece spawns
//! - If the spawn cells are already filled the game is over for good
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{advance, create_game, generate_piece, move_piece, SimpleRng};
//! use falling_blocks_core::types::{Direction, PieceKind};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut state = create_game(generate_piece(Some(PieceKind::I), &mut rng));
//! let mut next = generate_piece(None, &mut rng);
//!
//! state = move_piece(&state, Direction::Left);
//! for _ in 0..20 {
//!     let (new_state, changed) = advance(&state, &next);
//!     state = new_state;
//!     if changed {
//!         next = generate_piece(None, &mut rng);
//!     }
//! }
//!
//! assert_eq!(state.board().filled_count(), 4);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod shape;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::ContractViolation;
pub use game_state::{AdvanceOutcome, GameState};
pub use pieces::{generate_piece, get_offsets, random_kind};
pub use rng::SimpleRng;
pub use rules::{
    advance, create_game, current_piece, dimensions, is_surface, move_piece, terminated,
};
pub use shape::{CellPos, Shape};
pub use snapshot::GameSnapshot;
