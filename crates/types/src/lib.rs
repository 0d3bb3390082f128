//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the rules engine and by
//! anything that drives it (input sources, renderers, piece suppliers).
//! All types are pure data with no external dependencies.
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 9 columns (indexed 0-8)
//! - **Height**: 18 rows (indexed 0-17)
//! - **Origin**: (0, 0) is the top-left corner, y grows downward
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Direction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Kinds are listed in catalog order
//! assert_eq!(PieceKind::ALL[5], PieceKind::LMirror);
//! assert_eq!(PieceKind::LMirror.index(), 5);
//!
//! // Directions carry their horizontal offset
//! assert_eq!(Direction::Left.dx(), -1);
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 9);
//! assert_eq!(BOARD_HEIGHT, 18);
//! ```

/// Board width in cells (9 columns)
pub const BOARD_WIDTH: u8 = 9;

/// Board height in cells (18 rows)
pub const BOARD_HEIGHT: u8 = 18;

/// Number of cells a piece occupies
pub const PIECE_CELLS: usize = 4;

/// The seven piece kinds
///
/// Pieces have a single fixed orientation:
/// - **Cube**: 2x2 square
/// - **Z**: horizontal zig-zag
/// - **S**: vertical zig-zag
/// - **I**: vertical bar of four
/// - **L**: vertical bar with a foot to the right
/// - **LMirror**: horizontal bar with a foot below its right end
/// - **T**: horizontal bar with a stem below its middle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Cube,
    Z,
    S,
    I,
    L,
    LMirror,
    T,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Cube,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::L,
        PieceKind::LMirror,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Lateral movement direction
///
/// The discriminant is the horizontal offset applied by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = -1,
    Right = 1,
}

impl Direction {
    /// Horizontal offset of one step in this direction
    pub fn dx(&self) -> i32 {
        *self as i32
    }

    /// The reverse direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lowercase name, as used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A cell on the game board
///
/// Only consolidated (locked) cells are ever `Filled`; the falling piece is
/// tracked separately by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_index_matches_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Left.dx(), -1);
        assert_eq!(Direction::Right.dx(), 1);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Left.as_str(), "left");
    }

    #[test]
    fn test_cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(!Cell::Empty.is_filled());
        assert!(Cell::Filled.is_filled());
    }
}
