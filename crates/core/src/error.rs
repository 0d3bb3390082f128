//! Contract violations - caller errors the engine refuses to paper over

use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// A call that broke the engine's contract.
///
/// Ordinary gameplay outcomes (a blocked move, a piece landing, a top-out)
/// are never reported through this type; they are plain return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("cell ({x}, {y}) is outside the {}x{} board", BOARD_WIDTH, BOARD_HEIGHT)]
    OutOfBounds { x: i32, y: i32 },

    #[error("a shape needs exactly 4 cells, got {got}")]
    WrongCellCount { got: usize },

    #[error("shape lists cell ({x}, {y}) more than once")]
    DuplicateCell { x: i32, y: i32 },

    #[error("shape spans {width}x{height} cells and cannot fit on the board")]
    ShapeTooLarge { width: i64, height: i64 },

    #[error("piece cell ({x}, {y}) overlaps the locked surface")]
    Overlap { x: i32, y: i32 },
}
