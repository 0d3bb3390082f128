use std::fmt;

use crate::shape::CellPos;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PIECE_CELLS};

/// Grid value of an empty cell
pub const EMPTY: u8 = 0;
/// Grid value of a locked cell
pub const SURFACE: u8 = 1;
/// Grid value of a cell covered by the falling piece
pub const PIECE: u8 = 2;

/// Plain-data copy of a game state for renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub piece: [CellPos; PIECE_CELLS],
    pub terminated: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.piece = [(0, 0); PIECE_CELLS];
        self.terminated = false;
    }

    /// Paint the piece cells that fall on empty grid cells.
    ///
    /// After a top-out the piece overlaps the surface; those cells keep
    /// showing as surface.
    pub(crate) fn overlay_piece(&mut self) {
        for &(x, y) in &self.piece {
            if (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y) {
                let cell = &mut self.board[y as usize][x as usize];
                if *cell == EMPTY {
                    *cell = PIECE;
                }
            }
        }
    }

    pub fn surface_count(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&v| v == SURFACE)
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            piece: [(0, 0); PIECE_CELLS],
            terminated: false,
        }
    }
}

/// One text line per row: `.` empty, `#` surface, `@` falling piece.
impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for &v in row {
                let c = match v {
                    SURFACE => '#',
                    PIECE => '@',
                    _ => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
