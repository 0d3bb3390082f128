//! Shape module - a piece as four absolute board cells
//!
//! A [`Shape`] is an immutable value. Moving a piece means producing a new
//! shape with [`Shape::translate`]; nothing here checks the result against the
//! board, that is the caller's job.

use crate::error::ContractViolation;
use crate::pieces::get_offsets;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_CELLS};

/// Absolute (x, y) position of a cell on the board
pub type CellPos = (i32, i32);

/// Four cells occupied by one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [CellPos; PIECE_CELLS],
}

impl Shape {
    /// The catalog shape of `kind`, with its origin at (0, 0)
    pub fn of(kind: PieceKind) -> Self {
        Self {
            cells: get_offsets(kind),
        }
    }

    /// Build a shape from arbitrary cells.
    ///
    /// The cells must be exactly four, all distinct, and span no more than the
    /// board in either direction, so that the shape can always be spawned.
    pub fn from_cells(cells: &[CellPos]) -> Result<Self, ContractViolation> {
        let cells: [CellPos; PIECE_CELLS] = cells
            .try_into()
            .map_err(|_| ContractViolation::WrongCellCount { got: cells.len() })?;

        for (i, &(x, y)) in cells.iter().enumerate() {
            if cells[i + 1..].contains(&(x, y)) {
                return Err(ContractViolation::DuplicateCell { x, y });
            }
        }

        let shape = Self { cells };
        let (min_x, min_y, max_x, max_y) = shape.bounds();
        let width = max_x as i64 - min_x as i64 + 1;
        let height = max_y as i64 - min_y as i64 + 1;
        if width > BOARD_WIDTH as i64 || height > BOARD_HEIGHT as i64 {
            return Err(ContractViolation::ShapeTooLarge { width, height });
        }

        Ok(shape)
    }

    pub fn cells(&self) -> &[CellPos; PIECE_CELLS] {
        &self.cells
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    /// Bounding box as (min_x, min_y, max_x, max_y), inclusive
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let mut bounds = (i32::MAX, i32::MAX, i32::MIN, i32::MIN);
        for &(x, y) in &self.cells {
            bounds.0 = bounds.0.min(x);
            bounds.1 = bounds.1.min(y);
            bounds.2 = bounds.2.max(x);
            bounds.3 = bounds.3.max(y);
        }
        bounds
    }

    /// Shift every cell by (dx, dy).
    ///
    /// Total: coordinates wrap at the `i32` limits, so the four cells stay
    /// distinct and `translate(dx, dy).translate(-dx, -dy)` is the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_core::Shape;
    /// use falling_blocks_core::types::PieceKind;
    ///
    /// let moved = Shape::of(PieceKind::I).translate(2, 3);
    /// assert_eq!(moved.cells(), &[(2, 3), (2, 4), (2, 5), (2, 6)]);
    /// ```
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        let mut cells = self.cells;
        for (x, y) in &mut cells {
            *x = x.wrapping_add(dx);
            *y = y.wrapping_add(dy);
        }
        Self { cells }
    }

    /// The position this shape takes when it enters the board: top row at
    /// y = 0, horizontally centered (left-biased when the slack is odd).
    ///
    /// Works on offsets from the first cell, which stay small however far
    /// the shape has been translated.
    pub fn spawn_position(&self) -> Self {
        let offsets = self.offsets();
        let mut bounds = (i32::MAX, i32::MAX, i32::MIN);
        for &(dx, dy) in &offsets {
            bounds.0 = bounds.0.min(dx);
            bounds.1 = bounds.1.min(dy);
            bounds.2 = bounds.2.max(dx);
        }
        let (min_dx, min_dy, max_dx) = bounds;
        let left = (BOARD_WIDTH as i32 - (max_dx - min_dx + 1)) / 2;

        let mut cells = offsets;
        for (x, y) in &mut cells {
            *x = left + *x - min_dx;
            *y -= min_dy;
        }
        Self { cells }
    }

    /// Each cell relative to the first one.
    ///
    /// Every shape starts as a catalog shape or a validated [`Shape::from_cells`]
    /// whose span fits the board, and wrapping translation preserves
    /// differences, so these offsets are bounded by the board size.
    fn offsets(&self) -> [CellPos; PIECE_CELLS] {
        let (ox, oy) = self.cells[0];
        self.cells.map(|(x, y)| (x.wrapping_sub(ox), y.wrapping_sub(oy)))
    }
}

impl From<PieceKind> for Shape {
    fn from(kind: PieceKind) -> Self {
        Shape::of(kind)
    }
}
