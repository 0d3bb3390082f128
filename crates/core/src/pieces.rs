//! Pieces module - the fixed catalog of piece shapes
//!
//! Every kind has a single orientation given as four (x, y) offsets from the
//! piece origin. Pieces never rotate.

use rand::Rng;

use crate::shape::Shape;
use crate::types::PieceKind;

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i32, i32);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

const CUBE: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];
const Z: PieceShape = [(0, 0), (1, 0), (1, 1), (2, 1)];
const S: PieceShape = [(0, 0), (0, 1), (1, 1), (1, 2)];
const I: PieceShape = [(0, 0), (0, 1), (0, 2), (0, 3)];
const L: PieceShape = [(0, 0), (0, 1), (0, 2), (1, 2)];
const L_MIRROR: PieceShape = [(0, 0), (1, 0), (2, 0), (2, 1)];
const T: PieceShape = [(0, 0), (1, 0), (2, 0), (1, 1)];

/// Get the cell offsets for a piece kind
pub fn get_offsets(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::Cube => CUBE,
        PieceKind::Z => Z,
        PieceKind::S => S,
        PieceKind::I => I,
        PieceKind::L => L,
        PieceKind::LMirror => L_MIRROR,
        PieceKind::T => T,
    }
}

/// Draw a kind uniformly from the catalog.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}

/// Produce a catalog shape, untranslated (origin at (0, 0)).
///
/// With `Some(kind)` the generator is left untouched; with `None` a kind is
/// drawn uniformly with a single draw from `rng`.
///
/// # Examples
///
/// ```
/// use falling_blocks_core::{generate_piece, SimpleRng};
/// use falling_blocks_core::types::PieceKind;
///
/// let mut rng = SimpleRng::new(7);
/// let i = generate_piece(Some(PieceKind::I), &mut rng);
/// assert_eq!(i.cells(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
///
/// let any = generate_piece(None, &mut rng);
/// assert_eq!(any.cells().len(), 4);
/// ```
pub fn generate_piece<R: Rng + ?Sized>(kind: Option<PieceKind>, rng: &mut R) -> Shape {
    let kind = match kind {
        Some(kind) => kind,
        None => random_kind(rng),
    };
    Shape::of(kind)
}
