//! Value-in, value-out entry points.
//!
//! Each function takes a state by reference and hands back a fresh one, so a
//! caller holding an older state never sees it change.

use crate::error::ContractViolation;
use crate::game_state::GameState;
use crate::shape::Shape;
use crate::types::Direction;

/// Start a game: empty board, `initial` spawned top-center, not terminated.
pub fn create_game(initial: Shape) -> GameState {
    GameState::new(initial)
}

/// (width, height) of the board
pub fn dimensions(state: &GameState) -> (u8, u8) {
    state.dimensions()
}

pub fn current_piece(state: &GameState) -> Shape {
    *state.current_piece()
}

pub fn is_surface(state: &GameState, x: i32, y: i32) -> Result<bool, ContractViolation> {
    state.is_surface(x, y)
}

/// Shift the falling piece one column; a blocked move returns an identical state.
pub fn move_piece(state: &GameState, direction: Direction) -> GameState {
    state.moved(direction)
}

/// One gravity step. The flag is true when `next` was used and the caller
/// should supply a new piece for the following call.
pub fn advance(state: &GameState, next: &Shape) -> (GameState, bool) {
    state.advanced(next)
}

pub fn terminated(state: &GameState) -> bool {
    state.terminated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_free_functions_match_methods() {
        let state = create_game(Shape::of(PieceKind::Z));
        assert_eq!(dimensions(&state), (9, 18));
        assert_eq!(current_piece(&state), *state.current_piece());
        assert_eq!(is_surface(&state, 0, 0), Ok(false));
        assert!(!terminated(&state));

        let moved = move_piece(&state, Direction::Left);
        assert_eq!(moved, state.moved(Direction::Left));

        let (advanced, changed) = advance(&state, &Shape::of(PieceKind::S));
        assert_eq!((advanced, changed), state.advanced(&Shape::of(PieceKind::S)));
    }

    #[test]
    fn test_is_surface_out_of_range_is_an_error() {
        let state = create_game(Shape::of(PieceKind::Z));
        assert_eq!(
            is_surface(&state, 9, 0),
            Err(ContractViolation::OutOfBounds { x: 9, y: 0 })
        );
        assert_eq!(
            is_surface(&state, 0, -1),
            Err(ContractViolation::OutOfBounds { x: 0, y: -1 })
        );
    }
}
