pub mod cozy;

use cozy_chess::{Color, Piece, Square};
use std::fmt::{Debug, Display};

/// Capabilities the search needs from a rules engine.
///
/// The search mutates one shared position in place: every `apply` must be
/// matched by an `undo` in last-in-first-out order before control returns
/// to whoever handed the position over. `ply` exposes the depth of the
/// move stack so that pairing can be checked.
pub trait Rules {
    type Move: Copy + Eq + Debug + Display;

    /// Legal moves for the side to move, in generation order. Empty only
    /// when the side to move has no legal move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays a legal move. Panics on an illegal one.
    fn apply(&mut self, mv: Self::Move);

    /// Reverts the most recent `apply`. Panics if nothing was applied.
    fn undo(&mut self);

    fn is_game_over(&self) -> bool;

    /// Calls `f` once per occupied square.
    fn for_each_piece<F: FnMut(Square, Piece, Color)>(&self, f: F);

    fn side_to_move(&self) -> Color;

    /// Number of moves currently on the undo stack.
    fn ply(&self) -> usize;
}
