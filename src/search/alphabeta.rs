use crate::board::Rules;
use crate::search::eval::{evaluate, Score};

/// Fixed-depth minimax with alpha-beta pruning over a shared, mutable position.
///
/// Moves are searched in the order the rules engine generates them; there is
/// no ordering heuristic, transposition table or quiescence search.
#[derive(Default, Debug, Clone)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Minimax value of `pos` searched `depth` plies deep, White-positive.
    ///
    /// `maximizing` says whether the side to move at this node picks the
    /// highest score. Leaves and finished games are scored by `evaluate`.
    /// The position is handed back exactly as it was received.
    pub fn search<R: Rules>(
        &mut self,
        pos: &mut R,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        debug_assert!(alpha <= beta, "search entered with alpha {alpha} > beta {beta}");
        self.nodes += 1;
        if depth == 0 || pos.is_game_over() {
            return evaluate(pos);
        }

        let entry_ply = pos.ply();
        let moves = pos.legal_moves();
        if moves.is_empty() {
            return evaluate(pos);
        }
        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for mv in moves {
            pos.apply(mv);
            let value = self.search(pos, depth - 1, alpha, beta, !maximizing);
            pos.undo();
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha { break; }
        }
        debug_assert_eq!(pos.ply(), entry_ply, "apply/undo left unpaired");
        best
    }
}

/// Runs a single search with a throwaway `Searcher`.
pub fn search<R: Rules>(pos: &mut R, depth: u32, alpha: Score, beta: Score, maximizing: bool) -> Score {
    Searcher::new().search(pos, depth, alpha, beta, maximizing)
}
