use cozy_chess::Color;
use log::{debug, trace};
use rand::Rng;
use serde::Serialize;

use crate::board::Rules;
use crate::search::alphabeta::Searcher;
use crate::search::difficulty::Difficulty;
use crate::search::eval::{Score, SCORE_INFINITY};

/// How the selector arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Choice {
    /// The randomness roll fired and a legal move was drawn uniformly.
    Random,
    /// Best move by search; `score` is White-positive.
    Searched { score: Score },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<M> {
    pub mv: M,
    pub choice: Choice,
    pub nodes: u64,
}

/// Picks the computer's move at `tier`, or `None` when there is no legal move.
pub fn select_move<R: Rules>(pos: &mut R, tier: Difficulty) -> Option<R::Move> {
    select_move_with_rng(pos, tier, &mut rand::thread_rng())
}

pub fn select_move_with_rng<R: Rules, G: Rng>(
    pos: &mut R,
    tier: Difficulty,
    rng: &mut G,
) -> Option<R::Move> {
    select_move_report(pos, tier, rng).map(|s| s.mv)
}

/// Move selection with its provenance.
///
/// One uniform draw decides whether the tier plays a random legal move.
/// Otherwise every legal move is searched to the tier's depth with a full
/// window, assuming the best reply, and the first move reaching the best
/// score for the side to move is kept.
pub fn select_move_report<R: Rules, G: Rng>(
    pos: &mut R,
    tier: Difficulty,
    rng: &mut G,
) -> Option<Selection<R::Move>> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        debug!("no legal moves; nothing to select");
        return None;
    }

    let settings = tier.settings();
    let roll: f64 = rng.gen();
    if roll < settings.randomness {
        let mv = moves[rng.gen_range(0..moves.len())];
        debug!("{tier}: roll {roll:.3} < {}, random move {mv}", settings.randomness);
        return Some(Selection { mv, choice: Choice::Random, nodes: 0 });
    }

    // White keeps the highest score and Black the lowest; the reply is
    // searched for the opponent.
    let white = pos.side_to_move() == Color::White;
    let sign: Score = if white { 1 } else { -1 };
    let entry_ply = pos.ply();
    let mut searcher = Searcher::new();
    let mut best: Option<(R::Move, Score)> = None;
    for mv in moves {
        pos.apply(mv);
        let score = searcher.search(pos, settings.depth - 1, -SCORE_INFINITY, SCORE_INFINITY, !white);
        pos.undo();
        trace!("{mv}: {score}");
        if best.map_or(true, |(_, bs)| sign * score > sign * bs) {
            best = Some((mv, score));
        }
    }
    debug_assert_eq!(pos.ply(), entry_ply, "apply/undo left unpaired");

    let (mv, score) = best?;
    debug!("{tier}: depth {} picked {mv} score {score} nodes {}", settings.depth, searcher.nodes());
    Some(Selection { mv, choice: Choice::Searched { score }, nodes: searcher.nodes() })
}
