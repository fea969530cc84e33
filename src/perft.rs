use crate::board::Rules;

/// Leaf count of the legal move tree `depth` plies deep, walked with
/// apply/undo on a single position.
pub fn perft<R: Rules>(pos: &mut R, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = pos.legal_moves();
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        pos.apply(mv);
        nodes += perft(pos, depth - 1);
        pos.undo();
    }
    nodes
}
