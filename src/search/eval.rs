use cozy_chess::{Color, Piece, Square};

use crate::board::Rules;

/// Centipawn score. Positive favours White regardless of who is to move.
pub type Score = i32;

/// Larger in magnitude than any score `evaluate` can return.
pub const SCORE_INFINITY: Score = 1_000_000;

const PAWN: Score = 100;
const KNIGHT: Score = 320;
const BISHOP: Score = 330;
const ROOK: Score = 500;
const QUEEN: Score = 900;
const KING: Score = 20_000;

// Piece-square tables from White's point of view, rank 8 first.
#[rustfmt::skip]
const PAWN_TABLE: [Score; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     50,  50,  50,  50,  50,  50,  50,  50,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [Score; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

pub fn piece_value(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => PAWN,
        Piece::Knight => KNIGHT,
        Piece::Bishop => BISHOP,
        Piece::Rook => ROOK,
        Piece::Queen => QUEEN,
        Piece::King => KING,
    }
}

/// Positional bonus for `piece` of `color` on `sq`. Only pawns and knights
/// have a table; every other piece scores its material value alone.
pub fn square_bonus(piece: Piece, color: Color, sq: Square) -> Score {
    let rank = sq.rank() as usize;
    let file = sq.file() as usize;
    // Tables start at rank 8, so White reads them upside down.
    let row = if color == Color::White { 7 - rank } else { rank };
    let idx = row * 8 + file;
    match piece {
        Piece::Pawn => PAWN_TABLE[idx],
        Piece::Knight => KNIGHT_TABLE[idx],
        _ => 0,
    }
}

/// Material plus piece-square score, White minus Black.
pub fn evaluate<R: Rules>(pos: &R) -> Score {
    let mut score = 0;
    pos.for_each_piece(|sq, piece, color| {
        let v = piece_value(piece) + square_bonus(piece, color, sq);
        if color == Color::White { score += v } else { score -= v }
    });
    score
}
