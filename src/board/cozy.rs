use cozy_chess::{Board as CozyBoard, Color, File, Move, Piece, Square};
use serde::Serialize;
use thiserror::Error;

use super::Rules;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("FEN error: {0}")]
    InvalidFen(String),
    #[error("malformed move: {0}")]
    InvalidMove(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Checkmate { winner: Winner },
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
}

/// A cozy-chess board made reversible: every played move pushes the
/// previous board onto a stack that `undo` pops.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    history: Vec<CozyBoard>,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), history: Vec::new() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        CozyBoard::from_fen(fen, false)
            .map(|b| Self { board: b, history: Vec::new() })
            .map_err(|e| PositionError::InvalidFen(format!("{e:?}")))
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    /// Finds the legal move written in UCI notation. Castling is accepted
    /// both as king-to-destination (`e1g1`) and king-takes-rook (`e1h1`).
    pub fn parse_uci(&self, mv_uci: &str) -> Result<Move, PositionError> {
        if !(4..=5).contains(&mv_uci.len()) {
            return Err(PositionError::InvalidMove(mv_uci.to_string()));
        }
        let mut found = None;
        self.board.generate_moves(|moves| {
            for m in moves {
                if format!("{}", m) == mv_uci || self.uci(m) == mv_uci { found = Some(m); break; }
            }
            found.is_some()
        });
        found.ok_or_else(|| PositionError::IllegalMove(mv_uci.to_string()))
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<(), PositionError> {
        let m = self.parse_uci(mv_uci)?;
        self.apply(m);
        Ok(())
    }

    /// Standard UCI text for `mv`, writing castling as the king's two-square step.
    pub fn uci(&self, mv: Move) -> String {
        let castles = self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.color_on(mv.to) == Some(self.board.side_to_move());
        if castles {
            let file = if mv.to.file() as usize > mv.from.file() as usize { File::G } else { File::C };
            let to = Square::new(file, mv.from.rank());
            return format!("{}{}", mv.from, to);
        }
        format!("{}", mv)
    }

    pub fn legal_moves_count(&self) -> usize {
        let mut ct = 0usize;
        self.board.generate_moves(|moves| { ct += moves.len(); false });
        ct
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, PositionError> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    /// The same position seen from the other side: ranks flipped and every
    /// piece, right and the side to move handed to the opposite colour.
    /// The undo stack is not carried over.
    pub fn mirrored(&self) -> Result<Self, PositionError> {
        let fen = self.fen();
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let placement = fields[0]
            .split('/')
            .rev()
            .map(swap_case)
            .collect::<Vec<_>>()
            .join("/");
        let side = if fields[1] == "w" { "b" } else { "w" };
        let castling = if fields[2] == "-" {
            "-".to_string()
        } else {
            let swapped = swap_case(fields[2]);
            let (mut upper, lower): (Vec<char>, Vec<char>) =
                swapped.chars().partition(|c| c.is_ascii_uppercase());
            upper.extend(lower);
            upper.into_iter().collect()
        };
        let ep = match fields[3].as_bytes() {
            [file, rank] => format!("{}{}", *file as char, (b'1' + b'8' - *rank) as char),
            _ => "-".to_string(),
        };
        Self::from_fen(&format!("{} {} {} {} {} {}", placement, side, castling, ep, fields[4], fields[5]))
    }

    /// Terminal state of the current position, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        let mut has_move = false;
        self.board.generate_moves(|_| { has_move = true; true });
        if !has_move {
            if self.board.checkers().is_empty() { return Some(Outcome::Stalemate); }
            let winner = if self.board.side_to_move() == Color::White { Winner::Black } else { Winner::White };
            return Some(Outcome::Checkmate { winner });
        }
        if self.board.halfmove_clock() >= 100 { return Some(Outcome::FiftyMoveRule); }
        if self.insufficient_material() { return Some(Outcome::InsufficientMaterial); }
        if self.repetitions() >= 3 { return Some(Outcome::ThreefoldRepetition); }
        None
    }

    fn insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() { return false; }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 { return true; }
        if !knights.is_empty() { return false; }
        let mut shades = bishops.into_iter().map(|sq| (sq.file() as usize + sq.rank() as usize) % 2);
        match shades.next() {
            Some(first) => shades.all(|s| s == first),
            None => true,
        }
    }

    /// How often the current position has occurred, counting itself.
    fn repetitions(&self) -> usize {
        let h = self.board.hash();
        1 + self.history.iter().filter(|b| b.hash() == h).count()
    }
}

fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
        .collect()
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    fn apply(&mut self, mv: Move) {
        let mut next = self.board.clone();
        if let Err(e) = next.try_play(mv) {
            panic!("apply called with illegal move {mv} in {}: {e:?}", self.board);
        }
        self.history.push(std::mem::replace(&mut self.board, next));
    }

    fn undo(&mut self) {
        match self.history.pop() {
            Some(prev) => self.board = prev,
            None => panic!("undo called with no move to revert"),
        }
    }

    fn is_game_over(&self) -> bool { self.outcome().is_some() }

    fn for_each_piece<F: FnMut(Square, Piece, Color)>(&self, mut f: F) {
        for color in [Color::White, Color::Black] {
            for &piece in &Piece::ALL {
                for sq in self.board.colored_pieces(color, piece) {
                    f(sq, piece, color);
                }
            }
        }
    }

    fn side_to_move(&self) -> Color { self.board.side_to_move() }

    fn ply(&self) -> usize { self.history.len() }
}
