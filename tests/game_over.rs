use pretty_assertions::assert_eq;
use sparring::search::alphabeta::Searcher;
use sparring::search::eval::{evaluate, SCORE_INFINITY};
use sparring::{Outcome, Position, Rules, Winner};

fn outcome(fen: &str) -> Option<Outcome> {
    Position::from_fen(fen).unwrap().outcome()
}

#[test]
fn checkmate_names_the_winner() {
    assert_eq!(
        outcome("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1"),
        Some(Outcome::Checkmate { winner: Winner::White })
    );
    // Fool's mate
    assert_eq!(
        outcome("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
        Some(Outcome::Checkmate { winner: Winner::Black })
    );
}

#[test]
fn stalemate() {
    assert_eq!(outcome("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1"), Some(Outcome::Stalemate));
}

#[test]
fn fifty_move_rule() {
    assert_eq!(outcome("k7/8/8/8/8/8/8/KR6 b - - 100 80"), Some(Outcome::FiftyMoveRule));
    assert_eq!(outcome("k7/8/8/8/8/8/8/KR6 b - - 99 80"), None);
}

#[test]
fn insufficient_material() {
    assert_eq!(outcome("k7/8/8/8/8/8/8/K7 w - - 0 1"), Some(Outcome::InsufficientMaterial));
    assert_eq!(outcome("k7/8/8/8/8/8/8/KN6 w - - 0 1"), Some(Outcome::InsufficientMaterial));
    assert_eq!(outcome("kb6/8/8/8/8/8/8/K7 w - - 0 1"), Some(Outcome::InsufficientMaterial));
    // Bishops on the same square colour (c1 and f4 are both dark)
    assert_eq!(outcome("k7/8/8/8/5b2/8/8/K1B5 w - - 0 1"), Some(Outcome::InsufficientMaterial));
    // Opposite-coloured bishops can still mate
    assert_eq!(outcome("k7/8/8/8/4b3/8/8/K1B5 w - - 0 1"), None);
    assert_eq!(outcome("k7/8/8/8/8/8/8/KNN5 w - - 0 1"), None);
    assert_eq!(outcome("k7/8/8/8/8/8/P7/K7 w - - 0 1"), None);
}

#[test]
fn threefold_repetition_over_the_move_stack() {
    let mut pos = Position::startpos();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1"] {
        pos.make_move_uci(uci).unwrap();
        assert_eq!(pos.outcome(), None);
    }
    pos.make_move_uci("f6g8").unwrap();
    assert_eq!(pos.outcome(), Some(Outcome::ThreefoldRepetition));
    assert!(pos.is_game_over());

    // Backing out of the repetition clears it.
    pos.undo();
    assert!(!pos.is_game_over());
}

#[test]
fn search_stops_at_repetition() {
    let mut pos = Position::startpos();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"] {
        pos.make_move_uci(uci).unwrap();
    }
    let mut s = Searcher::new();
    let v = s.search(&mut pos, 3, -SCORE_INFINITY, SCORE_INFINITY, true);
    assert_eq!(v, evaluate(&pos));
    assert_eq!(s.nodes(), 1);
}

#[test]
fn ongoing_game() {
    assert_eq!(Position::startpos().outcome(), None);
}
