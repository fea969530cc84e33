// Computer opponent: difficulty tiers over a fixed-depth alpha-beta search
pub mod board;
pub mod perft;
pub mod search;

pub use board::cozy::{Outcome, Position, PositionError, Winner};
pub use board::Rules;
pub use search::difficulty::{points_for_result, points_for_win, Difficulty, DifficultySettings};
pub use search::eval::{evaluate, Score};
pub use search::select::{select_move, select_move_report, select_move_with_rng, Choice, Selection};
