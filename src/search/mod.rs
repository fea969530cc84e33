pub mod alphabeta;
pub mod difficulty;
pub mod eval;
pub mod select;
