use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search parameters bound to one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultySettings {
    /// Plies searched, counting the engine's own move.
    pub depth: u32,
    /// Chance of playing a uniformly random legal move instead of searching.
    pub randomness: f64,
    /// Points awarded to a human who beats this tier.
    pub win_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Amateur,
    #[default]
    Intermediate,
    Expert,
    Master,
}

const SETTINGS: [DifficultySettings; 5] = [
    DifficultySettings { depth: 1, randomness: 0.5, win_points: 10 },
    DifficultySettings { depth: 2, randomness: 0.3, win_points: 25 },
    DifficultySettings { depth: 3, randomness: 0.15, win_points: 50 },
    DifficultySettings { depth: 4, randomness: 0.05, win_points: 100 },
    DifficultySettings { depth: 5, randomness: 0.0, win_points: 200 },
];

impl Difficulty {
    /// Weakest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Amateur,
        Difficulty::Intermediate,
        Difficulty::Expert,
        Difficulty::Master,
    ];

    pub fn settings(self) -> &'static DifficultySettings {
        &SETTINGS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Amateur => "amateur",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Expert => "expert",
            Difficulty::Master => "master",
        }
    }

    /// Case-insensitive lookup. Unrecognised names get the intermediate tier.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Self::from_name(s)) }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

pub fn points_for_win(tier: Difficulty) -> u32 {
    tier.settings().win_points
}

/// Points a human earns from a finished game against `tier`.
pub fn points_for_result(tier: Difficulty, won: bool) -> u32 {
    if won { points_for_win(tier) } else { 0 }
}
