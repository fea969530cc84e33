use pretty_assertions::assert_eq;
use sparring::{points_for_result, points_for_win, Difficulty, DifficultySettings};

#[test]
fn settings_table() {
    let expect = [
        (Difficulty::Beginner, 1, 0.5, 10),
        (Difficulty::Amateur, 2, 0.3, 25),
        (Difficulty::Intermediate, 3, 0.15, 50),
        (Difficulty::Expert, 4, 0.05, 100),
        (Difficulty::Master, 5, 0.0, 200),
    ];
    for (tier, depth, randomness, win_points) in expect {
        assert_eq!(*tier.settings(), DifficultySettings { depth, randomness, win_points });
        assert_eq!(points_for_win(tier), win_points);
    }
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!(Difficulty::from_name("master"), Difficulty::Master);
    assert_eq!(Difficulty::from_name("MASTER"), Difficulty::Master);
    assert_eq!(Difficulty::from_name(" Beginner "), Difficulty::Beginner);
    assert_eq!("expert".parse::<Difficulty>(), Ok(Difficulty::Expert));
}

#[test]
fn unknown_tier_falls_back_to_intermediate() {
    for name in ["", "grandmaster", "easy", "3"] {
        let tier = Difficulty::from_name(name);
        assert_eq!(tier, Difficulty::Intermediate, "{name:?}");
        assert_eq!(*tier.settings(), *Difficulty::Intermediate.settings());
        assert_eq!(points_for_win(tier), 50);
    }
}

#[test]
fn losing_earns_nothing() {
    for tier in Difficulty::ALL {
        assert_eq!(points_for_result(tier, false), 0);
        assert_eq!(points_for_result(tier, true), points_for_win(tier));
    }
}

#[test]
fn serde_uses_lowercase_names() {
    let t: Difficulty = serde_json::from_str("\"amateur\"").unwrap();
    assert_eq!(t, Difficulty::Amateur);
    assert_eq!(serde_json::to_string(&Difficulty::Expert).unwrap(), "\"expert\"");
}
