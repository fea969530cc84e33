use anyhow::Result;
use clap::Parser;
use cozy_chess::{Color, File, Piece, Rank, Square};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use sparring::{
    points_for_result, select_move_report, Choice, Difficulty, Outcome, Position, Rules, Winner,
};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the computer", long_about = None)]
struct Args {
    /// beginner, amateur, intermediate, expert or master (anything else plays intermediate)
    #[arg(long, default_value = "intermediate")]
    difficulty: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Print the computer's move for the position and exit
    #[arg(long)]
    bestmove: bool,

    /// With --bestmove, print a JSON report instead of the bare move
    #[arg(long)]
    json: bool,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    fen: String,
    difficulty: Difficulty,
    #[serde(rename = "move")]
    mv: Option<String>,
    choice: Option<Choice>,
    nodes: u64,
    elapsed_ms: u128,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn piece_char(piece: Piece, color: Color) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White { c.to_ascii_uppercase() } else { c }
}

fn print_board(pos: &Position) {
    let board = pos.board();
    println!();
    for &rank in Rank::ALL.iter().rev() {
        print!("{} ", rank as usize + 1);
        for &file in &File::ALL {
            let sq = Square::new(file, rank);
            let c = match (board.piece_on(sq), board.color_on(sq)) {
                (Some(p), Some(c)) => piece_char(p, c),
                _ => '.',
            };
            print!(" {c}");
        }
        println!();
    }
    println!("   a b c d e f g h");
    println!("{}", pos.fen());
}

fn get_human_move(pos: &Position) -> Result<Option<cozy_chess::Move>> {
    loop {
        print!("Enter your move (e.g., e2e4), or 'quit': ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let input = input.trim();
        if input == "quit" {
            return Ok(None);
        }
        match pos.parse_uci(input) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => println!("{e}"),
        }
    }
}

fn announce(outcome: Outcome, human: Color, tier: Difficulty) {
    match outcome {
        Outcome::Checkmate { winner } => {
            let winner_color = if winner == Winner::White { Color::White } else { Color::Black };
            let human_won = winner_color == human;
            println!("\nCheckmate! {} wins!", if winner == Winner::White { "White" } else { "Black" });
            if human_won {
                println!("You earned {} points against the {tier} computer.", points_for_result(tier, true));
            }
        }
        Outcome::Stalemate => println!("\nGame is a stalemate!"),
        Outcome::FiftyMoveRule => println!("\nDraw by the fifty-move rule!"),
        Outcome::ThreefoldRepetition => println!("\nDraw by threefold repetition!"),
        Outcome::InsufficientMaterial => println!("\nDraw by insufficient material!"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tier = Difficulty::from_name(&args.difficulty);
    let human_color = parse_color(&args.color)?;
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut pos = match args.fen.as_deref() {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::startpos(),
    };
    info!("difficulty {tier}: {:?}", tier.settings());

    if args.bestmove {
        let t0 = Instant::now();
        let sel = select_move_report(&mut pos, tier, &mut rng);
        let elapsed_ms = t0.elapsed().as_millis();
        if args.json {
            let report = Report {
                fen: pos.fen(),
                difficulty: tier,
                mv: sel.map(|s| pos.uci(s.mv)),
                choice: sel.map(|s| s.choice),
                nodes: sel.map_or(0, |s| s.nodes),
                elapsed_ms,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            match sel {
                Some(s) => println!("bestmove {}", pos.uci(s.mv)),
                None => println!("bestmove 0000"),
            }
        }
        return Ok(());
    }

    println!("Playing {} against the {tier} computer.", if human_color == Color::White { "White" } else { "Black" });
    loop {
        print_board(&pos);
        if let Some(outcome) = pos.outcome() {
            announce(outcome, human_color, tier);
            break;
        }

        if pos.side_to_move() == human_color {
            match get_human_move(&pos)? {
                Some(mv) => pos.apply(mv),
                None => {
                    println!("Thanks for playing!");
                    break;
                }
            }
            continue;
        }

        if args.verbose {
            println!("Thinking...");
        }
        let t0 = Instant::now();
        let Some(sel) = select_move_report(&mut pos, tier, &mut rng) else {
            println!("No legal moves available!");
            break;
        };
        let elapsed = t0.elapsed();
        if args.verbose {
            match sel.choice {
                Choice::Random => println!("random pick, elapsed {:.2}s", elapsed.as_secs_f32()),
                Choice::Searched { score } => println!(
                    "score {score}, nodes {}, elapsed {:.2}s",
                    sel.nodes,
                    elapsed.as_secs_f32()
                ),
            }
        }
        println!("Computer plays: {}", pos.uci(sel.mv));
        pos.apply(sel.mv);
    }

    Ok(())
}
