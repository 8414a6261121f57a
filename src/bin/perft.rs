//! Perft runner for checking the move generator from the command line.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 3 --divide`
//! `cargo run --release --bin perft -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -" --detailed`

use chrono::Local;
use clap::Parser;
use log::info;

use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::move_generation::perft::{perft, perft_detailed, perft_divide};
use plum_rules::utils::fen_parser::parse_fen;

#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Count legal move paths from a position")]
struct Args {
    /// Number of plies to enumerate
    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// FEN of the root position (default: the standard starting position)
    #[arg(short, long)]
    fen: Option<String>,

    /// Print the leaf count below each root move
    #[arg(long)]
    divide: bool,

    /// Tally captures, en passant, castles, promotions, checks and mates
    #[arg(long, conflicts_with = "divide")]
    detailed: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let fen = args.fen.as_deref().unwrap_or(STARTING_POSITION_FEN);
    let mut game = parse_fen(fen)?;

    let started = Local::now();
    info!(
        "perft started at {} depth={} fen={fen}",
        started.format("%Y-%m-%d %H:%M:%S"),
        args.depth
    );

    let nodes = if args.divide {
        let divided = perft_divide(&mut game, args.depth);
        for (mv, count) in &divided {
            println!("{mv}: {count}");
        }
        divided.iter().map(|(_, count)| count).sum::<u64>()
    } else if args.detailed {
        let counts = perft_detailed(&mut game, args.depth);
        println!(
            "captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates
        );
        counts.nodes
    } else {
        perft(&mut game, args.depth)
    };

    let elapsed_ms = (Local::now() - started).num_milliseconds();
    println!("nodes={nodes}");
    info!("depth {} finished in {elapsed_ms} ms", args.depth);
    Ok(())
}
