/// Print a board and the moves its pieces can make
///
/// Usage:
///   # starting position, all moves
///   legal_moves
///
///   # a board string, only white's moves, as JSON
///   legal_moves --board "<64 chars>" --color white --json
///
///   # a board string listed from black's side
///   legal_moves --board "<64 chars>" --perspective black
use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use chesslib_core::{Board, BoardJson, Color, Move, create_board_from_str_with_perspective};
use clap::Parser;
use serde::Serialize;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(about = "List the moves available on a chess board")]
struct Cli {
    /// 64-character board string ('.' empty, uppercase white, lowercase black).
    /// Defaults to the starting position.
    #[arg(long)]
    board: Option<String>,

    /// Traversal order of --board and of the printed board string
    #[arg(long, default_value = "white", value_parser = parse_color)]
    perspective: Color,

    /// Only list moves of this color
    #[arg(long, value_parser = parse_color)]
    color: Option<Color>,

    /// JSON output mode
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(long)]
    debug: bool,
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse()
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Report {
    board: String,
    perspective: Color,
    cells: BoardJson,
    /// origin label -> destination labels
    moves: BTreeMap<String, Vec<String>>,
}

fn group_moves(moves: &[Move]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for mv in moves {
        grouped.entry(mv.from.to_label()).or_default().push(mv.to.to_label());
    }
    grouped
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

fn load_board(cli: &Cli) -> Result<Board> {
    match &cli.board {
        None => Ok(Board::default()),
        Some(text) => create_board_from_str_with_perspective(text.trim(), cli.perspective)
            .with_context(|| format!("failed to decode board {text:?}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let board = load_board(&cli)?;
    if board.get_pieces(None).is_empty() {
        bail!("board has no pieces");
    }
    for color in Color::ALL {
        if board.get_king_square(color).is_none() {
            log::warn!("no {color} king on the board");
        }
    }

    let moves: Vec<Move> = board.get_moves(cli.color).into_iter().collect();
    log::debug!("{} moves generated", moves.len());

    if cli.json {
        let report = Report {
            board: board.to_board_str(cli.perspective),
            perspective: cli.perspective,
            cells: board.to_json(),
            moves: group_moves(&moves),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{board}");
    println!("{}", board.to_board_str(cli.perspective));
    println!();
    for (from, dests) in group_moves(&moves) {
        println!("{from}: {}", dests.join(" "));
    }
    println!("{} moves", moves.len());
    Ok(())
}
