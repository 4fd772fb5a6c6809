mod benchmark;
mod config;
mod display;

use clap::Parser;
use common::games::tictactoe::{Board, select_best_move};
use common::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_ai", about = "Compares minimax and alpha-beta move selection")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config, created with defaults if missing.
    #[arg(long)]
    config: Option<String>,

    /// Overrides `benchmark.trials` from the config.
    #[arg(long)]
    trials: Option<u32>,

    /// Starting position as 9 cells, row-major: X, O, or . for empty.
    #[arg(long)]
    board: Option<Board>,

    #[arg(long)]
    skip_benchmark: bool,
}

fn describe_move(best_move: Option<usize>) -> String {
    best_move.map_or_else(|| "none".to_string(), |idx| idx.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let app_config = config::get_config_manager(&config_path).get_or_create_config()?;

    let prefix = if args.use_log_prefix || app_config.log_prefix {
        Some("TicTacToeAI".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);
    log!("Using config {}", config_path);

    let benchmark_config = app_config.benchmark.with_override(args.trials)?;

    let board = args.board.unwrap_or_default();

    println!("Tic-Tac-Toe AI Comparison");
    println!("{}", display::render_board(&board));

    let mut minimax_board = board;
    let mut alphabeta_board = board;
    println!(
        "\nBest move by Minimax: {}",
        describe_move(select_best_move(&mut minimax_board, false))
    );
    println!(
        "Best move by Alpha-Beta: {}",
        describe_move(select_best_move(&mut alphabeta_board, true))
    );

    if args.skip_benchmark {
        log!("Benchmark skipped");
        return Ok(());
    }

    log!("Running benchmark with {} trials", benchmark_config.trials);
    let report = benchmark::compare(benchmark_config.trials)?;
    println!("\n{}", report);

    Ok(())
}
