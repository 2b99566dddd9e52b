use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use shrdlurn_app_lib::{render_file, BoardChoice};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Board {
    Main,
    Target,
}

#[derive(Debug, Parser)]
#[command(name = "shrdlurn-render")]
#[command(about = "Render a SHRDLURN block list to a JSON frame of 2-D polygons")]
struct Cli {
    /// JSON array of blocks.
    blocks: PathBuf,
    /// Application config JSON; defaults are used when omitted.
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "main")]
    board: Board,
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let board = match cli.board {
        Board::Main => BoardChoice::Main,
        Board::Target => BoardChoice::Target,
    };
    let frame = render_file(&cli.blocks, cli.config.as_deref(), board, cli.width, cli.height)
        .and_then(|frame| Ok(frame.to_json()?));

    match frame {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("shrdlurn-render: {e}");
            ExitCode::FAILURE
        }
    }
}
