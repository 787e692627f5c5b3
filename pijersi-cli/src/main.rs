//! PIJERSI CLI - Command-line interface
//!
//! Commands:
//! - board: Draw one board variant
//! - face: Draw one piece face
//! - cubes: Draw the cube sheets
//! - all: Draw every file of the standard set

mod all_cmd;
mod board_cmd;
mod cubes_cmd;
mod face_cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use all_cmd::AllArgs;
use board_cmd::BoardArgs;
use cubes_cmd::CubesArgs;
use face_cmd::FaceArgs;
use output::Session;

#[derive(Parser, Debug)]
#[command(name = "pijersi")]
#[command(about = "PIJERSI board and cube drawings")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(long, global = true, default_value = "pictures")]
    output: PathBuf,

    /// Board cell side in drawing units
    #[arg(long, global = true, default_value_t = 40.0)]
    cell_size: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw one board variant
    Board(BoardArgs),
    /// Draw one piece face
    Face(FaceArgs),
    /// Draw the cube sheets
    Cubes(CubesArgs),
    /// Draw boards, sheets and faces
    All(AllArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::open(cli.config.as_deref(), &cli.output, cli.cell_size)?;

    match cli.command {
        Commands::Board(args) => {
            let path = board_cmd::run(args, &session)?;
            println!("{}", path.display());
        }
        Commands::Face(args) => {
            let path = face_cmd::run(args, &session)?;
            println!("{}", path.display());
        }
        Commands::Cubes(args) => {
            for path in cubes_cmd::run(args, &session)? {
                println!("{}", path.display());
            }
        }
        Commands::All(args) => {
            for path in all_cmd::run(args, &session)? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
