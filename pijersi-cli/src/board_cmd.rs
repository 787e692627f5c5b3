//! Board command - draw one board variant
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: board_config(), draw_board()
//! - Level 3: (delegated to pijersi-draw)
//! - Level 4: argument mirrors of the library enums

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use pijersi_core::{BOARD_COLS, BOARD_ROWS};
use pijersi_draw::{svg, BoardBuilder, BoardConfig, LabelMode};

use crate::output::Session;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LabelArg {
    /// No cell names
    None,
    /// Names at both ends of each row
    Border,
    /// Every cell named
    All,
}

impl From<LabelArg> for LabelMode {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::None => LabelMode::None,
            LabelArg::Border => LabelMode::Border,
            LabelArg::All => LabelMode::All,
        }
    }
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Which cells carry their name (defaults to the config file)
    #[arg(long, value_enum)]
    pub labels: Option<LabelArg>,

    /// Draw rosettes and hatching
    #[arg(long)]
    pub decoration: bool,

    /// Flat fills instead of radial gradients
    #[arg(long)]
    pub no_gradient: bool,

    /// Transparent flat fills
    #[arg(long)]
    pub no_opacity: bool,

    /// Laser cutter colors and outer cut line
    #[arg(long)]
    pub laser: bool,

    /// Number of rows
    #[arg(long, default_value_t = BOARD_ROWS)]
    pub rows: u8,

    /// Number of cells in the long rows
    #[arg(long, default_value_t = BOARD_COLS)]
    pub cols: u8,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run board command
pub fn run(args: BoardArgs, session: &Session) -> Result<PathBuf> {
    let config = board_config(&args, &session.config.board);

    tracing::info!(
        "Drawing {}x{} board ({})",
        args.rows,
        args.cols,
        config.file_stem()
    );

    draw_board(&args, config, session)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Command line flags layered over the loaded configuration
fn board_config(args: &BoardArgs, base: &BoardConfig) -> BoardConfig {
    let mut config = base.clone();
    if let Some(labels) = args.labels {
        config = config.with_labels(labels.into());
    }
    if args.decoration {
        config = config.with_decoration(true);
    }
    if args.no_gradient {
        config = config.with_gradient(false);
    }
    if args.no_opacity {
        config = config.with_opacity(false);
    }
    if args.laser {
        config = config.with_laser(true);
    }
    config
}

fn draw_board(args: &BoardArgs, config: BoardConfig, session: &Session) -> Result<PathBuf> {
    let path = session.path_for(&config.file_stem());

    let document = BoardBuilder::new(config)
        .build(args.rows, args.cols, session.cell_size)
        .context("Failed to build board")?;

    svg::write(&document, &path)
        .with_context(|| format!("Failed to write board: {}", path.display()))?;

    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================
