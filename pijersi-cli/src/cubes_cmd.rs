//! Cubes command - draw the cube sheet
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: selected_modes(), draw_sheet()
//! - Level 3: (delegated to pijersi-draw)
//! - Level 4: argument mirror of SheetMode

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use pijersi_draw::{svg, CubeBuilder, SheetMode, SHEET_MODES};

use crate::output::Session;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SheetArg {
    /// Colored preview of the finished cubes
    Render,
    /// Cut outlines
    LaserSupport,
    /// Engraved glyphs
    LaserDecorations,
}

impl From<SheetArg> for SheetMode {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::Render => SheetMode::Render,
            SheetArg::LaserSupport => SheetMode::LaserSupport,
            SheetArg::LaserDecorations => SheetMode::LaserDecorations,
        }
    }
}

#[derive(Args, Debug)]
pub struct CubesArgs {
    /// Sheet to draw; all three when omitted
    #[arg(long, value_enum)]
    pub mode: Option<SheetArg>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run cubes command
pub fn run(args: CubesArgs, session: &Session) -> Result<Vec<PathBuf>> {
    let builder = CubeBuilder::new(session.config.cubes.clone());
    let cube_side = session.config.cube_side_for(session.cell_size);

    selected_modes(&args)
        .into_iter()
        .map(|mode| draw_sheet(&builder, mode, cube_side, session))
        .collect()
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn selected_modes(args: &CubesArgs) -> Vec<SheetMode> {
    match args.mode {
        Some(mode) => vec![mode.into()],
        None => SHEET_MODES.to_vec(),
    }
}

fn draw_sheet(
    builder: &CubeBuilder,
    mode: SheetMode,
    cube_side: f64,
    session: &Session,
) -> Result<PathBuf> {
    tracing::info!("Drawing cube sheet {}", mode.file_stem());

    let path = session.path_for(mode.file_stem());
    let document = builder
        .sheet(cube_side, mode)
        .with_context(|| format!("Failed to build cube sheet {:?}", mode))?;

    svg::write(&document, &path)
        .with_context(|| format!("Failed to write cube sheet: {}", path.display()))?;

    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================
