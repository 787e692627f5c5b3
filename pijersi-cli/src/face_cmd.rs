//! Face command - draw a single piece face
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_variant(), draw_face()
//! - Level 3: (delegated to pijersi-draw)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pijersi_core::FaceVariant;
use pijersi_draw::{svg, CubeBuilder};

use crate::output::Session;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug)]
pub struct FaceArgs {
    /// Cube kind: rock, paper, scissors or wise
    pub kind: String,

    /// Cube color: white or black
    pub color: String,

    /// Face: top (glyph) or bottom (letter)
    #[arg(long, default_value = "top")]
    pub face: String,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run face command
pub fn run(args: FaceArgs, session: &Session) -> Result<PathBuf> {
    let variant = resolve_variant(&args)?;

    tracing::info!("Drawing face {}", variant.file_stem());

    draw_face(variant, session)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn resolve_variant(args: &FaceArgs) -> Result<FaceVariant> {
    FaceVariant::parse(&args.kind, &args.color, &args.face).context("Invalid piece face")
}

fn draw_face(variant: FaceVariant, session: &Session) -> Result<PathBuf> {
    let path = session.path_for(&variant.file_stem());
    let cube_side = session.config.cube_side_for(session.cell_size);

    let document = CubeBuilder::new(session.config.cubes.clone())
        .face(variant.kind, variant.color, variant.face, cube_side)
        .context("Failed to build face")?;

    svg::write(&document, &path)
        .with_context(|| format!("Failed to write face: {}", path.display()))?;

    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================
