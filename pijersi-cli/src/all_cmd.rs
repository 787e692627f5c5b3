//! All command - draw every board, sheet and face
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_artifacts(), write_artifacts()
//! - Level 3: (delegated to pijersi-draw)

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use pijersi_draw::{artifacts, Artifact};

use crate::output::Session;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug)]
pub struct AllArgs {
    /// Worker threads for writing (defaults to one per core)
    #[arg(long)]
    pub threads: Option<usize>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run all command
///
/// 1. Build every document in memory
/// 2. Write them in parallel
pub fn run(args: AllArgs, session: &Session) -> Result<Vec<PathBuf>> {
    let start = Instant::now();

    let artifacts = build_artifacts(session)?;
    let paths = write_artifacts(&args, &artifacts, session)?;

    tracing::info!(
        "Wrote {} files to {} in {:.2?}",
        paths.len(),
        session.output.display(),
        start.elapsed()
    );

    Ok(paths)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_artifacts(session: &Session) -> Result<Vec<Artifact>> {
    artifacts::standard_set(&session.config, session.cell_size)
        .context("Failed to build drawings")
}

fn write_artifacts(
    args: &AllArgs,
    artifacts: &[Artifact],
    session: &Session,
) -> Result<Vec<PathBuf>> {
    let write = || artifacts::write_all(artifacts, &session.output);

    let written = match args.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start writer threads")?
            .install(write),
        None => write(),
    };

    written.with_context(|| format!("Failed to write drawings to {}", session.output.display()))
}

// ============================================================================
// TESTS
// ============================================================================
