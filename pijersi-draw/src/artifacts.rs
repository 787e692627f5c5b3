//! The full set of generated files
//!
//! Every artifact is built in memory first; writing is a separate parallel
//! step so a build error never leaves a partial output directory behind.

use std::path::{Path, PathBuf};

use pijersi_core::{Result, BOARD_COLS, BOARD_ROWS, FACE_CATALOG};
use rayon::prelude::*;

use crate::board::BoardBuilder;
use crate::config::{BoardConfig, GeneratorConfig, LabelMode, SHEET_MODES};
use crate::cubes::CubeBuilder;
use crate::document::Document;
use crate::svg;

/// A document and the file name it is written under
#[derive(Clone, Debug)]
pub struct Artifact {
    pub file_name: String,
    pub document: Document,
}

impl Artifact {
    pub fn new(stem: &str, document: Document) -> Self {
        Self {
            file_name: format!("{}.svg", stem),
            document,
        }
    }
}

/// Board option combinations of the printed and laser-cut editions
pub fn board_variants(base: &BoardConfig) -> Vec<BoardConfig> {
    let few = base.clone().with_labels(LabelMode::Border);
    let decorated = few.clone().with_decoration(true);
    let laser = decorated.clone().with_laser(true);

    vec![
        base.clone().with_labels(LabelMode::All),
        few.clone(),
        base.clone().with_labels(LabelMode::None),
        base.clone()
            .with_labels(LabelMode::None)
            .with_decoration(true),
        decorated.clone(),
        decorated.clone().with_gradient(false),
        decorated.with_gradient(false).with_opacity(false),
        laser.clone(),
        laser.clone().with_gradient(false),
        laser.with_gradient(false).with_opacity(false),
    ]
}

/// Boards, cube sheets and every face variant
///
/// `cell_size` is the board cell side; cubes are scaled to match it.
pub fn standard_set(config: &GeneratorConfig, cell_size: f64) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    for board in board_variants(&config.board) {
        let stem = board.file_stem();
        let document = BoardBuilder::new(board).build(BOARD_ROWS, BOARD_COLS, cell_size)?;
        artifacts.push(Artifact::new(&stem, document));
    }

    let cubes = CubeBuilder::new(config.cubes.clone());
    let cube_side = config.cube_side_for(cell_size);

    for mode in SHEET_MODES {
        artifacts.push(Artifact::new(mode.file_stem(), cubes.sheet(cube_side, mode)?));
    }

    for variant in FACE_CATALOG.iter() {
        let document = cubes.face(variant.kind, variant.color, variant.face, cube_side)?;
        artifacts.push(Artifact::new(&variant.file_stem(), document));
    }

    tracing::debug!("Built {} artifacts", artifacts.len());

    Ok(artifacts)
}

/// Write artifacts into `dir` in parallel
///
/// Returns the written paths in input order. Stops at the first failure
/// reported by rayon; files already renamed into place are complete.
pub fn write_all(artifacts: &[Artifact], dir: &Path) -> Result<Vec<PathBuf>> {
    artifacts
        .par_iter()
        .map(|artifact| -> Result<PathBuf> {
            let path = dir.join(&artifact.file_name);
            svg::write(&artifact.document, &path)?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_board_variant_names() {
        let names: Vec<String> = board_variants(&BoardConfig::default())
            .iter()
            .map(BoardConfig::file_stem)
            .collect();

        assert_eq!(
            names,
            vec![
                "pijersi_board_with_all_labels",
                "pijersi_board_with_few_labels",
                "pijersi_board_without_labels",
                "pijersi_board_without_labels_with_decoration",
                "pijersi_board_with_few_labels_with_decoration",
                "pijersi_board_with_few_labels_with_decoration_without_gradient",
                "pijersi_board_with_few_labels_with_decoration_without_gradient_without_opacity",
                "pijersi_laser_board_with_few_labels_with_decoration",
                "pijersi_laser_board_with_few_labels_with_decoration_without_gradient",
                "pijersi_laser_board_with_few_labels_with_decoration_without_gradient_without_opacity",
            ]
        );
    }

    #[test]
    fn test_standard_set_names_are_unique() {
        let artifacts = standard_set(&GeneratorConfig::default(), 20.0).unwrap();
        assert_eq!(artifacts.len(), 10 + 3 + 16);

        let names: HashSet<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names.len(), artifacts.len());
        assert!(names.contains("pijersi_cubes.svg"));
        assert!(names.contains("pijersi_face_wise_black_top.svg"));
    }

    #[test]
    fn test_write_all_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = standard_set(&GeneratorConfig::default(), 20.0).unwrap();

        let paths = write_all(&artifacts, dir.path()).unwrap();
        assert_eq!(paths.len(), artifacts.len());
        for (path, artifact) in paths.iter().zip(&artifacts) {
            assert_eq!(path, &dir.path().join(&artifact.file_name));
            assert!(path.exists());
        }
    }

    #[test]
    fn test_invalid_cell_size_builds_nothing() {
        assert!(standard_set(&GeneratorConfig::default(), -1.0).is_err());
    }
}
