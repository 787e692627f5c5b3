//! Configuration types for board and cube drawings
//!
//! Physical sizes are given in centimetres; builders convert them to drawing
//! units from the requested cell size, so every ratio of the printed board
//! is independent of the output resolution.

use std::path::Path;

use pijersi_core::{DrawError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// LASER CUTTER COLOR CODES
// ============================================================================

/// Engrave
pub const COLOR_TO_ENGRAVE: &str = "rgb(0,0,0)";
/// Cut in a first pass
pub const COLOR_TO_CUT_1: &str = "rgb(0,0,255)";
/// Cut in a second pass
pub const COLOR_TO_CUT_2: &str = "rgb(51,102,153)";

/// Stroke width of cut outlines, in drawing units
pub const LASER_CUT_LINE_WIDTH: f64 = 2.0;

/// Wood tone of the board and of the cube support
pub const WOOD_COLOR: &str = "#BF9B7A";

/// Cube side in centimetres
pub const DEFAULT_CUBE_SIDE_CM: f64 = 1.6;

// ============================================================================
// BOARD
// ============================================================================

/// Which cells carry their name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// No labels
    None,
    /// Only the first and last cell of each row, outside the board
    #[default]
    Border,
    /// Every cell, below its center
    All,
}

/// Board drawing configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Circumradius of a cell in centimetres
    pub hexagon_side_cm: f64,
    /// Gap between neighbouring cell outlines in centimetres
    pub hexagon_padding_cm: f64,
    /// Cell outline width in centimetres
    pub line_width_cm: f64,
    /// Margin left for the cutting tool around the board
    pub cut_margin_cm: f64,
    /// Cell fill opacity on even rings
    pub hexagon_opacity: f64,
    pub board_color: String,
    pub line_color: String,
    pub label_color: String,
    pub label_font_family: String,
    /// Label font size as a fraction of the cell width
    pub label_font_ratio: f64,
    pub labels: LabelMode,
    /// Radial gradient fill instead of a flat fill
    pub gradient: bool,
    /// Flat fills are translucent; without opacity they are transparent
    pub opacity: bool,
    /// Rosettes on even rings, hatching on odd rings
    pub decoration: bool,
    /// Cut outline instead of the painted board
    pub laser: bool,
    /// Hatching strokes per decorated cell
    pub hatching_segments: usize,
    /// Seed of the hatching generator
    pub decoration_seed: u64,
}

fn default_hexagon_side_cm() -> f64 {
    2.0 * DEFAULT_CUBE_SIDE_CM / 3f64.sqrt()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            hexagon_side_cm: default_hexagon_side_cm(),
            hexagon_padding_cm: 0.3,
            line_width_cm: 0.025,
            cut_margin_cm: 0.01,
            hexagon_opacity: 0.45,
            board_color: WOOD_COLOR.to_string(),
            line_color: COLOR_TO_ENGRAVE.to_string(),
            label_color: COLOR_TO_ENGRAVE.to_string(),
            label_font_family: "Helvetica".to_string(),
            label_font_ratio: 0.20,
            labels: LabelMode::Border,
            gradient: true,
            opacity: true,
            decoration: false,
            laser: false,
            hatching_segments: 500,
            decoration_seed: 2024,
        }
    }
}

impl BoardConfig {
    pub fn with_labels(mut self, labels: LabelMode) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_decoration(mut self, decoration: bool) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_opacity(mut self, opacity: bool) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_laser(mut self, laser: bool) -> Self {
        self.laser = laser;
        self
    }

    /// Deterministic file stem describing the enabled options
    pub fn file_stem(&self) -> String {
        let mut stem = match self.labels {
            LabelMode::None => "pijersi_board_without_labels",
            LabelMode::All => "pijersi_board_with_all_labels",
            LabelMode::Border => "pijersi_board_with_few_labels",
        }
        .to_string();

        if self.decoration {
            stem.push_str("_with_decoration");
        }
        if !self.gradient {
            stem.push_str("_without_gradient");
        }
        if !self.opacity {
            stem.push_str("_without_opacity");
        }
        if self.laser {
            stem = stem.replacen("pijersi_", "pijersi_laser_", 1);
        }
        stem
    }
}

// ============================================================================
// CUBES
// ============================================================================

/// What a cube sheet is drawn for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SheetMode {
    /// Colored preview of the finished cubes
    #[default]
    Render,
    /// Cut outlines of the support and of every cube
    LaserSupport,
    /// Engraved glyphs only
    LaserDecorations,
}

impl SheetMode {
    pub fn file_stem(self) -> &'static str {
        match self {
            SheetMode::Render => "pijersi_cubes",
            SheetMode::LaserSupport => "pijersi_laser_cubes_support",
            SheetMode::LaserDecorations => "pijersi_laser_cubes_decorations",
        }
    }
}

pub const SHEET_MODES: [SheetMode; 3] = [
    SheetMode::Render,
    SheetMode::LaserSupport,
    SheetMode::LaserDecorations,
];

/// Cube drawing configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub cube_side_cm: f64,
    /// Margin left for the cutting tool around each cube and the support
    pub cut_margin_cm: f64,
    /// Face border width in centimetres
    pub line_width_cm: f64,
    /// Glyph stroke width in centimetres
    pub decoration_line_width_cm: f64,
    /// Glyph size as a fraction of the cube side
    pub decoration_ratio: f64,
    pub support_color: String,
    pub symbol_font_family: String,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            cube_side_cm: DEFAULT_CUBE_SIDE_CM,
            cut_margin_cm: 0.01,
            line_width_cm: 0.025,
            decoration_line_width_cm: 0.15,
            decoration_ratio: 0.5,
            support_color: WOOD_COLOR.to_string(),
            symbol_font_family: "Helvetica".to_string(),
        }
    }
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Full configuration, loadable from JSON
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub board: BoardConfig,
    pub cubes: CubeConfig,
}

impl GeneratorConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DrawError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| DrawError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Cube side matching a board cell size, so both print at the same scale
    pub fn cube_side_for(&self, cell_size: f64) -> f64 {
        cell_size * self.cubes.cube_side_cm / self.board.hexagon_side_cm
    }
}
