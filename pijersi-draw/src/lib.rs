//! PIJERSI Draw - Board and cube drawings as SVG
//!
//! This crate turns the board layout and cube catalog into documents:
//! - Board drawings, printed or laser cut
//! - Piece faces and the cube manufacturing sheet
//! - Deterministic SVG serialization with atomic file output
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: standard_set, write_all (orchestration)
//! - Level 2: BoardBuilder, CubeBuilder (document builders)
//! - Level 3: serialize, write (output)
//! - Level 4: Document primitives, configuration

pub mod artifacts;
pub mod board;
pub mod config;
pub mod cubes;
pub mod document;
pub mod svg;

pub use artifacts::{board_variants, standard_set, write_all, Artifact};
pub use board::{build_board, BoardBuilder};
pub use config::{
    BoardConfig, CubeConfig, GeneratorConfig, LabelMode, SheetMode, SHEET_MODES,
};
pub use cubes::{build_cube_sheet, build_piece_face, build_piece_face_by_name, CubeBuilder};
pub use document::{
    Canvas, Document, GradientStop, LineCap, LineJoin, Paint, Primitive, RadialGradient, Stroke,
    Style, Text, TextAnchor,
};
pub use svg::{serialize, write};
