//! PIJERSI Core - Board and piece geometry
//!
//! This crate provides the game-specific constants behind every drawing:
//! - Board geometry (truncated pointy-top hex grid, cell names and rings)
//! - Cube catalog (kinds, colors, printable faces, sheet layout)
//! - 2D vector algebra
//! - The shared error type

pub mod board;
pub mod error;
pub mod geometry;
pub mod pieces;

// Re-exports for convenient access
pub use board::{
    hexagon_vertices, hexagon_width, shade_for_ring, BoardLayout, CellCoord, CellShade, HexCell,
    LabelSide, LayoutCell, BOARD_CELL_COUNT, BOARD_COLS, BOARD_ROWS, HEXAGON_VERTEX_COUNT,
};
pub use error::{check_length, DrawError, Result};
pub use geometry::{regular_polygon, Vec2};
pub use pieces::{
    Cube, CubeColor, CubeKind, FaceKind, FaceVariant, ParseNameError, CUBE_COLORS, CUBE_KINDS,
    FACE_CATALOG, FACE_KINDS, SHEET_COLS, SHEET_LAYOUT, SHEET_ROWS,
};
