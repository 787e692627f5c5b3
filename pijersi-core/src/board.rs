//! Board geometry: the truncated hexagonal grid of PIJERSI
//!
//! Rows are named `a`, `b`, ... from bottom to top and columns are numbered
//! from 1, west to east. Rows with an even index (`a`, `c`, `e`, `g`) hold one
//! cell less than the others, which gives the board its notched outline.
//! Hexagons are pointy-top; `side` is the circumradius of a cell.

use serde::{Deserialize, Serialize};

use crate::error::{check_length, DrawError, Result};
use crate::geometry::{regular_polygon, Vec2};

/// Rows of the PIJERSI board
pub const BOARD_ROWS: u8 = 7;

/// Cells in the long rows of the PIJERSI board
pub const BOARD_COLS: u8 = 7;

/// Total number of cells on the PIJERSI board
pub const BOARD_CELL_COUNT: usize = 45;

/// Vertices per cell
pub const HEXAGON_VERTEX_COUNT: usize = 6;

/// Row names are single letters
const MAX_ROWS: u8 = 26;

/// Column numbers are single digits
const MAX_COLS: u8 = 9;

/// Angle between two consecutive hexagon vertices
pub const HEXAGON_SIDE_ANGLE: f64 = std::f64::consts::TAU / HEXAGON_VERTEX_COUNT as f64;

/// Cell position in offset coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    /// Row index, 0 = row `a` at the bottom
    pub row: u8,
    /// Column index within the row, 0 = westmost cell
    pub col: u8,
}

impl CellCoord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Algebraic name such as `d4`
    pub fn name(&self) -> String {
        format!("{}{}", (b'a' + self.row) as char, self.col + 1)
    }
}

/// Side of a cell where its border label is placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSide {
    West,
    East,
}

/// Categorical fill of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellShade {
    Dark,
    Light,
    Neutral,
}

impl CellShade {
    /// Opacity multiplier applied to the board's base cell opacity
    pub fn opacity_factor(self) -> f64 {
        match self {
            CellShade::Dark => 1.0,
            CellShade::Light => 0.5,
            CellShade::Neutral => 0.0,
        }
    }
}

/// Shade by ring parity: index 0 for even rings, 1 for odd rings
pub const RING_SHADES: [CellShade; 2] = [CellShade::Dark, CellShade::Light];

/// Shade of a cell on the given ring
pub fn shade_for_ring(ring: u8) -> CellShade {
    RING_SHADES[(ring % 2) as usize]
}

/// Abstract cell: everything about a cell that does not depend on scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutCell {
    pub coord: CellCoord,
    pub name: String,
    /// Depth from the board border, 0 on the outline
    pub ring: u8,
    pub label_side: Option<LabelSide>,
}

/// One board cell placed on the drawing plane
#[derive(Clone, Debug, PartialEq)]
pub struct HexCell {
    pub coord: CellCoord,
    pub name: String,
    pub ring: u8,
    pub label_side: Option<LabelSide>,
    pub center: Vec2,
    /// Nominal outline; neighbours share edges exactly
    pub vertices: [Vec2; HEXAGON_VERTEX_COUNT],
    pub shade: CellShade,
}

/// The set of cells of a board shape
#[derive(Clone, Debug)]
pub struct BoardLayout {
    rows: u8,
    cols: u8,
    cells: Vec<LayoutCell>,
}

impl BoardLayout {
    /// The 7-row PIJERSI board
    pub fn pijersi() -> Self {
        Self::layout(BOARD_ROWS, BOARD_COLS)
    }

    /// Build the layout of a board with `rows` rows and `cols` cells in the long rows
    pub fn new(rows: u8, cols: u8) -> Result<Self> {
        if rows == 0 || rows > MAX_ROWS {
            return Err(DrawError::InvalidDimension(format!(
                "rows must be in 1..={}, got {}",
                MAX_ROWS, rows
            )));
        }
        if cols < 2 || cols > MAX_COLS {
            return Err(DrawError::InvalidDimension(format!(
                "cols must be in 2..={}, got {}",
                MAX_COLS, cols
            )));
        }

        Ok(Self::layout(rows, cols))
    }

    fn layout(rows: u8, cols: u8) -> Self {
        let mut cells = Vec::new();
        for row in 0..rows {
            let len = row_len(row, cols);
            let row_depth = row.min(rows - 1 - row);

            for col in 0..len {
                let coord = CellCoord::new(row, col);
                let col_depth = col.min(len - 1 - col);
                let label_side = if col == 0 {
                    Some(LabelSide::West)
                } else if col == len - 1 {
                    Some(LabelSide::East)
                } else {
                    None
                };

                cells.push(LayoutCell {
                    coord,
                    name: coord.name(),
                    ring: row_depth.min(col_depth),
                    label_side,
                });
            }
        }

        Self { rows, cols, cells }
    }

    /// Cells in row-major order, `a1` first
    pub fn cells(&self) -> &[LayoutCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Center of a cell, with the board centered on the origin
    pub fn center(&self, coord: CellCoord, side: f64) -> Vec2 {
        let width = hexagon_width(side);
        let len = row_len(coord.row, self.cols) as f64;
        let x = (coord.col as f64 - (len - 1.0) / 2.0) * width;
        let y = ((self.rows as f64 - 1.0) / 2.0 - coord.row as f64) * 1.5 * side;
        Vec2::new(x, y)
    }

    /// Place every cell on the drawing plane
    pub fn hex_cells(&self, side: f64) -> Result<Vec<HexCell>> {
        check_length("cell_size", side)?;

        Ok(self
            .cells
            .iter()
            .map(|cell| {
                let center = self.center(cell.coord, side);
                HexCell {
                    coord: cell.coord,
                    name: cell.name.clone(),
                    ring: cell.ring,
                    label_side: cell.label_side,
                    center,
                    vertices: hexagon_vertices(center, side),
                    shade: shade_for_ring(cell.ring),
                }
            })
            .collect())
    }

    /// Horizontal extent of the widest row, outline to outline
    pub fn grid_width(&self, side: f64) -> f64 {
        self.cols as f64 * hexagon_width(side)
    }

    /// Vertical extent of the grid, top vertex to bottom vertex
    pub fn grid_height(&self, side: f64) -> f64 {
        (1.5 * (self.rows as f64 - 1.0) + 2.0) * side
    }
}

/// Number of cells in a row
pub fn row_len(row: u8, cols: u8) -> u8 {
    if row % 2 == 0 {
        cols - 1
    } else {
        cols
    }
}

/// Flat-to-flat width of a pointy-top hexagon
pub fn hexagon_width(side: f64) -> f64 {
    3f64.sqrt() * side
}

/// Pointy-top vertices, starting east of the upper point and turning counter-clockwise
pub fn hexagon_vertices(center: Vec2, radius: f64) -> [Vec2; HEXAGON_VERTEX_COUNT] {
    let points = regular_polygon(center, radius, HEXAGON_VERTEX_COUNT, HEXAGON_SIDE_ANGLE / 2.0);
    let mut vertices = [Vec2::ZERO; HEXAGON_VERTEX_COUNT];
    vertices.copy_from_slice(&points);
    vertices
}
