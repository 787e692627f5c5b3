//! Board drawing: one polygon per cell, optional decorations and labels
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: build_board(), BoardBuilder::build() - orchestration
//! - Level 2: draw_outer(), draw_cell()
//! - Level 3: cell_fill(), draw_rosette(), draw_hatching(), label_position()
//! - Level 4: unit conversion

use std::f64::consts::TAU;

use pijersi_core::{
    check_length, hexagon_width, regular_polygon, BoardLayout, CellShade, DrawError,
    HexCell, LabelSide, Result, Vec2, HEXAGON_VERTEX_COUNT,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{BoardConfig, LabelMode, COLOR_TO_CUT_1, COLOR_TO_ENGRAVE, LASER_CUT_LINE_WIDTH};
use crate::document::{
    Canvas, Document, GradientStop, Paint, Primitive, RadialGradient, Stroke, Style, Text,
    TextAnchor,
};

/// Sides of the rosette drawn on even-ring cells
const ROSETTE_SIDE_COUNT: usize = 12;

/// Rosette radius as a fraction of the cell side
const ROSETTE_SCALE: f64 = 0.70;

/// Label offset below the cell center, as a fraction of the cell side
const LABEL_VERTICAL_SHIFT: f64 = 0.60;

/// Border label offset beside the cell center, as a fraction of the cell side
const LABEL_HORIZONTAL_SHIFT: f64 = 1.20;

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Build the board document with the default configuration
///
/// `cell_size` is the circumradius of a cell in drawing units.
pub fn build_board(rows: u8, cols: u8, cell_size: f64) -> Result<Document> {
    BoardBuilder::new(BoardConfig::default()).build(rows, cols, cell_size)
}

/// Board document builder
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    config: BoardConfig,
}

impl BoardBuilder {
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Lay out the board and emit its primitives
    ///
    /// The canvas is centered on the board center and spans the widest row
    /// and all rows plus a fixed margin: half a cell width left and right,
    /// one side length above and below, and the cut margin all around.
    pub fn build(&self, rows: u8, cols: u8, cell_size: f64) -> Result<Document> {
        let side = check_length("cell_size", cell_size)?;
        let layout = BoardLayout::new(rows, cols)?;
        let cells = layout.hex_cells(side)?;
        let units_per_cm = self.units_per_cm(side)?;
        let cut = self.config.cut_margin_cm * units_per_cm;

        let width = layout.grid_width(side) + hexagon_width(side) + 2.0 * cut;
        let height = layout.grid_height(side) + 2.0 * side + 2.0 * cut;
        let canvas = Canvas::centered(width, height);

        let mut doc = Document::new(canvas).with_scale(units_per_cm);
        self.draw_outer(&mut doc, cut);

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.decoration_seed);
        for cell in &cells {
            self.draw_cell(&mut doc, cell, side, units_per_cm, &mut rng);
        }

        tracing::debug!(
            "Built board {}x{} (cell {:.2}): {} cells, {} primitives",
            rows,
            cols,
            side,
            cells.len(),
            doc.len()
        );

        Ok(doc)
    }

    // ========================================================================
    // LEVEL 2 - PHASES
    // ========================================================================

    /// Paint the board, or outline it for the cutter
    fn draw_outer(&self, doc: &mut Document, cut: f64) {
        let canvas = doc.canvas;
        if self.config.laser {
            doc.push(Primitive::Rect {
                origin: canvas.min + Vec2::new(cut, cut),
                width: canvas.width - 2.0 * cut,
                height: canvas.height - 2.0 * cut,
                style: Style::filled("white")
                    .with_stroke(Stroke::new(COLOR_TO_CUT_1, LASER_CUT_LINE_WIDTH)),
            });
        } else {
            doc.background = Some(self.config.board_color.clone());
        }
    }

    /// Cell outline, then its decoration, then its label
    fn draw_cell(
        &self,
        doc: &mut Document,
        cell: &HexCell,
        side: f64,
        units_per_cm: f64,
        rng: &mut ChaCha8Rng,
    ) {
        let cfg = &self.config;
        let line = Stroke::new(cfg.line_color.clone(), self.line_width(units_per_cm));

        let scale = 1.0 - cfg.hexagon_padding_cm * units_per_cm / hexagon_width(side);
        let inset: Vec<Vec2> = cell
            .vertices
            .iter()
            .map(|v| cell.center + (*v - cell.center) * scale)
            .collect();

        doc.push(Primitive::Polygon {
            points: inset.clone(),
            style: self.cell_fill(cell, scale * side).with_stroke(line.clone()),
        });

        if cfg.decoration {
            if cell.ring % 2 == 0 {
                draw_rosette(doc, cell.center, side, &line);
            } else {
                draw_hatching(doc, &inset, cfg.hatching_segments, &line, rng);
            }
        }

        if let Some(position) = self.label_position(cell, side) {
            doc.push(Primitive::Text(Text {
                position,
                content: cell.name.clone(),
                font_family: cfg.label_font_family.clone(),
                font_size: (hexagon_width(side) * cfg.label_font_ratio).floor().max(1.0),
                anchor: TextAnchor::Middle,
                fill: cfg.label_color.clone(),
            }));
        }
    }

    // ========================================================================
    // LEVEL 3 - STEPS
    // ========================================================================

    /// Shade of a cell as drawn with the current options
    pub fn effective_shade(&self, cell: &HexCell) -> CellShade {
        if self.config.gradient || self.config.opacity {
            cell.shade
        } else {
            CellShade::Neutral
        }
    }

    /// Fill of a cell: ring parity selects the opacity
    fn cell_fill(&self, cell: &HexCell, radius: f64) -> Style {
        let cfg = &self.config;
        let opacity = cfg.hexagon_opacity * self.effective_shade(cell).opacity_factor();

        if cfg.gradient {
            Style::default().with_fill(Paint::RadialGradient(RadialGradient {
                center: cell.center,
                radius,
                stops: vec![
                    GradientStop {
                        offset: 0.0,
                        color: COLOR_TO_ENGRAVE.to_string(),
                        opacity: 0.0,
                    },
                    GradientStop {
                        offset: 1.0,
                        color: COLOR_TO_ENGRAVE.to_string(),
                        opacity,
                    },
                ],
            }))
        } else {
            Style::filled(COLOR_TO_ENGRAVE).with_fill_opacity(opacity * 0.5)
        }
    }

    fn label_position(&self, cell: &HexCell, side: f64) -> Option<Vec2> {
        match self.config.labels {
            LabelMode::None => None,
            LabelMode::All => Some(cell.center + Vec2::new(0.0, LABEL_VERTICAL_SHIFT * side)),
            LabelMode::Border => {
                let shift = Vec2::new(LABEL_HORIZONTAL_SHIFT * side, 0.0);
                cell.label_side.map(|label_side| match label_side {
                    LabelSide::West => cell.center - shift,
                    LabelSide::East => cell.center + shift,
                })
            }
        }
    }

    // ========================================================================
    // LEVEL 4 - UTILITIES
    // ========================================================================

    fn units_per_cm(&self, side: f64) -> Result<f64> {
        let cfg = &self.config;
        let side_cm = check_length("hexagon_side_cm", cfg.hexagon_side_cm)?;
        check_length("line_width_cm", cfg.line_width_cm)?;
        if !(cfg.hexagon_padding_cm >= 0.0 && cfg.cut_margin_cm >= 0.0) {
            return Err(DrawError::InvalidDimension(
                "padding and cut margin must not be negative".to_string(),
            ));
        }
        // Inset cells must keep a positive size
        if cfg.hexagon_padding_cm >= hexagon_width(side_cm) {
            return Err(DrawError::InvalidDimension(format!(
                "hexagon_padding_cm must be less than the cell width {:.3}, got {}",
                hexagon_width(side_cm),
                cfg.hexagon_padding_cm
            )));
        }
        Ok(side / side_cm)
    }

    fn line_width(&self, units_per_cm: f64) -> f64 {
        self.config.line_width_cm * units_per_cm
    }
}

/// Twelve-sided rosette with a hexagon turning on each of its edges
fn draw_rosette(doc: &mut Document, center: Vec2, side: f64, line: &Stroke) {
    let rosette = regular_polygon(center, ROSETTE_SCALE * side, ROSETTE_SIDE_COUNT, 0.0);

    doc.push(Primitive::Polygon {
        points: rosette.clone(),
        style: Style::outlined(line.clone()),
    });

    let turn = TAU / HEXAGON_VERTEX_COUNT as f64;
    for (i, &start) in rosette.iter().enumerate() {
        let end = rosette[(i + 1) % rosette.len()];
        let mut edge = end - start;
        let mut points = Vec::with_capacity(HEXAGON_VERTEX_COUNT);
        let mut vertex = start;

        for _ in 0..HEXAGON_VERTEX_COUNT {
            points.push(vertex);
            vertex = vertex + edge;
            edge = edge.rotated(turn);
        }

        doc.push(Primitive::Polygon {
            points,
            style: Style::outlined(line.clone()),
        });
    }
}

/// Short random strokes between points on the cell outline
fn draw_hatching(
    doc: &mut Document,
    outline: &[Vec2],
    count: usize,
    line: &Stroke,
    rng: &mut ChaCha8Rng,
) {
    for _ in 0..count {
        let mut ends = [Vec2::ZERO; 2];
        for end in &mut ends {
            let picked: Vec<Vec2> = outline.choose_multiple(rng, 2).copied().collect();
            *end = picked[0].lerp(picked[1], rng.gen::<f64>());
        }

        let t: f64 = rng.gen();
        let length: f64 = rng.gen_range(0.02..0.05);
        let a = (t - length / 2.0).clamp(0.0, 1.0);
        let b = (t + length / 2.0).clamp(0.0, 1.0);

        doc.push(Primitive::Line {
            from: ends[0].lerp(ends[1], a),
            to: ends[0].lerp(ends[1], b),
            style: Style::outlined(line.clone()),
        });
    }
}
