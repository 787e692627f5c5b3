//! Cube drawings: single face documents and the manufacturing sheet
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: build_piece_face(), build_cube_sheet() - orchestration
//! - Level 2: CubeBuilder::face(), CubeBuilder::sheet()
//! - Level 3: draw_glyph(), draw_symbol()
//! - Level 4: CubeMetrics

use std::f64::consts::TAU;

use pijersi_core::{
    check_length, CubeColor, CubeKind, DrawError, FaceKind, FaceVariant, Result, Vec2,
    SHEET_COLS, SHEET_LAYOUT, SHEET_ROWS,
};

use crate::config::{
    CubeConfig, SheetMode, COLOR_TO_CUT_1, COLOR_TO_CUT_2, LASER_CUT_LINE_WIDTH,
};
use crate::document::{
    Canvas, Document, LineCap, LineJoin, Primitive, Stroke, Style, Text, TextAnchor,
};

/// Points sampled along the wise lemniscate
const LEMNISCATE_POINTS: usize = 100;

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Build one face document with the default configuration
///
/// `cell_size` is the cube side in drawing units.
pub fn build_piece_face(
    kind: CubeKind,
    color: CubeColor,
    face: FaceKind,
    cell_size: f64,
) -> Result<Document> {
    CubeBuilder::new(CubeConfig::default()).face(kind, color, face, cell_size)
}

/// Same as [`build_piece_face`], with the variant given by name
pub fn build_piece_face_by_name(
    kind: &str,
    color: &str,
    face: &str,
    cell_size: f64,
) -> Result<Document> {
    check_length("cell_size", cell_size)?;
    let variant = FaceVariant::parse(kind, color, face)?;
    build_piece_face(variant.kind, variant.color, variant.face, cell_size)
}

/// Build the cube sheet with the default configuration
pub fn build_cube_sheet(cell_size: f64, mode: SheetMode) -> Result<Document> {
    CubeBuilder::new(CubeConfig::default()).sheet(cell_size, mode)
}

/// Cube document builder
#[derive(Clone, Debug, Default)]
pub struct CubeBuilder {
    config: CubeConfig,
}

impl CubeBuilder {
    pub fn new(config: CubeConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // LEVEL 2 - PHASES
    // ========================================================================

    /// One face, alone on a canvas of `side + 2 * cut margin`
    pub fn face(
        &self,
        kind: CubeKind,
        color: CubeColor,
        face: FaceKind,
        cell_size: f64,
    ) -> Result<Document> {
        let m = self.metrics(cell_size)?;
        let variant = FaceVariant::lookup(kind, color, face)?;

        let size = m.side + 2.0 * m.cut;
        let mut doc =
            Document::new(Canvas::new(Vec2::ZERO, size, size)).with_scale(m.units_per_cm);
        let origin = Vec2::new(m.cut, m.cut);
        let ink = color.ink_paint();

        doc.push(Primitive::Rect {
            origin,
            width: m.side,
            height: m.side,
            style: Style::filled(color.body_paint()),
        });

        // Border inset by its own width
        let inset = origin + Vec2::new(m.line_width, m.line_width) * 1.5;
        let inner = m.side - 3.0 * m.line_width;
        doc.push(Primitive::Rect {
            origin: inset,
            width: inner,
            height: inner,
            style: Style::outlined(Stroke::new(ink, m.line_width).with_join(LineJoin::Miter)),
        });

        match variant.face {
            FaceKind::Top => draw_glyph(&mut doc, kind, origin, ink, &m),
            FaceKind::Bottom => self.draw_symbol(&mut doc, kind, origin, ink, &m),
        }

        tracing::debug!(
            "Built face {} ({} primitives)",
            variant.file_stem(),
            doc.len()
        );

        Ok(doc)
    }

    /// The full cube set laid out on its support
    pub fn sheet(&self, cell_size: f64, mode: SheetMode) -> Result<Document> {
        let m = self.metrics(cell_size)?;
        let pitch = m.cut + m.side + m.shift;
        let width = 2.0 * m.cut + SHEET_COLS as f64 * pitch + m.shift;
        let height = 2.0 * m.cut + SHEET_ROWS as f64 * pitch + m.shift;

        let mut doc =
            Document::new(Canvas::new(Vec2::ZERO, width, height)).with_scale(m.units_per_cm);

        match mode {
            SheetMode::Render => {
                doc.background = Some(self.config.support_color.clone());
            }
            SheetMode::LaserSupport => doc.push(Primitive::Rect {
                origin: Vec2::new(m.cut, m.cut),
                width: width - 2.0 * m.cut,
                height: height - 2.0 * m.cut,
                style: Style::filled("white")
                    .with_stroke(Stroke::new(COLOR_TO_CUT_2, LASER_CUT_LINE_WIDTH)),
            }),
            SheetMode::LaserDecorations => doc.push(Primitive::Rect {
                origin: Vec2::ZERO,
                width,
                height,
                style: Style::filled("white").with_stroke(Stroke::new("black", 1.0)),
            }),
        }

        for (row, cubes) in SHEET_LAYOUT.iter().enumerate() {
            for (col, cube) in cubes.iter().enumerate() {
                let Some(cube) = cube else { continue };
                let origin = Vec2::new(m.shift + col as f64 * pitch, m.shift + row as f64 * pitch);

                match mode {
                    SheetMode::Render => {
                        doc.push(Primitive::Rect {
                            origin,
                            width: m.side,
                            height: m.side,
                            style: Style::filled(cube.color.body_paint()),
                        });
                        draw_glyph(&mut doc, cube.kind, origin, cube.color.ink_paint(), &m);
                    }
                    SheetMode::LaserSupport => doc.push(Primitive::Rect {
                        origin: origin - Vec2::new(m.cut, m.cut) / 2.0,
                        width: m.side + m.cut,
                        height: m.side + m.cut,
                        style: Style::filled("white")
                            .with_stroke(Stroke::new(COLOR_TO_CUT_1, LASER_CUT_LINE_WIDTH)),
                    }),
                    SheetMode::LaserDecorations => {
                        draw_glyph(&mut doc, cube.kind, origin, "black", &m);
                    }
                }
            }
        }

        tracing::debug!("Built cube sheet {} ({} primitives)", mode.file_stem(), doc.len());

        Ok(doc)
    }

    // ========================================================================
    // LEVEL 3 - STEPS
    // ========================================================================

    /// Identity letter centered on the face
    fn draw_symbol(
        &self,
        doc: &mut Document,
        kind: CubeKind,
        origin: Vec2,
        ink: &str,
        m: &CubeMetrics,
    ) {
        doc.push(Primitive::Text(Text {
            position: origin + Vec2::new(m.side, m.side) / 2.0,
            content: kind.symbol().to_string(),
            font_family: self.config.symbol_font_family.clone(),
            font_size: m.decoration_side,
            anchor: TextAnchor::Middle,
            fill: ink.to_string(),
        }));
    }

    // ========================================================================
    // LEVEL 4 - UTILITIES
    // ========================================================================

    fn metrics(&self, cell_size: f64) -> Result<CubeMetrics> {
        let side = check_length("cell_size", cell_size)?;
        let cfg = &self.config;
        let side_cm = check_length("cube_side_cm", cfg.cube_side_cm)?;
        if !(cfg.decoration_ratio > 0.0 && cfg.decoration_ratio < 1.0) {
            return Err(DrawError::InvalidDimension(format!(
                "decoration_ratio must be in (0, 1), got {}",
                cfg.decoration_ratio
            )));
        }

        for (name, value) in [
            ("cut_margin_cm", cfg.cut_margin_cm),
            ("line_width_cm", cfg.line_width_cm),
            ("decoration_line_width_cm", cfg.decoration_line_width_cm),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(DrawError::InvalidDimension(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        let units_per_cm = side / side_cm;
        let line_width = cfg.line_width_cm * units_per_cm;
        // The inset border spans three line widths
        if 3.0 * line_width >= side {
            return Err(DrawError::InvalidDimension(format!(
                "line_width_cm must be less than a third of the cube side, got {}",
                cfg.line_width_cm
            )));
        }

        Ok(CubeMetrics {
            side,
            units_per_cm,
            cut: cfg.cut_margin_cm * units_per_cm,
            shift: side,
            line_width,
            decoration_line_width: cfg.decoration_line_width_cm * units_per_cm,
            decoration_side: cfg.decoration_ratio * side,
        })
    }
}

/// Cube sizes in drawing units
#[derive(Clone, Copy, Debug)]
struct CubeMetrics {
    side: f64,
    units_per_cm: f64,
    cut: f64,
    /// Gap between cubes on the sheet
    shift: f64,
    line_width: f64,
    decoration_line_width: f64,
    decoration_side: f64,
}

/// Kind glyph centered on the cube whose top-left corner is `origin`
fn draw_glyph(doc: &mut Document, kind: CubeKind, origin: Vec2, ink: &str, m: &CubeMetrics) {
    let d = m.decoration_side;
    let center = origin + Vec2::new(m.side, m.side) / 2.0;
    let stroke = Stroke::new(ink, m.decoration_line_width);

    match kind {
        CubeKind::Rock => doc.push(Primitive::Circle {
            center,
            radius: d / 2.0,
            style: Style::outlined(stroke),
        }),
        CubeKind::Paper => doc.push(Primitive::Rect {
            origin: center - Vec2::new(d, d) / 2.0,
            width: d,
            height: d,
            style: Style::outlined(stroke.with_join(LineJoin::Miter)),
        }),
        CubeKind::Scissors => {
            let stroke = stroke.with_cap(LineCap::Butt);
            let h = d / 2.0;
            doc.push(Primitive::Line {
                from: center + Vec2::new(-h, -h),
                to: center + Vec2::new(h, h),
                style: Style::outlined(stroke.clone()),
            });
            doc.push(Primitive::Line {
                from: center + Vec2::new(h, -h),
                to: center + Vec2::new(-h, h),
                style: Style::outlined(stroke),
            });
        }
        CubeKind::Wise => doc.push(Primitive::Polygon {
            points: lemniscate(center, d / 2.0, d),
            style: Style::outlined(stroke),
        }),
    }
}

/// Lemniscate of Bernoulli, `half_width` wide on each side and `height` tall
fn lemniscate(center: Vec2, half_width: f64, height: f64) -> Vec<Vec2> {
    (0..LEMNISCATE_POINTS)
        .map(|i| {
            let angle = i as f64 * TAU / LEMNISCATE_POINTS as f64;
            let (sin, cos) = angle.sin_cos();
            let denom = 1.0 + sin * sin;
            center + Vec2::new(half_width * cos / denom, height * cos * sin / denom)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pijersi_core::{FACE_CATALOG, SHEET_LAYOUT};

    #[test]
    fn test_faces_share_canvas_size() {
        let docs: Vec<Document> = FACE_CATALOG
            .iter()
            .map(|v| build_piece_face(v.kind, v.color, v.face, 40.0).unwrap())
            .collect();

        let first = docs[0].canvas;
        for doc in &docs {
            assert_eq!(doc.canvas, first);
            assert_eq!(doc.physical_size_cm, docs[0].physical_size_cm);
        }
        assert!((first.width - 40.0 * (1.0 + 2.0 * 0.01 / 1.6)).abs() < 1e-9);
    }

    #[test]
    fn test_top_face_glyphs() {
        let kinds = |kind| {
            build_piece_face(kind, CubeColor::Black, FaceKind::Top, 40.0)
                .unwrap()
                .kinds()
        };
        assert_eq!(kinds(CubeKind::Rock), vec!["rect", "rect", "circle"]);
        assert_eq!(kinds(CubeKind::Paper), vec!["rect", "rect", "rect"]);
        assert_eq!(kinds(CubeKind::Scissors), vec!["rect", "rect", "line", "line"]);
        assert_eq!(kinds(CubeKind::Wise), vec!["rect", "rect", "polygon"]);
    }

    #[test]
    fn test_bottom_face_symbol() {
        let doc =
            build_piece_face(CubeKind::Wise, CubeColor::White, FaceKind::Bottom, 40.0).unwrap();
        match doc.primitives.last() {
            Some(Primitive::Text(text)) => {
                assert_eq!(text.content, "W");
                assert_eq!(text.fill, "black");
                let cut = 40.0 * 0.01 / 1.6;
                assert!((text.position - Vec2::new(20.0 + cut, 20.0 + cut)).norm() < 1e-9);
            }
            other => panic!("expected symbol, got {:?}", other),
        }
    }

    #[test]
    fn test_ink_contrasts_with_body() {
        let doc = build_piece_face(CubeKind::Rock, CubeColor::Black, FaceKind::Top, 40.0).unwrap();
        let fill = |p: &Primitive| p.style().cloned().unwrap_or_default();
        assert_eq!(fill(&doc.primitives[0]).fill, crate::document::Paint::Color("black".into()));
        assert_eq!(fill(&doc.primitives[2]).stroke.unwrap().color, "white");
    }

    #[test]
    fn test_lemniscate_is_symmetric() {
        let points = lemniscate(Vec2::ZERO, 10.0, 20.0);
        assert_eq!(points.len(), LEMNISCATE_POINTS);
        // Starts on the east tip, crosses the center halfway between the lobes
        assert!((points[0] - Vec2::new(10.0, 0.0)).norm() < 1e-9);
        assert!(points[LEMNISCATE_POINTS / 4].norm() < 1e-9);
    }

    #[test]
    fn test_face_errors() {
        assert!(matches!(
            build_piece_face(CubeKind::Rock, CubeColor::White, FaceKind::Top, -1.0),
            Err(DrawError::InvalidDimension(_))
        ));
        assert!(matches!(
            build_piece_face_by_name("X", "A", "top", 40.0),
            Err(DrawError::UnknownPieceVariant { .. })
        ));
        assert!(matches!(
            build_piece_face_by_name("rock", "white", "top", -1.0),
            Err(DrawError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_invalid_config_sizes() {
        let base = CubeConfig::default();
        let face = |config: CubeConfig| {
            CubeBuilder::new(config).face(CubeKind::Rock, CubeColor::White, FaceKind::Top, 40.0)
        };

        // 0.6 cm is 15 units at this scale: the inset border would be negative
        let thick = CubeConfig {
            line_width_cm: 0.6,
            ..base.clone()
        };
        assert!(matches!(face(thick.clone()), Err(DrawError::InvalidDimension(_))));
        assert!(matches!(
            CubeBuilder::new(thick).sheet(40.0, SheetMode::Render),
            Err(DrawError::InvalidDimension(_))
        ));

        let negative = [
            CubeConfig {
                line_width_cm: -0.01,
                ..base.clone()
            },
            CubeConfig {
                decoration_line_width_cm: -0.15,
                ..base.clone()
            },
            CubeConfig {
                cut_margin_cm: -0.01,
                ..base.clone()
            },
        ];
        for config in negative {
            assert!(matches!(face(config), Err(DrawError::InvalidDimension(_))));
        }

        let thick_but_valid = CubeConfig {
            line_width_cm: 0.5,
            ..base
        };
        let doc = face(thick_but_valid).unwrap();
        for primitive in &doc.primitives {
            if let Primitive::Rect { width, height, .. } = primitive {
                assert!(*width > 0.0 && *height > 0.0);
            }
        }
    }

    #[test]
    fn test_sheet_modes() {
        let cube_count = SHEET_LAYOUT.iter().flatten().flatten().count();

        let render = build_cube_sheet(40.0, SheetMode::Render).unwrap();
        assert!(render.background.is_some());
        // One body per cube plus the paper glyphs
        assert_eq!(render.count("rect"), cube_count + 8);

        let support = build_cube_sheet(40.0, SheetMode::LaserSupport).unwrap();
        assert_eq!(support.count("rect"), cube_count + 1);
        assert_eq!(support.len(), cube_count + 1);

        let decorations = build_cube_sheet(40.0, SheetMode::LaserDecorations).unwrap();
        assert_eq!(decorations.count("circle"), 8);
        assert_eq!(decorations.count("line"), 16);
        assert_eq!(decorations.count("polygon"), 4);
        assert_eq!(decorations.count("rect"), 1 + 8);
    }

    #[test]
    fn test_sheet_size() {
        let doc = build_cube_sheet(40.0, SheetMode::Render).unwrap();
        let cut = 40.0 * 0.01 / 1.6;
        let expected = 2.0 * cut + 6.0 * (cut + 80.0) + 40.0;
        assert!((doc.canvas.width - expected).abs() < 1e-9);
        assert!((doc.canvas.height - expected).abs() < 1e-9);
    }
}
