//! In-memory description of one output image
//!
//! A [`Document`] is an ordered list of [`Primitive`]s on a canvas. Order is
//! significant: later primitives are painted over earlier ones.

use pijersi_core::Vec2;

/// Visible rectangle of the drawing plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    /// Top-left corner in drawing units
    pub min: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(min: Vec2, width: f64, height: f64) -> Self {
        Self { min, width, height }
    }

    /// Canvas of the given size centered on the origin
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(Vec2::new(-width / 2.0, -height / 2.0), width, height)
    }

    #[cfg(test)]
    pub(crate) fn max(&self) -> Vec2 {
        self.min + Vec2::new(self.width, self.height)
    }

    /// Whether a point lies inside the canvas, borders included
    #[cfg(test)]
    pub(crate) fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// One stop of a gradient
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the radius, 0.0 to 1.0
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

/// Radial gradient in drawing units
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f64,
    pub stops: Vec<GradientStop>,
}

/// How the inside of a shape is painted
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Paint {
    #[default]
    None,
    Color(String),
    RadialGradient(RadialGradient),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Outline of a shape
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub line_join: Option<LineJoin>,
    pub line_cap: Option<LineCap>,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            line_join: None,
            line_cap: None,
        }
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.line_join = Some(join);
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = Some(cap);
        self
    }
}

/// Paint attributes shared by all shapes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Paint,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<Stroke>,
}

impl Style {
    /// Solid fill, no outline
    pub fn filled(color: impl Into<String>) -> Self {
        Self {
            fill: Paint::Color(color.into()),
            ..Default::default()
        }
    }

    /// Outline only
    pub fn outlined(stroke: Stroke) -> Self {
        Self {
            fill: Paint::None,
            fill_opacity: None,
            stroke: Some(stroke),
        }
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Horizontal alignment of a text run around its position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Text label, vertically centered on its position
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub position: Vec2,
    pub content: String,
    pub font_family: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub fill: String,
}

/// One drawable shape instruction
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Polygon { points: Vec<Vec2>, style: Style },
    Circle { center: Vec2, radius: f64, style: Style },
    Rect { origin: Vec2, width: f64, height: f64, style: Style },
    Line { from: Vec2, to: Vec2, style: Style },
    Text(Text),
}

impl Primitive {
    /// Element name of the primitive in the output markup
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Polygon { .. } => "polygon",
            Primitive::Circle { .. } => "circle",
            Primitive::Rect { .. } => "rect",
            Primitive::Line { .. } => "line",
            Primitive::Text(_) => "text",
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Primitive::Polygon { style, .. }
            | Primitive::Circle { style, .. }
            | Primitive::Rect { style, .. }
            | Primitive::Line { style, .. } => Some(style),
            Primitive::Text(_) => None,
        }
    }
}

/// Complete description of one output file
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub canvas: Canvas,
    /// Physical size in centimetres, written as the SVG width and height
    pub physical_size_cm: Option<(f64, f64)>,
    /// Color painted over the whole canvas before any primitive
    pub background: Option<String>,
    pub primitives: Vec<Primitive>,
}

impl Document {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            physical_size_cm: None,
            background: None,
            primitives: Vec::new(),
        }
    }

    /// Derive the physical size from a drawing-unit-per-centimetre scale
    pub fn with_scale(mut self, units_per_cm: f64) -> Self {
        self.physical_size_cm = Some((
            self.canvas.width / units_per_cm,
            self.canvas.height / units_per_cm,
        ));
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitive kinds in draw order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.primitives.iter().map(Primitive::kind).collect()
    }

    /// Number of primitives of the given kind
    pub fn count(&self, kind: &str) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }
}
