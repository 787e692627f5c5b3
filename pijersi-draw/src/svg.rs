//! SVG serialization of documents
//!
//! Output is plain SVG 1.1 using only `rect`, `polygon`, `circle`, `line`,
//! `text` and `radialGradient`. Primitives are written in document order.
//! Numbers are printed with at most three decimals, so identical documents
//! always give byte-identical files.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use pijersi_core::{DrawError, Result, Vec2};

use crate::document::{
    Document, LineCap, LineJoin, Paint, Primitive, RadialGradient, Style, Text, TextAnchor,
};

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serialize a document to SVG text
///
/// Fails with `InvalidDimension` if any coordinate or size is not finite.
pub fn serialize(document: &Document) -> Result<String> {
    let mut out = SvgWriter::default();
    out.document(document)?;
    Ok(out.buf)
}

/// Serialize a document and write it to `path`
///
/// The text goes to a temporary file next to `path` which is then renamed
/// over it, so `path` either receives the complete document or is left
/// untouched.
pub fn write(document: &Document, path: &Path) -> Result<()> {
    let text = serialize(document)?;

    let io_error = |source: std::io::Error| DrawError::IoWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(text.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), text.len());

    Ok(())
}

/// Gradients get sequential ids in the order their primitives appear
fn collect_gradients(document: &Document) -> Vec<&RadialGradient> {
    document
        .primitives
        .iter()
        .filter_map(|p| match p.style().map(|s| &s.fill) {
            Some(Paint::RadialGradient(g)) => Some(g),
            _ => None,
        })
        .collect()
}

#[derive(Default)]
struct SvgWriter {
    buf: String,
    next_gradient: usize,
}

impl SvgWriter {
    fn document(&mut self, doc: &Document) -> Result<()> {
        let c = doc.canvas;
        let (width, height) = match doc.physical_size_cm {
            Some((w, h)) => (format!("{}cm", num(w)?), format!("{}cm", num(h)?)),
            None => (num(c.width)?, num(c.height)?),
        };

        self.line(XML_HEADER);
        self.line(&format!(
            r#"<svg xmlns="{}" version="1.1" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            SVG_NAMESPACE,
            width,
            height,
            num(c.min.x)?,
            num(c.min.y)?,
            num(c.width)?,
            num(c.height)?
        ));

        let gradients = collect_gradients(doc);
        if !gradients.is_empty() {
            self.line("<defs>");
            for (id, gradient) in gradients.into_iter().enumerate() {
                self.gradient(id, gradient)?;
            }
            self.line("</defs>");
        }

        if let Some(background) = &doc.background {
            self.line(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                num(c.min.x)?,
                num(c.min.y)?,
                num(c.width)?,
                num(c.height)?,
                escape(background)
            ));
        }

        for primitive in &doc.primitives {
            self.primitive(primitive)?;
        }

        self.line("</svg>");
        Ok(())
    }

    fn gradient(&mut self, id: usize, g: &RadialGradient) -> Result<()> {
        self.line(&format!(
            r#"<radialGradient id="{}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">"#,
            gradient_id(id),
            num(g.center.x)?,
            num(g.center.y)?,
            num(g.radius)?
        ));
        for stop in &g.stops {
            self.line(&format!(
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                num(stop.offset)?,
                escape(&stop.color),
                num(stop.opacity)?
            ));
        }
        self.line("</radialGradient>");
        Ok(())
    }

    fn primitive(&mut self, primitive: &Primitive) -> Result<()> {
        let element = match primitive {
            Primitive::Polygon { points, style } => {
                format!(
                    r#"<polygon points="{}"{}/>"#,
                    point_list(points)?,
                    self.style(style)?
                )
            }
            Primitive::Circle {
                center,
                radius,
                style,
            } => format!(
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                num(center.x)?,
                num(center.y)?,
                num(*radius)?,
                self.style(style)?
            ),
            Primitive::Rect {
                origin,
                width,
                height,
                style,
            } => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
                num(origin.x)?,
                num(origin.y)?,
                num(*width)?,
                num(*height)?,
                self.style(style)?
            ),
            Primitive::Line { from, to, style } => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                num(from.x)?,
                num(from.y)?,
                num(to.x)?,
                num(to.y)?,
                self.style(style)?
            ),
            Primitive::Text(text) => text_element(text)?,
        };
        self.line(&element);
        Ok(())
    }

    /// Attribute string for a style, with a leading space
    fn style(&mut self, style: &Style) -> Result<String> {
        let mut attrs = String::new();

        let fill = match &style.fill {
            Paint::None => "none".to_string(),
            Paint::Color(color) => escape(color),
            Paint::RadialGradient(_) => {
                let id = self.next_gradient;
                self.next_gradient += 1;
                format!("url(#{})", gradient_id(id))
            }
        };
        let _ = write!(attrs, r#" fill="{}""#, fill);

        if let Some(opacity) = style.fill_opacity {
            let _ = write!(attrs, r#" fill-opacity="{}""#, num(opacity)?);
        }

        if let Some(stroke) = &style.stroke {
            let _ = write!(
                attrs,
                r#" stroke="{}" stroke-width="{}""#,
                escape(&stroke.color),
                num(stroke.width)?
            );
            if let Some(join) = stroke.line_join {
                let join = match join {
                    LineJoin::Miter => "miter",
                    LineJoin::Round => "round",
                    LineJoin::Bevel => "bevel",
                };
                let _ = write!(attrs, r#" stroke-linejoin="{}""#, join);
            }
            if let Some(cap) = stroke.line_cap {
                let cap = match cap {
                    LineCap::Butt => "butt",
                    LineCap::Round => "round",
                    LineCap::Square => "square",
                };
                let _ = write!(attrs, r#" stroke-linecap="{}""#, cap);
            }
        }

        Ok(attrs)
    }

    fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }
}

fn text_element(text: &Text) -> Result<String> {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    Ok(format!(
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="{}" dominant-baseline="central" fill="{}">{}</text>"#,
        num(text.position.x)?,
        num(text.position.y)?,
        escape(&text.font_family),
        num(text.font_size)?,
        anchor,
        escape(&text.fill),
        escape(&text.content)
    ))
}

fn gradient_id(id: usize) -> String {
    format!("gradient{}", id)
}

fn point_list(points: &[Vec2]) -> Result<String> {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", num(p.x)?, num(p.y)?);
    }
    Ok(out)
}

/// Shortest decimal form with at most three decimals
fn num(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(DrawError::InvalidDimension(format!(
            "cannot serialize non-finite value {}",
            value
        )));
    }

    let mut s = format!("{:.3}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    Ok(s)
}

/// Escape XML special characters in attribute values and text content
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Canvas, GradientStop, Stroke};

    fn sample() -> Document {
        let mut doc = Document::new(Canvas::centered(20.0, 10.0)).with_background("#BF9B7A");
        doc.push(Primitive::Polygon {
            points: vec![Vec2::new(0.0, 0.0), Vec2::new(1.5, 0.0), Vec2::new(0.0, 2.25)],
            style: Style::filled("red").with_stroke(Stroke::new("black", 0.5)),
        });
        doc.push(Primitive::Text(Text {
            position: Vec2::new(1.0, -1.0),
            content: "a<1>".to_string(),
            font_family: "Helvetica".to_string(),
            font_size: 3.0,
            anchor: TextAnchor::Middle,
            fill: "black".to_string(),
        }));
        doc
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(1.0).unwrap(), "1");
        assert_eq!(num(1.5).unwrap(), "1.5");
        assert_eq!(num(2.0 / 3.0).unwrap(), "0.667");
        assert_eq!(num(-0.0001).unwrap(), "0");
        assert_eq!(num(-12.25).unwrap(), "-12.25");
        assert!(matches!(num(f64::NAN), Err(DrawError::InvalidDimension(_))));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a&b<"c">'"#), "a&amp;b&lt;&quot;c&quot;&gt;&apos;");
    }

    #[test]
    fn test_serialize_sample() {
        let text = serialize(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], XML_HEADER);
        assert!(lines[1].contains(r#"viewBox="-10 -5 20 10""#));
        assert!(lines[1].contains(r#"width="20" height="10""#));
        assert_eq!(
            lines[2],
            r##"<rect x="-10" y="-5" width="20" height="10" fill="#BF9B7A"/>"##
        );
        assert_eq!(
            lines[3],
            r#"<polygon points="0,0 1.5,0 0,2.25" fill="red" stroke="black" stroke-width="0.5"/>"#
        );
        assert!(lines[4].ends_with(">a&lt;1&gt;</text>"));
        assert_eq!(lines[5], "</svg>");
    }

    #[test]
    fn test_physical_size() {
        let doc = sample().with_scale(4.0);
        let text = serialize(&doc).unwrap();
        assert!(text.contains(r#"width="5cm" height="2.5cm""#));
    }

    #[test]
    fn test_gradients_are_numbered_in_order() {
        let mut doc = Document::new(Canvas::centered(10.0, 10.0));
        for i in 0..2 {
            doc.push(Primitive::Circle {
                center: Vec2::new(i as f64, 0.0),
                radius: 1.0,
                style: Style::default().with_fill(Paint::RadialGradient(RadialGradient {
                    center: Vec2::new(i as f64, 0.0),
                    radius: 1.0,
                    stops: vec![GradientStop {
                        offset: 0.0,
                        color: "black".to_string(),
                        opacity: 0.5,
                    }],
                })),
            });
        }

        let text = serialize(&doc).unwrap();
        let defs = text.find("<defs>").unwrap();
        let first_use = text.find("url(#gradient0)").unwrap();
        assert!(defs < first_use);
        assert!(text.contains(r#"<radialGradient id="gradient1""#));
        assert!(text.find("url(#gradient0)").unwrap() < text.find("url(#gradient1)").unwrap());
    }

    #[test]
    fn test_non_finite_coordinates_fail() {
        let mut doc = sample();
        doc.push(Primitive::Circle {
            center: Vec2::new(f64::NAN, 0.0),
            radius: 1.0,
            style: Style::default(),
        });
        assert!(matches!(serialize(&doc), Err(DrawError::InvalidDimension(_))));
    }

    #[test]
    fn test_write_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.svg");
        std::fs::write(&path, "old").unwrap();

        write(&sample(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), serialize(&sample()).unwrap());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_serialization_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.svg");
        let mut doc = sample();
        doc.canvas.width = f64::INFINITY;

        assert!(write(&doc, &path).is_err());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
