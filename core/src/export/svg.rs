use super::{format_number, scoped};
use crate::airfoil::Airfoil;
use crate::math::{Affine, Bounds};
use crate::prelude::{AirfoilError, AirfoilResult, Exporter, Point};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Drawing units per chord unit.
pub const SVG_SCALE: f64 = 1000.0;

/// Minimal SVG document holding stroked polygons.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    title: Option<String>,
    content: String,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn polygon(&mut self, points: &[Point], stroke_width: f64) {
        self.shape("polygon", points, stroke_width, "black");
    }

    pub fn polyline(&mut self, points: &[Point], stroke_width: f64, color: &str) {
        self.shape("polyline", points, stroke_width, color);
    }

    fn shape(&mut self, element: &str, points: &[Point], stroke_width: f64, color: &str) {
        let points = points
            .iter()
            .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        self.content += &format!(
            r#"<{} fill="none" points="{}" stroke="{}" stroke-width="{}" />"#,
            element,
            points,
            escape(color),
            format_number(stroke_width)
        );
    }

    pub fn render(&self) -> String {
        let title = self
            .title
            .as_deref()
            .map(|t| format!("<title>{}</title>", escape(t)))
            .unwrap_or_default();
        format!(
            r#"<?xml version="1.0" encoding="utf-8" ?>
<svg baseProfile="full" height="{}" version="1.1" width="{}" xmlns="http://www.w3.org/2000/svg" xmlns:ev="http://www.w3.org/2001/xml-events" xmlns:xlink="http://www.w3.org/1999/xlink">{}<defs />{}</svg>
"#,
            format_number(self.height),
            format_number(self.width),
            title,
            self.content
        )
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Outline in SVG space: y grows downwards and the drawing starts at
/// `2 * stroke` on both axes.
#[derive(Debug, Clone)]
pub struct SvgOutline {
    pub points: Vec<Point>,
    pub width: f64,
    pub height: f64,
}

pub fn outline(airfoil: &Airfoil, stroke: f64) -> SvgOutline {
    let flipped = Affine::scale(SVG_SCALE)
        .then_flip_vertical()
        .apply_all(&airfoil.get_coords(true));
    let min = Bounds::from_points(&flipped).unwrap_or_default().min;

    let margin = stroke * 2.0;
    let points =
        Affine::IDENTITY.then_translate(margin - min.x, margin - min.y).apply_all(&flipped);
    let max = Bounds::from_points(&points).unwrap_or_default().max;

    SvgOutline {
        points,
        width: max.x + stroke * 4.0,
        height: max.y + stroke * 4.0,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SvgExporter {
    stroke: f64,
}

impl SvgExporter {
    pub fn new(stroke: f64) -> Self {
        Self { stroke }
    }

    pub fn document(&self, airfoil: &Airfoil) -> AirfoilResult<SvgDocument> {
        if !self.stroke.is_finite() || self.stroke < 0.0 {
            return Err(AirfoilError::Geometry(format!(
                "stroke width must be non-negative, got {}",
                self.stroke
            )));
        }
        let outline = outline(airfoil, self.stroke);
        let mut doc = SvgDocument::new(outline.width, outline.height).with_title(airfoil.name());
        doc.polygon(&outline.points, self.stroke);
        Ok(doc)
    }
}

impl Exporter for SvgExporter {
    fn export(&self, airfoil: &Airfoil, out: &mut dyn Write) -> AirfoilResult<()> {
        let doc = self.document(airfoil)?;
        scoped::write_through_tempfile(out, ".svg", |path| doc.save(path))
    }
}
