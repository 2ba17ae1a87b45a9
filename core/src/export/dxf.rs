use super::{format_number, scoped};
use crate::airfoil::Airfoil;
use crate::math::Affine;
use crate::prelude::{AirfoilError, AirfoilResult, Exporter, Point};
use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Intermediate scale applied before rescaling to the requested chord.
pub const DXF_SCALE: f64 = 100.0;
pub const AIRFOIL_LAYER: &str = "AIRFOIL";

/// AutoCAD R12 ASCII drawing with named layers and 2-D polylines.
#[derive(Debug, Clone, Default)]
pub struct DxfDrawing {
    layers: Vec<String>,
    polylines: Vec<(String, Vec<Point>)>,
}

impl DxfDrawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, name: &str) {
        if !self.layers.iter().any(|layer| layer == name) {
            self.layers.push(name.to_string());
        }
    }

    pub fn add_polyline(&mut self, points: Vec<Point>, layer: &str) {
        self.polylines.push((layer.to_string(), points));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        group(&mut out, 0, "SECTION");
        group(&mut out, 2, "HEADER");
        group(&mut out, 9, "$ACADVER");
        group(&mut out, 1, "AC1009");
        group(&mut out, 0, "ENDSEC");

        group(&mut out, 0, "SECTION");
        group(&mut out, 2, "TABLES");
        group(&mut out, 0, "TABLE");
        group(&mut out, 2, "LAYER");
        group(&mut out, 70, self.layers.len());
        for layer in &self.layers {
            group(&mut out, 0, "LAYER");
            group(&mut out, 2, layer);
            group(&mut out, 70, 0);
            group(&mut out, 62, 7);
            group(&mut out, 6, "CONTINUOUS");
        }
        group(&mut out, 0, "ENDTAB");
        group(&mut out, 0, "ENDSEC");

        group(&mut out, 0, "SECTION");
        group(&mut out, 2, "ENTITIES");
        for (layer, points) in &self.polylines {
            group(&mut out, 0, "POLYLINE");
            group(&mut out, 8, layer);
            group(&mut out, 66, 1);
            group(&mut out, 70, 0);
            for point in points {
                group(&mut out, 0, "VERTEX");
                group(&mut out, 8, layer);
                group(&mut out, 10, format_number(point.x));
                group(&mut out, 20, format_number(point.y));
                group(&mut out, 30, "0.0");
            }
            group(&mut out, 0, "SEQEND");
            group(&mut out, 8, layer);
        }
        group(&mut out, 0, "ENDSEC");
        group(&mut out, 0, "EOF");
        out
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

fn group(out: &mut String, code: u16, value: impl Display) {
    *out += &format!("{:>3}\n{}\n", code, value);
}

/// Closed contour scaled so that its largest x equals `chord`.
pub fn chord_scaled(airfoil: &Airfoil, chord: f64) -> AirfoilResult<Vec<Point>> {
    if !chord.is_finite() || chord <= 0.0 {
        return Err(AirfoilError::Geometry(format!(
            "chord must be positive, got {}",
            chord
        )));
    }
    let scaled = Affine::scale(DXF_SCALE);
    let current = airfoil.bounds().max.x * DXF_SCALE;
    if current <= 0.0 {
        return Err(AirfoilError::Geometry(format!(
            "'{}' has no positive x extent to scale",
            airfoil.name()
        )));
    }
    Ok(scaled
        .then_scale(chord / current)
        .apply_all(&airfoil.get_coords(true)))
}

#[derive(Debug, Clone, Copy)]
pub struct DxfExporter {
    chord: f64,
}

impl DxfExporter {
    pub fn new(chord: f64) -> Self {
        Self { chord }
    }

    pub fn drawing(&self, airfoil: &Airfoil) -> AirfoilResult<DxfDrawing> {
        let points = chord_scaled(airfoil, self.chord)?;
        let mut drawing = DxfDrawing::new();
        drawing.add_layer(AIRFOIL_LAYER);
        drawing.add_polyline(points, AIRFOIL_LAYER);
        Ok(drawing)
    }
}

impl Exporter for DxfExporter {
    fn export(&self, airfoil: &Airfoil, out: &mut dyn Write) -> AirfoilResult<()> {
        let drawing = self.drawing(airfoil)?;
        scoped::write_through_tempfile(out, ".dxf", |path| drawing.save(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn airfoil(points: &[(f64, f64)]) -> Airfoil {
        Airfoil::new("t", points.iter().copied().map(Point::from).collect()).unwrap()
    }

    /// Vertex coordinates read back from rendered DXF text.
    fn vertices(text: &str) -> Vec<Point> {
        let lines: Vec<&str> = text.lines().collect();
        let mut points = Vec::new();
        let mut x = None;
        for pair in lines.chunks(2) {
            match pair[0].trim() {
                "10" => x = Some(pair[1].parse::<f64>().unwrap()),
                "20" => {
                    if let Some(x) = x.take() {
                        points.push(Point::new(x, pair[1].parse().unwrap()));
                    }
                }
                _ => {}
            }
        }
        points
    }

    #[test]
    fn chord_override_sets_max_x() {
        for source_scale in [1.0, 0.37, 250.0] {
            let foil = airfoil(&[
                (source_scale, 0.0),
                (0.5 * source_scale, 0.06 * source_scale),
                (0.0, 0.0),
                (0.5 * source_scale, -0.04 * source_scale),
            ]);
            let points = chord_scaled(&foil, 50.0).unwrap();
            let max_x = points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
            assert_relative_eq!(max_x, 50.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn no_vertical_flip() {
        let points = chord_scaled(&airfoil(&[(1.0, 0.0), (0.5, 0.1), (0.0, 0.0)]), 100.0).unwrap();
        assert_relative_eq!(points[1].y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn export_writes_one_closed_polyline_on_airfoil_layer() {
        let foil = airfoil(&[(1.0, 0.0), (0.5, 0.06), (0.0, 0.0), (0.5, -0.04)]);
        let mut out = Vec::new();
        DxfExporter::new(50.0).export(&foil, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("\nPOLYLINE\n").count(), 1);
        assert_eq!(text.matches("\nVERTEX\n").count(), foil.len() + 1);
        assert!(text.contains("  2\nAIRFOIL\n"));
        assert!(text.ends_with("  0\nEOF\n"));

        let points = vertices(&text);
        assert_eq!(points.len(), foil.len() + 1);
        assert_eq!(points.first(), points.last());
        let max_x = points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        assert_relative_eq!(max_x, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn exported_vertices_are_the_source_rescaled_to_the_chord() {
        let foil = airfoil(&[(0.8, 0.001), (0.4, 0.052), (0.0, 0.0), (0.35, -0.031)]);
        let chord = 120.0;
        let mut out = Vec::new();
        DxfExporter::new(chord).export(&foil, &mut out).unwrap();
        let emitted = vertices(&String::from_utf8(out).unwrap());

        let source = foil.get_coords(true);
        let max_x = source.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        assert_eq!(emitted.len(), source.len());
        for (got, src) in emitted.iter().zip(&source) {
            assert_relative_eq!(got.x, src.x * chord / max_x, epsilon = 1e-9);
            assert_relative_eq!(got.y, src.y * chord / max_x, epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_extent_is_rejected() {
        let foil = airfoil(&[(0.0, 0.0), (-1.0, 0.1)]);
        assert!(matches!(
            chord_scaled(&foil, 100.0),
            Err(AirfoilError::Geometry(_))
        ));
        assert!(chord_scaled(&airfoil(&[(1.0, 0.0)]), 0.0).is_err());
    }
}
