use super::format_number;
use crate::airfoil::Airfoil;
use crate::prelude::{AirfoilResult, Exporter};
use std::io::Write;

/// Writes the name line followed by one `"  x y"` line per point.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainExporter;

impl Exporter for PlainExporter {
    fn export(&self, airfoil: &Airfoil, out: &mut dyn Write) -> AirfoilResult<()> {
        writeln!(out, "{}", airfoil.name())?;
        for point in airfoil.coordinates() {
            writeln!(out, "  {} {}", format_number(point.x), format_number(point.y))?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::prelude::Point;

    #[test]
    fn sample_file_is_reproduced() {
        let airfoil = parse_str("Sample\n0.0 0.0\n0.5 0.05\n1.0 0.0\n0.5 -0.05\n").unwrap();
        let mut out = Vec::new();
        PlainExporter.export(&airfoil, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sample\n  0.0 0.0\n  0.5 0.05\n  1.0 0.0\n  0.5 -0.05\n"
        );
    }

    #[test]
    fn reparsing_export_is_exact() {
        let text = "odd\n1.0 0.0012599999999\n0.3333333333333333 0.0781\n1e-7 -2.5e-3\n0.0 0.0\n";
        let airfoil = parse_str(text).unwrap();
        let mut out = Vec::new();
        PlainExporter.export(&airfoil, &mut out).unwrap();

        let again = parse_str(&String::from_utf8(out.clone()).unwrap()).unwrap();
        assert_eq!(again, airfoil);

        let mut second = Vec::new();
        PlainExporter.export(&again, &mut second).unwrap();
        assert_eq!(second, out);
    }

    fn exported(airfoil: &Airfoil) -> String {
        let mut out = Vec::new();
        PlainExporter.export(airfoil, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn three_points() -> Vec<Point> {
        vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, -0.01),
        ]
    }

    #[test]
    fn blank_name_keeps_every_point() {
        let airfoil = Airfoil::new("", three_points()).unwrap();
        let again = parse_str(&exported(&airfoil)).unwrap();
        assert_eq!(again.name(), "airfoil");
        assert_eq!(again.coordinates(), airfoil.coordinates());
        assert_eq!(again.len(), 3);
    }

    #[test]
    fn multi_line_name_adds_no_points() {
        let airfoil = Airfoil::new("NACA\n0.5 0.5\r\n", three_points()).unwrap();
        let text = exported(&airfoil);
        assert!(text.starts_with("NACA 0.5 0.5\n"));

        let again = parse_str(&text).unwrap();
        assert_eq!(again, airfoil);
        assert_eq!(again.len(), 3);
        assert_eq!(again.coordinates()[0], Point::new(1.0, 0.0));
    }
}
