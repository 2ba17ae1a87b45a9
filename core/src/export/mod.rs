//! Output encodings and format dispatch.

pub mod dxf;
pub mod plain;
pub mod scoped;
pub mod svg;

pub use dxf::{DxfDrawing, DxfExporter};
pub use plain::PlainExporter;
pub use svg::{SvgDocument, SvgExporter};

use crate::airfoil::Airfoil;
use crate::prelude::{AirfoilError, AirfoilResult, Exporter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub const DEFAULT_STROKE: f64 = 10.0;
pub const DEFAULT_CHORD: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-column coordinate text readable by xfoil.
    #[default]
    Xfoil,
    /// Stroked, unfilled outline.
    Svg,
    /// Closed polyline on the `AIRFOIL` layer.
    Dxf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Xfoil, OutputFormat::Svg, OutputFormat::Dxf];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Xfoil => "xfoil",
            OutputFormat::Svg => "svg",
            OutputFormat::Dxf => "dxf",
        }
    }

    /// File extension used for archive entries.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xfoil => "dat",
            OutputFormat::Svg => "svg",
            OutputFormat::Dxf => "dxf",
        }
    }

    pub fn exporter(self, options: &ExportOptions) -> Box<dyn Exporter> {
        match self {
            OutputFormat::Xfoil => Box::new(PlainExporter),
            OutputFormat::Svg => Box::new(SvgExporter::new(options.stroke)),
            OutputFormat::Dxf => Box::new(DxfExporter::new(options.chord.unwrap_or(DEFAULT_CHORD))),
        }
    }

    pub fn write(
        self,
        airfoil: &Airfoil,
        options: &ExportOptions,
        out: &mut dyn Write,
    ) -> AirfoilResult<()> {
        self.exporter(options).export(airfoil, out)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                AirfoilError::Parse(format!(
                    "invalid format {}; choices are xfoil, svg, dxf",
                    s
                ))
            })
    }
}

/// Per-format knobs. Formats ignore the options that do not apply to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub stroke: f64,
    /// DXF chord length; [`DEFAULT_CHORD`] when unset.
    pub chord: Option<f64>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            stroke: DEFAULT_STROKE,
            chord: None,
        }
    }
}

/// Shortest decimal that parses back to the same value, keeping one decimal
/// on integral values.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
        assert!("iges".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Xfoil);
    }

    #[test]
    fn numbers_keep_a_decimal_point() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(1.0), "1.0");
        assert_eq!(format_number(-50.0), "-50.0");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-0.00126), "-0.00126");
    }
}
