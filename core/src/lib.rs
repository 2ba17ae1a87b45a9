//! Core parsing, normalization and export for airfoil coordinate files.
//!
//! Source files in either the plain or the Lednicer layout are normalized into
//! a single contour, optionally refined through an external panel program, and
//! written back out as xfoil text, SVG or DXF.

pub mod airfoil;
pub mod export;
pub mod math;
pub mod parser;
pub mod prelude;
pub mod refine;
pub mod telemetry;

pub use airfoil::Airfoil;
pub use export::{ExportOptions, OutputFormat};
pub use prelude::{AirfoilError, AirfoilResult, Exporter, PanelRefiner, Point};
