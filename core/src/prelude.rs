use crate::airfoil::Airfoil;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A single chord-normalized coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Common error type for parsing, refinement and export.
#[derive(thiserror::Error, Debug)]
pub enum AirfoilError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid panel count {0}: at least 3 panels are required")]
    InvalidPanelCount(usize),
    #[error("panel refiner failed: {0}")]
    Refiner(String),
    #[error("geometry error: {0}")]
    Geometry(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AirfoilResult<T> = Result<T, AirfoilError>;

/// Serializes an airfoil into one target encoding.
pub trait Exporter {
    fn export(&self, airfoil: &Airfoil, out: &mut dyn Write) -> AirfoilResult<()>;
}

/// Produces a refined copy of an airfoil with the requested panel count.
///
/// Implementations must not assume anything about the caller's airfoil after
/// returning; the caller decides whether to adopt the refined coordinates.
pub trait PanelRefiner {
    fn refine(&self, airfoil: &Airfoil, panels: usize) -> AirfoilResult<Airfoil>;
}
