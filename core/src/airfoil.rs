use crate::math::Bounds;
use crate::parser;
use crate::prelude::{AirfoilError, AirfoilResult, PanelRefiner, Point};
use crate::telemetry::LogManager;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// A named, chord-normalized airfoil contour.
///
/// Coordinates run from the trailing edge over one surface to the leading
/// edge and back over the other. The closing point is not stored; use
/// [`Airfoil::get_coords`] with `closed = true` to obtain it.
/// Name given to an airfoil whose name is blank.
pub const UNNAMED: &str = "airfoil";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airfoil {
    name: String,
    coordinates: Vec<Point>,
}

impl Airfoil {
    /// The name is kept to a single non-blank line: surrounding whitespace is
    /// trimmed, line breaks become spaces and a blank name becomes
    /// [`UNNAMED`]. Plain export writes it on the first line, so anything else
    /// would not read back.
    pub fn new(name: impl Into<String>, coordinates: Vec<Point>) -> AirfoilResult<Self> {
        if coordinates.is_empty() {
            return Err(AirfoilError::Geometry("airfoil has no coordinates".into()));
        }
        Ok(Self {
            name: single_line_name(&name.into()),
            coordinates,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> AirfoilResult<Self> {
        parser::parse_reader(reader)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> AirfoilResult<Self> {
        parser::parse_bytes(&fs::read(path)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always `false`; an airfoil holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }

    /// Stored contour, with the first point appended when `closed` is set.
    pub fn get_coords(&self, closed: bool) -> Vec<Point> {
        let mut coords = self.coordinates.clone();
        if closed {
            coords.push(self.coordinates[0]);
        }
        coords
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.coordinates).unwrap_or_default()
    }

    /// Replaces the contour with a refined one of `panels` panels.
    ///
    /// The refined contour is only adopted when the refiner succeeds, so a
    /// failed refinement leaves `self` untouched.
    pub fn interpolate(&mut self, refiner: &dyn PanelRefiner, panels: usize) -> AirfoilResult<()> {
        if panels < 3 {
            return Err(AirfoilError::InvalidPanelCount(panels));
        }
        let logger = LogManager::new(self.name.as_str());
        logger.detail("interpolate", &format!("requesting {} panels", panels));

        let refined = refiner.refine(self, panels)?;
        logger.record(
            "interpolate",
            &format!("{} -> {} points", self.len(), refined.len()),
        );
        self.coordinates = refined.coordinates;
        Ok(())
    }
}

fn single_line_name(name: &str) -> String {
    let joined = name
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        UNNAMED.to_string()
    } else {
        joined
    }
}
