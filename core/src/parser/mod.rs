//! Text parsing for airfoil coordinate files.
//!
//! The first non-empty line names the airfoil. Every following line that
//! holds exactly two numbers is a data row; anything else (headers, comments,
//! stray control bytes) is dropped without complaint. Two layouts exist:
//!
//! * plain: each row is a point, already in single-contour order,
//! * Lednicer: the first row holds the upper/lower point counts and the two
//!   surfaces are listed separately, both starting at the leading edge.

pub mod lednicer;

use crate::airfoil::Airfoil;
use crate::prelude::{AirfoilError, AirfoilResult, Point};
use crate::telemetry::LogManager;
use std::io::Read;

/// Any value of the first data row above this marks a Lednicer header.
///
/// Chord-normalized coordinates never exceed ~1.0.
pub const LEDNICER_THRESHOLD: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    Plain,
    Lednicer,
}

/// Picks the layout from the first data row.
pub fn detect_convention(first: Point) -> Convention {
    if first.x > LEDNICER_THRESHOLD || first.y > LEDNICER_THRESHOLD {
        Convention::Lednicer
    } else {
        Convention::Plain
    }
}

pub fn parse_reader<R: Read>(mut reader: R) -> AirfoilResult<Airfoil> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_bytes(&bytes)
}

/// Decodes lossily so that non-UTF-8 bytes never abort a parse.
pub fn parse_bytes(bytes: &[u8]) -> AirfoilResult<Airfoil> {
    parse_str(&String::from_utf8_lossy(bytes))
}

pub fn parse_str(text: &str) -> AirfoilResult<Airfoil> {
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
    let name = lines
        .next()
        .map(|line| line.trim().to_string())
        .ok_or_else(|| AirfoilError::Parse("input is empty".into()))?;

    let rows: Vec<Point> = lines.filter_map(parse_row).collect();
    let first = *rows
        .first()
        .ok_or_else(|| AirfoilError::Parse(format!("no coordinate data in '{}'", name)))?;

    let logger = LogManager::new(name.as_str());
    let coordinates = match detect_convention(first) {
        Convention::Plain => {
            logger.detail("parse", &format!("plain layout, {} points", rows.len()));
            rows
        }
        Convention::Lednicer => {
            logger.detail("parse", "Lednicer layout");
            lednicer::normalize(first, &rows[1..], &logger)?
        }
    };

    Airfoil::new(name, coordinates)
}

fn parse_row(line: &str) -> Option<Point> {
    let mut values = line
        .split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|token| !token.is_empty())
        .map(str::parse::<f64>);

    match (values.next(), values.next(), values.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some(Point::new(x, y)),
        _ => None,
    }
}
