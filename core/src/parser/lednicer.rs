use crate::prelude::{AirfoilError, AirfoilResult, Point};
use crate::telemetry::LogManager;

/// Converts Lednicer surfaces into one trailing-edge-to-trailing-edge contour.
///
/// `header` carries `(n_top, n_bottom)`; `rows` are the data rows following
/// it. The upper surface is reversed and the first lower-surface row, which
/// repeats the leading edge, is skipped.
pub fn normalize(header: Point, rows: &[Point], logger: &LogManager) -> AirfoilResult<Vec<Point>> {
    let n_top = surface_count(header.x)?;
    let n_bottom = surface_count(header.y)?;

    if n_top > rows.len() {
        return Err(AirfoilError::Parse(format!(
            "header announces {} upper points but only {} rows follow",
            n_top,
            rows.len()
        )));
    }

    let lower_rows = rows.len() - n_top;
    if lower_rows != n_bottom {
        logger.warn(
            "parse",
            &format!(
                "header announces {} lower points, found {}",
                n_bottom, lower_rows
            ),
        );
    }

    let contour: Vec<Point> = rows[..n_top]
        .iter()
        .rev()
        .chain(rows.iter().skip(n_top + 1))
        .copied()
        .collect();

    if contour.is_empty() {
        return Err(AirfoilError::Parse("Lednicer file has no surface points".into()));
    }
    Ok(contour)
}

fn surface_count(value: f64) -> AirfoilResult<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(AirfoilError::Parse(format!(
            "invalid surface point count {}",
            value
        )))
    }
}
