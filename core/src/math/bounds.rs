use crate::prelude::Point;

/// Axis-aligned extent of a point set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let bounds = points.iter().skip(1).fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        );
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_has_no_bounds() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn bounds_cover_every_point() {
        let points = [
            Point::new(1.0, 0.0),
            Point::new(0.5, 0.06),
            Point::new(0.0, 0.0),
            Point::new(0.5, -0.04),
        ];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.min, Point::new(0.0, -0.04));
        assert_eq!(bounds.max, Point::new(1.0, 0.06));
        assert_eq!(bounds.width(), 1.0);
    }
}
