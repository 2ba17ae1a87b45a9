use crate::prelude::Point;

/// Axis-aligned affine map: independent scale per axis followed by an offset.
///
/// The `then_*` builders compose left to right, so
/// `Affine::scale(2.0).then_translate(1.0, 0.0)` scales first and translates
/// the scaled result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Affine {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn scale(factor: f64) -> Self {
        Self::IDENTITY.then_scale(factor)
    }

    pub fn then_scale(self, factor: f64) -> Self {
        self.then_scale_axes(factor, factor)
    }

    pub fn then_scale_axes(self, fx: f64, fy: f64) -> Self {
        Self {
            scale_x: self.scale_x * fx,
            scale_y: self.scale_y * fy,
            offset_x: self.offset_x * fx,
            offset_y: self.offset_y * fy,
        }
    }

    /// Mirrors about the x axis.
    pub fn then_flip_vertical(self) -> Self {
        self.then_scale_axes(1.0, -1.0)
    }

    pub fn then_translate(self, dx: f64, dy: f64) -> Self {
        Self {
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y + dy,
            ..self
        }
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale_x + self.offset_x,
            point.y * self.scale_y + self.offset_y,
        )
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_applies_in_order() {
        let map = Affine::scale(10.0)
            .then_flip_vertical()
            .then_translate(1.0, 2.0);
        assert_eq!(map.apply(Point::new(0.5, 0.1)), Point::new(6.0, 1.0));
    }

    #[test]
    fn scaling_after_translation_scales_offset() {
        let map = Affine::IDENTITY.then_translate(1.0, 1.0).then_scale(3.0);
        assert_eq!(map.apply(Point::new(0.0, 0.0)), Point::new(3.0, 3.0));
    }
}
