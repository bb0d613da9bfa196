use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    /// Returns `self` shifted by (`dx`, `dy`).
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Point(self.0 + dx, self.1 + dy)
    }

    /// Returns the image of `self` under a scaling by `k` with `origin` as fixed point.
    pub fn scale_about(self, origin: Point, k: f64) -> Self {
        Point(
            origin.0 + (self.0 - origin.0) * k,
            origin.1 + (self.1 - origin.1) * k,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_about_keeps_origin() {
        let origin = Point(3.0, -2.0);
        assert_eq!(origin.scale_about(origin, 7.5), origin);
        assert_eq!(Point(5.0, 0.0).scale_about(origin, 2.0), Point(7.0, 2.0));
        assert_eq!(Point(5.0, 0.0).scale_about(origin, 0.0), origin);
    }

    #[test]
    fn distance() {
        assert_eq!(Point(0.0, 0.0).distance(&Point(3.0, 4.0)), 5.0);
        assert_eq!(Point(1.0, 1.0).sq_distance(&Point(2.0, 3.0)), 5.0);
    }
}
