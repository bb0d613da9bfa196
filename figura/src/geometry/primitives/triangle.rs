use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{AARectangle, Point};

/// Triangle defined by its three vertices, in any winding order
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    /// Collinear vertices are accepted, the resulting triangle has no area.
    pub fn try_new(a: Point, b: Point, c: Point) -> Result<Self> {
        ensure!(
            a.is_finite() && b.is_finite() && c.is_finite(),
            "invalid triangle vertices: {a:?}, {b:?}, {c:?}"
        );
        Ok(Triangle { points: [a, b, c] })
    }

    /// Twice the signed area, positive for counterclockwise vertices.
    pub fn signed_double_area(&self) -> f64 {
        let [Point(ax, ay), Point(bx, by), Point(cx, cy)] = self.points;
        (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
    }
}

impl Shape for Triangle {
    fn centroid(&self) -> Point {
        let [a, b, c] = self.points;
        Point((a.0 + b.0 + c.0) / 3.0, (a.1 + b.1 + c.1) / 3.0)
    }

    fn area(&self) -> f64 {
        0.5 * self.signed_double_area().abs()
    }

    fn bbox(&self) -> AARectangle {
        let [Point(ax, ay), Point(bx, by), Point(cx, cy)] = self.points;
        AARectangle {
            x_min: ax.min(bx).min(cx),
            y_min: ay.min(by).min(cy),
            x_max: ax.max(bx).max(cx),
            y_max: ay.max(by).max(cy),
        }
    }

    fn name(&self) -> &'static str {
        "Triangle"
    }
}

impl Transformable for Triangle {
    fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.points = self.points.map(|p| p.translate(dx, dy));
        self
    }

    fn scale(&mut self, k: f64) -> &mut Self {
        debug_assert!(k.is_finite() && k >= 0.0, "invalid scale factor: {k}");
        let centroid = self.centroid();
        self.points = self.points.map(|p| p.scale_about(centroid, k));
        self
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn triangle() -> Triangle {
        Triangle::try_new(Point(0.0, 0.0), Point(5.0, 10.0), Point(10.0, 0.0)).unwrap()
    }

    #[test]
    fn area_ignores_winding_order() {
        let t = triangle();
        let [a, b, c] = t.points;
        let reversed = Triangle::try_new(c, b, a).unwrap();
        assert_eq!(t.area(), 25.0);
        assert_eq!(reversed.area(), 25.0);
        assert_eq!(t.signed_double_area(), -reversed.signed_double_area());
    }

    #[test]
    fn collinear_triangle_has_no_area() {
        let t = Triangle::try_new(Point(0.0, 0.0), Point(1.0, 1.0), Point(3.0, 3.0)).unwrap();
        assert_eq!(t.area(), 0.0);
    }

    #[test]
    fn bbox_center_differs_from_centroid() {
        let t = triangle();
        assert_eq!(t.bbox().centroid(), Point(5.0, 5.0));
        let Point(cx, cy) = t.centroid();
        assert!(approx_eq!(f64, cx, 5.0, ulps = 4));
        assert!(approx_eq!(f64, cy, 10.0 / 3.0, ulps = 4));
    }

    #[test]
    fn move_to_places_centroid() {
        let mut t = triangle();
        t.move_to(Point(0.0, 0.0));
        let Point(cx, cy) = t.centroid();
        assert!(approx_eq!(f64, cx, 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, cy, 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, t.area(), 25.0, epsilon = 1e-9));
    }

    #[test]
    fn scale_keeps_centroid() {
        let mut t = triangle();
        let before = t.centroid();
        t.scale(3.0);
        let after = t.centroid();
        assert!(approx_eq!(f64, before.0, after.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, before.1, after.1, epsilon = 1e-12));
        assert!(approx_eq!(f64, t.area(), 225.0, epsilon = 1e-9));
    }
}
