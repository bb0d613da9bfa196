use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{AARectangle, Point};

/// Rhombus with axis-aligned diagonals
#[derive(Clone, Debug, PartialEq)]
pub struct Diamond {
    pub center: Point,
    /// Length of the horizontal diagonal
    pub diag_h: f64,
    /// Length of the vertical diagonal
    pub diag_v: f64,
}

impl Diamond {
    pub fn try_new(center: Point, diag_h: f64, diag_v: f64) -> Result<Self> {
        ensure!(center.is_finite(), "invalid diamond center: {center:?}");
        ensure!(
            diag_h.is_finite() && diag_h >= 0.0 && diag_v.is_finite() && diag_v >= 0.0,
            "invalid diamond diagonals: {diag_h}, {diag_v}"
        );
        Ok(Diamond {
            center,
            diag_h,
            diag_v,
        })
    }

    /// Right, top, left and bottom vertex.
    pub fn vertices(&self) -> [Point; 4] {
        let Point(x, y) = self.center;
        let (hh, hv) = (self.diag_h / 2.0, self.diag_v / 2.0);
        [
            Point(x + hh, y),
            Point(x, y + hv),
            Point(x - hh, y),
            Point(x, y - hv),
        ]
    }
}

impl Shape for Diamond {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        (self.diag_h * self.diag_v) / 2.0
    }

    fn bbox(&self) -> AARectangle {
        AARectangle::from_center(self.center, self.diag_h, self.diag_v)
    }

    fn name(&self) -> &'static str {
        "Diamond"
    }
}

impl Transformable for Diamond {
    fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.center = self.center.translate(dx, dy);
        self
    }

    fn move_to(&mut self, pos: Point) -> &mut Self {
        self.center = pos;
        self
    }

    fn scale(&mut self, k: f64) -> &mut Self {
        debug_assert!(k.is_finite() && k >= 0.0, "invalid scale factor: {k}");
        self.diag_h *= k;
        self.diag_v *= k;
        self
    }
}
