use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{AARectangle, Point};

/// Axis-aligned rectangle shape, defined by its center and dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn try_new(center: Point, width: f64, height: f64) -> Result<Self> {
        ensure!(center.is_finite(), "invalid rectangle center: {center:?}");
        ensure!(
            width.is_finite() && width >= 0.0 && height.is_finite() && height >= 0.0,
            "invalid rectangle dimensions: {width} x {height}"
        );
        Ok(Rectangle {
            center,
            width,
            height,
        })
    }

    /// The four corners, in the same order as [`AARectangle::corners`].
    pub fn corners(&self) -> [Point; 4] {
        self.bbox().corners()
    }
}

impl Shape for Rectangle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn bbox(&self) -> AARectangle {
        AARectangle::from_center(self.center, self.width, self.height)
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }
}

impl Transformable for Rectangle {
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
        self.width *= k;
        self.height *= k;
        self
    }
}
