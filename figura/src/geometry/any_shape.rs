use anyhow::Result;
use log::debug;

use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{AARectangle, Diamond, Point, Rectangle, Triangle};
use crate::geometry::{scale_about_point, validate_scale_factor};
use crate::report::{CollectionReport, ReportConfig};

/// Closed set of supported shapes, dispatched by value.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Rectangle(Rectangle),
    Diamond(Diamond),
    Triangle(Triangle),
}

impl Shape for AnyShape {
    fn centroid(&self) -> Point {
        match self {
            AnyShape::Rectangle(r) => r.centroid(),
            AnyShape::Diamond(d) => d.centroid(),
            AnyShape::Triangle(t) => t.centroid(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            AnyShape::Rectangle(r) => r.area(),
            AnyShape::Diamond(d) => d.area(),
            AnyShape::Triangle(t) => t.area(),
        }
    }

    fn bbox(&self) -> AARectangle {
        match self {
            AnyShape::Rectangle(r) => r.bbox(),
            AnyShape::Diamond(d) => d.bbox(),
            AnyShape::Triangle(t) => t.bbox(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AnyShape::Rectangle(r) => r.name(),
            AnyShape::Diamond(d) => d.name(),
            AnyShape::Triangle(t) => t.name(),
        }
    }
}

impl Transformable for AnyShape {
    fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        match self {
            AnyShape::Rectangle(r) => {
                r.move_by(dx, dy);
            }
            AnyShape::Diamond(d) => {
                d.move_by(dx, dy);
            }
            AnyShape::Triangle(t) => {
                t.move_by(dx, dy);
            }
        }
        self
    }

    fn move_to(&mut self, pos: Point) -> &mut Self {
        match self {
            AnyShape::Rectangle(r) => {
                r.move_to(pos);
            }
            AnyShape::Diamond(d) => {
                d.move_to(pos);
            }
            AnyShape::Triangle(t) => {
                t.move_to(pos);
            }
        }
        self
    }

    fn scale(&mut self, k: f64) -> &mut Self {
        match self {
            AnyShape::Rectangle(r) => {
                r.scale(k);
            }
            AnyShape::Diamond(d) => {
                d.scale(k);
            }
            AnyShape::Triangle(t) => {
                t.scale(k);
            }
        }
        self
    }
}

impl From<Rectangle> for AnyShape {
    fn from(r: Rectangle) -> Self {
        AnyShape::Rectangle(r)
    }
}

impl From<Diamond> for AnyShape {
    fn from(d: Diamond) -> Self {
        AnyShape::Diamond(d)
    }
}

impl From<Triangle> for AnyShape {
    fn from(t: Triangle) -> Self {
        AnyShape::Triangle(t)
    }
}

/// Ordered collection owning a heterogeneous set of shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeCollection {
    shapes: Vec<AnyShape>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: impl Into<AnyShape>) {
        self.shapes.push(shape.into());
    }

    pub fn shapes(&self) -> &[AnyShape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyShape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(|s| s.area()).sum()
    }

    /// Smallest axis-aligned rectangle enclosing the bounding boxes of all shapes.
    /// `None` for an empty collection.
    pub fn bbox(&self) -> Option<AARectangle> {
        self.shapes
            .iter()
            .map(|s| s.bbox())
            .reduce(AARectangle::bounding_rect)
    }

    pub fn report(&self, config: ReportConfig) -> CollectionReport {
        CollectionReport::new(&self.shapes, config)
    }

    /// Scales every shape by `k` about `pivot`.
    ///
    /// The scaled shapes are computed on a copy of the collection, which only replaces the current
    /// shapes once every one of them was scaled successfully: either all shapes are scaled or none.
    pub fn scale_about_point(&mut self, pivot: Point, k: f64) -> Result<()> {
        validate_scale_factor(k)?;
        debug!(
            "scaling {} shapes by {k} about ({}, {})",
            self.len(),
            pivot.0,
            pivot.1
        );
        let mut scaled = self.shapes.clone();
        for shape in scaled.iter_mut() {
            scale_about_point(shape, pivot, k)?;
        }
        self.shapes = scaled;
        Ok(())
    }
}

impl FromIterator<AnyShape> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = AnyShape>>(iter: I) -> Self {
        ShapeCollection {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a AnyShape;
    type IntoIter = std::slice::Iter<'a, AnyShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
