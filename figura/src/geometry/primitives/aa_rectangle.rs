use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Axis-aligned rectangle, used as the bounding box of every shape.
///
/// Stored by its extremes; width, height and center are always derived from them.
/// A zero width or height is valid (degenerate or fully collapsed shapes).
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct AARectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl AARectangle {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(AARectangle {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle of size `width` x `height` centered at `center`.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "invalid rectangle dimensions: {width} x {height}"
        );
        let (hw, hh) = (width / 2.0, height / 2.0);
        AARectangle {
            x_min: center.0 - hw,
            y_min: center.1 - hh,
            x_max: center.0 + hw,
            y_max: center.1 + hh,
        }
    }

    /// Smallest rectangle containing all `points`, `None` if there are none.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let Point(x, y) = points.next()?;
        let seed = AARectangle {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
        };
        Some(points.fold(seed, |r, Point(x, y)| AARectangle {
            x_min: f64::min(r.x_min, x),
            y_min: f64::min(r.y_min, y),
            x_max: f64::max(r.x_max, x),
            y_max: f64::max(r.y_max, y),
        }))
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: AARectangle, b: AARectangle) -> AARectangle {
        AARectangle {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }

    /// Returns the four corners of `self`, counterclockwise starting at the top right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
        ]
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn is_finite(&self) -> bool {
        [self.x_min, self.y_min, self.x_max, self.y_max]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Whether `point` lies inside or on the border of `self`.
    pub fn contains(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
