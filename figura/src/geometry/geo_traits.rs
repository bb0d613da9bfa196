use crate::geometry::primitives::AARectangle;
use crate::geometry::primitives::Point;

/// Trait for shared properties of the planar shapes.
///
/// Everything is derived from the shape's current state on every call, nothing is cached.
pub trait Shape {
    /// Reference point of the shape: the target of [`Transformable::move_to`] and the fixed point of [`Transformable::scale`]
    fn centroid(&self) -> Point;

    /// Area of the interior of the shape, never negative
    fn area(&self) -> f64;

    /// Minimal axis-aligned rectangle containing the shape
    fn bbox(&self) -> AARectangle;

    /// Fixed label of the concrete shape, used for reporting
    fn name(&self) -> &'static str;
}

/// Trait for shapes that can be translated and scaled in place.
pub trait Transformable: Shape {
    /// Translates every point of `self` by (`dx`, `dy`).
    fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self;

    /// Translates `self` such that its [`Shape::centroid`] ends up at `pos`.
    fn move_to(&mut self, pos: Point) -> &mut Self {
        let Point(cx, cy) = self.centroid();
        self.move_by(pos.0 - cx, pos.1 - cy)
    }

    /// Scales `self` by factor `k` about its own [`Shape::centroid`].
    ///
    /// `k` must be finite and non-negative, see [`validate_scale_factor`](crate::geometry::validate_scale_factor).
    fn scale(&mut self, k: f64) -> &mut Self;
}
