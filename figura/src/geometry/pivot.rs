use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::Point;
use crate::util::assertions;

/// Checks that `k` can be used as a scale factor: finite and non-negative.
/// A negative factor would produce a point-reflected shape and is rejected.
pub fn validate_scale_factor(k: f64) -> Result<()> {
    ensure!(k.is_finite(), "scale factor must be a finite number, got {k}");
    ensure!(k >= 0.0, "scale factor must not be negative, got {k}");
    Ok(())
}

/// Scales `shape` by `k` while keeping `pivot` in place.
///
/// Only relies on the [`Transformable`] contract: the shape is first shifted by `(c - pivot) * (k - 1)`,
/// with `c` its own scale center, and then scaled about that (shifted) center.
/// The combined map sends every point `p` to `pivot + (p - pivot) * k`.
///
/// The result is computed on a copy. `shape` is only replaced when its scaled geometry is
/// representable, i.e. its bounding box and area are finite.
pub fn scale_about_point<S>(shape: &mut S, pivot: Point, k: f64) -> Result<()>
where
    S: Transformable + Clone,
{
    validate_scale_factor(k)?;
    let Point(cx, cy) = shape.centroid();
    let dx = (cx - pivot.0) * (k - 1.0);
    let dy = (cy - pivot.1) * (k - 1.0);

    let mut scaled = shape.clone();
    scaled.move_by(dx, dy).scale(k);

    let bbox = scaled.bbox();
    ensure!(
        bbox.is_finite() && scaled.area().is_finite(),
        "scaling {} by {k} about ({}, {}) exceeds the representable coordinate range",
        shape.name(),
        pivot.0,
        pivot.1
    );
    debug_assert!(assertions::bbox_is_valid(&bbox));

    *shape = scaled;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::Shape;
    use crate::geometry::primitives::Rectangle;

    #[test]
    fn rejects_invalid_factors() {
        assert!(validate_scale_factor(-0.5).is_err());
        assert!(validate_scale_factor(f64::NAN).is_err());
        assert!(validate_scale_factor(f64::INFINITY).is_err());
        assert!(validate_scale_factor(0.0).is_ok());
        assert!(validate_scale_factor(2.5).is_ok());
    }

    #[test]
    fn pivot_at_center_only_resizes() {
        let mut r = Rectangle::try_new(Point(5.0, 5.0), 10.0, 5.0).unwrap();
        scale_about_point(&mut r, Point(5.0, 5.0), 2.0).unwrap();
        assert_eq!(r.center, Point(5.0, 5.0));
        assert_eq!(r.area(), 200.0);
    }

    #[test]
    fn zero_factor_collapses_onto_pivot() {
        let mut r = Rectangle::try_new(Point(5.0, 5.0), 10.0, 5.0).unwrap();
        scale_about_point(&mut r, Point(1.0, -1.0), 0.0).unwrap();
        assert_eq!(r.center, Point(1.0, -1.0));
        assert_eq!(r.area(), 0.0);
    }

    #[test]
    fn overflowing_result_leaves_shape_untouched() {
        let mut r = Rectangle::try_new(Point(5.0, 5.0), 10.0, 5.0).unwrap();
        let before = r.clone();

        // the shift alone overflows
        assert!(scale_about_point(&mut r, Point(0.0, 0.0), 1e308).is_err());
        assert_eq!(r, before);

        // bbox stays finite but the area does not
        assert!(scale_about_point(&mut r, Point(5.0, 5.0), 1e160).is_err());
        assert_eq!(r, before);
    }
}
