use log::error;

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{AARectangle, Point};
use crate::util::FPA;

//Various checks to verify correctness of the geometry
//Used in debug_assert!() blocks

pub fn bbox_is_valid(bbox: &AARectangle) -> bool {
    let valid = bbox.x_min <= bbox.x_max && bbox.y_min <= bbox.y_max;
    if !valid {
        error!("invalid bounding box: {bbox:?}");
    }
    valid
}

/// Every point must lie in the shape's bounding box, within tolerance.
pub fn bbox_encloses<S: Shape + ?Sized>(shape: &S, points: &[Point]) -> bool {
    let bbox = shape.bbox();
    points.iter().all(|Point(x, y)| {
        FPA(*x) >= FPA(bbox.x_min)
            && FPA(*x) <= FPA(bbox.x_max)
            && FPA(*y) >= FPA(bbox.y_min)
            && FPA(*y) <= FPA(bbox.y_max)
    })
}
