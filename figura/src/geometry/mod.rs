pub mod geo_traits;
pub mod primitives;

mod any_shape;
mod pivot;

#[doc(inline)]
pub use any_shape::AnyShape;
#[doc(inline)]
pub use any_shape::ShapeCollection;
#[doc(inline)]
pub use pivot::scale_about_point;
#[doc(inline)]
pub use pivot::validate_scale_factor;
