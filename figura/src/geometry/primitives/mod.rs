mod aa_rectangle;
mod diamond;
mod point;
mod rectangle;
mod triangle;

#[doc(inline)]
pub use aa_rectangle::AARectangle;
#[doc(inline)]
pub use diamond::Diamond;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rectangle::Rectangle;
#[doc(inline)]
pub use triangle::Triangle;
