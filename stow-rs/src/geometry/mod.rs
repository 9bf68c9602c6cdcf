pub mod geo_enums;
pub mod primitives;
mod rotation;
mod shape;

#[doc(inline)]
pub use rotation::Rotation;
#[doc(inline)]
pub use shape::Shape;
