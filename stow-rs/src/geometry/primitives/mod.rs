mod anchor;
mod footprint;

#[doc(inline)]
pub use anchor::Anchor;
#[doc(inline)]
pub use footprint::Footprint;
