mod container;
mod instance;
mod item;
mod placement;
mod solution;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::ItemType;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use solution::Solution;
