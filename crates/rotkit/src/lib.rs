#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use rotkit_rotation as rotation;

#[doc(inline)]
pub use rotkit_geometry as geometry;
