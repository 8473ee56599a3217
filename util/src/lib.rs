//! Unopinionated standalone utilities.

mod length;
pub use length::{pct, px, Length};

mod polygon;
pub use polygon::Polygon;

mod unchecked_write;
