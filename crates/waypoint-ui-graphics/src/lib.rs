//! Pure geometry for Waypoint
//!
//! Points, sizes and axis-aligned rectangles expressed in page space. The
//! input crates consume these read-only; nothing here knows about pointers.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
