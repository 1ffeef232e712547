//! Pointer input for Waypoint
//!
//! Normalizes native mouse, touch and pen events from a host surface into a
//! single event stream, keeps the last known state of every pointer, fans
//! events out to per-pointer listeners and answers "is this entity under the
//! pointer" queries against caller-supplied bounds.
//!
//! Everything runs on the host's event loop: one native event is handled to
//! completion before the next, so the types here are `!Send` and use
//! `Rc`/`Cell` rather than locks.

pub mod config;
mod engine;
pub mod error;
pub mod input;

pub use config::{InputConfig, SecondaryPointerPolicy};
pub use engine::Input;
pub use error::{ListenerError, ListenerResult};
pub use input::*;
pub use waypoint_ui_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::config::{InputConfig, SecondaryPointerPolicy};
    pub use crate::engine::Input;
    pub use crate::error::{ListenerError, ListenerResult};
    pub use crate::input::prelude::*;
    pub use waypoint_ui_graphics::{Point, Rect, Size};
}
