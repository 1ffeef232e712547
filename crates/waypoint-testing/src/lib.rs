//! Testing utilities and harness for Waypoint

pub mod recorder;
pub mod scene;
pub mod surface;

pub use recorder::EventRecorder;
pub use scene::{EntityId, TestScene};
pub use surface::InputTestRule;

pub mod prelude {
    pub use crate::recorder::EventRecorder;
    pub use crate::scene::{EntityId, TestScene};
    pub use crate::surface::InputTestRule;
}
