pub mod listeners;
pub mod native;
pub mod pointer;
pub mod registry;
pub mod types;

pub use hit_test::{
    entities_under, hit_test, is_entity_under_pointer, is_under_pointer, BoundsProvider,
};
pub use listeners::{DispatchReport, ListenerBus, ListenerFn, ListenerHandle};
pub use native::{
    normalize, resolve_pointer_id, EventNormalizer, NativeEventType, NativePointerButton,
    NativePointerEvent,
};
pub use pointer::{Pointer, PointerState};
pub use registry::Pointers;
pub use types::{
    PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId, PointerType,
};

pub mod prelude {
    pub use super::hit_test::BoundsProvider;
    pub use super::native::{NativeEventType, NativePointerButton, NativePointerEvent};
    pub use super::pointer::Pointer;
    pub use super::types::{
        PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId, PointerType,
    };
}
