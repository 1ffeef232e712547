//! Live state of a single pointer.
//!
//! A [`Pointer`] is a cheap, cloneable handle. Game code keeps handles and
//! registers listeners on them; the registry applies events through the same
//! shared state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use waypoint_ui_graphics::Point;

use super::listeners::{emit, DispatchReport, ListenerBus, ListenerHandle};
use super::types::{
    PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId, PointerType,
};
use crate::error::ListenerResult;

/// Snapshot of what is known about a pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Origin until the first `down` or `move` arrives.
    pub last_page_pos: Point,
    pub active_buttons: PointerButtons,
    pub pointer_type: PointerType,
    /// Sequence number of the last applied event.
    pub last_sequence: Option<u64>,
}

impl PointerState {
    pub const UNSET_POSITION: Point = Point::ZERO;

    fn new(pointer_type: PointerType) -> Self {
        Self {
            last_page_pos: Self::UNSET_POSITION,
            active_buttons: PointerButtons::NONE,
            pointer_type,
            last_sequence: None,
        }
    }

    fn apply(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                self.last_page_pos = event.page_pos;
                self.active_buttons.insert(event.button);
            }
            PointerEventKind::Move => {
                self.last_page_pos = event.page_pos;
            }
            PointerEventKind::Up => {
                self.active_buttons.remove(event.button);
            }
            PointerEventKind::Cancel => {
                self.active_buttons.clear();
            }
        }
        self.pointer_type = event.pointer_type;
        self.last_sequence = Some(event.sequence);
    }
}

struct PointerInner {
    id: PointerId,
    state: Cell<PointerState>,
    listeners: RefCell<ListenerBus>,
}

#[derive(Clone)]
pub struct Pointer {
    inner: Rc<PointerInner>,
}

impl Pointer {
    pub(crate) fn new(id: PointerId, pointer_type: PointerType) -> Self {
        Self {
            inner: Rc::new(PointerInner {
                id,
                state: Cell::new(PointerState::new(pointer_type)),
                listeners: RefCell::new(ListenerBus::new()),
            }),
        }
    }

    pub fn id(&self) -> PointerId {
        self.inner.id
    }

    pub fn is_primary(&self) -> bool {
        self.inner.id.is_primary()
    }

    pub fn state(&self) -> PointerState {
        self.inner.state.get()
    }

    pub fn last_page_pos(&self) -> Point {
        self.state().last_page_pos
    }

    pub fn active_buttons(&self) -> PointerButtons {
        self.state().active_buttons
    }

    pub fn pointer_type(&self) -> PointerType {
        self.state().pointer_type
    }

    pub fn is_pressed(&self, button: PointerButton) -> bool {
        self.active_buttons().contains(button)
    }

    /// True while any button is held.
    pub fn is_dragging(&self) -> bool {
        !self.active_buttons().is_empty()
    }

    pub fn has_received_events(&self) -> bool {
        self.state().last_sequence.is_some()
    }

    /// Registers an infallible listener for `kind`.
    pub fn on<F>(&self, kind: PointerEventKind, listener: F) -> ListenerHandle
    where
        F: Fn(&PointerEvent) + 'static,
    {
        self.try_on(kind, move |event| {
            listener(event);
            Ok(())
        })
    }

    /// Registers a listener whose failures are logged and otherwise ignored.
    pub fn try_on<F>(&self, kind: PointerEventKind, listener: F) -> ListenerHandle
    where
        F: Fn(&PointerEvent) -> ListenerResult + 'static,
    {
        self.inner
            .listeners
            .borrow_mut()
            .add(kind, Rc::new(listener))
    }

    /// Returns false if the listener was not registered on this pointer.
    pub fn off(&self, handle: ListenerHandle) -> bool {
        self.inner.listeners.borrow_mut().remove(handle)
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn listener_count(&self, kind: PointerEventKind) -> usize {
        self.inner.listeners.borrow().len(kind)
    }

    /// Updates state from `event`, then fans it out to the listeners of its
    /// kind. State is fully written before the first listener runs.
    pub fn apply(&self, event: &PointerEvent) -> DispatchReport {
        debug_assert_eq!(event.pointer_id, self.inner.id);

        let mut state = self.inner.state.get();
        state.apply(event);
        self.inner.state.set(state);

        log::trace!(
            "{} {} {:?} at ({}, {})",
            self.inner.id,
            event.kind.as_str(),
            event.button,
            event.page_pos.x,
            event.page_pos.y
        );

        let listeners = self.inner.listeners.borrow().snapshot(event.kind);
        emit(self.inner.id, &listeners, event)
    }

    pub fn ptr_eq(&self, other: &Pointer) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pointer")
            .field("id", &self.inner.id)
            .field("state", &self.inner.state.get())
            .finish()
    }
}
