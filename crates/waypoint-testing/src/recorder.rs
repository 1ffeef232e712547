//! Collects delivered events for later assertions.

use std::cell::RefCell;
use std::rc::Rc;

use waypoint_input::{ListenerHandle, Pointer, PointerButton, PointerEvent, PointerEventKind};

#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<PointerEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every `kind` event delivered to `pointer`.
    pub fn attach(&self, pointer: &Pointer, kind: PointerEventKind) -> ListenerHandle {
        let events = Rc::clone(&self.events);
        pointer.on(kind, move |event| events.borrow_mut().push(event.clone()))
    }

    /// Records every kind of event delivered to `pointer`.
    pub fn attach_all(&self, pointer: &Pointer) -> Vec<ListenerHandle> {
        PointerEventKind::ALL
            .iter()
            .map(|kind| self.attach(pointer, *kind))
            .collect()
    }

    pub fn events(&self) -> Vec<PointerEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn kinds(&self) -> Vec<PointerEventKind> {
        self.events.borrow().iter().map(|event| event.kind).collect()
    }

    pub fn buttons(&self) -> Vec<PointerButton> {
        self.events.borrow().iter().map(|event| event.button).collect()
    }

    pub fn count_button(&self, button: PointerButton) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.button == button)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
