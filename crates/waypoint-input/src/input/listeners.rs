//! Per-pointer listener lists.
//!
//! Each event kind owns an ordered list of callbacks. Dispatch works on a
//! snapshot of that list, so callbacks may register or unregister listeners
//! (on any pointer) while an event is being delivered; such changes apply
//! to the next event.

use std::rc::Rc;

use smallvec::SmallVec;

use super::types::{PointerEvent, PointerEventKind, PointerId};
use crate::error::ListenerResult;

pub type ListenerFn = Rc<dyn Fn(&PointerEvent) -> ListenerResult>;

/// Returned by registration; pass it back to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    kind: PointerEventKind,
    id: u64,
}

impl ListenerHandle {
    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }
}

pub(crate) type ListenerSnapshot = SmallVec<[(u64, ListenerFn); 4]>;

#[derive(Default)]
pub struct ListenerBus {
    next_id: u64,
    lists: [Vec<(u64, ListenerFn)>; 4],
}

impl ListenerBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: PointerEventKind, listener: ListenerFn) -> ListenerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.lists[kind.index()].push((id, listener));
        ListenerHandle { kind, id }
    }

    /// Returns false if the handle was already removed.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let list = &mut self.lists[handle.kind.index()];
        match list.iter().position(|(id, _)| *id == handle.id) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self, kind: PointerEventKind) -> usize {
        self.lists[kind.index()].len()
    }

    pub(crate) fn snapshot(&self, kind: PointerEventKind) -> ListenerSnapshot {
        self.lists[kind.index()]
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect()
    }
}

/// Outcome of delivering one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failed: usize,
}

impl DispatchReport {
    pub fn merge(&mut self, other: DispatchReport) {
        self.delivered += other.delivered;
        self.failed += other.failed;
    }
}

/// Invokes every listener in order. A failing listener is logged and
/// skipped; it never stops delivery to the rest.
pub(crate) fn emit(
    pointer: PointerId,
    listeners: &ListenerSnapshot,
    event: &PointerEvent,
) -> DispatchReport {
    let mut report = DispatchReport::default();
    for (id, listener) in listeners {
        report.delivered += 1;
        if let Err(err) = listener(event) {
            report.failed += 1;
            log::warn!(
                "{} listener #{} on {} failed for event #{}: {}",
                event.kind.as_str(),
                id,
                pointer,
                event.sequence,
                err
            );
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListenerError;
    use std::cell::RefCell;
    use waypoint_ui_graphics::Point;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> ListenerFn {
        let log = Rc::clone(log);
        Rc::new(move |_event: &PointerEvent| -> ListenerResult {
            log.borrow_mut().push(tag);
            Ok(())
        })
    }

    #[test]
    fn delivers_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ListenerBus::new();
        bus.add(PointerEventKind::Down, recorder(&log, "a"));
        bus.add(PointerEventKind::Down, recorder(&log, "b"));
        bus.add(PointerEventKind::Up, recorder(&log, "up"));
        bus.add(PointerEventKind::Down, recorder(&log, "c"));

        let event = PointerEvent::new(PointerEventKind::Down, Point::ZERO);
        let report = emit(
            PointerId::PRIMARY,
            &bus.snapshot(PointerEventKind::Down),
            &event,
        );

        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(report.delivered, 3);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn failing_listener_does_not_stop_the_rest() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ListenerBus::new();
        bus.add(PointerEventKind::Move, recorder(&log, "first"));
        bus.add(
            PointerEventKind::Move,
            Rc::new(|_event: &PointerEvent| -> ListenerResult {
                Err(ListenerError::failed("nope"))
            }),
        );
        bus.add(PointerEventKind::Move, recorder(&log, "last"));

        let event = PointerEvent::new(PointerEventKind::Move, Point::ZERO);
        let report = emit(
            PointerId::PRIMARY,
            &bus.snapshot(PointerEventKind::Move),
            &event,
        );

        assert_eq!(*log.borrow(), vec!["first", "last"]);
        assert_eq!(report, DispatchReport { delivered: 3, failed: 1 });
    }

    #[test]
    fn remove_is_deterministic() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ListenerBus::new();
        let a = bus.add(PointerEventKind::Up, recorder(&log, "a"));
        bus.add(PointerEventKind::Up, recorder(&log, "b"));

        assert!(bus.remove(a));
        assert!(!bus.remove(a));
        assert_eq!(bus.len(PointerEventKind::Up), 1);

        let event = PointerEvent::new(PointerEventKind::Up, Point::ZERO);
        emit(PointerId::PRIMARY, &bus.snapshot(PointerEventKind::Up), &event);
        assert_eq!(*log.borrow(), vec!["b"]);
    }
}
