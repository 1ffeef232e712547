//! Registry of live pointers.
//!
//! The primary pointer is created with the registry and is never removed.
//! Secondary pointers are created the first time their identifier shows up
//! and, under [`SecondaryPointerPolicy::ExpireOnRelease`], dropped once
//! their contact ends: an `up` that releases the last button, or any
//! `cancel`. A hover-only contact has no `up`, so hosts end it with a
//! `cancel` when it leaves the surface.

use indexmap::IndexMap;

use super::listeners::DispatchReport;
use super::pointer::Pointer;
use super::types::{PointerEvent, PointerEventKind, PointerId, PointerType};
use crate::config::SecondaryPointerPolicy;

pub struct Pointers {
    primary: Pointer,
    /// Keyed by native identifier, in creation order.
    secondary: IndexMap<i32, Pointer>,
    policy: SecondaryPointerPolicy,
}

impl Pointers {
    pub fn new(policy: SecondaryPointerPolicy) -> Self {
        Self {
            primary: Pointer::new(PointerId::PRIMARY, PointerType::Mouse),
            secondary: IndexMap::new(),
            policy,
        }
    }

    pub fn primary(&self) -> &Pointer {
        &self.primary
    }

    /// Returns the pointer for `id`, creating a secondary pointer on first
    /// contact.
    pub fn resolve(&mut self, id: PointerId) -> Pointer {
        self.resolve_typed(id, PointerType::Unknown)
    }

    fn resolve_typed(&mut self, id: PointerId, pointer_type: PointerType) -> Pointer {
        match id {
            PointerId::Primary => self.primary.clone(),
            PointerId::Native(native) => self
                .secondary
                .entry(native)
                .or_insert_with(|| {
                    log::debug!("pointer#{native} ({pointer_type:?}) created");
                    Pointer::new(id, pointer_type)
                })
                .clone(),
        }
    }

    /// Looks a pointer up without creating it.
    pub fn get(&self, id: PointerId) -> Option<&Pointer> {
        match id {
            PointerId::Primary => Some(&self.primary),
            PointerId::Native(native) => self.secondary.get(&native),
        }
    }

    /// Number of live pointers, primary included.
    pub fn count(&self) -> usize {
        1 + self.secondary.len()
    }

    /// `0` is the primary pointer; secondary pointers follow in creation
    /// order.
    pub fn at(&self, index: usize) -> Option<&Pointer> {
        match index {
            0 => Some(&self.primary),
            n => self.secondary.get_index(n - 1).map(|(_, pointer)| pointer),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pointer> {
        std::iter::once(&self.primary).chain(self.secondary.values())
    }

    pub fn policy(&self) -> SecondaryPointerPolicy {
        self.policy
    }

    /// Routes a normalized event to its pointer and delivers it.
    pub fn dispatch(&mut self, event: &PointerEvent) -> DispatchReport {
        let pointer = self.resolve_typed(event.pointer_id, event.pointer_type);
        let report = pointer.apply(event);
        self.expire_if_released(&pointer, event.kind);
        report
    }

    fn expire_if_released(&mut self, pointer: &Pointer, kind: PointerEventKind) {
        if self.policy != SecondaryPointerPolicy::ExpireOnRelease {
            return;
        }
        let PointerId::Native(native) = pointer.id() else {
            return;
        };
        let ended = match kind {
            PointerEventKind::Cancel => true,
            PointerEventKind::Up => pointer.active_buttons().is_empty(),
            PointerEventKind::Down | PointerEventKind::Move => false,
        };
        // A listener may have already replaced the entry; only drop this one.
        if ended
            && self
                .secondary
                .get(&native)
                .is_some_and(|current| current.ptr_eq(pointer))
        {
            self.secondary.shift_remove(&native);
            log::debug!("pointer#{native} expired");
        }
    }
}

impl Default for Pointers {
    fn default() -> Self {
        Self::new(SecondaryPointerPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::PointerButton;
    use std::cell::Cell;
    use std::rc::Rc;
    use waypoint_ui_graphics::Point;

    fn touch(kind: PointerEventKind, id: i32, x: f32, y: f32) -> PointerEvent {
        let button = match kind {
            PointerEventKind::Down | PointerEventKind::Up => PointerButton::Left,
            _ => PointerButton::Unknown,
        };
        PointerEvent::new(kind, Point::new(x, y))
            .with_button(button)
            .with_pointer(PointerId::Native(id), PointerType::Touch)
    }

    #[test]
    fn primary_always_exists() {
        let pointers = Pointers::default();
        assert_eq!(pointers.count(), 1);
        assert!(pointers.primary().is_primary());
        assert!(pointers.get(PointerId::PRIMARY).is_some());
        assert!(pointers.at(0).is_some_and(Pointer::is_primary));
        assert!(pointers.at(1).is_none());
    }

    #[test]
    fn resolve_primary_returns_the_same_pointer() {
        let mut pointers = Pointers::default();
        let resolved = pointers.resolve(PointerId::PRIMARY);
        assert!(resolved.ptr_eq(pointers.primary()));
        assert_eq!(pointers.count(), 1);
    }

    #[test]
    fn unknown_identifier_is_created_lazily_then_reused() {
        let mut pointers = Pointers::default();
        assert!(pointers.get(PointerId::Native(9)).is_none());

        let first = pointers.resolve(PointerId::Native(9));
        let again = pointers.resolve(PointerId::Native(9));

        assert!(first.ptr_eq(&again));
        assert_eq!(pointers.count(), 2);
        assert_eq!(first.id(), PointerId::Native(9));
    }

    #[test]
    fn secondary_pointers_keep_creation_order() {
        let mut pointers = Pointers::new(SecondaryPointerPolicy::Retain);
        pointers.dispatch(&touch(PointerEventKind::Down, 20, 0.0, 0.0));
        pointers.dispatch(&touch(PointerEventKind::Down, 3, 0.0, 0.0));

        let ids: Vec<_> = pointers.iter().map(Pointer::id).collect();
        assert_eq!(
            ids,
            vec![
                PointerId::PRIMARY,
                PointerId::Native(20),
                PointerId::Native(3)
            ]
        );
        assert_eq!(
            pointers.at(2).map(Pointer::id),
            Some(PointerId::Native(3))
        );
    }

    #[test]
    fn secondary_expires_after_its_terminating_up_is_delivered() {
        let mut pointers = Pointers::default();
        pointers.dispatch(&touch(PointerEventKind::Down, 1, 10.0, 10.0));
        let pointer = pointers.resolve(PointerId::Native(1));

        let ups = Rc::new(Cell::new(0));
        {
            let ups = Rc::clone(&ups);
            pointer.on(PointerEventKind::Up, move |_event| ups.set(ups.get() + 1));
        }

        pointers.dispatch(&touch(PointerEventKind::Move, 1, 15.0, 15.0));
        assert_eq!(pointers.count(), 2);

        pointers.dispatch(&touch(PointerEventKind::Up, 1, 15.0, 15.0));
        assert_eq!(ups.get(), 1);
        assert_eq!(pointers.count(), 1);
        assert!(pointers.get(PointerId::Native(1)).is_none());
        assert_eq!(pointer.last_page_pos(), Point::new(15.0, 15.0));
    }

    #[test]
    fn cancel_expires_secondary_pointer() {
        let mut pointers = Pointers::default();
        pointers.dispatch(&touch(PointerEventKind::Down, 5, 1.0, 1.0));
        pointers.dispatch(&touch(PointerEventKind::Cancel, 5, 0.0, 0.0));
        assert_eq!(pointers.count(), 1);
    }

    #[test]
    fn hover_only_contact_lives_until_cancel() {
        let mut pointers = Pointers::default();
        let hover = PointerEvent::new(PointerEventKind::Move, Point::new(4.0, 4.0))
            .with_pointer(PointerId::Native(8), PointerType::Pen);
        pointers.dispatch(&hover);
        pointers.dispatch(&hover);
        assert_eq!(pointers.count(), 2);

        let leave = PointerEvent::new(PointerEventKind::Cancel, Point::new(4.0, 4.0))
            .with_pointer(PointerId::Native(8), PointerType::Pen);
        pointers.dispatch(&leave);
        assert!(pointers.get(PointerId::Native(8)).is_none());
    }

    #[test]
    fn retain_policy_keeps_released_pointers() {
        let mut pointers = Pointers::new(SecondaryPointerPolicy::Retain);
        pointers.dispatch(&touch(PointerEventKind::Down, 5, 1.0, 1.0));
        pointers.dispatch(&touch(PointerEventKind::Up, 5, 1.0, 1.0));
        assert_eq!(pointers.count(), 2);
        assert!(pointers
            .get(PointerId::Native(5))
            .is_some_and(|pointer| !pointer.is_dragging()));
    }

    #[test]
    fn primary_is_never_expired() {
        let mut pointers = Pointers::default();
        let up = PointerEvent::new(PointerEventKind::Up, Point::ZERO).with_button(PointerButton::Left);
        pointers.dispatch(&up);
        let cancel = PointerEvent::new(PointerEventKind::Cancel, Point::ZERO);
        pointers.dispatch(&cancel);
        assert_eq!(pointers.count(), 1);
        assert!(pointers.get(PointerId::PRIMARY).is_some());
    }
}
