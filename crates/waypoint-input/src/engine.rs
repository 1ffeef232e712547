//! Top-level entry point game code talks to.
//!
//! The host surface feeds native events into [`Input::dispatch`]; each one is
//! normalized, routed to its pointer, applied and fanned out before the call
//! returns. Game logic reads pointer state and runs hit-tests whenever it
//! likes, typically once per frame.

use crate::config::InputConfig;
use crate::input::{
    is_entity_under_pointer, BoundsProvider, DispatchReport, EventNormalizer, NativePointerEvent,
    Pointer, PointerEvent, Pointers,
};

pub struct Input {
    normalizer: EventNormalizer,
    pointers: Pointers,
    last_report: DispatchReport,
}

impl Input {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            pointers: Pointers::new(config.secondary_policy),
            normalizer: EventNormalizer::new(config),
            last_report: DispatchReport::default(),
        }
    }

    pub fn config(&self) -> &InputConfig {
        self.normalizer.config()
    }

    pub fn pointers(&self) -> &Pointers {
        &self.pointers
    }

    pub fn primary(&self) -> &Pointer {
        self.pointers.primary()
    }

    /// Handles one native event to completion and returns the normalized
    /// event that was delivered.
    pub fn dispatch(&mut self, native: &NativePointerEvent) -> PointerEvent {
        let event = self.normalizer.normalize(native);
        self.last_report = self.pointers.dispatch(&event);
        event
    }

    /// Delivery counts of the most recent [`Input::dispatch`].
    pub fn last_report(&self) -> DispatchReport {
        self.last_report
    }

    /// Whether the primary pointer is over `entity`.
    pub fn is_under_pointer<E, B>(&self, provider: &B, entity: &E) -> bool
    where
        E: ?Sized,
        B: BoundsProvider<E> + ?Sized,
    {
        is_entity_under_pointer(self.primary(), provider, entity)
    }

    pub fn is_under<E, B>(&self, pointer: &Pointer, provider: &B, entity: &E) -> bool
    where
        E: ?Sized,
        B: BoundsProvider<E> + ?Sized,
    {
        is_entity_under_pointer(pointer, provider, entity)
    }

    /// Every live pointer currently over `entity`, primary first.
    pub fn pointers_over<E, B>(&self, provider: &B, entity: &E) -> Vec<Pointer>
    where
        E: ?Sized,
        B: BoundsProvider<E> + ?Sized,
    {
        match provider.bounds_of(entity) {
            Some(bounds) => self
                .pointers
                .iter()
                .filter(|pointer| crate::input::is_under_pointer(pointer, bounds))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
