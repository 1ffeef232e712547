//! Native event vocabulary and its normalization into [`PointerEvent`]s.
//!
//! Host adapters translate whatever the platform hands them (DOM pointer,
//! mouse or touch events) into a [`NativePointerEvent`]. Event type strings
//! the adapter does not recognise never get this far.

use waypoint_ui_graphics::Point;
use web_time::Instant;

use super::types::{PointerButton, PointerEvent, PointerEventKind, PointerId, PointerType};
use crate::config::InputConfig;

/// Raw button codes as reported by the host.
#[repr(i16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativePointerButton {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl NativePointerButton {
    pub fn code(self) -> i16 {
        self as i16
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeEventType {
    Down,
    Up,
    Move,
    Cancel,
}

impl From<NativeEventType> for PointerEventKind {
    fn from(ty: NativeEventType) -> Self {
        match ty {
            NativeEventType::Down => PointerEventKind::Down,
            NativeEventType::Up => PointerEventKind::Up,
            NativeEventType::Move => PointerEventKind::Move,
            NativeEventType::Cancel => PointerEventKind::Cancel,
        }
    }
}

/// An input event exactly as the host surface reported it.
#[derive(Clone, Debug, PartialEq)]
pub struct NativePointerEvent {
    pub event_type: NativeEventType,
    /// `None` for moves and for hosts that do not report a button.
    pub button: Option<i16>,
    pub page_x: Option<f64>,
    pub page_y: Option<f64>,
    /// Host pointer identifier; `None` for plain mouse events.
    pub pointer_id: Option<i32>,
    pub pointer_type: PointerType,
    pub is_primary: bool,
}

impl NativePointerEvent {
    /// A mouse event on the primary pointer.
    pub fn mouse(event_type: NativeEventType, button: Option<i16>, x: f64, y: f64) -> Self {
        Self {
            event_type,
            button,
            page_x: Some(x),
            page_y: Some(y),
            pointer_id: None,
            pointer_type: PointerType::Mouse,
            is_primary: true,
        }
    }

    /// A touch contact. Touch contacts press the main button.
    pub fn touch(event_type: NativeEventType, identifier: i32, x: f64, y: f64) -> Self {
        let button = match event_type {
            NativeEventType::Down | NativeEventType::Up => Some(NativePointerButton::Left.code()),
            NativeEventType::Move | NativeEventType::Cancel => None,
        };
        Self {
            event_type,
            button,
            page_x: Some(x),
            page_y: Some(y),
            pointer_id: Some(identifier),
            pointer_type: PointerType::Touch,
            is_primary: false,
        }
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }
}

/// Coordinate that is missing or not a finite number.
fn coordinate(value: Option<f64>) -> f32 {
    match value {
        Some(v) if v.is_finite() => v as f32,
        _ => 0.0,
    }
}

/// Decides which engine pointer a native event belongs to.
pub fn resolve_pointer_id(native: &NativePointerEvent, config: &InputConfig) -> PointerId {
    match (native.pointer_type, native.pointer_id) {
        (PointerType::Mouse, _) | (_, None) => PointerId::PRIMARY,
        (_, Some(_)) if native.is_primary && config.primary_contact_drives_primary => {
            PointerId::PRIMARY
        }
        (_, Some(id)) => PointerId::Native(id),
    }
}

/// Pure translation of one native event.
pub fn normalize(
    native: &NativePointerEvent,
    config: &InputConfig,
    sequence: u64,
    timestamp: Instant,
) -> PointerEvent {
    let kind = PointerEventKind::from(native.event_type);
    let button = match kind {
        // Button state on a move is not meaningful.
        PointerEventKind::Move => PointerButton::Unknown,
        _ => PointerButton::from_native(native.button),
    };

    PointerEvent {
        pointer_id: resolve_pointer_id(native, config),
        pointer_type: native.pointer_type,
        kind,
        button,
        page_pos: Point::new(coordinate(native.page_x), coordinate(native.page_y)),
        timestamp,
        sequence,
    }
}

/// Stamps normalized events with a sequence number and arrival time.
#[derive(Debug, Default)]
pub struct EventNormalizer {
    config: InputConfig,
    next_sequence: u64,
}

impl EventNormalizer {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            next_sequence: 0,
        }
    }

    pub fn normalize(&mut self, native: &NativePointerEvent) -> PointerEvent {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        normalize(native, &self.config, sequence, Instant::now())
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }
}
