//! Translates DOM input events into Waypoint native pointer events.
//!
//! Only the pointer, mouse and touch event families are recognised; any other
//! event type is rejected here and never reaches the input layer. Page
//! coordinates are passed through untouched: DOM `pageX`/`pageY` are already
//! CSS pixels, the space hit-tests run in.

use waypoint_input::{
    Input, NativeEventType, NativePointerEvent, PointerEvent, PointerType,
};
use wasm_bindgen::JsCast;

/// Maps a DOM event type string onto the native event family.
pub fn event_type_from_dom(dom_type: &str) -> Option<NativeEventType> {
    match dom_type {
        "pointerdown" | "mousedown" | "touchstart" => Some(NativeEventType::Down),
        "pointerup" | "mouseup" | "touchend" => Some(NativeEventType::Up),
        "pointermove" | "mousemove" | "touchmove" => Some(NativeEventType::Move),
        "pointercancel" | "touchcancel" => Some(NativeEventType::Cancel),
        _ => None,
    }
}

/// Maps `PointerEvent.pointerType`.
pub fn pointer_type_from_dom(pointer_type: &str) -> PointerType {
    match pointer_type {
        "mouse" => PointerType::Mouse,
        "touch" => PointerType::Touch,
        "pen" => PointerType::Pen,
        _ => PointerType::Unknown,
    }
}

/// DOM reports `-1` for "no button changed", which moves always carry.
fn dom_button(event_type: NativeEventType, button: i16) -> Option<i16> {
    match event_type {
        NativeEventType::Move => None,
        _ if button < 0 => None,
        _ => Some(button),
    }
}

/// Event family of a DOM `PointerEvent`. A non-primary contact leaving the
/// surface ends that contact; a primary one leaving is ignored.
fn pointer_event_type(dom_type: &str, is_primary: bool) -> Option<NativeEventType> {
    match dom_type {
        "pointerleave" if !is_primary => Some(NativeEventType::Cancel),
        _ => event_type_from_dom(dom_type),
    }
}

/// Decides whether a touch contact drives the primary pointer.
///
/// `tracked` is the identifier of the contact currently driving it. A
/// `Down` claims the role only when nothing is tracked and no other contact
/// is on the surface; the tracked contact keeps the role until its own `Up`
/// or `Cancel`. Returns the primary flag for this event and the identifier
/// to track afterwards.
pub fn track_primary_touch(
    tracked: Option<i32>,
    event_type: NativeEventType,
    identifier: i32,
    others_down: bool,
) -> (bool, Option<i32>) {
    let is_tracked = tracked == Some(identifier);
    match event_type {
        NativeEventType::Down if tracked.is_none() && !others_down => (true, Some(identifier)),
        NativeEventType::Down | NativeEventType::Move => (is_tracked, tracked),
        NativeEventType::Up | NativeEventType::Cancel if is_tracked => (true, None),
        NativeEventType::Up | NativeEventType::Cancel => (false, tracked),
    }
}

#[derive(Debug, Default)]
pub struct WebPlatform {
    /// Touch identifier currently driving the primary pointer.
    primary_touch: Option<i32>,
}

impl WebPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_touch(&self) -> Option<i32> {
        self.primary_touch
    }

    /// Builds a mouse-style event from raw DOM fields.
    pub fn mouse_event(
        &self,
        dom_type: &str,
        button: Option<i16>,
        x: f64,
        y: f64,
    ) -> Option<NativePointerEvent> {
        let event_type = event_type_from_dom(dom_type)?;
        let button = button.and_then(|code| dom_button(event_type, code));
        Some(NativePointerEvent::mouse(event_type, button, x, y))
    }

    /// Builds an event from the raw fields of a DOM `PointerEvent`.
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_fields(
        &self,
        dom_type: &str,
        button: i16,
        x: f64,
        y: f64,
        pointer_id: i32,
        pointer_type: &str,
        is_primary: bool,
    ) -> Option<NativePointerEvent> {
        let event_type = pointer_event_type(dom_type, is_primary)?;
        Some(NativePointerEvent {
            event_type,
            button: dom_button(event_type, button),
            page_x: Some(x),
            page_y: Some(y),
            pointer_id: Some(pointer_id),
            pointer_type: pointer_type_from_dom(pointer_type),
            is_primary,
        })
    }

    /// Builds an event for one touch contact. `others_down` tells whether
    /// any other contact is on the surface.
    pub fn touch_fields(
        &mut self,
        dom_type: &str,
        identifier: i32,
        x: f64,
        y: f64,
        others_down: bool,
    ) -> Option<NativePointerEvent> {
        let event_type = event_type_from_dom(dom_type)?;
        let (is_primary, tracked) =
            track_primary_touch(self.primary_touch, event_type, identifier, others_down);
        self.primary_touch = tracked;
        Some(NativePointerEvent::touch(event_type, identifier, x, y).with_primary(is_primary))
    }

    pub fn convert_pointer_event(&self, event: &web_sys::PointerEvent) -> Option<NativePointerEvent> {
        self.pointer_fields(
            &event.type_(),
            event.button(),
            f64::from(event.page_x()),
            f64::from(event.page_y()),
            event.pointer_id(),
            &event.pointer_type(),
            event.is_primary(),
        )
    }

    pub fn convert_mouse_event(&self, event: &web_sys::MouseEvent) -> Option<NativePointerEvent> {
        self.mouse_event(
            &event.type_(),
            Some(event.button()),
            f64::from(event.page_x()),
            f64::from(event.page_y()),
        )
    }

    /// One native event per changed touch.
    pub fn convert_touch_event(&mut self, event: &web_sys::TouchEvent) -> Vec<NativePointerEvent> {
        let dom_type = event.type_();
        let changed = event.changed_touches();
        // Only consulted for `touchstart`, where `touches` already holds the
        // new contacts.
        let others_down = event.touches().length() > changed.length();
        (0..changed.length())
            .filter_map(|index| changed.get(index))
            .filter_map(|touch| {
                self.touch_fields(
                    &dom_type,
                    touch.identifier(),
                    f64::from(touch.page_x()),
                    f64::from(touch.page_y()),
                    others_down,
                )
            })
            .collect()
    }

    /// Converts any supported DOM event; unsupported events yield nothing.
    pub fn convert_event(&mut self, event: &web_sys::Event) -> Vec<NativePointerEvent> {
        if let Some(pointer) = event.dyn_ref::<web_sys::PointerEvent>() {
            return self.convert_pointer_event(pointer).into_iter().collect();
        }
        if let Some(touch) = event.dyn_ref::<web_sys::TouchEvent>() {
            return self.convert_touch_event(touch);
        }
        if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
            return self.convert_mouse_event(mouse).into_iter().collect();
        }
        log::trace!("ignoring DOM event {:?}", event.type_());
        Vec::new()
    }

    /// Converts `event` and feeds the result to `input`.
    pub fn handle_event(&mut self, input: &mut Input, event: &web_sys::Event) -> Vec<PointerEvent> {
        self.convert_event(event)
            .iter()
            .map(|native| input.dispatch(native))
            .collect()
    }
}
