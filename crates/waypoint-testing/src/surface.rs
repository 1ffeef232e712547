//! Simulated host surface.
//!
//! `InputTestRule` plays the part of the page: it turns DOM-style event
//! descriptions into native events through the web adapter and hands them to
//! an [`Input`], exactly as a browser listener would. It also owns a
//! [`TestScene`] so hit-tests can be written against real entities.

use indexmap::IndexSet;
use waypoint_input::{
    Input, InputConfig, NativeEventType, NativePointerButton, NativePointerEvent, Pointer,
    PointerEvent,
};
use waypoint_platform_web::WebPlatform;

use crate::scene::{EntityId, TestScene};

pub struct InputTestRule {
    input: Input,
    platform: WebPlatform,
    scene: TestScene,
    /// Touch contacts currently on the surface, like DOM `touches`.
    contacts: IndexSet<i32>,
}

impl InputTestRule {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            input: Input::with_config(config),
            platform: WebPlatform::default(),
            scene: TestScene::new(),
            contacts: IndexSet::new(),
        }
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn platform(&self) -> &WebPlatform {
        &self.platform
    }

    pub fn scene(&self) -> &TestScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut TestScene {
        &mut self.scene
    }

    pub fn primary(&self) -> Pointer {
        self.input.primary().clone()
    }

    /// Fires a mouse-style DOM event. Returns `None` when the surface would
    /// not have listened for `dom_type` at all.
    pub fn fire(
        &mut self,
        dom_type: &str,
        button: Option<i16>,
        x: f64,
        y: f64,
    ) -> Option<PointerEvent> {
        let native = self.platform.mouse_event(dom_type, button, x, y)?;
        Some(self.input.dispatch(&native))
    }

    pub fn fire_native(&mut self, native: &NativePointerEvent) -> PointerEvent {
        self.input.dispatch(native)
    }

    pub fn pointer_down(&mut self, button: NativePointerButton, x: f64, y: f64) -> PointerEvent {
        self.fire_supported("pointerdown", Some(button.code()), x, y)
    }

    pub fn pointer_up(&mut self, button: NativePointerButton, x: f64, y: f64) -> PointerEvent {
        self.fire_supported("pointerup", Some(button.code()), x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> PointerEvent {
        self.fire_supported("pointermove", None, x, y)
    }

    pub fn pointer_cancel(&mut self) -> PointerEvent {
        self.fire_supported("pointercancel", None, 0.0, 0.0)
    }

    /// Fires a touch event for one contact. The first finger down on an
    /// empty surface drives the primary pointer until it lifts.
    pub fn touch(&mut self, dom_type: &str, identifier: i32, x: f64, y: f64) -> Option<PointerEvent> {
        let others_down = self.contacts.iter().any(|&contact| contact != identifier);
        let native = self
            .platform
            .touch_fields(dom_type, identifier, x, y, others_down)?;
        match native.event_type {
            NativeEventType::Down => {
                self.contacts.insert(identifier);
            }
            NativeEventType::Up | NativeEventType::Cancel => {
                self.contacts.shift_remove(&identifier);
            }
            NativeEventType::Move => {}
        }
        Some(self.input.dispatch(&native))
    }

    fn fire_supported(&mut self, dom_type: &str, button: Option<i16>, x: f64, y: f64) -> PointerEvent {
        match self.fire(dom_type, button, x, y) {
            Some(event) => event,
            None => panic!("surface does not listen for {dom_type}"),
        }
    }

    pub fn spawn_actor(&mut self, x: f32, y: f32, width: f32, height: f32) -> EntityId {
        self.scene.spawn(x, y, width, height)
    }

    pub fn is_under_pointer(&self, entity: EntityId) -> bool {
        self.input.is_under_pointer(&self.scene, &entity)
    }

    pub fn is_under(&self, pointer: &Pointer, entity: EntityId) -> bool {
        self.input.is_under(pointer, &self.scene, &entity)
    }
}

impl Default for InputTestRule {
    fn default() -> Self {
        Self::new()
    }
}
