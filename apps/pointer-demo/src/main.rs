use std::cell::Cell;
use std::rc::Rc;

use waypoint_input::{Input, ListenerError, PointerButton, PointerEventKind};
use waypoint_platform_web::WebPlatform;
use waypoint_ui_graphics::Rect;

/// (dom type, button, x, y): a drag across the crate, a right click outside
/// it, and one event the surface does not handle.
const SCRIPT: &[(&str, Option<i16>, f64, f64)] = &[
    ("pointermove", None, 10.0, 10.0),
    ("pointerdown", Some(0), 60.0, 60.0),
    ("pointermove", None, 90.0, 120.0),
    ("pointermove", None, 160.0, 180.0),
    ("pointerup", Some(0), 160.0, 180.0),
    ("wheel", None, 160.0, 180.0),
    ("pointerdown", Some(2), 300.0, 40.0),
    ("pointerup", Some(2), 300.0, 40.0),
];

fn crate_bounds(name: &&str) -> Option<Rect> {
    match *name {
        "crate" => Some(Rect::new(50.0, 50.0, 100.0, 100.0)),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let platform = WebPlatform::default();
    let mut input = Input::new();
    let presses = Rc::new(Cell::new(0usize));

    {
        let presses = Rc::clone(&presses);
        input.primary().on(PointerEventKind::Down, move |event| {
            presses.set(presses.get() + 1);
            log::info!("down {:?} at {:?}", event.button, event.page_pos);
        });
    }
    input.primary().on(PointerEventKind::Up, |event| {
        log::info!("up {:?} at {:?}", event.button, event.page_pos);
    });
    input.primary().try_on(PointerEventKind::Down, |event| {
        if event.button == PointerButton::Right {
            return Err(ListenerError::failed("context menus are not supported"));
        }
        Ok(())
    });

    for &(dom_type, button, x, y) in SCRIPT {
        let Some(native) = platform.mouse_event(dom_type, button, x, y) else {
            log::info!("surface ignores {dom_type}");
            continue;
        };
        input.dispatch(&native);
        log::info!(
            "{dom_type:>12} -> pos {:?}, held {:?}, over crate: {}",
            input.primary().last_page_pos(),
            input.primary().active_buttons().iter().collect::<Vec<_>>(),
            input.is_under_pointer(&crate_bounds, &"crate")
        );
    }

    log::info!("{} presses delivered", presses.get());
}
