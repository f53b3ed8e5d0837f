use crate::audio::{self, AudioHandle};
use crate::dom;
use crate::stage::Stage;
use glam::Vec2;
use mixer_core::Mixer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub mixer: Rc<RefCell<Mixer<AudioHandle>>>,
    pub stage: Rc<Stage>,
}

pub fn wire_input_handlers(w: InputWiring) {
    for (id, el) in w.stage.elements() {
        wire_pointerdown(&w, id, el);
    }
    wire_pointermove(&w);
    wire_pointerup(&w);
}

#[inline]
fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(w: &InputWiring, id: &'static str, el: &web::HtmlElement) {
    let w = w.clone();
    // Native image drag would steal the gesture
    _ = el.set_attribute("draggable", "false");
    _ = el.style().set_property("touch-action", "none");
    let el_for_rect = el.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let origin = dom::rect_origin(&el_for_rect);
        let mut mixer = w.mixer.borrow_mut();
        match mixer.begin_drag(id, pointer_client(&ev), origin) {
            Ok(_) => {
                if let Some(item) = mixer.board().get(id) {
                    w.stage.sync(item);
                }
                log::info!("[drag] begin {}", id);
            }
            Err(e) => log::warn!("[drag] {}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut mixer = w.mixer.borrow_mut();
        let Some(id) = mixer.drag().active_id() else {
            return;
        };
        let size = w
            .stage
            .element(id)
            .map(dom::element_size)
            .unwrap_or(Vec2::ZERO);
        if let Some((id, at)) = mixer.update_drag(pointer_client(&ev), size, dom::viewport_size()) {
            w.stage.move_to(id, at);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let (outcome, settle_delay_ms) = {
            let mut mixer = w.mixer.borrow_mut();
            let document = w.stage.document();
            let outcome = mixer.end_drag(|side| {
                dom::side_container(document, side).map(|c| dom::rect_origin(&c))
            });
            let Some(outcome) = outcome else {
                return;
            };
            if let Some(item) = mixer.board().get(outcome.drop.id) {
                w.stage.sync(item);
            }
            (outcome, mixer.config().settle_delay_ms)
        };

        let dropped = outcome.drop;
        if dropped.docked_at.is_none() {
            log::warn!(
                "[drag] no {} container; {} stays where it was dropped",
                dropped.side.name(),
                dropped.id
            );
        }
        log::info!(
            "[drag] drop {} -> {} after {}ms",
            dropped.id,
            dropped.side.name(),
            dropped.held.as_millis()
        );

        let mixer = w.mixer.clone();
        let stage = w.stage.clone();
        dom::set_timeout(settle_delay_ms, move || {
            let mut mixer = mixer.borrow_mut();
            if mixer.settle_item(dropped.id) {
                if let Some(item) = mixer.board().get(dropped.id) {
                    stage.sync_dragging(item);
                }
            }
        });

        if let Some(request) = outcome.start {
            audio::spawn_start(w.mixer.clone(), request);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
