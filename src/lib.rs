#![cfg(target_arch = "wasm32")]
use crate::audio::AudioHandle;
use crate::constants::{AUDIO_DIR_ATTR, ITEM_SELECTOR};
use mixer_core::{Board, Mixer, MixerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod stage;

fn page_config(document: &web::Document) -> MixerConfig {
    let config = MixerConfig::default();
    match document
        .body()
        .and_then(|b| b.get_attribute(AUDIO_DIR_ATTR))
        .filter(|dir| !dir.trim().is_empty())
    {
        Some(dir) => config.with_audio_dir(dir.trim()),
        None => config,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("monster-mixer starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let closure = Closure::once_into_js(move || {
            if let Err(e) = init(doc) {
                log::error!("init error: {:?}", e);
            }
        });
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref());
    } else if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(document: web::Document) -> anyhow::Result<()> {
    document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body> to host dragged items"))?;
    let config = page_config(&document);
    let elements = dom::query_html_elements(&document, ITEM_SELECTOR);
    let ids: Vec<String> = elements.iter().map(|el| el.id()).collect();
    let (board, errors) = Board::from_identities(ids.iter().map(String::as_str));
    for e in &errors {
        log::error!("[init] {} (not draggable)", e);
    }
    if board.items().is_empty() {
        log::warn!("[init] no draggable items matching {}", ITEM_SELECTOR);
    }
    log::info!(
        "[init] items={} audio_dir={}",
        board.items().len(),
        config.audio_dir
    );

    let stage = Rc::new(stage::Stage::new(document.clone(), &board, &elements));
    let mixer: Rc<RefCell<Mixer<AudioHandle>>> = Rc::new(RefCell::new(Mixer::new(config, board)));

    events::wire_input_handlers(events::InputWiring {
        mixer: mixer.clone(),
        stage: stage.clone(),
    });
    events::wire_controls(&document, mixer, stage);
    Ok(())
}
