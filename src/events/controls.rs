use crate::audio::AudioHandle;
use crate::constants::{
    MUTED_CLASS, PAUSE_BUTTON_ID, PLAY_BUTTON_ID, RESET_BUTTON_ID, SPEAKER_BUTTON_ID,
};
use crate::dom;
use crate::stage::Stage;
use mixer_core::Mixer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Attach the play/pause/mute/reset buttons. Absent buttons are skipped.
pub fn wire_controls(
    document: &web::Document,
    mixer: Rc<RefCell<Mixer<AudioHandle>>>,
    stage: Rc<Stage>,
) {
    let mut wired = 0;

    let m = mixer.clone();
    wired += dom::add_click_listener(document, PLAY_BUTTON_ID, move || {
        m.borrow().resume_all();
    }) as u32;

    let m = mixer.clone();
    wired += dom::add_click_listener(document, PAUSE_BUTTON_ID, move || {
        m.borrow().pause_all();
    }) as u32;

    let m = mixer.clone();
    let doc = document.clone();
    wired += dom::add_click_listener(document, SPEAKER_BUTTON_ID, move || {
        let muted = m.borrow().toggle_mute();
        set_mute_indicator(&doc, muted);
        log::info!("[controls] muted={}", muted);
    }) as u32;

    wired += dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        let mut m = mixer.borrow_mut();
        m.reset_all();
        stage.sync_all(m.board());
        log::info!("[controls] reset");
    }) as u32;

    log::info!("[controls] {} of 4 controls wired", wired);
}

pub fn set_mute_indicator(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(SPEAKER_BUTTON_ID) {
        let cl = el.class_list();
        if muted {
            _ = cl.add_1(MUTED_CLASS);
        } else {
            _ = cl.remove_1(MUTED_CLASS);
        }
    }
}
