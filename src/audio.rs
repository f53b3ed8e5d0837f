use mixer_core::{Mixer, SoundError, SoundHandle, StartRequest};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping `<audio>` element driven by the registry.
pub struct AudioHandle {
    el: web::HtmlAudioElement,
}

fn control_error(action: &'static str, e: JsValue) -> SoundError {
    SoundError::Control {
        action,
        reason: format!("{:?}", e),
    }
}

fn start_error(url: &str, e: JsValue) -> SoundError {
    SoundError::Start {
        url: url.to_string(),
        reason: format!("{:?}", e),
    }
}

impl SoundHandle for AudioHandle {
    fn pause(&self) -> Result<(), SoundError> {
        self.el.pause().map_err(|e| control_error("pause", e))
    }

    fn resume(&self) -> Result<(), SoundError> {
        let promise = self.el.play().map_err(|e| control_error("play", e))?;
        // Autoplay rejections arrive later; report them without blocking the caller
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] resume rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn rewind(&self) {
        self.el.set_current_time(0.0);
    }

    fn is_muted(&self) -> bool {
        self.el.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.el.set_muted(muted);
    }
}

/// Create a looping audio element for `url` and wait until playback begins.
pub async fn start_looping(url: &str) -> Result<AudioHandle, SoundError> {
    let el = web::HtmlAudioElement::new_with_src(url).map_err(|e| start_error(url, e))?;
    el.set_loop(true);
    let promise: js_sys::Promise = el.play().map_err(|e| start_error(url, e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| start_error(url, e))?;
    Ok(AudioHandle { el })
}

/// Issue the start for a drop and record its outcome once it settles.
///
/// No borrow of the mixer is held across the await.
pub fn spawn_start(mixer: Rc<RefCell<Mixer<AudioHandle>>>, request: StartRequest) {
    spawn_local(async move {
        let result = start_looping(&request.url).await;
        mixer.borrow_mut().settle_start(request, result);
    });
}
