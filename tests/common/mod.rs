// Shared fakes for host-side tests.

#![allow(dead_code)]
use mixer_core::{SoundError, SoundHandle};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct FakeState {
    pub playing: Cell<bool>,
    pub muted: Cell<bool>,
    pub position: Cell<f64>,
    pub pauses: Cell<u32>,
    pub resumes: Cell<u32>,
}

/// Sound handle whose state stays observable after the registry takes it.
#[derive(Clone, Debug, Default)]
pub struct FakeSound(pub Rc<FakeState>);

impl FakeSound {
    /// A handle that is already playing, part-way through its loop.
    pub fn playing() -> Self {
        let s = FakeSound::default();
        s.0.playing.set(true);
        s.0.position.set(1.5);
        s
    }
}

impl SoundHandle for FakeSound {
    fn pause(&self) -> Result<(), SoundError> {
        self.0.playing.set(false);
        self.0.pauses.set(self.0.pauses.get() + 1);
        Ok(())
    }

    fn resume(&self) -> Result<(), SoundError> {
        self.0.playing.set(true);
        self.0.resumes.set(self.0.resumes.get() + 1);
        Ok(())
    }

    fn rewind(&self) {
        self.0.position.set(0.0);
    }

    fn is_muted(&self) -> bool {
        self.0.muted.get()
    }

    fn set_muted(&self, muted: bool) {
        self.0.muted.set(muted);
    }
}

pub fn blocked(url: &str) -> SoundError {
    SoundError::Start {
        url: url.to_string(),
        reason: "NotAllowedError".to_string(),
    }
}
