//! Sound activation: each monster's loop is started at most once per round.
//!
//! Starting a sound is asynchronous in the browser. [`SoundRegistry::activate`]
//! marks the identity pending and hands back a [`StartRequest`]; the caller
//! performs the start and reports the outcome through
//! [`SoundRegistry::settle`]. A pending identity cannot be activated again.

use crate::catalog::{self, Monster};
use crate::constants::ACTIVE_SOUNDS_INLINE;
use fnv::FnvHashSet;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SoundError {
    #[error("could not start `{url}`: {reason}")]
    Start { url: String, reason: String },
    #[error("{action} failed: {reason}")]
    Control {
        action: &'static str,
        reason: String,
    },
}

/// A live, looping audio resource.
pub trait SoundHandle {
    fn pause(&self) -> Result<(), SoundError>;
    fn resume(&self) -> Result<(), SoundError>;
    /// Seek back to the start.
    fn rewind(&self);
    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
}

#[derive(Debug)]
pub struct ActiveSound<H> {
    pub id: &'static str,
    pub handle: H,
}

/// Ticket for a start that has been issued but not yet settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartRequest {
    pub id: &'static str,
    pub url: String,
    round: u64,
}

impl StartRequest {
    pub fn round(&self) -> u64 {
        self.round
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Recorded as played and added to the active list.
    Started,
    /// Start failed; the identity may be activated again.
    Failed,
    /// The round was reset while the start was in flight; the handle was stopped.
    Stale,
}

pub struct SoundRegistry<H> {
    audio_dir: String,
    played: FnvHashSet<&'static str>,
    pending: FnvHashSet<&'static str>,
    active: SmallVec<[ActiveSound<H>; ACTIVE_SOUNDS_INLINE]>,
    round: u64,
}

impl<H: SoundHandle> SoundRegistry<H> {
    pub fn new(audio_dir: impl Into<String>) -> Self {
        Self {
            audio_dir: audio_dir.into(),
            played: FnvHashSet::default(),
            pending: FnvHashSet::default(),
            active: SmallVec::new(),
            round: 0,
        }
    }

    /// Request a start for `id`. `None` if it already played this round, is
    /// pending, or has no sound binding.
    pub fn activate(&mut self, id: &str) -> Option<StartRequest> {
        let monster: &'static Monster = catalog::lookup(id)?;
        if self.played.contains(monster.id) || self.pending.contains(monster.id) {
            return None;
        }
        self.pending.insert(monster.id);
        Some(StartRequest {
            id: monster.id,
            url: catalog::sound_url(&self.audio_dir, monster),
            round: self.round,
        })
    }

    /// Report the outcome of a start issued by [`activate`](Self::activate).
    pub fn settle(&mut self, request: StartRequest, result: Result<H, SoundError>) -> Settled {
        if request.round != self.round {
            if let Ok(handle) = result {
                stop(&handle);
            }
            log::info!("[audio] discarded start of {} from a previous round", request.id);
            return Settled::Stale;
        }
        self.pending.remove(request.id);
        match result {
            Ok(handle) => {
                if self.played.insert(request.id) {
                    self.active.push(ActiveSound {
                        id: request.id,
                        handle,
                    });
                } else {
                    stop(&handle);
                }
                log::info!("[audio] started {} ({})", request.id, request.url);
                Settled::Started
            }
            Err(e) => {
                log::error!("[audio] playback failed for {}: {}", request.id, e);
                Settled::Failed
            }
        }
    }

    pub fn pause_all(&self) {
        for s in &self.active {
            if let Err(e) = s.handle.pause() {
                log::warn!("[audio] {}: {}", s.id, e);
            }
        }
    }

    pub fn resume_all(&self) {
        for s in &self.active {
            if let Err(e) = s.handle.resume() {
                log::warn!("[audio] {}: {}", s.id, e);
            }
        }
    }

    /// Flip every handle to the negation of the first handle's mute state.
    /// Returns the new state (an empty list counts as unmuted).
    pub fn toggle_mute(&self) -> bool {
        let muted = self
            .active
            .first()
            .map(|s| s.handle.is_muted())
            .unwrap_or(false);
        for s in &self.active {
            s.handle.set_muted(!muted);
        }
        !muted
    }

    /// Stop and forget every sound and start a new round.
    pub fn reset_all(&mut self) {
        for s in &self.active {
            stop(&s.handle);
        }
        self.active.clear();
        self.played.clear();
        self.pending.clear();
        self.round = self.round.wrapping_add(1);
    }

    pub fn active(&self) -> &[ActiveSound<H>] {
        &self.active
    }

    pub fn has_played(&self, id: &str) -> bool {
        self.played.contains(id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    pub fn played_count(&self) -> usize {
        self.played.len()
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn audio_dir(&self) -> &str {
        &self.audio_dir
    }
}

fn stop<H: SoundHandle>(handle: &H) {
    _ = handle.pause();
    handle.rewind();
}
