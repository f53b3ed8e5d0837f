//! Owner of all widget state: the board, the drag controller and the sound
//! registry. Created once at page init; `reset_all` starts a new round.

use crate::board::Board;
use crate::catalog::Side;
use crate::constants::{DEFAULT_AUDIO_DIR, SETTLE_DELAY_MS};
use crate::drag::{DragController, DragError, DropEvent};
use crate::registry::{SoundError, SoundHandle, SoundRegistry, StartRequest, Settled};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixerConfig {
    pub audio_dir: String,
    pub settle_delay_ms: i32,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            audio_dir: DEFAULT_AUDIO_DIR.to_string(),
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

impl MixerConfig {
    pub fn with_audio_dir(mut self, dir: impl Into<String>) -> Self {
        self.audio_dir = dir.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DropOutcome {
    pub drop: DropEvent,
    /// Start to issue for the dropped item, if its sound should begin now.
    pub start: Option<StartRequest>,
}

pub struct Mixer<H> {
    config: MixerConfig,
    board: Board,
    drag: DragController,
    sounds: SoundRegistry<H>,
}

impl<H: SoundHandle> Mixer<H> {
    pub fn new(config: MixerConfig, board: Board) -> Self {
        let sounds = SoundRegistry::new(config.audio_dir.clone());
        Self {
            config,
            board,
            drag: DragController::default(),
            sounds,
        }
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn sounds(&self) -> &SoundRegistry<H> {
        &self.sounds
    }

    pub fn begin_drag(&mut self, id: &str, pointer: Vec2, item_origin: Vec2) -> Result<Vec2, DragError> {
        self.drag.begin(&mut self.board, id, pointer, item_origin)
    }

    pub fn update_drag(
        &mut self,
        pointer: Vec2,
        item_size: Vec2,
        viewport: Vec2,
    ) -> Option<(&'static str, Vec2)> {
        self.drag.update(&mut self.board, pointer, item_size, viewport)
    }

    /// Release the current drag and activate the dropped item's sound.
    pub fn end_drag(
        &mut self,
        container_origin: impl FnOnce(Side) -> Option<Vec2>,
    ) -> Option<DropOutcome> {
        let drop = self.drag.end(&mut self.board, container_origin)?;
        let start = self.sounds.activate(drop.id);
        Some(DropOutcome { drop, start })
    }

    /// Deferred half of a drop: clear the item's dragging flag, unless it has
    /// been picked up again in the meantime.
    pub fn settle_item(&mut self, id: &str) -> bool {
        if self.drag.active_id() == Some(id) {
            return false;
        }
        self.board.settle(id)
    }

    pub fn activate(&mut self, id: &str) -> Option<StartRequest> {
        self.sounds.activate(id)
    }

    pub fn settle_start(&mut self, request: StartRequest, result: Result<H, SoundError>) -> Settled {
        self.sounds.settle(request, result)
    }

    pub fn pause_all(&self) {
        self.sounds.pause_all();
    }

    pub fn resume_all(&self) {
        self.sounds.resume_all();
    }

    pub fn toggle_mute(&self) -> bool {
        self.sounds.toggle_mute()
    }

    /// Stop every sound, forget what played and send every item home.
    pub fn reset_all(&mut self) {
        if let Some(id) = self.drag.cancel() {
            log::info!("[drag] reset abandoned drag of {}", id);
        }
        self.sounds.reset_all();
        self.board.reset();
    }
}
