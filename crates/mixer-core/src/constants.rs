// Shared interaction tuning constants.

// Stacking order while an item floats in the overlay layer
pub const DRAG_Z_INDEX: i32 = 9999;
// Stacking order of an item left where it was dropped
pub const DROPPED_Z_INDEX: i32 = 100;

// Delay before the dragging flag is cleared after a drop (avoids a flicker)
pub const SETTLE_DELAY_MS: i32 = 10;

// Directory sound files are resolved against unless the page overrides it
pub const DEFAULT_AUDIO_DIR: &str = "audio";

// Upper bound on simultaneously active sounds kept inline
pub const ACTIVE_SOUNDS_INLINE: usize = 10;
