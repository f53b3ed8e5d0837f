/// Page contract: element ids, classes and attributes the widget binds to.
///
/// Markup and styling are supplied by the page; these names are the only
/// assumptions the frontend makes about it.
// Draggable items
pub const ITEM_SELECTOR: &str = ".monster-item";
pub const DRAGGING_ATTR: &str = "data-dragging";

// Destination containers
pub const LEFT_CONTAINER_SELECTOR: &str = ".left-monsters";
pub const RIGHT_CONTAINER_SELECTOR: &str = ".right-monsters";

// Optional controls
pub const PLAY_BUTTON_ID: &str = "play-icon";
pub const PAUSE_BUTTON_ID: &str = "pause-icon";
pub const SPEAKER_BUTTON_ID: &str = "speaker-icon";
pub const RESET_BUTTON_ID: &str = "refresh-icon";

// Class toggled on the speaker control while muted
pub const MUTED_CLASS: &str = "muted";

// <body> attribute overriding the sound asset directory
pub const AUDIO_DIR_ATTR: &str = "data-audio-dir";

// Inline style properties cleared when an item is sent home
pub const POSITION_STYLE_PROPS: [&str; 8] = [
    "position", "left", "top", "right", "bottom", "z-index", "width", "height",
];
