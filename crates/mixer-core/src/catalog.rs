//! Static table of known monsters: identity, sound file and home side.
//!
//! The side assignment is an explicit table rather than anything derived from
//! the identity string, so a renamed or unknown item surfaces as a
//! [`CatalogError`] instead of silently landing on the right.

use thiserror::Error;

/// One of the two fixed containers an item returns to after a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Monster {
    pub id: &'static str,
    pub sound_file: &'static str,
    pub side: Side,
}

pub const MONSTERS: &[Monster] = &[
    Monster {
        id: "monster-bowgart",
        sound_file: "Bowgart_1.MP3",
        side: Side::Left,
    },
    Monster {
        id: "monster-tweedle",
        sound_file: "tweedle.mp3",
        side: Side::Left,
    },
    Monster {
        id: "monster-congle",
        sound_file: "congle.mp3",
        side: Side::Left,
    },
    Monster {
        id: "monster-viveine",
        sound_file: "viveine.mp3",
        side: Side::Left,
    },
    Monster {
        id: "monster-maw",
        sound_file: "maw.mp3",
        side: Side::Left,
    },
    Monster {
        id: "monster-deedge",
        sound_file: "deedge.mp3",
        side: Side::Right,
    },
    Monster {
        id: "monster-xyster",
        sound_file: "xyster.mp3",
        side: Side::Right,
    },
    Monster {
        id: "monster-dwumrohl",
        sound_file: "dwumrohl.mp3",
        side: Side::Right,
    },
    Monster {
        id: "monster-entbrat",
        sound_file: "entbrat.mp3",
        side: Side::Right,
    },
    Monster {
        id: "monster-thrumble",
        sound_file: "thrumble.mp3",
        side: Side::Right,
    },
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item `{0}` has no catalog entry")]
    UnknownIdentity(String),
}

#[inline]
pub fn lookup(id: &str) -> Option<&'static Monster> {
    MONSTERS.iter().find(|m| m.id == id)
}

pub fn resolve(id: &str) -> Result<&'static Monster, CatalogError> {
    lookup(id).ok_or_else(|| CatalogError::UnknownIdentity(id.to_string()))
}

/// Destination side for an identity; a pure function of the identity.
pub fn side_of(id: &str) -> Result<Side, CatalogError> {
    resolve(id).map(|m| m.side)
}

/// Join the asset directory and the monster's sound file into a URL.
pub fn sound_url(audio_dir: &str, monster: &Monster) -> String {
    let dir = audio_dir.trim_end_matches('/');
    if dir.is_empty() {
        monster.sound_file.to_string()
    } else {
        format!("{}/{}", dir, monster.sound_file)
    }
}
