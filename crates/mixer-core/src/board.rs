//! Placement of every draggable item on the page.
//!
//! An item is always owned by exactly one place: one of the two side
//! containers, or the overlay layer while it is being dragged. The web
//! frontend mirrors this state onto the DOM after every change.

use crate::catalog::{self, CatalogError, Monster, Side};
use crate::constants::{DRAG_Z_INDEX, DROPPED_Z_INDEX};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Detached into the document-root layer, `at` in viewport coordinates.
    Overlay { at: Vec2 },
    /// Owned by a side container. `None` means natural flow (no overrides),
    /// `Some` is an absolute position relative to the container origin.
    Docked { side: Side, at: Option<Vec2> },
}

impl Placement {
    #[inline]
    pub fn home(side: Side) -> Self {
        Placement::Docked { side, at: None }
    }

    pub fn z_index(&self) -> Option<i32> {
        match self {
            Placement::Overlay { .. } => Some(DRAG_Z_INDEX),
            Placement::Docked { at: Some(_), .. } => Some(DROPPED_Z_INDEX),
            Placement::Docked { at: None, .. } => None,
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match *self {
            Placement::Overlay { at } => Some(at),
            Placement::Docked { at, .. } => at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DraggableItem {
    pub monster: &'static Monster,
    pub placement: Placement,
    pub dragging: bool,
}

impl DraggableItem {
    fn new(monster: &'static Monster) -> Self {
        Self {
            monster,
            placement: Placement::home(monster.side),
            dragging: false,
        }
    }

    #[inline]
    pub fn id(&self) -> &'static str {
        self.monster.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.monster.side
    }

    /// True when the item carries no position or stacking overrides.
    pub fn is_home(&self) -> bool {
        !self.dragging && self.placement == Placement::home(self.side())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Board {
    items: Vec<DraggableItem>,
}

impl Board {
    /// Build a board from the identities discovered on the page.
    ///
    /// Identities missing from the catalog are returned as errors and left
    /// out of the board; duplicates are ignored.
    pub fn from_identities<'a, I>(ids: I) -> (Self, Vec<CatalogError>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut board = Board::default();
        let mut errors = Vec::new();
        for id in ids {
            match catalog::resolve(id) {
                Ok(m) => {
                    if board.get(m.id).is_none() {
                        board.items.push(DraggableItem::new(m));
                    }
                }
                Err(e) => errors.push(e),
            }
        }
        (board, errors)
    }

    pub fn items(&self) -> &[DraggableItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&DraggableItem> {
        self.items.iter().find(|it| it.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut DraggableItem> {
        self.items.iter_mut().find(|it| it.id() == id)
    }

    /// Clear the dragging flag of a dropped item. Returns whether it changed.
    pub(crate) fn settle(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(item) if item.dragging => {
                item.dragging = false;
                true
            }
            _ => false,
        }
    }

    /// Return every item to its home container with no overrides.
    pub(crate) fn reset(&mut self) {
        for item in &mut self.items {
            item.placement = Placement::home(item.side());
            item.dragging = false;
        }
    }
}
