//! Mirrors board state onto the page's elements.
//!
//! The board decides where an item lives; this module performs the matching
//! re-parenting and inline-style changes.

use crate::constants::{DRAGGING_ATTR, POSITION_STYLE_PROPS};
use crate::dom;
use glam::Vec2;
use mixer_core::{Board, DraggableItem, Placement};
use web_sys as web;

pub struct Stage {
    document: web::Document,
    elements: Vec<(&'static str, web::HtmlElement)>,
}

impl Stage {
    /// Pair every board item with its element; items without one are skipped.
    pub fn new(document: web::Document, board: &Board, found: &[web::HtmlElement]) -> Self {
        let elements = board
            .items()
            .iter()
            .filter_map(|item| {
                found
                    .iter()
                    .find(|el| el.id() == item.id())
                    .map(|el| (item.id(), el.clone()))
            })
            .collect();
        Self { document, elements }
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn element(&self, id: &str) -> Option<&web::HtmlElement> {
        self.elements.iter().find(|(k, _)| *k == id).map(|(_, el)| el)
    }

    pub fn elements(&self) -> impl Iterator<Item = (&'static str, &web::HtmlElement)> {
        self.elements.iter().map(|(k, el)| (*k, el))
    }

    /// Apply an item's placement and dragging flag to its element.
    pub fn sync(&self, item: &DraggableItem) {
        let Some(el) = self.element(item.id()) else {
            return;
        };
        let style = el.style();
        match item.placement {
            Placement::Overlay { at } => {
                if let Some(body) = self.document.body() {
                    _ = body.append_child(el);
                }
                _ = style.set_property("position", "absolute");
                _ = style.set_property("right", "auto");
                set_origin(&style, at);
            }
            Placement::Docked { side, at: Some(at) } => {
                match dom::side_container(&self.document, side) {
                    Some(container) => {
                        _ = container.append_child(el);
                    }
                    None => log::warn!("[drag] no {} container for {}", side.name(), item.id()),
                }
                _ = style.set_property("position", "absolute");
                _ = style.set_property("right", "auto");
                _ = style.set_property("bottom", "auto");
                set_origin(&style, at);
            }
            Placement::Docked { side, at: None } => {
                for prop in POSITION_STYLE_PROPS {
                    _ = style.remove_property(prop);
                }
                if let Some(container) = dom::side_container(&self.document, side) {
                    _ = container.append_child(el);
                }
            }
        }
        if let Some(z) = item.placement.z_index() {
            _ = style.set_property("z-index", &z.to_string());
        }
        self.sync_dragging(item);
    }

    pub fn sync_dragging(&self, item: &DraggableItem) {
        if let Some(el) = self.element(item.id()) {
            if item.dragging {
                _ = el.set_attribute(DRAGGING_ATTR, "true");
            } else {
                _ = el.remove_attribute(DRAGGING_ATTR);
            }
        }
    }

    pub fn sync_all(&self, board: &Board) {
        for item in board.items() {
            self.sync(item);
        }
    }

    /// Per-move update: only the position changes while dragging.
    pub fn move_to(&self, id: &str, at: Vec2) {
        if let Some(el) = self.element(id) {
            set_origin(&el.style(), at);
        }
    }
}

#[inline]
fn set_origin(style: &web::CssStyleDeclaration, at: Vec2) {
    _ = style.set_property("left", &format!("{}px", at.x));
    _ = style.set_property("top", &format!("{}px", at.y));
}
