use crate::board::{Board, Placement};
use crate::catalog::Side;
use glam::Vec2;
use instant::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DragError {
    #[error("a drag of `{0}` is already in progress")]
    AlreadyDragging(&'static str),
    #[error("`{0}` is not a draggable item")]
    UnknownItem(String),
}

#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    pub id: &'static str,
    /// Pointer position minus item origin at pointer-down.
    pub offset: Vec2,
    pub started: Instant,
}

/// Result of releasing a drag. Always produced, even for a zero-distance drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropEvent {
    pub id: &'static str,
    pub side: Side,
    /// Container-relative position, `None` if the container was not found.
    pub docked_at: Option<Vec2>,
    pub held: Duration,
}

/// Single global drag: Idle -> Dragging -> Idle.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.session.map(|s| s.id)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Detach `id` into the overlay layer at `item_origin` and start tracking.
    pub fn begin(
        &mut self,
        board: &mut Board,
        id: &str,
        pointer: Vec2,
        item_origin: Vec2,
    ) -> Result<Vec2, DragError> {
        if let Some(s) = &self.session {
            return Err(DragError::AlreadyDragging(s.id));
        }
        let item = board
            .get_mut(id)
            .ok_or_else(|| DragError::UnknownItem(id.to_string()))?;
        item.placement = Placement::Overlay { at: item_origin };
        item.dragging = true;
        self.session = Some(DragSession {
            id: item.id(),
            offset: pointer - item_origin,
            started: Instant::now(),
        });
        Ok(item_origin)
    }

    /// Follow the pointer, keeping the item's box inside the viewport.
    pub fn update(
        &mut self,
        board: &mut Board,
        pointer: Vec2,
        item_size: Vec2,
        viewport: Vec2,
    ) -> Option<(&'static str, Vec2)> {
        let s = self.session.as_ref()?;
        let at = clamp_to_viewport(pointer - s.offset, item_size, viewport);
        if let Some(item) = board.get_mut(s.id) {
            item.placement = Placement::Overlay { at };
        }
        Some((s.id, at))
    }

    /// Release the drag and dock the item in its side container.
    ///
    /// `container_origin` yields the viewport origin of a side container; the
    /// item keeps its visual position by converting to container-relative
    /// coordinates. The dragging flag stays set until [`Board`] is settled.
    pub fn end(
        &mut self,
        board: &mut Board,
        container_origin: impl FnOnce(Side) -> Option<Vec2>,
    ) -> Option<DropEvent> {
        let s = self.session.take()?;
        let item = board.get_mut(s.id)?;
        let side = item.side();
        let docked_at = match item.placement {
            Placement::Overlay { at } => container_origin(side).map(|origin| at - origin),
            Placement::Docked { at, .. } => at,
        };
        if let Some(at) = docked_at {
            item.placement = Placement::Docked { side, at: Some(at) };
        }
        Some(DropEvent {
            id: s.id,
            side,
            docked_at,
            held: s.started.elapsed(),
        })
    }

    /// Abandon the current drag without producing a drop.
    pub fn cancel(&mut self) -> Option<&'static str> {
        self.session.take().map(|s| s.id)
    }
}

/// Clamp an item origin so the box `size` stays within `viewport`, per axis.
///
/// An item larger than the viewport on an axis is pinned to 0 on that axis.
#[inline]
pub fn clamp_to_viewport(origin: Vec2, size: Vec2, viewport: Vec2) -> Vec2 {
    let max = (viewport - size).max(Vec2::ZERO);
    origin.min(max).max(Vec2::ZERO)
}
