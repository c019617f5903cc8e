//! Floating chat panel placement.
//!
//! The panel can be dragged by its header. A drag only starts from the
//! primary button on a non-interactive region, and the panel is kept fully
//! inside the viewport while it moves.
//!
//! This is library surface for graphical front-ends embedding the chat
//! panel. The `ayursutra` terminal binary does not use it.

use crate::types::{Point, Rect, Size};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// The part of the panel under the pointer when a press happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Header, border, or any other passive surface.
    Surface,
    /// Text input area.
    Input,
    /// Any button inside the panel.
    Button,
    /// The close button.
    CloseButton,
    /// The scrolling message list.
    MessageList,
}

impl DragTarget {
    pub fn is_interactive(self) -> bool {
        !matches!(self, DragTarget::Surface)
    }
}

/// An in-progress drag. Holds the pointer offset inside the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDrag {
    offset: Point,
}

impl PanelDrag {
    pub fn offset(&self) -> Point {
        self.offset
    }
}

/// Position of the panel plus the active drag, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlacement {
    position: Point,
    drag: Option<PanelDrag>,
}

// =============================================================================
// PLACEMENT
// =============================================================================

impl PanelPlacement {
    pub fn new(initial: Point) -> Self {
        Self {
            position: initial,
            drag: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<PanelDrag> {
        self.drag
    }

    /// Pointer pressed on the panel. Returns `true` if a drag started.
    pub fn press(&mut self, pointer: Point, button: PointerButton, target: DragTarget, panel: Size) -> bool {
        if target.is_interactive() || button != PointerButton::Primary {
            return false;
        }
        let rect = Rect::new(self.position, panel);
        if !rect.contains(pointer) {
            return false;
        }
        self.drag = Some(PanelDrag {
            offset: Point::new(pointer.x - self.position.x, pointer.y - self.position.y),
        });
        true
    }

    /// Pointer moved. Returns the new position while a drag is active.
    pub fn pointer_moved(&mut self, pointer: Point, panel: Size, viewport: Size) -> Option<Point> {
        let drag = self.drag?;
        let wanted = Point::new(pointer.x - drag.offset.x, pointer.y - drag.offset.y);
        self.position = clamp_to_viewport(wanted, panel, viewport);
        Some(self.position)
    }

    /// Pointer released. Ends the drag, if any.
    pub fn release(&mut self) {
        self.drag = None;
    }
}

/// Keep a panel of `panel` size fully inside `viewport`.
///
/// When the panel is larger than the viewport on an axis it is pinned to 0.
pub fn clamp_to_viewport(position: Point, panel: Size, viewport: Size) -> Point {
    let max_x = (viewport.width - panel.width).max(0.0);
    let max_y = (viewport.height - panel.height).max(0.0);
    Point::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
}

// =============================================================================
// TESTS
// =============================================================================
