//! Drag and resize gesture sessions.
//!
//! A gesture owns the transient screen-space frame of each target between
//! its start and end events. Move updates are pure arithmetic on those
//! frames (they fire once per pointer move); only the end event produces a
//! committed batch of field changes, converted to logical units.

use crate::sync::{FieldChange, FieldKey};
use crate::viewport::Viewport;

/// On-screen frame of a gesture target, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    /// Create a frame from its style values.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Hard containment limits configured by the interaction surface.
///
/// The session honors these as supplied; it never computes them itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Which edges a resize handle drags: -1 = left/top edge, 1 = right/bottom
/// edge, 0 = edge not involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDirection {
    pub x: i8,
    pub y: i8,
}

impl ResizeDirection {
    pub const TOP_LEFT: Self = Self { x: -1, y: -1 };
    pub const TOP: Self = Self { x: 0, y: -1 };
    pub const TOP_RIGHT: Self = Self { x: 1, y: -1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };
    pub const BOTTOM_LEFT: Self = Self { x: -1, y: 1 };
    pub const BOTTOM: Self = Self { x: 0, y: 1 };
    pub const BOTTOM_RIGHT: Self = Self { x: 1, y: 1 };

    /// Which of (top, left) must be recomputed from the size delta so the
    /// opposite edge stays stationary.
    ///
    /// Dragging a top/left-adjacent handle moves that edge, so its
    /// coordinate is derived from the size change rather than trusted from
    /// the raw drag output. Right/bottom handles keep the top-left corner
    /// fixed and touch neither coordinate.
    pub fn recomputes(self) -> (bool, bool) {
        match (self.x, self.y) {
            (-1, -1) | (-1, 0) | (0, -1) => (true, true),
            (1, -1) => (true, false),
            (-1, 1) => (false, true),
            _ => (false, false),
        }
    }
}

/// Kind of gesture in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

/// One element taking part in a gesture.
#[derive(Debug, Clone)]
pub struct GestureTarget {
    pub id: String,
    pub frame: ScreenRect,
}

impl GestureTarget {
    pub fn new(id: impl Into<String>, frame: ScreenRect) -> Self {
        Self {
            id: id.into(),
            frame,
        }
    }
}

/// A live drag or resize gesture over one or more targets.
///
/// Each instance is freshly constructed at gesture start and consumed (or
/// dropped) at the end, so an abandoned gesture cannot corrupt the next one.
#[derive(Debug, Clone)]
pub struct Gesture {
    kind: GestureKind,
    targets: Vec<GestureTarget>,
    bounds: Option<Bounds>,
}

impl Gesture {
    fn new(kind: GestureKind, targets: Vec<GestureTarget>, bounds: Option<Bounds>) -> Self {
        Self {
            kind,
            targets,
            bounds,
        }
    }

    /// The gesture kind.
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Current frames, read by the rendering layer each frame.
    pub fn targets(&self) -> &[GestureTarget] {
        &self.targets
    }

    fn target_mut(&mut self, id: &str) -> Option<&mut GestureTarget> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    /// Apply a drag-move for one target. Group drags call this once per
    /// target; each frame is clamped independently, there is no shared
    /// anchor.
    pub fn drag_move(&mut self, id: &str, left: f64, top: f64) {
        if self.kind != GestureKind::Drag {
            return;
        }
        let bounds = self.bounds;
        if let Some(target) = self.target_mut(id) {
            let mut left = left.max(0.0);
            let mut top = top.max(0.0);
            if let Some(b) = bounds {
                left = left.min(b.right - target.frame.width).max(b.left);
                top = top.min(b.bottom - target.frame.height).max(b.top);
            }
            target.frame.left = left;
            target.frame.top = top;
        }
    }

    /// Apply a resize-move for one target.
    ///
    /// The moving edge's coordinate is recomputed from the size delta per
    /// the handle direction; the other coordinates keep their last value.
    pub fn resize_move(&mut self, id: &str, width: f64, height: f64, direction: ResizeDirection) {
        if self.kind != GestureKind::Resize {
            return;
        }
        if let Some(target) = self.target_mut(id) {
            let frame = &mut target.frame;
            let new_left = frame.left + (frame.width - width);
            let new_top = frame.top + (frame.height - height);
            let (recompute_top, recompute_left) = direction.recomputes();
            if recompute_top {
                frame.top = new_top;
            }
            if recompute_left {
                frame.left = new_left;
            }
            frame.width = width;
            frame.height = height;
        }
    }

    /// Consume the gesture, converting each target's final frame to logical
    /// units. Drag commits `[position.y, position.x]` per element; resize
    /// commits `[width, height, position.y, position.x]`.
    pub fn finish(self, viewport: &Viewport) -> Vec<FieldChange> {
        let mut changes = Vec::with_capacity(self.targets.len() * 4);
        for target in &self.targets {
            let frame = target.frame;
            if self.kind == GestureKind::Resize {
                changes.push(FieldChange::geometry(
                    FieldKey::Width,
                    viewport.to_logical(frame.width),
                    &target.id,
                ));
                changes.push(FieldChange::geometry(
                    FieldKey::Height,
                    viewport.to_logical(frame.height),
                    &target.id,
                ));
            }
            changes.push(FieldChange::geometry(
                FieldKey::PositionY,
                viewport.to_logical(frame.top),
                &target.id,
            ));
            changes.push(FieldChange::geometry(
                FieldKey::PositionX,
                viewport.to_logical(frame.left),
                &target.id,
            ));
        }
        changes
    }
}

/// Holds at most one live gesture for an interaction surface.
///
/// Move and end events without a matching start are tolerated as no-ops:
/// UI event delivery is not guaranteed reliable.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    gesture: Option<Gesture>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag over the given targets, replacing any stale gesture.
    pub fn begin_drag(&mut self, targets: Vec<GestureTarget>, bounds: Option<Bounds>) {
        self.begin(GestureKind::Drag, targets, bounds);
    }

    /// Start a resize over the given targets, replacing any stale gesture.
    pub fn begin_resize(&mut self, targets: Vec<GestureTarget>, bounds: Option<Bounds>) {
        self.begin(GestureKind::Resize, targets, bounds);
    }

    fn begin(&mut self, kind: GestureKind, targets: Vec<GestureTarget>, bounds: Option<Bounds>) {
        if self.gesture.is_some() {
            log::debug!("replacing abandoned gesture");
        }
        self.gesture = Some(Gesture::new(kind, targets, bounds));
    }

    /// Whether a gesture is in flight.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The live gesture, if any.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Forward a drag-move to the live gesture (no-op without one).
    pub fn drag_move(&mut self, id: &str, left: f64, top: f64) {
        if let Some(gesture) = &mut self.gesture {
            gesture.drag_move(id, left, top);
        }
    }

    /// Forward a resize-move to the live gesture (no-op without one).
    pub fn resize_move(&mut self, id: &str, width: f64, height: f64, direction: ResizeDirection) {
        if let Some(gesture) = &mut self.gesture {
            gesture.resize_move(id, width, height, direction);
        }
    }

    /// End the gesture and return its commit batch. Without a live gesture
    /// this returns an empty batch.
    pub fn finish(&mut self, viewport: &Viewport) -> Vec<FieldChange> {
        match self.gesture.take() {
            Some(gesture) => gesture.finish(viewport),
            None => Vec::new(),
        }
    }

    /// Drop the gesture without committing.
    pub fn abandon(&mut self) {
        self.gesture = None;
    }
}
