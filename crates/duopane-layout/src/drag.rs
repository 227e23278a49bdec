use duopane_core::Axis;

use crate::snap::{SnapOutcome, SnapPolicy};

// ──────────────────────────────────────────────
// DragSession: one divider pan gesture
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Begun,
    Changing,
    Ended,
    Cancelled,
}

/// Limits a drag is clamped against. Updated in place when the container
/// or the keyboard changes mid-drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    /// Full container extent along the drag axis.
    pub container_extent: f64,
    pub inset_lead: f64,
    pub inset_trail: f64,
    /// Height of an on-screen keyboard measured from the container's bottom
    /// edge. Always zero on the width axis.
    pub keyboard_inset: f64,
}

impl DragBounds {
    /// Bounds of a container with no insets and no keyboard.
    pub fn plain(container_extent: f64) -> Self {
        Self {
            container_extent,
            inset_lead: 0.0,
            inset_trail: 0.0,
            keyboard_inset: 0.0,
        }
    }

    /// Container extent minus both insets.
    pub fn usable_extent(&self) -> f64 {
        (self.container_extent - self.inset_lead - self.inset_trail).max(0.0)
    }

    /// Part of the usable extent hidden by the keyboard. The keyboard frame
    /// includes the bottom safe area, so only the excess counts.
    pub fn keyboard_overlap(&self) -> f64 {
        (self.keyboard_inset - self.inset_trail).max(0.0)
    }

    pub fn max_allowed_extent(&self) -> f64 {
        (self.usable_extent() - self.keyboard_overlap()).max(0.0)
    }
}

/// Live result of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub extent: f64,
    /// The drag ran into the maximum on the height axis; any focused text
    /// input should give up the keyboard.
    pub release_focus: bool,
}

/// Tracks one divider drag from pointer-down to release.
///
/// The session works in absolute extents only: the ratio it started from
/// stays frozen until the controller re-anchors it from the final extent.
#[derive(Debug, Clone)]
pub struct DragSession {
    axis: Axis,
    state: DragState,
    initial_primary_extent: f64,
    initial_pointer_offset: f64,
    bounds: DragBounds,
    candidate: f64,
}

impl DragSession {
    pub fn begin(
        axis: Axis,
        initial_primary_extent: f64,
        initial_pointer_offset: f64,
        bounds: DragBounds,
    ) -> Self {
        Self {
            axis,
            state: DragState::Begun,
            initial_primary_extent,
            initial_pointer_offset,
            bounds,
            candidate: initial_primary_extent,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, DragState::Begun | DragState::Changing)
    }

    pub fn initial_primary_extent(&self) -> f64 {
        self.initial_primary_extent
    }

    pub fn initial_pointer_offset(&self) -> f64 {
        self.initial_pointer_offset
    }

    /// Extent the primary pane currently shows.
    pub fn candidate(&self) -> f64 {
        self.candidate
    }

    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    /// Replace the bounds used by later moves and by the release. The
    /// current candidate is left as is.
    pub fn update_bounds(&mut self, bounds: DragBounds) {
        self.bounds = bounds;
    }

    /// Follow the pointer. Returns `None` once the session has finished.
    pub fn move_to(&mut self, pointer_offset: f64) -> Option<DragUpdate> {
        if !self.is_live() || !pointer_offset.is_finite() {
            return None;
        }
        self.state = DragState::Changing;

        let max = self.bounds.max_allowed_extent();
        let raw = self.initial_primary_extent + (pointer_offset - self.initial_pointer_offset);
        let release_focus = self.axis == Axis::Height && raw >= max;
        self.candidate = raw.clamp(0.0, max);

        Some(DragUpdate {
            extent: self.candidate,
            release_focus,
        })
    }

    /// Release the divider, snapping to an edge when close enough.
    pub fn end(&mut self) -> Option<SnapOutcome> {
        if !self.is_live() {
            return None;
        }
        self.state = DragState::Ended;
        Some(SnapPolicy::evaluate_on(
            self.axis,
            self.candidate,
            self.bounds.usable_extent(),
        ))
    }

    /// Abandon the drag. Returns the extent the pane had before it began.
    pub fn cancel(&mut self) -> Option<f64> {
        if !self.is_live() {
            return None;
        }
        self.state = DragState::Cancelled;
        self.candidate = self.initial_primary_extent;
        Some(self.initial_primary_extent)
    }
}
