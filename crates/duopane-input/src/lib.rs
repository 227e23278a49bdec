// Pointer router: hit-tests the active divider and turns raw pointer
// down/move/up/cancel into divider gesture phases.

mod tests;

use duopane_core::{
    GestureEvent, GesturePhase, PointerEvent, RenderState, Vec2, DIVIDER_HIT_THICKNESS,
};

// ──────────────────────────────────────────────
// Router
// ──────────────────────────────────────────────

/// Decides whether a pointer sequence grabs the divider. A press inside the
/// hit region starts the gesture immediately, without waiting for movement,
/// so a tap on the divider already shows the handle.
pub struct Router {
    captured: bool,
    last_position: Vec2,
    hit_thickness: f64,
}

impl Router {
    /// Create a new Router with the default divider hit region.
    pub fn new() -> Self {
        Self::with_hit_thickness(DIVIDER_HIT_THICKNESS)
    }

    /// Create a new Router with a custom divider hit region thickness.
    pub fn with_hit_thickness(hit_thickness: f64) -> Self {
        Self {
            captured: false,
            last_position: Vec2::default(),
            hit_thickness,
        }
    }

    /// Returns true while a divider gesture owns the pointer.
    pub fn is_capturing(&self) -> bool {
        self.captured
    }

    /// Returns true if `position` would grab the divider in `state`.
    pub fn hits_divider(&self, position: Vec2, state: &RenderState) -> bool {
        if state.active().divider.hidden {
            return false;
        }
        state
            .divider_rect(self.hit_thickness)
            .is_some_and(|rect| rect.contains(position))
    }

    /// Process a pointer event against the latest render state. Returns the
    /// gesture step to forward to the controller, if any.
    pub fn process(&mut self, event: PointerEvent, state: &RenderState) -> Option<GestureEvent> {
        match event {
            PointerEvent::Down { position } => {
                // A second press while captured restarts the gesture; the
                // controller cancels the old one first.
                if self.captured || self.hits_divider(position, state) {
                    self.captured = true;
                    self.last_position = position;
                    Some(GestureEvent::new(GesturePhase::Began, position))
                } else {
                    None
                }
            }
            PointerEvent::Move { position } => {
                if !self.captured {
                    return None;
                }
                self.last_position = position;
                Some(GestureEvent::new(GesturePhase::Changed, position))
            }
            PointerEvent::Up { position } => {
                if !self.captured {
                    return None;
                }
                self.captured = false;
                self.last_position = position;
                Some(GestureEvent::new(GesturePhase::Ended, position))
            }
            PointerEvent::Cancel => {
                if !self.captured {
                    return None;
                }
                self.captured = false;
                log::debug!("divider gesture cancelled by platform");
                Some(GestureEvent::new(GesturePhase::Cancelled, self.last_position))
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
