// Two-pane split layout: per-axis ratio model, edge snapping, divider drag
// sessions and the controller that ties both axes together.

mod controller;
mod drag;
mod ratio;
mod snap;

pub use controller::{ArrangementController, ControllerConfig};
pub use drag::{DragBounds, DragSession, DragState, DragUpdate};
pub use ratio::{RatioModel, DEFAULT_RATIO};
pub use snap::{SnapOutcome, SnapPolicy, SNAP_LEAD_FRACTION, SNAP_TRAIL_FRACTION};
