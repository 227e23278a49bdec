use duopane_core::{Axis, SnapEdge};

/// A drag ending at or below this share of the total collapses the primary pane.
pub const SNAP_LEAD_FRACTION: f64 = 0.05;

/// A drag ending at or above this share of the total collapses the secondary pane.
pub const SNAP_TRAIL_FRACTION: f64 = 0.95;

/// Resolved extent and edge after a drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    pub extent: f64,
    pub edge: SnapEdge,
}

/// Decides whether a released divider snaps to a container edge.
///
/// Thresholds are fractions of the current total, so sensitivity scales
/// with the container.
pub struct SnapPolicy;

impl SnapPolicy {
    pub fn evaluate(
        candidate_extent: f64,
        total_extent: f64,
        lead_edge: SnapEdge,
        trail_edge: SnapEdge,
    ) -> SnapOutcome {
        if !(total_extent > 0.0) {
            return SnapOutcome {
                extent: candidate_extent.max(0.0),
                edge: SnapEdge::None,
            };
        }

        let hi = total_extent * SNAP_TRAIL_FRACTION;
        let lo = total_extent * SNAP_LEAD_FRACTION;

        if candidate_extent >= hi {
            SnapOutcome {
                extent: total_extent,
                edge: trail_edge,
            }
        } else if candidate_extent <= lo {
            SnapOutcome {
                extent: 0.0,
                edge: lead_edge,
            }
        } else {
            SnapOutcome {
                extent: candidate_extent,
                edge: SnapEdge::None,
            }
        }
    }

    /// The (lead, trail) edges reported for drags along `axis`.
    pub fn edges_for(axis: Axis) -> (SnapEdge, SnapEdge) {
        match axis {
            Axis::Width => (SnapEdge::Lead, SnapEdge::Trail),
            Axis::Height => (SnapEdge::Top, SnapEdge::Bottom),
        }
    }

    /// Evaluate with the edges belonging to `axis`.
    pub fn evaluate_on(axis: Axis, candidate_extent: f64, total_extent: f64) -> SnapOutcome {
        let (lead, trail) = Self::edges_for(axis);
        Self::evaluate(candidate_extent, total_extent, lead, trail)
    }
}
