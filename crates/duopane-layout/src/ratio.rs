// ──────────────────────────────────────────────
// RatioModel: primary pane share along one axis
// ──────────────────────────────────────────────

/// Ratio a freshly created axis starts with.
pub const DEFAULT_RATIO: f64 = 0.5;

/// Fraction of the usable extent taken by the primary pane.
///
/// This is the single source of truth for pane size at rest: pixel extents
/// are always derived from it, so a container resize rescales the panes
/// without losing what the user chose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioModel {
    ratio: f64,
}

impl RatioModel {
    pub fn new(ratio: f64) -> Self {
        let mut model = Self {
            ratio: DEFAULT_RATIO,
        };
        model.set_ratio(ratio);
        model
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Store `ratio` clamped to [0, 1]. NaN is ignored.
    pub fn set_ratio(&mut self, ratio: f64) {
        if ratio.is_nan() {
            return;
        }
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    pub fn primary_extent(&self, total_extent: f64) -> f64 {
        self.ratio * total_extent
    }

    /// Re-derive the ratio from an absolute primary extent. A non-positive
    /// total is a transient setup state and leaves the ratio untouched.
    pub fn update_from_absolute(&mut self, primary_extent: f64, total_extent: f64) {
        if !(total_extent > 0.0) || !total_extent.is_finite() || !primary_extent.is_finite() {
            return;
        }
        self.ratio = (primary_extent / total_extent).clamp(0.0, 1.0);
    }
}

impl Default for RatioModel {
    fn default() -> Self {
        Self::new(DEFAULT_RATIO)
    }
}
