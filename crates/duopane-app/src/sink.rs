// Logging render sink: stands in for a real view layer by describing every
// snapshot the controller pushes.

use std::cell::RefCell;
use std::rc::Rc;

use duopane_core::{AnimationRequest, Axis, LayoutIntent, RenderSink, RenderState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinkStats {
    pub frames: usize,
    pub animations: usize,
    pub focus_releases: usize,
}

pub struct LogSink {
    stats: Rc<RefCell<SinkStats>>,
}

impl LogSink {
    /// Create a sink and a handle to its counters, which stay readable after
    /// the sink has been handed to the controller.
    pub fn new() -> (Self, Rc<RefCell<SinkStats>>) {
        let stats = Rc::new(RefCell::new(SinkStats::default()));
        (
            Self {
                stats: stats.clone(),
            },
            stats,
        )
    }
}

impl RenderSink for LogSink {
    fn render(&mut self, state: &RenderState) {
        self.stats.borrow_mut().frames += 1;
        log::info!("{}", describe(state));
    }

    fn animate(&mut self, request: &AnimationRequest) {
        self.stats.borrow_mut().animations += 1;
        log::debug!(
            "animate {:?} over {}ms: {} -> {}",
            request.curve,
            request.duration.as_millis(),
            describe(&request.from),
            describe(&request.to)
        );
    }

    fn release_focus(&mut self) {
        self.stats.borrow_mut().focus_releases += 1;
        log::info!("release input focus");
    }
}

/// One-line summary of a render state.
pub fn describe(state: &RenderState) -> String {
    let axis = state.arrangement.axis();
    let active = state.axis(axis);
    let extent = match active.extent {
        Some(extent) => format!("{:.1}", extent),
        None => "unlaid".to_string(),
    };
    let intent = match active.intent {
        LayoutIntent::Ratio(r) => format!("ratio {:.3}", r),
        LayoutIntent::PixelPinned(px) => format!("pinned {:.1}", px),
    };
    let axis_name = match axis {
        Axis::Width => "width",
        Axis::Height => "height",
    };
    format!(
        "{:?} {} primary={} ({}) snap={:?}",
        state.arrangement, axis_name, extent, intent, active.snap_edge
    )
}
