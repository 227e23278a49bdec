use std::time::Duration;

use duopane_core::{
    handle_offset_for, AnimationCurve, AnimationRequest, Arrangement, Axis, AxisRender, ChildId,
    Color, ContainerGeometry, DividerVisual, GestureEvent, GesturePhase, Insets, LayoutIntent,
    RenderSink, RenderState, Size, SizeClass, SnapEdge, DRAGGING_HAIR_THICKNESS,
};

use crate::drag::{DragBounds, DragSession, DragState};
use crate::ratio::{RatioModel, DEFAULT_RATIO};

// ──────────────────────────────────────────────
// Configuration
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Duration of an animated arrangement change.
    pub invert_animation_duration: Duration,
    /// Duration of the divider's grab/settle transitions.
    pub drag_animation_duration: Duration,
    /// Points per pixel; the resting hairline is one pixel thick.
    pub display_scale: f64,
    pub separator_color: Color,
    pub separator_selected_color: Color,
    pub initial_ratio: f64,
}

impl ControllerConfig {
    pub fn resting_hair_thickness(&self) -> f64 {
        if self.display_scale > 0.0 {
            1.0 / self.display_scale
        } else {
            1.0
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            invert_animation_duration: Duration::from_millis(250),
            drag_animation_duration: Duration::from_millis(150),
            display_scale: 2.0,
            separator_color: Color::SEPARATOR,
            separator_selected_color: Color::SEPARATOR_SELECTED,
            initial_ratio: DEFAULT_RATIO,
        }
    }
}

// ──────────────────────────────────────────────
// Per-axis state
// ──────────────────────────────────────────────

/// What a cancelled drag restores besides the ratio.
#[derive(Debug, Clone, Copy)]
struct Rollback {
    snap_edge: SnapEdge,
    divider: DividerVisual,
}

#[derive(Debug, Clone)]
struct AxisSlot {
    ratio: RatioModel,
    /// Usable extent; `None` until the axis has been laid out once.
    total: Option<f64>,
    /// Committed primary extent.
    extent: Option<f64>,
    intent: LayoutIntent,
    snap_edge: SnapEdge,
    divider: DividerVisual,
    session: Option<DragSession>,
    rollback: Option<Rollback>,
}

impl AxisSlot {
    fn new(config: &ControllerConfig) -> Self {
        let ratio = RatioModel::new(config.initial_ratio);
        Self {
            ratio,
            total: None,
            extent: None,
            intent: LayoutIntent::Ratio(ratio.ratio()),
            snap_edge: SnapEdge::None,
            divider: DividerVisual::resting(
                config.resting_hair_thickness(),
                config.separator_color,
            ),
            session: None,
            rollback: None,
        }
    }

    /// Re-derive the committed extent from the ratio.
    fn settle_to_ratio(&mut self) {
        self.intent = LayoutIntent::Ratio(self.ratio.ratio());
        self.extent = self.total.map(|total| self.ratio.primary_extent(total));
    }

    fn render(&self, hidden: bool) -> AxisRender {
        AxisRender {
            extent: self.extent,
            usable_extent: self.total,
            ratio: self.ratio.ratio(),
            intent: self.intent,
            snap_edge: self.snap_edge,
            divider: DividerVisual {
                hidden,
                ..self.divider
            },
        }
    }
}

// ──────────────────────────────────────────────
// ArrangementController
// ──────────────────────────────────────────────

/// Owns both axes of a two-pane split, routes divider gestures to the
/// active one and pushes a render snapshot after every change.
pub struct ArrangementController {
    config: ControllerConfig,
    arrangement: Arrangement,
    width: AxisSlot,
    height: AxisSlot,
    container_size: Option<Size>,
    safe_area: Insets,
    keyboard_inset: f64,
    active: bool,
    first_child: Option<ChildId>,
    second_child: Option<ChildId>,
    sink: Option<Box<dyn RenderSink>>,
}

impl ArrangementController {
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            width: AxisSlot::new(&config),
            height: AxisSlot::new(&config),
            config,
            arrangement: Arrangement::default(),
            container_size: None,
            safe_area: Insets::default(),
            keyboard_inset: 0.0,
            active: false,
            first_child: None,
            second_child: None,
            sink: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Attach the rendering collaborator and push the current state to it.
    pub fn attach_sink(&mut self, sink: Box<dyn RenderSink>) {
        self.sink = Some(sink);
        self.push_render();
    }

    pub fn detach_sink(&mut self) -> Option<Box<dyn RenderSink>> {
        self.sink.take()
    }

    fn slot(&self, axis: Axis) -> &AxisSlot {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut AxisSlot {
        match axis {
            Axis::Width => &mut self.width,
            Axis::Height => &mut self.height,
        }
    }

    // ── Queries ──────────────────────────────

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn ratio(&self, axis: Axis) -> f64 {
        self.slot(axis).ratio.ratio()
    }

    /// Primary pane extent on `axis`, or `None` before its first layout.
    pub fn primary_extent(&self, axis: Axis) -> Option<f64> {
        self.slot(axis).extent
    }

    pub fn snap_edge(&self, axis: Axis) -> SnapEdge {
        self.slot(axis).snap_edge
    }

    pub fn intent(&self, axis: Axis) -> LayoutIntent {
        self.slot(axis).intent
    }

    pub fn drag_state(&self, axis: Axis) -> DragState {
        self.slot(axis)
            .session
            .as_ref()
            .map_or(DragState::Idle, DragSession::state)
    }

    pub fn is_dragging(&self) -> bool {
        self.width.session.is_some() || self.height.session.is_some()
    }

    pub fn keyboard_inset(&self) -> f64 {
        self.keyboard_inset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn render_state(&self) -> RenderState {
        let active_axis = self.arrangement.axis();
        RenderState {
            arrangement: self.arrangement,
            container: self
                .container_size
                .map(|size| ContainerGeometry::new(size, self.safe_area)),
            width: self.width.render(active_axis != Axis::Width),
            height: self.height.render(active_axis != Axis::Height),
            first_child: self.first_child,
            second_child: self.second_child,
        }
    }

    // ── Lifecycle ────────────────────────────

    /// The container is on screen: keyboard tracking starts and arrangement
    /// changes animate from now on.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        log::debug!("split controller activated");
    }

    /// The container left the screen: keyboard tracking stops.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.keyboard_inset = 0.0;
        self.refresh_session_bounds(Axis::Height);
        log::debug!("split controller deactivated");
    }

    // ── Children ─────────────────────────────

    pub fn first_child(&self) -> Option<ChildId> {
        self.first_child
    }

    pub fn second_child(&self) -> Option<ChildId> {
        self.second_child
    }

    pub fn set_first_child(&mut self, child: Option<ChildId>) {
        if self.first_child != child {
            self.first_child = child;
            self.push_render();
        }
    }

    pub fn set_second_child(&mut self, child: Option<ChildId>) {
        if self.second_child != child {
            self.second_child = child;
            self.push_render();
        }
    }

    // ── Arrangement ──────────────────────────

    pub fn set_arrangement(&mut self, arrangement: Arrangement, animated: bool) {
        if arrangement == self.arrangement {
            return;
        }
        let from = self.render_state();

        let leaving = self.arrangement.axis();
        if self.slot(leaving).session.is_some() {
            self.cancel_drag(leaving);
        }

        log::debug!("arrangement {:?} -> {:?}", self.arrangement, arrangement);
        self.arrangement = arrangement;
        self.push_render();

        let duration = self.config.invert_animation_duration;
        if animated && self.active && !duration.is_zero() {
            self.request_animation(from, duration, AnimationCurve::EaseInOut);
        }
    }

    pub fn toggle_arrangement(&mut self, animated: bool) {
        self.set_arrangement(self.arrangement.toggled(), animated);
    }

    pub fn on_size_class_change(&mut self, size_class: SizeClass) {
        self.set_arrangement(size_class.arrangement(), true);
    }

    // ── Ratio ────────────────────────────────

    /// Set the primary share on `axis`. Any snap is released and the divider
    /// returns to rest. During a drag on that axis the live extent is kept and
    /// the drag's release overwrites the ratio.
    pub fn set_ratio(&mut self, axis: Axis, ratio: f64) {
        let config = self.config;
        let slot = self.slot_mut(axis);
        slot.ratio.set_ratio(ratio);
        if slot.session.is_none() {
            slot.settle_to_ratio();
            slot.snap_edge = SnapEdge::None;
            slot.divider = DividerVisual {
                hidden: slot.divider.hidden,
                ..DividerVisual::resting(config.resting_hair_thickness(), config.separator_color)
            };
        }
        self.push_render();
    }

    // ── Geometry ─────────────────────────────

    /// The usable extent of `axis` changed. The primary pane keeps its
    /// share; a drag in progress only has its bounds widened or narrowed.
    pub fn on_container_resize(&mut self, total_extent: f64, axis: Axis) {
        if !self.resize_axis(total_extent, axis) {
            return;
        }
        // Keep the container frame in step so pane frames split the same total.
        let insets = self.safe_area.leading(axis) + self.safe_area.trailing(axis);
        if let Some(size) = self.container_size {
            self.container_size = Some(size.with_extent(axis, total_extent + insets));
        }
        self.push_render();
    }

    /// Full container frame changed (rotation, split-screen, safe area).
    pub fn on_container_geometry(&mut self, geometry: ContainerGeometry) {
        self.container_size = Some(geometry.size);
        self.safe_area = geometry.safe_area;
        let mut changed = false;
        for axis in Axis::ALL {
            changed |= self.resize_axis(geometry.usable_extent(axis), axis);
        }
        if changed {
            self.push_render();
        }
    }

    fn resize_axis(&mut self, total_extent: f64, axis: Axis) -> bool {
        if !(total_extent > 0.0) || !total_extent.is_finite() {
            log::trace!("ignoring {:?} resize to {}", axis, total_extent);
            return false;
        }

        let first_layout = self.slot(axis).total.is_none();
        let slot = self.slot_mut(axis);
        slot.total = Some(total_extent);

        if slot.session.is_some() {
            self.refresh_session_bounds(axis);
            return true;
        }

        slot.settle_to_ratio();
        if first_layout {
            log::debug!(
                "{:?} laid out at {} (primary {:?})",
                axis,
                total_extent,
                slot.extent
            );
        }
        true
    }

    /// The on-screen keyboard's frame changed; `bottom_inset` is how far it
    /// reaches up from the container's bottom edge. Only limits drags.
    pub fn on_keyboard_frame_change(&mut self, bottom_inset: f64) {
        if !self.active {
            log::trace!("keyboard change ignored while inactive");
            return;
        }
        if !bottom_inset.is_finite() {
            return;
        }
        self.keyboard_inset = bottom_inset.max(0.0);
        self.refresh_session_bounds(Axis::Height);
    }

    fn bounds_for(&self, axis: Axis) -> DragBounds {
        let inset_lead = self.safe_area.leading(axis);
        let inset_trail = self.safe_area.trailing(axis);
        let usable = self.slot(axis).total.unwrap_or(0.0);
        DragBounds {
            container_extent: usable + inset_lead + inset_trail,
            inset_lead,
            inset_trail,
            keyboard_inset: match axis {
                Axis::Width => 0.0,
                Axis::Height => self.keyboard_inset,
            },
        }
    }

    fn refresh_session_bounds(&mut self, axis: Axis) {
        let bounds = self.bounds_for(axis);
        if let Some(session) = self.slot_mut(axis).session.as_mut() {
            session.update_bounds(bounds);
        }
    }

    // ── Gestures ─────────────────────────────

    /// Feed one divider gesture step to the active axis. Returns false when
    /// the event had nothing to act on.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        let axis = self.arrangement.axis();
        let pointer = axis.component(event.position);
        match event.phase {
            GesturePhase::Began => self.begin_drag(axis, pointer),
            GesturePhase::Changed => self.drag_to(axis, pointer),
            GesturePhase::Ended => self.end_drag(axis),
            GesturePhase::Cancelled => self.cancel_drag(axis),
        }
    }

    fn begin_drag(&mut self, axis: Axis, pointer: f64) -> bool {
        let Some(total) = self.slot(axis).total else {
            log::debug!("{:?} drag before first layout ignored", axis);
            return false;
        };
        if self.slot(axis).session.is_some() {
            log::debug!("{:?} drag restarted while active", axis);
            self.cancel_drag(axis);
        }

        let from = self.render_state();
        let bounds = self.bounds_for(axis);
        let config = self.config;
        let slot = self.slot_mut(axis);

        let initial = slot.ratio.primary_extent(total);
        slot.rollback = Some(Rollback {
            snap_edge: slot.snap_edge,
            divider: slot.divider,
        });
        slot.session = Some(DragSession::begin(axis, initial, pointer, bounds));
        slot.extent = Some(initial);
        slot.intent = LayoutIntent::PixelPinned(initial);
        slot.snap_edge = SnapEdge::None;
        slot.divider = DividerVisual {
            hair_thickness: DRAGGING_HAIR_THICKNESS,
            hair_alpha: 1.0,
            hair_color: config.separator_selected_color,
            handle_alpha: 1.0,
            handle_offset: handle_offset_for(SnapEdge::None),
            ..slot.divider
        };
        log::debug!("{:?} drag began at {} (extent {})", axis, pointer, initial);

        self.push_render();
        if !config.drag_animation_duration.is_zero() {
            self.request_animation(from, config.drag_animation_duration, AnimationCurve::EaseInOut);
        }
        true
    }

    fn drag_to(&mut self, axis: Axis, pointer: f64) -> bool {
        let slot = self.slot_mut(axis);
        let Some(update) = slot.session.as_mut().and_then(|s| s.move_to(pointer)) else {
            return false;
        };
        slot.extent = Some(update.extent);
        slot.intent = LayoutIntent::PixelPinned(update.extent);

        self.push_render();
        if update.release_focus {
            if let Some(sink) = self.sink.as_mut() {
                sink.release_focus();
            }
        }
        true
    }

    fn end_drag(&mut self, axis: Axis) -> bool {
        let from = self.render_state();
        let config = self.config;
        let slot = self.slot_mut(axis);
        let Some(mut session) = slot.session.take() else {
            return false;
        };
        slot.rollback = None;
        let Some(outcome) = session.end() else {
            return false;
        };
        let total = session.bounds().usable_extent();

        slot.ratio.update_from_absolute(outcome.extent, total);
        slot.extent = Some(outcome.extent);
        slot.intent = LayoutIntent::Ratio(slot.ratio.ratio());
        slot.snap_edge = outcome.edge;

        let snapped = outcome.edge.is_snapped();
        slot.divider = DividerVisual {
            hair_thickness: config.resting_hair_thickness(),
            hair_color: config.separator_color,
            hair_alpha: if snapped { 0.0 } else { 1.0 },
            handle_alpha: if snapped { 1.0 } else { 0.0 },
            handle_offset: handle_offset_for(outcome.edge),
            ..slot.divider
        };
        log::debug!(
            "{:?} drag ended at {} ({:?}, ratio {:.3})",
            axis,
            outcome.extent,
            outcome.edge,
            slot.ratio.ratio()
        );

        self.push_render();
        if !config.drag_animation_duration.is_zero() {
            self.request_animation(from, config.drag_animation_duration, AnimationCurve::EaseOut);
        }
        true
    }

    fn cancel_drag(&mut self, axis: Axis) -> bool {
        let slot = self.slot_mut(axis);
        let Some(mut session) = slot.session.take() else {
            return false;
        };
        session.cancel();
        if let Some(rollback) = slot.rollback.take() {
            slot.snap_edge = rollback.snap_edge;
            slot.divider = rollback.divider;
        }
        slot.settle_to_ratio();
        log::debug!("{:?} drag cancelled", axis);

        self.push_render();
        true
    }

    // ── Output ───────────────────────────────

    fn push_render(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let state = self.render_state();
        if let Some(sink) = self.sink.as_mut() {
            sink.render(&state);
        }
    }

    fn request_animation(&mut self, from: RenderState, duration: Duration, curve: AnimationCurve) {
        if self.sink.is_none() {
            return;
        }
        let request = AnimationRequest {
            from,
            to: self.render_state(),
            duration,
            curve,
        };
        if let Some(sink) = self.sink.as_mut() {
            sink.animate(&request);
        }
    }
}

impl Default for ArrangementController {
    fn default() -> Self {
        Self::new()
    }
}
