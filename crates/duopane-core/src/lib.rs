use std::time::Duration;

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Split into a primary and a secondary rect along `axis`, giving the
    /// primary exactly `extent` (clamped to the rect).
    pub fn split_at(&self, axis: Axis, extent: f64) -> (Rect, Rect) {
        match axis {
            Axis::Width => {
                let first = extent.clamp(0.0, self.width.max(0.0));
                (
                    Rect::new(self.x, self.y, first, self.height),
                    Rect::new(self.x + first, self.y, self.width - first, self.height),
                )
            }
            Axis::Height => {
                let first = extent.clamp(0.0, self.height.max(0.0));
                (
                    Rect::new(self.x, self.y, self.width, first),
                    Rect::new(self.x, self.y + first, self.width, self.height - first),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Copy with the extent on `axis` replaced.
    pub fn with_extent(self, axis: Axis, extent: f64) -> Self {
        match axis {
            Axis::Width => Self { width: extent, ..self },
            Axis::Height => Self { height: extent, ..self },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Safe-area insets of the container. `lead`/`trail` are the horizontal
/// edges, `top`/`bottom` the vertical ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub lead: f64,
    pub bottom: f64,
    pub trail: f64,
}

impl Insets {
    pub fn new(top: f64, lead: f64, bottom: f64, trail: f64) -> Self {
        Self { top, lead, bottom, trail }
    }

    /// Inset at the start of `axis` (lead for width, top for height).
    pub fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.lead,
            Axis::Height => self.top,
        }
    }

    /// Inset at the end of `axis` (trail for width, bottom for height).
    pub fn trailing(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.trail,
            Axis::Height => self.bottom,
        }
    }
}

/// Everything the collaborator knows about the container's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub size: Size,
    pub safe_area: Insets,
}

impl ContainerGeometry {
    pub fn new(size: Size, safe_area: Insets) -> Self {
        Self { size, safe_area }
    }

    /// Container extent minus both insets on `axis`, never negative.
    pub fn usable_extent(&self, axis: Axis) -> f64 {
        (self.size.extent(axis) - self.safe_area.leading(axis) - self.safe_area.trailing(axis))
            .max(0.0)
    }

    /// The area the two panes share.
    pub fn usable_rect(&self) -> Rect {
        Rect::new(
            self.safe_area.lead,
            self.safe_area.top,
            self.usable_extent(Axis::Width),
            self.usable_extent(Axis::Height),
        )
    }
}

// ──────────────────────────────────────────────
// Arrangement
// ──────────────────────────────────────────────

/// The dimension a divider moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Width, Axis::Height];

    /// The component of a pointer position that moves the divider.
    pub fn component(self, position: Vec2) -> f64 {
        match self {
            Axis::Width => position.x,
            Axis::Height => position.y,
        }
    }
}

/// Side-by-side (`Horizontal`) or stacked (`Vertical`) disposition of the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arrangement {
    #[default]
    Horizontal,
    Vertical,
}

impl Arrangement {
    pub fn axis(self) -> Axis {
        match self {
            Arrangement::Horizontal => Axis::Width,
            Arrangement::Vertical => Axis::Height,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Arrangement::Horizontal => Arrangement::Vertical,
            Arrangement::Vertical => Arrangement::Horizontal,
        }
    }
}

/// Horizontal size class reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Compact,
    Regular,
    Unspecified,
}

impl SizeClass {
    pub fn arrangement(self) -> Arrangement {
        match self {
            SizeClass::Regular => Arrangement::Horizontal,
            SizeClass::Compact | SizeClass::Unspecified => Arrangement::Vertical,
        }
    }
}

/// Where the primary pane boundary has snapped, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnapEdge {
    #[default]
    None,
    Lead,
    Trail,
    Top,
    Bottom,
}

impl SnapEdge {
    pub fn is_snapped(self) -> bool {
        self != SnapEdge::None
    }
}

/// How the collaborator should size the primary pane.
///
/// At rest the pane follows its ratio so container resizes stay
/// proportional; during a drag it is pinned to an absolute extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutIntent {
    Ratio(f64),
    PixelPinned(f64),
}

pub type ChildId = u64;

// ──────────────────────────────────────────────
// Colors
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Hairline colour at rest, close to a navigation bar shadow.
    pub const SEPARATOR: Self = Self::new(0.0, 0.0, 0.0, 0.3);
    /// Hairline and handle bar colour while dragging.
    pub const SEPARATOR_SELECTED: Self = Self::rgb(233.0 / 255.0, 90.0 / 255.0, 57.0 / 255.0);
}

// ──────────────────────────────────────────────
// Divider visuals
// ──────────────────────────────────────────────

/// Size of the grab handle drawn on the divider.
pub const HANDLE_SIZE: Size = Size {
    width: 32.0,
    height: 32.0,
};

/// Thickness of the invisible region around the divider that accepts drags.
pub const DIVIDER_HIT_THICKNESS: f64 = 44.0;

/// Hairline thickness while a drag is in progress.
pub const DRAGGING_HAIR_THICKNESS: f64 = 2.0;

/// How far the handle bars shift toward the edge the divider snapped to.
pub const HANDLE_SNAP_OFFSET: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerVisual {
    pub hidden: bool,
    pub hair_thickness: f64,
    pub hair_alpha: f32,
    pub hair_color: Color,
    pub handle_alpha: f32,
    /// Offset of the handle bars from the handle centre.
    pub handle_offset: Vec2,
}

impl DividerVisual {
    pub fn resting(hair_thickness: f64, hair_color: Color) -> Self {
        Self {
            hidden: false,
            hair_thickness,
            hair_alpha: 1.0,
            hair_color,
            handle_alpha: 0.0,
            handle_offset: Vec2::default(),
        }
    }
}

/// Offset of the handle bars for a given snap edge.
pub fn handle_offset_for(edge: SnapEdge) -> Vec2 {
    match edge {
        SnapEdge::None => Vec2::default(),
        SnapEdge::Lead => Vec2::new(HANDLE_SNAP_OFFSET, 0.0),
        SnapEdge::Trail => Vec2::new(-HANDLE_SNAP_OFFSET, 0.0),
        SnapEdge::Top => Vec2::new(0.0, HANDLE_SNAP_OFFSET),
        SnapEdge::Bottom => Vec2::new(0.0, -HANDLE_SNAP_OFFSET),
    }
}

// ──────────────────────────────────────────────
// Render state
// ──────────────────────────────────────────────

/// Per-axis slice of the render state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRender {
    /// Primary pane extent; `None` until the axis has been laid out.
    pub extent: Option<f64>,
    pub usable_extent: Option<f64>,
    pub ratio: f64,
    pub intent: LayoutIntent,
    pub snap_edge: SnapEdge,
    pub divider: DividerVisual,
}

/// Immutable snapshot handed to the rendering collaborator after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub arrangement: Arrangement,
    pub container: Option<ContainerGeometry>,
    pub width: AxisRender,
    pub height: AxisRender,
    pub first_child: Option<ChildId>,
    pub second_child: Option<ChildId>,
}

impl RenderState {
    pub fn axis(&self, axis: Axis) -> &AxisRender {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }

    /// The axis of the current arrangement.
    pub fn active(&self) -> &AxisRender {
        self.axis(self.arrangement.axis())
    }

    /// Frames of the primary and secondary pane.
    pub fn pane_rects(&self) -> Option<(Rect, Rect)> {
        let container = self.container?;
        let axis = self.arrangement.axis();
        let extent = self.axis(axis).extent?;
        Some(container.usable_rect().split_at(axis, extent))
    }

    /// Region around the active divider that accepts drags, centred on the
    /// boundary between the panes and spanning the cross axis.
    pub fn divider_rect(&self, thickness: f64) -> Option<Rect> {
        let container = self.container?;
        let usable = container.usable_rect();
        let extent = self.active().extent?;
        let half = thickness / 2.0;
        Some(match self.arrangement.axis() {
            Axis::Width => Rect::new(usable.x + extent - half, usable.y, thickness, usable.height),
            Axis::Height => Rect::new(usable.x, usable.y + extent - half, usable.width, thickness),
        })
    }

    /// Frame of the grab handle, centred on the active divider.
    pub fn handle_rect(&self) -> Option<Rect> {
        let divider = self.divider_rect(DIVIDER_HIT_THICKNESS)?;
        let cx = divider.x + divider.width / 2.0;
        let cy = divider.y + divider.height / 2.0;
        Some(Rect::new(
            cx - HANDLE_SIZE.width / 2.0,
            cy - HANDLE_SIZE.height / 2.0,
            HANDLE_SIZE.width,
            HANDLE_SIZE.height,
        ))
    }
}

// ──────────────────────────────────────────────
// Animation
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCurve {
    EaseInOut,
    EaseOut,
}

/// A visual transition the collaborator should play. The core's state is
/// already at `to` when this is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    pub from: RenderState,
    pub to: RenderState,
    pub duration: Duration,
    pub curve: AnimationCurve,
}

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One step of a divider pan gesture, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub position: Vec2,
}

impl GestureEvent {
    pub fn new(phase: GesturePhase, position: Vec2) -> Self {
        Self { phase, position }
    }
}

/// Raw pointer input before divider hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Vec2 },
    Move { position: Vec2 },
    Up { position: Vec2 },
    Cancel,
}

// ──────────────────────────────────────────────
// Trait: RenderSink
// ──────────────────────────────────────────────

/// The rendering collaborator. The core pushes a fresh snapshot after
/// every observable change and never reads anything back.
pub trait RenderSink {
    fn render(&mut self, state: &RenderState);

    fn animate(&mut self, _request: &AnimationRequest) {}

    /// A drag pushed into the keyboard; the focused text input should resign.
    fn release_focus(&mut self) {}
}
