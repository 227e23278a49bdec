// Interaction scripts: a JSON list of container, keyboard, pointer and
// arrangement events replayed through the router and the controller.

use std::error::Error;
use std::path::Path;

use duopane_core::{
    Arrangement, Axis, ContainerGeometry, Insets, PointerEvent, Size, SizeClass, Vec2,
};
use duopane_input::Router;
use duopane_layout::ArrangementController;
use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Serializable script types
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    Geometry {
        width: f64,
        height: f64,
        #[serde(default)]
        safe_area: SafeArea,
    },
    Keyboard {
        bottom: f64,
    },
    Pointer {
        action: PointerAction,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Arrangement {
        arrangement: ArrangementName,
        #[serde(default)]
        animated: bool,
    },
    Toggle {
        #[serde(default)]
        animated: bool,
    },
    SizeClass {
        class: SizeClassName,
    },
    Ratio {
        axis: AxisName,
        value: f64,
    },
    Activate,
    Deactivate,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeArea {
    pub top: f64,
    pub lead: f64,
    pub bottom: f64,
    pub trail: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangementName {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClassName {
    Compact,
    Regular,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisName {
    Width,
    Height,
}

impl From<SafeArea> for Insets {
    fn from(area: SafeArea) -> Self {
        Insets::new(area.top, area.lead, area.bottom, area.trail)
    }
}

impl From<ArrangementName> for Arrangement {
    fn from(name: ArrangementName) -> Self {
        match name {
            ArrangementName::Horizontal => Arrangement::Horizontal,
            ArrangementName::Vertical => Arrangement::Vertical,
        }
    }
}

impl From<SizeClassName> for SizeClass {
    fn from(name: SizeClassName) -> Self {
        match name {
            SizeClassName::Compact => SizeClass::Compact,
            SizeClassName::Regular => SizeClass::Regular,
            SizeClassName::Unspecified => SizeClass::Unspecified,
        }
    }
}

impl From<AxisName> for Axis {
    fn from(name: AxisName) -> Self {
        match name {
            AxisName::Width => Axis::Width,
            AxisName::Height => Axis::Height,
        }
    }
}

fn pointer_event(action: PointerAction, x: f64, y: f64) -> PointerEvent {
    let position = Vec2::new(x, y);
    match action {
        PointerAction::Down => PointerEvent::Down { position },
        PointerAction::Move => PointerEvent::Move { position },
        PointerAction::Up => PointerEvent::Up { position },
        PointerAction::Cancel => PointerEvent::Cancel,
    }
}

// ──────────────────────────────────────────────
// Loading
// ──────────────────────────────────────────────

pub fn parse_script(data: &str) -> Result<Script, serde_json::Error> {
    serde_json::from_str(data)
}

pub fn load_script(path: &Path) -> Result<Script, Box<dyn Error>> {
    let data = std::fs::read_to_string(path)?;
    Ok(parse_script(&data)?)
}

/// Built-in walkthrough used when no script is given: lay out a tablet in
/// landscape, drag and snap the divider, rotate, then flip to stacked with a
/// keyboard up.
pub fn demo_script() -> Script {
    let pointer = |action, x, y| Step::Pointer { action, x, y };
    Script {
        steps: vec![
            Step::Geometry {
                width: 1024.0,
                height: 768.0,
                safe_area: SafeArea::default(),
            },
            Step::Activate,
            pointer(PointerAction::Down, 512.0, 384.0),
            pointer(PointerAction::Move, 600.0, 390.0),
            pointer(PointerAction::Move, 700.0, 395.0),
            pointer(PointerAction::Up, 700.0, 395.0),
            Step::Geometry {
                width: 768.0,
                height: 1024.0,
                safe_area: SafeArea::default(),
            },
            pointer(PointerAction::Down, 525.0, 500.0),
            pointer(PointerAction::Move, 760.0, 500.0),
            pointer(PointerAction::Up, 760.0, 500.0),
            Step::SizeClass {
                class: SizeClassName::Compact,
            },
            Step::Keyboard { bottom: 320.0 },
            pointer(PointerAction::Down, 20.0, 512.0),
            pointer(PointerAction::Move, 20.0, 900.0),
            pointer(PointerAction::Up, 20.0, 900.0),
        ],
    }
}

// ──────────────────────────────────────────────
// Replay
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub steps: usize,
    /// Pointer events that turned into divider gestures.
    pub gestures: usize,
    /// Pointer events the router or the controller had no use for.
    pub ignored_pointer: usize,
}

pub fn replay(
    script: &Script,
    controller: &mut ArrangementController,
    router: &mut Router,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for step in &script.steps {
        summary.steps += 1;
        log::trace!("step {}: {:?}", summary.steps, step);
        match *step {
            Step::Geometry {
                width,
                height,
                safe_area,
            } => controller.on_container_geometry(ContainerGeometry::new(
                Size::new(width, height),
                safe_area.into(),
            )),
            Step::Keyboard { bottom } => controller.on_keyboard_frame_change(bottom),
            Step::Pointer { action, x, y } => {
                let state = controller.render_state();
                let applied = router
                    .process(pointer_event(action, x, y), &state)
                    .is_some_and(|gesture| controller.handle_gesture(gesture));
                if applied {
                    summary.gestures += 1;
                } else {
                    summary.ignored_pointer += 1;
                }
            }
            Step::Arrangement {
                arrangement,
                animated,
            } => controller.set_arrangement(arrangement.into(), animated),
            Step::Toggle { animated } => controller.toggle_arrangement(animated),
            Step::SizeClass { class } => controller.on_size_class_change(class.into()),
            Step::Ratio { axis, value } => controller.set_ratio(axis.into(), value),
            Step::Activate => controller.activate(),
            Step::Deactivate => controller.deactivate(),
        }
    }

    summary
}
