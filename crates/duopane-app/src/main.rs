mod script;
mod settings;
mod sink;

use std::path::Path;

use duopane_core::Axis;
use duopane_input::Router;
use duopane_layout::ArrangementController;

use crate::sink::LogSink;

// ──────────────────────────────────────────────
// Entry point
// ──────────────────────────────────────────────

fn main() {
    env_logger::init();

    let settings = settings::load_settings();

    let script = match std::env::args().nth(1) {
        Some(arg) if arg == "--write-settings" => {
            settings::save_settings(&settings);
            return;
        }
        Some(path) => match script::load_script(Path::new(&path)) {
            Ok(script) => script,
            Err(e) => {
                log::error!("Failed to load script {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => script::demo_script(),
    };

    let mut controller = ArrangementController::with_config(settings.controller_config());
    let (sink, stats) = LogSink::new();
    controller.attach_sink(Box::new(sink));
    let mut router = Router::new();

    let summary = script::replay(&script, &mut controller, &mut router);
    let stats = *stats.borrow();

    println!("{}", sink::describe(&controller.render_state()));
    for axis in Axis::ALL {
        println!(
            "{:?}: ratio {:.3}, snap {:?}",
            axis,
            controller.ratio(axis),
            controller.snap_edge(axis)
        );
    }
    println!(
        "{} steps, {} gestures ({} ignored), {} frames, {} animations, {} focus releases",
        summary.steps,
        summary.gestures,
        summary.ignored_pointer,
        stats.frames,
        stats.animations,
        stats.focus_releases
    );
}
