#[cfg(test)]
mod tests {
    use crate::Router;
    use duopane_core::{
        Arrangement, AxisRender, Color, ContainerGeometry, DividerVisual, GesturePhase, Insets,
        LayoutIntent, PointerEvent, RenderState, Size, SnapEdge, Vec2,
    };

    fn axis(extent: f64, usable: f64, hidden: bool) -> AxisRender {
        AxisRender {
            extent: Some(extent),
            usable_extent: Some(usable),
            ratio: extent / usable,
            intent: LayoutIntent::Ratio(extent / usable),
            snap_edge: SnapEdge::None,
            divider: DividerVisual {
                hidden,
                ..DividerVisual::resting(0.5, Color::SEPARATOR)
            },
        }
    }

    /// 800x600 container, divider at x=400 (horizontal) or y=300 (vertical).
    fn state(arrangement: Arrangement) -> RenderState {
        let horizontal = arrangement == Arrangement::Horizontal;
        RenderState {
            arrangement,
            container: Some(ContainerGeometry::new(
                Size::new(800.0, 600.0),
                Insets::default(),
            )),
            width: axis(400.0, 800.0, !horizontal),
            height: axis(300.0, 600.0, horizontal),
            first_child: None,
            second_child: None,
        }
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Vec2::new(x, y),
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Vec2::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Vec2::new(x, y),
        }
    }

    // ── Hit testing ─────────────────────────────

    #[test]
    fn press_on_divider_begins_immediately() {
        let mut router = Router::new();
        let state = state(Arrangement::Horizontal);

        let event = router.process(down(410.0, 50.0), &state).unwrap();
        assert_eq!(event.phase, GesturePhase::Began);
        assert_eq!(event.position, Vec2::new(410.0, 50.0));
        assert!(router.is_capturing());
    }

    #[test]
    fn press_away_from_divider_is_ignored() {
        let mut router = Router::new();
        let state = state(Arrangement::Horizontal);

        assert!(router.process(down(100.0, 50.0), &state).is_none());
        assert!(!router.is_capturing());
        assert!(router.process(moved(400.0, 50.0), &state).is_none());
        assert!(router.process(up(400.0, 50.0), &state).is_none());
    }

    #[test]
    fn hit_region_is_centered_on_divider() {
        let router = Router::new();
        let state = state(Arrangement::Horizontal);
        assert!(router.hits_divider(Vec2::new(378.0, 300.0), &state));
        assert!(router.hits_divider(Vec2::new(422.0, 300.0), &state));
        assert!(!router.hits_divider(Vec2::new(377.0, 300.0), &state));
        assert!(!router.hits_divider(Vec2::new(423.0, 300.0), &state));
    }

    #[test]
    fn vertical_divider_spans_width() {
        let router = Router::new();
        let state = state(Arrangement::Vertical);
        assert!(router.hits_divider(Vec2::new(5.0, 310.0), &state));
        assert!(router.hits_divider(Vec2::new(795.0, 290.0), &state));
        assert!(!router.hits_divider(Vec2::new(400.0, 100.0), &state));
    }

    #[test]
    fn hidden_divider_is_not_hit() {
        let router = Router::new();
        let mut state = state(Arrangement::Horizontal);
        state.width.divider.hidden = true;
        assert!(!router.hits_divider(Vec2::new(400.0, 300.0), &state));
    }

    #[test]
    fn custom_hit_thickness() {
        let router = Router::with_hit_thickness(10.0);
        let state = state(Arrangement::Horizontal);
        assert!(router.hits_divider(Vec2::new(404.0, 300.0), &state));
        assert!(!router.hits_divider(Vec2::new(410.0, 300.0), &state));
    }

    #[test]
    fn unlaid_out_state_is_never_hit() {
        let router = Router::new();
        let mut state = state(Arrangement::Horizontal);
        state.container = None;
        assert!(!router.hits_divider(Vec2::new(400.0, 300.0), &state));
    }

    // ── Gesture sequence ────────────────────────

    #[test]
    fn full_drag_sequence() {
        let mut router = Router::new();
        let state = state(Arrangement::Horizontal);

        router.process(down(400.0, 100.0), &state);
        let changed = router.process(moved(250.0, 120.0), &state).unwrap();
        assert_eq!(changed.phase, GesturePhase::Changed);
        assert_eq!(changed.position, Vec2::new(250.0, 120.0));

        // Moves outside the hit region still belong to the captured drag.
        let far = router.process(moved(10.0, 590.0), &state).unwrap();
        assert_eq!(far.phase, GesturePhase::Changed);

        let ended = router.process(up(10.0, 590.0), &state).unwrap();
        assert_eq!(ended.phase, GesturePhase::Ended);
        assert!(!router.is_capturing());
    }

    #[test]
    fn cancel_reports_last_position() {
        let mut router = Router::new();
        let state = state(Arrangement::Horizontal);

        router.process(down(400.0, 100.0), &state);
        router.process(moved(300.0, 100.0), &state);
        let cancelled = router.process(PointerEvent::Cancel, &state).unwrap();
        assert_eq!(cancelled.phase, GesturePhase::Cancelled);
        assert_eq!(cancelled.position, Vec2::new(300.0, 100.0));
        assert!(!router.is_capturing());
    }

    #[test]
    fn cancel_without_capture_is_ignored() {
        let mut router = Router::new();
        let state = state(Arrangement::Horizontal);
        assert!(router.process(PointerEvent::Cancel, &state).is_none());
    }

    #[test]
    fn second_press_while_captured_restarts() {
        let mut router = Router::new();
        let state = state(Arrangement::Horizontal);

        router.process(down(400.0, 100.0), &state);
        router.process(moved(300.0, 100.0), &state);
        let restart = router.process(down(50.0, 50.0), &state).unwrap();
        assert_eq!(restart.phase, GesturePhase::Began);
        assert!(router.is_capturing());
    }
}
