// File: crates/scatter-core/tests/interaction.rs
// Purpose: Pointer/command state machine driven against a recording surface.

use scatter_core::{
    Controls, DataPoint, DrawCommand, InteractionController, InteractionState, Mode, PixelPoint, PointerButton,
    RecordingSurface, ReferenceLine, Scene, Viewport,
};

fn setup(points: &[(f64, f64)]) -> (InteractionController, RecordingSurface) {
    let scene = Scene::with_points(points.iter().copied().map(DataPoint::from));
    let ctl = InteractionController::default().with_scene(scene);
    let surface = RecordingSurface::new(Viewport::new(1000.0, 500.0));
    (ctl, surface)
}

fn add_mode() -> Controls {
    Controls { mode: Mode::AddPoint, ..Controls::default() }
}

fn line_mode() -> Controls {
    Controls { mode: Mode::DrawLine, ..Controls::default() }
}

#[test]
fn click_in_add_mode_appends_converted_point() {
    let (mut ctl, mut surface) = setup(&[(0.9, 0.9)]);
    let summary = ctl.click(&mut surface, &add_mode(), PixelPoint::new(250.0, 125.0)).expect("repaint");

    assert_eq!(summary.point_count, 2);
    let pts = ctl.scene().points();
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[0], DataPoint::new(0.9, 0.9));
    assert!((pts[1].x - 0.25).abs() < 1e-9);
    assert!((pts[1].y - 0.75).abs() < 1e-9);
    assert!(matches!(surface.commands().first(), Some(DrawCommand::Clear(_))));
}

#[test]
fn two_clicks_in_line_mode_build_reference_line() {
    let (mut ctl, mut surface) = setup(&[]);
    let a = PixelPoint::new(10.0, 20.0);
    let b = PixelPoint::new(600.0, 300.0);

    ctl.click(&mut surface, &line_mode(), a).expect("repaint");
    assert_eq!(ctl.state(), InteractionState::ComposingLine { pending: 1 });
    assert_eq!(ctl.scene().reference_line(), None);

    ctl.click(&mut surface, &line_mode(), b).expect("repaint");
    assert_eq!(ctl.scene().reference_line(), Some(ReferenceLine { from: a, to: b }));
    assert!(ctl.scene().clicks().is_empty());
    assert_eq!(ctl.state(), InteractionState::Idle);
    assert!(ctl.scene().points().is_empty(), "line clicks never add points");
}

#[test]
fn first_line_click_leaves_preview_marker_on_top() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    let at = PixelPoint::new(42.0, 84.0);
    ctl.click(&mut surface, &line_mode(), at).expect("repaint");

    let opts = ctl.pipeline().opts;
    assert_eq!(
        surface.commands().last(),
        Some(&DrawCommand::FillCircle { center: at, radius: opts.preview_radius, color: opts.theme.preview })
    );
}

#[test]
fn third_click_starts_a_new_line_and_keeps_the_old_one() {
    let (mut ctl, mut surface) = setup(&[]);
    let first = [PixelPoint::new(1.0, 1.0), PixelPoint::new(2.0, 2.0)];
    for p in first {
        ctl.click(&mut surface, &line_mode(), p);
    }
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(3.0, 3.0));

    assert_eq!(ctl.scene().reference_line(), Some(ReferenceLine { from: first[0], to: first[1] }));
    assert_eq!(ctl.scene().clicks().pending(), Some(PixelPoint::new(3.0, 3.0)));
}

#[test]
fn secondary_press_removes_first_hit_only() {
    // Both points are within the pick radius of the cursor; insertion order decides.
    let (mut ctl, mut surface) = setup(&[(0.2, 0.2), (0.5, 0.5), (0.51, 0.5), (0.8, 0.8)]);
    let summary = ctl
        .pointer_down(&mut surface, &add_mode(), PixelPoint::new(505.0, 250.0), PointerButton::Secondary)
        .expect("repaint");

    assert_eq!(summary.point_count, 3);
    assert_eq!(
        ctl.scene().points(),
        &[DataPoint::new(0.2, 0.2), DataPoint::new(0.51, 0.5), DataPoint::new(0.8, 0.8)]
    );
    assert_eq!(ctl.state(), InteractionState::Idle);
}

#[test]
fn secondary_press_on_empty_space_does_nothing() {
    let (mut ctl, mut surface) = setup(&[(0.2, 0.2)]);
    let out = ctl.pointer_down(&mut surface, &add_mode(), PixelPoint::new(900.0, 10.0), PointerButton::Secondary);
    assert!(out.is_none());
    assert_eq!(ctl.scene().points().len(), 1);
    assert!(surface.commands().is_empty(), "no repaint without a mutation");
}

#[test]
fn mode_change_clears_line_and_pending_click() {
    let (mut ctl, mut surface) = setup(&[(0.3, 0.3)]);
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(0.0, 0.0));
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(100.0, 100.0));
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(50.0, 50.0));
    assert!(ctl.scene().reference_line().is_some());
    assert_eq!(ctl.scene().clicks().len(), 1);

    let summary = ctl.mode_changed(&mut surface, &add_mode());
    assert_eq!(ctl.scene().reference_line(), None);
    assert!(ctl.scene().clicks().is_empty());
    assert_eq!(summary.point_count, 1, "points survive a mode change");
}

#[test]
fn dragging_moves_only_the_grabbed_point() {
    let (mut ctl, mut surface) = setup(&[(0.2, 0.2), (0.6, 0.4)]);
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(5.0, 5.0));
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(995.0, 495.0));
    let line = ctl.scene().reference_line();

    // (0.6, 0.4) sits at (600, 300)
    assert!(ctl.pointer_down(&mut surface, &add_mode(), PixelPoint::new(605.0, 295.0), PointerButton::Primary).is_none());
    assert_eq!(ctl.state(), InteractionState::Dragging { index: 1 });

    ctl.pointer_move(&mut surface, &add_mode(), PixelPoint::new(100.0, 100.0)).expect("repaint");
    ctl.pointer_up();
    assert_eq!(ctl.state(), InteractionState::Idle);

    let pts = ctl.scene().points();
    assert_eq!(pts[0], DataPoint::new(0.2, 0.2));
    assert!((pts[1].x - 0.1).abs() < 1e-9);
    assert!((pts[1].y - 0.8).abs() < 1e-9);
    assert_eq!(ctl.scene().reference_line(), line);
}

#[test]
fn click_closing_a_drag_is_suppressed() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    let grab = PixelPoint::new(500.0, 250.0);
    ctl.pointer_down(&mut surface, &add_mode(), grab, PointerButton::Primary);
    ctl.pointer_move(&mut surface, &add_mode(), PixelPoint::new(700.0, 100.0));
    ctl.pointer_up();

    assert!(ctl.click(&mut surface, &add_mode(), PixelPoint::new(700.0, 100.0)).is_none());
    assert_eq!(ctl.scene().points().len(), 1);

    // The next ordinary press/release is a real click again.
    ctl.pointer_down(&mut surface, &add_mode(), PixelPoint::new(50.0, 50.0), PointerButton::Primary);
    ctl.pointer_up();
    assert!(ctl.click(&mut surface, &add_mode(), PixelPoint::new(50.0, 50.0)).is_some());
    assert_eq!(ctl.scene().points().len(), 2);
}

#[test]
fn move_without_drag_is_a_no_op() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    assert!(ctl.pointer_move(&mut surface, &add_mode(), PixelPoint::new(10.0, 10.0)).is_none());
    assert_eq!(ctl.scene().points(), &[DataPoint::new(0.5, 0.5)]);
}

#[test]
fn leaving_the_surface_ends_the_drag() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    ctl.pointer_down(&mut surface, &add_mode(), PixelPoint::new(500.0, 250.0), PointerButton::Primary);
    ctl.pointer_leave();
    assert_eq!(ctl.state(), InteractionState::Idle);
    assert!(ctl.pointer_move(&mut surface, &add_mode(), PixelPoint::new(10.0, 10.0)).is_none());
}

#[test]
fn dragged_points_stay_inside_the_unit_square() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    ctl.pointer_down(&mut surface, &add_mode(), PixelPoint::new(500.0, 250.0), PointerButton::Primary);
    ctl.pointer_move(&mut surface, &add_mode(), PixelPoint::new(-40.0, 800.0));
    assert_eq!(ctl.scene().points(), &[DataPoint::new(0.0, 0.0)]);
}

#[test]
fn deleting_below_the_dragged_point_keeps_the_drag_on_it() {
    let (mut ctl, mut surface) = setup(&[(0.1, 0.1), (0.9, 0.9)]);
    ctl.pointer_down(&mut surface, &add_mode(), PixelPoint::new(900.0, 50.0), PointerButton::Primary);
    assert_eq!(ctl.state(), InteractionState::Dragging { index: 1 });

    ctl.pointer_down(&mut surface, &add_mode(), PixelPoint::new(100.0, 450.0), PointerButton::Secondary);
    assert_eq!(ctl.state(), InteractionState::Dragging { index: 0 });

    ctl.pointer_move(&mut surface, &add_mode(), PixelPoint::new(500.0, 250.0));
    assert_eq!(ctl.scene().points(), &[DataPoint::new(0.5, 0.5)]);
}

#[test]
fn clear_empties_everything() {
    let (mut ctl, mut surface) = setup(&[(0.1, 0.1), (0.9, 0.9)]);
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(1.0, 1.0));
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(9.0, 9.0));
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(4.0, 4.0));

    let summary = ctl.clear(&mut surface, &add_mode());
    assert_eq!(summary.point_count, 0);
    assert!(ctl.scene().points().is_empty());
    assert_eq!(ctl.scene().reference_line(), None);
    assert!(ctl.scene().clicks().is_empty());
    assert_eq!(ctl.state(), InteractionState::Idle);
}

#[test]
fn resize_moves_points_but_not_the_reference_line() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    let a = PixelPoint::new(100.0, 100.0);
    let b = PixelPoint::new(200.0, 200.0);
    ctl.click(&mut surface, &line_mode(), a);
    ctl.click(&mut surface, &line_mode(), b);

    ctl.resize(&mut surface, &add_mode(), Viewport::new(500.0, 250.0)).expect("resize");

    let cmds = surface.commands();
    assert!(cmds.iter().any(|c| matches!(c, DrawCommand::Line { from, to, .. } if *from == a && *to == b)));
    assert!(cmds
        .iter()
        .any(|c| matches!(c, DrawCommand::FillCircle { center, .. } if *center == PixelPoint::new(250.0, 125.0))));
}

#[test]
fn press_and_release_on_a_point_is_not_a_click() {
    for controls in [add_mode(), line_mode()] {
        let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
        let on_point = PixelPoint::new(503.0, 248.0);
        ctl.pointer_down(&mut surface, &controls, on_point, PointerButton::Primary);
        ctl.pointer_up();

        assert!(ctl.click(&mut surface, &controls, on_point).is_none(), "{:?}", controls.mode);
        assert_eq!(ctl.scene().points(), &[DataPoint::new(0.5, 0.5)]);
        assert!(ctl.scene().clicks().is_empty());
        assert_eq!(ctl.state(), InteractionState::Idle);
    }
}

#[test]
fn click_outside_the_surface_is_clamped_into_the_unit_square() {
    let (mut ctl, mut surface) = setup(&[]);
    ctl.click(&mut surface, &add_mode(), PixelPoint::new(-50.0, 600.0)).expect("repaint");
    ctl.click(&mut surface, &add_mode(), PixelPoint::new(1200.0, -30.0)).expect("repaint");
    assert_eq!(ctl.scene().points(), &[DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)]);
}

#[test]
fn refresh_keeps_the_pending_line_marker() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    let at = PixelPoint::new(42.0, 84.0);
    ctl.click(&mut surface, &line_mode(), at).expect("repaint");
    let first = surface.take_commands();
    assert!(surface.commands().is_empty());

    ctl.toggles_changed(&mut surface, &line_mode());
    assert_eq!(surface.commands(), first.as_slice(), "toggle repaint restores the marker");

    // A plain redraw has no marker, and completing the line drops it for good.
    ctl.redraw(&mut surface, &line_mode());
    assert_eq!(surface.commands().len(), first.len() - 1);
    ctl.click(&mut surface, &line_mode(), PixelPoint::new(300.0, 300.0)).expect("repaint");
    let summary = ctl.refresh(&mut surface, &line_mode());
    assert_eq!(summary.point_count, 1);
    assert!(!surface.commands().iter().any(|c| matches!(c, DrawCommand::FillCircle { center, .. } if *center == at)));
}

#[test]
fn pick_radius_bounds_the_hit_test() {
    let (mut ctl, mut surface) = setup(&[(0.5, 0.5)]);
    let radius = ctl.options().pick_radius;
    assert_eq!(radius, 20.0);

    // (0.5, 0.5) sits at (500, 250)
    let outside = PixelPoint::new(500.0 + radius + 1.0, 250.0);
    ctl.pointer_down(&mut surface, &add_mode(), outside, PointerButton::Primary);
    assert_eq!(ctl.state(), InteractionState::Idle);

    let edge = PixelPoint::new(500.0, 250.0 + radius - 0.5);
    ctl.pointer_down(&mut surface, &add_mode(), edge, PointerButton::Primary);
    assert_eq!(ctl.state(), InteractionState::Dragging { index: 0 });
}

#[test]
fn pick_cursor_overlays_the_current_picture() {
    let (ctl, mut surface) = setup(&[(0.5, 0.5)]);
    ctl.redraw(&mut surface, &add_mode());
    let at = PixelPoint::new(10.0, 10.0);
    ctl.pipeline().render_pick_cursor(&mut surface, at, ctl.options().pick_radius);

    let theme = ctl.pipeline().opts.theme;
    assert_eq!(
        surface.commands().last(),
        Some(&DrawCommand::FillCircle { center: at, radius: 20.0, color: theme.cursor })
    );
    assert!(theme.cursor.a() < 255, "cursor disc is translucent");
}
