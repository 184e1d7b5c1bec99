use approx::assert_relative_eq;
use physics_sandbox::{
    CircleDesc, ColorTable, EngineState, Handlers, Rgba, RandomRange, Sandbox, SandboxError,
    Settings, SettingsOverrides, UpdateMode,
};
use rapier2d::prelude::*;

fn sandbox() -> Sandbox {
    Sandbox::with_seed(Settings::default(), 2024)
}

#[test]
fn overrides_win_and_defaults_fill_the_rest() {
    let settings = Settings::resolve(SettingsOverrides::new().friction(0.1).wall_thickness(3.0));
    assert_eq!(settings.friction, 0.1);
    assert_eq!(settings.wall_thickness, 3.0);
    assert_eq!(settings.density, 10.0);
    assert_eq!(settings.elasticity, 0.8);
    assert_eq!(settings.velocity_range, RandomRange::new(-300, 300));
}

#[test]
fn spawn_ranges_derive_from_resolved_window() {
    let settings = Settings::resolve(SettingsOverrides::new().window_size(640, 480));
    assert_eq!(settings.x_range, RandomRange::new(256, 384));
    assert_eq!(settings.y_range, RandomRange::new(192, 288));

    // An explicit spawn range is kept even when the window changes
    let settings =
        Settings::resolve(SettingsOverrides::new().window_size(640, 480).x_range(0, 5));
    assert_eq!(settings.x_range, RandomRange::new(0, 5));
}

#[test]
fn explicit_radius_and_position_are_exact() {
    let mut sandbox = sandbox();
    let handle = sandbox
        .add_circle(CircleDesc::new().position(123.5, 77.25).radius(17.5))
        .unwrap();

    let collider = sandbox.space().collider(handle.shape).unwrap();
    assert_eq!(collider.shape().as_ball().unwrap().radius, 17.5);
    assert_eq!(collider.parent(), Some(handle.body));

    let body = sandbox.space().body(handle.body).unwrap();
    assert_eq!(*body.translation(), vector![123.5, 77.25]);
}

#[test]
fn static_circle_gets_no_random_velocity() {
    let mut sandbox = sandbox();
    for _ in 0..10 {
        let handle = sandbox.add_circle(CircleDesc::new().fixed()).unwrap();
        let body = sandbox.space().body(handle.body).unwrap();
        assert!(body.is_fixed());
        assert_eq!(*body.linvel(), vector![0.0, 0.0]);
    }
}

#[test]
fn static_flag_wins_over_kinematic() {
    let mut sandbox = sandbox();
    let handle = sandbox.add_circle(CircleDesc::new().fixed().kinematic()).unwrap();
    assert!(sandbox.space().body(handle.body).unwrap().is_fixed());
}

#[test]
fn named_color_lookup() {
    let mut sandbox = sandbox();
    let handle = sandbox.add_circle(CircleDesc::new().color("red")).unwrap();
    let data = sandbox.space().collider(handle.shape).unwrap().user_data;
    assert_eq!(Rgba::from_user_data(data), Some(Rgba::new(255, 0, 0, 255)));

    let err = sandbox.add_circle(CircleDesc::new().color("mauve")).unwrap_err();
    assert!(matches!(err, SandboxError::UnknownColor(ref name) if name == "mauve"));
}

#[test]
fn explicit_rgba_color() {
    let mut sandbox = sandbox();
    let handle = sandbox.add_circle(CircleDesc::new().color((10, 20, 30, 40))).unwrap();
    let data = sandbox.space().collider(handle.shape).unwrap().user_data;
    assert_eq!(Rgba::from_user_data(data), Some(Rgba::new(10, 20, 30, 40)));
}

#[test]
fn custom_color_table_is_used_for_random_picks() {
    let only_grey: ColorTable = [("grey", Rgba::opaque(128, 128, 128))].into_iter().collect();
    let settings = Settings::resolve(SettingsOverrides::new().colors(only_grey));
    let mut sandbox = Sandbox::with_seed(settings, 1);
    let handle = sandbox.add_circle(CircleDesc::new()).unwrap();
    let data = sandbox.space().collider(handle.shape).unwrap().user_data;
    assert_eq!(Rgba::from_user_data(data), Some(Rgba::opaque(128, 128, 128)));
}

#[test]
fn four_walls_trace_the_window_rectangle() {
    let settings = Settings::resolve(SettingsOverrides::new().window_size(500, 400));
    let mut sandbox = Sandbox::with_seed(settings, 0);
    let handles = sandbox.make_4_walls();

    assert_eq!(sandbox.space().collider_count(), 4);
    assert_eq!(sandbox.space().body_count(), 0);

    let mut segments: Vec<(Point<Real>, Point<Real>)> = handles
        .iter()
        .map(|&h| {
            let collider = sandbox.space().collider(h).unwrap();
            assert!(collider.parent().is_none());
            assert_eq!(collider.friction(), 0.5);
            assert_eq!(collider.restitution(), 0.8);
            let capsule = collider.shape().as_capsule().unwrap();
            assert_eq!(capsule.radius, 16.0);
            (collider.position() * capsule.segment.a, collider.position() * capsule.segment.b)
        })
        .collect();
    segments.sort_by(|l, r| {
        (l.0.x, l.0.y, l.1.x, l.1.y)
            .partial_cmp(&(r.0.x, r.0.y, r.1.x, r.1.y))
            .unwrap()
    });

    assert_eq!(
        segments,
        vec![
            (point![0.0, 0.0], point![0.0, 400.0]),
            (point![0.0, 0.0], point![500.0, 0.0]),
            (point![0.0, 400.0], point![500.0, 400.0]),
            (point![500.0, 0.0], point![500.0, 400.0]),
        ]
    );
}

#[test]
fn run_state_without_update_uses_default_step() {
    let mut sandbox = sandbox();
    let handle = sandbox
        .add_circle(CircleDesc::new().position(10.0, 10.0).velocity(100.0, 0.0))
        .unwrap();
    let mut state = EngineState::new(sandbox, Handlers::new());
    assert_eq!(state.update_mode(), UpdateMode::Default);

    // Five frames of exactly one configured timestep each
    for _ in 0..5 {
        assert_eq!(state.advance(0.02).unwrap(), 1);
    }
    let x = state.sandbox().space().body(handle.body).unwrap().translation().x;
    assert_relative_eq!(x, 20.0, epsilon = 1e-3);
}

#[test]
fn walls_stop_falling_circles() {
    let settings = Settings::resolve(SettingsOverrides::new().gravity(0.0, -900.0));
    let mut sandbox = Sandbox::with_seed(settings, 3);
    sandbox.make_bottom_wall();
    let handle = sandbox
        .add_circle(CircleDesc::new().position(400.0, 200.0).radius(15.0).velocity(0.0, 0.0))
        .unwrap();

    for _ in 0..300 {
        sandbox.default_update(0.02);
    }
    let y = sandbox.space().body(handle.body).unwrap().translation().y;
    // Resting on the wall: wall radius + ball radius above the bottom edge
    assert!(y > 15.0 && y < 60.0, "ball ended at y = {y}");
}

#[test]
fn demo_config_file_resolves() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("configs")
        .join("big_window.yaml");
    let settings = Settings::resolve(SettingsOverrides::from_yaml_file(path).unwrap());
    assert_eq!((settings.window_width, settings.window_height), (1200, 800));
    assert_eq!(settings.x_range, RandomRange::new(480, 720));
    assert_eq!(settings.y_range, RandomRange::new(320, 480));
    assert_eq!(settings.colors.len(), 3);
    assert_eq!(settings.colors.get("teal").unwrap(), Rgba::opaque(0, 128, 128));
    assert_eq!(settings.density, 10.0);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = SettingsOverrides::from_yaml_file("does/not/exist.yaml").unwrap_err();
    assert!(matches!(err, SandboxError::Io(_)));
}
