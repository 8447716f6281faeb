//! Bevy 2D viewer and input mapping
//!
//! Thin collaborator around the physics core: one system steps the world,
//! one decodes keyboard/mouse commands, one paints the render snapshot with
//! gizmos. Simulation coordinates (m) map to screen pixels via a fixed
//! linear scale with the attractor at the window center.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::states::NVec2;
use crate::simulation::world::World as SimWorld;

const SCALE: f64 = 5e-10; // meters -> pixels
const WINDOW_SIZE: (f32, f32) = (1000.0, 800.0);

pub fn run_2d(world: SimWorld) {
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        world.particles.len()
    );

    App::new()
        .insert_resource(world)
        .add_plugins(
            DefaultPlugins
                .build()
                // env_logger already owns the `log` backend
                .disable::<bevy::log::LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Interactive Black Hole Simulation".into(),
                        resolution: WINDOW_SIZE.into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, (input_system, physics_step_system, draw_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    // 2D camera, origin at the window center
    commands.spawn(Camera2dBundle::default());
}

fn physics_step_system(mut world: ResMut<SimWorld>) {
    world.step();
}

/// Keyboard/mouse command mapping:
/// space - pause, `+`/`=` - faster, `-` - slower, `a` or left click - spawn
fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut world: ResMut<SimWorld>,
) {
    if keys.just_pressed(KeyCode::Space) {
        world.toggle_pause();
    }
    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        world.increase_speed();
    }
    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        world.decrease_speed();
    }
    if keys.just_pressed(KeyCode::KeyA) {
        world.spawn_orbiting_particle();
    }
    if buttons.just_pressed(MouseButton::Left) {
        if let Ok(window) = windows.get_single() {
            if let Some(cursor) = window.cursor_position() {
                world.inject_particle_at(cursor_to_sim(cursor, window));
            }
        }
    }
}

/// Window cursor (origin top-left, y down) to simulation coordinates
/// (origin at the attractor, y up, meters).
fn cursor_to_sim(cursor: Vec2, window: &Window) -> NVec2 {
    let x = (cursor.x - window.width() / 2.0) as f64 / SCALE;
    let y = (window.height() / 2.0 - cursor.y) as f64 / SCALE;
    NVec2::new(x, y)
}

fn draw_system(world: Res<SimWorld>, mut gizmos: Gizmos) {
    let view = world.render_view();

    if let Some(center) = to_screen(view.attractor.position) {
        gizmos.circle_2d(center, view.attractor.radius as f32, rgb(view.attractor.color));
    }

    for particle in &view.particles {
        // Non-finite positions are a data condition, not an error: the
        // particle is skipped this frame and may come back once finite.
        let Some(center) = to_screen(particle.position) else {
            continue;
        };
        let color = rgb(particle.color);
        gizmos.circle_2d(center, particle.radius as f32, color);

        for pair in particle.trail.windows(2) {
            if let (Some(a), Some(b)) = (to_screen(pair[0]), to_screen(pair[1])) {
                gizmos.line_2d(a, b, color);
            }
        }
    }
}

fn to_screen(p: NVec2) -> Option<Vec2> {
    let x = p.x * SCALE;
    let y = p.y * SCALE;
    if x.is_finite() && y.is_finite() {
        Some(Vec2::new(x as f32, y as f32))
    } else {
        None
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::rgb_u8(r, g, b)
}
