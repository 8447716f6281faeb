use bhtoy::{euler_step, Attractor, Body, NVec2, Outcome, Parameters, World, TRAIL_LEN};

use std::collections::VecDeque;

/// Default physics parameters for tests (solar-mass attractor scale)
pub fn test_params() -> Parameters {
    Parameters {
        g: 6.67430e-11,
        timestep: 3600.0 * 12.0,
        damping: 0.999,
        absorption_radius: 1.0e10,
        max_fragment_depth: 2,
        max_particles: 1000,
        seed: 42,
    }
}

/// One solar mass at the origin
pub fn test_attractor() -> Attractor {
    Attractor {
        x: NVec2::zeros(),
        m: 1.989e30,
        radius: 21.0,
        color: [0, 0, 0],
    }
}

/// Particle with explicit position/velocity/depth and default looks
pub fn particle(x: f64, y: f64, vx: f64, vy: f64, depth: u32) -> Body {
    Body {
        x: NVec2::new(x, y),
        v: NVec2::new(vx, vy),
        m: 1.0e20,
        radius: 3.0,
        color: [200, 200, 200],
        trail: VecDeque::new(),
        depth,
    }
}

/// Particle on an exact counter-clockwise circular orbit at distance `r`
pub fn circular_particle(r: f64, p: &Parameters, attractor: &Attractor) -> Body {
    let speed = (p.g * attractor.m / r).sqrt();
    particle(r, 0.0, 0.0, speed, 0)
}

pub fn test_world() -> World {
    World::new(test_attractor(), test_params())
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn absorbed_inside_absorption_radius_regardless_of_velocity() {
    let p = test_params();
    let attractor = test_attractor();
    let dt = p.timestep;

    // fast and slow particles alike, anywhere inside the radius
    for (vx, vy) in [(0.0, 0.0), (1.0e6, -5.0e5), (0.0, 3.0e4)] {
        let mut body = particle(5.0e9, 0.0, vx, vy, 0);
        let before = body.clone();

        let outcome = euler_step(&mut body, &attractor, dt, &p);

        assert_eq!(outcome, Outcome::Absorbed);
        // an absorbed particle is handed over untouched
        assert_eq!(body.x, before.x);
        assert_eq!(body.v, before.v);
        assert!(body.trail.is_empty());
    }
}

#[test]
fn euler_step_applies_kick_damping_and_drift() {
    let p = test_params();
    let attractor = test_attractor();
    let dt = p.timestep;

    let r = 1.5e11;
    let mut body = particle(r, 0.0, 0.0, 1000.0, 0);

    let outcome = euler_step(&mut body, &attractor, dt, &p);
    assert_eq!(outcome, Outcome::Alive);

    // acceleration toward the attractor (along -x here)
    let accel = p.g * attractor.m / (r * r);
    let expected_vx = (0.0 - accel * dt) * p.damping;
    let expected_vy = 1000.0 * p.damping;

    assert!((body.v.x - expected_vx).abs() <= 1e-9 * expected_vx.abs());
    assert!((body.v.y - expected_vy).abs() <= 1e-9 * expected_vy.abs());

    // drift uses the updated velocity
    let expected_x = r + body.v.x * dt;
    let expected_y = body.v.y * dt;
    assert!((body.x.x - expected_x).abs() <= 1e-6);
    assert!((body.x.y - expected_y).abs() <= 1e-6);
}

#[test]
fn near_circular_orbit_survives_one_tick() {
    let p = test_params();
    let attractor = test_attractor();
    let r = 1.5e11;

    let mut world = test_world();
    world.particles.push(circular_particle(r, &p, &attractor));

    world.step();

    assert_eq!(world.particles.len(), 1);
    assert_eq!(world.particles[0].depth, 0); // not absorbed, not fragmented

    let dist = world.particles[0].x.norm();
    assert!(
        (dist - r).abs() / r < 1e-3,
        "orbit drifted too far: {dist} vs {r}"
    );
}

#[test]
fn trail_is_bounded_and_ends_at_current_position() {
    let p = test_params();
    let attractor = test_attractor();

    let mut world = test_world();
    world.particles.push(circular_particle(1.5e11, &p, &attractor));

    for _ in 0..60 {
        world.step();
    }

    let body = &world.particles[0];
    assert_eq!(body.trail.len(), TRAIL_LEN);
    assert_eq!(*body.trail.back().unwrap(), body.x);
}

// ==================================================================================
// World lifecycle tests
// ==================================================================================

#[test]
fn step_while_paused_changes_nothing() {
    let mut world = test_world();
    for _ in 0..5 {
        world.spawn_orbiting_particle();
    }

    let before: Vec<(NVec2, NVec2)> = world.particles.iter().map(|b| (b.x, b.v)).collect();

    world.toggle_pause();
    for _ in 0..3 {
        world.step();
    }

    assert_eq!(world.particles.len(), before.len());
    for (body, (x, v)) in world.particles.iter().zip(before.iter()) {
        assert_eq!(body.x, *x);
        assert_eq!(body.v, *v);
    }
}

#[test]
fn absorbed_particle_fragments_below_depth_cap() {
    let mut world = test_world();
    let parent_mass = 1.0e20;
    world.particles.push(particle(5.0e9, 0.0, 0.0, 2.0e4, 0));

    world.step();

    assert!(!world.particles.is_empty());
    let total_mass: f64 = world.particles.iter().map(|b| b.m).sum();
    for child in &world.particles {
        assert_eq!(child.depth, 1);
        // children end up outside the absorption radius
        assert!(child.x.norm() >= world.parameters.absorption_radius);
    }
    assert!((total_mass - parent_mass).abs() / parent_mass < 1e-12);
}

#[test]
fn absorbed_particle_at_depth_cap_is_removed() {
    let mut world = test_world();
    let depth = world.parameters.max_fragment_depth;
    world.particles.push(particle(5.0e9, 0.0, 0.0, 2.0e4, depth));

    world.step();

    assert!(world.particles.is_empty());
}

#[test]
fn population_cap_bounds_fragment_creation() {
    let mut params = test_params();
    params.max_particles = 4;
    let mut world = World::new(test_attractor(), params.clone());

    // three survivors plus one particle about to be absorbed
    let attractor = test_attractor();
    for _ in 0..3 {
        world.particles.push(circular_particle(1.5e11, &params, &attractor));
    }
    world.particles.push(particle(5.0e9, 0.0, 0.0, 2.0e4, 0));

    world.step();

    // room for exactly one fragment
    assert_eq!(world.particles.len(), 4);
    assert_eq!(world.particles.iter().filter(|b| b.depth == 1).count(), 1);
}

#[test]
fn population_never_exceeds_cap() {
    let mut params = test_params();
    params.max_particles = 8;
    let mut world = World::new(test_attractor(), params);

    // pack the world with particles heading straight for the attractor
    for i in 0..8 {
        world.particles.push(particle(1.2e10 + i as f64 * 1.0e8, 0.0, -5.0e5, 0.0, 0));
    }

    for _ in 0..20 {
        world.step();
        assert!(world.particles.len() <= world.parameters.max_particles);
        for body in &world.particles {
            assert!(body.depth <= world.parameters.max_fragment_depth);
        }
    }
}

// ==================================================================================
// Command tests
// ==================================================================================

#[test]
fn spawned_particle_is_on_a_circular_orbit() {
    let mut world = test_world();
    world.spawn_orbiting_particle();

    let body = &world.particles[0];
    let r = body.x.norm();
    assert!((1.0e11..=2.0e11).contains(&r));

    let expected_speed = (world.parameters.g * world.attractor.m / r).sqrt();
    let speed = body.v.norm();
    assert!(
        (speed - expected_speed).abs() / expected_speed < 1e-9,
        "speed {speed} vs circular {expected_speed}"
    );

    // velocity perpendicular to the radius vector
    let radial = body.x.dot(&body.v).abs() / (r * speed);
    assert!(radial < 1e-9, "velocity not tangential: {radial}");
}

#[test]
fn spawn_is_a_noop_at_the_population_cap() {
    let mut params = test_params();
    params.max_particles = 10;
    let mut world = World::new(test_attractor(), params);

    for _ in 0..12 {
        world.spawn_orbiting_particle();
    }

    assert_eq!(world.particles.len(), 10);
}

#[test]
fn spawn_is_deterministic_with_same_seed() {
    let mut w1 = test_world();
    let mut w2 = test_world();

    w1.spawn_orbiting_particle();
    w2.spawn_orbiting_particle();

    assert_eq!(w1.particles[0].x, w2.particles[0].x);
    assert_eq!(w1.particles[0].v, w2.particles[0].v);
    assert_eq!(w1.particles[0].color, w2.particles[0].color);
}

#[test]
fn pointer_spawn_ignores_cursor_position() {
    let mut world = test_world();
    world.inject_particle_at(NVec2::new(1.0, 2.0));

    // same random-orbit placement as the keyboard spawn
    let r = world.particles[0].x.norm();
    assert!((1.0e11..=2.0e11).contains(&r));
}

#[test]
fn speed_commands_scale_and_clamp() {
    let mut world = test_world();

    world.increase_speed();
    assert!((world.speed - 1.1).abs() < 1e-12);
    world.decrease_speed();
    assert!((world.speed - 1.0).abs() < 1e-12);

    for _ in 0..200 {
        world.decrease_speed();
    }
    assert!(world.speed >= 1e-3 - 1e-15);

    for _ in 0..400 {
        world.increase_speed();
    }
    assert!(world.speed <= 1e3 + 1e-12);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn world_builds_from_yaml_scenario() {
    let yaml = r#"
world:
  initial_particles: 3
  attractor_radius: 21.0

parameters:
  g: 6.67430e-11
  attractor_mass: 1.989e30
  timestep: 43200.0
  damping: 0.999
  absorption_radius: 1.0e10
  max_fragment_depth: 2
  max_particles: 1000
  seed: 7
"#;

    let cfg: bhtoy::ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let world = World::build_world(cfg);

    assert_eq!(world.particles.len(), 3);
    assert_eq!(world.attractor.x, NVec2::zeros());
    assert_eq!(world.parameters.max_particles, 1000);
    assert!(!world.paused);
    assert_eq!(world.speed, 1.0);
}
