//! World state and population lifecycle
//!
//! `World` owns the attractor and the bounded particle population and
//! drives the integrator over every particle each tick. Absorbed particles
//! are reconciled in a single pass: fragment while under the caps, drop
//! otherwise. Also hosts the user-facing commands (pause, speed, spawn)
//! and the read-only render snapshot.
//!
//! Inserted into Bevy as a `Resource` and consumed by the physics, input,
//! and drawing systems.

use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::f64::consts::TAU;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::integrator::{euler_step, Outcome};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Attractor, AttractorView, Body, NVec2, ParticleView, RenderView};

/// Number of children an absorbed particle splits into.
pub const FRAGMENT_FANOUT: usize = 3;

// Spawn placement: random polar offset from the attractor
const SPAWN_DIST_MIN: f64 = 1.0e11;
const SPAWN_DIST_MAX: f64 = 2.0e11;
const SPAWN_MASS: f64 = 1.0e20;
const SPAWN_RADIUS: f64 = 3.0;

// Fragment placement: just outside the absorption boundary, fanned around
// the parent's angular position
const FRAGMENT_SPAWN_FACTOR: f64 = 1.05;
const FRAGMENT_SPREAD: f64 = 0.25; // rad between adjacent children
const FRAGMENT_SPEED_FACTOR: f64 = 1.2; // of local circular speed

// Speed multiplier command step and safety clamp
const SPEED_STEP: f64 = 1.1;
const SPEED_MIN: f64 = 1e-3;
const SPEED_MAX: f64 = 1e3;

/// Bevy resource holding the full simulation state: the central attractor,
/// the live particle population, the pause/speed controls, the runtime
/// parameters, and the seeded RNG used for spawn placement.
///
/// The world is the exclusive owner of every body; the renderer only ever
/// sees the cloned snapshot from [`World::render_view`].
#[derive(Resource)]
pub struct World {
    pub attractor: Attractor,
    pub particles: Vec<Body>,
    pub paused: bool,
    pub speed: f64, // positive timestep multiplier
    pub parameters: Parameters,
    rng: ChaCha8Rng,
}

impl World {
    /// Empty world around the given attractor, RNG seeded from `parameters.seed`.
    pub fn new(attractor: Attractor, parameters: Parameters) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(parameters.seed);
        Self {
            attractor,
            particles: Vec::new(),
            paused: false,
            speed: 1.0,
            parameters,
            rng,
        }
    }

    /// Map a `ScenarioConfig` into a runtime world and seed the initial
    /// particle population.
    pub fn build_world(cfg: ScenarioConfig) -> Self {
        let p = cfg.parameters;
        let parameters = Parameters {
            g: p.g,
            timestep: p.timestep,
            damping: p.damping,
            absorption_radius: p.absorption_radius,
            max_fragment_depth: p.max_fragment_depth,
            max_particles: p.max_particles,
            seed: p.seed,
        };

        // The attractor sits at the origin; only mass and looks come from config
        let attractor = Attractor {
            x: NVec2::zeros(),
            m: p.attractor_mass,
            radius: cfg.world.attractor_radius,
            color: [0, 0, 0],
        };

        let mut world = Self::new(attractor, parameters);
        for _ in 0..cfg.world.initial_particles {
            world.spawn_orbiting_particle();
        }
        world
    }

    // =====================================================================================
    // Tick
    // =====================================================================================

    /// Advance the simulation by one tick. No-op while paused.
    ///
    /// Every particle is integrated and tagged `Alive` or `Absorbed`, then a
    /// single reconciliation pass rebuilds the population: survivors are
    /// kept, and each absorbed particle is replaced by fragments while the
    /// depth cap and the population cap both leave room, or dropped
    /// otherwise. The particle vector is swapped wholesale, so callers
    /// never observe a torn population between ticks.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        let dt = self.parameters.timestep * self.speed;

        let mut next: Vec<Body> = Vec::with_capacity(self.particles.len());
        let mut absorbed: Vec<Body> = Vec::new();

        for mut body in self.particles.drain(..) {
            match euler_step(&mut body, &self.attractor, dt, &self.parameters) {
                Outcome::Alive => next.push(body),
                Outcome::Absorbed => absorbed.push(body),
            }
        }

        // Reconcile absorbed particles: fragment while under the caps.
        // next.len() counts survivors plus fragments created so far this
        // tick, so the population cap is enforced by refusing creation.
        for parent in absorbed {
            if parent.depth >= self.parameters.max_fragment_depth {
                log::debug!("particle at depth {} absorbed, no fragments", parent.depth);
                continue;
            }
            if next.len() >= self.parameters.max_particles {
                log::debug!("population cap reached, absorbed particle dropped");
                continue;
            }
            let children = self.fragments_of(&parent);
            let created = children.len().min(self.parameters.max_particles - next.len());
            log::debug!(
                "particle absorbed at depth {}, creating {} fragments",
                parent.depth,
                created
            );
            next.extend(children.into_iter().take(created));
        }

        self.particles = next;
    }

    /// Split an absorbed parent into `FRAGMENT_FANOUT` children.
    ///
    /// Children share the parent's mass equally and carry depth + 1. They
    /// are fanned around the parent's angular position just outside the
    /// absorption boundary, with tangential velocities that keep the
    /// parent's orbital sense, so momentum direction is roughly preserved
    /// and fragments stay visible instead of being re-captured immediately.
    fn fragments_of(&self, parent: &Body) -> Vec<Body> {
        let phi = parent.x.y.atan2(parent.x.x);

        // Orbital sense from the parent's angular momentum about the origin
        let sense = if parent.x.x * parent.v.y - parent.x.y * parent.v.x >= 0.0 {
            1.0
        } else {
            -1.0
        };

        let r = self.parameters.absorption_radius * FRAGMENT_SPAWN_FACTOR;
        let speed = FRAGMENT_SPEED_FACTOR * (self.parameters.g * self.attractor.m / r).sqrt();
        let mass = parent.m / FRAGMENT_FANOUT as f64;
        let radius = (parent.radius - 1.0).max(1.0);

        (0..FRAGMENT_FANOUT)
            .map(|k| {
                let a = phi + FRAGMENT_SPREAD * (k as f64 - (FRAGMENT_FANOUT - 1) as f64 / 2.0);
                let tangent = NVec2::new(-a.sin(), a.cos()) * sense;
                Body {
                    x: NVec2::new(r * a.cos(), r * a.sin()),
                    v: tangent * speed,
                    m: mass,
                    radius,
                    color: parent.color,
                    trail: VecDeque::new(),
                    depth: parent.depth + 1,
                }
            })
            .collect()
    }

    // =====================================================================================
    // Commands
    // =====================================================================================

    /// Add a particle on a random circular orbit around the attractor.
    ///
    /// Placement is a uniform random angle at a uniform random distance in
    /// [1e11, 2e11] m; the velocity is the exact circular-orbit speed
    /// sqrt(G * M / d), directed tangentially (counter-clockwise). Silent
    /// no-op when the population is already at the cap.
    pub fn spawn_orbiting_particle(&mut self) {
        if self.particles.len() >= self.parameters.max_particles {
            // capacity guard, not an error
            return;
        }

        let angle = self.rng.gen_range(0.0..TAU);
        let distance = self.rng.gen_range(SPAWN_DIST_MIN..SPAWN_DIST_MAX);
        let speed = (self.parameters.g * self.attractor.m / distance).sqrt();
        let color: [u8; 3] = [self.rng.gen(), self.rng.gen(), self.rng.gen()];

        self.particles.push(Body {
            x: NVec2::new(distance * angle.cos(), distance * angle.sin()),
            v: NVec2::new(-speed * angle.sin(), speed * angle.cos()),
            m: SPAWN_MASS,
            radius: SPAWN_RADIUS,
            color,
            trail: VecDeque::new(),
            depth: 0,
        });
    }

    /// Pointer-driven spawn. The cursor position is deliberately unused:
    /// the click performs the same random-orbit spawn as the keyboard
    /// shortcut.
    pub fn inject_particle_at(&mut self, _cursor: NVec2) {
        self.spawn_orbiting_particle();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
    }

    /// Multiply the speed multiplier by 1.1, clamped to a sane range.
    pub fn increase_speed(&mut self) {
        self.speed = (self.speed * SPEED_STEP).clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Divide the speed multiplier by 1.1, clamped to a sane range.
    pub fn decrease_speed(&mut self) {
        self.speed = (self.speed / SPEED_STEP).clamp(SPEED_MIN, SPEED_MAX);
    }

    // =====================================================================================
    // Render snapshot
    // =====================================================================================

    /// Cloned, read-only snapshot for the renderer. Positions are in
    /// simulation units (m); non-finite positions are passed through and
    /// left for the viewer to skip.
    pub fn render_view(&self) -> RenderView {
        RenderView {
            attractor: AttractorView {
                position: self.attractor.x,
                radius: self.attractor.radius,
                color: self.attractor.color,
            },
            particles: self
                .particles
                .iter()
                .map(|b| ParticleView {
                    position: b.x,
                    radius: b.radius,
                    color: b.color,
                    trail: b.trail.iter().copied().collect(),
                })
                .collect(),
        }
    }
}
