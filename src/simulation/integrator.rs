//! Fixed-step time integrator for a single orbiting particle
//!
//! Advances one particle under the gravitational pull of the central
//! attractor using semi-implicit Euler with velocity damping, and reports
//! whether the particle survived the step or fell inside the absorption
//! radius.

use super::params::Parameters;
use super::states::{Attractor, Body};

/// Per-step fate of a particle. `Absorbed` hands the particle to the
/// world's fragmentation policy; `Alive` means its state was advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Alive,
    Absorbed,
}

/// Advance `body` by one step of size `dt` under the attractor's gravity.
///
/// The absorption check runs first: a particle closer than the absorption
/// radius is returned untouched, so its pre-capture state is what the
/// fragmentation policy sees. Otherwise:
///
/// - v_n+1 = (v_n + (F/m) * dt) * damping
/// - x_n+1 = x_n + v_n+1 * dt
///
/// with F = G * M * m / d^2 directed along the displacement toward the
/// attractor. The damping factor is not physically derived; it models a
/// generic drag term and is applied to both axes after the kick.
pub fn euler_step(body: &mut Body, attractor: &Attractor, dt: f64, params: &Parameters) -> Outcome {
    // Displacement from the particle to the attractor
    let disp = attractor.x - body.x;
    let dist = disp.norm();

    if dist < params.absorption_radius {
        return Outcome::Absorbed;
    }

    // F = G * M * m / d^2, decomposed along the displacement direction.
    // dist is bounded below by the absorption radius, so the division is safe.
    let force = params.g * attractor.m * body.m / (dist * dist);
    let dir = disp / dist;

    // Kick, damp, drift
    body.v += dir * (force / body.m) * dt;
    body.v *= params.damping;
    body.x += body.v * dt;

    body.record_trail();

    Outcome::Alive
}
