//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and base timestep,
//! - velocity damping factor,
//! - absorption radius of the central mass,
//! - population policy (fragment depth cap, particle cap),
//! - random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub timestep: f64, // base step size (s), scaled by the world speed multiplier
    pub damping: f64, // per-tick multiplicative velocity decay, in (0, 1]
    pub absorption_radius: f64, // distance (m) below which a particle is consumed
    pub max_fragment_depth: u32, // bound on recursive splitting
    pub max_particles: usize, // hard ceiling on simultaneously live particles
    pub seed: u64, // deterministic seed to make runs reproducable
}
