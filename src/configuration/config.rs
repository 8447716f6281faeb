//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario:
//!
//! - [`WorldConfig`]      – initial population and attractor looks
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! world:
//!   initial_particles: 5       # particles spawned at startup
//!   attractor_radius: 21.0     # visual radius of the central mass (px)
//!
//! parameters:
//!   g: 6.67430e-11             # gravitational constant
//!   attractor_mass: 1.989e30   # one solar mass
//!   timestep: 43200.0          # half a day in seconds, per tick
//!   damping: 0.999             # velocity damping factor
//!   absorption_radius: 1.0e10  # capture distance (m)
//!   max_fragment_depth: 2      # bound on recursive splitting
//!   max_particles: 1000        # population cap
//!   seed: 42                   # deterministic seed
//! ```
//!
//! The engine maps this configuration into its internal runtime
//! representation when building the world.

use serde::Deserialize;

/// Initial population and attractor presentation for a scenario
#[derive(Deserialize, Debug)]
pub struct WorldConfig {
    pub initial_particles: usize, // particles spawned when the world is built
    pub attractor_radius: f64,    // visual radius of the central mass (px)
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,                  // gravitational constant
    pub attractor_mass: f64,     // mass of the central body (kg)
    pub timestep: f64,           // base step size per tick (s)
    pub damping: f64,            // per-tick velocity damping factor
    pub absorption_radius: f64,  // capture distance (m)
    pub max_fragment_depth: u32, // bound on recursive splitting
    pub max_particles: usize,    // population cap
    pub seed: u64,               // deterministic seed to make runs reproducable
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub world: WorldConfig,           // initial population and attractor looks
    pub parameters: ParametersConfig, // numerical parameters and physical constants
}
