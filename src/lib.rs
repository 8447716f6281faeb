pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Attractor, AttractorView, Body, NVec2, ParticleView, RenderView, TRAIL_LEN};
pub use simulation::params::Parameters;
pub use simulation::integrator::{euler_step, Outcome};
pub use simulation::world::{World, FRAGMENT_FANOUT};

pub use configuration::config::{ParametersConfig, ScenarioConfig, WorldConfig};

pub use visualization::vis2d::run_2d;
