pub mod integrator;
pub mod params;
pub mod states;
pub mod world;
