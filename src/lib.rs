pub mod config;
pub mod physics;
pub mod sim;
pub mod state;

// Convenience re-exports: the types an embedding presentation layer needs.
pub use config::PhysicalConfig;
pub use physics::forces::{force_components, ForceComponents};
pub use sim::integrator::DEFAULT_DT;
pub use sim::runner::{Phase, RunSummary, Simulation};
pub use sim::sampler::{Sample, SAMPLE_INTERVAL};
pub use state::KinematicState;
