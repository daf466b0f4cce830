pub mod integrator;
pub mod runner;
pub mod sampler;

pub use integrator::{euler_step, StepResult, DEFAULT_DT};
pub use runner::{Phase, RunSummary, Simulation};
pub use sampler::{Sample, Sampler, SAMPLE_INTERVAL};
