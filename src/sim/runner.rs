use log::{debug, info, warn};

use crate::config::PhysicalConfig;
use crate::physics::forces::{force_components, ForceComponents};
use crate::state::KinematicState;

use super::integrator::{euler_step, DEFAULT_DT};
use super::sampler::{Sample, Sampler};

// ---------------------------------------------------------------------------
// Run phase state machine
// ---------------------------------------------------------------------------

/// Lifecycle phase of a run.
///
/// Stopped -> Running (start), Running -> Paused (pause),
/// Paused -> Running (resume), any -> Stopped (reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
    Paused,
}

/// Upper bound on catch-up substeps in one `advance` call. A presentation
/// layer that stalls for minutes should not stall the next frame too.
const MAX_STEPS_PER_ADVANCE: usize = 10_000;

// ---------------------------------------------------------------------------
// Simulation controller
// ---------------------------------------------------------------------------

/// Owns the full mutable state of one run: kinematics, sampler, sample log,
/// and phase. The external presentation layer attaches here: it drives
/// [`Simulation::advance`] once per display frame and reads state, last
/// forces, and the sample log between ticks.
///
/// Physics always advances by the fixed timestep regardless of how often the
/// driver calls in; frame time is banked in an accumulator and consumed in
/// whole substeps, so numerical behavior is independent of display rate.
#[derive(Debug)]
pub struct Simulation {
    config: PhysicalConfig,
    state: KinematicState,
    last_forces: ForceComponents,
    sampler: Sampler,
    samples: Vec<Sample>,
    phase: Phase,
    dt: f64,
    accumulator: f64,
}

impl Simulation {
    /// Build a controller with the default integration timestep. The config
    /// is clamped into its documented domains on the way in.
    pub fn new(config: PhysicalConfig) -> Self {
        Self::with_dt(config, DEFAULT_DT)
    }

    pub fn with_dt(config: PhysicalConfig, dt: f64) -> Self {
        let config = config.clamped();
        let state = KinematicState::initial(&config);
        let last_forces = force_components(&config, &state);
        Self {
            config,
            state,
            last_forces,
            sampler: Sampler::new(),
            samples: Vec::new(),
            phase: Phase::Stopped,
            dt,
            accumulator: 0.0,
        }
    }

    // -- read side ----------------------------------------------------------

    pub fn config(&self) -> &PhysicalConfig {
        &self.config
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    /// Forces from the most recent integration step (for live display).
    pub fn forces(&self) -> &ForceComponents {
        &self.last_forces
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the sphere has reached the bottom of the rail.
    pub fn finished(&self) -> bool {
        self.state.at_end(&self.config)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    // -- commands ------------------------------------------------------------

    /// Start a stopped run, or resume a paused one.
    pub fn start(&mut self) {
        if self.phase != Phase::Running {
            info!("run started at t={:.3} s", self.state.time);
            self.phase = Phase::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            info!("run paused at t={:.3} s", self.state.time);
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            info!("run resumed at t={:.3} s", self.state.time);
            self.phase = Phase::Running;
        }
    }

    /// Return to the initial state: kinematics reseeded, sample log and loss
    /// integrals cleared, phase Stopped. Total and immediate — a reader never
    /// observes a partially cleared log.
    pub fn reset(&mut self) {
        info!("run reset");
        self.state = KinematicState::initial(&self.config);
        self.last_forces = force_components(&self.config, &self.state);
        self.sampler.reset();
        self.samples.clear();
        self.accumulator = 0.0;
        self.phase = Phase::Stopped;
    }

    // -- parameter mutation (live-adjustable slider semantics) ---------------

    pub fn set_angle(&mut self, degrees: f64) {
        self.config.angle_deg = degrees;
        self.apply_config();
    }

    pub fn set_rail_length(&mut self, meters: f64) {
        self.config.rail_length = meters;
        self.apply_config();
    }

    pub fn set_gravity(&mut self, g: f64) {
        self.config.gravity = g;
        self.apply_config();
    }

    pub fn set_mass(&mut self, kg: f64) {
        self.config.mass = kg;
        self.apply_config();
    }

    pub fn set_initial_velocity(&mut self, v: f64) {
        self.config.initial_velocity = v;
        self.apply_config();
    }

    /// Clamp the mutated config; while Running or Paused the change simply
    /// takes effect on the next tick without touching elapsed state, while
    /// Stopped it also reseeds the initial kinematics.
    fn apply_config(&mut self) {
        self.config = self.config.clone().clamped();
        if self.phase == Phase::Stopped {
            self.state = KinematicState::initial(&self.config);
            self.last_forces = force_components(&self.config, &self.state);
        }
    }

    // -- tick driving --------------------------------------------------------

    /// Bank `frame_dt` seconds of wall time and run as many fixed substeps
    /// as it covers. Returns the number of physics steps taken. No-op unless
    /// Running.
    pub fn advance(&mut self, frame_dt: f64) -> usize {
        if self.phase != Phase::Running {
            return 0;
        }
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.dt {
            if steps >= MAX_STEPS_PER_ADVANCE {
                warn!(
                    "dropping {:.3} s of banked frame time after {} substeps",
                    self.accumulator, steps
                );
                self.accumulator = 0.0;
                break;
            }
            self.step_once();
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    /// Run exactly one fixed physics step. Returns false unless Running.
    pub fn step(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.step_once();
        true
    }

    fn step_once(&mut self) {
        let was_at_end = self.state.at_end(&self.config);
        let result = euler_step(&mut self.state, &self.config, self.dt);
        self.last_forces = result.forces;

        if was_at_end {
            // Terminal sub-state: clock runs, nothing new to record.
            return;
        }

        if let Some(sample) =
            self.sampler
                .observe(&self.config, &self.state, &result.forces, result.delta_distance)
        {
            self.samples.push(sample);
        }

        if self.state.at_end(&self.config) {
            debug!(
                "sphere reached rail end at t={:.3} s, v={:.2} m/s",
                self.state.time, self.state.speed
            );
            // Force a final record so the log always closes at the bottom.
            if let Some(sample) = self.sampler.emit_now(&self.config, &self.state, &result.forces)
            {
                self.samples.push(sample);
            }
        }
    }

    /// Summary of the run so far, if anything has been recorded.
    pub fn summary(&self) -> Option<RunSummary> {
        RunSummary::from_samples(&self.samples)
    }
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Aggregate statistics over the sample log.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub duration: f64,            // s, time of the last sample
    pub max_speed: f64,           // m/s
    pub final_kinetic_energy: f64, // J
    pub final_total_energy: f64,  // J
    pub friction_energy_loss: f64, // J
    pub drag_energy_loss: f64,    // J
    pub sample_count: usize,
}

impl RunSummary {
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let last = samples.last()?;
        let max_speed = samples.iter().map(|s| s.speed.abs()).fold(0.0_f64, f64::max);
        Some(Self {
            duration: last.time,
            max_speed,
            final_kinetic_energy: last.kinetic_energy,
            final_total_energy: last.total_energy,
            friction_energy_loss: last.friction_energy_loss,
            drag_energy_loss: last.drag_energy_loss,
            sample_count: samples.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
