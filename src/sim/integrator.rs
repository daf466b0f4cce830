use crate::config::PhysicalConfig;
use crate::physics::forces::{force_components, ForceComponents};
use crate::state::KinematicState;

// ---------------------------------------------------------------------------
// Fixed-timestep explicit Euler integrator
// ---------------------------------------------------------------------------

/// Default integration timestep, s (400 Hz).
pub const DEFAULT_DT: f64 = 0.0025;

/// Outcome of one integration step.
#[derive(Debug, Clone, Copy)]
pub struct StepResult {
    /// Forces evaluated at the start of the step.
    pub forces: ForceComponents,
    /// Distance actually travelled this step (post-clamp), signed.
    pub delta_distance: f64,
}

/// Advance the state by one fixed timestep.
///
/// First-order Euler: v += a*dt, then s += v*dt with the updated v. Error is
/// O(dt); chosen for simplicity over accuracy, and kept that way on purpose —
/// the drift at coarse dt is part of what the simulation demonstrates.
///
/// Displacement is clamped to [0, rail_length]. Once the upper clamp has
/// engaged the sphere is at the bottom of the rail: distance and speed are
/// frozen and only the clock keeps running (terminal condition, not an
/// error and not destruction — the state stays queryable).
pub fn euler_step(state: &mut KinematicState, config: &PhysicalConfig, dt: f64) -> StepResult {
    let forces = force_components(config, state);

    if state.at_end(config) {
        state.time += dt;
        return StepResult {
            forces,
            delta_distance: 0.0,
        };
    }

    let before = state.distance;
    state.speed += forces.net_acceleration * dt;
    state.distance = (state.distance + state.speed * dt).clamp(0.0, config.rail_length);
    state.time += dt;

    StepResult {
        forces,
        delta_distance: state.distance - before,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
