use crate::config::PhysicalConfig;
use crate::state::KinematicState;

// ---------------------------------------------------------------------------
// Instantaneous force components along the incline
// ---------------------------------------------------------------------------

/// All forces acting on the sphere at one instant, plus the resulting
/// acceleration along the rail. Transient: recomputed every step, never
/// persisted.
///
/// Force magnitudes are stored unsigned; the sign bookkeeping (resistive
/// forces oppose the current velocity) happens once, in `net_acceleration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceComponents {
    pub gravity_parallel: f64,      // N, buoyancy-reduced weight along the rail
    pub gravity_perpendicular: f64, // N, full weight component into the rail
    pub normal_force: f64,          // N, buoyancy-reduced reaction from the rail
    pub friction_force: f64,        // N, mu * N, zero at 90 degrees
    pub drag_force: f64,            // N, quadratic in speed
    pub buoyant_force: f64,         // N, rho_air * V * g, opposing gravity
    pub net_acceleration: f64,      // m/s^2, signed along the rail
}

/// Compute the force balance for the current state. Pure; no mutation.
///
/// Buoyancy is folded into an effective gravity g_eff = g*(1 - rho_air /
/// rho_sphere), which scales both the parallel pull and the normal force
/// (a partially floating sphere presses on the rail with less than its
/// weight). Friction and drag always oppose the instantaneous velocity;
/// at rest they contribute nothing, so there is no static-friction model.
///
/// At exactly 90 degrees the rail is vertical: cos(theta) = 0, the normal
/// force vanishes and friction with it. Free fall along the rail, not an
/// error path.
pub fn force_components(config: &PhysicalConfig, state: &KinematicState) -> ForceComponents {
    let theta = config.angle_rad();
    let g_eff = config.effective_gravity();

    let buoyant_force = config.air_density * config.volume() * config.gravity;
    let gravity_parallel = config.mass * g_eff * theta.sin();
    let gravity_perpendicular = config.mass * config.gravity * theta.cos();
    let normal_force = config.mass * g_eff * theta.cos();

    // No rail-normal contact on a vertical rail.
    let friction_force = if config.angle_deg < 90.0 {
        config.friction_coefficient * normal_force
    } else {
        0.0
    };

    let drag_force = 0.5
        * config.air_density
        * config.drag_coefficient
        * config.cross_section()
        * state.speed
        * state.speed;

    // Resistive forces oppose velocity, not displacement. sign(0) must be 0
    // so a resting sphere feels no kinetic friction.
    let motion_sign = if state.speed > 0.0 {
        1.0
    } else if state.speed < 0.0 {
        -1.0
    } else {
        0.0
    };

    let net_force = gravity_parallel - motion_sign * (friction_force + drag_force);

    ForceComponents {
        gravity_parallel,
        gravity_perpendicular,
        normal_force,
        friction_force,
        drag_force,
        buoyant_force,
        net_acceleration: net_force / config.mass,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
