use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Parameter domains (slider ranges at the presentation boundary)
// ---------------------------------------------------------------------------

pub const ANGLE_DOMAIN: (f64, f64) = (0.0, 90.0); // degrees
pub const RAIL_LENGTH_DOMAIN: (f64, f64) = (1.0, 1000.0); // m
pub const GRAVITY_DOMAIN: (f64, f64) = (1.0, 274.0); // m/s^2 (Earth..Sun surface)
pub const MASS_DOMAIN: (f64, f64) = (1.0, 100.0); // kg
pub const INITIAL_VELOCITY_DOMAIN: (f64, f64) = (0.0, 1000.0); // m/s

// ---------------------------------------------------------------------------
// Fixed material/medium defaults
// ---------------------------------------------------------------------------

pub const AIR_DENSITY: f64 = 1.225; // kg/m^3, sea level
pub const SPHERE_CD: f64 = 0.47; // drag coefficient of a smooth sphere
pub const FRICTION_MU: f64 = 0.2; // steel on aluminium
pub const SPHERE_RADIUS: f64 = 0.1; // m

// ---------------------------------------------------------------------------
// Physical configuration
// ---------------------------------------------------------------------------

/// Full physical parameter set for one run.
///
/// The first five fields are the user-adjustable parameters; out-of-range
/// values are clamped to their domain by [`PhysicalConfig::clamped`] before
/// they enter the integration loop, never rejected. The remaining fields are
/// medium/material constants with fixed defaults that may be overridden at
/// construction.
#[derive(Debug, Clone)]
pub struct PhysicalConfig {
    pub angle_deg: f64,         // incline angle, degrees [0, 90]
    pub rail_length: f64,       // m [1, 1000]
    pub gravity: f64,           // m/s^2 [1, 274]
    pub mass: f64,              // kg [1, 100]
    pub initial_velocity: f64,  // m/s [0, 1000], along the rail, downhill positive

    pub air_density: f64,       // kg/m^3
    pub drag_coefficient: f64,  // dimensionless
    pub friction_coefficient: f64, // dimensionless
    pub sphere_radius: f64,     // m (physical radius, not display size)
}

impl Default for PhysicalConfig {
    fn default() -> Self {
        Self {
            angle_deg: 30.0,
            rail_length: 10.0,
            gravity: 9.81,
            mass: 1.0,
            initial_velocity: 0.0,
            air_density: AIR_DENSITY,
            drag_coefficient: SPHERE_CD,
            friction_coefficient: FRICTION_MU,
            sphere_radius: SPHERE_RADIUS,
        }
    }
}

fn clamp_to(value: f64, domain: (f64, f64)) -> f64 {
    value.clamp(domain.0, domain.1)
}

impl PhysicalConfig {
    /// Clamp every adjustable parameter into its documented domain.
    pub fn clamped(mut self) -> Self {
        self.angle_deg = clamp_to(self.angle_deg, ANGLE_DOMAIN);
        self.rail_length = clamp_to(self.rail_length, RAIL_LENGTH_DOMAIN);
        self.gravity = clamp_to(self.gravity, GRAVITY_DOMAIN);
        self.mass = clamp_to(self.mass, MASS_DOMAIN);
        self.initial_velocity = clamp_to(self.initial_velocity, INITIAL_VELOCITY_DOMAIN);
        self
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// Cross-sectional area presented to the airflow, pi*r^2.
    pub fn cross_section(&self) -> f64 {
        PI * self.sphere_radius * self.sphere_radius
    }

    /// Sphere volume, (4/3)*pi*r^3 — used for buoyancy.
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.sphere_radius.powi(3)
    }

    pub fn sphere_density(&self) -> f64 {
        self.mass / self.volume()
    }

    /// Gravity reduced by buoyancy: g * (1 - rho_air / rho_sphere).
    ///
    /// Equivalent to subtracting the buoyant force rho_air * V * g from the
    /// sphere's weight; this is the acceleration the incline geometry sees.
    pub fn effective_gravity(&self) -> f64 {
        self.gravity * (1.0 - self.air_density / self.sphere_density())
    }

    /// Asymptotic speed where drag balances the net downhill force.
    ///
    /// Returns 0 when friction alone exceeds the parallel gravity component
    /// (the sphere cannot sustain motion at all).
    pub fn terminal_velocity(&self) -> f64 {
        let theta = self.angle_rad();
        let g_eff = self.effective_gravity();
        let downhill = self.mass * g_eff * theta.sin();
        let friction = if self.angle_deg < ANGLE_DOMAIN.1 {
            self.friction_coefficient * self.mass * g_eff * theta.cos()
        } else {
            0.0
        };
        let net = downhill - friction;
        if net <= 0.0 {
            return 0.0;
        }
        let drag_per_v2 = 0.5 * self.air_density * self.drag_coefficient * self.cross_section();
        if drag_per_v2 <= 0.0 {
            return f64::INFINITY;
        }
        (net / drag_per_v2).sqrt()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_reference_constants() {
        let c = PhysicalConfig::default();
        assert_relative_eq!(c.air_density, 1.225);
        assert_relative_eq!(c.drag_coefficient, 0.47);
        assert_relative_eq!(c.friction_coefficient, 0.2);
        assert_relative_eq!(c.sphere_radius, 0.1);
        assert_relative_eq!(c.cross_section(), PI * 0.01);
        assert_relative_eq!(c.volume(), 4.0 / 3.0 * PI * 0.001);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let c = PhysicalConfig {
            angle_deg: 120.0,
            rail_length: 0.1,
            gravity: 500.0,
            mass: -3.0,
            initial_velocity: 2000.0,
            ..Default::default()
        }
        .clamped();
        assert_relative_eq!(c.angle_deg, 90.0);
        assert_relative_eq!(c.rail_length, 1.0);
        assert_relative_eq!(c.gravity, 274.0);
        assert_relative_eq!(c.mass, 1.0);
        assert_relative_eq!(c.initial_velocity, 1000.0);
    }

    #[test]
    fn in_range_values_are_untouched() {
        let c = PhysicalConfig::default().clamped();
        assert_relative_eq!(c.angle_deg, 30.0);
        assert_relative_eq!(c.rail_length, 10.0);
        assert_relative_eq!(c.gravity, 9.81);
    }

    #[test]
    fn effective_gravity_below_nominal() {
        let c = PhysicalConfig::default();
        assert!(c.effective_gravity() < c.gravity);
        assert!(c.effective_gravity() > 0.0);
    }

    #[test]
    fn terminal_velocity_zero_on_shallow_slope() {
        // tan(theta) < mu: friction beats the downhill pull
        let c = PhysicalConfig {
            angle_deg: 5.0,
            ..Default::default()
        };
        assert_relative_eq!(c.terminal_velocity(), 0.0);
    }

    #[test]
    fn terminal_velocity_positive_on_steep_slope() {
        let c = PhysicalConfig {
            angle_deg: 60.0,
            ..Default::default()
        };
        assert!(c.terminal_velocity() > 0.0);
    }
}
