use nalgebra::Vector2;

use crate::config::PhysicalConfig;

// ---------------------------------------------------------------------------
// Kinematic state of the sphere on the rail
// ---------------------------------------------------------------------------

/// Position/velocity of the sphere at a single point in time.
///
/// Motion is one-dimensional: `distance` is the scalar displacement along the
/// rail from the top, `speed` is signed along the rail (downhill positive).
/// Owned and mutated exclusively by the integrator.
#[derive(Debug, Clone, Copy)]
pub struct KinematicState {
    pub time: f64,     // s, monotonically non-decreasing
    pub distance: f64, // m along the rail, in [0, rail_length]
    pub speed: f64,    // m/s, signed
}

impl KinematicState {
    /// Initial state for a run: at the top of the rail, launch speed applied.
    pub fn initial(config: &PhysicalConfig) -> Self {
        Self {
            time: 0.0,
            distance: 0.0,
            speed: config.initial_velocity,
        }
    }

    /// Height of the sphere above the rail's bottom end.
    ///
    /// (rail_length - distance) * sin(angle), never negative.
    pub fn height(&self, config: &PhysicalConfig) -> f64 {
        (config.rail_length - self.distance).max(0.0) * config.angle_rad().sin()
    }

    /// Whether the sphere has reached the bottom of the rail.
    pub fn at_end(&self, config: &PhysicalConfig) -> bool {
        self.distance >= config.rail_length
    }

    /// Velocity decomposed onto the world axes: [horizontal, vertical].
    ///
    /// horizontal = v*cos(theta), vertical = v*sin(theta).
    pub fn velocity(&self, config: &PhysicalConfig) -> Vector2<f64> {
        let theta = config.angle_rad();
        Vector2::new(self.speed * theta.cos(), self.speed * theta.sin())
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
    fn initial_state_takes_launch_speed() {
        let config = PhysicalConfig {
            initial_velocity: 5.0,
            ..Default::default()
        };
        let s = KinematicState::initial(&config);
        assert_relative_eq!(s.time, 0.0);
        assert_relative_eq!(s.distance, 0.0);
        assert_relative_eq!(s.speed, 5.0);
    }

    #[test]
    fn height_spans_rail_geometry() {
        let config = PhysicalConfig {
            angle_deg: 30.0,
            rail_length: 10.0,
            ..Default::default()
        };
        let top = KinematicState::initial(&config);
        // 10 * sin(30 deg) = 5
        assert_relative_eq!(top.height(&config), 5.0, epsilon = 1e-12);

        let bottom = KinematicState {
            time: 2.0,
            distance: 10.0,
            speed: 3.0,
        };
        assert_relative_eq!(bottom.height(&config), 0.0);
        assert!(bottom.at_end(&config));
    }

    #[test]
    fn velocity_decomposition_preserves_magnitude() {
        let config = PhysicalConfig {
            angle_deg: 37.0,
            ..Default::default()
        };
        let s = KinematicState {
            time: 1.0,
            distance: 2.0,
            speed: 12.5,
        };
        let v = s.velocity(&config);
        assert_relative_eq!(v.norm(), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn vertical_rail_moves_straight_down() {
        let config = PhysicalConfig {
            angle_deg: 90.0,
            ..Default::default()
        };
        let s = KinematicState {
            time: 0.5,
            distance: 1.0,
            speed: 4.0,
        };
        let v = s.velocity(&config);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 4.0, epsilon = 1e-12);
    }
}
