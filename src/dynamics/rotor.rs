use crate::utils::normalize_angle;

/// Azimuth and angular rate of a spinning rotor.
///
/// The azimuth is advanced by plain integration and kept in `[0, 2π)` so
/// it can feed blade-position dependent models without unbounded growth.
#[derive(Debug, Clone, Default)]
pub struct RotorKinematics {
    azimuth: f64,
    angular_rate: f64,
}

impl RotorKinematics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current azimuth (rad), in `[0, 2π)`.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Current angular rate (rad/s), positive in the spin direction.
    pub fn angular_rate(&self) -> f64 {
        self.angular_rate
    }

    /// Sets the angular rate for subsequent updates. Non-finite rates are
    /// ignored.
    pub fn set_angular_rate(&mut self, rate: f64) {
        if rate.is_finite() {
            self.angular_rate = rate;
        }
    }

    /// Places the rotor at the given azimuth, wrapped into `[0, 2π)`.
    pub fn set_azimuth(&mut self, azimuth: f64) {
        if azimuth.is_finite() {
            self.azimuth = normalize_angle(azimuth);
        }
    }

    /// Advances the azimuth by one step at the current rate. Steps with
    /// non-positive or non-finite `dt` leave the state untouched.
    pub fn update(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let advanced = self.azimuth + self.angular_rate * dt;
        if advanced.is_finite() {
            self.azimuth = normalize_angle(advanced);
        }
    }
}
