use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Filter time constant must be positive and finite, got {0}")]
    InvalidTimeConstant(f64),
}

/// First-order lag element `G(s) = 1 / (T*s + 1)` discretized with the
/// bilinear (Tustin) transform.
///
/// The discrete update is
///
/// ```text
/// y[n] = (u[n] + u[n-1]) * dt*c / (2 + dt*c)
///      + y[n-1] * (2 - dt*c) / (2 + dt*c)
/// ```
///
/// with `c = 1/T`. Steady-state gain is exactly 1 for any `dt > 0`, and the
/// step response is monotonic as long as `dt <= 2*T`. Larger steps remain
/// stable but ring around the final value.
#[derive(Debug, Clone)]
pub struct Lag {
    time_constant: f64,
    value: f64,
    previous_input: f64,
    previous_output: f64,
}

impl Default for Lag {
    fn default() -> Self {
        Self {
            time_constant: 1.0,
            value: 0.0,
            previous_input: 0.0,
            previous_output: 0.0,
        }
    }
}

impl Lag {
    /// Creates a lag with the given time constant, starting at rest.
    pub fn new(time_constant: f64) -> Result<Self, FilterError> {
        if !time_constant.is_finite() || time_constant <= 0.0 {
            return Err(FilterError::InvalidTimeConstant(time_constant));
        }
        Ok(Self {
            time_constant,
            ..Self::default()
        })
    }

    /// Creates a lag already settled at `value`.
    pub fn with_value(time_constant: f64, value: f64) -> Result<Self, FilterError> {
        let mut lag = Self::new(time_constant)?;
        lag.set_value(value);
        Ok(lag)
    }

    pub fn time_constant(&self) -> f64 {
        self.time_constant
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the time constant, keeping the current output and memory.
    pub fn set_time_constant(&mut self, time_constant: f64) -> Result<(), FilterError> {
        if !time_constant.is_finite() || time_constant <= 0.0 {
            return Err(FilterError::InvalidTimeConstant(time_constant));
        }
        self.time_constant = time_constant;
        Ok(())
    }

    /// Forces the output to `value` and rewrites the memory so the filter is
    /// in equilibrium there. A subsequent constant input equal to `value`
    /// leaves the output unchanged.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.previous_input = value;
        self.previous_output = value;
    }

    /// Returns the filter to its at-rest state, output zero.
    pub fn reset(&mut self) {
        self.set_value(0.0);
    }

    /// Advances the filter by one step of `dt` seconds toward `input`.
    ///
    /// Steps with non-positive or non-finite `dt`, or a non-finite `input`,
    /// leave the state untouched.
    pub fn update(&mut self, input: f64, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 || !input.is_finite() {
            return;
        }

        let c = 1.0 / self.time_constant;
        let denom = 2.0 + dt * c;
        self.value = (input + self.previous_input) * (dt * c / denom)
            + self.previous_output * ((2.0 - dt * c) / denom);

        self.previous_input = input;
        self.previous_output = self.value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_bad_time_constant() {
        assert!(Lag::new(0.0).is_err());
        assert!(Lag::new(-1.0).is_err());
        assert!(Lag::new(f64::NAN).is_err());
        assert!(Lag::new(f64::INFINITY).is_err());
        assert!(Lag::new(0.5).is_ok());

        let mut lag = Lag::new(0.5).unwrap();
        assert!(lag.set_time_constant(-2.0).is_err());
        assert_relative_eq!(lag.time_constant(), 0.5);
        lag.set_time_constant(3.0).unwrap();
        assert_relative_eq!(lag.time_constant(), 3.0);
    }

    #[test]
    fn test_degenerate_steps_are_no_ops() {
        let mut lag = Lag::new(1.0).unwrap();
        lag.set_value(0.25);

        lag.update(1.0, 0.0);
        assert_relative_eq!(lag.value(), 0.25);
        lag.update(1.0, -0.1);
        assert_relative_eq!(lag.value(), 0.25);
        lag.update(1.0, f64::NAN);
        assert_relative_eq!(lag.value(), 0.25);
        lag.update(f64::NAN, 0.01);
        assert_relative_eq!(lag.value(), 0.25);
        lag.update(f64::INFINITY, 0.01);
        assert_relative_eq!(lag.value(), 0.25);

        // A sane step afterwards still behaves
        lag.update(0.25, 0.01);
        assert_relative_eq!(lag.value(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_step_response_settles() {
        // After five time constants the response should be within 1% of the
        // commanded value.
        let mut lag = Lag::new(2.0).unwrap();
        let dt = 0.01;
        let steps = (5.0 * 2.0 / dt) as usize;
        for _ in 0..steps {
            lag.update(1.0, dt);
        }
        assert!((lag.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_step_response_is_monotonic() {
        // For dt well below 2T the discrete pole is positive and the step
        // response rises without overshoot.
        let mut lag = Lag::new(0.5).unwrap();
        let mut previous = lag.value();
        for _ in 0..2000 {
            lag.update(1.0, 0.005);
            assert!(lag.value() >= previous - 1e-15);
            assert!(lag.value() <= 1.0 + 1e-12);
            previous = lag.value();
        }
    }

    #[test]
    fn test_seeded_equilibrium_holds() {
        let mut lag = Lag::with_value(1.5, 42.0).unwrap();
        for _ in 0..100 {
            lag.update(42.0, 0.02);
            assert_relative_eq!(lag.value(), 42.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reset_returns_to_rest() {
        let mut lag = Lag::new(1.0).unwrap();
        for _ in 0..50 {
            lag.update(3.0, 0.05);
        }
        assert!(lag.value() > 0.0);
        lag.reset();
        assert_relative_eq!(lag.value(), 0.0);
        lag.update(0.0, 0.05);
        assert_relative_eq!(lag.value(), 0.0);
    }

    #[test]
    fn test_large_step_remains_stable() {
        // dt > 2T flips the pole sign; output oscillates but converges.
        let mut lag = Lag::new(0.1).unwrap();
        for _ in 0..200 {
            lag.update(1.0, 1.0);
        }
        assert_relative_eq!(lag.value(), 1.0, epsilon = 1e-6);
    }
}
