pub const GRAVITY: f64 = 9.80665; // m/s^2

// Guard below which a total mass is considered degenerate
pub const MIN_TOTAL_MASS: f64 = 1.0e-9; // kg
