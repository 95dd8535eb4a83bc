use nalgebra::{Matrix3, Vector3};
use std::f64::consts::{PI, TAU};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle into the principal range `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Inertia tensor of a point mass offset by `r` from the reference point:
/// `m * (|r|^2 * I - r * r^T)`, the translation term of the parallel-axis
/// theorem. Off-diagonal entries come out as the negated products of inertia.
pub fn point_mass_inertia(mass: f64, r: &Vector3<f64>) -> Matrix3<f64> {
    mass * (r.norm_squared() * Matrix3::identity() - r * r.transpose())
}
