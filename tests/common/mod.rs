#![allow(dead_code)]

use airdyn::MassState;
use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

/// A small helicopter with two mass stations, shared by the integration
/// tests.
pub fn light_helicopter_yaml() -> &'static str {
    r#"
name: light_helicopter
mass:
  empty_mass: 635.0
  inertia_tensor:
    - [1100.0, 0.0, -50.0]
    - [0.0, 1600.0, 0.0]
    - [-50.0, 0.0, 1900.0]
  center_of_mass: [0.0, 0.0, -0.3]
  variable_masses:
    - name: fuel
      input: fuel_mass
      mass_max: 114.0
      position: [-0.2, 0.0, -0.1]
    - name: pilot
      input: pilot_mass
      mass_max: 120.0
      position: [0.8, -0.4, -0.4]
propulsion:
  input: throttle
  max_thrust: 11000.0
  thrust_position: [0.0, 0.0, -1.2]
  thrust_axis: [0.0, 0.0, -1.0]
  spool_time_constant: 2.0
  main_rotor_speed: 42.0
  tail_rotor_gear_ratio: 6.2
"#
}

/// Assert that an aggregated mass state is physically sensible
#[track_caller]
pub fn assert_mass_state_valid(state: &MassState) {
    assert!(state.mass.is_finite(), "Mass is not finite");
    assert!(state.mass >= 0.0, "Mass is negative");
    assert!(
        state.center_of_mass.iter().all(|x| x.is_finite()),
        "Centre of mass contains non-finite values"
    );
    assert!(
        state.first_moment.iter().all(|x| x.is_finite()),
        "First moment contains non-finite values"
    );
    assert!(
        state.inertia_tensor.iter().all(|x| x.is_finite()),
        "Inertia tensor contains non-finite values"
    );
    // The tensor is symmetric by construction.
    let asymmetry = (state.inertia_tensor - state.inertia_tensor.transpose()).norm();
    assert!(
        asymmetry < 1e-9,
        "Inertia tensor asymmetry {} exceeds tolerance",
        asymmetry
    );
    assert!(
        state.force_bas.iter().all(|x| x.is_finite()),
        "Force contains non-finite values"
    );
    assert!(
        state.moment_bas.iter().all(|x| x.is_finite()),
        "Moment contains non-finite values"
    );
}

/// Assert that two vectors are approximately equal component-wise
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(
        actual.x,
        expected.x,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.y,
        expected.y,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.z,
        expected.z,
        epsilon = epsilon,
        max_relative = epsilon
    );
}

/// Assert that two matrices are approximately equal entry-wise
#[track_caller]
pub fn assert_matrix_eq(actual: &Matrix3<f64>, expected: &Matrix3<f64>, epsilon: f64) {
    for r in 0..3 {
        for c in 0..3 {
            assert_relative_eq!(
                actual[(r, c)],
                expected[(r, c)],
                epsilon = epsilon,
                max_relative = epsilon
            );
        }
    }
}
