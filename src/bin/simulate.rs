use airdyn::Aircraft;
use log::info;

const LIGHT_HELICOPTER: &str = r#"
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
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut aircraft = Aircraft::from_yaml(LIGHT_HELICOPTER)?;
    aircraft.initialize();

    aircraft.set_input("pilot_mass", 85.0)?;
    aircraft.set_input("fuel_mass", 110.0)?;
    aircraft.set_input("throttle", 1.0)?;

    // Run for a minute of flight, burning fuel at a steady 0.02 kg/s.
    let dt = 0.01;
    let mut fuel = 110.0;
    for step in 0..6000 {
        fuel -= 0.02 * dt;
        aircraft.set_input("fuel_mass", fuel)?;
        aircraft.step(dt);

        if step % 500 == 0 {
            info!(
                "t = {:5.2} s: mass {:7.2} kg, thrust {:8.1} N, rotor {:5.2} rad/s",
                aircraft.time(),
                aircraft.mass().total_mass(),
                aircraft.propulsion().thrust(),
                aircraft.propulsion().main_rotor().angular_rate()
            );
        }
    }

    let state = aircraft.mass().snapshot();
    println!("After {:.1} s:", aircraft.time());
    println!("  total mass       {:.2} kg", state.mass);
    println!(
        "  centre of mass   [{:.3}, {:.3}, {:.3}] m",
        state.center_of_mass.x, state.center_of_mass.y, state.center_of_mass.z
    );
    println!(
        "  net force        [{:.1}, {:.1}, {:.1}] N",
        aircraft.force_bas().x,
        aircraft.force_bas().y,
        aircraft.force_bas().z
    );
    println!(
        "  main rotor at {:.2} rad, tail rotor at {:.2} rad",
        aircraft.propulsion().main_rotor().azimuth(),
        aircraft.propulsion().tail_rotor().azimuth()
    );

    Ok(())
}
