use rail_sim::{PhysicalConfig, Simulation};

fn main() {
    env_logger::init();

    // -----------------------------------------------------------------------
    // Scenario: steel sphere on a 10 m aluminium rail at 30 degrees
    // -----------------------------------------------------------------------
    let config = PhysicalConfig {
        angle_deg: 30.0,
        rail_length: 10.0,
        gravity: 9.81,
        mass: 1.0,
        initial_velocity: 0.0,
        ..Default::default()
    };

    let mut sim = Simulation::new(config);
    sim.start();

    // -----------------------------------------------------------------------
    // Drive the run like a 100 Hz presentation layer would
    // -----------------------------------------------------------------------
    const FRAME_DT: f64 = 0.01;
    const MAX_SIM_TIME: f64 = 600.0;

    while !sim.finished() && sim.state().time < MAX_SIM_TIME {
        sim.advance(FRAME_DT);
    }

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let config = sim.config();
    println!();
    println!("====================================================================");
    println!("  INCLINED RAIL SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Angle:         {:>8.1} deg   Rail length:  {:>8.1} m",
        config.angle_deg, config.rail_length
    );
    println!(
        "  Gravity:       {:>8.2} m/s2  Mass:         {:>8.1} kg",
        config.gravity, config.mass
    );
    println!(
        "  Friction mu:   {:>8.2}       Drag Cd:      {:>8.2}",
        config.friction_coefficient, config.drag_coefficient
    );
    println!(
        "  Air density:   {:>8.3} kg/m3 Radius:       {:>8.2} m",
        config.air_density, config.sphere_radius
    );
    println!(
        "  Terminal vel.: {:>8.2} m/s   Timestep:     {:>8.4} s",
        config.terminal_velocity(),
        sim.dt()
    );
    println!();

    if let Some(summary) = sim.summary() {
        println!("  Run Summary");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  Descent time:  {:>8.2} s     Max speed:    {:>8.2} m/s",
            summary.duration, summary.max_speed
        );
        println!(
            "  Final KE:      {:>8.2} J     Final TE:     {:>8.2} J",
            summary.final_kinetic_energy, summary.final_total_energy
        );
        println!(
            "  Friction loss: {:>8.2} J     Drag loss:    {:>8.2} J",
            summary.friction_energy_loss, summary.drag_energy_loss
        );
        println!("  Samples:       {:>8}", summary.sample_count);
        println!();
    }

    // -----------------------------------------------------------------------
    // Sample table (thinned to ~30 rows, first and last always shown)
    // -----------------------------------------------------------------------
    let samples = sim.samples();
    println!("  Recorded Samples");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>5}  {:>6}  {:>7}  {:>7}  {:>7}  {:>6}  {:>6}  {:>6}  {:>6}",
        "t(s)", "h(m)", "v(m/s)", "a", "Fg(N)", "Fric", "Drag", "PE(J)", "KE(J)", "TE(J)",
        "FricL", "DragL", "Hvel", "Vvel"
    );
    println!("  {}", "─".repeat(100));

    let thin = (samples.len() / 30).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % thin != 0 && i != samples.len() - 1 {
            continue;
        }
        println!(
            "  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.2}  {:>5.2}  {:>6.3}  {:>7.2}  {:>7.2}  {:>7.2}  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.2}",
            s.time,
            s.height,
            s.speed,
            s.acceleration,
            s.gravity_parallel_force,
            s.friction_force,
            s.drag_force,
            s.potential_energy,
            s.kinetic_energy,
            s.total_energy,
            s.friction_energy_loss,
            s.drag_energy_loss,
            s.horizontal_velocity,
            s.vertical_velocity,
        );
    }

    println!();
    println!(
        "  Run: {} samples, t={:.2} s, dt={} s",
        samples.len(),
        sim.state().time,
        sim.dt()
    );
    println!("====================================================================");
    println!();
}
