//! Courant Stability Sweep
//!
//! Marches the same injection pulse under several Courant pairs, from
//! comfortably stable to far beyond the explicit limits, and reports what
//! the trajectory looks like in each case. Instability is never an error
//! here: the unstable runs complete and show their oscillation and
//! divergence in the numbers.
//!
//! Run with: cargo run --example stability_sweep

use std::error::Error;
use tracer_rs::{
    models::{AdvectionDiffusion, InitialInjection},
    physics::{ChannelGeometry, CourantNumbers},
    solver::{ExplicitMarch, Scenario, Solver, SolverConfiguration},
};

/// One sweep entry: velocity and diffusivity at dx = dt = 1.
struct SweepCase {
    label: &'static str,
    velocity: f64,
    diffusivity: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Courant Stability Sweep ===\n");

    let cases = [
        SweepCase {
            label: "stable reference",
            velocity: 0.1,
            diffusivity: 0.01,
        },
        SweepCase {
            label: "diffusion-dominated unstable",
            velocity: 0.001,
            diffusivity: 1.0,
        },
        SweepCase {
            label: "advection-dominated unstable",
            velocity: 3.0,
            diffusivity: 10.0,
        },
    ];

    let dx = 1.0;
    let dt = 1.0;
    let time_steps = 1000;
    let solver = ExplicitMarch::new();
    let config = SolverConfiguration::fixed_step(dt, time_steps);

    for case in &cases {
        let courant = CourantNumbers::new(case.velocity, case.diffusivity, dx, dt);

        println!("--- {} ---", case.label);
        println!("  U = {} m/s, D = {} m²/s", case.velocity, case.diffusivity);
        println!("  {}", courant);
        println!(
            "  Advection limit (Ca ≤ 1): {}",
            if courant.is_advection_stable() { "ok" } else { "VIOLATED" }
        );
        println!(
            "  Diffusion limit (Cd ≤ 0.5): {}",
            if courant.is_diffusion_stable() { "ok" } else { "VIOLATED" }
        );

        let geometry = ChannelGeometry::new(100.0, 5.0, 1.0, dx);
        let model = AdvectionDiffusion::new(
            geometry,
            case.velocity,
            case.diffusivity,
            dt,
            InitialInjection::pulse(10, 1.0),
        );
        let scenario = Scenario::new(Box::new(model));

        let result = solver.solve(&scenario, &config)?;

        // Describe what came out
        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        let mut non_finite = 0usize;
        for profile in &result.profiles {
            for &v in profile.iter() {
                if v.is_finite() {
                    min_value = min_value.min(v);
                    max_value = max_value.max(v);
                } else {
                    non_finite += 1;
                }
            }
        }

        let mass = result.mass_history();
        println!("  Marched {} steps", result.len());
        println!("  Value range: [{:.3e}, {:.3e}]", min_value, max_value);
        println!("  Non-finite cells: {}", non_finite);
        println!("  Mass at t=0: {:.6}, at t=999: {:.6e}", mass[0], mass[999]);

        if min_value < 0.0 {
            println!("  → Negative concentrations: the march oscillates");
        }
        if max_value > 1.0 || non_finite > 0 {
            println!("  → Magnitudes diverge: the march is unstable");
        }
        println!();
    }

    println!("=== Sweep Complete ===");
    Ok(())
}
