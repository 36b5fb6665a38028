//! Reallocates supply across the Wasit districts with both solvers.
//!
//! Run with `RUST_LOG=debug` to see solver progress.

use wasit_water::allocation::{AllocationAlgorithm, ProjectedGradient, WaterFilling};
use wasit_water::district::wasit_districts;
use wasit_water::{District, WaterAdvisor};

fn main() {
    env_logger::init();

    let districts = wasit_districts();

    println!("Water-filling allocation:");
    println!("=========================");
    match WaterFilling::default().allocate(&districts) {
        Ok(allocation) => {
            println!("{allocation}");
            if let Some(level) = allocation.water_level() {
                println!("uniform cut below demand: {level:.1} m³/day");
            }
        }
        Err(e) => eprintln!("allocation failed: {e}"),
    }
    println!();

    println!("Projected gradient from current allocation:");
    println!("===========================================");
    match ProjectedGradient::default().allocate(&districts) {
        Ok(allocation) => {
            println!("{allocation}");
            println!("converged in {} iterations", allocation.iterations());
        }
        Err(e) => eprintln!("allocation failed: {e}"),
    }
    println!();

    println!("Delivery rates:");
    println!("===============");
    let advisor = WaterAdvisor::wasit();
    let plan = advisor
        .optimize()
        .map_err(|e| e.to_string())
        .and_then(|allocation| advisor.delivery_plan(&allocation).map_err(|e| e.to_string()));
    match plan {
        Ok(plan) => {
            for line in plan {
                println!(
                    "{}: {:.1} m³ over {:.1} h -> {:.1} m³/h",
                    line.district, line.daily_volume, line.supply_hours, line.hourly_rate
                );
            }
        }
        Err(e) => eprintln!("delivery plan failed: {e}"),
    }
    println!();

    // Minimums that the pool cannot cover are reported, not approximated.
    let drought = vec![
        District::new("الكوت", 5000.0, 1000.0, 2500.0, 3000.0),
        District::new("الحي", 4000.0, 1000.0, 2000.0, 3400.0),
    ];
    match WaterFilling::default().allocate(&drought) {
        Ok(allocation) => println!("{allocation}"),
        Err(e) => println!("drought scenario rejected: {e}"),
    }
}
