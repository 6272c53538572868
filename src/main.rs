// src/main.rs

use std::env;
use std::error::Error;

use phasor_diagram_render::circuit_analysis::solve;
use phasor_diagram_render::constants::{DEFAULT_OUTPUT_FILENAME, OUTPUT_PATH_ENV_VAR};
use phasor_diagram_render::crate_version;
use phasor_diagram_render::measurements::CircuitMeasurements;
use phasor_diagram_render::plot_functions::plot_phasor_diagram::plot_phasor_diagram;
use phasor_diagram_render::report::print_report;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        return Ok(());
    }
    if args.iter().skip(1).any(|a| a == "--version" || a == "-V") {
        println!("{}", crate_version());
        return Ok(());
    }

    // Output path: positional argument, then environment override, then the
    // working-directory default.
    let output_path = args
        .get(1)
        .cloned()
        .or_else(|| env::var(OUTPUT_PATH_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILENAME.to_string());

    let measurements = CircuitMeasurements::default();
    let solution = solve(&measurements);

    plot_phasor_diagram(&measurements, &solution, &output_path)?;
    print_report(&measurements, &solution, &output_path);

    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage: {program} [OUTPUT_FILE.png]");
    println!();
    println!("Renders the series R-L phasor diagram for the compiled-in measurement");
    println!("set and prints the computed quantities.");
    println!();
    println!("The output path defaults to '{DEFAULT_OUTPUT_FILENAME}' in the current");
    println!("directory; set {OUTPUT_PATH_ENV_VAR} to override it without an argument.");
}
