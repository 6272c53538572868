// src/report.rs

use crate::circuit_analysis::PhasorSolution;
use crate::measurements::CircuitMeasurements;

/// Assembles the stdout summary in its fixed order: success line, blank
/// separator, header, then the computed quantities.
pub fn report_lines(
    m: &CircuitMeasurements,
    s: &PhasorSolution,
    output_path: &str,
) -> Vec<String> {
    vec![
        format!("Phasor diagram written to '{output_path}'"),
        String::new(),
        "Computed values:".to_string(),
        format!("Vr = {:.2} V", s.v_coil_resistive),
        format!("VL = {:.2} V", s.v_coil_inductive),
        format!(
            "VZL calculated = sqrt(Vr^2 + VL^2) = {:.2} V (measured: {} V)",
            s.v_coil_calc, m.v_coil
        ),
        format!(
            "VT calculated = sqrt((VR+Vr)^2 + VL^2) = {:.2} V (measured: {} V)",
            s.v_total_calc, m.v_total
        ),
        format!("Phase angle phi = {:.1} degrees", s.phase_deg),
    ]
}

pub fn print_report(m: &CircuitMeasurements, s: &PhasorSolution, output_path: &str) {
    for line in report_lines(m, s, output_path) {
        println!("{line}");
    }
}
