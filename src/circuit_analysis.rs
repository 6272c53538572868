// src/circuit_analysis.rs

use std::f64::consts::PI;

use crate::measurements::CircuitMeasurements;
use crate::phasor::Phasor;

/// Quantities derived from one measurement set. Everything here is a pure
/// function of the inputs; no I/O, no state.
///
/// The current phasor is the phase reference, so the resistive drops lie on
/// the real axis and the inductive drop on the imaginary axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasorSolution {
    /// Angular frequency, 2*pi*f, in rad/s.
    pub omega: f64,
    /// Inductive reactance XL = omega*L, in ohms.
    pub reactance: f64,
    /// Resistive voltage drop inside the coil, Vr = I*r, in volts.
    pub v_coil_resistive: f64,
    /// Inductive voltage drop inside the coil, VL = I*XL, in volts.
    pub v_coil_inductive: f64,
    /// Phase angle between total voltage and current, in radians.
    pub phase_rad: f64,
    /// Phase angle in degrees.
    pub phase_deg: f64,
    /// sqrt(Vr^2 + VL^2), cross-check against the measured coil voltage.
    pub v_coil_calc: f64,
    /// sqrt((VR+Vr)^2 + VL^2), cross-check against the measured total voltage.
    pub v_total_calc: f64,
}

/// Derives the secondary quantities for one measurement set.
///
/// The phase angle is the literal `atan` of the quotient VL/(VR+Vr), not
/// `atan2`: a zero in-phase sum surfaces as the IEEE infinity or NaN angle
/// the quotient produces. That degenerate case is documented behavior, not
/// an error path.
pub fn solve(m: &CircuitMeasurements) -> PhasorSolution {
    let omega = 2.0 * PI * m.frequency;
    let reactance = omega * m.inductance;
    let v_coil_resistive = m.current * m.coil_resistance;
    let v_coil_inductive = m.current * reactance;

    let phase_rad = (v_coil_inductive / (m.v_resistor + v_coil_resistive)).atan();
    let phase_deg = phase_rad.to_degrees();

    let v_coil_calc = Phasor::new(v_coil_resistive, v_coil_inductive).magnitude();
    let v_total_calc =
        Phasor::new(m.v_resistor + v_coil_resistive, v_coil_inductive).magnitude();

    PhasorSolution {
        omega,
        reactance,
        v_coil_resistive,
        v_coil_inductive,
        phase_rad,
        phase_deg,
        v_coil_calc,
        v_total_calc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_derived_quantities_match_bench_data() {
        let s = solve(&CircuitMeasurements::default());
        assert!((s.omega - 314.159).abs() < 1e-2, "omega = {}", s.omega);
        assert!(
            (s.reactance - 69.115).abs() < 1e-2,
            "reactance = {}",
            s.reactance
        );
        assert!(
            (s.v_coil_resistive - 5.146).abs() < 1e-2,
            "Vr = {}",
            s.v_coil_resistive
        );
        assert!(
            (s.v_coil_inductive - 7.015).abs() < 1e-2,
            "VL = {}",
            s.v_coil_inductive
        );
        assert!(
            (s.phase_deg - 34.2).abs() < 0.1,
            "phase = {} deg",
            s.phase_deg
        );
    }

    #[test]
    fn test_cross_checks_against_measured_magnitudes() {
        let m = CircuitMeasurements::default();
        let s = solve(&m);
        assert!((s.v_total_calc - 12.48).abs() < 0.01);
        assert!((s.v_coil_calc - 8.70).abs() < 0.01);
        // Derived magnitudes sit close to the independent meter readings.
        assert!((s.v_total_calc - m.v_total).abs() < 0.1);
        assert!((s.v_coil_calc - m.v_coil).abs() < 0.1);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let m = CircuitMeasurements::default();
        assert_eq!(solve(&m), solve(&m));
    }

    #[test]
    fn test_external_resistance_is_informational() {
        let mut m = CircuitMeasurements::default();
        let baseline = solve(&m);
        m.resistance = 1000.0;
        assert_eq!(solve(&m), baseline);
    }

    #[test]
    fn test_zero_in_phase_sum_yields_undefined_angle() {
        // Nonzero inductive drop over a zero denominator: atan(+inf) = pi/2.
        let quadrature_only = CircuitMeasurements {
            v_resistor: 0.0,
            coil_resistance: 0.0,
            ..CircuitMeasurements::default()
        };
        let s = solve(&quadrature_only);
        assert!((s.phase_rad - FRAC_PI_2).abs() < 1e-12);

        // Zero over zero: NaN, propagated as-is.
        let dead_circuit = CircuitMeasurements {
            current: 0.0,
            v_resistor: 0.0,
            coil_resistance: 0.0,
            ..CircuitMeasurements::default()
        };
        assert!(solve(&dead_circuit).phase_rad.is_nan());
    }
}
