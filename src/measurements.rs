// src/measurements.rs

use crate::constants::{
    DEFAULT_COIL_RESISTANCE_OHM, DEFAULT_CURRENT_A, DEFAULT_FREQUENCY_HZ, DEFAULT_INDUCTANCE_H,
    DEFAULT_RESISTANCE_OHM, DEFAULT_V_COIL, DEFAULT_V_RESISTOR, DEFAULT_V_TOTAL,
};

/// One bench data set for a series R-L circuit: an external resistor in
/// series with a real coil (internal resistance plus inductance), driven at
/// line frequency. Values are immutable once constructed; no validation is
/// performed on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitMeasurements {
    /// Measured circuit current I, in amperes.
    pub current: f64,
    /// Measured voltage across the external resistor (VR), in volts.
    pub v_resistor: f64,
    /// Measured voltage across the coil (VZL), in volts.
    pub v_coil: f64,
    /// Measured total circuit voltage (VT), in volts.
    pub v_total: f64,
    /// External resistor value R, in ohms. Informational only; the
    /// computation never reads it.
    pub resistance: f64,
    /// Coil internal resistance r, in ohms.
    pub coil_resistance: f64,
    /// Coil inductance L, in henries.
    pub inductance: f64,
    /// Line frequency f, in hertz.
    pub frequency: f64,
}

impl Default for CircuitMeasurements {
    fn default() -> Self {
        CircuitMeasurements {
            current: DEFAULT_CURRENT_A,
            v_resistor: DEFAULT_V_RESISTOR,
            v_coil: DEFAULT_V_COIL,
            v_total: DEFAULT_V_TOTAL,
            resistance: DEFAULT_RESISTANCE_OHM,
            coil_resistance: DEFAULT_COIL_RESISTANCE_OHM,
            inductance: DEFAULT_INDUCTANCE_H,
            frequency: DEFAULT_FREQUENCY_HZ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_bench_data() {
        let m = CircuitMeasurements::default();
        assert_eq!(m.current, 0.1015);
        assert_eq!(m.v_resistor, 5.18);
        assert_eq!(m.v_coil, 8.75);
        assert_eq!(m.v_total, 12.55);
        assert_eq!(m.frequency, 50.0);
    }
}
