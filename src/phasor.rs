// src/phasor.rs

use num_complex::Complex64;
use std::ops::Add;

/// A phasor: the complex-plane representation of a sinusoidal quantity's
/// magnitude and phase. The real axis carries the in-phase (resistive)
/// component, the imaginary axis the quadrature (reactive) component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor(Complex64);

impl Phasor {
    pub fn new(re: f64, im: f64) -> Self {
        Phasor(Complex64::new(re, im))
    }

    pub fn from_polar(magnitude: f64, angle_rad: f64) -> Self {
        Phasor(Complex64::from_polar(magnitude, angle_rad))
    }

    pub fn re(&self) -> f64 {
        self.0.re
    }

    pub fn im(&self) -> f64 {
        self.0.im
    }

    /// Euclidean magnitude of the phasor.
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Angle from the positive real axis, in radians.
    pub fn angle_rad(&self) -> f64 {
        self.0.arg()
    }

    /// Cartesian endpoint when the phasor is drawn from `origin`.
    pub fn tip_from(&self, origin: (f64, f64)) -> (f64, f64) {
        (origin.0 + self.0.re, origin.1 + self.0.im)
    }
}

impl Add for Phasor {
    type Output = Phasor;

    fn add(self, rhs: Phasor) -> Phasor {
        Phasor(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_magnitude_and_angle() {
        let p = Phasor::new(3.0, 4.0);
        assert!((p.magnitude() - 5.0).abs() < 1e-12);

        let q = Phasor::new(1.0, 1.0);
        assert!((q.angle_rad() - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_from_polar() {
        let p = Phasor::from_polar(2.0, FRAC_PI_2);
        assert!(p.re().abs() < 1e-12);
        assert!((p.im() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_addition_is_componentwise() {
        let sum = Phasor::new(5.18, 0.0) + Phasor::new(5.15, 0.0) + Phasor::new(0.0, 7.02);
        assert!((sum.re() - 10.33).abs() < 1e-12);
        assert!((sum.im() - 7.02).abs() < 1e-12);
    }

    #[test]
    fn test_tip_from_offsets_origin() {
        let p = Phasor::new(0.0, 7.0);
        assert_eq!(p.tip_from((10.3, 0.0)), (10.3, 7.0));
    }
}
