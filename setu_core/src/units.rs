//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in bridge design. These are thin
//! `f64` newtypes that serialize as plain numbers.
//!
//! ## SI Units
//!
//! Setu works in the units of the Indian Roads Congress codes:
//! - Length / elevation: metres (m)
//! - Force: kilonewtons (kN)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Moment: kilonewton-metres (kN-m)
//! - Pressure / bearing: kilonewtons per square metre (kN/m²)
//! - Discharge: cubic metres per second (m³/s)
//!
//! ## Example
//!
//! ```rust
//! use setu_core::units::{Kilonewtons, KnPerMeter, Meters, SiUnit};
//!
//! let total = Kilonewtons(1818.0);
//! let udl: KnPerMeter = total.per_length(Meters(15.0));
//! assert!((udl.0 - 121.2).abs() < 1e-9);
//! assert_eq!(KnPerMeter::SYMBOL, "kN/m");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A unit with a fixed display symbol.
pub trait SiUnit {
    /// Symbol as printed in calculation reports
    const SYMBOL: &'static str;
}

// ============================================================================
// Geometry
// ============================================================================

/// Length or elevation in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl Meters {
    /// Square root of an area gives the side of an equivalent square
    pub fn square_side(area: SquareMeters) -> Meters {
        Meters(area.0.sqrt())
    }
}

// ============================================================================
// Forces and Moments
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Uniformly distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerMeter(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnMeters(pub f64);

/// Pressure in kilonewtons per square metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerSqMeter(pub f64);

impl Kilonewtons {
    /// Spread a total load evenly over a length
    pub fn per_length(self, length: Meters) -> KnPerMeter {
        KnPerMeter(self.0 / length.0)
    }

    /// Area needed to carry this load at the given allowable pressure
    pub fn bearing_area(self, pressure: KnPerSqMeter) -> SquareMeters {
        SquareMeters(self.0 / pressure.0)
    }
}

impl KnPerMeter {
    /// Total load over a length
    pub fn over_length(self, length: Meters) -> Kilonewtons {
        Kilonewtons(self.0 * length.0)
    }
}

// ============================================================================
// Hydraulics
// ============================================================================

/// Discharge in cubic metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerSec(pub f64);

/// Velocity in metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSec(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_unit {
    ($type:ty, $symbol:expr) => {
        impl SiUnit for $type {
            const SYMBOL: &'static str = $symbol;
        }

        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_unit!(Meters, "m");
impl_unit!(SquareMeters, "m²");
impl_unit!(Kilonewtons, "kN");
impl_unit!(KnPerMeter, "kN/m");
impl_unit!(KnMeters, "kN-m");
impl_unit!(KnPerSqMeter, "kN/m²");
impl_unit!(CubicMetersPerSec, "m³/s");
impl_unit!(MetersPerSec, "m/s");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_length() {
        let udl = Kilonewtons(235.0).per_length(Meters(15.0));
        assert!((udl.0 - 15.6667).abs() < 1e-3);
        assert!((udl.over_length(Meters(15.0)).0 - 235.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_area_and_side() {
        let area = Kilonewtons(2500.0).bearing_area(KnPerSqMeter(250.0));
        assert_eq!(area.0, 10.0);
        let side = Meters::square_side(SquareMeters(16.0));
        assert_eq!(side.0, 4.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(2.5);
        assert_eq!((a + b).0, 12.5);
        assert_eq!((a - b).0, 7.5);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 4.0).value(), 2.5);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(CubicMetersPerSec::SYMBOL, "m³/s");
        assert_eq!(KnMeters::SYMBOL, "kN-m");
    }

    #[test]
    fn test_serialization() {
        let q = CubicMetersPerSec(128.72);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "128.72");

        let roundtrip: CubicMetersPerSec = serde_json::from_str(&json).unwrap();
        assert_eq!(q, roundtrip);
    }
}
