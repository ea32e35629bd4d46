//! # Hydraulic Formulas
//!
//! Empirical regime equations for flood discharge, waterway and scour.
//!
//! ## Notation
//!
//! - `A` = Catchment area (km²)
//! - `Q` = Design flood discharge (m³/s)
//! - `W` = Linear waterway (m)
//! - `d` = Flow depth, HFL - bed level (m)
//! - `q` = Discharge per metre width (m³/s/m)
//! - `f` = Lacey's silt factor
//!
//! ## References
//!
//! - IRC:5 / IRC SP:13 Guidelines for the Design of Small Bridges and Culverts
//! - IRC:78-2014 Foundations and Substructure, Section 703

use crate::units::{CubicMetersPerSec, Meters, MetersPerSec};

/// Dicken's coefficient for a region with 25-50 cm annual rainfall
pub const DICKENS_COEFFICIENT: f64 = 11.5;

/// Lacey's regime width coefficient
pub const LACEY_WIDTH_COEFFICIENT: f64 = 4.75;

/// Lacey's scour depth coefficient
pub const LACEY_SCOUR_COEFFICIENT: f64 = 1.35;

/// Design scour multiplier at piers and abutments (IRC:78 Cl. 703.3)
pub const PIER_SCOUR_MULTIPLIER: f64 = 2.0;

/// Minimum vertical clearance above HFL (IRC:78 Cl. 705.3)
pub const MIN_FREEBOARD: Meters = Meters(1.2);

/// Maximum flood discharge by Dicken's formula, Q = C × A^(3/4)
///
/// # Example
/// ```rust
/// use setu_core::equations::hydraulics::dickens_discharge;
///
/// let q = dickens_discharge(25.0);
/// assert!((q.0 - 11.5 * 25.0_f64.powf(0.75)).abs() < 1e-9);
/// ```
#[inline]
pub fn dickens_discharge(catchment_area_km2: f64) -> CubicMetersPerSec {
    CubicMetersPerSec(DICKENS_COEFFICIENT * catchment_area_km2.powf(0.75))
}

/// Lacey's regime waterway width, W = 4.75 × √Q
#[inline]
pub fn lacey_waterway_width(discharge: CubicMetersPerSec) -> Meters {
    Meters(LACEY_WIDTH_COEFFICIENT * discharge.0.sqrt())
}

/// Mean velocity from continuity, V = Q / (W × d)
#[inline]
pub fn mean_velocity(discharge: CubicMetersPerSec, waterway: Meters, depth: Meters) -> MetersPerSec {
    MetersPerSec(discharge.0 / (waterway.0 * depth.0))
}

/// Discharge intensity, q = Q / W
#[inline]
pub fn discharge_per_metre(discharge: CubicMetersPerSec, waterway: Meters) -> f64 {
    discharge.0 / waterway.0
}

/// Lacey's normal scour depth, R = 1.35 × (q² / f)^(1/3)
#[inline]
pub fn lacey_normal_scour_depth(discharge_per_metre: f64, silt_factor: f64) -> Meters {
    Meters(LACEY_SCOUR_COEFFICIENT * (discharge_per_metre.powi(2) / silt_factor).powf(1.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waterway_and_velocity() {
        let q = CubicMetersPerSec(100.0);
        let w = lacey_waterway_width(q);
        assert!((w.0 - 47.5).abs() < 1e-12);
        let v = mean_velocity(q, w, Meters(2.0));
        assert!((v.0 - 100.0 / 95.0).abs() < 1e-12);
    }

    #[test]
    fn test_scour_depth() {
        // q = 8 m³/s/m, f = 1 -> (64)^(1/3) = 4
        let r = lacey_normal_scour_depth(8.0, 1.0);
        assert!((r.0 - 5.4).abs() < 1e-9);
    }

    #[test]
    fn test_coarser_silt_reduces_scour() {
        let fine = lacey_normal_scour_depth(3.0, 0.5);
        let coarse = lacey_normal_scour_depth(3.0, 2.5);
        assert!(coarse < fine);
    }
}
