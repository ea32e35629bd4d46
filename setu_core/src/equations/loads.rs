//! # Load and Internal Force Formulas
//!
//! Dead load, IRC vehicle live load, impact and the simply-supported
//! uniform-load results used for the deck.
//!
//! ## Notation
//!
//! - `L` = Effective span (m)
//! - `B` = Carriageway width (m)
//! - `t` = Thickness (m)
//! - `γ` = Unit weight (kN/m³)
//! - `w` = Uniform load intensity (kN/m)
//! - `I` = Impact factor (dimensionless)
//!
//! ## References
//!
//! - IRC:6-2017 Standard Specifications and Code of Practice for Road Bridges, Section II
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

use crate::materials::UnitWeight;
use crate::units::{Kilonewtons, KnMeters, KnPerMeter, Meters};

// =============================================================================
// DEAD LOAD
// =============================================================================

/// Span-to-depth ratio of the preliminary slab thickness heuristic.
///
/// Shared by the dead load, deck and abutment stages.
pub const SLAB_SPAN_DEPTH_RATIO: f64 = 25.0;

/// Bituminous wearing coat thickness (80 mm)
pub const WEARING_COAT_THICKNESS: Meters = Meters(0.08);

/// Preliminary deck slab thickness t = L / 25
///
/// # Example
/// ```rust
/// use setu_core::equations::loads::slab_thickness;
/// use setu_core::units::Meters;
///
/// assert!((slab_thickness(Meters(15.0)).0 - 0.6).abs() < 1e-12);
/// ```
#[inline]
pub fn slab_thickness(span: Meters) -> Meters {
    Meters(span.0 / SLAB_SPAN_DEPTH_RATIO)
}

/// Weight of a rectangular plate W = (t × L × B) × γ
#[inline]
pub fn plate_weight(thickness: Meters, span: Meters, width: Meters, unit_weight: UnitWeight) -> Kilonewtons {
    Kilonewtons(thickness.0 * span.0 * width.0 * unit_weight.0)
}

// =============================================================================
// LIVE LOAD
// =============================================================================

/// Simplified Class A lane load (kN/m)
pub const CLASS_A_UDL: KnPerMeter = KnPerMeter(9.0);

/// Simplified Class A knife-edge load (kN)
pub const KNIFE_EDGE_LOAD: Kilonewtons = Kilonewtons(100.0);

/// Class AA tracked vehicle, lumped (kN)
pub const CLASS_AA_LOAD: Kilonewtons = Kilonewtons(700.0);

/// Total Class A live load on the span: w × L + P_ke
#[inline]
pub fn class_a_total_load(span: Meters) -> Kilonewtons {
    CLASS_A_UDL.over_length(span) + KNIFE_EDGE_LOAD
}

// =============================================================================
// IMPACT
// =============================================================================

/// Impact factor for RCC bridges, I = 4.5 / (6 + L) (IRC:6 Cl. 209.2)
///
/// Applied to every bridge type.
///
/// # Example
/// ```rust
/// use setu_core::equations::loads::impact_factor;
/// use setu_core::units::Meters;
///
/// let i = impact_factor(Meters(15.0));
/// assert!((i - 0.2142857).abs() < 1e-6);
/// ```
#[inline]
pub fn impact_factor(span: Meters) -> f64 {
    4.5 / (6.0 + span.0)
}

// =============================================================================
// DESIGN FORCES (simply-supported, full-span UDL)
// =============================================================================

/// Combined design load w = w_DL + w_LL × (1 + I)
#[inline]
pub fn total_design_udl(dead: KnPerMeter, live: KnPerMeter, impact: f64) -> KnPerMeter {
    dead + live * (1.0 + impact)
}

/// Maximum moment at midspan, M_max = wL²/8 (Roark's Table 8.1, Case 2a)
#[inline]
pub fn uniform_load_max_moment(w: KnPerMeter, span: Meters) -> KnMeters {
    KnMeters(w.0 * span.0.powi(2) / 8.0)
}

/// Maximum shear at the supports, V_max = wL/2
#[inline]
pub fn uniform_load_max_shear(w: KnPerMeter, span: Meters) -> Kilonewtons {
    Kilonewtons(w.0 * span.0 / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{CONCRETE_DENSITY, WEARING_COAT_DENSITY};

    #[test]
    fn test_plate_weights() {
        let span = Meters(15.0);
        let width = Meters(7.5);
        let slab = plate_weight(slab_thickness(span), span, width, CONCRETE_DENSITY);
        let coat = plate_weight(WEARING_COAT_THICKNESS, span, width, WEARING_COAT_DENSITY);
        assert!((slab.0 - 1620.0).abs() < 1e-9);
        assert!((coat.0 - 198.0).abs() < 1e-9);
    }

    #[test]
    fn test_class_a_total() {
        assert!((class_a_total_load(Meters(15.0)).0 - 235.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_load_results() {
        let w = KnPerMeter(10.0);
        assert!((uniform_load_max_moment(w, Meters(12.0)).0 - 180.0).abs() < 1e-12);
        assert!((uniform_load_max_shear(w, Meters(12.0)).0 - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_design_udl() {
        let w = total_design_udl(KnPerMeter(10.0), KnPerMeter(20.0), 0.25);
        assert!((w.0 - 35.0).abs() < 1e-12);
    }
}
