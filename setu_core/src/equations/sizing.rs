//! # Preliminary Sizing Formulas
//!
//! Rule-of-thumb proportions for the substructure and foundation. These give
//! a starting geometry for detailed design, not a checked section.
//!
//! ```text
//!          HFL + freeboard ─────────────┐
//!                 ┌──┐                  │ H_pier
//!                 │  │ pier             │
//!   bed ──────────│  │──────────        │
//!              ┌──┴──┴──┐               │
//!   founding ──└────────┘───────────────┘
//!                 footing (B × B × D)
//! ```

use crate::units::{Kilonewtons, KnPerSqMeter, Meters, SquareMeters};

/// Reduction from carriageway width to pier width
pub const PIER_WIDTH_REDUCTION: Meters = Meters(1.0);

/// Carriageway width at or below which the pier takes the full width
pub const PIER_WIDTH_GUARD: Meters = Meters(2.0);

/// Span-to-thickness ratio for a solid pier
pub const PIER_SPAN_THICKNESS_RATIO: f64 = 12.0;

/// Abutment top width (m)
pub const ABUTMENT_TOP_WIDTH: Meters = Meters(0.6);

/// Base width as a fraction of abutment height (gravity section)
pub const ABUTMENT_BASE_RATIO: f64 = 0.45;

/// Assumed safe bearing capacity of the founding stratum (kN/m²)
pub const SAFE_BEARING_CAPACITY: KnPerSqMeter = KnPerSqMeter(250.0);

/// Assumed footing depth (m)
pub const FOOTING_DEPTH: Meters = Meters(1.2);

/// Pier height from founding level to the freeboard line,
/// H = (HFL + freeboard) - founding level
#[inline]
pub fn pier_height(hfl: Meters, freeboard: Meters, foundation_level: Meters) -> Meters {
    (hfl + freeboard) - foundation_level
}

/// Pier width across the carriageway, B - 1.0 while B > 2.0 m.
///
/// Narrower carriageways keep their width so the pier never goes below 1 m.
#[inline]
pub fn pier_width(carriageway_width: Meters) -> Meters {
    if carriageway_width > PIER_WIDTH_GUARD {
        carriageway_width - PIER_WIDTH_REDUCTION
    } else {
        carriageway_width
    }
}

/// Pier thickness along the span, t = L / 12
#[inline]
pub fn pier_thickness(span: Meters) -> Meters {
    span / PIER_SPAN_THICKNESS_RATIO
}

/// Abutment height from bed to deck soffit line,
/// H = (HFL + freeboard + slab thickness) - bed level
#[inline]
pub fn abutment_height(hfl: Meters, freeboard: Meters, slab_thickness: Meters, bed_level: Meters) -> Meters {
    (hfl + freeboard + slab_thickness) - bed_level
}

/// Abutment base width, b = 0.45 × H
#[inline]
pub fn abutment_base_width(height: Meters) -> Meters {
    height * ABUTMENT_BASE_RATIO
}

/// Required footing area, A = P / SBC
#[inline]
pub fn footing_area(load: Kilonewtons, sbc: KnPerSqMeter) -> SquareMeters {
    load.bearing_area(sbc)
}

/// Side of a square footing, B = √A
#[inline]
pub fn square_footing_side(area: SquareMeters) -> Meters {
    Meters::square_side(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pier_width_guard_boundary() {
        assert_eq!(pier_width(Meters(7.5)).0, 6.5);
        assert_eq!(pier_width(Meters(2.0)).0, 2.0);
        assert_eq!(pier_width(Meters(1.5)).0, 1.5);
        assert!((pier_width(Meters(2.01)).0 - 1.01).abs() < 1e-12);
    }

    #[test]
    fn test_pier_height() {
        let h = pier_height(Meters(100.0), Meters(1.2), Meters(90.0));
        assert!((h.0 - 11.2).abs() < 1e-9);
    }

    #[test]
    fn test_abutment() {
        let h = abutment_height(Meters(100.0), Meters(1.2), Meters(0.6), Meters(95.0));
        assert!((h.0 - 6.8).abs() < 1e-9);
        assert!((abutment_base_width(h).0 - 3.06).abs() < 1e-9);
    }

    #[test]
    fn test_footing() {
        let area = footing_area(Kilonewtons(4000.0), SAFE_BEARING_CAPACITY);
        assert_eq!(area.0, 16.0);
        assert_eq!(square_footing_side(area).0, 4.0);
    }
}
