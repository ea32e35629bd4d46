//! # Design Forces
//!
//! Combines dead load, live load and impact into one design UDL and takes the
//! simply-supported maxima:
//!
//! ```text
//! w     = w_DL + w_LL × (1 + I)
//! M_max = w L² / 8      (midspan)
//! V_max = w L / 2       (supports)
//! ```
//!
//! The stage reports as two sections, bending moment and shear force.
//! The footing stage reuses the design UDL.
//!
//! ## Example
//!
//! ```rust
//! use setu_core::calculations::design_forces::calculate;
//! use setu_core::units::{KnPerMeter, Meters};
//!
//! let forces = calculate(KnPerMeter(10.0), KnPerMeter(20.0), 0.25, Meters(12.0));
//! assert!((forces.total_udl.0 - 35.0).abs() < 1e-12);
//! assert!((forces.max_moment.0 - 630.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::plain;
use crate::equations::loads::{total_design_udl, uniform_load_max_moment, uniform_load_max_shear};
use crate::equations::Equation;
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{Kilonewtons, KnMeters, KnPerMeter, Meters, SiUnit};

/// Section title of the bending moment half
pub const BENDING_MOMENT_TITLE: &str = "Design Bending Moment (BM)";

/// Section title of the shear force half
pub const SHEAR_FORCE_TITLE: &str = "Design Shear Force (SF)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignForcesResult {
    pub dead_udl: KnPerMeter,
    pub live_udl: KnPerMeter,
    pub impact_factor: f64,
    pub span: Meters,
    /// w_LL × (1 + I)
    pub live_udl_with_impact: KnPerMeter,
    pub total_udl: KnPerMeter,
    pub max_moment: KnMeters,
    pub max_shear: Kilonewtons,
}

/// Combine the upstream loads and compute midspan moment and support shear.
pub fn calculate(dead_udl: KnPerMeter, live_udl: KnPerMeter, impact_factor: f64, span: Meters) -> DesignForcesResult {
    let total_udl = total_design_udl(dead_udl, live_udl, impact_factor);

    DesignForcesResult {
        dead_udl,
        live_udl,
        impact_factor,
        span,
        live_udl_with_impact: live_udl * (1.0 + impact_factor),
        total_udl,
        max_moment: uniform_load_max_moment(total_udl, span),
        max_shear: uniform_load_max_shear(total_udl, span),
    }
}

impl DesignForcesResult {
    pub fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("total design UDL", self.total_udl.0),
            ("max bending moment", self.max_moment.0),
            ("max shear force", self.max_shear.0),
        ]
    }

    pub fn bending_moment_section(&self) -> CalculationSection {
        let steps = vec![
            CalculationStep::from_equation(
                Equation::TotalDesignUdl,
                format!(
                    "{} + {} × (1 + {})",
                    fixed(self.dead_udl.0, 2),
                    fixed(self.live_udl.0, 2),
                    fixed(self.impact_factor, 3)
                ),
                fixed(self.total_udl.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::UniformLoadMaxMoment,
                format!("({} kN/m × {}m²) / 8", fixed(self.total_udl.0, 2), plain(self.span.0)),
                fixed(self.max_moment.0, 2),
            ),
        ];

        CalculationSection {
            title: BENDING_MOMENT_TITLE.to_string(),
            icon: SectionIcon::Sigma,
            steps,
            summary: Some(SectionSummary::new(
                "Max Bending Moment",
                SummaryValue::numeric(self.max_moment.0, 2, KnMeters::SYMBOL),
            )),
        }
    }

    pub fn shear_force_section(&self) -> CalculationSection {
        CalculationSection {
            title: SHEAR_FORCE_TITLE.to_string(),
            icon: SectionIcon::Scissors,
            steps: vec![CalculationStep::from_equation(
                Equation::UniformLoadMaxShear,
                format!("({} kN/m × {}m) / 2", fixed(self.total_udl.0, 2), plain(self.span.0)),
                fixed(self.max_shear.0, 2),
            )],
            summary: Some(SectionSummary::new(
                "Max Shear Force",
                SummaryValue::numeric(self.max_shear.0, 2, Kilonewtons::SYMBOL),
            )),
        }
    }
}
