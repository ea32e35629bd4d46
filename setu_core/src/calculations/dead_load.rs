//! # Dead Load
//!
//! Self-weight of a solid RCC deck slab plus an 80 mm wearing coat, spread
//! along the span as a uniform load.
//!
//! ## Assumptions
//!
//! - Slab thickness from the L/25 rule
//! - Slab and coat cover the full carriageway width
//! - Kerbs, railings and services neglected
//!
//! ## Example
//!
//! ```rust
//! use setu_core::calculations::dead_load::calculate;
//! use setu_core::input::BridgeDesignInput;
//!
//! let result = calculate(&BridgeDesignInput::default());
//! assert!((result.udl.0 - 121.2).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::loads::{plate_weight, slab_thickness, WEARING_COAT_THICKNESS};
use crate::equations::Equation;
use crate::input::BridgeDesignInput;
use crate::materials::{CONCRETE_DENSITY, WEARING_COAT_DENSITY};
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{Kilonewtons, KnPerMeter, Meters, SiUnit};

/// Dead load of the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadLoadResult {
    pub span: Meters,
    pub width: Meters,
    pub slab_thickness: Meters,
    pub slab_weight: Kilonewtons,
    pub wearing_coat_weight: Kilonewtons,
    pub total: Kilonewtons,
    /// Total dead load per metre of span
    pub udl: KnPerMeter,
}

/// Compute the deck dead load.
pub fn calculate(input: &BridgeDesignInput) -> DeadLoadResult {
    let span = Meters(input.span_length);
    let width = Meters(input.carriageway_width);

    let thickness = slab_thickness(span);
    let slab_weight = plate_weight(thickness, span, width, CONCRETE_DENSITY);
    let wearing_coat_weight = plate_weight(WEARING_COAT_THICKNESS, span, width, WEARING_COAT_DENSITY);
    let total = slab_weight + wearing_coat_weight;

    DeadLoadResult {
        span,
        width,
        slab_thickness: thickness,
        slab_weight,
        wearing_coat_weight,
        total,
        udl: total.per_length(span),
    }
}

impl StageReport for DeadLoadResult {
    const TITLE: &'static str = "Dead Load (DL)";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![("total dead load", self.total.0), ("dead load UDL", self.udl.0)]
    }

    fn to_section(&self) -> CalculationSection {
        let span = plain(self.span.0);
        let width = plain(self.width.0);

        let steps = vec![
            CalculationStep::from_equation(
                Equation::SlabSelfWeight,
                format!(
                    "({}m × {}m × {}m) × {} kN/m³",
                    fixed(self.slab_thickness.0, 2),
                    span,
                    width,
                    plain(CONCRETE_DENSITY.0)
                ),
                fixed(self.slab_weight.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::WearingCoatWeight,
                format!(
                    "({}m × {}m × {}m) × {} kN/m³",
                    plain(WEARING_COAT_THICKNESS.0),
                    span,
                    width,
                    plain(WEARING_COAT_DENSITY.0)
                ),
                fixed(self.wearing_coat_weight.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::TotalDeadLoad,
                format!(
                    "{} kN + {} kN",
                    fixed(self.slab_weight.0, 2),
                    fixed(self.wearing_coat_weight.0, 2)
                ),
                fixed(self.total.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::DeadLoadUdl,
                format!("{} kN / {} m", fixed(self.total.0, 2), span),
                fixed(self.udl.0, 2),
            ),
        ];

        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Scale,
            steps,
            summary: Some(SectionSummary::new(
                "Total Dead Load UDL",
                SummaryValue::numeric(self.udl.0, 2, KnPerMeter::SYMBOL),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_dead_load() {
        let result = calculate(&BridgeDesignInput::default());
        assert!((result.slab_thickness.0 - 0.6).abs() < 1e-12);
        assert!((result.slab_weight.0 - 1620.0).abs() < 1e-9);
        assert!((result.wearing_coat_weight.0 - 198.0).abs() < 1e-9);
        assert!((result.total.0 - 1818.0).abs() < 1e-9);
        assert!((result.udl.0 - 121.2).abs() < 1e-9);
    }

    #[test]
    fn test_section_strings() {
        let section = calculate(&BridgeDesignInput::default()).to_section();
        assert_eq!(section.title, "Dead Load (DL)");
        assert_eq!(section.steps.len(), 4);

        let slab = &section.steps[0];
        assert_eq!(slab.title, "Self-weight of RCC Slab");
        assert_eq!(slab.values, "(0.60m × 15m × 7.5m) × 24 kN/m³");
        assert_eq!(slab.result, "1620.00");
        assert_eq!(slab.clause, "IRC:6 - Cl. 204");

        assert_eq!(section.steps[1].values, "(0.08m × 15m × 7.5m) × 22 kN/m³");
        assert_eq!(section.steps[2].values, "1620.00 kN + 198.00 kN");
        assert_eq!(section.steps[3].values, "1818.00 kN / 15 m");
        assert_eq!(section.steps[3].unit, "kN/m");

        let summary = section.summary.unwrap();
        assert_eq!(summary.title, "Total Dead Load UDL");
        assert_eq!(summary.value.display_value(), "121.20");
        assert_eq!(summary.value.unit(), "kN/m");
    }

    #[test]
    fn test_udl_closed_form() {
        // UDL = B × (L/25 × 24 + 0.08 × 22)
        let input = BridgeDesignInput {
            span_length: 25.0,
            carriageway_width: 10.0,
            ..Default::default()
        };
        let result = calculate(&input);
        let expected = 10.0 * (1.0 * 24.0 + 0.08 * 22.0);
        assert!((result.udl.0 - expected).abs() < 1e-9);
    }
}
