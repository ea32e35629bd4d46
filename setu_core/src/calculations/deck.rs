//! # Deck Slab
//!
//! Preliminary slab thickness D = L / 25, the same rule the dead load and
//! abutment stages use.

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::loads::slab_thickness;
use crate::equations::Equation;
use crate::input::BridgeDesignInput;
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{Meters, SiUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckResult {
    pub span: Meters,
    pub slab_thickness: Meters,
}

pub fn calculate(input: &BridgeDesignInput) -> DeckResult {
    let span = Meters(input.span_length);
    DeckResult {
        span,
        slab_thickness: slab_thickness(span),
    }
}

impl StageReport for DeckResult {
    const TITLE: &'static str = "Deck Slab Design";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![("slab thickness", self.slab_thickness.0)]
    }

    fn to_section(&self) -> CalculationSection {
        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Layers,
            steps: vec![CalculationStep::from_equation(
                Equation::DeckSlabThickness,
                format!("D = {}m / 25", plain(self.span.0)),
                fixed(self.slab_thickness.0, 3),
            )],
            summary: Some(SectionSummary::new(
                "Deck Slab Thickness",
                SummaryValue::numeric(self.slab_thickness.0, 3, Meters::SYMBOL),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::dead_load;

    #[test]
    fn test_matches_dead_load_thickness() {
        for span in [5.0, 15.0, 17.3, 200.0] {
            let input = BridgeDesignInput {
                span_length: span,
                ..Default::default()
            };
            assert_eq!(calculate(&input).slab_thickness, dead_load::calculate(&input).slab_thickness);
        }
    }

    #[test]
    fn test_section() {
        let section = calculate(&BridgeDesignInput::default()).to_section();
        assert_eq!(section.steps.len(), 1);
        assert_eq!(section.steps[0].values, "D = 15m / 25");
        assert_eq!(section.steps[0].result, "0.600");
        let summary = section.summary.unwrap();
        assert_eq!(summary.title, "Deck Slab Thickness");
        assert_eq!(summary.value.display_value(), "0.600");
        assert_eq!(summary.value.unit(), "m");
    }
}
