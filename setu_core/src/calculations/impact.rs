//! # Impact Factor
//!
//! Dynamic allowance on the live load, I = 4.5 / (6 + L) (IRC:6 Cl. 209.2).
//!
//! The RCC expression is used for every [`BridgeType`](crate::input::BridgeType).

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::loads::impact_factor;
use crate::equations::Equation;
use crate::input::BridgeDesignInput;
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::Meters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub span: Meters,
    /// Dimensionless impact factor
    pub factor: f64,
}

pub fn calculate(input: &BridgeDesignInput) -> ImpactResult {
    let span = Meters(input.span_length);
    ImpactResult {
        span,
        factor: impact_factor(span),
    }
}

impl StageReport for ImpactResult {
    const TITLE: &'static str = "Impact Factor (I)";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![("impact factor", self.factor)]
    }

    fn to_section(&self) -> CalculationSection {
        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Waves,
            steps: vec![CalculationStep::from_equation(
                Equation::ImpactFactor,
                format!("4.5 / (6 + {}m)", plain(self.span.0)),
                fixed(self.factor, 3),
            )],
            summary: Some(SectionSummary::new("Impact Factor", SummaryValue::numeric(self.factor, 3, ""))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::BridgeType;

    #[test]
    fn test_default_span() {
        let result = calculate(&BridgeDesignInput::default());
        assert!((result.factor - 4.5 / 21.0).abs() < 1e-12);

        let section = result.to_section();
        assert_eq!(section.steps.len(), 1);
        assert_eq!(section.steps[0].values, "4.5 / (6 + 15m)");
        assert_eq!(section.steps[0].result, "0.214");
        assert_eq!(section.steps[0].unit, "");
        assert_eq!(section.summary.unwrap().value.display_value(), "0.214");
    }

    #[test]
    fn test_bridge_type_does_not_change_factor() {
        let slab = calculate(&BridgeDesignInput::default());
        let girder = calculate(&BridgeDesignInput {
            bridge_type: BridgeType::BoxGirder,
            ..Default::default()
        });
        assert_eq!(slab, girder);
    }
}
