//! # Pier
//!
//! Solid wall pier proportioned from the flood level, carriageway width and
//! span. The summary is a display-only "H×W×T" string.
//!
//! ## Assumptions
//!
//! - Top of pier at HFL + 1.2 m freeboard
//! - Width = carriageway - 1.0 m, unless the carriageway is 2.0 m or less
//! - Thickness = L / 12
//!
//! Scour depth from the hydraulic stage is not used.

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::hydraulics::MIN_FREEBOARD;
use crate::equations::sizing::{pier_height, pier_thickness, pier_width, PIER_SPAN_THICKNESS_RATIO, PIER_WIDTH_REDUCTION};
use crate::equations::Equation;
use crate::input::BridgeDesignInput;
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{Meters, SiUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PierResult {
    pub high_flood_level: Meters,
    pub freeboard: Meters,
    pub foundation_level: Meters,
    pub carriageway_width: Meters,
    pub span: Meters,
    pub height: Meters,
    pub width: Meters,
    pub thickness: Meters,
}

pub fn calculate(input: &BridgeDesignInput) -> PierResult {
    let high_flood_level = Meters(input.high_flood_level);
    let foundation_level = Meters(input.foundation_level);
    let carriageway_width = Meters(input.carriageway_width);
    let span = Meters(input.span_length);

    PierResult {
        high_flood_level,
        freeboard: MIN_FREEBOARD,
        foundation_level,
        carriageway_width,
        span,
        height: pier_height(high_flood_level, MIN_FREEBOARD, foundation_level),
        width: pier_width(carriageway_width),
        thickness: pier_thickness(span),
    }
}

impl PierResult {
    /// "H×W×T" with two decimals each
    pub fn size_label(&self) -> String {
        format!(
            "{}×{}×{}",
            fixed(self.height.0, 2),
            fixed(self.width.0, 2),
            fixed(self.thickness.0, 2)
        )
    }

    fn width_values(&self) -> String {
        if self.width == self.carriageway_width {
            format!("{}m (no reduction)", plain(self.carriageway_width.0))
        } else {
            format!("{}m - {}m", plain(self.carriageway_width.0), plain(PIER_WIDTH_REDUCTION.0))
        }
    }
}

impl StageReport for PierResult {
    const TITLE: &'static str = "Pier Design";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("pier height", self.height.0),
            ("pier width", self.width.0),
            ("pier thickness", self.thickness.0),
        ]
    }

    fn to_section(&self) -> CalculationSection {
        let steps = vec![
            CalculationStep::from_equation(
                Equation::PierHeight,
                format!(
                    "({}m + {}m) - {}m",
                    fixed(self.high_flood_level.0, 2),
                    fixed(self.freeboard.0, 2),
                    fixed(self.foundation_level.0, 2)
                ),
                fixed(self.height.0, 2),
            ),
            CalculationStep::from_equation(Equation::PierWidth, self.width_values(), fixed(self.width.0, 2)),
            CalculationStep::from_equation(
                Equation::PierThickness,
                format!("{}m / {}", plain(self.span.0), plain(PIER_SPAN_THICKNESS_RATIO)),
                fixed(self.thickness.0, 2),
            ),
        ];

        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Pillar,
            steps,
            summary: Some(SectionSummary::new(
                "Pier Size (H×W×T)",
                SummaryValue::display(self.size_label(), Meters::SYMBOL),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_width(carriageway_width: f64) -> BridgeDesignInput {
        BridgeDesignInput {
            carriageway_width,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_pier() {
        let pier = calculate(&BridgeDesignInput::default());
        assert!((pier.height.0 - 11.2).abs() < 1e-9);
        assert_eq!(pier.width.0, 6.5);
        assert_eq!(pier.thickness.0, 1.25);
        assert_eq!(pier.size_label(), "11.20×6.50×1.25");
    }

    #[test]
    fn test_width_guard_boundary() {
        // The reduction applies only above 2.0 m
        assert_eq!(calculate(&with_width(2.0)).width.0, 2.0);
        assert_eq!(calculate(&with_width(1.8)).width.0, 1.8);
        assert!((calculate(&with_width(2.5)).width.0 - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_section() {
        let section = calculate(&BridgeDesignInput::default()).to_section();
        assert_eq!(section.steps.len(), 3);
        assert_eq!(section.steps[0].values, "(100.00m + 1.20m) - 90.00m");
        assert_eq!(section.steps[1].values, "7.5m - 1m");
        assert_eq!(section.steps[2].values, "15m / 12");

        let summary = section.summary.unwrap();
        assert_eq!(summary.title, "Pier Size (H×W×T)");
        assert_eq!(summary.value.display_value(), "11.20×6.50×1.25");
        assert!(summary.value.as_number().is_none());

        let narrow = calculate(&with_width(2.0)).to_section();
        assert_eq!(narrow.steps[1].values, "2m (no reduction)");
    }
}
