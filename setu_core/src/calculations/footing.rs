//! # Footing
//!
//! Square pad under a pier, sized so the span's design load stays within an
//! assumed safe bearing capacity of 250 kN/m².
//!
//! ```text
//! P   = w × L
//! A   = P / SBC
//! B_f = √A
//! D_f = 1.2 m
//! ```
//!
//! Pier and footing self-weight are not included in P.

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::sizing::{footing_area, square_footing_side, FOOTING_DEPTH, SAFE_BEARING_CAPACITY};
use crate::equations::Equation;
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{Kilonewtons, KnPerMeter, KnPerSqMeter, Meters, SiUnit, SquareMeters};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingResult {
    pub design_udl: KnPerMeter,
    pub span: Meters,
    pub bearing_capacity: KnPerSqMeter,
    pub load: Kilonewtons,
    pub area: SquareMeters,
    pub side: Meters,
    pub depth: Meters,
}

/// Size the footing from the total design UDL of the design forces stage.
pub fn calculate(design_udl: KnPerMeter, span: Meters) -> FootingResult {
    let load = design_udl.over_length(span);
    let area = footing_area(load, SAFE_BEARING_CAPACITY);

    FootingResult {
        design_udl,
        span,
        bearing_capacity: SAFE_BEARING_CAPACITY,
        load,
        area,
        side: square_footing_side(area),
        depth: FOOTING_DEPTH,
    }
}

impl FootingResult {
    /// "B×B×D" with two decimals each
    pub fn size_label(&self) -> String {
        format!(
            "{}×{}×{}",
            fixed(self.side.0, 2),
            fixed(self.side.0, 2),
            fixed(self.depth.0, 2)
        )
    }
}

impl StageReport for FootingResult {
    const TITLE: &'static str = "Footing Design";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![("footing load", self.load.0), ("footing side", self.side.0)]
    }

    fn to_section(&self) -> CalculationSection {
        let steps = vec![
            CalculationStep::from_equation(
                Equation::FootingLoad,
                format!("{} kN/m × {}m", fixed(self.design_udl.0, 2), plain(self.span.0)),
                fixed(self.load.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::FootingArea,
                format!(
                    "{} kN / {} kN/m²",
                    fixed(self.load.0, 2),
                    plain(self.bearing_capacity.0)
                ),
                fixed(self.area.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::FootingSide,
                format!("√{}", fixed(self.area.0, 2)),
                fixed(self.side.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::FootingDepth,
                "Preliminary depth, to be checked for punching shear",
                fixed(self.depth.0, 2),
            ),
        ];

        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Foundation,
            steps,
            summary: Some(SectionSummary::new(
                "Footing Size (L×B×D)",
                SummaryValue::display(self.size_label(), Meters::SYMBOL),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_footing() {
        // 250 kN/m × 16 m = 4000 kN -> 16 m² -> 4 m square
        let footing = calculate(KnPerMeter(250.0), Meters(16.0));
        assert_eq!(footing.load.0, 4000.0);
        assert_eq!(footing.area.0, 16.0);
        assert_eq!(footing.side.0, 4.0);
        assert_eq!(footing.size_label(), "4.00×4.00×1.20");
    }

    #[test]
    fn test_section() {
        let section = calculate(KnPerMeter(250.0), Meters(16.0)).to_section();
        assert_eq!(section.steps.len(), 4);
        assert_eq!(section.steps[0].values, "250.00 kN/m × 16m");
        assert_eq!(section.steps[1].values, "4000.00 kN / 250 kN/m²");
        assert_eq!(section.steps[1].unit, "m²");
        assert_eq!(section.steps[2].values, "√16.00");
        assert_eq!(section.steps[3].result, "1.20");

        let summary = section.summary.unwrap();
        assert_eq!(summary.title, "Footing Size (L×B×D)");
        assert_eq!(summary.value.display_value(), "4.00×4.00×1.20");
        assert!(summary.value.as_number().is_none());
    }
}
