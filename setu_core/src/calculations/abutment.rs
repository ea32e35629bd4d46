//! # Abutment
//!
//! Gravity abutment retaining the approach fill from the river bed up to
//! deck level (HFL + freeboard + slab).

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::hydraulics::MIN_FREEBOARD;
use crate::equations::loads::slab_thickness;
use crate::equations::sizing::{abutment_base_width, abutment_height, ABUTMENT_BASE_RATIO, ABUTMENT_TOP_WIDTH};
use crate::equations::Equation;
use crate::input::BridgeDesignInput;
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{Meters, SiUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbutmentResult {
    pub high_flood_level: Meters,
    pub freeboard: Meters,
    pub slab_thickness: Meters,
    pub river_bed_level: Meters,
    pub height: Meters,
    pub top_width: Meters,
    pub base_width: Meters,
}

pub fn calculate(input: &BridgeDesignInput) -> AbutmentResult {
    let high_flood_level = Meters(input.high_flood_level);
    let river_bed_level = Meters(input.river_bed_level);
    let thickness = slab_thickness(Meters(input.span_length));
    let height = abutment_height(high_flood_level, MIN_FREEBOARD, thickness, river_bed_level);

    AbutmentResult {
        high_flood_level,
        freeboard: MIN_FREEBOARD,
        slab_thickness: thickness,
        river_bed_level,
        height,
        top_width: ABUTMENT_TOP_WIDTH,
        base_width: abutment_base_width(height),
    }
}

impl StageReport for AbutmentResult {
    const TITLE: &'static str = "Abutment Design";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![("abutment height", self.height.0), ("abutment base width", self.base_width.0)]
    }

    fn to_section(&self) -> CalculationSection {
        let steps = vec![
            CalculationStep::from_equation(
                Equation::AbutmentHeight,
                format!(
                    "({}m + {}m + {}m) - {}m",
                    fixed(self.high_flood_level.0, 2),
                    fixed(self.freeboard.0, 2),
                    fixed(self.slab_thickness.0, 2),
                    fixed(self.river_bed_level.0, 2)
                ),
                fixed(self.height.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::AbutmentTopWidth,
                "Minimum width to seat bearings",
                fixed(self.top_width.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::AbutmentBaseWidth,
                format!("{} × {}m", plain(ABUTMENT_BASE_RATIO), fixed(self.height.0, 2)),
                fixed(self.base_width.0, 2),
            ),
        ];

        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Wall,
            steps,
            summary: Some(SectionSummary::new(
                "Abutment Base Width",
                SummaryValue::numeric(self.base_width.0, 2, Meters::SYMBOL),
            )),
        }
    }
}
