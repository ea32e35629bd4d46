//! # Hydraulic Design
//!
//! Flood discharge, regime waterway, flow velocity and design scour depth
//! for the bridge site.
//!
//! ## Method
//!
//! 1. Q = 11.5 × A^(3/4) (Dicken)
//! 2. W = 4.75 × √Q (Lacey)
//! 3. V = Q / (W × d), d = HFL - bed level
//! 4. q = Q / W, R = 1.35 × (q² / f)^(1/3), design scour = 2R
//! 5. Minimum freeboard 1.2 m
//! 6. Provided foundation depth = bed level - founding level
//!
//! The provided foundation depth is reported next to the scour depth but not
//! checked against it. Nothing downstream consumes these numbers.
//!
//! ## Inverted levels
//!
//! When HFL is at or below the river bed there is no flow section. The stage
//! does not fail: [`HydraulicOutcome::InvalidLevels`] renders a single error
//! step and an "N/A" summary, and the rest of the pipeline carries on.
//!
//! ## Example
//!
//! ```rust
//! use setu_core::calculations::hydraulics::{calculate, HydraulicOutcome};
//! use setu_core::input::BridgeDesignInput;
//!
//! let input = BridgeDesignInput { high_flood_level: 5.0, river_bed_level: 8.0, ..Default::default() };
//! assert!(matches!(calculate(&input), HydraulicOutcome::InvalidLevels { .. }));
//! ```

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::hydraulics::{
    dickens_discharge, discharge_per_metre, lacey_normal_scour_depth, lacey_waterway_width, mean_velocity,
    DICKENS_COEFFICIENT, LACEY_SCOUR_COEFFICIENT, LACEY_WIDTH_COEFFICIENT, MIN_FREEBOARD, PIER_SCOUR_MULTIPLIER,
};
use crate::equations::Equation;
use crate::input::BridgeDesignInput;
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{CubicMetersPerSec, Meters, MetersPerSec, SiUnit};

const SUMMARY_TITLE: &str = "Design Discharge";

/// Hydraulic quantities for a valid flow section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraulicDesign {
    pub catchment_area_km2: f64,
    pub silt_factor: f64,
    pub water_depth: Meters,
    pub discharge: CubicMetersPerSec,
    pub waterway_width: Meters,
    pub velocity: MetersPerSec,
    /// Q / W, m³/s per metre
    pub discharge_per_metre: f64,
    pub normal_scour_depth: Meters,
    pub design_scour_depth: Meters,
    pub min_freeboard: Meters,
    pub river_bed_level: Meters,
    pub foundation_level: Meters,
    /// Bed level minus founding level
    pub foundation_depth: Meters,
}

/// Result of the hydraulic stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HydraulicOutcome {
    Designed(HydraulicDesign),
    /// HFL at or below the river bed
    InvalidLevels { water_depth: f64 },
}

impl HydraulicOutcome {
    pub fn design(&self) -> Option<&HydraulicDesign> {
        match self {
            HydraulicOutcome::Designed(design) => Some(design),
            HydraulicOutcome::InvalidLevels { .. } => None,
        }
    }
}

/// Run the hydraulic design for the site.
pub fn calculate(input: &BridgeDesignInput) -> HydraulicOutcome {
    let water_depth = input.water_depth();
    if water_depth <= 0.0 {
        return HydraulicOutcome::InvalidLevels { water_depth };
    }
    let depth = Meters(water_depth);

    let discharge = dickens_discharge(input.catchment_area);
    let waterway_width = lacey_waterway_width(discharge);
    let velocity = mean_velocity(discharge, waterway_width, depth);
    let q = discharge_per_metre(discharge, waterway_width);
    let normal_scour_depth = lacey_normal_scour_depth(q, input.silt_factor);

    let river_bed_level = Meters(input.river_bed_level);
    let foundation_level = Meters(input.foundation_level);

    HydraulicOutcome::Designed(HydraulicDesign {
        catchment_area_km2: input.catchment_area,
        silt_factor: input.silt_factor,
        water_depth: depth,
        discharge,
        waterway_width,
        velocity,
        discharge_per_metre: q,
        normal_scour_depth,
        design_scour_depth: normal_scour_depth * PIER_SCOUR_MULTIPLIER,
        min_freeboard: MIN_FREEBOARD,
        river_bed_level,
        foundation_level,
        foundation_depth: river_bed_level - foundation_level,
    })
}

impl HydraulicDesign {
    fn steps(&self) -> Vec<CalculationStep> {
        vec![
            CalculationStep::from_equation(
                Equation::DickensDischarge,
                format!(
                    "Q = {} × {}^(3/4)",
                    plain(DICKENS_COEFFICIENT),
                    plain(self.catchment_area_km2)
                ),
                fixed(self.discharge.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::LaceyWaterwayWidth,
                format!("W = {} × √{}", plain(LACEY_WIDTH_COEFFICIENT), fixed(self.discharge.0, 2)),
                fixed(self.waterway_width.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::FlowVelocity,
                format!(
                    "V = {} / ({} × {})",
                    fixed(self.discharge.0, 2),
                    fixed(self.waterway_width.0, 2),
                    fixed(self.water_depth.0, 2)
                ),
                fixed(self.velocity.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::DesignScourDepth,
                // Multiplier printed as "2.0" to match the formula text
                format!(
                    "R_design = {:.1} × {} × (({})² / {})^(1/3)",
                    PIER_SCOUR_MULTIPLIER,
                    plain(LACEY_SCOUR_COEFFICIENT),
                    fixed(self.discharge_per_metre, 2),
                    plain(self.silt_factor)
                ),
                fixed(self.design_scour_depth.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::MinimumFreeboard,
                "A minimum clearance above HFL is required.",
                fixed(self.min_freeboard.0, 2),
            ),
            CalculationStep::from_equation(
                Equation::FoundationDepthProvided,
                format!(
                    "{}m - {}m",
                    fixed(self.river_bed_level.0, 2),
                    fixed(self.foundation_level.0, 2)
                ),
                fixed(self.foundation_depth.0, 2),
            ),
        ]
    }
}

impl StageReport for HydraulicOutcome {
    const TITLE: &'static str = "Hydraulic Design";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        match self {
            HydraulicOutcome::Designed(design) => vec![
                ("discharge", design.discharge.0),
                ("waterway width", design.waterway_width.0),
                ("velocity", design.velocity.0),
                ("design scour depth", design.design_scour_depth.0),
            ],
            HydraulicOutcome::InvalidLevels { .. } => vec![],
        }
    }

    fn to_section(&self) -> CalculationSection {
        let (steps, value) = match self {
            HydraulicOutcome::Designed(design) => (
                design.steps(),
                SummaryValue::numeric(design.discharge.0, 2, CubicMetersPerSec::SYMBOL),
            ),
            HydraulicOutcome::InvalidLevels { .. } => (
                vec![CalculationStep::error(
                    "HFL must be greater than River Bed Level.",
                    "High Flood Level must be above the River Bed Level to calculate hydraulic properties.",
                )],
                SummaryValue::NotAvailable {
                    unit: CubicMetersPerSec::SYMBOL.to_string(),
                },
            ),
        };

        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Droplets,
            steps,
            summary: Some(SectionSummary::new(SUMMARY_TITLE, value)),
        }
    }
}
