//! # Bridge Calculation Stages
//!
//! One module per report section. Each stage follows the pattern:
//!
//! - `calculate(..) -> *Result` - Pure numeric transform with typed units
//! - `*Result::to_section()` - Display strings for the report
//!
//! Stages never read each other's display strings. The
//! [`pipeline`] passes raw numbers between them.
//!
//! ## Available Stages
//!
//! - [`dead_load`] - Slab and wearing coat self-weight
//! - [`live_load`] - IRC Class A / Class AA equivalent UDL
//! - [`hydraulics`] - Discharge, waterway, velocity, scour
//! - [`impact`] - Impact factor
//! - [`design_forces`] - Design UDL, bending moment, shear force
//! - [`deck`] - Deck slab thickness
//! - [`pier`] - Pier height, width, thickness
//! - [`abutment`] - Abutment height and widths
//! - [`footing`] - Square footing size
//! - [`pipeline`] - Runs every stage in order

pub mod abutment;
pub mod dead_load;
pub mod deck;
pub mod design_forces;
pub mod footing;
pub mod hydraulics;
pub mod impact;
pub mod live_load;
pub mod pier;
pub mod pipeline;

use crate::report::CalculationSection;

// Re-export commonly used types
pub use abutment::AbutmentResult;
pub use dead_load::DeadLoadResult;
pub use deck::DeckResult;
pub use design_forces::DesignForcesResult;
pub use footing::FootingResult;
pub use hydraulics::{HydraulicDesign, HydraulicOutcome};
pub use impact::ImpactResult;
pub use live_load::LiveLoadResult;
pub use pier::PierResult;
pub use pipeline::{calculate_stages, perform_calculations, perform_calculations_with, PipelineOptions, StageResults};

/// A typed stage result that can be rendered as a report section.
pub trait StageReport {
    /// Section title, also the key in the output summary map
    const TITLE: &'static str;

    /// Raw numbers the stage produced, by name. Checked for finiteness by
    /// the pipeline before the section is rendered.
    fn headline_values(&self) -> Vec<(&'static str, f64)>;

    fn to_section(&self) -> CalculationSection;
}

/// Format a user-entered number the way it was typed: 15 not 15.0, 17.3 not 17.30.
pub(crate) fn plain(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number_format() {
        assert_eq!(plain(15.0), "15");
        assert_eq!(plain(17.3), "17.3");
        assert_eq!(plain(0.08), "0.08");
    }
}
