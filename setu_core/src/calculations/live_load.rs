//! # Live Load
//!
//! Simplified IRC vehicle loading converted to an equivalent UDL.
//!
//! - Class A: 9.0 kN/m over the span plus a 100 kN knife-edge load
//! - Class AA: a flat 700 kN tracked vehicle, not scaled with span
//!
//! The Class AA figure is a lumped simplification, so its UDL falls as the
//! span grows. That asymmetry with Class A is intended.

use serde::{Deserialize, Serialize};

use super::{plain, StageReport};
use crate::equations::loads::{class_a_total_load, CLASS_AA_LOAD, CLASS_A_UDL, KNIFE_EDGE_LOAD};
use crate::equations::Equation;
use crate::input::{BridgeDesignInput, LoadClass};
use crate::report::{fixed, CalculationSection, CalculationStep, SectionIcon, SectionSummary, SummaryValue};
use crate::units::{Kilonewtons, KnPerMeter, Meters, SiUnit};

/// Live load on the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveLoadResult {
    pub load_class: LoadClass,
    pub span: Meters,
    /// Total vehicle load on the span
    pub total: Kilonewtons,
    /// Equivalent uniform load
    pub udl: KnPerMeter,
}

/// Compute the equivalent live load for the selected IRC class.
pub fn calculate(input: &BridgeDesignInput) -> LiveLoadResult {
    let span = Meters(input.span_length);
    let total = match input.load_class {
        LoadClass::ClassAa => CLASS_AA_LOAD,
        LoadClass::ClassA => class_a_total_load(span),
    };

    LiveLoadResult {
        load_class: input.load_class,
        span,
        total,
        udl: total.per_length(span),
    }
}

impl StageReport for LiveLoadResult {
    const TITLE: &'static str = "Live Load (LL)";

    fn headline_values(&self) -> Vec<(&'static str, f64)> {
        vec![("live load UDL", self.udl.0)]
    }

    fn to_section(&self) -> CalculationSection {
        let (class_label, class_result) = match self.load_class {
            LoadClass::ClassAa => ("IRC Class AA Tracked", plain(CLASS_AA_LOAD.0)),
            LoadClass::ClassA => (
                "IRC Class A",
                format!("{} kN/m + {}", plain(CLASS_A_UDL.0), plain(KNIFE_EDGE_LOAD.0)),
            ),
        };

        let steps = vec![
            CalculationStep::from_equation(
                Equation::VehicleLoadClass,
                format!("Class selected: {}", class_label),
                class_result,
            ),
            CalculationStep::from_equation(
                Equation::LiveLoadUdl,
                format!("{} kN / {} m", fixed(self.total.0, 2), plain(self.span.0)),
                fixed(self.udl.0, 2),
            ),
        ];

        CalculationSection {
            title: Self::TITLE.to_string(),
            icon: SectionIcon::Truck,
            steps,
            summary: Some(SectionSummary::new(
                "Equivalent Live Load UDL",
                SummaryValue::numeric(self.udl.0, 2, KnPerMeter::SYMBOL),
            )),
        }
    }
}
