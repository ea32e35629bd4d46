//! # Calculation Pipeline
//!
//! Runs every stage in a fixed order and assembles the report:
//!
//! ```text
//! Dead Load ─┐
//! Live Load ─┼─> Design Forces ─> (BM, SF) ─┐
//! Impact ────┘                              └─> Footing
//! Hydraulic        (reported only)
//! Deck, Pier, Abutment   (from the input record)
//! ```
//!
//! Section order in the output is always Dead Load, Live Load, Hydraulic,
//! Impact Factor, Bending Moment, Shear Force, Deck, Pier, Abutment, Footing.
//!
//! Stages pass raw numbers to each other. [`PipelineOptions::legacy_rounding`]
//! instead feeds Design Forces the values rounded to their display precision,
//! which reproduces reports generated by earlier versions digit for digit.
//!
//! ## Example
//!
//! ```rust
//! use setu_core::calculations::pipeline::perform_calculations;
//! use setu_core::input::BridgeDesignInput;
//!
//! let output = perform_calculations(&BridgeDesignInput::default()).unwrap();
//! assert_eq!(output.sections.len(), 10);
//! assert_eq!(output.summary["Dead Load (DL)"].value.display_value(), "121.20");
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::design_forces::{self, DesignForcesResult};
use super::hydraulics::{self, HydraulicOutcome};
use super::{abutment, dead_load, deck, footing, impact, live_load, pier};
use super::{
    AbutmentResult, DeadLoadResult, DeckResult, FootingResult, ImpactResult, LiveLoadResult, PierResult, StageReport,
};
use crate::errors::{CalcError, CalcResult};
use crate::input::BridgeDesignInput;
use crate::report::{fixed, CalculationOutput};
use crate::units::{KnPerMeter, Meters};

/// Options that change how stages are chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Round dead load and live load UDLs to 2 decimals and the impact
    /// factor to 3 before combining them
    pub legacy_rounding: bool,
}

/// Typed results of every stage from one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageResults {
    pub dead_load: DeadLoadResult,
    pub live_load: LiveLoadResult,
    pub hydraulics: HydraulicOutcome,
    pub impact: ImpactResult,
    pub design_forces: DesignForcesResult,
    pub deck: DeckResult,
    pub pier: PierResult,
    pub abutment: AbutmentResult,
    pub footing: FootingResult,
}

impl StageResults {
    /// Render all sections in pipeline order.
    pub fn to_output(&self) -> CalculationOutput {
        CalculationOutput::from_sections(vec![
            self.dead_load.to_section(),
            self.live_load.to_section(),
            self.hydraulics.to_section(),
            self.impact.to_section(),
            self.design_forces.bending_moment_section(),
            self.design_forces.shear_force_section(),
            self.deck.to_section(),
            self.pier.to_section(),
            self.abutment.to_section(),
            self.footing.to_section(),
        ])
    }
}

/// Run the full pipeline with default options.
pub fn perform_calculations(input: &BridgeDesignInput) -> CalcResult<CalculationOutput> {
    perform_calculations_with(input, &PipelineOptions::default())
}

/// Run the full pipeline.
///
/// Returns a complete output or a single error, never a partial report.
///
/// # Errors
///
/// - [`CalcError::InvalidInput`] if a numeric input is non-finite or a
///   span, width, catchment area or silt factor is not positive
/// - [`CalcError::CalculationFailed`] if a stage produces a non-finite number
pub fn perform_calculations_with(
    input: &BridgeDesignInput,
    options: &PipelineOptions,
) -> CalcResult<CalculationOutput> {
    info!(
        "Running bridge calculations: {} span {} m, {}",
        input.bridge_type.display_name(),
        input.span_length,
        input.load_class.display_name()
    );
    let results = calculate_stages(input, options)?;
    Ok(results.to_output())
}

/// Validate the input and compute every stage without rendering.
pub fn calculate_stages(input: &BridgeDesignInput, options: &PipelineOptions) -> CalcResult<StageResults> {
    input.validate()?;

    let dead = dead_load::calculate(input);
    check_stage(&dead)?;
    debug!("Dead load UDL = {:.3} kN/m", dead.udl.0);

    let live = live_load::calculate(input);
    check_stage(&live)?;
    debug!("Live load UDL = {:.3} kN/m", live.udl.0);

    let hydraulic = hydraulics::calculate(input);
    match &hydraulic {
        HydraulicOutcome::Designed(design) => {
            check_stage(&hydraulic)?;
            debug!("Design discharge = {:.3} m³/s", design.discharge.0);
        }
        HydraulicOutcome::InvalidLevels { water_depth } => {
            warn!(
                "HFL {} m is not above river bed {} m (depth {} m); hydraulic section marked N/A",
                input.high_flood_level, input.river_bed_level, water_depth
            );
        }
    }

    let impact = impact::calculate(input);
    check_stage(&impact)?;
    debug!("Impact factor = {:.4}", impact.factor);

    let (dead_udl, live_udl, impact_factor) = if options.legacy_rounding {
        (
            KnPerMeter(display_rounded(dead.udl.0, 2)),
            KnPerMeter(display_rounded(live.udl.0, 2)),
            display_rounded(impact.factor, 3),
        )
    } else {
        (dead.udl, live.udl, impact.factor)
    };
    let span = Meters(input.span_length);
    let forces = design_forces::calculate(dead_udl, live_udl, impact_factor, span);
    check_values("Design Forces", forces.headline_values())?;
    debug!(
        "Design UDL = {:.3} kN/m, M_max = {:.3} kN-m, V_max = {:.3} kN",
        forces.total_udl.0, forces.max_moment.0, forces.max_shear.0
    );

    let deck = deck::calculate(input);
    check_stage(&deck)?;

    let pier = pier::calculate(input);
    check_stage(&pier)?;
    debug!("Pier H×W×T = {}", pier.size_label());

    let abutment = abutment::calculate(input);
    check_stage(&abutment)?;

    let footing = footing::calculate(forces.total_udl, span);
    check_stage(&footing)?;
    debug!("Footing = {}", footing.size_label());

    Ok(StageResults {
        dead_load: dead,
        live_load: live,
        hydraulics: hydraulic,
        impact,
        design_forces: forces,
        deck,
        pier,
        abutment,
        footing,
    })
}

/// The number a reader of the formatted value would get back.
fn display_rounded(value: f64, places: usize) -> f64 {
    fixed(value, places).parse().unwrap_or(value)
}

fn check_stage<S: StageReport>(stage: &S) -> CalcResult<()> {
    check_values(S::TITLE, stage.headline_values())
}

fn check_values(stage: &str, values: Vec<(&'static str, f64)>) -> CalcResult<()> {
    match values.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(CalcError::calculation_failed(
            stage,
            format!("{} is not a finite number ({})", name, value),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let output = perform_calculations(&BridgeDesignInput::default()).unwrap();
        assert_eq!(
            output.titles(),
            vec![
                "Dead Load (DL)",
                "Live Load (LL)",
                "Hydraulic Design",
                "Impact Factor (I)",
                "Design Bending Moment (BM)",
                "Design Shear Force (SF)",
                "Deck Slab Design",
                "Pier Design",
                "Abutment Design",
                "Footing Design",
            ]
        );
        assert_eq!(output.summary.len(), 10);
    }

    #[test]
    fn test_raw_values_flow_into_design_forces() {
        let input = BridgeDesignInput::default();
        let results = calculate_stages(&input, &PipelineOptions::default()).unwrap();
        let forces = &results.design_forces;
        assert_eq!(forces.dead_udl, results.dead_load.udl);
        assert_eq!(forces.live_udl, results.live_load.udl);
        assert_eq!(forces.impact_factor, results.impact.factor);
    }

    #[test]
    fn test_legacy_rounding() {
        let input = BridgeDesignInput::default();
        let options = PipelineOptions { legacy_rounding: true };
        let forces = calculate_stages(&input, &options).unwrap().design_forces;
        assert_eq!(forces.dead_udl.0, 121.2);
        assert_eq!(forces.live_udl.0, 46.67);
        assert_eq!(forces.impact_factor, 0.214);

        let w = 121.2 + 46.67 * (1.0 + 0.214);
        assert_eq!(forces.total_udl.0, w);
    }

    #[test]
    fn test_footing_uses_design_udl() {
        let results = calculate_stages(&BridgeDesignInput::default(), &PipelineOptions::default()).unwrap();
        let expected = results.design_forces.total_udl.0 * 15.0;
        assert_eq!(results.footing.load.0, expected);
    }

    #[test]
    fn test_invalid_levels_do_not_fail_the_run() {
        let input = BridgeDesignInput {
            high_flood_level: 5.0,
            river_bed_level: 8.0,
            ..Default::default()
        };
        let output = perform_calculations(&input).unwrap();
        assert_eq!(output.sections.len(), 10);
        assert_eq!(output.summary["Hydraulic Design"].value.display_value(), "N/A");
    }

    #[test]
    fn test_zero_span_rejected() {
        let input = BridgeDesignInput {
            span_length: 0.0,
            ..Default::default()
        };
        let err = perform_calculations(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_stage_value_reported() {
        let err = check_values("Pier Design", vec![("pier height", f64::INFINITY)]).unwrap_err();
        assert!(matches!(err, CalcError::CalculationFailed { .. }));
        assert!(err.to_string().contains("pier height"));
    }
}
