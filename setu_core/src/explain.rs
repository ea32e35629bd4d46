//! # Step Explanations
//!
//! Plain-language explanations of individual calculation steps, for
//! students reading a report.
//!
//! The pipeline never calls an explainer. A front end builds an
//! [`ExplanationRequest`] from each step it displays and asks whatever
//! [`Explainer`] it has. Explainer failures are [`ExplainError`]s and never
//! mix with [`CalcError`](crate::errors::CalcError).
//!
//! ## Example
//!
//! ```rust
//! use setu_core::explain::{explain_step, ContextExplainer, ExplanationRequest};
//! use setu_core::calculations::perform_calculations;
//! use setu_core::input::BridgeDesignInput;
//!
//! let output = perform_calculations(&BridgeDesignInput::default()).unwrap();
//! let step = &output.sections[0].steps[0];
//! let explanation = explain_step(&ContextExplainer, &ExplanationRequest::for_step(step)).unwrap();
//! assert!(explanation.explanation.contains("Self-weight of RCC Slab"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::CalculationStep;

/// What an explainer is told about one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    /// Step title (e.g., "Impact Factor Calculation")
    pub calculation_type: String,
    pub formula: String,
    pub values: String,
    pub result: String,
    pub context: String,
}

impl ExplanationRequest {
    pub fn for_step(step: &CalculationStep) -> Self {
        let result = if step.unit.is_empty() {
            step.result.clone()
        } else {
            format!("{} {}", step.result, step.unit)
        };

        ExplanationRequest {
            calculation_type: step.title.clone(),
            formula: step.formula.clone(),
            values: step.values.clone(),
            result,
            context: step.context.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub explanation: String,
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ExplainError {
    /// The explanation service could not be reached or refused the request
    #[error("Explanation service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("Explanation service returned an empty explanation")]
    EmptyExplanation,
}

/// Something that can explain a calculation step.
pub trait Explainer {
    fn explain(&self, request: &ExplanationRequest) -> Result<Explanation, ExplainError>;
}

/// Ask `explainer` about a step, rejecting blank answers.
pub fn explain_step<E: Explainer + ?Sized>(
    explainer: &E,
    request: &ExplanationRequest,
) -> Result<Explanation, ExplainError> {
    let explanation = explainer.explain(request)?;
    if explanation.explanation.trim().is_empty() {
        return Err(ExplainError::EmptyExplanation);
    }
    Ok(explanation)
}

/// Offline explainer that restates the step's own context and numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextExplainer;

impl Explainer for ContextExplainer {
    fn explain(&self, request: &ExplanationRequest) -> Result<Explanation, ExplainError> {
        let mut text = format!("{}: {}", request.calculation_type, request.context.trim());

        if request.formula != "-" {
            text.push_str(&format!(
                " Using {}, with {}, the result is {}.",
                request.formula, request.values, request.result
            ));
        }

        Ok(Explanation { explanation: text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl Explainer for Offline {
        fn explain(&self, _request: &ExplanationRequest) -> Result<Explanation, ExplainError> {
            Err(ExplainError::ServiceUnavailable {
                reason: "no network".to_string(),
            })
        }
    }

    struct Blank;

    impl Explainer for Blank {
        fn explain(&self, _request: &ExplanationRequest) -> Result<Explanation, ExplainError> {
            Ok(Explanation {
                explanation: "   ".to_string(),
            })
        }
    }

    fn step() -> CalculationStep {
        CalculationStep {
            title: "Impact Factor Calculation".to_string(),
            formula: "I = 4.5 / (6 + L)".to_string(),
            values: "4.5 / (6 + 15m)".to_string(),
            result: "0.214".to_string(),
            unit: String::new(),
            clause: "IRC:6 - Cl. 209.2".to_string(),
            context: "Accounts for dynamic effects.".to_string(),
        }
    }

    #[test]
    fn test_request_from_step() {
        let request = ExplanationRequest::for_step(&step());
        assert_eq!(request.calculation_type, "Impact Factor Calculation");
        assert_eq!(request.result, "0.214");

        let mut with_unit = step();
        with_unit.unit = "kN".to_string();
        assert_eq!(ExplanationRequest::for_step(&with_unit).result, "0.214 kN");
    }

    #[test]
    fn test_context_explainer() {
        let explanation = explain_step(&ContextExplainer, &ExplanationRequest::for_step(&step())).unwrap();
        assert!(explanation.explanation.starts_with("Impact Factor Calculation: Accounts"));
        assert!(explanation.explanation.contains("the result is 0.214."));
    }

    #[test]
    fn test_error_step_skips_formula() {
        let error = CalculationStep::error("HFL must be greater than River Bed Level.", "Levels inverted.");
        let explanation = ContextExplainer.explain(&ExplanationRequest::for_step(&error)).unwrap();
        assert_eq!(explanation.explanation, "Error: Levels inverted.");
    }

    #[test]
    fn test_failures() {
        let request = ExplanationRequest::for_step(&step());
        assert!(matches!(
            explain_step(&Offline, &request),
            Err(ExplainError::ServiceUnavailable { .. })
        ));
        assert_eq!(explain_step(&Blank, &request), Err(ExplainError::EmptyExplanation));
    }
}
