//! # setu_core - Preliminary Bridge Design Engine
//!
//! `setu_core` turns a small set of bridge and site parameters into a step-by-step
//! preliminary design report for a simply-supported highway bridge, following
//! simplified IRC:6 and IRC:78 methods. Every step carries its formula,
//! substituted values, result, code clause and a plain-language rationale.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function from input record to report
//! - **JSON-First**: Input, report and errors all serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every step comes from a registered equation
//!
//! ## Quick Start
//!
//! ```rust
//! use setu_core::{perform_calculations, BridgeDesignInput};
//!
//! let input = BridgeDesignInput::default();
//! let output = perform_calculations(&input).unwrap();
//!
//! for section in &output.sections {
//!     if let Some(summary) = &section.summary {
//!         println!("{}: {} {}", summary.title, summary.value.display_value(), summary.value.unit());
//!     }
//! }
//!
//! let json = serde_json::to_string_pretty(&output).unwrap();
//! assert!(json.contains("Footing Design"));
//! ```
//!
//! ## Modules
//!
//! - [`input`] - The input record and its validation
//! - [`calculations`] - The calculation stages and the pipeline
//! - [`equations`] - Formulas and the equation registry
//! - [`report`] - Sections, steps and summaries
//! - [`explain`] - Step explanation interface
//! - [`materials`] - Concrete and steel grades, unit weights
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Input and report files

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod explain;
pub mod file_io;
pub mod input;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{perform_calculations, perform_calculations_with, PipelineOptions};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_input, save_input, save_report};
pub use input::BridgeDesignInput;
pub use report::{CalculationOutput, CalculationSection, CalculationStep, SectionSummary, SummaryValue};
