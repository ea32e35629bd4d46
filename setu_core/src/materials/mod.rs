//! # Materials
//!
//! Concrete and reinforcement grades accepted on the input record, plus the
//! unit weights used for dead load.
//!
//! Grades are carried through the pipeline as labels only. None of the
//! preliminary sizing stages read their strengths yet.
//!
//! ## Example
//!
//! ```rust
//! use setu_core::materials::{ConcreteGrade, SteelGrade, CONCRETE_DENSITY};
//!
//! assert_eq!(ConcreteGrade::M35.fck_mpa(), 35.0);
//! assert_eq!(SteelGrade::Fe500.code(), "Fe500");
//! assert_eq!(CONCRETE_DENSITY.0, 24.0);
//! ```

pub mod concrete;
pub mod reinforcement;

pub use concrete::ConcreteGrade;
pub use reinforcement::SteelGrade;

use serde::{Deserialize, Serialize};

/// Unit weight in kN/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitWeight(pub f64);

/// Reinforced cement concrete (IRC:6 Table 2)
pub const CONCRETE_DENSITY: UnitWeight = UnitWeight(24.0);

/// Bituminous or asphaltic concrete wearing coat (IRC:6 Table 2)
pub const WEARING_COAT_DENSITY: UnitWeight = UnitWeight(22.0);
