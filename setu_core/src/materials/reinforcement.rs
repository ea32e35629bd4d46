//! Reinforcing steel grades (IS 1786)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// High-yield deformed bar grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    Fe415,
    Fe500,
    Fe550,
}

impl SteelGrade {
    /// All grades for selection lists
    pub const ALL: [SteelGrade; 3] = [SteelGrade::Fe415, SteelGrade::Fe500, SteelGrade::Fe550];

    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
            SteelGrade::Fe550 => "Fe550",
        }
    }

    /// Characteristic yield strength f_y in MPa
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
            SteelGrade::Fe550 => 550.0,
        }
    }

    /// Parse from loose user text ("fe500", "FE 415")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        SteelGrade::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CalcError::invalid_input("steel_grade", s, "Unknown steel grade"))
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
