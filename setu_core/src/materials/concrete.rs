//! Concrete grades (IRC:112 Table 6.4)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete grade by characteristic cube strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M25,
    M30,
    M35,
    M40,
    M45,
    M50,
}

impl ConcreteGrade {
    /// All grades for selection lists
    pub const ALL: [ConcreteGrade; 6] = [
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
        ConcreteGrade::M45,
        ConcreteGrade::M50,
    ];

    /// Label as written on drawings (e.g., "M35")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
            ConcreteGrade::M40 => "M40",
            ConcreteGrade::M45 => "M45",
            ConcreteGrade::M50 => "M50",
        }
    }

    /// Characteristic compressive strength f_ck in MPa
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
            ConcreteGrade::M35 => 35.0,
            ConcreteGrade::M40 => 40.0,
            ConcreteGrade::M45 => 45.0,
            ConcreteGrade::M50 => 50.0,
        }
    }

    /// Parse from loose user text ("m35", " M 35 ")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        ConcreteGrade::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CalcError::invalid_input("concrete_grade", s, "Unknown concrete grade"))
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_parse() {
        assert_eq!(ConcreteGrade::from_str_flexible("m40").unwrap(), ConcreteGrade::M40);
        assert_eq!(ConcreteGrade::from_str_flexible(" M 25 ").unwrap(), ConcreteGrade::M25);
        assert!(ConcreteGrade::from_str_flexible("M20").is_err());
    }

    #[test]
    fn test_serialization_uses_code() {
        let json = serde_json::to_string(&ConcreteGrade::M35).unwrap();
        assert_eq!(json, "\"M35\"");
    }
}
