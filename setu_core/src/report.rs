//! # Calculation Report Data
//!
//! The structured output of a pipeline run: an ordered list of sections, each
//! holding ordered steps and an optional headline summary, plus a
//! title-keyed summary map.
//!
//! ## Structure
//!
//! ```text
//! CalculationOutput
//! ├── sections: Vec<CalculationSection>   (fixed pipeline order)
//! │   ├── title, icon
//! │   ├── steps: Vec<CalculationStep>     (formula, values, result, unit, clause, context)
//! │   └── summary: Option<SectionSummary>
//! └── summary: BTreeMap<title, SectionSummary>
//! ```
//!
//! `result` and summary values are display strings with fixed decimals. Only
//! [`SummaryValue::Numeric`] carries a number a consumer may compute with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::equations::Equation;

/// Extra digits rendered to tell an exact tie from a value merely close to one.
/// Any f64 whose exact expansion has a 5 in the first dropped place and at
/// least this many zeros after it is a tie.
const TIE_DIGITS: usize = 30;

/// Format with a fixed number of decimals, never printing "-0.00".
///
/// Exact ties round away from zero (0.0625 -> "0.063", 1.125 -> "1.13"),
/// everything else rounds to nearest on the exact binary value.
pub fn fixed(value: f64, places: usize) -> String {
    let formatted = match round_tie_away(value, places) {
        Some(rounded) => rounded,
        None => format!("{:.*}", places, value),
    };
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// Round `value` half away from zero when it sits exactly on a tie.
/// Returns `None` for non-ties and non-finite values.
fn round_tie_away(value: f64, places: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let exact = format!("{:.*}", places + TIE_DIGITS, value.abs());
    let (kept, dropped) = exact.split_at(exact.len() - TIE_DIGITS);
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return None;
    }

    let mut digits: Vec<char> = kept.trim_end_matches('.').chars().collect();
    let mut index = digits.len();
    loop {
        if index == 0 {
            digits.insert(0, '1');
            break;
        }
        index -= 1;
        match digits[index] {
            '.' => continue,
            '9' => digits[index] = '0',
            d => {
                digits[index] = char::from(d as u8 + 1);
                break;
            }
        }
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    Some(format!("{}{}", sign, digits.into_iter().collect::<String>()))
}

/// Presentation hint for a section. Opaque to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionIcon {
    Scale,
    Truck,
    Droplets,
    Waves,
    Sigma,
    Scissors,
    Layers,
    Pillar,
    Wall,
    Foundation,
}

/// One atomic, displayable step of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub title: String,
    /// Human-readable formula
    pub formula: String,
    /// The formula with numbers substituted
    pub values: String,
    /// Fixed-decimal result
    pub result: String,
    pub unit: String,
    /// Code clause citation, may be empty
    pub clause: String,
    /// Plain-language rationale, used for explanation requests
    pub context: String,
}

impl CalculationStep {
    /// Build a step for a registered equation. Title, formula, clause, unit
    /// and context come from the registry.
    pub fn from_equation(equation: Equation, values: impl Into<String>, result: impl Into<String>) -> Self {
        let meta = equation.metadata();
        CalculationStep {
            title: meta.name.to_string(),
            formula: meta.formula_plain.to_string(),
            values: values.into(),
            result: result.into(),
            unit: meta.result_unit.to_string(),
            clause: meta.reference.citation(),
            context: meta.description.to_string(),
        }
    }

    /// A step that reports why a section could not be computed.
    pub fn error(message: impl Into<String>, context: impl Into<String>) -> Self {
        CalculationStep {
            title: "Error".to_string(),
            formula: "-".to_string(),
            values: message.into(),
            result: NOT_AVAILABLE.to_string(),
            unit: String::new(),
            clause: String::new(),
            context: context.into(),
        }
    }
}

/// Marker shown in place of a number that could not be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// Headline value of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryValue {
    /// A number shown with `precision` decimals
    Numeric { value: f64, precision: usize, unit: String },
    /// A composite display string such as "8.20×6.50×1.25". Not parseable.
    Display { text: String, unit: String },
    /// The section could not be computed
    NotAvailable { unit: String },
}

impl SummaryValue {
    pub fn numeric(value: f64, precision: usize, unit: impl Into<String>) -> Self {
        SummaryValue::Numeric {
            value,
            precision,
            unit: unit.into(),
        }
    }

    pub fn display(text: impl Into<String>, unit: impl Into<String>) -> Self {
        SummaryValue::Display {
            text: text.into(),
            unit: unit.into(),
        }
    }

    /// The string a report shows ("121.20", "N/A", ...)
    pub fn display_value(&self) -> String {
        match self {
            SummaryValue::Numeric { value, precision, .. } => fixed(*value, *precision),
            SummaryValue::Display { text, .. } => text.clone(),
            SummaryValue::NotAvailable { .. } => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn unit(&self) -> &str {
        match self {
            SummaryValue::Numeric { unit, .. }
            | SummaryValue::Display { unit, .. }
            | SummaryValue::NotAvailable { unit } => unit,
        }
    }

    /// The raw number, for numeric summaries only
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SummaryValue::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Titled headline value of a section.
///
/// Serialized flat, with `value` as the display string:
///
/// ```json
/// { "title": "Total Live Load UDL", "kind": "numeric", "value": "46.67",
///   "unit": "kN/m", "raw": 46.666666666666664, "precision": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "SummaryRecord", try_from = "SummaryRecord")]
pub struct SectionSummary {
    pub title: String,
    pub value: SummaryValue,
}

impl SectionSummary {
    pub fn new(title: impl Into<String>, value: SummaryValue) -> Self {
        SectionSummary {
            title: title.into(),
            value,
        }
    }
}

/// Which [`SummaryValue`] variant a serialized summary holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    Numeric,
    Display,
    NotAvailable,
}

/// Serialized form of [`SectionSummary`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    title: String,
    kind: SummaryKind,
    value: String,
    unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    precision: Option<usize>,
}

impl From<SectionSummary> for SummaryRecord {
    fn from(summary: SectionSummary) -> Self {
        let value = summary.value.display_value();
        let (kind, unit, raw, precision) = match summary.value {
            SummaryValue::Numeric {
                value,
                precision,
                unit,
            } => (SummaryKind::Numeric, unit, Some(value), Some(precision)),
            SummaryValue::Display { unit, .. } => (SummaryKind::Display, unit, None, None),
            SummaryValue::NotAvailable { unit } => (SummaryKind::NotAvailable, unit, None, None),
        };
        SummaryRecord {
            title: summary.title,
            kind,
            value,
            unit,
            raw,
            precision,
        }
    }
}

impl TryFrom<SummaryRecord> for SectionSummary {
    type Error = String;

    fn try_from(record: SummaryRecord) -> Result<Self, Self::Error> {
        let value = match record.kind {
            SummaryKind::Numeric => match (record.raw, record.precision) {
                (Some(raw), Some(precision)) => SummaryValue::numeric(raw, precision, record.unit),
                _ => return Err(format!("numeric summary '{}' needs raw and precision", record.title)),
            },
            SummaryKind::Display => SummaryValue::display(record.value, record.unit),
            SummaryKind::NotAvailable => SummaryValue::NotAvailable { unit: record.unit },
        };
        Ok(SectionSummary::new(record.title, value))
    }
}

/// A titled group of steps with an optional summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSection {
    pub title: String,
    pub icon: SectionIcon,
    pub steps: Vec<CalculationStep>,
    pub summary: Option<SectionSummary>,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Sections in computation order
    pub sections: Vec<CalculationSection>,
    /// Section title -> summary. Ordered map so serialized output is stable.
    pub summary: BTreeMap<String, SectionSummary>,
}

impl CalculationOutput {
    /// Assemble the output; a later section with the same title replaces an
    /// earlier one in the summary map.
    pub fn from_sections(sections: Vec<CalculationSection>) -> Self {
        let summary = sections
            .iter()
            .filter_map(|section| {
                section
                    .summary
                    .as_ref()
                    .map(|summary| (section.title.clone(), summary.clone()))
            })
            .collect();
        CalculationOutput { sections, summary }
    }

    /// Find a section by title
    pub fn section(&self, title: &str) -> Option<&CalculationSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Section titles in display order
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}
