//! # Bridge Design Input
//!
//! The caller-supplied parameter record consumed by every calculation stage.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "bridge_type": "rcc_slab",
//!   "span_length": 15.0,
//!   "carriageway_width": 7.5,
//!   "num_lanes": 2,
//!   "concrete_grade": "M35",
//!   "steel_grade": "Fe500",
//!   "load_class": "class_aa",
//!   "high_flood_level": 100.0,
//!   "river_bed_level": 95.0,
//!   "foundation_level": 90.0,
//!   "catchment_area": 25.0,
//!   "silt_factor": 1.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteGrade, SteelGrade};

/// Superstructure type. Informational only: no stage branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeType {
    RccSlab,
    TBeam,
    BoxGirder,
}

impl BridgeType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BridgeType::RccSlab => "RCC Slab Bridge",
            BridgeType::TBeam => "T-Beam Bridge",
            BridgeType::BoxGirder => "Box Girder Bridge",
        }
    }
}

/// IRC:6 vehicle loading class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadClass {
    /// Standard highway loading
    ClassA,
    /// Heavy tracked vehicle loading
    ClassAa,
}

impl LoadClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadClass::ClassA => "IRC Class A",
            LoadClass::ClassAa => "IRC Class AA",
        }
    }
}

/// Number of traffic lanes. Serialized as the bare integer 1, 2 or 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LaneCount {
    Single,
    Two,
    Four,
}

impl LaneCount {
    pub fn count(&self) -> u8 {
        match self {
            LaneCount::Single => 1,
            LaneCount::Two => 2,
            LaneCount::Four => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LaneCount::Single => "Single Lane",
            LaneCount::Two => "Two Lanes",
            LaneCount::Four => "Four Lanes",
        }
    }
}

impl TryFrom<u8> for LaneCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LaneCount::Single),
            2 => Ok(LaneCount::Two),
            4 => Ok(LaneCount::Four),
            other => Err(format!("num_lanes must be 1, 2 or 4 (got {})", other)),
        }
    }
}

impl From<LaneCount> for u8 {
    fn from(lanes: LaneCount) -> Self {
        lanes.count()
    }
}

/// Input parameters for one pipeline run.
///
/// Elevations share one vertical datum. All lengths in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeDesignInput {
    pub bridge_type: BridgeType,

    /// Effective span in metres
    pub span_length: f64,

    /// Clear carriageway width in metres
    pub carriageway_width: f64,

    pub num_lanes: LaneCount,

    pub concrete_grade: ConcreteGrade,

    pub steel_grade: SteelGrade,

    /// Selects the live load branch
    pub load_class: LoadClass,

    /// High flood level (HFL), m
    pub high_flood_level: f64,

    /// River bed level, m
    pub river_bed_level: f64,

    /// Founding level of pier and abutment footings, m
    pub foundation_level: f64,

    /// Catchment area in km²
    pub catchment_area: f64,

    /// Lacey's silt factor f
    pub silt_factor: f64,
}

impl Default for BridgeDesignInput {
    fn default() -> Self {
        BridgeDesignInput {
            bridge_type: BridgeType::RccSlab,
            span_length: 15.0,
            carriageway_width: 7.5,
            num_lanes: LaneCount::Two,
            concrete_grade: ConcreteGrade::M35,
            steel_grade: SteelGrade::Fe500,
            load_class: LoadClass::ClassAa,
            high_flood_level: 100.0,
            river_bed_level: 95.0,
            foundation_level: 90.0,
            catchment_area: 25.0,
            silt_factor: 1.0,
        }
    }
}

/// Form-level bounds enforced by the input-collection layer
pub const SPAN_RANGE_M: (f64, f64) = (5.0, 200.0);
pub const WIDTH_RANGE_M: (f64, f64) = (3.0, 30.0);
pub const MIN_CATCHMENT_KM2: f64 = 1.0;
pub const SILT_FACTOR_RANGE: (f64, f64) = (0.5, 2.5);

impl BridgeDesignInput {
    /// Check the preconditions the pipeline itself depends on.
    ///
    /// Every numeric field must be finite; span, width, catchment area and
    /// silt factor must be strictly positive. The HFL/bed-level ordering is
    /// deliberately not checked here.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("span_length", self.span_length),
            ("carriageway_width", self.carriageway_width),
            ("high_flood_level", self.high_flood_level),
            ("river_bed_level", self.river_bed_level),
            ("foundation_level", self.foundation_level),
            ("catchment_area", self.catchment_area),
            ("silt_factor", self.silt_factor),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
            }
        }

        if self.span_length <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_length",
                self.span_length.to_string(),
                "Span must be positive",
            ));
        }
        if self.carriageway_width <= 0.0 {
            return Err(CalcError::invalid_input(
                "carriageway_width",
                self.carriageway_width.to_string(),
                "Carriageway width must be positive",
            ));
        }
        if self.catchment_area <= 0.0 {
            return Err(CalcError::invalid_input(
                "catchment_area",
                self.catchment_area.to_string(),
                "Catchment area must be positive",
            ));
        }
        if self.silt_factor <= 0.0 {
            return Err(CalcError::invalid_input(
                "silt_factor",
                self.silt_factor.to_string(),
                "Silt factor must be positive",
            ));
        }
        Ok(())
    }

    /// Check the documented form bounds (span 5-200 m, width 3-30 m,
    /// catchment at least 1 km², silt factor 0.5-2.5).
    ///
    /// The pipeline never calls this; it belongs to whoever collects input.
    pub fn validate_ranges(&self) -> CalcResult<()> {
        self.validate()?;

        let (min_span, max_span) = SPAN_RANGE_M;
        if self.span_length < min_span || self.span_length > max_span {
            return Err(CalcError::invalid_input(
                "span_length",
                self.span_length.to_string(),
                format!("Span must be between {} m and {} m", min_span, max_span),
            ));
        }
        let (min_width, max_width) = WIDTH_RANGE_M;
        if self.carriageway_width < min_width || self.carriageway_width > max_width {
            return Err(CalcError::invalid_input(
                "carriageway_width",
                self.carriageway_width.to_string(),
                format!("Width must be between {} m and {} m", min_width, max_width),
            ));
        }
        if self.catchment_area < MIN_CATCHMENT_KM2 {
            return Err(CalcError::invalid_input(
                "catchment_area",
                self.catchment_area.to_string(),
                format!("Min area is {} sq.km", MIN_CATCHMENT_KM2),
            ));
        }
        let (min_f, max_f) = SILT_FACTOR_RANGE;
        if self.silt_factor < min_f || self.silt_factor > max_f {
            return Err(CalcError::invalid_input(
                "silt_factor",
                self.silt_factor.to_string(),
                format!("Silt factor must be between {} and {}", min_f, max_f),
            ));
        }
        Ok(())
    }

    /// Depth of flood water above the bed (HFL - bed level). Non-positive
    /// when the levels are inverted.
    pub fn water_depth(&self) -> f64 {
        self.high_flood_level - self.river_bed_level
    }
}
