//! # Equation Registry
//!
//! Central registry of every equation the pipeline shows in a report. Each
//! calculation step is built from one [`Equation`], so a step's title,
//! formula, unit, clause and rationale cannot drift from this table.
//!
//! ## Usage
//!
//! ```rust
//! use setu_core::equations::registry::Equation;
//!
//! let meta = Equation::ImpactFactor.metadata();
//! assert_eq!(meta.formula_plain, "I = 4.5 / (6 + L)");
//! assert_eq!(meta.reference.citation(), "IRC:6 - Cl. 209.2");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Source of an equation, rendered as the step's clause citation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// IRC:6 Standard Specifications and Code of Practice for Road Bridges, Section II (Loads)
    Irc6 { clause: &'static str },
    /// IRC:6 load combination rules
    Irc6LoadCombinations,
    /// IRC:78 Foundations and Substructure
    Irc78 { clause: &'static str },
    /// Dicken's empirical flood formula
    Dickens,
    /// Lacey's regime theory
    Lacey,
    /// Conservation of mass (Q = A × V)
    Continuity,
    /// Elementary structural analysis
    Mechanics,
    /// Taken directly from the input record
    DesignData,
    /// Common proportioning practice for preliminary sizing
    PreliminarySizing,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Irc6 { clause } => format!("IRC:6 - Cl. {}", clause),
            CodeReference::Irc6LoadCombinations => "IRC:6 - Load Combinations".to_string(),
            CodeReference::Irc78 { clause } => format!("IRC:78 - Cl. {}", clause),
            CodeReference::Dickens => "Dicken's Formula".to_string(),
            CodeReference::Lacey => "Lacey's Regime Width".to_string(),
            CodeReference::Continuity => "Continuity Equation".to_string(),
            CodeReference::Mechanics => "Structural Analysis Principles".to_string(),
            CodeReference::DesignData => "Design Data".to_string(),
            CodeReference::PreliminarySizing => "Preliminary Sizing Practice".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Dead and live loads, impact
    Loads,
    /// Discharge, waterway, scour, freeboard
    Hydraulics,
    /// Design load, moment and shear
    InternalForces,
    /// Deck, pier and abutment proportions
    Substructure,
    /// Footing area and depth
    Foundations,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Loads => "Loads",
            EquationCategory::Hydraulics => "Hydraulics",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Substructure => "Superstructure and Substructure Sizing",
            EquationCategory::Foundations => "Foundations",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Loads => 1,
            EquationCategory::Hydraulics => 2,
            EquationCategory::InternalForces => 3,
            EquationCategory::Substructure => 4,
            EquationCategory::Foundations => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Everything a report or the reference document needs about one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Step title (e.g., "Self-weight of RCC Slab")
    pub name: &'static str,
    /// Plain-language rationale; becomes the step context
    pub description: &'static str,
    /// Formula as shown in the step
    pub formula_plain: &'static str,
    /// Unit of the step result ("" for dimensionless)
    pub result_unit: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations shown in a Setu calculation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Dead load
    SlabSelfWeight,
    WearingCoatWeight,
    TotalDeadLoad,
    DeadLoadUdl,
    // Live load
    VehicleLoadClass,
    LiveLoadUdl,
    // Hydraulics
    DickensDischarge,
    LaceyWaterwayWidth,
    FlowVelocity,
    DesignScourDepth,
    MinimumFreeboard,
    FoundationDepthProvided,
    // Impact
    ImpactFactor,
    // Design forces
    TotalDesignUdl,
    UniformLoadMaxMoment,
    UniformLoadMaxShear,
    // Deck
    DeckSlabThickness,
    // Pier
    PierHeight,
    PierWidth,
    PierThickness,
    // Abutment
    AbutmentHeight,
    AbutmentTopWidth,
    AbutmentBaseWidth,
    // Footing
    FootingLoad,
    FootingArea,
    FootingSide,
    FootingDepth,
}

impl Equation {
    /// Get full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            // -----------------------------------------------------------------
            // Dead load
            // -----------------------------------------------------------------
            Equation::SlabSelfWeight => EquationMetadata {
                name: "Self-weight of RCC Slab",
                description: "The dead load of a concrete bridge deck slab is its own weight. This is a permanent, static load that the bridge must support throughout its life.",
                formula_plain: "Volume × Density (V × γ)",
                result_unit: "kN",
                reference: CodeReference::Irc6 { clause: "204" },
                variables: vec![
                    Variable::new("t", "Slab thickness, L/25", "m"),
                    Variable::new("L", "Span length", "m"),
                    Variable::new("B", "Carriageway width", "m"),
                    Variable::new("γ", "Unit weight of RCC", "kN/m³"),
                ],
                assumptions: vec!["Solid slab over full carriageway width", "Slab thickness = L/25"],
                category: EquationCategory::Loads,
                source_module: "equations/loads.rs",
                source_function: "plate_weight",
            },

            Equation::WearingCoatWeight => EquationMetadata {
                name: "Weight of Wearing Coat",
                description: "The wearing coat is the road surface on top of the bridge deck. Its weight is also a permanent dead load that needs to be accounted for in the design.",
                formula_plain: "Volume × Density (V × γ)",
                result_unit: "kN",
                reference: CodeReference::Irc6 { clause: "204" },
                variables: vec![
                    Variable::new("t_wc", "Wearing coat thickness", "m"),
                    Variable::new("γ_wc", "Unit weight of wearing coat", "kN/m³"),
                ],
                assumptions: vec!["80 mm bituminous wearing coat"],
                category: EquationCategory::Loads,
                source_module: "equations/loads.rs",
                source_function: "plate_weight",
            },

            Equation::TotalDeadLoad => EquationMetadata {
                name: "Total Dead Load (DL)",
                description: "The total dead load is the sum of all permanent, non-moving parts of the bridge structure.",
                formula_plain: "Slab Weight + Wearing Coat Weight",
                result_unit: "kN",
                reference: CodeReference::Irc6 { clause: "204" },
                variables: vec![Variable::new("DL", "Total dead load", "kN")],
                assumptions: vec!["Railings, kerbs and services neglected"],
                category: EquationCategory::Loads,
                source_module: "calculations/dead_load.rs",
                source_function: "calculate",
            },

            Equation::DeadLoadUdl => EquationMetadata {
                name: "Dead Load UDL (w_DL)",
                description: "The dead load is converted to a Uniformly Distributed Load (UDL) to simplify bending moment and shear force calculations.",
                formula_plain: "Total DL / Span Length",
                result_unit: "kN/m",
                reference: CodeReference::Irc6 { clause: "204" },
                variables: vec![Variable::new("w_DL", "Dead load intensity", "kN/m")],
                assumptions: vec!["Load spread evenly along the span"],
                category: EquationCategory::Loads,
                source_module: "units.rs",
                source_function: "Kilonewtons::per_length",
            },

            // -----------------------------------------------------------------
            // Live load
            // -----------------------------------------------------------------
            Equation::VehicleLoadClass => EquationMetadata {
                name: "Vehicle Load Type",
                description: "Live loads are temporary loads from vehicles and pedestrians. IRC:6 specifies different classes of vehicles for design, like Class A for typical highway traffic and Class AA for heavy military vehicles.",
                formula_plain: "Based on Selected IRC Class",
                result_unit: "kN",
                reference: CodeReference::Irc6 { clause: "207" },
                variables: vec![
                    Variable::new("w_A", "Class A lane load", "kN/m"),
                    Variable::new("P_ke", "Knife-edge load", "kN"),
                    Variable::new("P_AA", "Class AA tracked load", "kN"),
                ],
                assumptions: vec![
                    "Class A: 9.0 kN/m × L + 100 kN",
                    "Class AA: 700 kN regardless of span",
                ],
                category: EquationCategory::Loads,
                source_module: "equations/loads.rs",
                source_function: "class_a_total_load",
            },

            Equation::LiveLoadUdl => EquationMetadata {
                name: "Equivalent Live Load UDL (w_LL)",
                description: "For simpler analysis, the complex vehicle load is often converted into an equivalent Uniformly Distributed Load (UDL) that produces a similar maximum bending moment or shear force.",
                formula_plain: "Total LL / Span Length",
                result_unit: "kN/m",
                reference: CodeReference::Irc6 { clause: "208" },
                variables: vec![Variable::new("w_LL", "Live load intensity", "kN/m")],
                assumptions: vec!["Single equivalent UDL for all lanes"],
                category: EquationCategory::Loads,
                source_module: "units.rs",
                source_function: "Kilonewtons::per_length",
            },

            // -----------------------------------------------------------------
            // Hydraulics
            // -----------------------------------------------------------------
            Equation::DickensDischarge => EquationMetadata {
                name: "Maximum Flood Discharge (Q)",
                description: "Maximum flood discharge is the highest rate of water flow a river is expected to carry. Dicken's formula is a common empirical method to estimate this based on the catchment area.",
                formula_plain: "Q = C × A^(3/4)",
                result_unit: "m³/s",
                reference: CodeReference::Dickens,
                variables: vec![
                    Variable::new("C", "Dicken's coefficient", "-"),
                    Variable::new("A", "Catchment area", "km²"),
                ],
                assumptions: vec!["C = 11.5 (25-50 cm annual rainfall)"],
                category: EquationCategory::Hydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "dickens_discharge",
            },

            Equation::LaceyWaterwayWidth => EquationMetadata {
                name: "Linear Waterway Width (W)",
                description: "This is the stable width of the river required to pass the design flood without significant erosion. It is a crucial input for determining the overall bridge length and span arrangement.",
                formula_plain: "W = 4.75 × √Q",
                result_unit: "m",
                reference: CodeReference::Lacey,
                variables: vec![Variable::new("Q", "Design discharge", "m³/s")],
                assumptions: vec!["Alluvial stream in regime"],
                category: EquationCategory::Hydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "lacey_waterway_width",
            },

            Equation::FlowVelocity => EquationMetadata {
                name: "Maximum Velocity (V)",
                description: "The velocity of water during a flood determines the force on bridge piers and the potential for scour. It is calculated from the discharge and the flow's cross-sectional area.",
                formula_plain: "V = Q / (W × d)",
                result_unit: "m/s",
                reference: CodeReference::Continuity,
                variables: vec![
                    Variable::new("W", "Linear waterway", "m"),
                    Variable::new("d", "Flow depth, HFL - bed level", "m"),
                ],
                assumptions: vec!["Rectangular flow section"],
                category: EquationCategory::Hydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "mean_velocity",
            },

            Equation::DesignScourDepth => EquationMetadata {
                name: "Design Scour Depth",
                description: "Scour is the erosion of the riverbed by flowing water, which is amplified around piers. The foundation must be placed safely below this design scour depth to prevent bridge failure.",
                formula_plain: "R_design = 2.0 × 1.35 × (q² / f)^(1/3)",
                result_unit: "m",
                reference: CodeReference::Irc78 { clause: "703" },
                variables: vec![
                    Variable::new("q", "Discharge per metre, Q/W", "m³/s/m"),
                    Variable::new("f", "Lacey's silt factor", "-"),
                ],
                assumptions: vec!["Factor 2.0 for piers and abutments"],
                category: EquationCategory::Hydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "lacey_normal_scour_depth",
            },

            Equation::MinimumFreeboard => EquationMetadata {
                name: "Minimum Vertical Clearance (Freeboard)",
                description: "Freeboard is the clear space between the High Flood Level and the bridge's underside. It prevents floating debris from hitting the bridge and accommodates wave action.",
                formula_plain: "As per IRC:78-2014",
                result_unit: "m",
                reference: CodeReference::Irc78 { clause: "705.3" },
                variables: vec![Variable::new("F", "Freeboard above HFL", "m")],
                assumptions: vec!["1.2 m minimum"],
                category: EquationCategory::Hydraulics,
                source_module: "equations/hydraulics.rs",
                source_function: "MIN_FREEBOARD",
            },

            Equation::FoundationDepthProvided => EquationMetadata {
                name: "Provided Foundation Depth",
                description: "This is the actual depth of the foundation as specified in the inputs. It should be compared against the calculated Design Scour Depth to ensure safety.",
                formula_plain: "River Bed Level - Foundation Level",
                result_unit: "m",
                reference: CodeReference::DesignData,
                variables: vec![Variable::new("D_f", "Depth of founding level below bed", "m")],
                assumptions: vec!["Not checked against scour depth here"],
                category: EquationCategory::Hydraulics,
                source_module: "calculations/hydraulics.rs",
                source_function: "calculate",
            },

            // -----------------------------------------------------------------
            // Impact
            // -----------------------------------------------------------------
            Equation::ImpactFactor => EquationMetadata {
                name: "Impact Factor Calculation",
                description: "The Impact Factor accounts for the dynamic effects of moving vehicles, like bouncing and vibrations. It's a multiplier applied to the live load to simulate these extra stresses, ensuring the bridge is designed for real-world conditions.",
                formula_plain: "I = 4.5 / (6 + L)",
                result_unit: "",
                reference: CodeReference::Irc6 { clause: "209.2" },
                variables: vec![Variable::new("L", "Span length", "m")],
                assumptions: vec!["RCC expression applied to all bridge types"],
                category: EquationCategory::Loads,
                source_module: "equations/loads.rs",
                source_function: "impact_factor",
            },

            // -----------------------------------------------------------------
            // Design forces
            // -----------------------------------------------------------------
            Equation::TotalDesignUdl => EquationMetadata {
                name: "Total Design UDL (w)",
                description: "This is the total combined load the bridge must withstand, including the dead load, live load, and the dynamic impact of traffic.",
                formula_plain: "w_DL + w_LL × (1 + I)",
                result_unit: "kN/m",
                reference: CodeReference::Irc6LoadCombinations,
                variables: vec![
                    Variable::new("w_DL", "Dead load intensity", "kN/m"),
                    Variable::new("w_LL", "Live load intensity", "kN/m"),
                    Variable::new("I", "Impact factor", "-"),
                ],
                assumptions: vec!["Unfactored service combination"],
                category: EquationCategory::InternalForces,
                source_module: "equations/loads.rs",
                source_function: "total_design_udl",
            },

            Equation::UniformLoadMaxMoment => EquationMetadata {
                name: "Max Bending Moment (M_max)",
                description: "Bending moment is the rotational force that causes a beam to bend. The maximum bending moment, typically at the center of a simple span, is a critical value for designing the beam's thickness and reinforcement.",
                formula_plain: "(w × L²) / 8",
                result_unit: "kN-m",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("w", "Total design UDL", "kN/m"),
                    Variable::new("L", "Span length", "m"),
                ],
                assumptions: vec!["Simply-supported", "Occurs at midspan"],
                category: EquationCategory::InternalForces,
                source_module: "equations/loads.rs",
                source_function: "uniform_load_max_moment",
            },

            Equation::UniformLoadMaxShear => EquationMetadata {
                name: "Max Shear Force (V_max)",
                description: "Shear force is the force that causes parts of a beam to slide past each other. The maximum shear force occurs at the supports and is critical for designing against shear failure.",
                formula_plain: "(w × L) / 2",
                result_unit: "kN",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("w", "Total design UDL", "kN/m"),
                    Variable::new("L", "Span length", "m"),
                ],
                assumptions: vec!["Simply-supported", "Occurs at the supports"],
                category: EquationCategory::InternalForces,
                source_module: "equations/loads.rs",
                source_function: "uniform_load_max_shear",
            },

            // -----------------------------------------------------------------
            // Deck
            // -----------------------------------------------------------------
            Equation::DeckSlabThickness => EquationMetadata {
                name: "Deck Slab Thickness (D)",
                description: "A solid slab deck is first proportioned from its span. A depth of about one twenty-fifth of the span keeps deflection in check and is refined later by the flexural design.",
                formula_plain: "D = L / 25",
                result_unit: "m",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("L", "Span length", "m")],
                assumptions: vec!["Solid RCC slab", "Same ratio used for dead load"],
                category: EquationCategory::Substructure,
                source_module: "equations/loads.rs",
                source_function: "slab_thickness",
            },

            // -----------------------------------------------------------------
            // Pier
            // -----------------------------------------------------------------
            Equation::PierHeight => EquationMetadata {
                name: "Pier Height (H)",
                description: "The pier must reach from the founding level up to the underside of the deck, which sits at least one freeboard above the High Flood Level.",
                formula_plain: "H = (HFL + Freeboard) - Foundation Level",
                result_unit: "m",
                reference: CodeReference::DesignData,
                variables: vec![
                    Variable::new("HFL", "High flood level", "m"),
                    Variable::new("F", "Freeboard", "m"),
                ],
                assumptions: vec!["Bearing and pier cap depth neglected"],
                category: EquationCategory::Substructure,
                source_module: "equations/sizing.rs",
                source_function: "pier_height",
            },

            Equation::PierWidth => EquationMetadata {
                name: "Pier Width (B_p)",
                description: "The pier is usually set slightly narrower than the carriageway it supports. Very narrow decks keep the full width so the pier stays stable.",
                formula_plain: "B_p = B - 1.0 (B > 2.0 m)",
                result_unit: "m",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("B", "Carriageway width", "m")],
                assumptions: vec!["No reduction when B ≤ 2.0 m"],
                category: EquationCategory::Substructure,
                source_module: "equations/sizing.rs",
                source_function: "pier_width",
            },

            Equation::PierThickness => EquationMetadata {
                name: "Pier Thickness (t_p)",
                description: "Pier thickness along the span is tied to the span length so that longer spans, with larger reactions, get sturdier piers.",
                formula_plain: "t_p = L / 12",
                result_unit: "m",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("L", "Span length", "m")],
                assumptions: vec!["Solid wall-type pier"],
                category: EquationCategory::Substructure,
                source_module: "equations/sizing.rs",
                source_function: "pier_thickness",
            },

            // -----------------------------------------------------------------
            // Abutment
            // -----------------------------------------------------------------
            Equation::AbutmentHeight => EquationMetadata {
                name: "Abutment Height (H_a)",
                description: "The abutment retains the approach embankment from the river bed up to deck level, which is the flood level plus freeboard plus the deck slab.",
                formula_plain: "H_a = (HFL + Freeboard + D) - Bed Level",
                result_unit: "m",
                reference: CodeReference::DesignData,
                variables: vec![
                    Variable::new("D", "Deck slab thickness, L/25", "m"),
                    Variable::new("RBL", "River bed level", "m"),
                ],
                assumptions: vec!["Measured from bed level, not founding level"],
                category: EquationCategory::Substructure,
                source_module: "equations/sizing.rs",
                source_function: "abutment_height",
            },

            Equation::AbutmentTopWidth => EquationMetadata {
                name: "Abutment Top Width",
                description: "The top of the abutment must be wide enough to seat the bearings and the deck end.",
                formula_plain: "Adopted minimum",
                result_unit: "m",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("b_top", "Top width", "m")],
                assumptions: vec!["0.6 m"],
                category: EquationCategory::Substructure,
                source_module: "equations/sizing.rs",
                source_function: "ABUTMENT_TOP_WIDTH",
            },

            Equation::AbutmentBaseWidth => EquationMetadata {
                name: "Abutment Base Width",
                description: "A gravity abutment resists earth pressure by its own weight, so its base widens with height. Around 0.45 times the height is a common starting proportion.",
                formula_plain: "b = 0.45 × H_a",
                result_unit: "m",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("H_a", "Abutment height", "m")],
                assumptions: vec!["Gravity section"],
                category: EquationCategory::Substructure,
                source_module: "equations/sizing.rs",
                source_function: "abutment_base_width",
            },

            // -----------------------------------------------------------------
            // Footing
            // -----------------------------------------------------------------
            Equation::FootingLoad => EquationMetadata {
                name: "Total Load on Pier (P)",
                description: "The footing carries the whole design load of the span it supports, found by multiplying the design UDL by the span length.",
                formula_plain: "P = w × L",
                result_unit: "kN",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("w", "Total design UDL", "kN/m"),
                    Variable::new("L", "Span length", "m"),
                ],
                assumptions: vec!["Pier and footing self-weight neglected"],
                category: EquationCategory::Foundations,
                source_module: "units.rs",
                source_function: "KnPerMeter::over_length",
            },

            Equation::FootingArea => EquationMetadata {
                name: "Required Footing Area (A)",
                description: "Soil can only carry a limited pressure safely. Dividing the load by the safe bearing capacity gives the footing area needed to keep pressure within that limit.",
                formula_plain: "A = P / SBC",
                result_unit: "m²",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("SBC", "Safe bearing capacity", "kN/m²")],
                assumptions: vec!["SBC = 250 kN/m² assumed", "Uniform contact pressure"],
                category: EquationCategory::Foundations,
                source_module: "equations/sizing.rs",
                source_function: "footing_area",
            },

            Equation::FootingSide => EquationMetadata {
                name: "Footing Side (B_f)",
                description: "Assuming a square footing, each side is the square root of the required area.",
                formula_plain: "B_f = √A",
                result_unit: "m",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("A", "Required footing area", "m²")],
                assumptions: vec!["Square footing"],
                category: EquationCategory::Foundations,
                source_module: "equations/sizing.rs",
                source_function: "square_footing_side",
            },

            Equation::FootingDepth => EquationMetadata {
                name: "Footing Depth (D_f)",
                description: "The footing must be deep enough to spread the pier load and resist punching. A fixed preliminary depth is adopted and checked in detailed design.",
                formula_plain: "Adopted depth",
                result_unit: "m",
                reference: CodeReference::PreliminarySizing,
                variables: vec![Variable::new("D_f", "Footing depth", "m")],
                assumptions: vec!["1.2 m"],
                category: EquationCategory::Foundations,
                source_module: "equations/sizing.rs",
                source_function: "FOOTING_DEPTH",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories, sorted for the reference document
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Loads, Hydraulics, InternalForces, Substructure, Foundations];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry, in pipeline order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::SlabSelfWeight,
    Equation::WearingCoatWeight,
    Equation::TotalDeadLoad,
    Equation::DeadLoadUdl,
    Equation::VehicleLoadClass,
    Equation::LiveLoadUdl,
    Equation::DickensDischarge,
    Equation::LaceyWaterwayWidth,
    Equation::FlowVelocity,
    Equation::DesignScourDepth,
    Equation::MinimumFreeboard,
    Equation::FoundationDepthProvided,
    Equation::ImpactFactor,
    Equation::TotalDesignUdl,
    Equation::UniformLoadMaxMoment,
    Equation::UniformLoadMaxShear,
    Equation::DeckSlabThickness,
    Equation::PierHeight,
    Equation::PierWidth,
    Equation::PierThickness,
    Equation::AbutmentHeight,
    Equation::AbutmentTopWidth,
    Equation::AbutmentBaseWidth,
    Equation::FootingLoad,
    Equation::FootingArea,
    Equation::FootingSide,
    Equation::FootingDepth,
];

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Render the equation reference document as Markdown.
///
/// Written to `setu_core/src/equations/EQUATIONS.md` by `gen-equations`.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Setu Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used in a Setu preliminary bridge design
report, with its code reference, source location and assumptions. The
formulas are simplified approximations of code methods for preliminary
sizing only.

## Units

| Quantity | Unit |
|----------|------|
| Length, elevation | m |
| Force | kN |
| Distributed load | kN/m |
| Moment | kN-m |
| Bearing pressure | kN/m² |
| Discharge | m³/s |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 27);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.description.is_empty(), "Equation {:?} has no context", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(CodeReference::Irc6 { clause: "204" }.citation(), "IRC:6 - Cl. 204");
        assert_eq!(CodeReference::Irc78 { clause: "705.3" }.citation(), "IRC:78 - Cl. 705.3");
        assert_eq!(CodeReference::Dickens.citation(), "Dicken's Formula");
    }

    #[test]
    fn test_every_category_populated() {
        for category in Equation::all_categories() {
            assert!(!Equation::in_category(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_generate_markdown() {
        let md = generate_equations_markdown();
        assert!(md.starts_with("# Setu Equations Reference"));
        assert!(md.contains("## Hydraulics"));
        assert!(md.contains("Q = C × A^(3/4)"));
        assert!(md.contains("**Total Equations:** 27"));
    }
}
