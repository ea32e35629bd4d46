//! # Bridge Design Equations
//!
//! Every formula used by the calculation stages lives here, so each can be
//! checked against its code clause in one place.
//!
//! ## Modules
//!
//! - [`loads`] - Dead load, IRC live load, impact, uniform-load moment and shear
//! - [`hydraulics`] - Dicken's discharge, Lacey's waterway and scour
//! - [`sizing`] - Preliminary pier, abutment and footing proportions
//! - [`registry`] - Equation metadata used to build report steps
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive sagging
//! - **Levels**: Reduced levels in metres, positive upward
//!
//! ## References
//!
//! - IRC:6-2017: Standard Specifications and Code of Practice for Road Bridges, Section II
//! - IRC:78-2014: Foundations and Substructure
//! - IRC SP:13: Guidelines for the Design of Small Bridges and Culverts

pub mod hydraulics;
pub mod loads;
pub mod registry;
pub mod sizing;

pub use loads::{
    class_a_total_load,
    impact_factor,
    plate_weight,
    slab_thickness,
    total_design_udl,
    uniform_load_max_moment,
    uniform_load_max_shear,
};

pub use hydraulics::{
    dickens_discharge,
    discharge_per_metre,
    lacey_normal_scour_depth,
    lacey_waterway_width,
    mean_velocity,
};

pub use sizing::{
    abutment_base_width,
    abutment_height,
    footing_area,
    pier_height,
    pier_thickness,
    pier_width,
    square_footing_side,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
