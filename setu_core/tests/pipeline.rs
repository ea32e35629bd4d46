//! End-to-end checks of the calculation pipeline.

use proptest::prelude::*;

use setu_core::calculations::pipeline::calculate_stages;
use setu_core::input::{BridgeType, LoadClass};
use setu_core::report::SummaryValue;
use setu_core::{perform_calculations, perform_calculations_with, BridgeDesignInput, PipelineOptions};

const SECTION_ORDER: [&str; 10] = [
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
];

fn summary_text(input: &BridgeDesignInput, title: &str) -> String {
    let output = perform_calculations(input).unwrap();
    output.summary[title].value.display_value()
}

#[test]
fn default_report_headlines() {
    let input = BridgeDesignInput::default();
    assert_eq!(summary_text(&input, "Dead Load (DL)"), "121.20");
    assert_eq!(summary_text(&input, "Live Load (LL)"), "46.67");
    assert_eq!(summary_text(&input, "Impact Factor (I)"), "0.214");
    assert_eq!(summary_text(&input, "Deck Slab Design"), "0.600");
    assert_eq!(summary_text(&input, "Pier Design"), "11.20×6.50×1.25");
    assert_eq!(summary_text(&input, "Abutment Design"), "3.06");
}

#[test]
fn class_a_live_load() {
    let input = BridgeDesignInput {
        load_class: LoadClass::ClassA,
        ..Default::default()
    };
    assert_eq!(summary_text(&input, "Live Load (LL)"), "15.67");
}

#[test]
fn hydraulic_discharge_matches_dickens() {
    let input = BridgeDesignInput {
        catchment_area: 25.0,
        silt_factor: 1.0,
        ..Default::default()
    };
    let output = perform_calculations(&input).unwrap();
    let value = output.summary["Hydraulic Design"].value.as_number().unwrap();
    assert!((value - 11.5 * 25.0_f64.powf(0.75)).abs() < 1e-9);
}

#[test]
fn inverted_levels_mark_only_the_hydraulic_section() {
    let input = BridgeDesignInput {
        high_flood_level: 5.0,
        river_bed_level: 8.0,
        foundation_level: 2.0,
        ..Default::default()
    };
    let output = perform_calculations(&input).unwrap();

    let hydraulic = output.section("Hydraulic Design").unwrap();
    assert_eq!(hydraulic.steps.len(), 1);
    let summary = hydraulic.summary.as_ref().unwrap();
    assert_eq!(summary.value.display_value(), "N/A");
    assert_eq!(summary.value.unit(), "m³/s");

    for title in SECTION_ORDER.iter().filter(|t| **t != "Hydraulic Design") {
        assert!(
            !matches!(output.summary[*title].value, SummaryValue::NotAvailable { .. }),
            "{} should still be computed",
            title
        );
    }
}

#[test]
fn design_forces_composition_across_spans() {
    for span in [8.0, 15.0, 17.3] {
        let input = BridgeDesignInput {
            span_length: span,
            ..Default::default()
        };
        let stages = calculate_stages(&input, &PipelineOptions::default()).unwrap();
        let (dl, ll, i) = (stages.dead_load.udl.0, stages.live_load.udl.0, stages.impact.factor);
        let w = dl + ll * (1.0 + i);

        assert_eq!(stages.design_forces.total_udl.0, w);
        assert_eq!(stages.design_forces.max_moment.0, w * span.powi(2) / 8.0);
        assert_eq!(stages.design_forces.max_shear.0, w * span / 2.0);
    }
}

#[test]
fn legacy_rounding_leaves_upstream_sections_alone() {
    let input = BridgeDesignInput {
        span_length: 17.3,
        ..Default::default()
    };
    let raw = perform_calculations(&input).unwrap();
    let legacy = perform_calculations_with(&input, &PipelineOptions { legacy_rounding: true }).unwrap();

    for title in ["Dead Load (DL)", "Live Load (LL)", "Hydraulic Design", "Impact Factor (I)"] {
        assert_eq!(raw.section(title), legacy.section(title));
    }
}

#[test]
fn exact_ties_round_half_up() {
    // I = 4.5 / (6 + 66) = 0.0625, t = 13.5 / 12 = 1.125
    let long_span = BridgeDesignInput {
        span_length: 66.0,
        ..Default::default()
    };
    assert_eq!(summary_text(&long_span, "Impact Factor (I)"), "0.063");

    let short_span = BridgeDesignInput {
        span_length: 13.5,
        ..Default::default()
    };
    assert!(summary_text(&short_span, "Pier Design").ends_with("×1.13"));
}

#[test]
fn legacy_rounding_feeds_tie_rounded_impact() {
    let input = BridgeDesignInput {
        span_length: 66.0,
        ..Default::default()
    };
    let legacy = calculate_stages(&input, &PipelineOptions { legacy_rounding: true }).unwrap();
    assert_eq!(legacy.design_forces.impact_factor, 0.063);

    let raw = calculate_stages(&input, &PipelineOptions::default()).unwrap();
    assert_eq!(raw.design_forces.impact_factor, 0.0625);
}

#[test]
fn json_summary_carries_display_strings() {
    let output = perform_calculations(&BridgeDesignInput::default()).unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["summary"]["Live Load (LL)"]["value"], "46.67");
    assert_eq!(json["summary"]["Live Load (LL)"]["unit"], "kN/m");
    assert_eq!(json["summary"]["Pier Design"]["value"], "11.20×6.50×1.25");

    let inverted = BridgeDesignInput {
        high_flood_level: 5.0,
        river_bed_level: 8.0,
        foundation_level: 2.0,
        ..Default::default()
    };
    let json = serde_json::to_value(&perform_calculations(&inverted).unwrap()).unwrap();
    assert_eq!(json["summary"]["Hydraulic Design"]["value"], "N/A");
    assert_eq!(json["summary"]["Hydraulic Design"]["unit"], "m³/s");
}

#[test]
fn pier_width_boundary() {
    let input = BridgeDesignInput {
        carriageway_width: 2.0,
        ..Default::default()
    };
    let stages = calculate_stages(&input, &PipelineOptions::default()).unwrap();
    assert_eq!(stages.pier.width.0, 2.0);
}

#[test]
fn non_positive_inputs_fail_whole_run() {
    let cases = [
        BridgeDesignInput { span_length: -15.0, ..Default::default() },
        BridgeDesignInput { carriageway_width: 0.0, ..Default::default() },
        BridgeDesignInput { silt_factor: 0.0, ..Default::default() },
        BridgeDesignInput { catchment_area: f64::NAN, ..Default::default() },
    ];
    for input in cases {
        let err = perform_calculations(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}

#[test]
fn every_step_comes_with_context() {
    let output = perform_calculations(&BridgeDesignInput::default()).unwrap();
    for section in &output.sections {
        assert!(!section.steps.is_empty(), "{} has no steps", section.title);
        for step in &section.steps {
            assert!(!step.context.is_empty(), "{} / {} has no context", section.title, step.title);
            assert!(!step.clause.is_empty(), "{} / {} has no clause", section.title, step.title);
        }
    }
}

fn bridge_type() -> impl Strategy<Value = BridgeType> {
    prop_oneof![
        Just(BridgeType::RccSlab),
        Just(BridgeType::TBeam),
        Just(BridgeType::BoxGirder),
    ]
}

fn load_class() -> impl Strategy<Value = LoadClass> {
    prop_oneof![Just(LoadClass::ClassA), Just(LoadClass::ClassAa)]
}

prop_compose! {
    fn any_input()(
        bridge_type in bridge_type(),
        load_class in load_class(),
        span_length in 5.0f64..200.0,
        carriageway_width in 3.0f64..30.0,
        river_bed_level in 50.0f64..150.0,
        flood_rise in -10.0f64..20.0,
        founding_depth in 0.0f64..20.0,
        catchment_area in 1.0f64..5000.0,
        silt_factor in 0.5f64..2.5,
    ) -> BridgeDesignInput {
        BridgeDesignInput {
            bridge_type,
            load_class,
            span_length,
            carriageway_width,
            high_flood_level: river_bed_level + flood_rise,
            river_bed_level,
            foundation_level: river_bed_level - founding_depth,
            catchment_area,
            silt_factor,
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn output_is_deterministic(input in any_input()) {
        let first = serde_json::to_string(&perform_calculations(&input).unwrap()).unwrap();
        let second = serde_json::to_string(&perform_calculations(&input).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ten_sections_in_fixed_order(input in any_input()) {
        let output = perform_calculations(&input).unwrap();
        prop_assert_eq!(output.titles(), SECTION_ORDER.to_vec());
        prop_assert_eq!(output.summary.len(), 10);
        for title in SECTION_ORDER {
            prop_assert!(output.summary.contains_key(title));
        }
    }

    #[test]
    fn design_forces_follow_from_upstream(input in any_input()) {
        let stages = calculate_stages(&input, &PipelineOptions::default()).unwrap();
        let w = stages.dead_load.udl.0 + stages.live_load.udl.0 * (1.0 + stages.impact.factor);
        let span = input.span_length;
        prop_assert_eq!(stages.design_forces.max_moment.0, w * span.powi(2) / 8.0);
        prop_assert_eq!(stages.design_forces.max_shear.0, w * span / 2.0);
        prop_assert_eq!(stages.footing.load.0, stages.design_forces.total_udl.0 * span);
    }

    #[test]
    fn slab_thickness_agrees_across_stages(input in any_input()) {
        let stages = calculate_stages(&input, &PipelineOptions::default()).unwrap();
        prop_assert_eq!(stages.dead_load.slab_thickness, stages.deck.slab_thickness);
        prop_assert_eq!(stages.deck.slab_thickness, stages.abutment.slab_thickness);
    }

    #[test]
    fn hydraulic_summary_marks_inverted_levels(input in any_input()) {
        let output = perform_calculations(&input).unwrap();
        let value = &output.summary["Hydraulic Design"].value;
        if input.high_flood_level > input.river_bed_level {
            prop_assert!(value.as_number().is_some());
        } else {
            prop_assert_eq!(value.display_value(), "N/A");
        }
    }
}
