//! # Setu CLI
//!
//! Command-line front end for `setu_core`: loads a bridge input record,
//! runs the calculation pipeline and prints the report.
//!
//! ```text
//! setu calc bridge.toml
//! setu calc bridge.json --format json --output report.json
//! setu calc bridge.toml --explain --check-ranges
//! setu defaults --format toml > bridge.toml
//! setu equations
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use setu_core::explain::{explain_step, ContextExplainer, ExplanationRequest};
use setu_core::file_io::{self, InputFormat};
use setu_core::materials::{ConcreteGrade, SteelGrade};
use setu_core::{perform_calculations_with, BridgeDesignInput, CalculationOutput, PipelineOptions};

#[derive(Parser)]
#[command(name = "setu", version, about = "Preliminary highway bridge design calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the design calculations for an input file
    Calc {
        /// Input record (.toml or .json)
        input: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Round upstream loads to display precision before combining them
        #[arg(long)]
        legacy_rounding: bool,
        /// Add a plain-language explanation under each step
        #[arg(long)]
        explain: bool,
        /// Reject inputs outside the usual form bounds
        #[arg(long)]
        check_ranges: bool,
        /// Override the concrete grade (e.g., M40)
        #[arg(long)]
        concrete_grade: Option<String>,
        /// Override the steel grade (e.g., Fe550)
        #[arg(long)]
        steel_grade: Option<String>,
        /// Also write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the default input record
    Defaults {
        #[arg(long, value_enum, default_value_t = RecordFormat::Toml)]
        format: RecordFormat,
        /// Write to this file instead of stdout (format from its extension)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the equation reference
    Equations,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum RecordFormat {
    Toml,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        cli.log_level.into()
    };
    // A logger may already be set when embedded; diagnostics are optional
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

    match cli.command {
        Commands::Calc {
            input,
            format,
            legacy_rounding,
            explain,
            check_ranges,
            concrete_grade,
            steel_grade,
            output,
        } => {
            let mut record = file_io::load_input(&input)
                .with_context(|| format!("Failed to load input from {}", input.display()))?;

            if let Some(grade) = concrete_grade {
                record.concrete_grade = ConcreteGrade::from_str_flexible(&grade)?;
            }
            if let Some(grade) = steel_grade {
                record.steel_grade = SteelGrade::from_str_flexible(&grade)?;
            }
            if check_ranges {
                record.validate_ranges().context("Input is outside the supported ranges")?;
            }

            let options = PipelineOptions { legacy_rounding };
            let report = perform_calculations_with(&record, &options).context("Calculation failed")?;

            match format {
                ReportFormat::Text => print_report(&record, &report, explain),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }

            if let Some(path) = output {
                file_io::save_report(&report, &path)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                debug!("Report written to {}", path.display());
            }
        }
        Commands::Defaults { format, output } => {
            let defaults = BridgeDesignInput::default();
            match output {
                Some(path) => write_defaults(&defaults, &path)?,
                None => {
                    let format = match format {
                        RecordFormat::Toml => InputFormat::Toml,
                        RecordFormat::Json => InputFormat::Json,
                    };
                    print!("{}", file_io::render_input(&defaults, format)?);
                }
            }
        }
        Commands::Equations => {
            print!("{}", setu_core::equations::generate_equations_markdown());
        }
    }

    Ok(())
}

fn write_defaults(defaults: &BridgeDesignInput, path: &Path) -> Result<()> {
    file_io::save_input(defaults, path).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default input to {}", path.display());
    Ok(())
}

fn print_report(input: &BridgeDesignInput, report: &CalculationOutput, explain: bool) {
    println!("═══════════════════════════════════════════════════════");
    println!("  SETU PRELIMINARY BRIDGE DESIGN");
    println!("═══════════════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Bridge:      {}", input.bridge_type.display_name());
    println!("  Span:        {} m", input.span_length);
    println!("  Carriageway: {} m, {}", input.carriageway_width, input.num_lanes.display_name());
    println!("  Materials:   {} / {}", input.concrete_grade, input.steel_grade);
    println!("  Loading:     {}", input.load_class.display_name());
    println!(
        "  Levels:      HFL {} m, bed {} m, founding {} m",
        input.high_flood_level, input.river_bed_level, input.foundation_level
    );
    println!(
        "  Catchment:   {} km², silt factor {}",
        input.catchment_area, input.silt_factor
    );

    for (index, section) in report.sections.iter().enumerate() {
        println!();
        println!("───────────────────────────────────────────────────────");
        println!("  {}. {}", index + 1, section.title);
        println!("───────────────────────────────────────────────────────");

        for step in &section.steps {
            println!();
            println!("  {}", step.title);
            println!("    Formula: {}", step.formula);
            println!("    Values:  {}", step.values);
            println!("    Result:  {} {}", step.result, step.unit);
            if !step.clause.is_empty() {
                println!("    Ref:     {}", step.clause);
            }

            if explain {
                match explain_step(&ContextExplainer, &ExplanationRequest::for_step(step)) {
                    Ok(explanation) => println!("    Why:     {}", explanation.explanation),
                    Err(e) => warn!("No explanation for '{}': {}", step.title, e),
                }
            }
        }

        if let Some(summary) = &section.summary {
            println!();
            println!(
                "  => {}: {} {}",
                summary.title,
                summary.value.display_value(),
                summary.value.unit()
            );
        }
    }

    println!();
    println!("═══════════════════════════════════════════════════════");
    println!("  SUMMARY");
    println!("═══════════════════════════════════════════════════════");
    for section in &report.sections {
        if let Some(summary) = &section.summary {
            println!(
                "  {:<28} {:>18} {}",
                summary.title,
                summary.value.display_value(),
                summary.value.unit()
            );
        }
    }
    println!("═══════════════════════════════════════════════════════");
}
