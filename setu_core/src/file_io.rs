//! # File I/O Module
//!
//! Reads and writes bridge input records and calculation reports.
//!
//! - **Formats**: Input records are TOML or JSON, chosen by extension
//!   (`.json` is JSON, anything else TOML). Reports are always JSON.
//! - **Atomic saves**: Write to a `.tmp` sibling, sync, rename, so an
//!   interrupted save never leaves a half-written file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use setu_core::file_io::{load_input, save_input};
//! use setu_core::input::BridgeDesignInput;
//! use std::path::Path;
//!
//! let path = Path::new("bridge.toml");
//! save_input(&BridgeDesignInput::default(), path).unwrap();
//! let input = load_input(path).unwrap();
//! assert_eq!(input.span_length, 15.0);
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::input::BridgeDesignInput;
use crate::report::CalculationOutput;

/// Text format of an input record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// `.json` (any case) is JSON, everything else TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

/// Parse an input record from text.
pub fn parse_input(text: &str, format: InputFormat) -> CalcResult<BridgeDesignInput> {
    match format {
        InputFormat::Json => serde_json::from_str(text).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON input: {}", e),
        }),
        InputFormat::Toml => toml::from_str(text).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid TOML input: {}", e),
        }),
    }
}

/// Render an input record as text.
pub fn render_input(input: &BridgeDesignInput, format: InputFormat) -> CalcResult<String> {
    match format {
        InputFormat::Json => serde_json::to_string_pretty(input).map_err(|e| CalcError::serialization(e.to_string())),
        InputFormat::Toml => toml::to_string_pretty(input).map_err(|e| CalcError::serialization(e.to_string())),
    }
}

/// Load an input record, picking the format from the extension.
///
/// # Returns
///
/// * `Err(CalcError::FileError)` - The file could not be read
/// * `Err(CalcError::SerializationError)` - The contents do not parse
pub fn load_input(path: &Path) -> CalcResult<BridgeDesignInput> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    parse_input(&contents, InputFormat::from_path(path)).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("{} ({})", reason, path.display()),
        },
        other => other,
    })
}

/// Save an input record atomically in the format given by the extension.
pub fn save_input(input: &BridgeDesignInput, path: &Path) -> CalcResult<()> {
    let text = render_input(input, InputFormat::from_path(path))?;
    write_atomic(path, &text)
}

/// Save a calculation report as pretty JSON, atomically.
pub fn save_report(output: &CalculationOutput, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(output).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, &json)
}

fn write_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let mut tmp_file = File::create(tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(contents.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LoadClass;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("setu_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.toml")), InputFormat::Toml);
        assert_eq!(InputFormat::from_path(Path::new("bridge")), InputFormat::Toml);
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
bridge_type = "t_beam"
span_length = 20.0
carriageway_width = 7.5
num_lanes = 2
concrete_grade = "M35"
steel_grade = "Fe500"
load_class = "class_a"
high_flood_level = 100.0
river_bed_level = 95.0
foundation_level = 90.0
catchment_area = 25.0
silt_factor = 1.0
"#;
        let input = parse_input(text, InputFormat::Toml).unwrap();
        assert_eq!(input.span_length, 20.0);
        assert_eq!(input.load_class, LoadClass::ClassA);
    }

    #[test]
    fn test_bad_lane_count_rejected() {
        let mut value = serde_json::to_value(BridgeDesignInput::default()).unwrap();
        value["num_lanes"] = serde_json::json!(3);
        let err = parse_input(&value.to_string(), InputFormat::Json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        for name in ["roundtrip.toml", "roundtrip.json"] {
            let path = temp_path(name);
            let input = BridgeDesignInput {
                span_length: 17.3,
                ..Default::default()
            };
            save_input(&input, &path).unwrap();
            assert_eq!(load_input(&path).unwrap(), input);
            let _ = fs::remove_file(&path);
        }
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic.json");
        save_input(&BridgeDesignInput::default(), &path).unwrap();

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        assert!(!Path::new(&tmp_name).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_saved_report_shows_display_values() {
        let path = temp_path("report.json");
        let output = crate::perform_calculations(&BridgeDesignInput::default()).unwrap();
        save_report(&output, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["summary"]["Dead Load (DL)"]["value"], "121.20");

        let loaded: CalculationOutput = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded.titles(), output.titles());
        assert_eq!(loaded.summary["Live Load (LL)"].value.display_value(), "46.67");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_input(&temp_path("does_not_exist.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
