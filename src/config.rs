//! Configuration management for the advisor processor.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Command-line flags override them in the binary.

use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDateTime;
use std::env;
use std::path::PathBuf;

const DEFAULT_INPUT_PATH: &str = "data/asesores_input.csv";
const DEFAULT_OUTPUT_DIR: &str = "data";
const DEFAULT_SAMPLE_SIZE: usize = 50;
const DEFAULT_LOG_LEVEL: &str = "info";
const OUTPUT_PREFIX: &str = "asesores_processed_";

/// Configuration for a processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input file, CSV or workbook (default: data/asesores_input.csv)
    pub input_path: PathBuf,

    /// Directory for the timestamped output file (default: data)
    pub output_dir: PathBuf,

    /// Generate sample input when the input file is missing (default: true)
    pub generate_missing: bool,

    /// Number of generated sample records (default: 50)
    pub sample_size: usize,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASESORES_INPUT_PATH`: Input file (default: data/asesores_input.csv)
    /// - `ASESORES_OUTPUT_DIR`: Output directory (default: data)
    /// - `ASESORES_GENERATE_MISSING`: Generate missing input (default: true)
    /// - `ASESORES_SAMPLE_SIZE`: Generated record count, at least 1 (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let input_path = Self::parse_env_path("ASESORES_INPUT_PATH", DEFAULT_INPUT_PATH)?;
        let output_dir = Self::parse_env_path("ASESORES_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)?;
        let generate_missing = Self::parse_env_bool("ASESORES_GENERATE_MISSING", true)?;
        let sample_size = Self::parse_env_usize("ASESORES_SAMPLE_SIZE", DEFAULT_SAMPLE_SIZE)?;

        if sample_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ASESORES_SAMPLE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            input_path,
            output_dir,
            generate_missing,
            sample_size,
            log_level,
        })
    }

    /// Output file for a run started at `at`:
    /// `<output_dir>/asesores_processed_<YYYYMMDD_HHMMSS>.csv`.
    pub fn output_path_at(&self, at: NaiveDateTime) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.csv", OUTPUT_PREFIX, at.format("%Y%m%d_%H%M%S")))
    }

    /// Parse an environment variable as a non-empty path with a default value.
    fn parse_env_path(var_name: &str, default: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val.trim())),
            Err(_) => Ok(PathBuf::from(default)),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            generate_missing: true,
            sample_size: DEFAULT_SAMPLE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
