use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

// Default timeout functions
fn default_submission_timeout() -> u64 {
  10
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  #[serde(default)]
  pub submission: SubmissionConfig,
  pub pdf: PdfConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  pub base_url: String,
}

/// Submission endpoint configuration
///
/// When no endpoint URL is set the print action skips submission entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
  #[serde(default)]
  pub endpoint_url: Option<String>,
  #[serde(default = "default_submission_timeout")]
  pub timeout_seconds: u64,
}

impl Default for SubmissionConfig {
  fn default() -> Self {
    Self {
      endpoint_url: None,
      timeout_seconds: default_submission_timeout(),
    }
  }
}

/// PDF generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
  pub output_dir: String,
  pub wkhtmltopdf_path: Option<String>,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with INVOPAD_ prefix
  ///
  /// Environment variables use the INVOPAD_ prefix and are separated by double underscores:
  /// - `INVOPAD_SERVER__HOST=0.0.0.0`
  /// - `INVOPAD_SERVER__PORT=8080`
  /// - `INVOPAD_SUBMISSION__ENDPOINT_URL=https://billing.example.com/api/invoices`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if:
  /// - Required configuration files are missing
  /// - Configuration files contain invalid TOML
  /// - Required configuration values are missing or have invalid types
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      // Start with default configuration
      .add_source(File::with_name("config/default").required(true))
      // Add optional local configuration (for local development overrides)
      .add_source(File::with_name("config/local").required(false))
      // Add optional environment-specific configuration
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      // Add environment variables with INVOPAD_ prefix
      // Use double underscore as separator: INVOPAD_SERVER__PORT=8080
      .add_source(
        Environment::with_prefix("INVOPAD")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
