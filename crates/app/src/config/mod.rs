//! Application configuration module

use std::{path::PathBuf, time::Duration};

use clap::Args;
use freshline::i18n::Language;

pub use crate::config::observability::{LogFormat, LoggingConfig};

pub mod observability;

/// Freshline settings shared by every command
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Simulated latency of the mock repositories, in milliseconds
    #[arg(
        long,
        env = "FRESHLINE_MOCK_LATENCY_MS",
        default_value_t = 0_u64,
        global = true
    )]
    pub mock_latency_ms: u64,

    /// Display currency (GBP, USD, EUR)
    #[arg(long, env = "FRESHLINE_CURRENCY", default_value = "USD", global = true)]
    pub currency: String,

    /// Preferences file
    #[arg(
        long,
        env = "FRESHLINE_PREFERENCES",
        default_value = "freshline-preferences.json",
        global = true
    )]
    pub preferences_path: PathBuf,

    /// Display language for this run, overriding the saved preference (en, es)
    #[arg(long, env = "FRESHLINE_LANGUAGE", global = true)]
    pub language: Option<Language>,
}

impl AppConfig {
    /// Simulated repository latency.
    #[must_use]
    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}
