//! `BackOfficeConfig`: feed file locations and the GUI throttle settings,
//! loadable from an optional TOML file and `BACKOFFICE_*` environment
//! variables, with CLI flags layered on top in `main` (§4.0 ambient stack).

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackOfficeConfig {
    /// Directory containing `trades.txt`, `marketdata.txt`, `prices.txt`,
    /// `inquiries.txt`.
    pub input_dir: PathBuf,
    /// Directory the six derived feeds are written to.
    pub output_dir: PathBuf,
    /// GUI throttle interval in milliseconds (§4.5 default: 300).
    pub gui_interval_ms: u64,
    /// GUI throttle sample cap (§4.5 default: 100).
    pub gui_max_samples: u32,
    /// Emit structured JSON logs instead of human-readable ones.
    pub json_logs: bool,
}

impl Default for BackOfficeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("feeds/in"),
            output_dir: PathBuf::from("feeds/out"),
            gui_interval_ms: 300,
            gui_max_samples: 100,
            json_logs: false,
        }
    }
}

impl BackOfficeConfig {
    /// Loads defaults, then an optional TOML file, then `BACKOFFICE_*`
    /// environment variables, in that precedence order.
    pub fn load(config_file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("input_dir", defaults.input_dir.to_string_lossy().to_string())?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().to_string())?
            .set_default("gui_interval_ms", defaults.gui_interval_ms)?
            .set_default("gui_max_samples", defaults.gui_max_samples)?
            .set_default("json_logs", defaults.json_logs)?;

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        builder = builder.add_source(config::Environment::with_prefix("BACKOFFICE"));

        builder.build()?.try_deserialize()
    }

    pub fn feed_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
