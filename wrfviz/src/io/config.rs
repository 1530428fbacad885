//! Visualization configuration loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Configuration for a visualization run (TOML).
///
/// Every field without a default is required; a missing key fails
/// deserialization, which is the only configuration check performed —
/// values are taken at face value and errors surface when the pipeline
/// touches the filesystem or spawns a script.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VizConfig {
    /// Model domain name (e.g. `baseeurope`), exported to the scripts.
    pub domain: String,
    /// Model run identifier, exported to the scripts.
    pub model_run: String,
    /// Directory holding the NCL sources. Entries in `ncl_code` are
    /// already full paths; the scripts use this to locate shared code.
    pub ncl_code_dir: PathBuf,
    /// Plain plotting scripts, run in order.
    pub ncl_code: Vec<String>,
    /// Overlay plotting scripts, run in order.
    pub ncl_ol_code: Vec<String>,
    /// Combined stdout/stderr of every script is appended here.
    pub ncl_log: PathBuf,
    /// Directory holding wrfout NetCDF files.
    pub wrfout_dir: PathBuf,
    /// Forecast initialization time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(deserialize_with = "de_init_time")]
    pub init_time: NaiveDateTime,
    /// Nest index within the model domain.
    pub dom: u32,
    /// Locations file exported to the plain plotting scripts.
    pub locations_file: PathBuf,
    /// Output directory template for plain plots (strftime placeholders).
    pub ncl_out_dir: String,
    /// Output directory template for overlay plots.
    pub ncl_ol_out_dir: String,
    /// Image format the scripts produce (e.g. `png`).
    pub ncl_out_type: String,
    /// Publish directory template for plain plots.
    pub ncl_web_dir: String,
    /// Publish directory template for overlay plots.
    pub ncl_ol_web_dir: String,
    /// Warp program applied to overlay `.tiff` output.
    pub gwarp: PathBuf,
    /// Log each transferred file during publishing.
    pub full_trace: bool,
    /// Install root of the wider forecast toolchain, for the scripts' use.
    pub wrftools_dir: PathBuf,

    /// Log commands instead of spawning them.
    #[serde(default)]
    pub dry_run: bool,
    /// Escalate non-zero script exits into errors instead of discarding
    /// them.
    #[serde(default)]
    pub strict: bool,
    /// Kill a script that runs longer than this; unset means wait forever.
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,
}

impl VizConfig {
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}

/// Load config from a TOML file.
pub fn load_config(path: &Path) -> Result<VizConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: VizConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

fn de_init_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S").map_err(serde::de::Error::custom)
}
