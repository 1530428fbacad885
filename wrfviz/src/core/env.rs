//! Environment variable sets handed to the plotting scripts.
//!
//! NCL scripts take their inputs via `getenv`, so each invocation receives
//! an explicit `(name, value)` mapping. The mapping is built once per plot
//! run and attached to every spawn request; the parent process environment
//! is never mutated, so concurrent runs cannot observe each other's
//! variables.

use std::path::PathBuf;

/// Variables the plain plotting scripts read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotVars {
    pub fcst_file: PathBuf,
    pub locations_file: PathBuf,
    pub out_dir: String,
    pub out_type: String,
    pub nest_id: String,
    pub domain: String,
    pub model_run: String,
}

impl PlotVars {
    /// Render as `(name, value)` pairs in a stable order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("FCST_FILE".to_string(), self.fcst_file.display().to_string()),
            (
                "LOCATIONS_FILE".to_string(),
                self.locations_file.display().to_string(),
            ),
            ("NCL_OUT_DIR".to_string(), self.out_dir.clone()),
            ("NCL_OUT_TYPE".to_string(), self.out_type.clone()),
            ("NEST_ID".to_string(), self.nest_id.clone()),
            ("DOMAIN".to_string(), self.domain.clone()),
            ("MODEL_RUN".to_string(), self.model_run.clone()),
        ]
    }
}

/// Variables the overlay plotting scripts read.
///
/// A strict subset of [`PlotVars`]: overlay scripts take no locations
/// file, domain name, or model run identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayVars {
    pub fcst_file: PathBuf,
    pub out_dir: String,
    pub out_type: String,
    pub nest_id: String,
}

impl OverlayVars {
    /// Render as `(name, value)` pairs in a stable order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("FCST_FILE".to_string(), self.fcst_file.display().to_string()),
            ("NCL_OUT_DIR".to_string(), self.out_dir.clone()),
            ("NCL_OUT_TYPE".to_string(), self.out_type.clone()),
            ("NEST_ID".to_string(), self.nest_id.clone()),
        ]
    }
}

/// NCL locates its resource directory through `NCARG_NCARG`. Derive it
/// from the caller's `NCARG_ROOT` when one is available.
pub fn ncarg_vars(ncarg_root: Option<&str>) -> Vec<(String, String)> {
    match ncarg_root {
        Some(root) => vec![("NCARG_NCARG".to_string(), format!("{root}/lib/ncarg"))],
        None => Vec::new(),
    }
}
