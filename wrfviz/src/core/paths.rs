//! Forecast file locations and nest identifiers.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Path of the wrfout NetCDF file the plotting scripts read.
///
/// WRF names its output after the nest and the forecast initialization
/// time: `wrfout_d<NN>_<YYYY-MM-DD_HH>:00:00.nc`. The minute/second part
/// is always `:00:00` since model runs start on the hour.
pub fn forecast_file(wrfout_dir: &Path, dom: u32, init_time: &NaiveDateTime) -> PathBuf {
    wrfout_dir.join(format!(
        "wrfout_d{dom:02}_{}:00:00.nc",
        init_time.format("%Y-%m-%d_%H")
    ))
}

/// Zero-padded two-digit nest index handed to the scripts.
pub fn nest_id(dom: u32) -> String {
    format!("{dom:02}")
}
