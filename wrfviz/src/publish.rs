//! Publishing: copy produced plots into the web directories.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::template::sub_date;
use crate::io::config::VizConfig;
use crate::io::transfer::{DebugLevel, TransferMode, list_dir_shallow, transfer};

/// Copy every entry of the plain and overlay output directories into the
/// corresponding publish directories, creating destinations on demand.
///
/// Copy semantics: sources stay in place and re-running with an unchanged
/// source overwrites the same files, so the operation is idempotent.
pub fn publish_to_web(config: &VizConfig) -> Result<()> {
    debug!("transferring plot files to web dir");

    let debug_level = if config.full_trace {
        DebugLevel::Verbose
    } else {
        DebugLevel::None
    };
    let pairs = [
        (&config.ncl_out_dir, &config.ncl_web_dir),
        (&config.ncl_ol_out_dir, &config.ncl_ol_web_dir),
    ];

    for (out_template, web_template) in pairs {
        let out_dir = sub_date(out_template, &config.init_time)?;
        let web_dir = sub_date(web_template, &config.init_time)?;
        fs::create_dir_all(&web_dir)
            .with_context(|| format!("create publish dir {web_dir}"))?;

        let entries = list_dir_shallow(Path::new(&out_dir))?;
        transfer(&entries, Path::new(&web_dir), TransferMode::Copy, debug_level)?;
    }

    Ok(())
}
