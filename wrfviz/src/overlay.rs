//! Overlay plot production: NCL scripts plus a raster warp pass.
//!
//! Overlay scripts render `.tiff` output that the configured warp program
//! georeferences after each script finishes. The warp invocation receives
//! the absolute paths of the files it should process, so neither the
//! working directory nor the parent environment is ever touched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::NCL_PROGRAM;
use crate::core::env::{OverlayVars, ncarg_vars};
use crate::core::paths::{forecast_file, nest_id};
use crate::core::template::sub_date;
use crate::io::config::VizConfig;
use crate::io::process::{CommandRequest, CommandRunner};

/// Run every script in `ncl_ol_code` in order, warping the `.tiff` files
/// of the output directory once after each script.
pub fn produce_overlay_plots(config: &VizConfig, runner: &dyn CommandRunner) -> Result<()> {
    info!("running ncl overlay plot scripts");

    let fcst_file = forecast_file(&config.wrfout_dir, config.dom, &config.init_time);
    let out_dir = sub_date(&config.ncl_ol_out_dir, &config.init_time)?;
    fs::create_dir_all(&out_dir).with_context(|| format!("create output dir {out_dir}"))?;

    let vars = OverlayVars {
        fcst_file,
        out_dir: out_dir.clone(),
        out_type: config.ncl_out_type.clone(),
        nest_id: nest_id(config.dom),
    };
    let mut env = vars.to_pairs();
    env.extend(ncarg_vars(std::env::var("NCARG_ROOT").ok().as_deref()));
    for (name, value) in &env {
        debug!(name = %name, value = %value, "script environment");
    }

    for script in &config.ncl_ol_code {
        let request = CommandRequest {
            program: NCL_PROGRAM.to_string(),
            args: vec![script.clone()],
            env: env.clone(),
            log_path: Some(config.ncl_log.clone()),
            timeout: config.command_timeout(),
        };
        let status = runner.run(&request)?;
        if config.strict && !status.success() {
            bail!(
                "ncl overlay script {script} failed with exit code {:?}",
                status.exit_code
            );
        }

        warp_tiffs(config, runner, Path::new(&out_dir))?;
    }

    Ok(())
}

/// Invoke the warp program on the `.tiff` files directly inside `out_dir`.
fn warp_tiffs(config: &VizConfig, runner: &dyn CommandRunner, out_dir: &Path) -> Result<()> {
    let tiffs = tiff_files(out_dir)?;
    if tiffs.is_empty() {
        debug!(out_dir = %out_dir.display(), "no tiff output to warp");
        return Ok(());
    }

    let request = CommandRequest {
        program: config.gwarp.display().to_string(),
        args: tiffs
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
        env: Vec::new(),
        log_path: None,
        timeout: config.command_timeout(),
    };
    let status = runner.run(&request)?;
    if config.strict && !status.success() {
        bail!(
            "warp of {} failed with exit code {:?}",
            out_dir.display(),
            status.exit_code
        );
    }
    Ok(())
}

fn tiff_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut tiffs = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "tiff") {
            tiffs.push(path);
        }
    }
    tiffs.sort();
    Ok(tiffs)
}
