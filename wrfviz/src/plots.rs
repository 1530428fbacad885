//! Plain plot production: runs the configured NCL scripts in order.

use std::fs;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::NCL_PROGRAM;
use crate::core::env::{PlotVars, ncarg_vars};
use crate::core::paths::{forecast_file, nest_id};
use crate::core::template::sub_date;
use crate::io::config::VizConfig;
use crate::io::process::{CommandRequest, CommandRunner};

/// Run every script in `ncl_code`, strictly in list order.
///
/// The environment is resolved once before the loop, so every script sees
/// identical values. Script exit status is discarded unless the config
/// sets `strict`.
pub fn produce_plots(config: &VizConfig, runner: &dyn CommandRunner) -> Result<()> {
    info!("running ncl plot scripts");

    let fcst_file = forecast_file(&config.wrfout_dir, config.dom, &config.init_time);
    let out_dir = sub_date(&config.ncl_out_dir, &config.init_time)?;
    fs::create_dir_all(&out_dir).with_context(|| format!("create output dir {out_dir}"))?;

    let vars = PlotVars {
        fcst_file,
        locations_file: config.locations_file.clone(),
        out_dir,
        out_type: config.ncl_out_type.clone(),
        nest_id: nest_id(config.dom),
        domain: config.domain.clone(),
        model_run: config.model_run.clone(),
    };
    let mut env = vars.to_pairs();
    env.extend(ncarg_vars(std::env::var("NCARG_ROOT").ok().as_deref()));
    for (name, value) in &env {
        debug!(name = %name, value = %value, "script environment");
    }

    for script in &config.ncl_code {
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
                "ncl script {script} failed with exit code {:?}",
                status.exit_code
            );
        }
    }

    Ok(())
}
