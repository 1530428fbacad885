//! CLI tests for the wrfviz pipeline.
//!
//! Spawns the wrfviz binary with a dry-run configuration and verifies the
//! pipeline's filesystem effects without invoking the real plotting
//! toolchain.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn write_config(root: &Path, extra: &str) -> PathBuf {
    let config = format!(
        r#"
domain = "baseeurope"
model_run = "operational"
ncl_code_dir = "{root}/ncl"
ncl_code = ["{root}/ncl/surface.ncl"]
ncl_ol_code = ["{root}/ncl/overlay.ncl"]
ncl_log = "{root}/ncl.log"
wrfout_dir = "{root}/wrfout"
init_time = "2023-05-01 06:00:00"
dom = 2
locations_file = "{root}/locations.csv"
ncl_out_dir = "{root}/plots/%Y-%m-%d_%H"
ncl_ol_out_dir = "{root}/ol/%Y-%m-%d_%H"
ncl_out_type = "png"
ncl_web_dir = "{root}/web/plots/%Y-%m-%d_%H"
ncl_ol_web_dir = "{root}/web/ol/%Y-%m-%d_%H"
gwarp = "{root}/bin/gwarp"
full_trace = true
wrftools_dir = "{root}/wrftools"
{extra}
"#,
        root = root.display()
    );
    let path = root.join("wrfviz.toml");
    fs::write(&path, config).expect("write config");
    path
}

#[test]
fn all_runs_the_pipeline_in_dry_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    let config_path = write_config(root, "dry_run = true");

    // Seed the plain output dir so publish has something to copy.
    let out_dir = root.join("plots/2023-05-01_06");
    fs::create_dir_all(&out_dir).expect("create out dir");
    fs::write(out_dir.join("t2.png"), "t2").expect("seed plot");

    let status = Command::new(env!("CARGO_BIN_EXE_wrfviz"))
        .arg("--config")
        .arg(&config_path)
        .arg("all")
        .status()
        .expect("wrfviz all");
    assert!(status.success());

    // Both output dirs exist, and the seeded plot reached the web dir.
    assert!(root.join("ol/2023-05-01_06").is_dir());
    assert_eq!(
        fs::read_to_string(root.join("web/plots/2023-05-01_06/t2.png")).expect("read published"),
        "t2"
    );
    assert!(root.join("web/ol/2023-05-01_06").is_dir());

    // Dry run spawned no scripts, so no NCL log was written.
    assert!(!root.join("ncl.log").exists());
}

#[test]
fn missing_required_key_exits_nonzero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    let config_path = write_config(root, "");
    let truncated = fs::read_to_string(&config_path)
        .expect("read config")
        .replace(&format!("gwarp = \"{}/bin/gwarp\"\n", root.display()), "");
    fs::write(&config_path, truncated).expect("rewrite config");

    let status = Command::new(env!("CARGO_BIN_EXE_wrfviz"))
        .arg("--config")
        .arg(&config_path)
        .arg("publish")
        .status()
        .expect("wrfviz publish");
    assert!(!status.success());
}
