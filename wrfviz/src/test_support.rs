//! Test-only helpers: canned configurations and recording command runners.

use std::cell::RefCell;
use std::path::Path;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

use crate::io::config::VizConfig;
use crate::io::process::{CommandRequest, CommandRunner, CommandStatus};

/// 2023-05-01 06:00:00, the init time every canned config uses.
pub fn test_init_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 5, 1)
        .expect("date")
        .and_hms_opt(6, 0, 0)
        .expect("time")
}

/// Configuration rooted under `root` with deterministic values and empty
/// script lists.
pub fn test_config(root: &Path) -> VizConfig {
    VizConfig {
        domain: "baseeurope".to_string(),
        model_run: "operational".to_string(),
        ncl_code_dir: root.join("ncl"),
        ncl_code: Vec::new(),
        ncl_ol_code: Vec::new(),
        ncl_log: root.join("ncl.log"),
        wrfout_dir: root.join("wrfout"),
        init_time: test_init_time(),
        dom: 2,
        locations_file: root.join("locations.csv"),
        ncl_out_dir: root.join("plots/%Y-%m-%d_%H").display().to_string(),
        ncl_ol_out_dir: root.join("ol/%Y-%m-%d_%H").display().to_string(),
        ncl_out_type: "png".to_string(),
        ncl_web_dir: root.join("web/plots/%Y-%m-%d_%H").display().to_string(),
        ncl_ol_web_dir: root.join("web/ol/%Y-%m-%d_%H").display().to_string(),
        gwarp: root.join("bin/gwarp"),
        full_trace: false,
        wrftools_dir: root.join("wrftools"),
        dry_run: false,
        strict: false,
        command_timeout_secs: None,
    }
}

/// Command runner that records every request and returns a fixed exit
/// code without spawning anything.
#[derive(Default)]
pub struct RecordingRunner {
    requests: RefCell<Vec<CommandRequest>>,
    exit_code: i32,
}

impl RecordingRunner {
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            exit_code,
        }
    }

    /// Requests seen so far, in invocation order.
    pub fn requests(&self) -> Vec<CommandRequest> {
        self.requests.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, request: &CommandRequest) -> Result<CommandStatus> {
        self.requests.borrow_mut().push(request.clone());
        Ok(CommandStatus {
            exit_code: Some(self.exit_code),
            timed_out: false,
        })
    }
}
