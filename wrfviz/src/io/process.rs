//! Subprocess execution with per-invocation environments.
//!
//! The [`CommandRunner`] trait decouples plot orchestration from actual
//! process spawning. Production code uses [`LocalRunner`]; configurations
//! with `dry_run` set get [`DryRunner`]; tests use recording fakes that
//! never spawn anything.
//!
//! A child's environment travels inside its [`CommandRequest`] and is
//! applied to that spawn only. The parent environment is never mutated,
//! so two runs in the same process cannot race on which variables a
//! script observes.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};
use wait_timeout::ChildExt;

use crate::io::config::VizConfig;

/// A single subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Program to execute (a path, or a name resolved via `PATH`).
    pub program: String,
    pub args: Vec<String>,
    /// Environment variables visible to this invocation only, on top of
    /// the inherited parent environment.
    pub env: Vec<(String, String)>,
    /// Append combined stdout/stderr to this file; inherit the parent's
    /// streams when `None`.
    pub log_path: Option<PathBuf>,
    /// Kill the child after this long; wait forever when `None`.
    pub timeout: Option<Duration>,
}

/// Exit state of a finished invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code (`None` if terminated by a signal or the timeout).
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0) && !self.timed_out
    }
}

/// Abstraction over subprocess execution backends.
pub trait CommandRunner {
    fn run(&self, request: &CommandRequest) -> Result<CommandStatus>;
}

/// Spawns the requested program on the local host.
pub struct LocalRunner;

impl CommandRunner for LocalRunner {
    #[instrument(skip_all, fields(program = %request.program))]
    fn run(&self, request: &CommandRequest) -> Result<CommandStatus> {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args).stdin(Stdio::null());
        for (name, value) in &request.env {
            cmd.env(name, value);
        }
        if let Some(path) = &request.log_path {
            let log = open_log_append(path)?;
            let log_err = log
                .try_clone()
                .with_context(|| format!("clone log handle {}", path.display()))?;
            cmd.stdout(Stdio::from(log)).stderr(Stdio::from(log_err));
        }

        debug!(args = ?request.args, "spawning child process");
        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawn {}", request.program))?;

        let status = match request.timeout {
            Some(timeout) => match child.wait_timeout(timeout).context("wait for command")? {
                Some(status) => status,
                None => {
                    warn!(
                        timeout_secs = timeout.as_secs(),
                        "command timed out, killing"
                    );
                    child.kill().context("kill command")?;
                    child.wait().context("wait command after kill")?;
                    return Ok(CommandStatus {
                        exit_code: None,
                        timed_out: true,
                    });
                }
            },
            None => child.wait().context("wait for command")?,
        };

        debug!(exit_code = ?status.code(), "command finished");
        Ok(CommandStatus {
            exit_code: status.code(),
            timed_out: false,
        })
    }
}

/// Logs each command instead of spawning it.
pub struct DryRunner;

impl CommandRunner for DryRunner {
    fn run(&self, request: &CommandRequest) -> Result<CommandStatus> {
        info!(program = %request.program, args = ?request.args, "dry run");
        Ok(CommandStatus {
            exit_code: Some(0),
            timed_out: false,
        })
    }
}

/// Pick the runner the configuration asks for.
pub fn runner_for(config: &VizConfig) -> Box<dyn CommandRunner> {
    if config.dry_run {
        Box::new(DryRunner)
    } else {
        Box::new(LocalRunner)
    }
}

fn open_log_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("open log {}", path.display()))
}
