//! Orchestration for WRF forecast visualization.
//!
//! Wraps an external NCL plotting toolchain: resolves forecast file paths
//! and timestamped output directories, invokes plotting scripts as
//! subprocesses with an explicit per-invocation environment, warps overlay
//! raster output, and publishes the images to web directories. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (path derivation, date
//!   substitution, script environments). No I/O, fully testable in
//!   isolation.
//! - **[`io`]**: Side-effecting operations (configuration, process
//!   execution, file transfer). Isolated to enable mocking in tests.
//!
//! Orchestration modules ([`plots`], [`overlay`], [`publish`]) coordinate
//! core logic with I/O to implement CLI commands.

pub mod core;
pub mod io;
pub mod logging;
pub mod overlay;
pub mod plots;
pub mod publish;
#[cfg(test)]
pub mod test_support;

/// Interpreter every plotting script is handed to.
pub const NCL_PROGRAM: &str = "ncl";
