//! Side-effecting operations: configuration loading, process spawning,
//! file transfer.

pub mod config;
pub mod process;
pub mod transfer;
