//! Pure logic: path derivation, date substitution, script environments.
//! No I/O, fully testable in isolation.

pub mod env;
pub mod paths;
pub mod template;
