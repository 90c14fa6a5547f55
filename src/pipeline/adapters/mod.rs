//! Adapter implementations of the pipeline repository port.
//!
//! - [`memory`]: volatile in-process storage, used by tests
//! - [`file`]: one JSON document per storage key in a directory

pub mod file;
pub mod memory;
