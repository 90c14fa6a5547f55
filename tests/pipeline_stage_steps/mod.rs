//! Step definitions for pipeline stage scenarios.

pub mod given;
pub mod then;
pub mod when;
