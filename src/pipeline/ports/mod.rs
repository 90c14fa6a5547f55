//! Port contracts for pipeline persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by pipeline services.

pub mod repository;

pub use repository::{PipelineRepository, PipelineRepositoryError, PipelineRepositoryResult};
