//! Candidate pipeline management for Hirelane.
//!
//! This module holds the candidates currently under consideration, tags each
//! with a hiring stage, and exposes add, remove, move and update operations
//! with persistence after every mutation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Persisted document versioning in [`versioning`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod versioning;

#[cfg(test)]
mod tests;
