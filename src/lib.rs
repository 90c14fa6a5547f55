//! Hirelane: recruiting pipeline state core.
//!
//! This crate provides the pipeline store behind a recruiting dashboard. It
//! tracks which candidates are under consideration, places each of them in
//! exactly one of five ordered hiring stages, and persists the whole
//! collection after every mutation.
//!
//! # Architecture
//!
//! Hirelane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`pipeline`]: Candidate pipeline store, stage model and persistence

pub mod pipeline;
