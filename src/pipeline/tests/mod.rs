//! Unit tests for the pipeline module.
//!
//! Tests are organised by domain concept, covering happy paths, no-op cases,
//! and persistence failure handling for the store.
