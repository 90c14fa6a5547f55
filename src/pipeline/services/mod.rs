//! Application services for pipeline orchestration.

mod store;

pub use store::{
    HydrationOutcome, MutationOutcome, PipelineStore, PipelineStoreError, PipelineStoreResult,
};
