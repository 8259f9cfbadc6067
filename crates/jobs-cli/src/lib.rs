//! Orchestration layer for the job-postings cleaning pipeline.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;
