//! Support library for the `spanwise` binary.
//!
//! Exposes dataset loading, the batch runner, report writers, and the clap
//! front end so tests and doctests can drive the pipeline in-process.

pub mod batch;
pub mod cli;
pub mod dataset;
pub mod logging;
pub mod report;
