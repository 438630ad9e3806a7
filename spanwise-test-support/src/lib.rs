//! Test helpers shared by the spanwise crates.
//!
//! [`tracing::RecordingLayer`] captures spans and events so tests can assert
//! on instrumentation. [`ci`] reads environment overrides that tune the
//! property suites.

pub mod ci;
pub mod tracing;
