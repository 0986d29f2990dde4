//! fieldscribe-core — transcript-to-report-form extraction pipeline.
//!
//! Takes a loosely formatted work-report transcript (speech-to-text output
//! or typed free text) and produces canonical `field=value` lines for a
//! fixed 22-field schema, consumable by a downstream form filler.
//!
//! # Architecture
//!
//! ```text
//! transcript ──► phrase scan ──┐
//!                              ├──► Extraction ──► render
//!               line scan ─────┘
//! (registry + normalizer feed both scans)
//! ```
//!
//! Extraction is a pure function of the input string: no I/O, no shared
//! mutable state, never panics. Unrecognizable input degrades to omitted
//! fields, not errors.

pub mod config;
pub mod extractor;
pub mod normalizer;
pub mod registry;
pub mod render;
pub mod types;

pub use extractor::Extractor;
pub use types::{Extraction, Field, UnknownFieldError};

use std::sync::LazyLock;

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::new);

/// Extract `field=value` lines from a transcript using a process-wide
/// default-configured [`Extractor`].
pub fn extract(transcript: &str) -> String {
    DEFAULT_EXTRACTOR.extract(transcript)
}
