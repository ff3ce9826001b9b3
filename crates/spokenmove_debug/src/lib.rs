//! Parse tracing for spokenmove.
//!
//! This crate provides:
//! - `Tracer` - a [`ParseObserver`](spokenmove_parser::ParseObserver) that
//!   records rule entry, matches and failures into a ring buffer
//! - `HumanFormatter` / `JsonFormatter` - trace output for people and tools

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
