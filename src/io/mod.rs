//! Binary source/sink boundaries and in-memory implementations.
//!
//! This module provides:
//! - [`AssetSource`] / [`AssetSink`] - the boundary traits entities read
//!   from and write to, with typed accessors dispatched on byte order
//! - [`MemorySource`] / [`MemorySink`] - buffer-backed implementations

mod memory;
mod sink;
mod source;

pub use memory::{MemorySink, MemorySource};
pub use sink::AssetSink;
pub use source::AssetSource;
