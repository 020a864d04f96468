//! Common utilities for the wren HTML parser.
//!
//! This crate provides shared infrastructure used by the parser crates:
//! - **Warning System** - colored, deduplicated terminal output for
//!   malformed input the parser recovered from

pub mod warning;
