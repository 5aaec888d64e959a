//! Common utilities for the cssel workspace.
//!
//! This crate provides shared infrastructure used by the builder and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for input
//!   that is accepted but probably not what the caller meant

pub mod warning;
