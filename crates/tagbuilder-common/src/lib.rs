//! Common utilities for the tag builder crates.
//!
//! This crate provides shared infrastructure used by the builder and its front-ends:
//! - **Warning System** - colored, deduplicated terminal output for silently
//!   altered markup

pub mod warning;
