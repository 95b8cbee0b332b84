//! Command-line front-end for the tag builder.
//!
//! Builds one element from a JSON tag description and/or command-line flags
//! and prints it in the requested render mode.

/// Argument parsing and the build pipeline.
pub mod cli;
/// JSON tag descriptions.
pub mod spec;

pub use cli::{Cli, build, run};
pub use spec::TagSpec;
