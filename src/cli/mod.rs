//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod split;

pub use split::{handle_split_command, OutputFormat, SplitArgs, SplitView};
