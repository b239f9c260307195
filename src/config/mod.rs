//! Configuration module for bill-splitter
//!
//! This module provides:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SplitterPaths;
pub use settings::Settings;
