//! Configuration module for tabungan-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TabunganPaths;
pub use settings::{ChartStyle, Settings};
