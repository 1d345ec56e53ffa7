//! Tabungan Kelas - savings and expense tracker for class cohorts
//!
//! This library provides the core functionality for the tabungan CLI.
//! It tracks per-student savings deposits and shared class expenses for
//! classes 7, 8, and 9, with local JSON persistence, recap reports,
//! terminal charts, Excel export, and JSON backups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, classes, money, filters)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregation, recap, and chart data
//! - `display`: Terminal rendering helpers
//! - `backup`: JSON backup and restore
//! - `export`: Excel export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tabungan_cli::config::TabunganPaths;
//! use tabungan_cli::context::AppContext;
//!
//! let paths = TabunganPaths::new()?;
//! let mut ctx = AppContext::new(paths)?;
//! ctx.load();
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use context::AppContext;
pub use error::{TabunganError, TabunganResult};
