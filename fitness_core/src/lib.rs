#![forbid(unsafe_code)]

//! Core domain model for the fitrep workout report system.
//!
//! This crate provides:
//! - Workout kinds and raw sensor packages
//! - Per-kind calculators (distance, mean speed, calories)
//! - The package factory with arity and magnitude checks
//! - Report formatting
//! - Batch processing and input readers

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod workout;
pub mod report;
pub mod package;
pub mod input;
pub mod batch;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, OutputFormat, ValidationConfig};
pub use workout::{Running, SportsWalking, Swimming, Training, Workout};
pub use report::{format_report, InfoMessage};
pub use package::{read_package, read_package_with};
pub use input::{load_packages, parse_values};
pub use batch::{process_packages, BatchSummary, PackageOutcome};
