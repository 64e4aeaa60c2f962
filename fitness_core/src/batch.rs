//! Sequential processing of many packages.
//!
//! A bad record never aborts the batch: it is logged, kept as a failed
//! outcome, and the next record is processed. Outcomes keep input order.

use crate::config::ValidationConfig;
use crate::package::read_workout_package;
use crate::report::InfoMessage;
use crate::workout::Training;
use crate::{Error, Result, WorkoutPackage};

/// Result of processing one package
#[derive(Debug)]
pub struct PackageOutcome {
    /// Zero-based position in the input
    pub index: usize,
    pub workout_type: String,
    pub result: Result<InfoMessage>,
}

/// All outcomes of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<PackageOutcome>,
}

impl BatchSummary {
    /// Successful reports in input order
    pub fn reports(&self) -> impl Iterator<Item = &InfoMessage> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failed records with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&PackageOutcome, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o, e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Build and report every package, skipping the ones that fail
pub fn process_packages(packages: &[WorkoutPackage], validation: &ValidationConfig) -> BatchSummary {
    let outcomes = packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let result =
                read_workout_package(package, validation).map(|w| w.show_training_info());

            if let Err(ref e) = result {
                tracing::warn!(
                    "Skipping record {} ({}): {}",
                    index + 1,
                    package.workout_type,
                    e
                );
            }

            PackageOutcome {
                index,
                workout_type: package.workout_type.clone(),
                result,
            }
        })
        .collect();

    BatchSummary { outcomes }
}
