//! Core domain types for the fitness report system.
//!
//! This module defines:
//! - Workout kinds and their wire codes
//! - Raw workout packages as received from sensors
//! - The shared per-workout record

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Workout Kinds
// ============================================================================

/// Type of workout, keyed on the wire by a three-letter code
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Look up a kind by its sensor code (`RUN`, `WLK`, `SWM`)
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            other => Err(Error::UnknownWorkoutKind(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Training type label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional field names expected in a package's raw data
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    pub fn arity(&self) -> usize {
        self.field_names().len()
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for WorkoutKind {
    type Error = Error;

    fn try_from(code: String) -> Result<Self> {
        Self::from_code(&code)
    }
}

impl From<WorkoutKind> for String {
    fn from(kind: WorkoutKind) -> Self {
        kind.code().to_string()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Packages and Records
// ============================================================================

/// One raw `(code, data)` pair as delivered by a sensor
///
/// The code is kept as a plain string so that unknown kinds survive
/// deserialization and are rejected by the factory instead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Fields shared by every workout kind
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainingRecord {
    /// Steps or strokes
    pub action: f64,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

/// The packages the reference program runs when given no input
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for kind in WorkoutKind::ALL {
            assert_eq!(WorkoutKind::from_code(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = WorkoutKind::from_code("XYZ").unwrap_err();
        assert!(matches!(err, Error::UnknownWorkoutKind(ref c) if c == "XYZ"));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!("run".parse::<WorkoutKind>().is_err());
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
    }

    #[test]
    fn test_arity() {
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            WorkoutKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&WorkoutKind::Swimming).unwrap();
        assert_eq!(json, "\"SWM\"");
        let parsed: WorkoutKind = serde_json::from_str("\"WLK\"").unwrap();
        assert_eq!(parsed, WorkoutKind::SportsWalking);
        assert!(serde_json::from_str::<WorkoutKind>("\"XYZ\"").is_err());
    }

    #[test]
    fn test_sample_packages_order() {
        let codes: Vec<_> = sample_packages()
            .into_iter()
            .map(|p| p.workout_type)
            .collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    }
}
