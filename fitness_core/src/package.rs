//! Building calculators from raw sensor packages.

use crate::config::ValidationConfig;
use crate::workout::{Running, SportsWalking, Swimming, Workout};
use crate::{Error, Result, WorkoutKind, WorkoutPackage};

/// Build a workout from a kind code and its positional raw data
///
/// Magnitude checks use the default [`ValidationConfig`].
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    read_package_with(workout_type, data, &ValidationConfig::default())
}

/// Build a workout, applying the given validation rules
///
/// Checks run in order: kind code, arity, magnitudes.
pub fn read_package_with(
    workout_type: &str,
    data: &[f64],
    validation: &ValidationConfig,
) -> Result<Workout> {
    let kind = WorkoutKind::from_code(workout_type)?;

    if data.len() != kind.arity() {
        return Err(Error::InvalidArity {
            kind: kind.code(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    if validation.guard_magnitudes {
        check_magnitudes(kind, data)?;
    }

    let workout: Workout = match *data {
        [action, duration, weight] => Running::new(action, duration, weight).into(),
        [action, duration, weight, height] => {
            SportsWalking::new(action, duration, weight, height).into()
        }
        [action, duration, weight, length_pool, count_pool] => {
            Swimming::new(action, duration, weight, length_pool, count_pool).into()
        }
        _ => unreachable!("arity already validated"),
    };

    tracing::debug!("Built {} workout from {:?}", kind.label(), data);
    Ok(workout)
}

/// Build a workout from a deserialized package
pub fn read_workout_package(package: &WorkoutPackage, validation: &ValidationConfig) -> Result<Workout> {
    read_package_with(&package.workout_type, &package.data, validation)
}

fn check_magnitudes(kind: WorkoutKind, data: &[f64]) -> Result<()> {
    for (&field, &value) in kind.field_names().iter().zip(data) {
        let must_be_positive = matches!(field, "duration" | "height");
        if !value.is_finite() || (must_be_positive && value <= 0.0) {
            return Err(Error::InvalidMagnitude { field, value });
        }
    }
    Ok(())
}
