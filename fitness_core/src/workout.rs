//! Per-kind training calculators.
//!
//! Every workout shares the base distance and speed formulas; each kind
//! supplies its own calorie formula and may override the rest:
//! - Running: base distance and speed
//! - SportsWalking: base distance and speed, height-dependent calories
//! - Swimming: stroke length for distance, pool lengths for speed

use crate::report::InfoMessage;
use crate::{TrainingRecord, WorkoutKind};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Floor division with the semantics of a float `//`.
///
/// The quotient is taken from the remainder-adjusted division and then
/// rounded toward negative infinity, so `floor_div(-7.0, 2.0) == -4.0`.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Common calculator contract
pub trait Training {
    /// Distance covered by one action, in metres
    const LEN_STEP: f64 = 0.65;

    fn kind(&self) -> WorkoutKind;

    fn record(&self) -> &TrainingRecord;

    /// Distance in km
    fn distance_km(&self) -> f64 {
        self.record().action * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration
    }

    /// Energy spent in kcal
    fn spent_calories(&self) -> f64;

    /// Assemble the report for this workout
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: self.record().duration,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

// ============================================================================
// Running
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub record: TrainingRecord,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            record: TrainingRecord {
                action,
                duration,
                weight,
            },
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - Self::CALORIES_SPEED_SHIFT)
            * self.record.weight
            / M_IN_KM
            * self.record.duration
            * MIN_IN_H
    }
}

// ============================================================================
// Sports Walking
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub record: TrainingRecord,
    /// Centimetres
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            record: TrainingRecord {
                action,
                duration,
                weight,
            },
            height,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn spent_calories(&self) -> f64 {
        // Squared speed over height is floored on purpose
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.record.weight
            + floor_div(self.mean_speed_kmh().powi(2), self.height)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.record.weight)
            * (self.record.duration * MIN_IN_H)
    }
}

// ============================================================================
// Swimming
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub record: TrainingRecord,
    /// Metres
    pub length_pool: f64,
    pub count_pool: f64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: f64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            record: TrainingRecord {
                action,
                duration,
                weight,
            },
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    /// One stroke
    const LEN_STEP: f64 = 1.38;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn record(&self) -> &TrainingRecord {
        &self.record
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.record.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.record.weight
    }
}

// ============================================================================
// Workout (factory result)
// ============================================================================

/// Any one of the supported calculators
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(w) => w.kind(),
            Workout::SportsWalking(w) => w.kind(),
            Workout::Swimming(w) => w.kind(),
        }
    }

    fn record(&self) -> &TrainingRecord {
        match self {
            Workout::Running(w) => w.record(),
            Workout::SportsWalking(w) => w.record(),
            Workout::Swimming(w) => w.record(),
        }
    }

    fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_metrics() {
        let run = Running::new(15000.0, 1.0, 75.0);
        assert_close(run.distance_km(), 9.75);
        assert_close(run.mean_speed_kmh(), 9.75);
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert_close(run.spent_calories(), 699.75);
    }

    #[test]
    fn test_walking_metrics_floor_is_zero() {
        let walk = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);
        assert_close(walk.distance_km(), 5.85);
        assert_close(walk.mean_speed_kmh(), 5.85);
        // 5.85^2 / 180 floors to 0, leaving only the weight term
        assert_close(walk.spent_calories(), 157.5);
    }

    #[test]
    fn test_walking_metrics_floor_is_discrete() {
        // 13^2 = 169, 169 // 10 = 16 (not 16.9)
        let walk = SportsWalking::new(20000.0, 1.0, 75.0, 10.0);
        assert_close(walk.mean_speed_kmh(), 13.0);
        assert_close(walk.spent_calories(), (0.035 * 75.0 + 16.0 * 0.029 * 75.0) * 60.0);
    }

    #[test]
    fn test_swimming_metrics() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert_close(swim.distance_km(), 0.9936);
        assert_close(swim.mean_speed_kmh(), 1.0);
        assert_close(swim.spent_calories(), 336.0);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few = Swimming::new(10.0, 2.0, 80.0, 50.0, 20.0);
        let many = Swimming::new(10_000.0, 2.0, 80.0, 50.0, 20.0);
        assert_close(few.mean_speed_kmh(), 0.5);
        assert_close(few.mean_speed_kmh(), many.mean_speed_kmh());
        assert!(many.distance_km() > few.distance_km());
    }

    #[test]
    fn test_workout_delegates() {
        let inner = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        let workout = Workout::from(inner.clone());
        assert_eq!(workout.kind(), WorkoutKind::Swimming);
        assert_eq!(workout.show_training_info(), inner.show_training_info());
    }

    #[test]
    fn test_report_is_idempotent() {
        let workout = Workout::from(SportsWalking::new(9000.0, 1.5, 75.0, 180.0));
        assert_eq!(workout.show_training_info(), workout.show_training_info());
    }

    #[test]
    fn test_non_negative_distance_and_speed() {
        for action in [0.0, 1.0, 500.0, 15000.0] {
            for duration in [0.1, 1.0, 3.5] {
                let run = Running::new(action, duration, 70.0);
                assert!(run.distance_km() >= 0.0);
                assert!(run.mean_speed_kmh() >= 0.0);
            }
        }
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(169.0, 10.0), 16.0);
        assert_eq!(floor_div(6.0, 3.0), 2.0);
    }
}
