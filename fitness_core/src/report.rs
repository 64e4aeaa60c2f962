//! Human-readable workout reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metrics derived from one workout, ready to be rendered
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometres
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the single-line report
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Render a report; same output as [`InfoMessage::get_message`]
pub fn format_report(message: &InfoMessage) -> String {
    message.get_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::{Running, SportsWalking, Swimming, Training};

    #[test]
    fn test_message_template() {
        let message = InfoMessage {
            training_type: "Running".into(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        };
        assert_eq!(
            message.get_message(),
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_three_decimal_rounding() {
        let message = InfoMessage {
            training_type: "Swimming".into(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        };
        assert_eq!(
            format_report(&message),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_no_thousands_separator() {
        let message = InfoMessage {
            training_type: "Running".into(),
            duration: 12.5,
            distance: 1234.5678,
            speed: 98.76543,
            calories: 1_234_567.0,
        };
        let text = message.get_message();
        assert!(text.contains("Distance: 1234.568 km"));
        assert!(text.contains("Calories burned: 1234567.000."));
    }

    #[test]
    fn test_reference_sample_lines() {
        let lines = [
            Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).show_training_info(),
            Running::new(15000.0, 1.0, 75.0).show_training_info(),
            SportsWalking::new(9000.0, 1.0, 75.0, 180.0).show_training_info(),
        ]
        .map(|m| m.get_message());

        assert_eq!(
            lines[0],
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
        assert_eq!(
            lines[1],
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
        assert_eq!(
            lines[2],
            "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 157.500."
        );
    }

    #[test]
    fn test_json_shape() {
        let message = Running::new(15000.0, 1.0, 75.0).show_training_info();
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["distance"], 9.75);
    }
}
