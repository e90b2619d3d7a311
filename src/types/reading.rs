use crate::types::machine::{MachineType, Part};
use serde::{Deserialize, Serialize};

/// A single raw sensor reading for one part. Units are defined per part
/// (rate, pressure, speed, calibration offset).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartReading {
    pub part: Part,
    pub value: f64,
}

impl PartReading {
    pub fn new(part: Part, value: f64) -> Self {
        Self { part, value }
    }
}

/// The input document of the `score` subcommand: one machine and the
/// readings captured for it in a single collection cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingSet {
    pub machine: MachineType,
    pub readings: Vec<PartReading>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_set_parses_dashboard_json() {
        let set: ReadingSet = serde_json::from_str(
            r#"{
                "machine": "weldingRobot",
                "readings": [
                    { "part": "errorRate", "value": 0.5 },
                    { "part": "vibrationLevel", "value": 4.0 }
                ]
            }"#,
        )
        .expect("reading set should parse");

        assert_eq!(set.machine, MachineType::WeldingRobot);
        assert_eq!(set.readings.len(), 2);
        assert_eq!(set.readings[0], PartReading::new(Part::ErrorRate, 0.5));
    }

    #[test]
    fn reading_set_rejects_unknown_part_tag() {
        let result = serde_json::from_str::<ReadingSet>(
            r#"{ "machine": "assemblyLine", "readings": [{ "part": "beltTension", "value": 1.0 }] }"#,
        );
        assert!(result.is_err());
    }
}
