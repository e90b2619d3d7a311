use crate::types::machine::{MachineType, Part};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PartScore {
    pub part: Part,
    pub value: f64,
    /// Health percentage in [0, 100], rounded to 2 decimal places.
    pub health: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub machine: MachineType,
    pub generated_at: DateTime<Utc>,
    pub overall_health: f64,
    pub parts: Vec<PartScore>,
}

impl HealthReport {
    /// True when any reading in the set scored zero health.
    pub fn has_faulted_part(&self) -> bool {
        self.parts.iter().any(|score| score.health == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faulted_part_detection() {
        let mut report = HealthReport {
            machine: MachineType::PaintingStation,
            generated_at: Utc::now(),
            overall_health: 25.0,
            parts: vec![
                PartScore {
                    part: Part::FlowRate,
                    value: 20.0,
                    health: 50.0,
                },
                PartScore {
                    part: Part::Pressure,
                    value: 0.2,
                    health: 0.0,
                },
            ],
        };
        assert!(report.has_faulted_part());

        report.parts[1].health = 12.5;
        assert!(!report.has_faulted_part());
    }
}
