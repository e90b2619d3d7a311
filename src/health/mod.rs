//! The scoring core: per-part health and machine-level aggregation.
//!
//! Both calculators are pure functions over an immutable `ScoringProfile`;
//! every error stems from invalid input structure, never from the
//! environment.

pub mod profile;
pub mod rules;

use crate::error::{HealthError, Result};
use crate::types::machine::MachineType;
use crate::types::reading::PartReading;
use crate::types::report::{HealthReport, PartScore};
use chrono::Utc;
use self::profile::ScoringProfile;

/// Health percentage for a single part reading, in [0, 100].
pub fn part_health(
    profile: &ScoringProfile,
    machine: MachineType,
    reading: &PartReading,
) -> Result<f64> {
    let rule = profile
        .rule_for(machine, reading.part)
        .ok_or(HealthError::UnknownPart {
            machine,
            part: reading.part,
        })?;
    let health = rule.score(reading.value);
    tracing::debug!(
        machine = %machine,
        part = %reading.part,
        value = reading.value,
        health,
        "scored part reading"
    );
    Ok(health)
}

/// Arithmetic mean of per-part health across the reading set, rounded to
/// 2 decimal places. Order of readings does not affect the result. Any
/// unregistered part aborts the whole calculation.
pub fn machine_health(
    profile: &ScoringProfile,
    machine: MachineType,
    readings: &[PartReading],
) -> Result<f64> {
    if readings.is_empty() {
        return Err(HealthError::NoReadings(machine));
    }

    let mut total = 0.0;
    for reading in readings {
        total += part_health(profile, machine, reading)?;
    }
    Ok(round2(total / readings.len() as f64))
}

/// Per-part scores plus the machine aggregate, assembled for rendering.
pub fn report(
    profile: &ScoringProfile,
    machine: MachineType,
    readings: &[PartReading],
) -> Result<HealthReport> {
    let overall_health = machine_health(profile, machine, readings)?;
    let parts = readings
        .iter()
        .map(|reading| {
            part_health(profile, machine, reading).map(|health| PartScore {
                part: reading.part,
                value: reading.value,
                health: round2(health),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HealthReport {
        machine,
        generated_at: Utc::now(),
        overall_health,
        parts,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
