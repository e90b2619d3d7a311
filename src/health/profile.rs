use crate::health::rules::ScoringRule;
use crate::types::machine::{MachineType, Part};
use std::collections::HashMap;

/// The scoring table: one rule per registered (machine, part) pair.
/// Lookups for unregistered pairs are a caller-side schema mismatch and
/// surface as `UnknownPart` in the calculators.
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    rules: HashMap<(MachineType, Part), ScoringRule>,
}

impl ScoringProfile {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// The calibration shipped with the crate. Constants reproduce the
    /// host dashboard's reference figures; see DESIGN.md for how they were
    /// derived.
    pub fn builtin() -> Self {
        let mut profile = Self::empty();

        profile.set_rule(
            MachineType::WeldingRobot,
            Part::ErrorRate,
            ScoringRule::InverseLinear { limit: 1.8 },
        );
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::VibrationLevel,
            ScoringRule::InverseLinear { limit: 8.0 },
        );
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::ElectrodeWear,
            ScoringRule::InverseLinear { limit: 2.0 },
        );
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::ShieldingPressure,
            ScoringRule::Tolerance {
                target: 14.5,
                tol: 16.0,
            },
        );
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::WireFeedRate,
            ScoringRule::Tolerance {
                target: 8.0,
                tol: 5.0,
            },
        );
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::ArcStability,
            ScoringRule::Ramp {
                full: 100.0,
                idle: 0.0,
            },
        );
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::SeamWidth,
            ScoringRule::Tolerance {
                target: 2.0,
                tol: 2.5,
            },
        );
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::CoolingEfficiency,
            ScoringRule::Ramp {
                full: 100.0,
                idle: 0.0,
            },
        );

        profile.set_rule(
            MachineType::PaintingStation,
            Part::FlowRate,
            ScoringRule::Band { lo: 10.0, hi: 30.0 },
        );
        profile.set_rule(
            MachineType::PaintingStation,
            Part::Pressure,
            ScoringRule::Band { lo: 1.0, hi: 3.0 },
        );

        profile.set_rule(
            MachineType::AssemblyLine,
            Part::Speed,
            ScoringRule::Ramp {
                full: 10.0,
                idle: 1.0,
            },
        );

        profile.set_rule(
            MachineType::QualityControlStation,
            Part::CameraCalibration,
            ScoringRule::Tolerance {
                target: 0.0,
                tol: 2.0,
            },
        );

        profile
    }

    pub fn set_rule(&mut self, machine: MachineType, part: Part, rule: ScoringRule) {
        self.rules.insert((machine, part), rule);
    }

    pub fn rule_for(&self, machine: MachineType, part: Part) -> Option<ScoringRule> {
        self.rules.get(&(machine, part)).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered parts for one machine, sorted for stable listing output.
    pub fn parts_for(&self, machine: MachineType) -> Vec<(Part, ScoringRule)> {
        let mut parts = self
            .rules
            .iter()
            .filter(|((rule_machine, _), _)| *rule_machine == machine)
            .map(|((_, part), rule)| (*part, *rule))
            .collect::<Vec<_>>();
        parts.sort_by_key(|(part, _)| *part);
        parts
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_twelve_pairs() {
        let profile = ScoringProfile::builtin();
        assert_eq!(profile.len(), 12);
        assert_eq!(profile.parts_for(MachineType::WeldingRobot).len(), 8);
        assert_eq!(profile.parts_for(MachineType::PaintingStation).len(), 2);
        assert_eq!(profile.parts_for(MachineType::AssemblyLine).len(), 1);
        assert_eq!(
            profile.parts_for(MachineType::QualityControlStation).len(),
            1
        );
    }

    #[test]
    fn builtin_rules_pass_validation() {
        let profile = ScoringProfile::builtin();
        for machine in MachineType::ALL {
            for (part, rule) in profile.parts_for(machine) {
                rule.validate()
                    .unwrap_or_else(|msg| panic!("{machine}/{part}: {msg}"));
            }
        }
    }

    #[test]
    fn cross_machine_lookup_misses() {
        let profile = ScoringProfile::builtin();
        assert!(profile
            .rule_for(MachineType::WeldingRobot, Part::FlowRate)
            .is_none());
        assert!(profile
            .rule_for(MachineType::AssemblyLine, Part::CameraCalibration)
            .is_none());
    }

    #[test]
    fn set_rule_replaces_existing_entry() {
        let mut profile = ScoringProfile::builtin();
        profile.set_rule(
            MachineType::WeldingRobot,
            Part::ErrorRate,
            ScoringRule::InverseLinear { limit: 2.5 },
        );
        assert_eq!(
            profile.rule_for(MachineType::WeldingRobot, Part::ErrorRate),
            Some(ScoringRule::InverseLinear { limit: 2.5 })
        );
        assert_eq!(profile.len(), 12);
    }
}
