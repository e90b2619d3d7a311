//! Machine and part vocabulary shared with the host dashboard.
//!
//! Names follow the host application's JSON schema (camelCase tags), so
//! reading files produced by the dashboard deserialize without renaming.

use crate::error::HealthError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MachineType {
    WeldingRobot,
    PaintingStation,
    AssemblyLine,
    QualityControlStation,
}

impl MachineType {
    pub const ALL: [MachineType; 4] = [
        MachineType::WeldingRobot,
        MachineType::PaintingStation,
        MachineType::AssemblyLine,
        MachineType::QualityControlStation,
    ];
}

impl std::fmt::Display for MachineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineType::WeldingRobot => write!(f, "weldingRobot"),
            MachineType::PaintingStation => write!(f, "paintingStation"),
            MachineType::AssemblyLine => write!(f, "assemblyLine"),
            MachineType::QualityControlStation => write!(f, "qualityControlStation"),
        }
    }
}

impl std::str::FromStr for MachineType {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weldingRobot" => Ok(MachineType::WeldingRobot),
            "paintingStation" => Ok(MachineType::PaintingStation),
            "assemblyLine" => Ok(MachineType::AssemblyLine),
            "qualityControlStation" => Ok(MachineType::QualityControlStation),
            _ => Err(HealthError::UnknownMachine(s.to_string())),
        }
    }
}

/// A measured attribute of a machine. The set is flat across machine types;
/// whether a part is valid for a given machine is decided by the scoring
/// table at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    // Welding robot
    ErrorRate,
    VibrationLevel,
    ElectrodeWear,
    ShieldingPressure,
    WireFeedRate,
    ArcStability,
    SeamWidth,
    CoolingEfficiency,
    // Painting station
    FlowRate,
    Pressure,
    // Assembly line
    Speed,
    // Quality control station
    CameraCalibration,
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::ErrorRate => write!(f, "errorRate"),
            Part::VibrationLevel => write!(f, "vibrationLevel"),
            Part::ElectrodeWear => write!(f, "electrodeWear"),
            Part::ShieldingPressure => write!(f, "shieldingPressure"),
            Part::WireFeedRate => write!(f, "wireFeedRate"),
            Part::ArcStability => write!(f, "arcStability"),
            Part::SeamWidth => write!(f, "seamWidth"),
            Part::CoolingEfficiency => write!(f, "coolingEfficiency"),
            Part::FlowRate => write!(f, "flowRate"),
            Part::Pressure => write!(f, "pressure"),
            Part::Speed => write!(f, "speed"),
            Part::CameraCalibration => write!(f, "cameraCalibration"),
        }
    }
}

impl std::str::FromStr for Part {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "errorRate" => Ok(Part::ErrorRate),
            "vibrationLevel" => Ok(Part::VibrationLevel),
            "electrodeWear" => Ok(Part::ElectrodeWear),
            "shieldingPressure" => Ok(Part::ShieldingPressure),
            "wireFeedRate" => Ok(Part::WireFeedRate),
            "arcStability" => Ok(Part::ArcStability),
            "seamWidth" => Ok(Part::SeamWidth),
            "coolingEfficiency" => Ok(Part::CoolingEfficiency),
            "flowRate" => Ok(Part::FlowRate),
            "pressure" => Ok(Part::Pressure),
            "speed" => Ok(Part::Speed),
            "cameraCalibration" => Ok(Part::CameraCalibration),
            _ => Err(HealthError::UnknownPartName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_display_round_trips_through_from_str() {
        for machine in MachineType::ALL {
            let parsed: MachineType = machine
                .to_string()
                .parse()
                .expect("display name should parse back");
            assert_eq!(parsed, machine);
        }
    }

    #[test]
    fn machine_from_str_rejects_unknown_name() {
        let err = "laserCutter"
            .parse::<MachineType>()
            .expect_err("unknown machine should fail");
        assert!(err.to_string().contains("unknown machine type"));
    }

    #[test]
    fn part_from_str_rejects_unknown_name() {
        let err = "beltTension"
            .parse::<Part>()
            .expect_err("unknown part should fail");
        assert!(err.to_string().contains("unknown part name"));
    }

    #[test]
    fn part_serde_names_match_display() {
        let json = serde_json::to_string(&Part::ErrorRate).expect("part should serialize");
        assert_eq!(json, "\"errorRate\"");
        let part: Part = serde_json::from_str("\"cameraCalibration\"").expect("part should parse");
        assert_eq!(part, Part::CameraCalibration);
    }

    #[test]
    fn machine_serde_names_are_camel_case() {
        let json =
            serde_json::to_string(&MachineType::QualityControlStation).expect("should serialize");
        assert_eq!(json, "\"qualityControlStation\"");
    }
}
