//! Health scoring for factory machine sensor readings.
//!
//! The core is two pure functions: [`health::part_health`] maps one raw
//! reading to a percentage in [0, 100] via a per-(machine, part) scoring
//! rule, and [`health::machine_health`] averages those percentages across
//! a machine's reading set. The rule table ships with a builtin
//! calibration ([`health::profile::ScoringProfile::builtin`]) and can be
//! overlaid from a TOML profile file ([`config::load_profile`]).

pub mod config;
pub mod error;
pub mod health;
pub mod report;
pub mod types;
