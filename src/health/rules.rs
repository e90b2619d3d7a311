use serde::{Deserialize, Serialize};

/// Scoring formula for one (machine, part) pair. Every shape maps a raw
/// reading to a health percentage clamped into [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScoringRule {
    /// Full health at zero, falling linearly to zero at `limit`.
    /// Negative readings are failure-direction (sensor fault) and score 0.
    InverseLinear { limit: f64 },

    /// Health rises linearly across [lo, hi]; zero outside the band in
    /// either direction.
    Band { lo: f64, hi: f64 },

    /// Health proportional to the reading, saturating at `full`. Readings
    /// in [0, idle) are jog/creep operation and report full health.
    Ramp { full: f64, idle: f64 },

    /// Full health at `target`, falling linearly to zero once the
    /// deviation reaches `tol` on either side.
    Tolerance { target: f64, tol: f64 },
}

impl ScoringRule {
    pub fn score(&self, value: f64) -> f64 {
        let health = match *self {
            ScoringRule::InverseLinear { limit } => {
                if value < 0.0 {
                    0.0
                } else {
                    (1.0 - value / limit) * 100.0
                }
            }
            ScoringRule::Band { lo, hi } => {
                if value < lo || value > hi {
                    0.0
                } else {
                    (value - lo) / (hi - lo) * 100.0
                }
            }
            ScoringRule::Ramp { full, idle } => {
                if value < 0.0 {
                    0.0
                } else if value < idle {
                    100.0
                } else {
                    value / full * 100.0
                }
            }
            ScoringRule::Tolerance { target, tol } => (1.0 - (value - target).abs() / tol) * 100.0,
        };
        health.clamp(0.0, 100.0)
    }

    /// Reject constants that would make the formula degenerate. Used when
    /// loading profile overrides; the builtin table is valid by
    /// construction.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            ScoringRule::InverseLinear { limit } => {
                if limit <= 0.0 {
                    return Err(format!("inverseLinear limit must be positive (found {limit})"));
                }
            }
            ScoringRule::Band { lo, hi } => {
                if hi <= lo {
                    return Err(format!("band bounds must satisfy lo < hi (found {lo}..{hi})"));
                }
            }
            ScoringRule::Ramp { full, idle } => {
                if full <= 0.0 {
                    return Err(format!("ramp full must be positive (found {full})"));
                }
                if !(0.0..=full).contains(&idle) {
                    return Err(format!(
                        "ramp idle must be between 0 and full (found {idle})"
                    ));
                }
            }
            ScoringRule::Tolerance { tol, .. } => {
                if tol <= 0.0 {
                    return Err(format!("tolerance tol must be positive (found {tol})"));
                }
            }
        }
        Ok(())
    }
}
