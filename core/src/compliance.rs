//! Compliance Checker

use crate::math::*;
use crate::standards::*;
use crate::statistics::*;
use std::fmt;

/// Issue reported when the requested standard does not exist.
pub const UNKNOWN_STANDARD: &str = "Unknown standard";

/// Decimal places the average illuminance is compared and reported at.
pub const AVERAGE_DECIMALS: usize = 1;

/// Decimal places the uniformity ratio is compared and reported at.
pub const UNIFORMITY_DECIMALS: usize = 3;

/// Outcome of checking statistics against a standard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplianceResult {
    /// True if no requirement failed.
    pub compliant: bool,

    /// Human readable description of each failed requirement, in check order.
    pub issues: Vec<String>,

    /// Name of the standard; `None` if it was not found.
    pub standard: Option<String>,
}

impl ComplianceResult {
    fn unknown() -> Self {
        Self {
            compliant: false,
            issues: vec![UNKNOWN_STANDARD.to_owned()],
            standard: None,
        }
    }
}

impl fmt::Display for ComplianceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.standard.as_deref().unwrap_or("?");
        if self.compliant {
            write!(f, "{name}: compliant")
        } else {
            write!(f, "{name}: not compliant ({})", self.issues.join("; "))
        }
    }
}

/// Compare statistics against the average illuminance and uniformity ratio
/// minimums of a standard. Values are rounded to the precision they are
/// reported at before comparing. Never fails; an unknown standard yields a
/// non-compliant result with a single issue.
///
/// * `stats`       - Field statistics.
/// * `standard_id` - Identifier of the standard in `catalog`.
/// * `catalog`     - Available standards.
pub fn check(stats: &Statistics, standard_id: &str, catalog: &StandardsCatalog) -> ComplianceResult {
    let standard = match catalog.get(standard_id) {
        Some(standard) => standard,
        None => {
            warn!("Unknown standard '{}'", standard_id);
            return ComplianceResult::unknown();
        }
    };

    let mut issues = vec![];

    if let Some(min) = minimum(standard, Metric::AverageIlluminance) {
        let average = round_to(stats.average, AVERAGE_DECIMALS);
        if average < min {
            issues.push(format!(
                "Average illuminance {:.*} lux is below minimum {} lux",
                AVERAGE_DECIMALS, average, min
            ));
        }
    }

    if let Some(min) = minimum(standard, Metric::UniformityRatio) {
        let uniformity = round_to(stats.uniformity_ratio, UNIFORMITY_DECIMALS);
        if uniformity < min {
            issues.push(format!(
                "Uniformity ratio {:.*} is below minimum {}",
                UNIFORMITY_DECIMALS, uniformity, min
            ));
        }
    }

    debug!("{} issue(s) against '{}'", issues.len(), standard.name);

    ComplianceResult {
        compliant: issues.is_empty(),
        issues,
        standard: Some(standard.name.clone()),
    }
}

fn minimum(standard: &Standard, metric: Metric) -> Option<Float> {
    standard.requirement(metric).and_then(|r| r.min)
}

fn round_to(value: Float, decimals: usize) -> Float {
    let scale = (10.0 as Float).powi(decimals as i32);
    (value * scale).round() / scale
}
