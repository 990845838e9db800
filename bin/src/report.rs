//! Report Output

use fixtures::*;
use indicatif::{ProgressBar, ProgressStyle};
use lux_core::compliance::*;
use lux_core::contour::*;
use lux_core::energy::*;
use lux_core::layout::*;
use lux_core::math::*;
use lux_core::spillage::*;
use lux_core::statistics::*;

/// Returns a progress bar for `total` grid rows. The bar is hidden when
/// `quiet` is set.
///
/// * `total` - Number of rows.
/// * `quiet` - Suppress output.
pub fn create_progress_reporter(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(total);
    match ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos}/{len} rows ({eta})") {
        Ok(style) => progress.set_style(style.progress_chars("=> ")),
        Err(e) => warn!("Progress bar template: {e}"),
    }
    progress
}

/// Returns the catalog listing.
///
/// * `library` - The fixture catalog.
pub fn catalog_listing(library: &FixtureLibrary) -> String {
    library
        .all()
        .map(|e| {
            let spec = &e.fixture_type.spec;
            format!(
                "{:<18} {:<28} {:>6.0} W {:>8.0} lm {:>5.1} lm/W  {:>3.0}°x{:<3.0}°  {}-{} m",
                e.id(),
                e.name(),
                spec.power,
                spec.lumens,
                spec.efficacy,
                spec.beam.horizontal,
                spec.beam.vertical,
                spec.mounting_height.min,
                spec.mounting_height.max
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns a summary of a generated layout.
///
/// * `plan` - The layout.
pub fn layout_summary(plan: &LayoutPlan) -> String {
    format!(
        "Layout: {} x {} ({:.1} lm/W), spacing {:.1} m, sized for {:.1} lux",
        plan.count, plan.fixture_type.name, plan.efficacy, plan.spacing, plan.estimated_illuminance
    )
}

/// Returns the compliance section.
///
/// * `result` - Compliance outcome.
pub fn compliance_summary(result: &ComplianceResult) -> String {
    let mut lines = vec![format!(
        "Compliance: {}",
        if result.compliant { "PASS" } else { "FAIL" }
    )];
    if let Some(name) = &result.standard {
        lines.push(format!("  Standard: {name}"));
    }
    lines.extend(result.issues.iter().map(|issue| format!("  - {issue}")));
    lines.join("\n")
}

/// Returns the contour section.
///
/// * `contours` - Contours in level order.
pub fn contour_summary(contours: &[Contour]) -> String {
    let mut lines = vec!["Isolux contours:".to_owned()];
    lines.extend(
        contours
            .iter()
            .map(|c| format!("  >= {:>6.1} lux  {}  {} points", c.level, c.color, c.points.len())),
    );
    lines.join("\n")
}

/// Returns the spillage section.
///
/// * `result`    - Spillage outcome.
/// * `threshold` - Threshold that was applied.
pub fn spillage_summary(result: &SpillageResult, threshold: Float) -> String {
    if result.is_clean() {
        format!("Spillage: none above {threshold:.1} lux")
    } else {
        format!(
            "Spillage: {} boundary points above {:.1} lux, max {:.1} lux, avg {:.1} lux",
            result.points.len(),
            threshold,
            result.max_spillage,
            result.average_spillage
        )
    }
}

/// Returns the full calculation report.
///
/// * `stats`      - Field statistics.
/// * `compliance` - Compliance outcome.
/// * `contours`   - Isolux contours.
/// * `spillage`   - Spillage outcome and threshold.
/// * `energy`     - Power consumption.
/// * `glare`      - Optional glare rating.
pub fn calculation_report(
    stats: &Statistics,
    compliance: &ComplianceResult,
    contours: &[Contour],
    spillage: (&SpillageResult, Float),
    energy: &PowerConsumption,
    glare: Option<Float>,
) -> String {
    let mut sections = vec![
        format!("Illuminance: {stats}"),
        compliance_summary(compliance),
        contour_summary(contours),
        spillage_summary(spillage.0, spillage.1),
        format!("Energy: {energy}"),
    ];
    if let Some(gr) = glare {
        sections.push(format!("Glare rating: {gr:.1} GR"));
    }
    sections.join("\n")
}
