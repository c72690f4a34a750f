//! Report-quality bonus: graded by description, PoC, and remediation length.

use arena_core::config::ScoringConfig;
use arena_core::Finding;

/// Summed quality points, clamped to `[0, quality_cap]`.
pub fn quality_bonus(finding: &Finding, config: &ScoringConfig) -> f64 {
    let raw = config
        .description_quality
        .points(finding.description().chars().count())
        + config
            .poc_quality
            .points(finding.proof_of_concept().chars().count())
        + config
            .remediation_quality
            .points(finding.remediation().chars().count());
    raw.clamp(0.0, config.quality_cap)
}
