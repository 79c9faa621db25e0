use crate::readiness::ReadinessRecord;

/// Rendered rank for a domain whose resolution failed. Visually
/// distinct from a successful zero score, which renders empty.
pub const UNKNOWN_RANK: &str = "?????";

/// Render a readiness score as a run of stars, one per point.
/// `None` stands for a failed resolution and renders the sentinel.
pub fn rank(record: Option<&ReadinessRecord>) -> String {
    match record {
        None => UNKNOWN_RANK.to_string(),
        Some(r) => "*".repeat(usize::from(r.score())),
    }
}
