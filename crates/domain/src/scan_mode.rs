use crate::errors::DomainError;
use crate::readiness::ReadinessRecord;

/// Per-batch reporting mode, decoded once from the `--check` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Emit only domains reachable over IPv4 but not IPv6.
    V4Only,
    /// Emit only domains reachable over IPv6 but not IPv4.
    V6Only,
    /// Emit only failed domains with their error.
    Errors,
    /// Emit per-domain address counts.
    Counts,
}

impl ScanMode {
    /// 4 and 6 select the family filters, 1 the error filter, any
    /// other value the counts report.
    pub fn from_flag(mode: i64) -> Self {
        match mode {
            4 => ScanMode::V4Only,
            6 => ScanMode::V6Only,
            1 => ScanMode::Errors,
            _ => ScanMode::Counts,
        }
    }

    /// Render the report line for one domain's outcome, or `None` when
    /// the mode emits nothing for it. Failures are reported in every
    /// mode; a per-domain failure never stops a batch.
    pub fn report(
        &self,
        queried: &str,
        outcome: &Result<ReadinessRecord, DomainError>,
    ) -> Option<String> {
        let record = match outcome {
            Ok(record) => record,
            Err(e) => return Some(format!("{queried}, ({e})")),
        };
        match self {
            ScanMode::Counts => Some(format!(
                "{}, {}, {}, {}, {}",
                record.domain,
                record.apex_v4.len(),
                record.www_v4.len(),
                record.apex_v6.len(),
                record.www_v6.len()
            )),
            ScanMode::Errors => None,
            ScanMode::V4Only => (record.has_v4() && !record.has_v6()).then(|| record.domain.clone()),
            ScanMode::V6Only => (record.has_v6() && !record.has_v4()).then(|| record.domain.clone()),
        }
    }
}
