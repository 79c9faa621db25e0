/// Destination for batch report lines. Lines from concurrent workers
/// may arrive in any order; each line is emitted atomically.
pub trait ReportSink: Send + Sync {
    fn emit(&self, line: &str);
}
