use v6ready_application::ports::ReportSink;

/// Writes batch report lines to stdout. `println!` locks stdout per
/// call, so concurrent workers never interleave within a line.
pub struct StdoutReport;

impl ReportSink for StdoutReport {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}
