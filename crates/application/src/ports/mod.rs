mod dns_lookup;
mod report_sink;

pub use dns_lookup::DnsLookup;
pub use report_sink::ReportSink;
