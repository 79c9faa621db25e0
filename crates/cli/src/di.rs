use anyhow::Context;
use std::sync::Arc;
use v6ready_application::ports::{DnsLookup, ReportSink};
use v6ready_application::use_cases::{ResolveDomainUseCase, ScanBatchUseCase};
use v6ready_domain::Config;
use v6ready_infrastructure::dns::SystemDnsLookup;
use v6ready_infrastructure::report::StdoutReport;

pub struct Services {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
    pub scan_batch: Arc<ScanBatchUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let lookup: Arc<dyn DnsLookup> = Arc::new(
            SystemDnsLookup::from_system_conf()
                .context("failed to initialize the system resolver")?,
        );
        let resolve_domain = Arc::new(ResolveDomainUseCase::new(lookup));

        let report: Arc<dyn ReportSink> = Arc::new(StdoutReport);
        let scan_batch = Arc::new(ScanBatchUseCase::new(
            resolve_domain.clone(),
            report,
            config.scan.workers,
        ));

        Ok(Self {
            resolve_domain,
            scan_batch,
        })
    }
}
