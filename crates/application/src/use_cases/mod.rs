mod resolve_domain;
mod scan_batch;

pub use resolve_domain::ResolveDomainUseCase;
pub use scan_batch::ScanBatchUseCase;
