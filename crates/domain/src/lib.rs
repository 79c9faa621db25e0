//! v6ready domain layer
pub mod address;
pub mod config;
pub mod errors;
pub mod name;
pub mod rank;
pub mod readiness;
pub mod scan_mode;

pub use address::classify_addresses;
pub use config::{CliOverrides, Config};
pub use errors::{DomainError, LookupError, LookupStage};
pub use name::normalize_domain;
pub use rank::{rank, UNKNOWN_RANK};
pub use readiness::ReadinessRecord;
pub use scan_mode::ScanMode;
