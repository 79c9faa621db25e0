use std::fmt;
use thiserror::Error;

/// The lookup that was running when a resolution failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    Apex,
    Www,
    NsRecords,
    NsHost,
    MxRecords,
    MxHost,
}

impl LookupStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStage::Apex => "apex address",
            LookupStage::Www => "www address",
            LookupStage::NsRecords => "NS record",
            LookupStage::NsHost => "name server address",
            LookupStage::MxRecords => "MX record",
            LookupStage::MxHost => "mail exchanger address",
        }
    }
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw outcome of a single DNS lookup, before the resolution policy
/// decides whether absence is tolerable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("name not found")]
    NotFound,

    #[error("{0}")]
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("{stage} lookup failed for {name}: {cause}")]
    ResolutionFailed {
        stage: LookupStage,
        name: String,
        cause: String,
    },

    #[error("domain {domain} has no name servers")]
    NoNameServers { domain: String },

    #[error("I/O error: {0}")]
    IoError(String),
}
