use serde::{Deserialize, Serialize};
use v6ready_domain::{rank, ReadinessRecord};

/// Full readiness record plus its derived score, as returned by
/// `GET /api/check/{domain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub domain: String,
    pub apex_v4: Vec<String>,
    pub apex_v6: Vec<String>,
    pub www_v4: Vec<String>,
    pub www_v6: Vec<String>,
    pub ns_v4: Vec<String>,
    pub ns_v6: Vec<String>,
    pub mx_v4: Vec<String>,
    pub mx_v6: Vec<String>,
    pub score: u8,
    pub rank: String,
}

impl From<ReadinessRecord> for CheckResponse {
    fn from(record: ReadinessRecord) -> Self {
        let score = record.score();
        let rank = rank(Some(&record));
        Self {
            domain: record.domain,
            apex_v4: record.apex_v4,
            apex_v6: record.apex_v6,
            www_v4: record.www_v4,
            www_v6: record.www_v6,
            ns_v4: record.ns_v4,
            ns_v6: record.ns_v6,
            mx_v4: record.mx_v4,
            mx_v6: record.mx_v6,
            score,
            rank,
        }
    }
}
