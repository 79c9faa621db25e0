use crate::ports::DnsLookup;
use std::sync::Arc;
use tracing::{debug, instrument};
use v6ready_domain::{
    classify_addresses, normalize_domain, DomainError, LookupError, LookupStage, ReadinessRecord,
};

/// Resolves one domain into a [`ReadinessRecord`] by querying the four
/// resource categories: apex, www alias, name servers, mail exchangers.
///
/// The record is all-or-nothing: either every stage completed under the
/// tolerance rules below, or the whole resolution fails with the stage
/// identified. No partial records are ever returned.
pub struct ResolveDomainUseCase {
    lookup: Arc<dyn DnsLookup>,
}

impl ResolveDomainUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }

    #[instrument(skip(self), name = "resolve_domain")]
    pub async fn execute(&self, input: &str) -> Result<ReadinessRecord, DomainError> {
        let domain = normalize_domain(input)?;

        // Apex and www addresses: a missing name is a valid empty
        // result, anything else kills the resolution.
        let apex = tolerate(
            LookupStage::Apex,
            &domain,
            self.lookup.host_addresses(&domain).await,
        )?;
        let (apex_v4, apex_v6) = classify_addresses(apex);

        let www_name = format!("www.{domain}");
        let www = tolerate(
            LookupStage::Www,
            &www_name,
            self.lookup.host_addresses(&www_name).await,
        )?;
        let (www_v4, www_v6) = classify_addresses(www);

        // A delegated domain always has name servers; none at all is a
        // structural failure even though the lookup itself succeeded.
        let ns_hosts = tolerate(
            LookupStage::NsRecords,
            &domain,
            self.lookup.name_servers(&domain).await,
        )?;
        if ns_hosts.is_empty() {
            return Err(DomainError::NoNameServers { domain });
        }

        // Name servers are expected to resolve; a broken one is a real
        // signal, so any failure here (not-found included) is fatal.
        let mut ns_v4 = Vec::new();
        let mut ns_v6 = Vec::new();
        for ns in &ns_hosts {
            let addrs = require(
                LookupStage::NsHost,
                ns,
                self.lookup.host_addresses(ns).await,
            )?;
            let (v4, v6) = classify_addresses(addrs);
            ns_v4.extend(v4);
            ns_v6.extend(v6);
        }
        ns_v4.sort();
        ns_v6.sort();

        // A domain without mail service is valid.
        let mx_hosts = tolerate(
            LookupStage::MxRecords,
            &domain,
            self.lookup.mail_exchangers(&domain).await,
        )?;

        // An unreachable exchanger does not invalidate the record; it
        // just contributes zero addresses.
        let mut mx_v4 = Vec::new();
        let mut mx_v6 = Vec::new();
        for mx in &mx_hosts {
            match self.lookup.host_addresses(mx).await {
                Ok(addrs) => {
                    let (v4, v6) = classify_addresses(addrs);
                    mx_v4.extend(v4);
                    mx_v6.extend(v6);
                }
                Err(e) => {
                    debug!(exchanger = %mx, error = %e, "mail exchanger unresolvable, counted as zero addresses");
                }
            }
        }
        mx_v4.sort();
        mx_v6.sort();

        debug!(
            domain = %domain,
            apex_v4 = apex_v4.len(),
            apex_v6 = apex_v6.len(),
            ns_hosts = ns_hosts.len(),
            mx_hosts = mx_hosts.len(),
            "domain resolved"
        );

        Ok(ReadinessRecord {
            domain,
            apex_v4,
            apex_v6,
            www_v4,
            www_v6,
            ns_v4,
            ns_v6,
            mx_v4,
            mx_v6,
        })
    }
}

/// Absence is a valid empty result; any other failure is fatal.
fn tolerate<T>(
    stage: LookupStage,
    name: &str,
    result: Result<Vec<T>, LookupError>,
) -> Result<Vec<T>, DomainError> {
    match result {
        Ok(values) => Ok(values),
        Err(LookupError::NotFound) => Ok(Vec::new()),
        Err(LookupError::Failed(cause)) => Err(DomainError::ResolutionFailed {
            stage,
            name: name.to_string(),
            cause,
        }),
    }
}

/// Every failure is fatal, absence included.
fn require<T>(
    stage: LookupStage,
    name: &str,
    result: Result<Vec<T>, LookupError>,
) -> Result<Vec<T>, DomainError> {
    result.map_err(|e| DomainError::ResolutionFailed {
        stage,
        name: name.to_string(),
        cause: e.to_string(),
    })
}
