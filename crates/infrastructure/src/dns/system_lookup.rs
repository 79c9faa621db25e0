use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use std::net::IpAddr;
use tracing::debug;
use v6ready_application::ports::DnsLookup;
use v6ready_domain::LookupError;

/// [`DnsLookup`] adapter over the operating environment's resolver
/// (hickory-resolver configured from the system's resolv.conf).
///
/// Timeouts and attempt counts are whatever hickory defaults to; the
/// resolver imposes no policy of its own and performs no caching
/// beyond a single query's lifetime.
pub struct SystemDnsLookup {
    resolver: TokioAsyncResolver,
}

impl SystemDnsLookup {
    pub fn from_system_conf() -> Result<Self, LookupError> {
        let resolver = TokioAsyncResolver::tokio_from_system_conf()
            .map_err(|e| LookupError::Failed(e.to_string()))?;
        Ok(Self { resolver })
    }
}

/// NXDOMAIN and NODATA both count as "name not found"; everything else
/// is a transport or protocol failure.
fn map_resolve_error(e: ResolveError) -> LookupError {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NotFound,
        _ => LookupError::Failed(e.to_string()),
    }
}

#[async_trait]
impl DnsLookup for SystemDnsLookup {
    async fn host_addresses(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        let lookup = self
            .resolver
            .lookup_ip(host)
            .await
            .map_err(map_resolve_error)?;
        let addrs: Vec<IpAddr> = lookup.iter().collect();
        debug!(host = %host, addresses = addrs.len(), "host lookup");
        Ok(addrs)
    }

    async fn name_servers(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self
            .resolver
            .ns_lookup(domain)
            .await
            .map_err(map_resolve_error)?;
        let hosts: Vec<String> = lookup.iter().map(|ns| ns.0.to_utf8()).collect();
        debug!(domain = %domain, name_servers = hosts.len(), "NS lookup");
        Ok(hosts)
    }

    async fn mail_exchangers(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(map_resolve_error)?;
        let mut records: Vec<_> = lookup.iter().collect();
        records.sort_by_key(|mx| mx.preference());
        let hosts: Vec<String> = records
            .iter()
            .map(|mx| mx.exchange().to_utf8())
            .collect();
        debug!(domain = %domain, exchangers = hosts.len(), "MX lookup");
        Ok(hosts)
    }
}
