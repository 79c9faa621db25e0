use async_trait::async_trait;
use std::net::IpAddr;
use v6ready_domain::LookupError;

/// DNS lookups delegated to the operating environment's resolver.
///
/// Implementations must map the resolver's "name does not exist" (and
/// "no records of this type") condition to [`LookupError::NotFound`] so
/// callers can tell tolerable absence from real failures. One call is
/// one best-effort query; no caching, no retries.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Resolve a host name to its A and AAAA addresses.
    async fn host_addresses(&self, host: &str) -> Result<Vec<IpAddr>, LookupError>;

    /// Resolve a domain to the host names of its name servers.
    async fn name_servers(&self, domain: &str) -> Result<Vec<String>, LookupError>;

    /// Resolve a domain to the host names of its mail exchangers.
    async fn mail_exchangers(&self, domain: &str) -> Result<Vec<String>, LookupError>;
}
