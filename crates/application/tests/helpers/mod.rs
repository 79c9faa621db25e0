#![allow(dead_code)]
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use v6ready_application::ports::{DnsLookup, ReportSink};
use v6ready_domain::LookupError;

/// In-memory DNS fixture. Names without an entry answer `NotFound`,
/// which is what a real resolver reports for a nonexistent name.
#[derive(Default)]
pub struct StaticDnsLookup {
    hosts: HashMap<String, Result<Vec<IpAddr>, LookupError>>,
    ns: HashMap<String, Result<Vec<String>, LookupError>>,
    mx: HashMap<String, Result<Vec<String>, LookupError>>,
}

impl StaticDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, name: &str, addrs: &[&str]) -> Self {
        let parsed = addrs.iter().map(|a| a.parse().unwrap()).collect();
        self.hosts.insert(name.to_string(), Ok(parsed));
        self
    }

    pub fn host_err(mut self, name: &str, err: LookupError) -> Self {
        self.hosts.insert(name.to_string(), Err(err));
        self
    }

    pub fn ns(mut self, domain: &str, hosts: &[&str]) -> Self {
        let hosts = hosts.iter().map(|h| h.to_string()).collect();
        self.ns.insert(domain.to_string(), Ok(hosts));
        self
    }

    pub fn ns_err(mut self, domain: &str, err: LookupError) -> Self {
        self.ns.insert(domain.to_string(), Err(err));
        self
    }

    pub fn mx(mut self, domain: &str, hosts: &[&str]) -> Self {
        let hosts = hosts.iter().map(|h| h.to_string()).collect();
        self.mx.insert(domain.to_string(), Ok(hosts));
        self
    }

    pub fn mx_err(mut self, domain: &str, err: LookupError) -> Self {
        self.mx.insert(domain.to_string(), Err(err));
        self
    }

    /// A domain with one IPv4-only name server, resolvable but with no
    /// other records. Starting point for most scenarios.
    pub fn delegated(domain: &str) -> Self {
        Self::new()
            .ns(domain, &["ns1.dns.example"])
            .host("ns1.dns.example", &["192.0.2.53"])
    }
}

#[async_trait]
impl DnsLookup for StaticDnsLookup {
    async fn host_addresses(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.hosts
            .get(host)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }

    async fn name_servers(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.ns
            .get(domain)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }

    async fn mail_exchangers(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.mx
            .get(domain)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}

/// Collects emitted report lines for assertions.
#[derive(Default)]
pub struct CollectSink {
    lines: Mutex<Vec<String>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ReportSink for CollectSink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
