use serde::Serialize;
use std::fmt;

/// Resolved IPv4/IPv6 reachability of one domain across the four
/// resource categories: apex, www alias, name servers, mail exchangers.
///
/// Every list is sorted ascending by textual form. Lists are not
/// deduplicated: the same address served by two name servers is two
/// pieces of infrastructure. A record is built once per resolution and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadinessRecord {
    pub domain: String,
    pub apex_v4: Vec<String>,
    pub apex_v6: Vec<String>,
    pub www_v4: Vec<String>,
    pub www_v6: Vec<String>,
    pub ns_v4: Vec<String>,
    pub ns_v6: Vec<String>,
    pub mx_v4: Vec<String>,
    pub mx_v6: Vec<String>,
}

impl ReadinessRecord {
    /// True if the apex or the www alias has at least one IPv4 address.
    pub fn has_v4(&self) -> bool {
        !self.apex_v4.is_empty() || !self.www_v4.is_empty()
    }

    /// True if the apex or the www alias has at least one IPv6 address.
    pub fn has_v6(&self) -> bool {
        !self.apex_v6.is_empty() || !self.www_v6.is_empty()
    }

    /// IPv6-readiness score, 0 to 5. Each condition contributes
    /// independently:
    /// - +1 apex reachable over IPv6
    /// - +1 dual-stack mail (at least one MX address per family)
    /// - +1 dual-stack web (at least one www address per family)
    /// - +2 any name server reachable over IPv6
    pub fn score(&self) -> u8 {
        let mut score = 0;
        if !self.apex_v6.is_empty() {
            score += 1;
        }
        if !self.mx_v4.is_empty() && !self.mx_v6.is_empty() {
            score += 1;
        }
        if !self.www_v4.is_empty() && !self.www_v6.is_empty() {
            score += 1;
        }
        if !self.ns_v6.is_empty() {
            // TODO: distinguish IPv6-only delegation; until then any
            // NS with an AAAA record earns the double weight.
            score += 2;
        }
        score
    }
}

impl fmt::Display for ReadinessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "result for {}:", self.domain)?;
        let sections: [(&str, &[String]); 8] = [
            ("IPv4", &self.apex_v4),
            ("IPv6", &self.apex_v6),
            ("www IPv4", &self.www_v4),
            ("www IPv6", &self.www_v6),
            ("DNS servers IPv4", &self.ns_v4),
            ("DNS servers IPv6", &self.ns_v6),
            ("Mail exchangers IPv4", &self.mx_v4),
            ("Mail exchangers IPv6", &self.mx_v6),
        ];
        for (title, addrs) in sections {
            writeln!(f, "{title}:")?;
            for addr in addrs {
                writeln!(f, "  {addr}")?;
            }
        }
        Ok(())
    }
}
