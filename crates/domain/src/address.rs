use std::net::IpAddr;

/// Split resolved addresses into IPv4 and IPv6 lists, each sorted
/// ascending by canonical textual form. Input order does not matter;
/// duplicates are kept.
pub fn classify_addresses<I>(addrs: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = IpAddr>,
{
    let mut v4 = Vec::new();
    let mut v6 = Vec::new();
    for addr in addrs {
        match addr {
            IpAddr::V4(a) => v4.push(a.to_string()),
            IpAddr::V6(a) => v6.push(a.to_string()),
        }
    }
    v4.sort();
    v6.sort();
    (v4, v6)
}
