mod system_lookup;

pub use system_lookup::SystemDnsLookup;
