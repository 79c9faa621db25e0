mod errors;
mod logging;
mod root;
mod scan;
mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use scan::ScanConfig;
pub use server::ServerConfig;
