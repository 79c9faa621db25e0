mod check;

pub use check::{check_domain, health_check};
