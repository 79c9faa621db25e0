//! v6ready infrastructure layer: adapters for the application ports.
pub mod dns;
pub mod report;
