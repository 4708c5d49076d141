//! Client for the PowerDNS authoritative HTTP API: zones, record sets, SOA/SRV encoding.

pub mod config;
pub mod error;
pub mod powerdns;
pub mod validation;

pub use config::PdnsConfig;
pub use error::PdnsError;
pub use powerdns::api::ZoneApi;
pub use powerdns::client::PowerDnsClient;
pub use powerdns::content::{SoaParams, SrvParams};
pub use powerdns::memory::InMemoryZoneApi;
