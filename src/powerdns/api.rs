//! The zone management capability shared by the HTTP client and the in-memory double.
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::PdnsError;
use crate::powerdns::content::{
    SOA_TTL, SoaParams, SrvParams, ensure_trailing_dot, soa_content, soa_serial_now, srv_content,
};
use crate::powerdns::types::PdnsZone;

#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// Read the current state of `name`.
    async fn get_zone(&self, name: &str) -> Result<PdnsZone, PdnsError>;

    /// Create a native zone served by `nameservers`. Not idempotent.
    async fn create_zone(
        &self,
        name: &str,
        nameservers: &[String],
    ) -> Result<StatusCode, PdnsError>;

    /// Replace the `name`/`rrtype` rrset in `zone` with a single record.
    async fn create_record(
        &self,
        name: &str,
        rrtype: &str,
        content: &str,
        ttl: u32,
        zone: &str,
    ) -> Result<StatusCode, PdnsError>;

    /// Write the zone's SOA, stamped with the current Unix time as serial.
    async fn create_soa_record(
        &self,
        name: &str,
        soa: &SoaParams,
        zone: &str,
    ) -> Result<StatusCode, PdnsError> {
        let content = soa_content(soa, soa_serial_now());
        self.create_record(name, "SOA", &content, SOA_TTL, zone).await
    }

    /// Write an SRV record at `srv.name` (normalized to end with a dot).
    async fn create_srv_record(&self, srv: &SrvParams, zone: &str) -> Result<StatusCode, PdnsError> {
        let name = ensure_trailing_dot(&srv.name);
        let content = srv_content(srv);
        self.create_record(&name, "SRV", &content, srv.ttl, zone).await
    }
}
