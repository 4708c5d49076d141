//! In-memory `ZoneApi` that records every call instead of hitting a server.
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::error::PdnsError;
use crate::powerdns::api::ZoneApi;
use crate::powerdns::types::*;

/// One `create_record` call, in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPatch {
    pub zone: String,
    pub patch: PdnsRrsetPatch,
}

#[derive(Debug, Default)]
pub struct InMemoryZoneApi {
    zones: Mutex<Vec<PdnsZoneCreate>>,
    records: Mutex<Vec<RecordedPatch>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryZoneApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zones created so far.
    pub fn zones(&self) -> Vec<PdnsZoneCreate> {
        lock(&self.zones).clone()
    }

    /// Record patches applied so far.
    pub fn records(&self) -> Vec<RecordedPatch> {
        lock(&self.records).clone()
    }

    /// Fold the recorded patches for `zone` into rrsets, last write wins.
    fn rrsets_for(&self, zone: &str) -> Vec<PdnsRrset> {
        let mut rrsets: Vec<PdnsRrset> = Vec::new();
        let records = lock(&self.records);
        for change in records
            .iter()
            .filter(|r| r.zone == zone)
            .flat_map(|r| r.patch.rrsets.iter())
        {
            let rrset = PdnsRrset {
                name: change.name.clone(),
                rrtype: change.rrtype.clone(),
                ttl: change.ttl,
                records: change
                    .records
                    .iter()
                    .map(|r| PdnsRecord {
                        content: r.content.clone(),
                        disabled: r.disabled,
                    })
                    .collect(),
                comments: Vec::new(),
            };
            match rrsets
                .iter_mut()
                .find(|existing| existing.name == rrset.name && existing.rrtype == rrset.rrtype)
            {
                Some(existing) => *existing = rrset,
                None => rrsets.push(rrset),
            }
        }
        rrsets
    }
}

#[async_trait]
impl ZoneApi for InMemoryZoneApi {
    async fn get_zone(&self, name: &str) -> Result<PdnsZone, PdnsError> {
        let zone = lock(&self.zones).iter().find(|z| z.name == name).cloned();
        let Some(zone) = zone else {
            return Err(PdnsError::unexpected_status(
                Method::GET,
                format!("zones/{name}"),
                StatusCode::NOT_FOUND,
                r#"{"error": "Could not find domain"}"#,
            ));
        };

        Ok(PdnsZone {
            account: String::new(),
            dnssec: false,
            id: zone.name.clone(),
            kind: zone.kind,
            last_check: 0,
            masters: zone.masters,
            rrsets: self.rrsets_for(&zone.name),
            name: zone.name,
            notified_serial: 0,
            serial: 0,
            soa_edit: String::new(),
            soa_edit_api: String::new(),
            zone_type: Some("Zone".into()),
            url: String::new(),
        })
    }

    async fn create_zone(
        &self,
        name: &str,
        nameservers: &[String],
    ) -> Result<StatusCode, PdnsError> {
        let mut zones = lock(&self.zones);
        if zones.iter().any(|z| z.name == name) {
            return Err(PdnsError::unexpected_status(
                Method::POST,
                "zones",
                StatusCode::CONFLICT,
                r#"{"error": "Domain already exists"}"#,
            ));
        }
        zones.push(PdnsZoneCreate::native(name, nameservers.to_vec()));
        Ok(StatusCode::CREATED)
    }

    async fn create_record(
        &self,
        name: &str,
        rrtype: &str,
        content: &str,
        ttl: u32,
        zone: &str,
    ) -> Result<StatusCode, PdnsError> {
        lock(&self.records).push(RecordedPatch {
            zone: zone.to_string(),
            patch: PdnsRrsetPatch::replace_single(name, rrtype, content, ttl),
        });
        Ok(StatusCode::NO_CONTENT)
    }
}
