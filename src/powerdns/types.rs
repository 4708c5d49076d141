use serde::{Deserialize, Serialize};

/// Zone as reported by `GET /servers/{id}/zones/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsZone {
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub dnssec: bool,
    #[serde(default)]
    pub id: String, // "example.com."
    pub kind: String, // "Native", "Master", "Slave"
    #[serde(default)]
    pub last_check: i64,
    #[serde(default)]
    pub masters: Vec<String>,
    pub name: String, // "example.com."
    #[serde(default)]
    pub notified_serial: u32,
    #[serde(default)]
    pub rrsets: Vec<PdnsRrset>,
    #[serde(default)]
    pub serial: u32,
    #[serde(default)]
    pub soa_edit: String,
    #[serde(default)]
    pub soa_edit_api: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>, // "Zone"
    #[serde(default)]
    pub url: String, // "/api/v1/servers/localhost/zones/example.com."
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsRrset {
    pub name: String, // "www.example.com."
    #[serde(rename = "type")]
    pub rrtype: String, // "A", "NS", ...
    pub ttl: u32,
    pub records: Vec<PdnsRecord>,
    #[serde(default)]
    pub comments: Vec<PdnsComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsRecord {
    pub content: String, // "192.0.2.1" or "ns1.example.net."
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsComment {
    pub content: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub modified_at: i64,
}

// Used when creating a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsZoneCreate {
    pub name: String,             // "example.com."
    pub kind: String,             // "Native"
    pub masters: Vec<String>,     // empty unless the zone is a slave
    pub nameservers: Vec<String>, // ["ns1.example.net.", "ns2.example.net."]
}

impl PdnsZoneCreate {
    /// A native (non-replicated) zone served by `nameservers`.
    pub fn native(name: impl Into<String>, nameservers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: "Native".into(),
            masters: Vec::new(),
            nameservers,
        }
    }
}

/// What the server should do with an rrset in a PATCH.
///
/// Only replacement is ever sent; record removal is not supported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
}

/// Body of `PATCH /servers/{id}/zones/{zone}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsRrsetPatch {
    pub rrsets: Vec<PdnsRrsetChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsRrsetChange {
    pub name: String,
    #[serde(rename = "type")]
    pub rrtype: String,
    pub ttl: u32,
    pub changetype: ChangeType,
    pub records: Vec<PdnsRecordChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdnsRecordChange {
    pub name: String,
    pub content: String,
    pub disabled: bool,
}

impl PdnsRrsetPatch {
    /// Replace the `name`/`rrtype` set with exactly one enabled record.
    pub fn replace_single(
        name: impl Into<String>,
        rrtype: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        let name = name.into();
        Self {
            rrsets: vec![PdnsRrsetChange {
                name: name.clone(),
                rrtype: rrtype.into(),
                ttl,
                changetype: ChangeType::Replace,
                records: vec![PdnsRecordChange {
                    name,
                    content: content.into(),
                    disabled: false,
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn native_zone_body_shape() {
        let body = PdnsZoneCreate::native(
            "example.org.",
            vec!["ns1.example.org.".into(), "ns2.example.org.".into()],
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "example.org.",
                "kind": "Native",
                "masters": [],
                "nameservers": ["ns1.example.org.", "ns2.example.org."]
            })
        );
    }

    #[test]
    fn replace_patch_is_byte_stable() {
        let patch = PdnsRrsetPatch::replace_single("www.example.org.", "A", "192.0.2.1", 300);
        let encoded = serde_json::to_string(&patch).unwrap();
        assert_eq!(
            encoded,
            r#"{"rrsets":[{"name":"www.example.org.","type":"A","ttl":300,"changetype":"REPLACE","records":[{"name":"www.example.org.","content":"192.0.2.1","disabled":false}]}]}"#
        );
        let again = PdnsRrsetPatch::replace_single("www.example.org.", "A", "192.0.2.1", 300);
        assert_eq!(serde_json::to_string(&again).unwrap(), encoded);
    }

    #[test]
    fn zone_decodes_full_server_payload() {
        let zone: PdnsZone = serde_json::from_value(json!({
            "account": "",
            "dnssec": false,
            "id": "example.org.",
            "kind": "Native",
            "last_check": 0,
            "masters": [],
            "name": "example.org.",
            "notified_serial": 0,
            "rrsets": [{
                "comments": [],
                "name": "example.org.",
                "records": [{"content": "ns1.example.org. admin.example.org. 1 3600 600 86400 300", "disabled": false}],
                "ttl": 30,
                "type": "SOA"
            }],
            "serial": 1,
            "soa_edit": "",
            "soa_edit_api": "DEFAULT",
            "url": "/api/v1/servers/localhost/zones/example.org."
        }))
        .unwrap();

        assert_eq!(zone.name, "example.org.");
        assert_eq!(zone.soa_edit_api, "DEFAULT");
        assert_eq!(zone.rrsets.len(), 1);
        assert_eq!(zone.rrsets[0].rrtype, "SOA");
        assert_eq!(zone.rrsets[0].ttl, 30);
    }

    #[test]
    fn zone_without_name_is_rejected() {
        let res = serde_json::from_value::<PdnsZone>(json!({"kind": "Native"}));
        assert!(res.is_err());
    }
}
