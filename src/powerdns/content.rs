//! Record content encoders for the structured record types (SOA, SRV).

/// TTL every SOA record is written with, whatever the caller asks for.
pub const SOA_TTL: u32 = 30;

/// Timing and contact data of a zone's Start-of-Authority record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaParams {
    pub primary_ns: String, // "ns1.example.org."
    pub admin: String,      // "admin.example.org." = admin@example.org
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub negative_ttl: u32,
}

/// Service locator data for an SRV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvParams {
    pub service: String, // "sip", without the leading underscore
    pub proto: String,   // "tcp" / "udp"
    pub name: String,
    pub ttl: u32,
    /// Accepted but currently not written into the record content.
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// Append the root dot if `name` does not already end with one.
pub fn ensure_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// `{primary} {admin} {serial} {refresh} {retry} {expire} {negative_ttl}`
pub fn soa_content(soa: &SoaParams, serial: i64) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        soa.primary_ns,
        soa.admin,
        serial,
        soa.refresh,
        soa.retry,
        soa.expire,
        soa.negative_ttl
    )
}

/// Serial for a freshly written SOA: the current Unix time in seconds.
///
/// Two updates within the same second get the same serial.
pub fn soa_serial_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// `_{service}._{proto}.{name} {ttl} IN {weight} {port} {target}`
///
/// The `SRV` type token and the priority are not part of the output.
pub fn srv_content(srv: &SrvParams) -> String {
    format!(
        "_{}._{}.{} {} IN {} {} {}",
        srv.service,
        srv.proto,
        ensure_trailing_dot(&srv.name),
        srv.ttl,
        srv.weight,
        srv.port,
        srv.target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sip() -> SrvParams {
        SrvParams {
            service: "sip".into(),
            proto: "tcp".into(),
            name: "example.org".into(),
            ttl: 60,
            priority: 0,
            weight: 5,
            port: 5060,
            target: "sipserver.example.org.".into(),
        }
    }

    #[test]
    fn trailing_dot_added_once() {
        assert_eq!(ensure_trailing_dot("example.org"), "example.org.");
        assert_eq!(ensure_trailing_dot("example.org."), "example.org.");
    }

    #[test]
    fn srv_content_layout_is_pinned() {
        // No "SRV" token and no priority: changing this is a wire change.
        assert_eq!(
            srv_content(&sip()),
            "_sip._tcp.example.org. 60 IN 5 5060 sipserver.example.org."
        );
    }

    #[test]
    fn srv_priority_does_not_change_content() {
        let mut srv = sip();
        srv.priority = 10;
        assert_eq!(srv_content(&srv), srv_content(&sip()));
    }

    #[test]
    fn soa_content_fields_in_order() {
        let soa = SoaParams {
            primary_ns: "ns1.example.org.".into(),
            admin: "admin.example.org.".into(),
            refresh: 3600,
            retry: 600,
            expire: 86400,
            negative_ttl: 300,
        };
        assert_eq!(
            soa_content(&soa, 1_700_000_000),
            "ns1.example.org. admin.example.org. 1700000000 3600 600 86400 300"
        );
    }

    #[test]
    fn soa_serial_tracks_wall_clock() {
        let before = chrono::Utc::now().timestamp();
        let serial = soa_serial_now();
        let after = chrono::Utc::now().timestamp();
        assert!(before <= serial && serial <= after);
    }
}
