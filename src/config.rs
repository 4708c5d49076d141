/// Header PowerDNS reads the API key from.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Server id used by a stock PowerDNS installation.
pub const DEFAULT_SERVER_ID: &str = "localhost";

/// Where the PowerDNS API lives and how to authenticate against it.
#[derive(Clone)]
pub struct PdnsConfig {
    pub base_url: String, // e.g. "http://127.0.0.1:8081"
    pub api_key: String,
    pub server_id: String, // usually "localhost"
}

impl PdnsConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            server_id: server_id.into(),
        }
    }

    /// Config pointing at the default `localhost` server id.
    pub fn with_default_server(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(base_url, api_key, DEFAULT_SERVER_ID)
    }

    /// Collection URL for the zones of the configured server.
    pub fn zones_url(&self) -> String {
        format!(
            "{}/api/v1/servers/{}/zones",
            self.base_url, self.server_id
        )
    }

    /// URL of a single zone. The name is passed through untouched.
    pub fn zone_url(&self, zone: &str) -> String {
        format!("{}/{}", self.zones_url(), zone)
    }
}

impl std::fmt::Debug for PdnsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdnsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("server_id", &self.server_id)
            .finish()
    }
}
