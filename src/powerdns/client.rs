use crate::config::{API_KEY_HEADER, PdnsConfig};
use crate::error::PdnsError;
use crate::powerdns::api::ZoneApi;
use crate::powerdns::types::*;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header};
use serde::Serialize;
use tracing::debug;

/// `ZoneApi` backed by a PowerDNS authoritative server's HTTP API.
#[derive(Clone)]
pub struct PowerDnsClient {
    http: Client,
    config: PdnsConfig,
}

impl PowerDnsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Self {
        Self::with_http(Client::new(), PdnsConfig::new(base_url, api_key, server_id))
    }

    /// Use a caller-built transport, e.g. one with timeouts or TLS settings.
    pub fn with_http(http: Client, config: PdnsConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &PdnsConfig {
        &self.config
    }

    fn auth_header(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(API_KEY_HEADER, &self.config.api_key)
    }

    fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, PdnsError> {
        serde_json::to_vec(body).map_err(PdnsError::Encode)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response, PdnsError> {
        debug!(%method, %url, "calling PowerDNS");
        let mut req = self.auth_header(self.http.request(method.clone(), url));
        if let Some(body) = body {
            req = req
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let res = req.send().await.map_err(|source| PdnsError::Transport {
            method: method.clone(),
            url: url.to_string(),
            source,
        })?;
        debug!(%method, %url, status = %res.status(), "PowerDNS answered");
        Ok(res)
    }

    /// Pass `res` through if its status is one of `accepted`, otherwise turn
    /// it into an error carrying whatever body the server sent.
    async fn expect_status(
        method: Method,
        url: &str,
        res: Response,
        accepted: &[StatusCode],
    ) -> Result<Response, PdnsError> {
        let status = res.status();
        if accepted.contains(&status) {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        Err(PdnsError::unexpected_status(method, url, status, body))
    }
}

#[async_trait]
impl ZoneApi for PowerDnsClient {
    async fn get_zone(&self, name: &str) -> Result<PdnsZone, PdnsError> {
        let url = self.config.zone_url(name);
        let res = self.send(Method::GET, &url, None).await?;
        let res = Self::expect_status(Method::GET, &url, res, &[StatusCode::OK]).await?;
        let bytes = res.bytes().await.map_err(|source| PdnsError::Transport {
            method: Method::GET,
            url: url.clone(),
            source,
        })?;
        serde_json::from_slice::<PdnsZone>(&bytes).map_err(|source| PdnsError::Decode { url, source })
    }

    async fn create_zone(
        &self,
        name: &str,
        nameservers: &[String],
    ) -> Result<StatusCode, PdnsError> {
        let body = Self::encode(&PdnsZoneCreate::native(name, nameservers.to_vec()))?;
        let url = self.config.zones_url();
        let res = self.send(Method::POST, &url, Some(body)).await?;
        let res = Self::expect_status(Method::POST, &url, res, &[StatusCode::CREATED]).await?;
        Ok(res.status())
    }

    async fn create_record(
        &self,
        name: &str,
        rrtype: &str,
        content: &str,
        ttl: u32,
        zone: &str,
    ) -> Result<StatusCode, PdnsError> {
        let body = Self::encode(&PdnsRrsetPatch::replace_single(name, rrtype, content, ttl))?;
        let url = self.config.zone_url(zone);
        let res = self.send(Method::PATCH, &url, Some(body)).await?;
        // 204: rrset written, 200: accepted without change
        let res = Self::expect_status(
            Method::PATCH,
            &url,
            res,
            &[StatusCode::NO_CONTENT, StatusCode::OK],
        )
        .await?;
        Ok(res.status())
    }
}
