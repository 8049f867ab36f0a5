//! reqwest-backed [`CloudApi`] implementation.
//!
//! Every response body is a JSON object with the payload under a single
//! resource key (`{"droplet": {...}}`, `{"droplets": [...]}`). Failed
//! requests carry `{"id": ..., "message": ...}`.

use super::{CloudApi, DropletAction, NewSshKey, VolumeAction};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{
    Account, Action, Domain, DomainRecord, Droplet, FloatingIp, Image, Kernel, Region, Size,
    Snapshot, SshKey, Tag, Volume,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Page size requested for every collection endpoint.
const PAGE_SIZE: u32 = 200;

pub struct HttpCloudApi {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpCloudApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let token = config
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ApiError::ConfigError(
                    "No API token configured. Pass --token or set DIGITALOCEAN_TOKEN".to_string(),
                )
            })?
            .to_string();

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("docli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(method = "GET", url = %url, "API request");
        self.send(self.client.get(&url), key).await
    }

    async fn list<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url(path);
        debug!(method = "GET", url = %url, per_page = PAGE_SIZE, "API request");
        self.send(self.client.get(&url).query(&[("per_page", PAGE_SIZE)]), key)
            .await
    }

    async fn post<B, T>(&self, path: &str, body: &B, key: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(method = "POST", url = %url, "API request");
        self.send(self.client.post(&url).json(body), key).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        key: &str,
    ) -> Result<T, ApiError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
        debug!(status = status.as_u16(), bytes = body.len(), "API response");

        if !status.is_success() {
            let error = map_status_error(status, &body);
            warn!(status = status.as_u16(), error = %error, "API request failed");
            return Err(error);
        }
        extract_payload(&body, key)
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Network(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::Network(format!("Connection error: {}", error))
    } else {
        ApiError::Network(format!("HTTP error: {}", error))
    }
}

/// Map a non-success response to an error, preferring the API's own
/// `message` field over the raw body.
pub(crate) fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });

    match status.as_u16() {
        401 | 403 => ApiError::Unauthorized(message),
        404 => ApiError::NotFound(message),
        429 => ApiError::RateLimited(message),
        code => ApiError::RequestFailed {
            status: code,
            message,
        },
    }
}

/// Pull the payload out of its envelope and deserialize it. A payload that
/// lacks a required field is an invalid response, not a rendering problem.
pub(crate) fn extract_payload<T: DeserializeOwned>(body: &str, key: &str) -> Result<T, ApiError> {
    let mut envelope: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Malformed JSON: {}", e)))?;
    let payload = envelope
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ApiError::InvalidResponse(format!("Missing `{}` in response", key)))?;
    serde_json::from_value(payload)
        .map_err(|e| ApiError::InvalidResponse(format!("Unexpected `{}` payload: {}", key, e)))
}

#[async_trait]
impl CloudApi for HttpCloudApi {
    async fn get_account(&self) -> Result<Account, ApiError> {
        self.get("/account", "account").await
    }

    async fn list_droplets(&self) -> Result<Vec<Droplet>, ApiError> {
        self.list("/droplets", "droplets").await
    }

    async fn get_droplet(&self, id: u64) -> Result<Droplet, ApiError> {
        self.get(&format!("/droplets/{}", id), "droplet").await
    }

    async fn list_droplet_actions(&self, id: u64) -> Result<Vec<Action>, ApiError> {
        self.list(&format!("/droplets/{}/actions", id), "actions")
            .await
    }

    async fn list_droplet_backups(&self, id: u64) -> Result<Vec<Image>, ApiError> {
        self.list(&format!("/droplets/{}/backups", id), "backups")
            .await
    }

    async fn list_droplet_snapshots(&self, id: u64) -> Result<Vec<Image>, ApiError> {
        self.list(&format!("/droplets/{}/snapshots", id), "snapshots")
            .await
    }

    async fn list_droplet_kernels(&self, id: u64) -> Result<Vec<Kernel>, ApiError> {
        self.list(&format!("/droplets/{}/kernels", id), "kernels")
            .await
    }

    async fn droplet_action(&self, id: u64, action: DropletAction) -> Result<Action, ApiError> {
        self.post(&format!("/droplets/{}/actions", id), &action, "action")
            .await
    }

    async fn list_volumes(&self) -> Result<Vec<Volume>, ApiError> {
        self.list("/volumes", "volumes").await
    }

    async fn get_volume(&self, id: &str) -> Result<Volume, ApiError> {
        self.get(&format!("/volumes/{}", id), "volume").await
    }

    async fn list_volume_actions(&self, id: &str) -> Result<Vec<Action>, ApiError> {
        self.list(&format!("/volumes/{}/actions", id), "actions")
            .await
    }

    async fn volume_action(&self, id: &str, action: VolumeAction) -> Result<Action, ApiError> {
        self.post(&format!("/volumes/{}/actions", id), &action, "action")
            .await
    }

    async fn list_domains(&self) -> Result<Vec<Domain>, ApiError> {
        self.list("/domains", "domains").await
    }

    async fn get_domain(&self, name: &str) -> Result<Domain, ApiError> {
        self.get(&format!("/domains/{}", name), "domain").await
    }

    async fn list_domain_records(&self, domain: &str) -> Result<Vec<DomainRecord>, ApiError> {
        self.list(&format!("/domains/{}/records", domain), "domain_records")
            .await
    }

    async fn get_domain_record(&self, domain: &str, id: u64) -> Result<DomainRecord, ApiError> {
        self.get(
            &format!("/domains/{}/records/{}", domain, id),
            "domain_record",
        )
        .await
    }

    async fn list_floating_ips(&self) -> Result<Vec<FloatingIp>, ApiError> {
        self.list("/floating_ips", "floating_ips").await
    }

    async fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp, ApiError> {
        self.get(&format!("/floating_ips/{}", ip), "floating_ip")
            .await
    }

    async fn list_floating_ip_actions(&self, ip: &str) -> Result<Vec<Action>, ApiError> {
        self.list(&format!("/floating_ips/{}/actions", ip), "actions")
            .await
    }

    async fn list_ssh_keys(&self) -> Result<Vec<SshKey>, ApiError> {
        self.list("/account/keys", "ssh_keys").await
    }

    async fn get_ssh_key(&self, id: &str) -> Result<SshKey, ApiError> {
        self.get(&format!("/account/keys/{}", id), "ssh_key").await
    }

    async fn create_ssh_key(&self, key: NewSshKey) -> Result<SshKey, ApiError> {
        self.post("/account/keys", &key, "ssh_key").await
    }

    async fn list_snapshots(&self) -> Result<Vec<Snapshot>, ApiError> {
        self.list("/snapshots", "snapshots").await
    }

    async fn list_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.list("/regions", "regions").await
    }

    async fn list_sizes(&self) -> Result<Vec<Size>, ApiError> {
        self.list("/sizes", "sizes").await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.list("/tags", "tags").await
    }

    async fn get_tag(&self, name: &str) -> Result<Tag, ApiError> {
        self.get(&format!("/tags/{}", name), "tag").await
    }
}
