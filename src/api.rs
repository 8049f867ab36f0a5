//! Cloud API client abstraction.
//!
//! Commands talk to the provider only through [`CloudApi`]. Each method is
//! one logical operation and one HTTP round trip; nothing here retries,
//! paginates past the first page or caches.

use crate::error::ApiError;
use crate::types::{
    Account, Action, Domain, DomainRecord, Droplet, FloatingIp, Image, Kernel, Region, Size,
    Snapshot, SshKey, Tag, Volume,
};
use async_trait::async_trait;
use serde::Serialize;

pub mod http;

pub use http::HttpCloudApi;

/// Actions that can be requested on a droplet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropletAction {
    EnableBackups,
    DisableBackups,
    Snapshot { name: String },
    PowerCycle,
    PowerOff,
    PowerOn,
    EnablePrivateNetworking,
}

/// Actions that can be requested on a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VolumeAction {
    Attach { droplet_id: u64 },
    Detach { droplet_id: u64 },
}

/// Request body for registering an SSH key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSshKey {
    pub name: String,
    pub public_key: String,
}

#[async_trait]
pub trait CloudApi: Send + Sync {
    async fn get_account(&self) -> Result<Account, ApiError>;

    async fn list_droplets(&self) -> Result<Vec<Droplet>, ApiError>;
    async fn get_droplet(&self, id: u64) -> Result<Droplet, ApiError>;
    async fn list_droplet_actions(&self, id: u64) -> Result<Vec<Action>, ApiError>;
    async fn list_droplet_backups(&self, id: u64) -> Result<Vec<Image>, ApiError>;
    async fn list_droplet_snapshots(&self, id: u64) -> Result<Vec<Image>, ApiError>;
    async fn list_droplet_kernels(&self, id: u64) -> Result<Vec<Kernel>, ApiError>;
    async fn droplet_action(&self, id: u64, action: DropletAction) -> Result<Action, ApiError>;

    async fn list_volumes(&self) -> Result<Vec<Volume>, ApiError>;
    async fn get_volume(&self, id: &str) -> Result<Volume, ApiError>;
    async fn list_volume_actions(&self, id: &str) -> Result<Vec<Action>, ApiError>;
    async fn volume_action(&self, id: &str, action: VolumeAction) -> Result<Action, ApiError>;

    async fn list_domains(&self) -> Result<Vec<Domain>, ApiError>;
    async fn get_domain(&self, name: &str) -> Result<Domain, ApiError>;
    async fn list_domain_records(&self, domain: &str) -> Result<Vec<DomainRecord>, ApiError>;
    async fn get_domain_record(&self, domain: &str, id: u64) -> Result<DomainRecord, ApiError>;

    async fn list_floating_ips(&self) -> Result<Vec<FloatingIp>, ApiError>;
    async fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp, ApiError>;
    async fn list_floating_ip_actions(&self, ip: &str) -> Result<Vec<Action>, ApiError>;

    async fn list_ssh_keys(&self) -> Result<Vec<SshKey>, ApiError>;
    /// `id` is either the numeric key id or its fingerprint.
    async fn get_ssh_key(&self, id: &str) -> Result<SshKey, ApiError>;
    async fn create_ssh_key(&self, key: NewSshKey) -> Result<SshKey, ApiError>;

    async fn list_snapshots(&self) -> Result<Vec<Snapshot>, ApiError>;
    async fn list_regions(&self) -> Result<Vec<Region>, ApiError>;
    async fn list_sizes(&self) -> Result<Vec<Size>, ApiError>;

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError>;
    async fn get_tag(&self, name: &str) -> Result<Tag, ApiError>;
}
