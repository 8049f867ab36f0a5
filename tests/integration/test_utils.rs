//! Shared test utilities for integration tests
//!
//! Provides an in-memory [`CloudApi`], resource fixtures built from API-shaped
//! JSON, and serialized access to the environment variables the config
//! loader reads.

use async_trait::async_trait;
use docli::api::{CloudApi, DropletAction, NewSshKey, VolumeAction};
use docli::error::ApiError;
use docli::types::{
    Account, Action, Domain, DomainRecord, Droplet, FloatingIp, Image, Kernel, Region, Size,
    Snapshot, SshKey, Tag, Volume,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Variables the config loader reads.
const ISOLATED_VARS: [&str; 7] = [
    "HOME",
    "XDG_CONFIG_HOME",
    "DIGITALOCEAN_TOKEN",
    "NO_COLOR",
    "DOCLI__API__BASE_URL",
    "DOCLI__API__TOKEN",
    "DOCLI__OUTPUT__JSON",
];

/// Environment variable state to restore after test
struct EnvState(Vec<(&'static str, Option<String>)>);

impl EnvState {
    fn capture() -> Self {
        Self(
            ISOLATED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        )
    }

    fn restore(self) {
        for (name, value) in self.0 {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir` and every
/// other config-related variable cleared. The original environment is
/// restored afterwards.
pub fn with_config_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    for name in ISOLATED_VARS {
        std::env::remove_var(name);
    }
    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path());

    let result = f();

    env_state.restore();

    result
}

fn from_json<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

pub fn account() -> Account {
    from_json(json!({
        "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
        "status": "active",
        "status_message": "",
        "email": "sammy@example.com",
        "email_verified": true,
        "droplet_limit": 25,
        "floating_ip_limit": 3
    }))
}

pub fn action(id: u64) -> Action {
    from_json(json!({
        "id": id,
        "status": "completed",
        "type": "power_on",
        "started_at": "2024-03-14T12:00:00Z",
        "completed_at": "2024-03-14T12:01:00Z",
        "resource_type": "droplet",
        "resource_id": 3164444,
        "region_slug": "nyc3"
    }))
}

pub fn droplet(id: u64, name: &str) -> Droplet {
    from_json(json!({
        "id": id,
        "name": name,
        "status": "active",
        "memory": 1024,
        "disk": 25,
        "vcpus": 1,
        "kernel": null,
        "image": {"distribution": "Ubuntu", "name": "22.04 x64"},
        "features": [],
        "region": {"slug": "nyc3", "name": "New York 3"},
        "networks": {"v4": [{"ip_address": "104.236.32.182"}], "v6": []},
        "tags": [],
        "backup_ids": [],
        "snapshot_ids": [],
        "volume_ids": [],
        "created_at": "2024-03-14T12:00:00Z"
    }))
}

pub fn image(id: u64, distribution: &str, name: &str, public: bool) -> Image {
    from_json(json!({
        "id": id,
        "name": name,
        "distribution": distribution,
        "type": "backup",
        "slug": null,
        "public": public,
        "regions": ["nyc3"],
        "created_at": "2024-03-14T12:00:00Z",
        "size_gigabytes": 2.36,
        "min_disk_size": 20
    }))
}

pub fn kernel(id: u64) -> Kernel {
    from_json(json!({"id": id, "name": "Ubuntu 22.04 x64 vmlinuz", "version": "5.15.0-91-generic"}))
}

pub fn volume(id: &str) -> Volume {
    from_json(json!({
        "id": id,
        "name": "pg-data",
        "size_gigabytes": 100,
        "region": {"slug": "nyc1", "name": "New York 1"},
        "description": "Block store for the postgres primary",
        "droplet_ids": [3164444],
        "created_at": "2024-01-02T03:04:05Z"
    }))
}

pub fn domain(name: &str) -> Domain {
    from_json(json!({
        "name": name,
        "ttl": 1800,
        "zone_file": format!("$ORIGIN {}.\n$TTL 1800\n", name)
    }))
}

pub fn record(id: u64, record_type: &str, name: &str, data: &str) -> DomainRecord {
    from_json(json!({
        "id": id,
        "type": record_type,
        "name": name,
        "data": data,
        "priority": null,
        "port": null,
        "weight": null
    }))
}

pub fn floating_ip(ip: &str, droplet_id: Option<u64>) -> FloatingIp {
    from_json(json!({
        "ip": ip,
        "region": {"slug": "nyc3", "name": "New York 3"},
        "droplet": droplet_id.map(|id| json!({"id": id, "name": "web-1"}))
    }))
}

pub fn ssh_key(id: u64, name: &str, public_key: &str) -> SshKey {
    from_json(json!({
        "id": id,
        "name": name,
        "fingerprint": "3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa",
        "public_key": public_key
    }))
}

pub fn snapshot(id: &str) -> Snapshot {
    from_json(json!({"id": id, "name": "web-1-nightly", "created_at": "2024-03-14T12:00:00Z"}))
}

pub fn region(slug: &str) -> Region {
    from_json(json!({
        "slug": slug,
        "name": format!("Region {}", slug),
        "sizes": ["s-1vcpu-1gb"],
        "features": ["backups"],
        "available": true
    }))
}

pub fn size(slug: &str) -> Size {
    from_json(json!({
        "slug": slug,
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "transfer": 1.0,
        "price_monthly": 6.0
    }))
}

pub fn tag(name: &str, count: u64) -> Tag {
    from_json(json!({
        "name": name,
        "resources": {"droplets": {"count": count, "last_tagged": null}}
    }))
}

/// Canned responses served by [`MockCloudApi`].
#[derive(Default, Clone)]
pub struct MockData {
    pub droplets: Vec<Droplet>,
    pub actions: Vec<Action>,
    pub images: Vec<Image>,
    pub kernels: Vec<Kernel>,
    pub volumes: Vec<Volume>,
    pub domains: Vec<Domain>,
    pub records: Vec<DomainRecord>,
    pub floating_ips: Vec<FloatingIp>,
    pub ssh_keys: Vec<SshKey>,
    pub snapshots: Vec<Snapshot>,
    pub regions: Vec<Region>,
    pub sizes: Vec<Size>,
    pub tags: Vec<Tag>,
}

/// In-memory [`CloudApi`] that records every call it receives.
pub struct MockCloudApi {
    data: MockData,
    error: Mutex<Option<ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl MockCloudApi {
    pub fn new(data: MockData) -> Self {
        Self {
            data,
            error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A client whose next call fails with `error`.
    pub fn failing(error: ApiError) -> Self {
        let api = Self::new(MockData::default());
        *api.error.lock().unwrap() = Some(error);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.error.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn action_result(&self) -> Result<Action, ApiError> {
        self.data
            .actions
            .first()
            .cloned()
            .ok_or_else(|| ApiError::NotFound("action".to_string()))
    }
}

fn find<T: Clone>(items: &[T], what: &str, matches: impl Fn(&T) -> bool) -> Result<T, ApiError> {
    items
        .iter()
        .find(|item| matches(item))
        .cloned()
        .ok_or_else(|| ApiError::NotFound(what.to_string()))
}

#[async_trait]
impl CloudApi for MockCloudApi {
    async fn get_account(&self) -> Result<Account, ApiError> {
        self.record("get_account".into())?;
        Ok(account())
    }

    async fn list_droplets(&self) -> Result<Vec<Droplet>, ApiError> {
        self.record("list_droplets".into())?;
        Ok(self.data.droplets.clone())
    }

    async fn get_droplet(&self, id: u64) -> Result<Droplet, ApiError> {
        self.record(format!("get_droplet {}", id))?;
        find(&self.data.droplets, "droplet", |d| d.id == id)
    }

    async fn list_droplet_actions(&self, id: u64) -> Result<Vec<Action>, ApiError> {
        self.record(format!("list_droplet_actions {}", id))?;
        Ok(self.data.actions.clone())
    }

    async fn list_droplet_backups(&self, id: u64) -> Result<Vec<Image>, ApiError> {
        self.record(format!("list_droplet_backups {}", id))?;
        Ok(self.data.images.clone())
    }

    async fn list_droplet_snapshots(&self, id: u64) -> Result<Vec<Image>, ApiError> {
        self.record(format!("list_droplet_snapshots {}", id))?;
        Ok(self.data.images.clone())
    }

    async fn list_droplet_kernels(&self, id: u64) -> Result<Vec<Kernel>, ApiError> {
        self.record(format!("list_droplet_kernels {}", id))?;
        Ok(self.data.kernels.clone())
    }

    async fn droplet_action(&self, id: u64, action: DropletAction) -> Result<Action, ApiError> {
        self.record(format!("droplet_action {} {:?}", id, action))?;
        self.action_result()
    }

    async fn list_volumes(&self) -> Result<Vec<Volume>, ApiError> {
        self.record("list_volumes".into())?;
        Ok(self.data.volumes.clone())
    }

    async fn get_volume(&self, id: &str) -> Result<Volume, ApiError> {
        self.record(format!("get_volume {}", id))?;
        find(&self.data.volumes, "volume", |v| v.id == id)
    }

    async fn list_volume_actions(&self, id: &str) -> Result<Vec<Action>, ApiError> {
        self.record(format!("list_volume_actions {}", id))?;
        Ok(self.data.actions.clone())
    }

    async fn volume_action(&self, id: &str, action: VolumeAction) -> Result<Action, ApiError> {
        self.record(format!("volume_action {} {:?}", id, action))?;
        self.action_result()
    }

    async fn list_domains(&self) -> Result<Vec<Domain>, ApiError> {
        self.record("list_domains".into())?;
        Ok(self.data.domains.clone())
    }

    async fn get_domain(&self, name: &str) -> Result<Domain, ApiError> {
        self.record(format!("get_domain {}", name))?;
        find(&self.data.domains, "domain", |d| d.name == name)
    }

    async fn list_domain_records(&self, domain: &str) -> Result<Vec<DomainRecord>, ApiError> {
        self.record(format!("list_domain_records {}", domain))?;
        Ok(self.data.records.clone())
    }

    async fn get_domain_record(&self, domain: &str, id: u64) -> Result<DomainRecord, ApiError> {
        self.record(format!("get_domain_record {} {}", domain, id))?;
        find(&self.data.records, "domain record", |r| r.id == id)
    }

    async fn list_floating_ips(&self) -> Result<Vec<FloatingIp>, ApiError> {
        self.record("list_floating_ips".into())?;
        Ok(self.data.floating_ips.clone())
    }

    async fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp, ApiError> {
        self.record(format!("get_floating_ip {}", ip))?;
        find(&self.data.floating_ips, "floating ip", |f| f.ip == ip)
    }

    async fn list_floating_ip_actions(&self, ip: &str) -> Result<Vec<Action>, ApiError> {
        self.record(format!("list_floating_ip_actions {}", ip))?;
        Ok(self.data.actions.clone())
    }

    async fn list_ssh_keys(&self) -> Result<Vec<SshKey>, ApiError> {
        self.record("list_ssh_keys".into())?;
        Ok(self.data.ssh_keys.clone())
    }

    async fn get_ssh_key(&self, id: &str) -> Result<SshKey, ApiError> {
        self.record(format!("get_ssh_key {}", id))?;
        find(&self.data.ssh_keys, "ssh key", |k| {
            k.id.to_string() == id || k.fingerprint == id
        })
    }

    async fn create_ssh_key(&self, key: NewSshKey) -> Result<SshKey, ApiError> {
        self.record(format!("create_ssh_key {}", key.name))?;
        Ok(ssh_key(1, &key.name, &key.public_key))
    }

    async fn list_snapshots(&self) -> Result<Vec<Snapshot>, ApiError> {
        self.record("list_snapshots".into())?;
        Ok(self.data.snapshots.clone())
    }

    async fn list_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.record("list_regions".into())?;
        Ok(self.data.regions.clone())
    }

    async fn list_sizes(&self) -> Result<Vec<Size>, ApiError> {
        self.record("list_sizes".into())?;
        Ok(self.data.sizes.clone())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.record("list_tags".into())?;
        Ok(self.data.tags.clone())
    }

    async fn get_tag(&self, name: &str) -> Result<Tag, ApiError> {
        self.record(format!("get_tag {}", name))?;
        find(&self.data.tags, "tag", |t| t.name == name)
    }
}
