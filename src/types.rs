//! Resource records returned by the cloud API.
//!
//! Every top-level record is a [`Resource`]: the typed fields the renderers
//! read, plus the JSON object exactly as received. Serializing a resource
//! writes the received object back, so JSON mode echoes what the API sent
//! without adding, dropping or reformatting anything.

use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

/// A typed view over one API object that keeps the object itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    fields: T,
    raw: Value,
}

impl<T> Resource<T> {
    /// The object as the API sent it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn fields(&self) -> &T {
        &self.fields
    }
}

impl<T> Deref for Resource<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Resource<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let fields = T::deserialize(&raw).map_err(de::Error::custom)?;
        Ok(Self { fields, raw })
    }
}

impl<T> Serialize for Resource<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

/// Declares a string-backed enum whose unknown values are preserved in an
/// `Other` variant instead of failing deserialization.
macro_rules! open_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(text) => text,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Account standing.
    AccountStatus {
        Active => "active",
        Warning => "warning",
        Locked => "locked",
    }
}

open_enum! {
    /// Progress of a droplet, volume or floating IP action.
    ActionStatus {
        Completed => "completed",
        InProgress => "in-progress",
        Errored => "errored",
    }
}

open_enum! {
    /// Droplet lifecycle state.
    DropletStatus {
        New => "new",
        Off => "off",
        Active => "active",
        Archived => "archived",
    }
}

open_enum! {
    /// DNS record type.
    RecordType {
        A => "A",
        Aaaa => "AAAA",
        Cname => "CNAME",
        Mx => "MX",
        Txt => "TXT",
        Srv => "SRV",
        Ns => "NS",
    }
}

pub type Account = Resource<AccountFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountFields {
    pub uuid: String,
    pub status: AccountStatus,
    pub status_message: Option<String>,
    pub email: String,
    pub email_verified: bool,
    pub droplet_limit: u32,
    pub floating_ip_limit: u32,
}

pub type Action = Resource<ActionFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionFields {
    pub id: u64,
    pub status: ActionStatus,
    #[serde(rename = "type")]
    pub action_type: String,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub resource_type: Option<String>,
    pub resource_id: Option<u64>,
    pub region_slug: Option<String>,
}

pub type Domain = Resource<DomainFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainFields {
    pub name: String,
    pub ttl: Option<u32>,
    pub zone_file: Option<String>,
}

pub type DomainRecord = Resource<DomainRecordFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainRecordFields {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub data: String,
    pub priority: Option<u32>,
    pub port: Option<u32>,
    pub weight: Option<u32>,
}

/// Minimal reference to a droplet embedded in another resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DropletRef {
    pub id: u64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageSummary {
    pub distribution: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkAddress {
    pub ip_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkAddress>,
    #[serde(default)]
    pub v6: Vec<NetworkAddress>,
}

pub type Droplet = Resource<DropletFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DropletFields {
    pub id: u64,
    pub name: String,
    pub status: DropletStatus,
    pub memory: u64,
    pub disk: u64,
    pub vcpus: u32,
    pub kernel: Option<Kernel>,
    pub image: ImageSummary,
    #[serde(default)]
    pub features: Vec<String>,
    pub region: Region,
    #[serde(default)]
    pub networks: Networks,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub backup_ids: Vec<u64>,
    #[serde(default)]
    pub snapshot_ids: Vec<u64>,
    #[serde(default)]
    pub volume_ids: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl DropletFields {
    pub fn ipv4_addresses(&self) -> impl Iterator<Item = &str> {
        self.networks.v4.iter().map(|n| n.ip_address.as_str())
    }

    pub fn ipv6_addresses(&self) -> impl Iterator<Item = &str> {
        self.networks.v6.iter().map(|n| n.ip_address.as_str())
    }
}

/// A distribution image, backup or snapshot.
pub type Image = Resource<ImageFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageFields {
    pub id: u64,
    pub name: String,
    pub distribution: String,
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    pub slug: Option<String>,
    pub public: bool,
    #[serde(default)]
    pub regions: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub size_gigabytes: Option<f64>,
    pub min_disk_size: Option<u64>,
}

impl ImageFields {
    /// Key used to order image listings.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.distribution, self.name)
    }
}

pub type FloatingIp = Resource<FloatingIpFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FloatingIpFields {
    pub ip: String,
    pub region: Region,
    pub droplet: Option<DropletRef>,
}

pub type Kernel = Resource<KernelFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KernelFields {
    pub id: u64,
    pub name: String,
    pub version: String,
}

pub type Region = Resource<RegionFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionFields {
    pub slug: String,
    pub name: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub available: bool,
}

pub type Size = Resource<SizeFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SizeFields {
    pub slug: String,
    pub memory: u64,
    pub vcpus: u32,
    pub disk: u64,
    pub transfer: f64,
    pub price_monthly: f64,
}

pub type Snapshot = Resource<SnapshotFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotFields {
    pub id: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

pub type SshKey = Resource<SshKeyFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshKeyFields {
    pub id: u64,
    pub name: String,
    pub fingerprint: String,
    pub public_key: String,
}

pub type Volume = Resource<VolumeFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VolumeFields {
    pub id: String,
    pub name: String,
    pub size_gigabytes: u64,
    pub region: Region,
    pub description: Option<String>,
    #[serde(default)]
    pub droplet_ids: Vec<u64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedDroplets {
    pub count: u64,
    pub last_tagged: Option<DropletRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagResources {
    pub droplets: TaggedDroplets,
}

pub type Tag = Resource<TagFields>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagFields {
    pub name: String,
    pub resources: TagResources,
}
