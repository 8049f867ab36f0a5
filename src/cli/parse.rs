//! CLI parse: clap types for docli. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docli - command-line client for the DigitalOcean API
#[derive(Parser)]
#[command(name = "docli", version)]
#[command(about = "Manage droplets, volumes, domains and more from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the raw API response as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (replaces the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API token (overrides DIGITALOCEAN_TOKEN and config files)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable verbose logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show account information
    Account,
    /// Manage droplets
    #[command(visible_alias = "droplet")]
    Droplets {
        #[command(subcommand)]
        command: DropletCommands,
    },
    /// Manage block storage volumes
    #[command(visible_alias = "volume")]
    Volumes {
        #[command(subcommand)]
        command: VolumeCommands,
    },
    /// Manage domains and DNS records
    #[command(visible_alias = "domain")]
    Domains {
        #[command(subcommand)]
        command: DomainCommands,
    },
    /// Manage floating IPs
    #[command(name = "floating-ips", visible_alias = "floating-ip")]
    FloatingIps {
        #[command(subcommand)]
        command: FloatingIpCommands,
    },
    /// Manage SSH keys
    Ssh {
        #[command(subcommand)]
        command: SshCommands,
    },
    /// List snapshots
    #[command(visible_alias = "snapshot")]
    Snapshots {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
    /// List all regions
    #[command(visible_alias = "region")]
    Regions,
    /// List all droplet sizes
    #[command(visible_alias = "size")]
    Sizes,
    /// Manage tags
    #[command(visible_alias = "tag")]
    Tags {
        #[command(subcommand)]
        command: TagCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DropletCommands {
    /// List all droplets
    #[command(visible_alias = "ls")]
    List,
    /// Get information about a droplet
    #[command(visible_aliases = ["i", "info"])]
    Get { droplet_id: u64 },
    /// Droplet actions
    #[command(visible_alias = "action")]
    Actions {
        #[command(subcommand)]
        command: DropletActionCommands,
    },
    /// Droplet backups
    #[command(visible_alias = "backup")]
    Backups {
        #[command(subcommand)]
        command: BackupCommands,
    },
    /// Droplet snapshots
    #[command(visible_alias = "snapshot")]
    Snapshots {
        #[command(subcommand)]
        command: DropletSnapshotCommands,
    },
    /// Droplet kernels
    #[command(visible_alias = "kernel")]
    Kernels {
        #[command(subcommand)]
        command: KernelCommands,
    },
    /// Droplet power management
    Power {
        #[command(subcommand)]
        command: PowerCommands,
    },
    /// Enable private networking on a droplet
    #[command(
        name = "enable-pn",
        visible_aliases = ["enable_pn", "enable_private_networking"]
    )]
    EnablePn { droplet_id: u64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DropletActionCommands {
    /// List all actions performed on a droplet
    #[command(visible_alias = "ls")]
    List {
        droplet_id: u64,
        /// The maximum number of actions to show
        #[arg(long, visible_alias = "number")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum BackupCommands {
    /// List the backups of a droplet
    #[command(visible_alias = "ls")]
    List { droplet_id: u64 },
    /// Enable automatic backups for a droplet
    #[command(visible_alias = "on")]
    Enable { droplet_id: u64 },
    /// Disable automatic backups for a droplet
    #[command(visible_alias = "off")]
    Disable { droplet_id: u64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DropletSnapshotCommands {
    /// List the snapshots of a droplet
    #[command(visible_alias = "ls")]
    List { droplet_id: u64 },
    /// Take a snapshot of a droplet
    #[command(visible_aliases = ["create", "add"])]
    Take {
        droplet_id: u64,
        snapshot_name: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum KernelCommands {
    /// List the kernels available to a droplet
    #[command(visible_alias = "ls")]
    List { droplet_id: u64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PowerCommands {
    /// Power cycle a droplet (hard reset)
    Cycle { droplet_id: u64 },
    /// Power off a droplet (hard shutdown)
    Off { droplet_id: u64 },
    /// Power on a droplet
    On { droplet_id: u64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum VolumeCommands {
    /// List all volumes
    #[command(visible_alias = "ls")]
    List,
    /// Get information about a volume
    #[command(visible_aliases = ["i", "info"])]
    Get { volume_id: String },
    /// Attach a volume to a droplet
    Attach { volume_id: String, droplet_id: u64 },
    /// Detach a volume from a droplet
    Detach { volume_id: String, droplet_id: u64 },
    /// Volume actions
    #[command(visible_alias = "action")]
    Actions {
        #[command(subcommand)]
        command: VolumeActionCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum VolumeActionCommands {
    /// List all actions performed on a volume
    #[command(visible_alias = "ls")]
    List {
        volume_id: String,
        /// The maximum number of actions to show
        #[arg(long, visible_alias = "number")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DomainCommands {
    /// List all domains
    #[command(visible_alias = "ls")]
    List,
    /// Get information about a domain
    #[command(visible_aliases = ["i", "info"])]
    Get {
        domain: String,
        /// Print the full zone file
        #[arg(long)]
        zone_file: bool,
    },
    /// DNS records of a domain
    #[command(visible_alias = "record")]
    Records {
        #[command(subcommand)]
        command: RecordCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum RecordCommands {
    /// List the DNS records of a domain
    #[command(visible_alias = "ls")]
    List { domain: String },
    /// Get one DNS record
    #[command(visible_aliases = ["i", "info"])]
    Get { domain: String, record_id: u64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum FloatingIpCommands {
    /// List all floating IPs
    #[command(visible_alias = "ls")]
    List,
    /// Get information about a floating IP
    #[command(visible_aliases = ["i", "info"])]
    Get { floating_ip: String },
    /// Floating IP actions
    #[command(visible_alias = "action")]
    Actions {
        #[command(subcommand)]
        command: FloatingIpActionCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum FloatingIpActionCommands {
    /// List all actions performed on a floating IP
    #[command(visible_alias = "ls")]
    List {
        floating_ip: String,
        /// The maximum number of actions to show
        #[arg(long, visible_alias = "number")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SshCommands {
    /// List all SSH keys
    #[command(visible_alias = "ls")]
    List,
    /// Get information about an SSH key
    #[command(visible_aliases = ["i", "info"])]
    Get {
        /// Key id or fingerprint
        key_id: String,
        /// Print the full public key
        #[arg(long)]
        key: bool,
    },
    /// Add an SSH key
    #[command(visible_alias = "create")]
    Add { name: String, keyfile: PathBuf },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SnapshotCommands {
    /// List all snapshots
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TagCommands {
    /// List all tags
    #[command(visible_alias = "ls")]
    List,
    /// Get information about a tag
    #[command(visible_aliases = ["i", "info"])]
    Get { name: String },
}
