//! CLI route: single route table and run context. Each handler issues one
//! API call, fails fast on error and hands the result to its renderer.

use crate::api::{CloudApi, DropletAction, HttpCloudApi, NewSshKey, VolumeAction};
use crate::cli::command_name;
use crate::cli::parse::{
    BackupCommands, Commands, DomainCommands, DropletActionCommands, DropletCommands,
    DropletSnapshotCommands, FloatingIpActionCommands, FloatingIpCommands, KernelCommands,
    PowerCommands, RecordCommands, SnapshotCommands, SshCommands, TagCommands,
    VolumeActionCommands, VolumeCommands,
};
use crate::config::DocliConfig;
use crate::display::{self, RenderOptions};
use crate::error::ApiError;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info_span, Instrument};

/// Runtime context for one CLI invocation: the API client and the output
/// mode, both fixed for the life of the process.
pub struct RunContext {
    client: Arc<dyn CloudApi>,
    options: RenderOptions,
}

impl RunContext {
    /// Build the HTTP client from resolved configuration.
    pub fn new(config: &DocliConfig) -> Result<Self, ApiError> {
        let client = HttpCloudApi::new(&config.api)?;
        Ok(Self::with_client(Arc::new(client), config.render_options()))
    }

    /// Use an existing client, e.g. an in-memory one.
    pub fn with_client(client: Arc<dyn CloudApi>, options: RenderOptions) -> Self {
        Self { client, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Run one command and return the block to print on stdout.
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let started = Instant::now();
        let result = self
            .execute_inner(command)
            .instrument(info_span!("command", name = %name))
            .await;
        debug!(
            command = %name,
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        let opts = &self.options;
        match command {
            Commands::Account => {
                let account = self.client.get_account().await?;
                display::render_account(&account, opts)
            }
            Commands::Droplets { command } => self.handle_droplet_command(command).await,
            Commands::Volumes { command } => self.handle_volume_command(command).await,
            Commands::Domains { command } => self.handle_domain_command(command).await,
            Commands::FloatingIps { command } => self.handle_floating_ip_command(command).await,
            Commands::Ssh { command } => self.handle_ssh_command(command).await,
            Commands::Snapshots { command } => match command {
                SnapshotCommands::List => {
                    let snapshots = self.client.list_snapshots().await?;
                    display::render_snapshots(&snapshots, opts)
                }
            },
            Commands::Regions => {
                let regions = self.client.list_regions().await?;
                display::render_regions(&regions, opts)
            }
            Commands::Sizes => {
                let sizes = self.client.list_sizes().await?;
                display::render_sizes(&sizes, opts)
            }
            Commands::Tags { command } => match command {
                TagCommands::List => {
                    let tags = self.client.list_tags().await?;
                    display::render_tags(&tags, opts)
                }
                TagCommands::Get { name } => {
                    let tag = self.client.get_tag(name).await?;
                    display::render_tag(&tag, None, opts)
                }
            },
        }
    }

    async fn handle_droplet_command(&self, command: &DropletCommands) -> Result<String, ApiError> {
        let opts = &self.options;
        match command {
            DropletCommands::List => {
                let droplets = self.client.list_droplets().await?;
                display::render_droplets(&droplets, opts)
            }
            DropletCommands::Get { droplet_id } => {
                let droplet = self.client.get_droplet(*droplet_id).await?;
                display::render_droplet(&droplet, None, opts)
            }
            DropletCommands::Actions { command } => match command {
                DropletActionCommands::List { droplet_id, limit } => {
                    let actions = self.client.list_droplet_actions(*droplet_id).await?;
                    display::render_actions(&apply_limit(actions, *limit), opts)
                }
            },
            DropletCommands::Backups { command } => match command {
                BackupCommands::List { droplet_id } => {
                    let backups = self.client.list_droplet_backups(*droplet_id).await?;
                    display::render_images(&backups, opts)
                }
                BackupCommands::Enable { droplet_id } => {
                    self.droplet_action_id(
                        *droplet_id,
                        DropletAction::EnableBackups,
                        "Automatic backups enabled.",
                    )
                    .await
                }
                BackupCommands::Disable { droplet_id } => {
                    self.droplet_action_id(
                        *droplet_id,
                        DropletAction::DisableBackups,
                        "Automatic backups disabled.",
                    )
                    .await
                }
            },
            DropletCommands::Snapshots { command } => match command {
                DropletSnapshotCommands::List { droplet_id } => {
                    let snapshots = self.client.list_droplet_snapshots(*droplet_id).await?;
                    display::render_images(&snapshots, opts)
                }
                DropletSnapshotCommands::Take {
                    droplet_id,
                    snapshot_name,
                } => {
                    let action = self
                        .client
                        .droplet_action(
                            *droplet_id,
                            DropletAction::Snapshot {
                                name: snapshot_name.clone(),
                            },
                        )
                        .await?;
                    display::render_action(&action, Some("Taking a snapshot..."), opts)
                }
            },
            DropletCommands::Kernels { command } => match command {
                KernelCommands::List { droplet_id } => {
                    let kernels = self.client.list_droplet_kernels(*droplet_id).await?;
                    display::render_kernels(&kernels, opts)
                }
            },
            DropletCommands::Power { command } => {
                let (droplet_id, action, message) = match command {
                    PowerCommands::Cycle { droplet_id } => {
                        (droplet_id, DropletAction::PowerCycle, "Power cycling droplet...")
                    }
                    PowerCommands::Off { droplet_id } => {
                        (droplet_id, DropletAction::PowerOff, "Powering off droplet...")
                    }
                    PowerCommands::On { droplet_id } => {
                        (droplet_id, DropletAction::PowerOn, "Powering on droplet...")
                    }
                };
                self.droplet_action_id(*droplet_id, action, message).await
            }
            DropletCommands::EnablePn { droplet_id } => {
                self.client
                    .droplet_action(*droplet_id, DropletAction::EnablePrivateNetworking)
                    .await?;
                display::render_message("Private networking enabled.", &[], opts)
            }
        }
    }

    async fn droplet_action_id(
        &self,
        droplet_id: u64,
        action: DropletAction,
        message: &str,
    ) -> Result<String, ApiError> {
        let action = self.client.droplet_action(droplet_id, action).await?;
        display::render_action_id(&action, Some(message), &self.options)
    }

    async fn handle_volume_command(&self, command: &VolumeCommands) -> Result<String, ApiError> {
        let opts = &self.options;
        match command {
            VolumeCommands::List => {
                let volumes = self.client.list_volumes().await?;
                display::render_volumes(&volumes, opts)
            }
            VolumeCommands::Get { volume_id } => {
                let volume = self.client.get_volume(volume_id).await?;
                display::render_volume(&volume, None, opts)
            }
            VolumeCommands::Attach {
                volume_id,
                droplet_id,
            } => {
                let action = self
                    .client
                    .volume_action(
                        volume_id,
                        VolumeAction::Attach {
                            droplet_id: *droplet_id,
                        },
                    )
                    .await?;
                display::render_action(&action, Some("Volume attached."), opts)
            }
            VolumeCommands::Detach {
                volume_id,
                droplet_id,
            } => {
                let action = self
                    .client
                    .volume_action(
                        volume_id,
                        VolumeAction::Detach {
                            droplet_id: *droplet_id,
                        },
                    )
                    .await?;
                display::render_action(&action, Some("Volume detached."), opts)
            }
            VolumeCommands::Actions { command } => match command {
                VolumeActionCommands::List { volume_id, limit } => {
                    let actions = self.client.list_volume_actions(volume_id).await?;
                    display::render_actions(&apply_limit(actions, *limit), opts)
                }
            },
        }
    }

    async fn handle_domain_command(&self, command: &DomainCommands) -> Result<String, ApiError> {
        let opts = &self.options;
        match command {
            DomainCommands::List => {
                let domains = self.client.list_domains().await?;
                display::render_domains(&domains, opts)
            }
            DomainCommands::Get { domain, zone_file } => {
                let domain = self.client.get_domain(domain).await?;
                display::render_domain(&domain, *zone_file, None, opts)
            }
            DomainCommands::Records { command } => match command {
                RecordCommands::List { domain } => {
                    let records = self.client.list_domain_records(domain).await?;
                    display::render_domain_records(&records, opts)
                }
                RecordCommands::Get { domain, record_id } => {
                    let record = self.client.get_domain_record(domain, *record_id).await?;
                    display::render_domain_record(&record, None, opts)
                }
            },
        }
    }

    async fn handle_floating_ip_command(
        &self,
        command: &FloatingIpCommands,
    ) -> Result<String, ApiError> {
        let opts = &self.options;
        match command {
            FloatingIpCommands::List => {
                let floating_ips = self.client.list_floating_ips().await?;
                display::render_floating_ips(&floating_ips, opts)
            }
            FloatingIpCommands::Get { floating_ip } => {
                let floating_ip = self.client.get_floating_ip(floating_ip).await?;
                display::render_floating_ip(&floating_ip, None, opts)
            }
            FloatingIpCommands::Actions { command } => match command {
                FloatingIpActionCommands::List { floating_ip, limit } => {
                    let actions = self.client.list_floating_ip_actions(floating_ip).await?;
                    display::render_actions(&apply_limit(actions, *limit), opts)
                }
            },
        }
    }

    async fn handle_ssh_command(&self, command: &SshCommands) -> Result<String, ApiError> {
        let opts = &self.options;
        match command {
            SshCommands::List => {
                let keys = self.client.list_ssh_keys().await?;
                display::render_ssh_keys(&keys, opts)
            }
            SshCommands::Get { key_id, key } => {
                let ssh_key = self.client.get_ssh_key(key_id).await?;
                display::render_ssh_key(&ssh_key, *key, None, opts)
            }
            SshCommands::Add { name, keyfile } => {
                let public_key = read_key_file(keyfile)?;
                let ssh_key = self
                    .client
                    .create_ssh_key(NewSshKey {
                        name: name.clone(),
                        public_key,
                    })
                    .await?;
                display::render_ssh_key(&ssh_key, false, Some("New SSH Key added."), opts)
            }
        }
    }
}

/// Keep only the first `limit` items, in received order.
fn apply_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

fn read_key_file(path: &Path) -> Result<String, ApiError> {
    std::fs::read_to_string(path).map_err(|e| {
        ApiError::LocalArgument(format!(
            "Could not read key file {}: {}",
            path.display(),
            e
        ))
    })
}
