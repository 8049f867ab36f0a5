//! CLI help and command-name contract for logging.

use crate::cli::parse::{
    BackupCommands, Commands, DomainCommands, DropletActionCommands, DropletCommands,
    DropletSnapshotCommands, FloatingIpActionCommands, FloatingIpCommands, KernelCommands,
    PowerCommands, RecordCommands, SnapshotCommands, SshCommands, TagCommands,
    VolumeActionCommands, VolumeCommands,
};

/// Dotted command name used in log records (e.g. "droplets.actions.list").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Account => "account".to_string(),
        Commands::Droplets { command } => format!("droplets.{}", droplet_command_name(command)),
        Commands::Volumes { command } => format!("volumes.{}", volume_command_name(command)),
        Commands::Domains { command } => format!("domains.{}", domain_command_name(command)),
        Commands::FloatingIps { command } => {
            format!("floating_ips.{}", floating_ip_command_name(command))
        }
        Commands::Ssh { command } => format!("ssh.{}", ssh_command_name(command)),
        Commands::Snapshots { command } => format!("snapshots.{}", snapshot_command_name(command)),
        Commands::Regions => "regions".to_string(),
        Commands::Sizes => "sizes".to_string(),
        Commands::Tags { command } => format!("tags.{}", tag_command_name(command)),
    }
}

pub fn droplet_command_name(command: &DropletCommands) -> &'static str {
    match command {
        DropletCommands::List => "list",
        DropletCommands::Get { .. } => "get",
        DropletCommands::Actions { command } => match command {
            DropletActionCommands::List { .. } => "actions.list",
        },
        DropletCommands::Backups { command } => match command {
            BackupCommands::List { .. } => "backups.list",
            BackupCommands::Enable { .. } => "backups.enable",
            BackupCommands::Disable { .. } => "backups.disable",
        },
        DropletCommands::Snapshots { command } => match command {
            DropletSnapshotCommands::List { .. } => "snapshots.list",
            DropletSnapshotCommands::Take { .. } => "snapshots.take",
        },
        DropletCommands::Kernels { command } => match command {
            KernelCommands::List { .. } => "kernels.list",
        },
        DropletCommands::Power { command } => match command {
            PowerCommands::Cycle { .. } => "power.cycle",
            PowerCommands::Off { .. } => "power.off",
            PowerCommands::On { .. } => "power.on",
        },
        DropletCommands::EnablePn { .. } => "enable_pn",
    }
}

pub fn volume_command_name(command: &VolumeCommands) -> &'static str {
    match command {
        VolumeCommands::List => "list",
        VolumeCommands::Get { .. } => "get",
        VolumeCommands::Attach { .. } => "attach",
        VolumeCommands::Detach { .. } => "detach",
        VolumeCommands::Actions { command } => match command {
            VolumeActionCommands::List { .. } => "actions.list",
        },
    }
}

pub fn domain_command_name(command: &DomainCommands) -> &'static str {
    match command {
        DomainCommands::List => "list",
        DomainCommands::Get { .. } => "get",
        DomainCommands::Records { command } => match command {
            RecordCommands::List { .. } => "records.list",
            RecordCommands::Get { .. } => "records.get",
        },
    }
}

pub fn floating_ip_command_name(command: &FloatingIpCommands) -> &'static str {
    match command {
        FloatingIpCommands::List => "list",
        FloatingIpCommands::Get { .. } => "get",
        FloatingIpCommands::Actions { command } => match command {
            FloatingIpActionCommands::List { .. } => "actions.list",
        },
    }
}

pub fn ssh_command_name(command: &SshCommands) -> &'static str {
    match command {
        SshCommands::List => "list",
        SshCommands::Get { .. } => "get",
        SshCommands::Add { .. } => "add",
    }
}

pub fn snapshot_command_name(command: &SnapshotCommands) -> &'static str {
    match command {
        SnapshotCommands::List => "list",
    }
}

pub fn tag_command_name(command: &TagCommands) -> &'static str {
    match command {
        TagCommands::List => "list",
        TagCommands::Get { .. } => "get",
    }
}
