//! CLI domain: parse, route, help and output only.
//! One route table maps each command to one API call and one renderer.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{
    BackupCommands, Cli, Commands, DomainCommands, DropletActionCommands, DropletCommands,
    DropletSnapshotCommands, FloatingIpActionCommands, FloatingIpCommands, KernelCommands,
    PowerCommands, RecordCommands, SnapshotCommands, SshCommands, TagCommands,
    VolumeActionCommands, VolumeCommands,
};
pub use route::RunContext;
