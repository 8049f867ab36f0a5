//! Display: turns API resources into terminal output.
//!
//! Every renderer takes the resource (or list) plus a [`RenderOptions`] and
//! returns the complete block to print. In JSON mode the resource is echoed
//! unmodified; otherwise it is laid out as a table built from the shared
//! formatting primitives so IDs, names and statuses look the same
//! everywhere.

use crate::error::ApiError;
use serde::Serialize;

mod account;
mod action;
mod domain;
mod droplet;
pub mod format;
mod image;
mod message;
mod network;
mod ssh;
pub mod table;
mod tag;
mod volume;

pub use account::render_account;
pub use action::{render_action, render_action_id, render_actions};
pub use domain::{render_domain, render_domain_record, render_domain_records, render_domains};
pub use droplet::{render_droplet, render_droplets, render_kernels};
pub use image::{render_image, render_images, render_snapshots};
pub use message::render_message;
pub use network::{render_floating_ip, render_floating_ips, render_regions, render_sizes};
pub use ssh::{render_ssh_key, render_ssh_keys};
pub use tag::{render_tag, render_tags};
pub use volume::{render_volume, render_volumes};

use format::{Style, Styled};

/// Output mode for one process run. Built once from flags and config, then
/// passed by reference into every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Emit the raw resource as JSON instead of a table.
    pub json: bool,
    /// Emit ANSI colors in table mode.
    pub color: bool,
}

impl RenderOptions {
    pub fn new(json: bool, color: bool) -> Self {
        Self { json, color }
    }

    /// Paint a styled fragment, or return its bare text when color is off.
    pub fn paint(&self, styled: &Styled) -> String {
        styled.paint(self.color)
    }
}

/// Serialize a resource for JSON mode.
fn echo_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prefix a rendered table with the optional status line.
fn with_message(message: Option<&str>, body: String, opts: &RenderOptions) -> String {
    match message {
        Some(message) => format!(
            "{}\n{}",
            opts.paint(&Styled::new(message, Style::LABEL)),
            body
        ),
        None => body,
    }
}
