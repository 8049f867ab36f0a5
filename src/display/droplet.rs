//! Droplets and their kernels.

use crate::display::format::{
    color_id, color_name, color_status, format_date, format_size, join_or_none, or_none, SizeUnit,
    Style, Styled, NONE,
};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::{Droplet, Kernel};

pub fn render_droplet(
    droplet: &Droplet,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(droplet);
    }
    let mut table = TableView::detail(opts);
    table.push_field("ID", color_id(droplet.id));
    table.push_field("Name", color_name(&droplet.name));
    table.push_field("Status", color_status(&droplet.status));
    table.push_field("Memory", format_size(droplet.memory, SizeUnit::Megabytes));
    table.push_field("Disk Size", format_size(droplet.disk, SizeUnit::Gigabytes));
    table.push_field("VCPUs", droplet.vcpus.to_string());
    table.push_field(
        "Kernel",
        droplet
            .kernel
            .as_ref()
            .map_or_else(|| Styled::plain(NONE), |k| color_name(&k.name)),
    );
    table.push_field(
        "Image",
        format!("{} {}", droplet.image.distribution, droplet.image.name),
    );
    table.push_field("Features", join_or_none(&droplet.features));
    table.push_field("Region", or_none(droplet.region.name.as_deref()));
    table.push_field("IPv4", join_or_none(droplet.ipv4_addresses()));
    table.push_field("IPv6", join_or_none(droplet.ipv6_addresses()));
    table.push_field("Tags", join_or_none(&droplet.tags));
    table.push_field("Created At", format_date(droplet.created_at.as_ref()));
    table.push_spanning(&[
        Styled::new("Backups\n", Style::LABEL),
        join_or_none(&droplet.backup_ids).into(),
    ]);
    table.push_spanning(&[
        Styled::new("Snapshots\n", Style::LABEL),
        join_or_none(&droplet.snapshot_ids).into(),
    ]);
    table.push_spanning(&[
        Styled::new("Volumes\n", Style::LABEL),
        join_or_none(&droplet.volume_ids).into(),
    ]);
    Ok(with_message(message, table.render(), opts))
}

pub fn render_droplets(droplets: &[Droplet], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(droplets);
    }
    let mut table = TableView::list(&["ID", "Name", "IPv4", "Status"], opts);
    for droplet in droplets {
        table.push_row(vec![
            color_id(droplet.id),
            color_name(&droplet.name),
            join_or_none(droplet.ipv4_addresses()).into(),
            color_status(&droplet.status),
        ]);
    }
    Ok(table.render())
}

pub fn render_kernels(kernels: &[Kernel], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(kernels);
    }
    let mut table = TableView::list(&["ID", "Name and Version"], opts);
    for kernel in kernels {
        table.push_row(vec![
            color_id(kernel.id),
            Styled::plain(format!(
                "{}\nVersion: {}",
                opts.paint(&color_name(&kernel.name)),
                kernel.version
            )),
        ]);
    }
    Ok(table.render())
}
