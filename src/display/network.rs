//! Floating IPs, regions and sizes.

use crate::display::format::{
    color_id, color_name, color_optional_id, format_boolean, format_price, format_size,
    join_or_none, or_none, SizeUnit,
};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::{FloatingIp, Region, Size};

pub fn render_floating_ip(
    floating_ip: &FloatingIp,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(floating_ip);
    }
    let mut table = TableView::detail(opts);
    table.push_field("IP", color_id(&floating_ip.ip));
    table.push_field("Region", color_name(&floating_ip.region.slug));
    table.push_field(
        "Droplet",
        color_optional_id(floating_ip.droplet.as_ref().map(|d| d.id)),
    );
    Ok(with_message(message, table.render(), opts))
}

pub fn render_floating_ips(
    floating_ips: &[FloatingIp],
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(floating_ips);
    }
    let mut table = TableView::list(&["IP", "Region", "Droplet"], opts);
    for floating_ip in floating_ips {
        table.push_row(vec![
            color_id(&floating_ip.ip),
            color_name(&floating_ip.region.slug),
            color_optional_id(floating_ip.droplet.as_ref().map(|d| d.id)),
        ]);
    }
    Ok(table.render())
}

/// Regions ordered by slug.
pub fn render_regions(regions: &[Region], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(regions);
    }
    let mut sorted: Vec<&Region> = regions.iter().collect();
    sorted.sort_by(|a, b| a.slug.cmp(&b.slug));

    let mut table = TableView::list(&["ID", "Name", "Sizes", "Features", "Available"], opts);
    for region in sorted {
        table.push_row(vec![
            color_id(&region.slug),
            color_name(or_none(region.name.as_deref())),
            join_or_none(&region.sizes).into(),
            join_or_none(&region.features).into(),
            format_boolean(region.available),
        ]);
    }
    Ok(table.render())
}

pub fn render_sizes(sizes: &[Size], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(sizes);
    }
    let mut table = TableView::list(
        &[
            "ID",
            "Memory",
            "VCPUs",
            "Disk Space",
            "Transfer\nBandwidth",
            "Price/Month",
        ],
        opts,
    );
    for size in sizes {
        table.push_row(vec![
            color_id(&size.slug),
            format_size(size.memory, SizeUnit::Megabytes).into(),
            size.vcpus.to_string().into(),
            format_size(size.disk, SizeUnit::Gigabytes).into(),
            format_size(size.transfer, SizeUnit::Terabytes).into(),
            format_price(size.price_monthly).into(),
        ]);
    }
    Ok(table.render())
}
