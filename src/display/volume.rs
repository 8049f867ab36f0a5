//! Block storage volumes.
//!
//! The list view is a column of per-volume blocks rather than one row per
//! volume; volumes carry too many fields for a flat table to stay readable.

use crate::display::format::{
    color_id, color_name, format_date, format_size, join_or_none, or_none, wrap_text, SizeUnit,
    Style, Styled,
};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::Volume;

/// Column width for volume descriptions.
const DESCRIPTION_WIDTH: usize = 25;

fn push_heading(table: &mut TableView, volume: &Volume) {
    table.push_spanning(&[Styled::new("ID: ", Style::LABEL), color_id(&volume.id)]);
}

pub fn render_volume(
    volume: &Volume,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(volume);
    }
    let mut table = TableView::detail(opts);
    push_heading(&mut table, volume);
    table.push_field("Name", color_name(&volume.name));
    table.push_field("Size", format_size(volume.size_gigabytes, SizeUnit::Gigabytes));
    table.push_field("Region", color_name(&volume.region.slug));
    table.push_field(
        "Description",
        or_none(
            volume
                .description
                .as_deref()
                .map(|d| wrap_text(d, DESCRIPTION_WIDTH)),
        ),
    );
    table.push_field("Attached To", color_id(join_or_none(&volume.droplet_ids)));
    table.push_field("Created At", format_date(volume.created_at.as_ref()));
    Ok(with_message(message, table.render(), opts))
}

pub fn render_volumes(volumes: &[Volume], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(volumes);
    }
    let mut table = TableView::detail(opts);
    for volume in volumes {
        push_heading(&mut table, volume);
        table.push_field("Name", color_name(&volume.name));
        table.push_field("Size", format_size(volume.size_gigabytes, SizeUnit::Gigabytes));
        table.push_field("Region", color_name(&volume.region.slug));
        table.push_field("Attached to", color_id(join_or_none(&volume.droplet_ids)));
    }
    Ok(table.render())
}
