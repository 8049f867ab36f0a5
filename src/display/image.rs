//! Images, backups and snapshots.

use crate::display::format::{
    color_id, color_name, format_boolean, format_date, format_size, join_or_none, or_none, Hue,
    SizeUnit, Style, Styled,
};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::{Image, Snapshot};

pub fn render_image(
    image: &Image,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(image);
    }
    let mut table = TableView::detail(opts);
    table.push_field("ID", color_id(image.id));
    table.push_field("Name", color_name(&image.name));
    table.push_field("Distribution", image.distribution.as_str());
    table.push_field("Type", or_none(image.image_type.as_deref()));
    table.push_field("Slug", or_none(image.slug.as_deref()));
    table.push_field("Public", format_boolean(image.public));
    table.push_field("Regions", join_or_none(&image.regions));
    table.push_field("Created At", format_date(image.created_at.as_ref()));
    table.push_field(
        "Size",
        or_none(image.size_gigabytes.map(|s| format_size(s, SizeUnit::Gigabytes))),
    );
    table.push_field(
        "Minimum Disk Size",
        or_none(image.min_disk_size.map(|s| format_size(s, SizeUnit::Gigabytes))),
    );
    Ok(with_message(message, table.render(), opts))
}

/// Images sorted by distribution then name. Public images are shown in
/// green and private ones in blue, as the header legend says.
pub fn render_images(images: &[Image], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(images);
    }
    let mut sorted: Vec<&Image> = images.iter().collect();
    sorted.sort_by_key(|image| image.sort_key());

    let mut table = TableView::list(
        &["ID", "Distribution (PUBLIC) (PRIVATE)", "Minimum Size"],
        opts,
    );
    for image in sorted {
        let visibility = if image.public {
            Style::hue(Hue::Green)
        } else {
            Style::hue(Hue::Blue)
        };
        table.push_row(vec![
            color_id(image.id),
            Styled::new(format!("{} {}", image.distribution, image.name), visibility),
            or_none(image.min_disk_size.map(|s| format_size(s, SizeUnit::Gigabytes))).into(),
        ]);
    }
    Ok(table.render())
}

pub fn render_snapshots(snapshots: &[Snapshot], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(snapshots);
    }
    let mut table = TableView::list(&["ID", "Name", "Created At"], opts);
    for snapshot in snapshots {
        table.push_row(vec![
            color_id(&snapshot.id),
            color_name(&snapshot.name),
            format_date(snapshot.created_at.as_ref()).into(),
        ]);
    }
    Ok(table.render())
}
