//! Tags.

use crate::display::format::{color_name, color_optional_id};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::Tag;

pub fn render_tag(
    tag: &Tag,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(tag);
    }
    let droplets = &tag.resources.droplets;
    let mut table = TableView::detail(opts);
    table.push_field("Tag", color_name(&tag.name));
    table.push_field("Droplets Tagged", droplets.count.to_string());
    table.push_field(
        "Last Droplet Tagged",
        color_optional_id(droplets.last_tagged.as_ref().map(|d| d.id)),
    );
    Ok(with_message(message, table.render(), opts))
}

pub fn render_tags(tags: &[Tag], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(tags);
    }
    let mut table = TableView::list(&["Tag", "Droplets Tagged"], opts);
    for tag in tags {
        table.push_row(vec![
            color_name(&tag.name),
            tag.resources.droplets.count.to_string().into(),
        ]);
    }
    Ok(table.render())
}
