//! Droplet, volume and floating IP actions.

use crate::display::format::{
    color_id, color_optional_id, color_status, format_date, or_none, Style, Styled,
};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::Action;

pub fn render_action(
    action: &Action,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(action);
    }
    let mut table = TableView::detail(opts);
    table.push_field("Action ID", color_id(action.id));
    table.push_field("Action Status", color_status(&action.status));
    table.push_field("Action Type", action.action_type.as_str());
    table.push_field("Started At", format_date(action.started_at.as_ref()));
    table.push_field("Completed At", format_date(action.completed_at.as_ref()));
    table.push_field("Resource Type", or_none(action.resource_type.as_deref()));
    table.push_field("Resource ID", color_optional_id(action.resource_id));
    table.push_field("Resource Region", or_none(action.region_slug.as_deref()));
    Ok(with_message(message, table.render(), opts))
}

/// Short acknowledgement for fire-and-forget actions: the status line and
/// the action's ID only.
pub fn render_action_id(
    action: &Action,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(action);
    }
    let line = format!(
        "{}{}",
        opts.paint(&Styled::new("Action ID: ", Style::LABEL)),
        opts.paint(&color_id(action.id))
    );
    Ok(with_message(message, line, opts))
}

pub fn render_actions(actions: &[Action], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(actions);
    }
    let mut table = TableView::list(&["ID", "Status", "Type", "Completed"], opts);
    for action in actions {
        table.push_row(vec![
            color_id(action.id),
            color_status(&action.status),
            action.action_type.as_str().into(),
            format_date(action.completed_at.as_ref()).into(),
        ]);
    }
    Ok(table.render())
}
