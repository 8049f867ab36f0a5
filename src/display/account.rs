//! Account detail.

use crate::display::format::{color_id, color_status, format_boolean, or_none, Style, Styled};
use crate::display::table::TableView;
use crate::display::{echo_json, RenderOptions};
use crate::error::ApiError;
use crate::types::Account;

pub fn render_account(account: &Account, opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(account);
    }
    let mut table = TableView::detail(opts);
    table.push_spanning(&[Styled::new("UUID: ", Style::LABEL), color_id(&account.uuid)]);
    table.push_field("Status", color_status(&account.status));
    table.push_field("Status message", or_none(account.status_message.as_deref()));
    table.push_field("Email", account.email.as_str());
    table.push_field("Email verified", format_boolean(account.email_verified));
    table.push_field("Droplet Limit", account.droplet_limit.to_string());
    table.push_field("Floating IP Limit", account.floating_ip_limit.to_string());
    Ok(table.render())
}
