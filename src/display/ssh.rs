//! SSH keys.

use crate::display::format::{color_id, color_name, Style, Styled};
use crate::display::table::TableView;
use crate::display::{echo_json, with_message, RenderOptions};
use crate::error::ApiError;
use crate::types::SshKey;

/// Render one key. With `key_only` set the public key is printed verbatim;
/// JSON mode takes precedence.
pub fn render_ssh_key(
    key: &SshKey,
    key_only: bool,
    message: Option<&str>,
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(key);
    }
    if key_only {
        return Ok(key.public_key.clone());
    }
    let mut table = TableView::detail(opts);
    table.push_field("ID", color_id(key.id));
    table.push_field("Name", color_name(&key.name));
    table.push_field("Fingerprint", key.fingerprint.as_str());
    table.push_field(
        "Public Key",
        Styled::new("Use the --key flag to get the full public key", Style::LABEL),
    );
    Ok(with_message(message, table.render(), opts))
}

pub fn render_ssh_keys(keys: &[SshKey], opts: &RenderOptions) -> Result<String, ApiError> {
    if opts.json {
        return echo_json(keys);
    }
    let mut table = TableView::list(&["ID", "Name", "Fingerprint"], opts);
    for key in keys {
        table.push_row(vec![
            color_id(key.id),
            color_name(&key.name),
            key.fingerprint.as_str().into(),
        ]);
    }
    Ok(table.render())
}
