//! Bare status messages for operations that return no resource.

use crate::display::format::{format_template, Style, Styled};
use crate::display::{echo_json, RenderOptions};
use crate::error::ApiError;
use serde_json::json;
use std::fmt;

/// Fill `template` with `args` and print it as a status line, or as
/// `{"message": ...}` in JSON mode.
pub fn render_message(
    template: &str,
    args: &[&dyn fmt::Display],
    opts: &RenderOptions,
) -> Result<String, ApiError> {
    let text = format_template(template, args);
    if opts.json {
        return echo_json(&json!({ "message": text }));
    }
    Ok(opts.paint(&Styled::new(text, Style::LABEL)))
}
