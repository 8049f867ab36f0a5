//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::display::format::{Style, Styled};
use crate::display::RenderOptions;
use crate::error::ApiError;
use serde_json::json;

/// The one place errors become user-facing text, whatever their origin.
/// JSON mode wraps the message as `{"error": ...}`.
pub fn map_error(e: &ApiError, opts: &RenderOptions) -> String {
    if opts.json {
        return json!({ "error": e.to_string() }).to_string();
    }
    opts.paint(&Styled::new(e.to_string(), Style::NEGATIVE))
}
