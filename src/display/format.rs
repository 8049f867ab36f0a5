//! Formatting primitives shared by every renderer.
//!
//! All functions here are pure. Styling is carried as data ([`Styled`]) and
//! only turned into ANSI escapes when a renderer paints it.

use crate::types::{AccountStatus, ActionStatus, DropletStatus, RecordType};
use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;
use std::fmt;

/// Token printed for absent optional values.
pub const NONE: &str = "none";

/// Token printed for absent dates.
pub const NOT_AVAILABLE: &str = "n/a";

/// Textual values that mean "no identifier".
const NONE_TOKENS: [&str; 4] = ["", "null", "undefined", "none"];

/// Locale-style timestamp, e.g. `3/14/2024, 9:05:00 PM`.
const LOCALE_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub hue: Option<Hue>,
    pub bold: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        hue: None,
        bold: false,
    };
    /// Identifiers: bold cyan.
    pub const ID: Style = Style {
        hue: Some(Hue::Cyan),
        bold: true,
    };
    /// Resource names.
    pub const NAME: Style = Style::hue(Hue::Blue);
    /// Row labels, headers and status lines.
    pub const LABEL: Style = Style::hue(Hue::Red);
    pub const POSITIVE: Style = Style::hue(Hue::Green);
    pub const NEGATIVE: Style = Style::hue(Hue::Red);

    pub const fn hue(hue: Hue) -> Self {
        Style {
            hue: Some(hue),
            bold: false,
        }
    }
}

/// Text plus the style it should be shown in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    pub text: String,
    pub style: Style,
}

impl Styled {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    /// Render to a string. Each line is painted on its own so multi-line
    /// cells keep their color after the table splits them.
    pub fn paint(&self, color: bool) -> String {
        if !color || self.style == Style::PLAIN {
            return self.text.clone();
        }
        self.text
            .split('\n')
            .map(|line| paint_line(line, self.style))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<String> for Styled {
    fn from(text: String) -> Self {
        Styled::plain(text)
    }
}

impl From<&str> for Styled {
    fn from(text: &str) -> Self {
        Styled::plain(text)
    }
}

fn paint_line(line: &str, style: Style) -> String {
    let colored = match style.hue {
        Some(Hue::Red) => line.red().to_string(),
        Some(Hue::Green) => line.green().to_string(),
        Some(Hue::Yellow) => line.yellow().to_string(),
        Some(Hue::Blue) => line.blue().to_string(),
        Some(Hue::Magenta) => line.magenta().to_string(),
        Some(Hue::Cyan) => line.cyan().to_string(),
        Some(Hue::Gray) => line.bright_black().to_string(),
        None => line.to_string(),
    };
    if style.bold {
        colored.bold().to_string()
    } else {
        colored
    }
}

/// An enum family with its own status-to-style table. Values outside the
/// known set map to [`Style::PLAIN`].
pub trait StatusStyle {
    fn label(&self) -> &str;
    fn style(&self) -> Style;
}

impl StatusStyle for AccountStatus {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn style(&self) -> Style {
        match self {
            AccountStatus::Active => Style::hue(Hue::Green),
            AccountStatus::Warning => Style::hue(Hue::Yellow),
            AccountStatus::Locked => Style::hue(Hue::Red),
            AccountStatus::Other(_) => Style::PLAIN,
        }
    }
}

impl StatusStyle for ActionStatus {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn style(&self) -> Style {
        match self {
            ActionStatus::Completed => Style::hue(Hue::Green),
            ActionStatus::InProgress => Style::hue(Hue::Blue),
            ActionStatus::Errored => Style::hue(Hue::Red),
            ActionStatus::Other(_) => Style::PLAIN,
        }
    }
}

impl StatusStyle for DropletStatus {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn style(&self) -> Style {
        match self {
            DropletStatus::New | DropletStatus::Off => Style::hue(Hue::Red),
            DropletStatus::Active => Style::hue(Hue::Green),
            DropletStatus::Archived => Style::hue(Hue::Blue),
            DropletStatus::Other(_) => Style::PLAIN,
        }
    }
}

impl StatusStyle for RecordType {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn style(&self) -> Style {
        match self {
            RecordType::A => Style::hue(Hue::Yellow),
            RecordType::Aaaa => Style::hue(Hue::Blue),
            RecordType::Cname => Style::hue(Hue::Green),
            RecordType::Mx => Style::hue(Hue::Cyan),
            RecordType::Txt => Style::hue(Hue::Magenta),
            RecordType::Srv => Style::hue(Hue::Red),
            RecordType::Ns => Style::hue(Hue::Gray),
            RecordType::Other(_) => Style::PLAIN,
        }
    }
}

pub fn color_status<S: StatusStyle>(value: &S) -> Styled {
    Styled::new(value.label(), value.style())
}

/// The one formatting rule for identifiers.
pub fn color_id(id: impl fmt::Display) -> Styled {
    let text = id.to_string();
    if NONE_TOKENS.contains(&text.trim()) {
        Styled::plain(NONE)
    } else {
        Styled::new(text, Style::ID)
    }
}

pub fn color_optional_id<T: fmt::Display>(id: Option<T>) -> Styled {
    id.map_or_else(|| Styled::plain(NONE), |id| color_id(id))
}

/// The one formatting rule for names.
pub fn color_name(name: impl fmt::Display) -> Styled {
    Styled::new(name.to_string(), Style::NAME)
}

/// Absent or blank values become `none`.
pub fn or_none<T: fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| NONE.to_string())
}

pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |d| d.with_timezone(&Local).format(LOCALE_DATE_FORMAT).to_string(),
    )
}

pub fn format_boolean(value: bool) -> Styled {
    if value {
        Styled::new("yes", Style::POSITIVE)
    } else {
        Styled::new("no", Style::NEGATIVE)
    }
}

/// Join values one per line; an empty (or blank) result becomes `none`.
pub fn join_or_none<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let joined = values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        NONE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl SizeUnit {
    fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
            SizeUnit::Terabytes => "TB",
        }
    }
}

pub fn format_size(amount: impl fmt::Display, unit: SizeUnit) -> String {
    format!("{} {}", amount, unit.suffix())
}

pub fn format_price(amount: f64) -> String {
    format!("${}", amount)
}

/// Break `text` into lines of at most `width` characters at word
/// boundaries. A word longer than `width` is left whole on its own line.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Positional `{n}` substitution. Placeholders without a matching argument
/// are kept verbatim.
pub fn format_template(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 && after[digits..].starts_with('}') {
            let arg = after[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index));
            match arg {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str(&rest[open..open + digits + 2]),
            }
            rest = &after[digits + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
