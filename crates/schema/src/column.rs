//! Column definitions for the generic data table
//!
//! A column names a dot-path into the record and a [`ColumnKind`] that
//! decides how the cell renders. Kinds are a closed sum type; the UI matches
//! on the rendered [`Cell`] rather than on type strings.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::value::{lookup, value_text};

/// Placeholder shown for missing values
pub const EMPTY_CELL: &str = "—";

// ============================================================================
// Column Kind
// ============================================================================

/// Visual tone of a badge cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    /// CSS class for this tone
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge-neutral",
            BadgeTone::Info => "badge badge-info",
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Warning => "badge badge-warning",
            BadgeTone::Danger => "badge badge-danger",
        }
    }
}

/// How a column renders its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind {
    /// Plain text
    Plain,
    /// Pill with a tone chosen from the text
    Badge(fn(&str) -> BadgeTone),
    /// ISO timestamp shown as a calendar date
    Date,
    /// Leading initial bubble plus the text
    Avatar,
    /// Caller supplied formatter over the raw value
    Custom(fn(&Value) -> String),
}

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// CSS class for this alignment
    pub fn css_class(&self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

// ============================================================================
// Cell
// ============================================================================

/// A rendered cell, ready for either the table or the card layout
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Badge { text: String, tone: BadgeTone },
    Date(String),
    Avatar { initial: String, text: String },
    Empty,
}

impl Cell {
    /// The visible text of the cell
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) | Cell::Date(text) => text,
            Cell::Badge { text, .. } | Cell::Avatar { text, .. } => text,
            Cell::Empty => "",
        }
    }
}

// ============================================================================
// Column
// ============================================================================

/// Definition of a single table column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Dot-path into the record (e.g. `district.title`)
    pub key: String,
    /// Header text
    pub label: String,
    /// Renderer
    pub kind: ColumnKind,
    /// Whether the search box looks at this column
    pub searchable: bool,
    /// Alignment
    pub align: Align,
}

impl Column {
    /// Create a plain, searchable column
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ColumnKind::Plain,
            searchable: true,
            align: Align::Left,
        }
    }

    /// Create a date column (not searchable)
    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: ColumnKind::Date,
            searchable: false,
            ..Self::new(key, label)
        }
    }

    /// Create a badge column
    pub fn badge(key: impl Into<String>, label: impl Into<String>, tone: fn(&str) -> BadgeTone) -> Self {
        Self {
            kind: ColumnKind::Badge(tone),
            ..Self::new(key, label)
        }
    }

    /// Create an avatar column
    pub fn avatar(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: ColumnKind::Avatar,
            ..Self::new(key, label)
        }
    }

    /// Replace the renderer with a custom formatter
    pub fn with_render(mut self, render: fn(&Value) -> String) -> Self {
        self.kind = ColumnKind::Custom(render);
        self
    }

    /// Set searchability
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Set alignment
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Render this column's cell for a record
    pub fn render(&self, record: &Value) -> Cell {
        let raw = lookup(record, &self.key);
        let text = match self.kind {
            ColumnKind::Custom(format) => format(raw.unwrap_or(&Value::Null)),
            _ => raw.map(value_text).unwrap_or_default(),
        };
        if text.is_empty() {
            return Cell::Empty;
        }

        match self.kind {
            ColumnKind::Plain | ColumnKind::Custom(_) => Cell::Text(text),
            ColumnKind::Badge(tone) => Cell::Badge {
                tone: tone(&text),
                text,
            },
            ColumnKind::Date => Cell::Date(format_date(&text)),
            ColumnKind::Avatar => Cell::Avatar {
                initial: initial_of(&text),
                text,
            },
        }
    }

    /// Stringified rendered value, as matched by the search box
    pub fn text(&self, record: &Value) -> String {
        self.render(record).text().to_string()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Format an API timestamp as `02 Jan 2024`
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc).format("%d %b %Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

/// Uppercased first character of a name
fn initial_of(text: &str) -> String {
    text.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Badge tone for user roles
pub fn role_tone(role: &str) -> BadgeTone {
    match role {
        "admin" => BadgeTone::Danger,
        "user" => BadgeTone::Info,
        _ => BadgeTone::Neutral,
    }
}

/// Badge tone for user types
pub fn user_type_tone(user_type: &str) -> BadgeTone {
    match user_type {
        "state" | "district" => BadgeTone::Warning,
        "area" | "halqa" | "membersGroup" => BadgeTone::Success,
        "member" => BadgeTone::Info,
        _ => BadgeTone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn shout(value: &Value) -> String {
        value_text(value).to_uppercase()
    }

    #[test]
    fn test_plain_and_nested() {
        let record = json!({"title": "Zone A", "district": {"_id": "d1", "title": "North"}});
        assert_eq!(Column::new("title", "Title").render(&record), Cell::Text("Zone A".into()));
        assert_eq!(Column::new("district.title", "District").text(&record), "North");
        assert_eq!(Column::new("code", "Code").render(&record), Cell::Empty);
    }

    #[test]
    fn test_badge() {
        let column = Column::badge("userRole", "Role", role_tone);
        assert_eq!(
            column.render(&json!({"userRole": "admin"})),
            Cell::Badge {
                text: "admin".into(),
                tone: BadgeTone::Danger
            }
        );
    }

    #[test]
    fn test_date() {
        let column = Column::date("createdAt", "Created");
        assert_eq!(
            column.render(&json!({"createdAt": "2024-03-05T10:00:00.000Z"})),
            Cell::Date("05 Mar 2024".into())
        );
        assert_eq!(format_date("yesterday"), "yesterday");
        assert!(!column.searchable);
    }

    #[test]
    fn test_avatar() {
        let column = Column::avatar("username", "User");
        assert_eq!(
            column.render(&json!({"username": "zaid"})),
            Cell::Avatar {
                initial: "Z".into(),
                text: "zaid".into()
            }
        );
    }

    #[test]
    fn test_custom_render_overrides_kind() {
        let column = Column::new("title", "Title").with_render(shout);
        assert_eq!(column.text(&json!({"title": "north"})), "NORTH");
    }
}
