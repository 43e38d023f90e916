//! Output formatting for CLI display
//!
//! Turns snapshot rows into aligned table lines and CSV records for the
//! `list` command.

use crate::export::ItemType;
use crate::session::VisibleRow;
use colored::Colorize;
use serde::Serialize;

/// Column titles of the table format
pub const HEADERS: [&str; 5] = ["Name", "Username", "URL", "Type", "Folder"];

/// Widest a table column may grow before values are truncated
pub const MAX_COLUMN_WIDTH: usize = 40;

/// One item as written by the CSV format
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ItemRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub username: &'a str,
    pub url: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub folder: &'a str,
}

impl<'a> From<&'a VisibleRow> for ItemRecord<'a> {
    fn from(row: &'a VisibleRow) -> Self {
        Self {
            id: &row.id,
            name: &row.name,
            username: &row.username,
            url: &row.host,
            kind: row.type_label(),
            folder: &row.folder,
        }
    }
}

fn cells(row: &VisibleRow) -> [&str; 5] {
    [
        row.name.as_str(),
        row.username.as_str(),
        row.host.as_str(),
        row.type_label(),
        row.folder.as_str(),
    ]
}

/// Shorten `value` to `width` characters, marking the cut with `…`
#[must_use]
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Width of each table column for `rows`, headers included
#[must_use]
pub fn column_widths(rows: &[VisibleRow]) -> [usize; 5] {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count()).min(MAX_COLUMN_WIDTH);
        }
    }
    widths
}

fn pad(value: &str, width: usize) -> String {
    format!("{:<width$}", truncate(value, width))
}

/// The bold header line
#[must_use]
pub fn header_line(widths: &[usize; 5]) -> String {
    HEADERS
        .iter()
        .zip(widths)
        .map(|(title, width)| pad(title, *width).bold().to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

/// One table line; placeholders are dimmed and the type is colored
#[must_use]
pub fn row_line(row: &VisibleRow, widths: &[usize; 5]) -> String {
    let [name, username, host, kind, folder] = cells(row);
    let dim = |value: &str, width: usize| {
        let padded = pad(value, width);
        if value == crate::export::PLACEHOLDER {
            padded.dimmed().to_string()
        } else {
            padded
        }
    };

    [
        pad(name, widths[0]),
        dim(username, widths[1]),
        dim(host, widths[2]),
        colorize_type(row.kind, &pad(kind, widths[3])),
        dim(folder, widths[4]),
    ]
    .join("  ")
    .trim_end()
    .to_string()
}

/// Color a type label by item kind
#[must_use]
pub fn colorize_type(kind: Option<ItemType>, label: &str) -> String {
    match kind {
        Some(ItemType::Login) => label.blue().to_string(),
        Some(ItemType::SecureNote) => label.yellow().to_string(),
        Some(ItemType::Card) => label.magenta().to_string(),
        Some(ItemType::Identity) => label.cyan().to_string(),
        Some(ItemType::Other(_)) | None => label.dimmed().to_string(),
    }
}

/// Footer summarizing how many items were listed
#[must_use]
pub fn summary_line(shown: usize, total: usize) -> String {
    format!("{shown} of {total} items")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PLACEHOLDER;

    fn row(name: &str, username: &str, host: &str) -> VisibleRow {
        VisibleRow {
            index: 0,
            id: "a".into(),
            name: name.into(),
            username: username.into(),
            host: host.into(),
            kind: Some(ItemType::Login),
            folder: PLACEHOLDER.into(),
            folder_id: None,
            selected: false,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Gmail", 10), "Gmail");
        assert_eq!(truncate("accounts.google.com", 10), "accounts.…");
        assert_eq!(truncate("héllo wörld", 5), "héll…");
    }

    #[test]
    fn test_column_widths() {
        let rows = vec![
            row("Gmail", "alice@gmail.com", "mail.google.com"),
            row("A", PLACEHOLDER, PLACEHOLDER),
        ];
        let widths = column_widths(&rows);
        assert_eq!(widths, [5, 15, 15, 5, 6]);
    }

    #[test]
    fn test_column_width_is_capped() {
        let long = "x".repeat(100);
        let widths = column_widths(&[row(&long, "u", "h")]);
        assert_eq!(widths[0], MAX_COLUMN_WIDTH);
    }

    #[test]
    fn test_row_line_contains_cells() {
        let gmail = row("Gmail", "alice@gmail.com", "mail.google.com");
        let line = row_line(&gmail, &column_widths(std::slice::from_ref(&gmail)));
        assert!(line.contains("Gmail"));
        assert!(line.contains("alice@gmail.com"));
        assert!(line.contains("mail.google.com"));
        assert!(line.contains("Login"));
    }

    #[test]
    fn test_item_record_from_row() {
        let gmail = row("Gmail", "alice@gmail.com", "mail.google.com");
        let record = ItemRecord::from(&gmail);
        assert_eq!(record.url, "mail.google.com");
        assert_eq!(record.kind, "Login");
        assert_eq!(record.folder, PLACEHOLDER);
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(2, 5), "2 of 5 items");
    }
}
