//! List command - print the items passing a filter

use crate::cli::{FilterArgs, ListFormat};
use crate::output::{self, ItemRecord};
use crate::session::{EditorSession, SessionError, Snapshot};
use crate::BwEditError;
use std::io::{self, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, BwEditError>;

/// Execute the list command
pub fn execute(file: &Path, filter: &FilterArgs, format: ListFormat, quiet: bool) -> Result<()> {
    let mut session = EditorSession::new();
    session.load_file(file)?;

    let stdout = io::stdout();
    write_items(&mut session, filter, format, quiet, &mut stdout.lock())
}

/// Apply `filter` to the session and write the matching items to `out`
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown folder, `NotLoaded` without a
/// document, or the writer's error.
pub fn write_items<W: Write>(
    session: &mut EditorSession,
    filter: &FilterArgs,
    format: ListFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let doc = session.document().ok_or(SessionError::NotLoaded)?;
    let query = filter.to_query(doc).map_err(BwEditError::InvalidInput)?;
    session.set_query(query);

    match format {
        ListFormat::Table => write_table(&session.snapshot(), quiet, out),
        ListFormat::Csv => {
            let snapshot = session.snapshot();
            let mut writer = csv::Writer::from_writer(out);
            for row in &snapshot.rows {
                writer.serialize(ItemRecord::from(row))?;
            }
            writer.flush()?;
            Ok(())
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &session.visible_items())?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(snapshot: &Snapshot, quiet: bool, out: &mut W) -> Result<()> {
    if snapshot.rows.is_empty() {
        if !quiet {
            writeln!(out, "No items match.")?;
        }
        return Ok(());
    }

    if quiet {
        for row in &snapshot.rows {
            writeln!(out, "{}\t{}", row.id, row.name)?;
        }
        return Ok(());
    }

    let widths = output::column_widths(&snapshot.rows);
    writeln!(out, "{}", output::header_line(&widths))?;
    for row in &snapshot.rows {
        writeln!(out, "{}", output::row_line(row, &widths))?;
    }
    writeln!(
        out,
        "\n{}",
        output::summary_line(snapshot.stats.visible, snapshot.stats.total)
    )?;
    Ok(())
}
