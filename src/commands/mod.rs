//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against an [`EditorSession`].

pub mod batch;
pub mod completions;
pub mod edit;
pub mod list;

pub use completions::execute as completions;
pub use edit::execute as edit;
pub use list::execute as list;

use crate::session::{ActionOutcome, DirectorySink, EditorSession};
use crate::ui::OutputWriter;
use crate::BwEditError;
use std::path::Path;

type Result<T> = std::result::Result<T, BwEditError>;

/// Load `file` into a fresh session, reporting the item count
///
/// # Errors
///
/// Returns `BwEditError::Session` if the file cannot be read or is not an
/// export.
pub fn open_session(
    file: &Path,
    confirm_deletes: bool,
    output: &dyn OutputWriter,
) -> Result<EditorSession> {
    let mut session = EditorSession::new().with_confirm_deletes(confirm_deletes);
    session.load_file(file)?.report(output);
    Ok(session)
}

/// Export the session into `dir` when `outcome` changed something
///
/// # Errors
///
/// Returns `BwEditError::Session` if the export cannot be written.
pub fn export_if_changed(
    session: &EditorSession,
    outcome: &ActionOutcome,
    dir: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    outcome.report(output);
    if outcome.is_success() {
        session.export_today(&DirectorySink::new(dir))?.report(output);
    }
    Ok(())
}
