//! Edit command - run the interactive editor

use crate::config::EditorConfig;
use crate::session::EditorSession;
use crate::ui::{EditorFrontend, FrontendConfig, MessageLevel, RatatuiEditor};
use crate::BwEditError;
use std::path::Path;
use tracing::info;

type Result<T> = std::result::Result<T, BwEditError>;

/// Open `file` (if any) and build the frontend settings
///
/// A file that fails to load does not stop the editor: the session starts
/// empty and the error is shown in the status line.
#[must_use]
pub fn prepare(
    file: Option<&Path>,
    output_dir: Option<&Path>,
    config: &EditorConfig,
) -> (EditorSession, FrontendConfig) {
    let mut session = EditorSession::new().with_confirm_deletes(config.confirm_deletes);
    let mut frontend = config.frontend_config(output_dir);

    if let Some(path) = file {
        match session.load_file(path) {
            Ok(outcome) => {
                if let Some(message) = outcome.message() {
                    frontend = frontend.with_notice(MessageLevel::Success, message);
                }
            }
            Err(e) => frontend = frontend.with_notice(MessageLevel::Error, e.user_message()),
        }
    }

    (session, frontend)
}

/// Execute the edit command
pub fn execute(file: Option<&Path>, output_dir: Option<&Path>, config: &EditorConfig) -> Result<()> {
    let (mut session, frontend) = prepare(file, output_dir, config);
    info!(export_dir = %frontend.export_dir.display(), "starting editor");

    RatatuiEditor::new().run(&mut session, &frontend)?;
    Ok(())
}
