//! Batch commands - delete, move and rename without the editor
//!
//! Each command applies one session operation to a loaded export and, when
//! the operation changed something, writes the dated export into the
//! output directory. Bulk operations act on every item passing the filter.

use super::export_if_changed;
use crate::cli::{FilterArgs, resolve_folder_arg};
use crate::export::NO_FOLDER_LABEL;
use crate::session::{ActionOutcome, Confirmer, EditorSession, MoveTarget, SessionError};
use crate::ui::{OutputWriter, UserInput};
use crate::BwEditError;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, BwEditError>;

/// Collaborators shared by the batch commands
pub struct BatchContext<'a> {
    /// Directory the modified export is written to
    pub export_dir: &'a Path,
    pub input: &'a dyn UserInput,
    pub output: &'a dyn OutputWriter,
}

/// Replace the selection with every item passing `filter`
fn select_filtered(session: &mut EditorSession, filter: &FilterArgs) -> Result<usize> {
    let doc = session.document().ok_or(SessionError::NotLoaded)?;
    let query = filter.to_query(doc).map_err(BwEditError::InvalidInput)?;
    session.set_query(query);
    session.deselect_all();
    session.select_all_visible()?;

    let count = session.selection().len();
    debug!(count, "filtered items selected");
    Ok(count)
}

/// Delete every item passing `filter`
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown folder, or a session error if the
/// confirmation or the export fails.
pub fn delete(
    session: &mut EditorSession,
    filter: &FilterArgs,
    confirmer: &dyn Confirmer,
    ctx: &BatchContext<'_>,
) -> Result<ActionOutcome> {
    select_filtered(session, filter)?;
    let outcome = session.delete_selected(confirmer)?;
    export_if_changed(session, &outcome, ctx.export_dir, ctx.output)?;
    Ok(outcome)
}

/// Ask for a move destination; `None` when the prompt was aborted
fn choose_folder(
    session: &EditorSession,
    count: usize,
    input: &dyn UserInput,
) -> Result<Option<MoveTarget>> {
    let folders = session.folders();
    let choices: Vec<String> = std::iter::once(NO_FOLDER_LABEL.to_string())
        .chain(folders.iter().map(|folder| folder.name.clone()))
        .collect();

    let choice = input.prompt_select(&format!("Move {count} items to"), &choices, Some(0))?;
    Ok(choice.map(|index| match index.checked_sub(1).and_then(|i| folders.get(i)) {
        Some(folder) => MoveTarget::Folder(folder.id.clone()),
        None => MoveTarget::NoFolder,
    }))
}

/// Move every item passing `filter` into `to`
///
/// Without `to` the destination is chosen through `ctx.input`.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown folder, or an input or session
/// error.
pub fn move_items(
    session: &mut EditorSession,
    filter: &FilterArgs,
    to: Option<&str>,
    ctx: &BatchContext<'_>,
) -> Result<ActionOutcome> {
    let count = select_filtered(session, filter)?;
    if count == 0 {
        let outcome = ActionOutcome::no_op("No items selected");
        outcome.report(ctx.output);
        return Ok(outcome);
    }

    let target = match to {
        Some(arg) => {
            let doc = session.document().ok_or(SessionError::NotLoaded)?;
            Some(resolve_folder_arg(doc, arg).map_err(BwEditError::InvalidInput)?)
        }
        None => choose_folder(session, count, ctx.input)?,
    };

    let outcome = session.move_selected(target.as_ref())?;
    export_if_changed(session, &outcome, ctx.export_dir, ctx.output)?;
    Ok(outcome)
}

/// Rename item `id`, optionally moving it to `folder`
///
/// Without `name` the new name is asked through `ctx.input`, defaulting to
/// the current one. Without `folder` the item stays where it is.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown folder, `Session(ItemNotFound)`,
/// `Session(Validation)` for a blank name, or an input error.
pub fn rename(
    session: &mut EditorSession,
    id: &str,
    name: Option<&str>,
    folder: Option<&str>,
    ctx: &BatchContext<'_>,
) -> Result<ActionOutcome> {
    let doc = session.document().ok_or(SessionError::NotLoaded)?;
    let item = doc
        .find_item(id)
        .ok_or_else(|| SessionError::ItemNotFound(id.to_string()))?;

    let folder_id = match folder {
        Some(arg) => resolve_folder_arg(doc, arg)
            .map_err(BwEditError::InvalidInput)?
            .folder_id()
            .map(str::to_owned),
        None => item.folder().map(str::to_owned),
    };

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let current = item.name().to_string();
            match ctx.input.prompt_text("New name", Some(&current), false)? {
                Some(name) => name,
                None => return Ok(ActionOutcome::Cancelled),
            }
        }
    };

    let outcome = session.edit_item(id, &name, folder_id.as_deref())?;
    export_if_changed(session, &outcome, ctx.export_dir, ctx.output)?;
    Ok(outcome)
}
