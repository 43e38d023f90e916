//! The editor session
//!
//! Document, filter query and selection live together here so every
//! operation can keep them consistent: the selection is reconciled after each
//! removal, a failed load discards the document and the selection with it,
//! and range gestures are always interpreted against the current filtered
//! list.

use super::confirm::Confirmer;
use super::models::{ActionOutcome, MoveTarget, Snapshot, Stats, UNNAMED, VisibleRow};
use super::sink::ExportSink;
use super::{Result, SessionError};
use crate::export::{self, Document, Folder, Item, LoadError, NO_FOLDER_LABEL};
use crate::filter::{self, FilterQuery, FolderSelector, TypeSelector};
use crate::selection::{HeaderState, Selection};
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct EditorSession {
    document: Option<Document>,
    source: Option<PathBuf>,
    selection: Selection,
    query: FilterQuery,
    confirm_deletes: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// An empty session that asks before deleting
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: None,
            source: None,
            selection: Selection::new(),
            query: FilterQuery::new(),
            confirm_deletes: true,
        }
    }

    /// Builder: whether deletions go through the confirmer
    #[must_use]
    pub const fn with_confirm_deletes(mut self, confirm: bool) -> Self {
        self.confirm_deletes = confirm;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Path the document was loaded from, if it came from a file
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// Folder catalog of the loaded document
    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        self.document
            .as_ref()
            .map(Document::folders)
            .unwrap_or_default()
    }

    /// Display name for a folder id; `"-"` when unknown
    #[must_use]
    pub fn folder_name(&self, id: Option<&str>) -> &str {
        self.document
            .as_ref()
            .map_or(export::PLACEHOLDER, |doc| doc.folder_name(id))
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Replace the document with one parsed from `bytes`
    ///
    /// On success the selection is cleared and the folder filter reset. On
    /// failure the previous document is discarded as well.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the bytes are not a usable export.
    pub fn load_bytes(&mut self, bytes: &[u8], source: Option<&Path>) -> Result<ActionOutcome> {
        match export::load(bytes) {
            Ok(document) => Ok(self.install(document, source)),
            Err(e) => Err(self.discard(e)),
        }
    }

    /// Read and load an export file
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the file cannot be read or parsed.
    pub fn load_file(&mut self, path: &Path) -> Result<ActionOutcome> {
        match fs::read(path) {
            Ok(bytes) => self.load_bytes(&bytes, Some(path)),
            Err(e) => Err(self.discard(LoadError::Io(e))),
        }
    }

    fn install(&mut self, document: Document, source: Option<&Path>) -> ActionOutcome {
        let count = document.items.len();
        info!(
            items = count,
            folders = document.folders().len(),
            source = ?source,
            "export loaded"
        );

        self.document = Some(document);
        self.source = source.map(Path::to_path_buf);
        self.selection = Selection::new();
        self.query.folder = FolderSelector::Any;

        ActionOutcome::success(count, format!("Loaded {count} items"))
    }

    fn discard(&mut self, error: LoadError) -> SessionError {
        warn!(error = %error, "export failed to load");
        self.document = None;
        self.source = None;
        self.selection = Selection::new();
        error.into()
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    pub fn set_query(&mut self, query: FilterQuery) {
        self.query = query;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
    }

    pub fn set_folder_filter(&mut self, folder: FolderSelector) {
        self.query.folder = folder;
    }

    pub fn set_type_filter(&mut self, kind: TypeSelector) {
        self.query.kind = kind;
    }

    /// Items passing the active query, in document order
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        self.document
            .as_ref()
            .map(|doc| filter::filter(doc, &self.query))
            .unwrap_or_default()
    }

    /// Rows, header state and statistics for the current view
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let Some(doc) = self.document.as_ref() else {
            return Snapshot::default();
        };

        let visible = filter::filter(doc, &self.query);
        let rows = visible
            .iter()
            .enumerate()
            .map(|(index, item)| VisibleRow {
                index,
                id: item.id().to_owned(),
                name: if item.name().is_empty() { UNNAMED } else { item.name() }.to_string(),
                username: VisibleRow::or_placeholder(filter::username(item)),
                host: VisibleRow::or_placeholder(filter::primary_host(item).as_deref()),
                kind: item.kind(),
                folder: doc.folder_name(item.folder()).to_string(),
                folder_id: item.folder().map(str::to_owned),
                selected: self.selection.is_selected(item.id()),
            })
            .collect();

        Snapshot {
            rows,
            header: self.selection.header(&visible),
            stats: Stats {
                total: doc.items.len(),
                visible: visible.len(),
                selected: self.selection.len(),
                folders: doc.folders().len(),
            },
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Checkbox click on the visible row at `index`
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded` without a document and `InvalidIndex` when the
    /// row does not exist.
    pub fn click(&mut self, index: usize, range: bool) -> Result<()> {
        let doc = self.document.as_ref().ok_or(SessionError::NotLoaded)?;
        let visible = filter::filter(doc, &self.query);
        let id = visible
            .get(index)
            .map(|item| item.id().to_owned())
            .ok_or(SessionError::InvalidIndex(index))?;

        self.selection.handle_click(&visible, &id, index, range);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `NotLoaded` without a document.
    pub fn select_all_visible(&mut self) -> Result<()> {
        let doc = self.document.as_ref().ok_or(SessionError::NotLoaded)?;
        let visible = filter::filter(doc, &self.query);
        self.selection.select_all_visible(&visible);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `NotLoaded` without a document.
    pub fn toggle_all_visible(&mut self) -> Result<()> {
        let doc = self.document.as_ref().ok_or(SessionError::NotLoaded)?;
        let visible = filter::filter(doc, &self.query);
        self.selection.toggle_all_visible(&visible);
        Ok(())
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    #[must_use]
    pub fn header_state(&self) -> HeaderState {
        self.selection.header(&self.visible_items())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Delete one item after confirmation
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded`, `ItemNotFound`, or `Confirm` if asking failed.
    pub fn delete_one(&mut self, id: &str, confirmer: &dyn Confirmer) -> Result<ActionOutcome> {
        let doc = self.document.as_mut().ok_or(SessionError::NotLoaded)?;
        if doc.find_item(id).is_none() {
            return Err(SessionError::ItemNotFound(id.to_string()));
        }

        if self.confirm_deletes && !confirmer.confirm("Delete this item?")? {
            debug!("single delete declined");
            return Ok(ActionOutcome::Cancelled);
        }

        let removed = doc.remove_items(|item| item.id() == id);
        self.selection.reconcile(&doc.item_ids());
        info!(removed, "item deleted");

        Ok(ActionOutcome::success(removed, "Item deleted"))
    }

    /// Delete every selected item after confirmation
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded`, or `Confirm` if asking failed.
    pub fn delete_selected(&mut self, confirmer: &dyn Confirmer) -> Result<ActionOutcome> {
        let doc = self.document.as_mut().ok_or(SessionError::NotLoaded)?;
        if self.selection.is_empty() {
            debug!("bulk delete with empty selection");
            return Ok(ActionOutcome::no_op("No items selected"));
        }

        let count = self.selection.len();
        if self.confirm_deletes && !confirmer.confirm(&format!("Delete {count} selected items?"))? {
            debug!(count, "bulk delete declined");
            return Ok(ActionOutcome::Cancelled);
        }

        let selection = &self.selection;
        let removed = doc.remove_items(|item| selection.is_selected(item.id()));
        self.selection.deselect_all();
        info!(removed, "selected items deleted");

        Ok(ActionOutcome::success(removed, format!("Deleted {removed} items")))
    }

    /// Move every selected item into `target`
    ///
    /// The selection is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded` without a document.
    pub fn move_selected(&mut self, target: Option<&MoveTarget>) -> Result<ActionOutcome> {
        let doc = self.document.as_mut().ok_or(SessionError::NotLoaded)?;
        let Some(target) = target else {
            return Ok(ActionOutcome::no_op("Select a folder first"));
        };
        if self.selection.is_empty() {
            return Ok(ActionOutcome::no_op("No items selected"));
        }

        let folder_id = target.folder_id();
        let moved = doc
            .items
            .iter_mut()
            .filter(|item| self.selection.is_selected(item.id()))
            .map(|item| item.set_folder(folder_id))
            .filter(|&moved| moved)
            .count();

        let destination = match target {
            MoveTarget::NoFolder => NO_FOLDER_LABEL,
            MoveTarget::Folder(id) => doc.folder_name(Some(id)),
        };
        info!(moved, folder = ?folder_id, "selected items moved");

        Ok(ActionOutcome::success(
            moved,
            format!("Moved {moved} items to {destination}"),
        ))
    }

    /// Rename an item and set its folder
    ///
    /// The name is trimmed; an empty `folder_id` means no folder.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank name (nothing is changed),
    /// `NotLoaded` or `ItemNotFound`.
    pub fn edit_item(
        &mut self,
        id: &str,
        name: &str,
        folder_id: Option<&str>,
    ) -> Result<ActionOutcome> {
        let doc = self.document.as_mut().ok_or(SessionError::NotLoaded)?;
        let item = doc
            .find_item_mut(id)
            .ok_or_else(|| SessionError::ItemNotFound(id.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            debug!("edit rejected: empty name");
            return Err(SessionError::Validation("Name cannot be empty".to_string()));
        }
        if !item.is_editable() {
            debug!("edit rejected: record is not an object");
            return Err(SessionError::Validation("This item cannot be edited".to_string()));
        }

        item.set_name(name);
        item.set_folder(folder_id.filter(|f| !f.is_empty()));
        info!("item updated");

        Ok(ActionOutcome::success(1, "Item updated"))
    }

    /// Serialize the document and hand it to `sink` under the dated name
    ///
    /// Without a document this does nothing.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` or `Io` if the export could not be written.
    pub fn export_document(
        &self,
        sink: &dyn ExportSink,
        date: NaiveDate,
    ) -> Result<ActionOutcome> {
        let Some(doc) = self.document.as_ref() else {
            debug!("export requested without a document");
            return Ok(ActionOutcome::no_op("No export loaded"));
        };

        let bytes = export::serialize(doc)?;
        let path = sink.save(&export::export_file_name(date), &bytes)?;
        info!(items = doc.items.len(), path = %path.display(), "export saved");

        Ok(ActionOutcome::success(
            doc.items.len(),
            format!("Export saved to {}", path.display()),
        ))
    }

    /// [`export_document`](Self::export_document) with today's UTC date
    ///
    /// # Errors
    ///
    /// See [`export_document`](Self::export_document).
    pub fn export_today(&self, sink: &dyn ExportSink) -> Result<ActionOutcome> {
        self.export_document(sink, Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ItemType;
    use crate::session::confirm::Preapproved;
    use crate::ui::mock::MockInput;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::io;

    const EXPORT: &str = r#"{
        "encrypted": false,
        "folders": [{"id": "f1", "name": "Work"}, {"id": "f2", "name": "Personal"}],
        "items": [
            {"id": "a", "name": "Gmail", "type": 1, "folderId": null,
             "login": {"username": "me@gmail.com", "uris": [{"uri": "https://mail.google.com"}]}},
            {"id": "b", "name": "GitHub", "type": 1, "folderId": "f1",
             "login": {"username": "octo", "uris": [{"uri": "https://github.com/login"}]}},
            {"id": "c", "name": "Wifi", "type": 2, "folderId": "f2"},
            {"id": "d", "name": "", "type": 3, "folderId": "gone"}
        ]
    }"#;

    fn session() -> EditorSession {
        let mut session = EditorSession::new();
        session.load_bytes(EXPORT.as_bytes(), None).unwrap();
        session
    }

    fn ids(session: &EditorSession) -> Vec<String> {
        session
            .document()
            .unwrap()
            .items
            .iter()
            .map(|item| item.id().to_owned())
            .collect()
    }

    #[derive(Default)]
    struct MemorySink {
        saved: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl ExportSink for MemorySink {
        fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
            self.saved
                .borrow_mut()
                .push((file_name.to_string(), bytes.to_vec()));
            Ok(PathBuf::from("/exports").join(file_name))
        }
    }

    #[test]
    fn test_load_reports_count_and_clears_selection() {
        let mut session = session();
        session.click(0, false).unwrap();
        session.set_folder_filter(FolderSelector::NoFolder);

        let outcome = session.load_bytes(EXPORT.as_bytes(), None).unwrap();

        assert_eq!(outcome.message(), Some("Loaded 4 items"));
        assert!(session.selection().is_empty());
        assert_eq!(session.query().folder, FolderSelector::Any);
    }

    #[test]
    fn test_failed_load_discards_document() {
        let mut session = session();
        session.click(0, false).unwrap();

        let err = session.load_bytes(br#"{"folders": []}"#, None).unwrap_err();

        assert!(matches!(err, SessionError::Load(_)));
        assert!(!session.is_loaded());
        assert!(session.selection().is_empty());
        assert_eq!(session.snapshot(), Snapshot::default());
    }

    #[test]
    fn test_load_missing_file() {
        let mut session = session();
        let err = session
            .load_file(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, SessionError::Load(LoadError::Io(_))));
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_operations_require_document() {
        let mut session = EditorSession::new();
        assert!(matches!(session.click(0, false), Err(SessionError::NotLoaded)));
        assert!(matches!(
            session.delete_selected(&Preapproved(true)),
            Err(SessionError::NotLoaded)
        ));
        assert!(matches!(
            session.edit_item("a", "x", None),
            Err(SessionError::NotLoaded)
        ));

        let sink = MemorySink::default();
        let outcome = session.export_today(&sink).unwrap();
        assert!(matches!(outcome, ActionOutcome::NoOp(_)));
        assert!(sink.saved.borrow().is_empty());
    }

    #[test]
    fn test_snapshot_rows_and_placeholders() {
        let session = session();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.rows.len(), 4);
        assert_eq!(snapshot.rows[0].host, "mail.google.com");
        assert_eq!(snapshot.rows[1].folder, "Work");
        assert_eq!(snapshot.rows[2].username, "-");
        assert_eq!(snapshot.rows[2].host, "-");
        assert_eq!(snapshot.rows[3].name, UNNAMED);
        assert_eq!(snapshot.rows[3].folder, "-");
        assert_eq!(snapshot.rows[3].type_label(), "Card");
        assert_eq!(
            snapshot.stats.to_string(),
            "Items: 4 | Selected: 0 | Folders: 2"
        );
    }

    #[test]
    fn test_click_against_filtered_rows() {
        let mut session = session();
        session.set_search("g");

        session.click(0, false).unwrap();
        session.click(1, true).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.header, HeaderState::Checked);
        assert!(session.selection().is_selected("a"));
        assert!(session.selection().is_selected("b"));
        assert!(matches!(
            session.click(5, false),
            Err(SessionError::InvalidIndex(5))
        ));
    }

    #[test]
    fn test_header_is_indeterminate_with_partial_selection() {
        let mut session = session();
        session.click(2, false).unwrap();
        assert_eq!(session.header_state(), HeaderState::Indeterminate);

        session.set_type_filter(TypeSelector::Only(ItemType::Login));
        assert_eq!(session.header_state(), HeaderState::Unchecked);
    }

    #[test]
    fn test_delete_one_confirmed_reconciles_selection() {
        let mut session = session();
        session.click(1, false).unwrap();

        let input = MockInput::new().with_confirms([Some(true)]);
        let outcome = session.delete_one("b", &input).unwrap();

        assert_eq!(outcome.message(), Some("Item deleted"));
        assert_eq!(ids(&session), ["a", "c", "d"]);
        assert!(session.selection().is_empty());
        assert_eq!(input.asked(), vec!["Delete this item?".to_string()]);
    }

    #[test]
    fn test_delete_one_declined_is_noop() {
        let mut session = session();
        let outcome = session.delete_one("a", &Preapproved(false)).unwrap();
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert_eq!(ids(&session).len(), 4);
    }

    #[test]
    fn test_delete_one_unknown_item() {
        let mut session = session();
        let err = session.delete_one("zzz", &Preapproved(true)).unwrap_err();
        assert!(matches!(err, SessionError::ItemNotFound(_)));
    }

    #[test]
    fn test_delete_selected() {
        let mut session = session();
        session.click(0, false).unwrap();
        session.click(1, false).unwrap();

        let input = MockInput::new().with_confirms([Some(true)]);
        let outcome = session.delete_selected(&input).unwrap();

        assert_eq!(outcome.message(), Some("Deleted 2 items"));
        assert_eq!(ids(&session), ["c", "d"]);
        assert!(session.selection().is_empty());
        assert_eq!(input.asked(), vec!["Delete 2 selected items?".to_string()]);
    }

    #[test]
    fn test_delete_selected_includes_hidden_items() {
        let mut session = session();
        session.click(0, false).unwrap();
        session.set_search("wifi");
        session.click(0, false).unwrap();

        session.delete_selected(&Preapproved(true)).unwrap();
        assert_eq!(ids(&session), ["b", "d"]);
    }

    #[test]
    fn test_delete_selected_empty_or_declined() {
        let mut session = session();
        let outcome = session.delete_selected(&Preapproved(true)).unwrap();
        assert_eq!(outcome, ActionOutcome::NoOp("No items selected".into()));

        session.click(0, false).unwrap();
        let outcome = session.delete_selected(&Preapproved(false)).unwrap();
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert_eq!(session.selection().len(), 1);
    }

    #[test]
    fn test_deletes_skip_confirmer_when_disabled() {
        let mut session = session().with_confirm_deletes(false);
        session.click(0, false).unwrap();

        let outcome = session.delete_selected(&Preapproved(false)).unwrap();
        assert!(outcome.is_success());
        assert_eq!(ids(&session).len(), 3);
    }

    #[test]
    fn test_move_selected() {
        let mut session = session();
        assert_eq!(
            session.move_selected(Some(&MoveTarget::NoFolder)).unwrap(),
            ActionOutcome::NoOp("No items selected".into())
        );

        session.click(0, false).unwrap();
        session.click(2, false).unwrap();
        assert_eq!(
            session.move_selected(None).unwrap(),
            ActionOutcome::NoOp("Select a folder first".into())
        );

        let outcome = session
            .move_selected(Some(&MoveTarget::Folder("f1".into())))
            .unwrap();
        assert_eq!(outcome.message(), Some("Moved 2 items to Work"));

        let doc = session.document().unwrap();
        assert_eq!(doc.find_item("a").unwrap().folder(), Some("f1"));
        assert_eq!(doc.find_item("c").unwrap().folder(), Some("f1"));
        assert_eq!(session.selection().len(), 2);

        let outcome = session.move_selected(Some(&MoveTarget::NoFolder)).unwrap();
        assert_eq!(outcome.message(), Some("Moved 2 items to No Folder"));
        assert_eq!(session.document().unwrap().find_item("a").unwrap().raw()["folderId"], Value::Null);
    }

    #[test]
    fn test_edit_item() {
        let mut session = session();
        let outcome = session.edit_item("a", "  Google Mail ", Some("f2")).unwrap();
        assert_eq!(outcome.message(), Some("Item updated"));

        let item = session.document().unwrap().find_item("a").unwrap();
        assert_eq!(item.name(), "Google Mail");
        assert_eq!(item.folder(), Some("f2"));

        session.edit_item("a", "Google Mail", Some("")).unwrap();
        let item = session.document().unwrap().find_item("a").unwrap();
        assert_eq!(item.folder(), None);
        assert_eq!(item.raw()["folderId"], Value::Null);
    }

    #[test]
    fn test_edit_item_rejects_blank_name() {
        let mut session = session();
        let before = session.document().unwrap().find_item("a").cloned();

        let err = session.edit_item("a", "   ", Some("f1")).unwrap_err();

        assert!(matches!(err, SessionError::Validation(_)));
        assert_eq!(err.to_string(), "Name cannot be empty");
        assert_eq!(session.document().unwrap().find_item("a").cloned(), before);
    }

    #[test]
    fn test_export_document() {
        let mut session = session();
        session.delete_one("d", &Preapproved(true)).unwrap();

        let sink = MemorySink::default();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let outcome = session.export_document(&sink, date).unwrap();

        assert_eq!(
            outcome.message(),
            Some("Export saved to /exports/bitwarden_export_modified_2024-05-01.json")
        );

        let saved = sink.saved.borrow();
        assert_eq!(saved[0].0, "bitwarden_export_modified_2024-05-01.json");
        let reloaded = export::load(&saved[0].1).unwrap();
        assert_eq!(reloaded.items.len(), 3);
        assert_eq!(reloaded.folders().len(), 2);
    }
}
