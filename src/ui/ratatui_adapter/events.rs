//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to view changes (cursor, focus,
//! overlays) and to [`Intent`]s that the editor applies to the session.

use super::state::{AppState, Focus, Mode, PendingAction, TableHit};
use super::widgets::EditField;
use crate::session::MoveTarget;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A request for the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Checkbox click on a visible row
    Click { index: usize, range: bool },
    SelectAll,
    DeselectAll,
    ToggleAll,
    DeleteSelected,
    DeleteRow(String),
    OpenEdit(String),
    /// Save the open edit dialog
    SubmitEdit,
    OpenMovePicker,
    /// Move the selection; `None` when the picker had nothing chosen
    Move(Option<MoveTarget>),
    Export,
    Open(PathBuf),
    CycleFolder,
    CycleType,
    /// The confirmation dialog was accepted
    Confirmed(PendingAction),
    /// Apply the search text now instead of waiting for the debounce
    ApplySearch,
}

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// No action taken
    Ignored,
    Quit,
    Intent(Intent),
}

/// Handle a key press in the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    match state.mode {
        Mode::Normal => match state.focus {
            Focus::Table => handle_table_keys(state, key),
            Focus::Search => handle_search_keys(state, key, now),
        },
        Mode::Help => {
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        Mode::Confirm => handle_confirm_keys(state, key),
        Mode::Edit => handle_edit_keys(state, key),
        Mode::MovePicker => handle_picker_keys(state, key),
        Mode::Open => handle_open_keys(state, key),
    }
}

fn intent(intent: Intent) -> EventResult {
    EventResult::Intent(intent)
}

fn current_id(state: &AppState) -> Option<String> {
    state.current_row().map(|row| row.id.clone())
}

fn handle_table_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor_up();
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.cursor_down();
            EventResult::Continue
        }
        KeyCode::PageUp => {
            state.page_up();
            EventResult::Continue
        }
        KeyCode::PageDown => {
            state.page_down();
            EventResult::Continue
        }
        KeyCode::Home => {
            state.jump_to_start();
            EventResult::Continue
        }
        KeyCode::End => {
            state.jump_to_end();
            EventResult::Continue
        }
        KeyCode::Char('/') => {
            state.focus = Focus::Search;
            EventResult::Continue
        }
        KeyCode::F(1) | KeyCode::Char('?') => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Selection
        KeyCode::Char(' ') if state.row_count() > 0 => intent(Intent::Click {
            index: state.cursor,
            range: shift,
        }),
        KeyCode::Char('v') if state.row_count() > 0 => intent(Intent::Click {
            index: state.cursor,
            range: true,
        }),
        KeyCode::Char('a') => intent(Intent::SelectAll),
        KeyCode::Char('n') => intent(Intent::DeselectAll),
        KeyCode::Char('t') => intent(Intent::ToggleAll),

        // Delete key only acts on a non-empty selection
        KeyCode::Delete if state.snapshot.stats.selected > 0 => intent(Intent::DeleteSelected),
        KeyCode::Char('d') => intent(Intent::DeleteSelected),
        KeyCode::Char('x') => current_id(state).map_or(EventResult::Ignored, |id| {
            intent(Intent::DeleteRow(id))
        }),
        KeyCode::Char('e') | KeyCode::Enter => current_id(state)
            .map_or(EventResult::Ignored, |id| intent(Intent::OpenEdit(id))),
        KeyCode::Char('m') => intent(Intent::OpenMovePicker),

        KeyCode::Char('f') => intent(Intent::CycleFolder),
        KeyCode::Char('y') => intent(Intent::CycleType),
        KeyCode::Char('s') if ctrl => intent(Intent::Export),
        KeyCode::Char('w') => intent(Intent::Export),
        KeyCode::Char('o') => {
            state.open_prompt("");
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

fn handle_search_keys(state: &mut AppState, key: KeyEvent, now: Instant) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            state.focus = Focus::Table;
            state.debouncer.cancel();
            intent(Intent::ApplySearch)
        }
        _ => {
            let before = state.search.value().to_string();
            if !state.search.handle_key(key) {
                return EventResult::Ignored;
            }
            if state.search.value() != before {
                state.debouncer.schedule(now);
            }
            EventResult::Continue
        }
    }
}

fn handle_confirm_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            let pending = state.pending.take();
            state.close_overlay();
            pending.map_or(EventResult::Continue, |action| {
                intent(Intent::Confirmed(action))
            })
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            state.close_overlay();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_edit_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    let Some(edit) = state.edit_state.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => {
            state.close_overlay();
            EventResult::Continue
        }
        KeyCode::Enter => intent(Intent::SubmitEdit),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            edit.switch_field();
            EventResult::Continue
        }
        KeyCode::Left if edit.field == EditField::Folder => {
            edit.previous_folder();
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char(' ') if edit.field == EditField::Folder => {
            edit.next_folder();
            EventResult::Continue
        }
        _ if edit.field == EditField::Name => {
            if edit.name.handle_key(key) {
                edit.error = None;
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        _ => EventResult::Ignored,
    }
}

fn handle_picker_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    let Some(picker) = state.picker_state.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => {
            state.close_overlay();
            EventResult::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => {
            picker.up();
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            picker.down();
            EventResult::Continue
        }
        KeyCode::Enter => {
            let target = picker.target();
            state.close_overlay();
            intent(Intent::Move(target))
        }
        _ => EventResult::Ignored,
    }
}

fn handle_open_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    let Some(input) = state.open_state.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => {
            state.close_overlay();
            EventResult::Continue
        }
        KeyCode::Enter => {
            let path = input.value().trim().to_string();
            state.close_overlay();
            if path.is_empty() {
                EventResult::Continue
            } else {
                intent(Intent::Open(PathBuf::from(path)))
            }
        }
        _ => {
            if input.handle_key(key) {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
    }
}

/// Handle mouse events
///
/// Left click toggles the row under the pointer, shift-click selects the
/// range from the last clicked row, a click on the header toggles every
/// visible row.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Normal {
        return EventResult::Ignored;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match state.hit_test(mouse.column, mouse.row) {
                Some(TableHit::Header) => {
                    state.focus = Focus::Table;
                    intent(Intent::ToggleAll)
                }
                Some(TableHit::Row(index)) => {
                    state.focus = Focus::Table;
                    state.set_cursor(index);
                    intent(Intent::Click {
                        index,
                        range: mouse.modifiers.contains(KeyModifiers::SHIFT),
                    })
                }
                None => EventResult::Ignored,
            }
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key, Instant::now()),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Folder;
    use crate::selection::HeaderState;
    use crate::session::{Snapshot, Stats, VisibleRow};
    use crate::ui::ratatui_adapter::widgets::{EditDialogState, FolderPickerState};
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_state(selected: usize) -> AppState {
        let mut state = AppState::new(Duration::from_millis(300), Duration::from_secs(3));
        state.snapshot = Snapshot {
            rows: (0..5)
                .map(|index| VisibleRow {
                    index,
                    id: format!("id-{index}"),
                    name: format!("Item {index}"),
                    username: "-".into(),
                    host: "-".into(),
                    kind: None,
                    folder: "-".into(),
                    folder_id: None,
                    selected: index < selected,
                })
                .collect(),
            header: HeaderState::Unchecked,
            stats: Stats {
                total: 5,
                visible: 5,
                selected,
                folders: 0,
            },
        };
        state.visible_height = 3;
        state
    }

    #[test]
    fn test_navigation_handling() {
        let mut state = make_state(0);
        let now = Instant::now();

        assert_eq!(handle_key(&mut state, key(KeyCode::Down), now), EventResult::Continue);
        assert_eq!(state.cursor, 1);
        assert_eq!(handle_key(&mut state, key(KeyCode::Up), now), EventResult::Continue);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_space_clicks_and_shift_space_ranges() {
        let mut state = make_state(0);
        let now = Instant::now();
        state.cursor = 2;

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char(' ')), now),
            EventResult::Intent(Intent::Click {
                index: 2,
                range: false
            })
        );
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char(' '), KeyModifiers::SHIFT),
                now
            ),
            EventResult::Intent(Intent::Click {
                index: 2,
                range: true
            })
        );
    }

    #[test]
    fn test_delete_key_needs_selection() {
        let now = Instant::now();

        let mut empty = make_state(0);
        assert_eq!(
            handle_key(&mut empty, key(KeyCode::Delete), now),
            EventResult::Ignored
        );

        let mut selected = make_state(2);
        assert_eq!(
            handle_key(&mut selected, key(KeyCode::Delete), now),
            EventResult::Intent(Intent::DeleteSelected)
        );
    }

    #[test]
    fn test_delete_key_ignored_while_searching() {
        let mut state = make_state(2);
        let now = Instant::now();
        handle_key(&mut state, key(KeyCode::Char('/')), now);
        assert_eq!(state.focus, Focus::Search);

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Delete), now),
            EventResult::Continue
        );
        assert_eq!(state.snapshot.stats.selected, 2);
    }

    #[test]
    fn test_search_typing_schedules_debounce() {
        let mut state = make_state(0);
        let now = Instant::now();
        state.focus = Focus::Search;

        handle_key(&mut state, key(KeyCode::Char('g')), now);
        assert_eq!(state.search.value(), "g");
        assert!(state.debouncer.is_pending());

        // Letters that are table shortcuts go to the search field
        handle_key(&mut state, key(KeyCode::Char('q')), now);
        assert_eq!(state.search.value(), "gq");

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter), now),
            EventResult::Intent(Intent::ApplySearch)
        );
        assert_eq!(state.focus, Focus::Table);
        assert!(!state.debouncer.is_pending());
    }

    #[test]
    fn test_confirm_dialog_keys() {
        let mut state = make_state(2);
        let now = Instant::now();

        state.open_confirm("Delete?".into(), PendingAction::DeleteRow("id-1".into()), vec![]);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('y')), now),
            EventResult::Intent(Intent::Confirmed(PendingAction::DeleteRow("id-1".into())))
        );
        assert_eq!(state.mode, Mode::Normal);

        state.open_confirm("Delete?".into(), PendingAction::DeleteSelected, vec![]);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc), now), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_edit_dialog_keys() {
        let mut state = make_state(0);
        let now = Instant::now();
        state.edit_state = Some(EditDialogState::new(
            "id-0",
            "Item 0",
            None,
            &[Folder::new("f1", "Work")],
        ));
        state.mode = Mode::Edit;

        handle_key(&mut state, key(KeyCode::Backspace), now);
        handle_key(&mut state, key(KeyCode::Tab), now);
        handle_key(&mut state, key(KeyCode::Right), now);

        let edit = state.edit_state.as_ref().unwrap();
        assert_eq!(edit.name.value(), "Item ");
        assert_eq!(edit.folder_id(), Some("f1"));

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter), now),
            EventResult::Intent(Intent::SubmitEdit)
        );

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc), now), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.edit_state.is_none());
    }

    #[test]
    fn test_picker_keys() {
        let mut state = make_state(2);
        let now = Instant::now();
        state.picker_state = Some(FolderPickerState::new(&[Folder::new("f1", "Work")], 2));
        state.mode = Mode::MovePicker;

        handle_key(&mut state, key(KeyCode::Down), now);
        handle_key(&mut state, key(KeyCode::Down), now);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter), now),
            EventResult::Intent(Intent::Move(Some(MoveTarget::Folder("f1".into()))))
        );
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_open_prompt() {
        let mut state = make_state(0);
        let now = Instant::now();

        handle_key(&mut state, key(KeyCode::Char('o')), now);
        assert_eq!(state.mode, Mode::Open);
        for c in "a.json".chars() {
            handle_key(&mut state, key(KeyCode::Char(c)), now);
        }
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter), now),
            EventResult::Intent(Intent::Open(PathBuf::from("a.json")))
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = make_state(0);
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            handle_key(&mut state, release, Instant::now()),
            EventResult::Ignored
        );
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_mouse_click_and_shift_click() {
        let mut state = make_state(0);
        state.table_area = Rect::new(0, 4, 80, 10);

        let click = |row, modifiers| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row,
            modifiers,
        };

        assert_eq!(
            handle_mouse(&mut state, click(6, KeyModifiers::NONE)),
            EventResult::Intent(Intent::Click {
                index: 0,
                range: false
            })
        );
        assert_eq!(
            handle_mouse(&mut state, click(8, KeyModifiers::SHIFT)),
            EventResult::Intent(Intent::Click {
                index: 2,
                range: true
            })
        );
        assert_eq!(state.cursor, 2);
        assert_eq!(
            handle_mouse(&mut state, click(5, KeyModifiers::NONE)),
            EventResult::Intent(Intent::ToggleAll)
        );
    }

    #[test]
    fn test_quit() {
        let mut state = make_state(0);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('q')), Instant::now()),
            EventResult::Quit
        );
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Instant::now()
            ),
            EventResult::Quit
        );
    }
}
