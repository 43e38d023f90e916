//! Ratatui-based export editor
//!
//! Implements `EditorFrontend`: draws the session snapshot, turns events
//! into session operations and shows their outcomes on the status line.

use super::events::{EventResult, Intent, poll_and_handle};
use super::state::{AppState, Focus, Mode, PendingAction};
use super::theme::Theme;
use super::widgets::{
    ConfirmDialog, EditDialog, FolderPicker, HEADER_HEIGHT, HelpBar, HelpOverlay, ItemTable,
    SearchBar, StatusBar, TextInputModal,
};
use crate::session::{
    self, ActionOutcome, DeferredConfirm, DirectorySink, EditorSession, Preapproved, SessionError,
};
use crate::ui::error::Result;
use crate::ui::output::OutputWriter;
use crate::ui::traits::{EditorFrontend, FrontendConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Ratatui-based editor implementation
#[derive(Debug, Default)]
pub struct RatatuiEditor {
    theme: Theme,
}

impl RatatuiEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let theme = &self.theme;
        let [search_area, filter_area, table_area, status_area, help_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        state.table_area = table_area;
        state.visible_height =
            usize::from(table_area.height.saturating_sub(2 + HEADER_HEIGHT)).max(1);

        let search_bar = SearchBar::new(&state.search, theme)
            .focused(state.focus == Focus::Search && state.mode == Mode::Normal)
            .pending(state.debouncer.is_pending());
        frame.render_widget(search_bar, search_area);

        Self::render_filter_line(frame, state, theme, filter_area);

        let empty_message = if state.loaded {
            "No items match the current filter"
        } else {
            "No export loaded. Press o to open a file."
        };
        let table = ItemTable::new(&state.snapshot, theme)
            .cursor(state.cursor, state.scroll_offset)
            .focused(state.focus == Focus::Table)
            .empty_message(empty_message);
        frame.render_widget(table, table_area);

        let message = state.messages.latest_message();
        let status_bar = StatusBar::new(message.as_ref(), state.snapshot.stats, theme);
        frame.render_widget(status_bar, status_area);

        let hints = HelpBar::hints_for(state.mode, state.focus);
        frame.render_widget(HelpBar::new(&hints, theme), help_area);

        Self::render_overlays(frame, state, theme);
    }

    fn render_filter_line(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" Folder: ", theme.dimmed_style()),
            Span::styled(state.folder_label.as_str(), theme.folder_style()),
            Span::styled("  Type: ", theme.dimmed_style()),
            Span::styled(state.type_label.as_str(), theme.info_style()),
            Span::styled("  (f/y to change)", theme.dimmed_style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_overlays(frame: &mut Frame, state: &AppState, theme: &Theme) {
        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
            Mode::Confirm => {
                if let Some(confirm_state) = &state.confirm_state {
                    frame.render_widget(ConfirmDialog::new(confirm_state, theme), frame.area());
                }
            }
            Mode::Edit => {
                if let Some(edit_state) = &state.edit_state {
                    frame.render_widget(EditDialog::new(edit_state, theme), frame.area());
                }
            }
            Mode::MovePicker => {
                if let Some(picker_state) = &state.picker_state {
                    frame.render_widget(FolderPicker::new(picker_state, theme), frame.area());
                }
            }
            Mode::Open => {
                if let Some(input) = &state.open_state {
                    frame.render_widget(
                        TextInputModal::new("Open Bitwarden export", input, theme),
                        frame.area(),
                    );
                }
            }
            Mode::Normal => {}
        }
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut EditorSession,
        config: &FrontendConfig,
    ) -> Result<()> {
        let sink = DirectorySink::new(&config.export_dir);
        let mut state = AppState::new(config.search_debounce, config.message_ttl);
        state.search = super::widgets::TextInputState::with_text(&session.query().search_text);
        state.refresh(session);
        if let Some((level, message)) = &config.notice {
            state.messages.emit(*level, message);
        }

        loop {
            terminal.draw(|frame| self.render(frame, &mut state))?;

            match poll_and_handle(&mut state, POLL_INTERVAL)? {
                EventResult::Quit => state.should_exit = true,
                EventResult::Intent(intent) => {
                    apply_intent(session, &mut state, intent, &sink);
                }
                EventResult::Continue | EventResult::Ignored => {}
            }

            if state.debouncer.fire_if_due(Instant::now()) {
                session.set_search(state.search.value());
                state.refresh(session);
            }

            if state.should_exit {
                return Ok(());
            }
        }
    }
}

impl EditorFrontend for RatatuiEditor {
    fn run(&self, session: &mut EditorSession, config: &FrontendConfig) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, session, config);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

/// Apply an intent to the session and report what happened
///
/// Errors never leave this function; they end up on the status line.
pub(crate) fn apply_intent(
    session: &mut EditorSession,
    state: &mut AppState,
    intent: Intent,
    sink: &DirectorySink,
) {
    debug!(?intent, "applying intent");

    if let Err(e) = dispatch(session, state, intent, sink) {
        state.messages.error(&e.user_message());
    }
    state.refresh(session);
}

fn dispatch(
    session: &mut EditorSession,
    state: &mut AppState,
    intent: Intent,
    sink: &DirectorySink,
) -> session::Result<()> {
    match intent {
        Intent::Click { index, range } => session.click(index, range)?,
        Intent::SelectAll => session.select_all_visible()?,
        Intent::DeselectAll => session.deselect_all(),
        Intent::ToggleAll => session.toggle_all_visible()?,

        Intent::DeleteSelected => {
            let deferred = DeferredConfirm::new();
            let outcome = session.delete_selected(&deferred)?;
            let context = state.selected_names();
            defer_or_report(state, &deferred, &outcome, PendingAction::DeleteSelected, context);
        }
        Intent::DeleteRow(id) => {
            let deferred = DeferredConfirm::new();
            let outcome = session.delete_one(&id, &deferred)?;
            let context = state
                .snapshot
                .rows
                .iter()
                .filter(|row| row.id == id)
                .map(|row| row.name.clone())
                .collect();
            defer_or_report(state, &deferred, &outcome, PendingAction::DeleteRow(id), context);
        }
        Intent::Confirmed(action) => {
            let outcome = match action {
                PendingAction::DeleteSelected => session.delete_selected(&Preapproved(true))?,
                PendingAction::DeleteRow(id) => session.delete_one(&id, &Preapproved(true))?,
            };
            outcome.report(&state.messages);
        }

        Intent::OpenEdit(id) => state.open_edit(session, &id),
        Intent::SubmitEdit => submit_edit(session, state)?,

        Intent::OpenMovePicker => {
            if !session.is_loaded() {
                return Err(SessionError::NotLoaded);
            }
            state.open_picker(session);
        }
        Intent::Move(target) => session.move_selected(target.as_ref())?.report(&state.messages),

        Intent::Export => session.export_today(sink)?.report(&state.messages),
        Intent::Open(path) => {
            let outcome = session.load_file(&path)?;
            state.cursor = 0;
            state.scroll_offset = 0;
            outcome.report(&state.messages);
        }

        Intent::CycleFolder => {
            let next = session.query().folder.next(session.folders());
            session.set_folder_filter(next);
        }
        Intent::CycleType => {
            let next = session.query().kind.next();
            session.set_type_filter(next);
        }
        Intent::ApplySearch => session.set_search(state.search.value()),
    }
    Ok(())
}

/// Open the confirmation dialog if the operation asked, else report it
fn defer_or_report(
    state: &mut AppState,
    deferred: &DeferredConfirm,
    outcome: &ActionOutcome,
    action: PendingAction,
    context: Vec<String>,
) {
    match deferred.take_prompt() {
        Some(prompt) => state.open_confirm(prompt, action, context),
        None => outcome.report(&state.messages),
    }
}

/// Save the edit dialog; a validation error keeps it open
fn submit_edit(session: &mut EditorSession, state: &mut AppState) -> session::Result<()> {
    let Some(edit) = state.edit_state.as_mut() else {
        return Ok(());
    };

    match session.edit_item(&edit.item_id, edit.name.value(), edit.folder_id()) {
        Ok(outcome) => {
            state.close_overlay();
            outcome.report(&state.messages);
            Ok(())
        }
        Err(SessionError::Validation(message)) => {
            state.messages.error(&message);
            edit.error = Some(message);
            Ok(())
        }
        Err(e) => {
            state.close_overlay();
            Err(e)
        }
    }
}
