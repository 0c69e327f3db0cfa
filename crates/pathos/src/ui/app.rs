//! Application loop for the TUI.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use tracing::{debug, warn};

use crate::app::editor::{Action, Editor, Outcome};
use crate::app::session::Mode;
use crate::ui::components::entry_input::EntryInput;
use crate::ui::components::help::HelpOverlay;
use crate::ui::components::legend::Legend;
use crate::ui::components::path_list::PathListView;
use crate::ui::keymap::KeyMap;

const TICK_RATE: Duration = Duration::from_millis(120);
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Interactive front end over an [`Editor`].
pub struct UiApp {
    editor: Editor,
    keymap: KeyMap,
    list_view: PathListView,
    legend: Legend,
    entry_input: EntryInput,
    help: HelpOverlay,
    status: Option<StatusMessage>,
}

impl UiApp {
    pub fn new(editor: Editor, keymap: KeyMap) -> Self {
        Self {
            editor,
            keymap,
            list_view: PathListView,
            legend: Legend,
            entry_input: EntryInput,
            help: HelpOverlay,
            status: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Launch the terminal UI and enter the event loop.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        enter_screen(&mut stdout).context("failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        terminal.hide_cursor().ok();

        let event_loop_result = self.event_loop(&mut terminal);

        disable_raw_mode().ok();
        let _ = leave_screen(terminal.backend_mut());
        let _ = terminal.show_cursor();

        event_loop_result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            self.tick();

            if self.editor.is_finished() {
                break;
            }

            if event::poll(TICK_RATE)? {
                let ev = event::read()?;
                self.handle_event(ev);
            }
        }
        Ok(())
    }

    /// Draw one frame.
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let size = frame.size();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(size);

        let rows = self.editor.rows();
        let mode = self.editor.mode();
        self.list_view
            .render(frame, layout[0], &rows, matches!(mode, Mode::Browsing));
        self.legend.render(frame, layout[1], &self.editor.summary());
        frame.render_widget(
            Paragraph::new(self.hints(mode)).style(Style::default().fg(Color::Gray)),
            layout[2],
        );
        self.render_status(frame, layout[3]);

        if let Mode::Entering { insert_at } = mode {
            self.entry_input
                .render(frame, layout[0], self.editor.session().draft(), insert_at);
        } else if self.editor.help_visible() {
            self.help.render(frame, size, &self.keymap);
        }
    }

    fn hints(&self, mode: Mode) -> Line<'static> {
        let key = |text: String| Span::styled(text, Style::default().fg(Color::Cyan));
        match mode {
            Mode::Browsing => {
                let pairs = [
                    (Action::StartNewEntry, " new · "),
                    (Action::DeleteSelected, " delete · "),
                    (Action::Save, " save · "),
                    (Action::RequestExport, " export · "),
                    (Action::ToggleHelp, " help · "),
                    (Action::Quit, " quit"),
                ];
                let mut spans = vec![Span::raw(" ")];
                for (action, label) in pairs {
                    let keys = self.keymap.keys_for(&action);
                    if keys.is_empty() {
                        continue;
                    }
                    spans.push(key(keys));
                    spans.push(Span::raw(label));
                }
                Line::from(spans)
            }
            Mode::Entering { .. } => Line::from(vec![
                Span::raw(" "),
                key("↵".into()),
                Span::raw(" add · "),
                key("esc".into()),
                Span::raw(" cancel · "),
                key("ctrl+e".into()),
                Span::raw(" export · "),
                key("ctrl+c".into()),
                Span::raw(" quit"),
            ]),
        }
    }

    fn render_status(&self, frame: &mut Frame<'_>, area: Rect) {
        let message = self.status.as_ref().map(|status| {
            let style = match status.level {
                StatusLevel::Info => Style::default().fg(Color::Gray),
                StatusLevel::Success => Style::default().fg(Color::Green),
                StatusLevel::Error => Style::default().fg(Color::Red),
            };
            Line::styled(status.text.clone(), style)
        });

        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let line = message.unwrap_or_else(|| {
            Line::styled(
                format!("Editing {} · ? for help", self.editor.store_name()),
                Style::default().fg(Color::DarkGray),
            )
        });
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn tick(&mut self) {
        if let Some(status) = &self.status
            && status.is_expired()
        {
            self.status = None;
        }
    }

    /// Route one terminal event. Errors from actions end up on the status line.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => {
                if self.editor.session().is_entering() {
                    self.editor.session_mut().draft_mut().insert_str(&text);
                }
            }
            Event::Key(_) | Event::Resize(..) | Event::Mouse(_) => {}
            Event::FocusGained | Event::FocusLost => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let action = match self.editor.mode() {
            Mode::Browsing => self.keymap.resolve(&key),
            Mode::Entering { .. } => self.entering_action(key),
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// While entering, every printable key is text; only a few chords act on the editor.
    fn entering_action(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                return Some(Action::CommitEntry(
                    self.editor.session().draft().value().to_owned(),
                ));
            }
            KeyCode::Esc => return Some(Action::CancelEntry),
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::Char('e') if ctrl => return Some(Action::RequestExport),
            _ => {}
        }

        let draft = self.editor.session_mut().draft_mut();
        match key.code {
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                draft.insert_char(ch);
            }
            KeyCode::Backspace => draft.backspace(),
            KeyCode::Delete => draft.delete(),
            KeyCode::Left => draft.move_left(),
            KeyCode::Right => draft.move_right(),
            KeyCode::Home => draft.move_home(),
            KeyCode::End => draft.move_end(),
            _ => {}
        }
        None
    }

    fn dispatch(&mut self, action: Action) {
        match self.editor.apply(action) {
            Ok(outcome) => self.report(outcome),
            Err(err) => {
                let err = anyhow::Error::from(err);
                warn!(error = %format!("{err:#}"), "action failed");
                self.set_status(StatusLevel::Error, format!("{err:#}"));
            }
        }
    }

    fn report(&mut self, outcome: Outcome) {
        debug!(?outcome, "action applied");
        match outcome {
            Outcome::Inserted { index, entry } => self.set_status(
                StatusLevel::Success,
                format!("Added {entry} at position {}", index + 1),
            ),
            Outcome::Rejected => {
                self.set_status(StatusLevel::Error, "Directory must not be empty")
            }
            Outcome::Removed { entry, .. } => {
                self.set_status(StatusLevel::Info, format!("Removed {entry}"))
            }
            Outcome::Selected(entry) => {
                self.set_status(StatusLevel::Info, format!("Selected {entry}"))
            }
            Outcome::Exported(result) => self.set_status(
                StatusLevel::Success,
                format!(
                    "Exported to {} ({} bytes)",
                    result.path.display(),
                    result.bytes_written
                ),
            ),
            Outcome::Saved { target, entries } => self.set_status(
                StatusLevel::Success,
                format!("Saved {entries} entries to {target}"),
            ),
            Outcome::ModeChanged(_)
            | Outcome::Moved { .. }
            | Outcome::HelpToggled { .. }
            | Outcome::Quit
            | Outcome::Ignored => {}
        }
    }

    fn set_status<S: Into<String>>(&mut self, level: StatusLevel, message: S) {
        self.status = Some(StatusMessage::new(level, message.into()));
    }
}

/// Alternate screen plus bracketed paste, so pasted newlines arrive as [`Event::Paste`]
/// instead of Enter key presses.
fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableBracketedPaste)
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableBracketedPaste, LeaveAlternateScreen)
}

#[derive(Debug)]
struct StatusMessage {
    level: StatusLevel,
    text: String,
    expires_at: Instant,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: String) -> Self {
        Self {
            level,
            text,
            expires_at: Instant::now() + STATUS_TTL,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusLevel {
    Info,
    Success,
    Error,
}
