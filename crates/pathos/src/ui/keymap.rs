//! Data-driven mapping from literal keys to browsing actions.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::editor::Action;
use crate::app::path_list::Direction;
use crate::infra::config::Keybindings;

/// A key plus the modifiers that matter for matching. Shift is folded into the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    /// Normalise a terminal event so `Shift+d` and `D` compare equal.
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut modifiers = event.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
        if !matches!(event.code, KeyCode::Char(_)) {
            modifiers |= event.modifiers & KeyModifiers::SHIFT;
        }
        let code = match (event.code, modifiers.contains(KeyModifiers::CONTROL)) {
            (KeyCode::Char(ch), true) => KeyCode::Char(ch.to_ascii_lowercase()),
            (code, _) => code,
        };
        Self { code, modifiers }
    }

    /// Parse names such as `N`, `?`, `ctrl+e`, `pagedown`, or `space`.
    ///
    /// Single characters keep their case; named keys and modifiers are case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if name.chars().count() == 1 {
            return name.chars().next().map(|ch| Self::plain(KeyCode::Char(ch)));
        }

        let (prefix, key) = match name.rsplit_once('+') {
            Some((prefix, "")) => (prefix.strip_suffix('+').unwrap_or(prefix), "+"),
            Some((prefix, key)) => (prefix, key),
            None => ("", name),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.split('+').filter(|part| !part.is_empty()) {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return None,
            };
        }

        let code = if key.chars().count() == 1 {
            let ch = key.chars().next()?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::Char(ch.to_ascii_uppercase())
            } else if modifiers.contains(KeyModifiers::CONTROL) {
                KeyCode::Char(ch.to_ascii_lowercase())
            } else {
                KeyCode::Char(ch)
            }
        } else {
            match key.to_ascii_lowercase().as_str() {
                "enter" | "return" => KeyCode::Enter,
                "esc" | "escape" => KeyCode::Esc,
                "up" => KeyCode::Up,
                "down" => KeyCode::Down,
                "left" => KeyCode::Left,
                "right" => KeyCode::Right,
                "pageup" | "pgup" => KeyCode::PageUp,
                "pagedown" | "pgdn" => KeyCode::PageDown,
                "home" => KeyCode::Home,
                "end" => KeyCode::End,
                "tab" => KeyCode::Tab,
                "space" => KeyCode::Char(' '),
                "backspace" => KeyCode::Backspace,
                "delete" | "del" => KeyCode::Delete,
                _ => return None,
            }
        };

        Some(Self { code, modifiers })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(ch) => write!(f, "{ch}"),
            KeyCode::Enter => f.write_str("↵"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Up => f.write_str("↑"),
            KeyCode::Down => f.write_str("↓"),
            KeyCode::Left => f.write_str("←"),
            KeyCode::Right => f.write_str("→"),
            KeyCode::PageUp => f.write_str("pgup"),
            KeyCode::PageDown => f.write_str("pgdn"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Delete => f.write_str("del"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Ordered key table for [`crate::app::session::Mode::Browsing`]. The first match wins, so
/// configured bindings shadow the fixed navigation keys.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyChord, Action)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&Keybindings::default())
    }
}

impl KeyMap {
    /// Build the table from configured names. Unparsable names are skipped with a warning.
    pub fn from_config(config: &Keybindings) -> Self {
        let configured = [
            (&config.new, Action::StartNewEntry),
            (&config.delete, Action::DeleteSelected),
            (&config.save, Action::Save),
            (&config.export, Action::RequestExport),
            (&config.help, Action::ToggleHelp),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = Vec::new();
        for (name, action) in configured {
            match KeyChord::parse(name) {
                Some(chord) => bindings.push((chord, action)),
                None => tracing::warn!(key = %name, ?action, "ignoring unparsable keybinding"),
            }
        }
        bindings.extend(fixed_bindings());
        Self { bindings }
    }

    /// Resolve a terminal key event to an action.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Action> {
        let chord = KeyChord::from_event(event);
        self.bindings
            .iter()
            .find(|(candidate, _)| *candidate == chord)
            .map(|(_, action)| action.clone())
    }

    /// Every binding in priority order.
    pub fn bindings(&self) -> &[(KeyChord, Action)] {
        &self.bindings
    }

    /// Keys bound to `action`, joined for display.
    pub fn keys_for(&self, action: &Action) -> String {
        self.bindings
            .iter()
            .filter(|(_, candidate)| candidate == action)
            .map(|(chord, _)| chord.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn fixed_bindings() -> Vec<(KeyChord, Action)> {
    use KeyCode::*;

    vec![
        (KeyChord::plain(Char('k')), Action::Navigate(Direction::Up)),
        (KeyChord::plain(Up), Action::Navigate(Direction::Up)),
        (KeyChord::plain(Char('j')), Action::Navigate(Direction::Down)),
        (KeyChord::plain(Down), Action::Navigate(Direction::Down)),
        (KeyChord::plain(Char('u')), Action::Navigate(Direction::PageUp)),
        (KeyChord::plain(PageUp), Action::Navigate(Direction::PageUp)),
        (KeyChord::plain(Char('d')), Action::Navigate(Direction::PageDown)),
        (KeyChord::plain(PageDown), Action::Navigate(Direction::PageDown)),
        (KeyChord::plain(Char('g')), Action::Navigate(Direction::Top)),
        (KeyChord::plain(Home), Action::Navigate(Direction::Top)),
        (KeyChord::plain(Char('G')), Action::Navigate(Direction::Bottom)),
        (KeyChord::plain(End), Action::Navigate(Direction::Bottom)),
        (KeyChord::plain(Enter), Action::SelectEntry),
        (KeyChord::plain(Esc), Action::Quit),
        (KeyChord::ctrl('c'), Action::Quit),
    ]
}

/// Short description used by the help overlay.
pub fn describe(action: &Action) -> &'static str {
    match action {
        Action::StartNewEntry => "Add directory at cursor",
        Action::CommitEntry(_) => "Commit entry",
        Action::CancelEntry => "Cancel entry",
        Action::DeleteSelected => "Delete directory",
        Action::SelectEntry => "Choose directory",
        Action::RequestExport => "Export to shell file",
        Action::Save => "Save to store",
        Action::ToggleHelp => "Toggle help",
        Action::Quit => "Quit",
        Action::Navigate(Direction::Up) => "Move up",
        Action::Navigate(Direction::Down) => "Move down",
        Action::Navigate(Direction::PageUp) => "Previous page",
        Action::Navigate(Direction::PageDown) => "Next page",
        Action::Navigate(Direction::Top) => "Jump to top",
        Action::Navigate(Direction::Bottom) => "Jump to bottom",
    }
}
