//! Keyboard navigation over the flattened result list.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::search::ActiveCategory;

/// What a key press means to the search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
	/// Global open/close shortcut (Ctrl+K or Cmd+K).
	Toggle,
	MoveUp,
	MoveDown,
	Commit,
	Close,
	NextCategory,
	PreviousCategory,
	/// Append a character to the query.
	Insert(char),
	/// Delete the last character of the query.
	Backspace,
}

impl KeyAction {
	/// Map a terminal key event; release events and unbound keys map to `None`.
	#[must_use]
	pub fn from_key(key: &KeyEvent) -> Option<Self> {
		if key.kind == KeyEventKind::Release {
			return None;
		}
		let command = key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
		match key.code {
			KeyCode::Char(c) if command && c.eq_ignore_ascii_case(&'k') => Some(KeyAction::Toggle),
			KeyCode::Char(_) if command => None,
			KeyCode::Char(c) => Some(KeyAction::Insert(c)),
			KeyCode::Backspace => Some(KeyAction::Backspace),
			KeyCode::Up => Some(KeyAction::MoveUp),
			KeyCode::Down => Some(KeyAction::MoveDown),
			KeyCode::Enter => Some(KeyAction::Commit),
			KeyCode::Esc => Some(KeyAction::Close),
			KeyCode::Tab => Some(KeyAction::NextCategory),
			KeyCode::BackTab => Some(KeyAction::PreviousCategory),
			_ => None,
		}
	}
}

/// Active tab and highlighted row.
///
/// The index is only meaningful against the list length passed to each call;
/// callers re-derive that list whenever results change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
	active: ActiveCategory,
	selected: usize,
}

impl NavigationState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn active_category(&self) -> ActiveCategory {
		self.active
	}

	/// Raw selected index; use [`NavigationState::selected`] for a checked value.
	#[must_use]
	pub fn selected_index(&self) -> usize {
		self.selected
	}

	/// Selected index into a list of `len` items, if the list is non-empty.
	#[must_use]
	pub fn selected(&self, len: usize) -> Option<usize> {
		(len > 0).then(|| self.selected.min(len - 1))
	}

	/// Switch tabs; the selection always returns to the first row.
	pub fn set_active_category(&mut self, category: ActiveCategory) {
		self.active = category;
		self.selected = 0;
	}

	pub fn next_category(&mut self) {
		self.set_active_category(self.active.next());
	}

	pub fn previous_category(&mut self) {
		self.set_active_category(self.active.previous());
	}

	/// The query changed; the old selection is meaningless.
	pub fn query_changed(&mut self) {
		self.selected = 0;
	}

	/// Keep the selection inside a list that may have shrunk.
	pub fn clamp(&mut self, len: usize) {
		self.selected = match len {
			0 => 0,
			len => self.selected.min(len - 1),
		};
	}

	/// Move down one row, wrapping to the top.
	pub fn move_down(&mut self, len: usize) {
		if len == 0 {
			self.selected = 0;
			return;
		}
		self.selected = (self.selected.min(len - 1) + 1) % len;
	}

	/// Move up one row, wrapping to the bottom.
	pub fn move_up(&mut self, len: usize) {
		if len == 0 {
			self.selected = 0;
			return;
		}
		let current = self.selected.min(len - 1);
		self.selected = (current + len - 1) % len;
	}

	/// Back to the initial tab and row.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}
