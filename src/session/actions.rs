use std::time::Instant;

use ratatui::crossterm::event::KeyEvent;

use super::{SearchSession, SessionEvent};
use crate::navigation::KeyAction;

impl SearchSession {
	/// Apply a key press. The open/close shortcut works in every state; other
	/// keys are ignored while the surface is closed.
	pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> SessionEvent {
		let Some(action) = KeyAction::from_key(key) else {
			return SessionEvent::None;
		};
		self.handle_action(action, now)
	}

	pub fn handle_action(&mut self, action: KeyAction, now: Instant) -> SessionEvent {
		match action {
			KeyAction::Toggle => return self.toggle(),
			_ if !self.open => return SessionEvent::None,
			KeyAction::Close => return self.close(),
			KeyAction::Commit => return self.commit(now),
			KeyAction::MoveUp => {
				let len = self.grouped.visible_len();
				self.navigation.move_up(len);
			}
			KeyAction::MoveDown => {
				let len = self.grouped.visible_len();
				self.navigation.move_down(len);
			}
			KeyAction::NextCategory => {
				let next = self.navigation.active_category().next();
				self.set_active_category(next);
			}
			KeyAction::PreviousCategory => {
				let previous = self.navigation.active_category().previous();
				self.set_active_category(previous);
			}
			KeyAction::Insert(c) => {
				let mut query = self.query.clone();
				query.push(c);
				self.set_query(&query, now);
			}
			KeyAction::Backspace => {
				let mut query = self.query.clone();
				if query.pop().is_some() {
					self.set_query(&query, now);
				}
			}
		}
		SessionEvent::None
	}
}
