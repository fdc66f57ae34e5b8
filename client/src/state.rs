// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::errors::ErrorData;
use event_settings_shared::messages::events::{replace_event, Event};
use sycamore::prelude::*;

/// Data shared by every page of the application.
///
/// The signals are exposed for reading; reading them inside a view, memo, or effect subscribes to changes. All
/// changes go through the update methods.
#[derive(Clone)]
pub struct AppState {
	events: RcSignal<Vec<Event>>,
	events_loaded: RcSignal<bool>,
	errors: RcSignal<Vec<ErrorData>>,
}

impl AppState {
	pub fn new() -> Self {
		Self {
			events: create_rc_signal(Vec::new()),
			events_loaded: create_rc_signal(false),
			errors: create_rc_signal(Vec::new()),
		}
	}

	pub fn events(&self) -> &RcSignal<Vec<Event>> {
		&self.events
	}

	pub fn events_loaded(&self) -> &RcSignal<bool> {
		&self.events_loaded
	}

	pub fn errors(&self) -> &RcSignal<Vec<ErrorData>> {
		&self.errors
	}

	/// Gets the current data for the event with the given ID
	pub fn find_event(&self, id: &str) -> Option<Event> {
		self.events.get().iter().find(|event| event.id == id).cloned()
	}

	pub fn set_events(&self, events: Vec<Event>) {
		self.events.set(events);
		self.events_loaded.set(true);
	}

	/// Marks the event list as loaded without any events, for when loading failed
	pub fn set_events_load_failed(&self) {
		self.events_loaded.set(true);
	}

	pub fn update_events(&self, update: impl FnOnce(&mut Vec<Event>)) {
		update(&mut self.events.modify());
	}

	/// Puts the server's copy of an updated event in place of the old one
	pub fn apply_event_update(&self, updated: Event) {
		self.update_events(|events| {
			if !replace_event(events, updated) {
				log::debug!("Updated event is no longer in the event list");
			}
		});
	}

	pub fn report_error(&self, error: ErrorData) {
		self.errors.modify().push(error);
	}

	pub fn dismiss_error(&self, error: &ErrorData) {
		let index = self.errors.get().iter().position(|check_error| check_error == error);
		if let Some(index) = index {
			self.errors.modify().remove(index);
		}
	}
}

impl Default for AppState {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use event_settings_shared::messages::events::Contact;

	fn event(id: &str, name: &str) -> Event {
		Event {
			id: id.to_owned(),
			name: name.to_owned(),
			hp_url: format!("https://{}.example.com/", id),
			contact: Contact::default(),
		}
	}

	#[test]
	fn event_update_replaces_only_that_event() {
		let app_state = AppState::new();
		app_state.set_events(vec![event("a", "Alpha"), event("b", "Beta"), event("c", "Gamma")]);

		let updated = event("b", "Beta Conference");
		app_state.apply_event_update(updated.clone());
		assert_eq!(
			*app_state.events().get(),
			vec![event("a", "Alpha"), updated.clone(), event("c", "Gamma")]
		);
		assert_eq!(app_state.find_event("b"), Some(updated));
	}

	#[test]
	fn failed_load_still_finishes_loading() {
		let app_state = AppState::new();
		assert!(!*app_state.events_loaded().get());
		app_state.set_events_load_failed();
		assert!(*app_state.events_loaded().get());
		assert!(app_state.events().get().is_empty());
	}

	#[test]
	fn errors_can_be_dismissed() {
		let app_state = AppState::new();
		let error = ErrorData::new("Failed to load the event list.");
		app_state.report_error(error.clone());
		assert_eq!(app_state.errors().get().len(), 1);
		app_state.dismiss_error(&error);
		assert!(app_state.errors().get().is_empty());
	}
}
