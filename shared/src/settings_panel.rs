// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State of the event settings panel.
//!
//! The panel is either showing the selected event (view mode) or letting the user edit it (edit mode). Submission is
//! split in two phases: [`PanelState::begin_submit`] leaves edit mode and decides whether the server needs to be
//! contacted. [`submit_event_changes`] then carries out the plan against an [`EventUpdateApi`] and hands the server's
//! copy of the event to the caller to merge into its event list. Nothing borrowed from the panel is held while the
//! update is in flight. If the update fails, the panel stays in view mode and the local event list keeps its old data.

use crate::messages::event_form::{EventForm, FormErrors, FormField};
use crate::messages::events::Event;
use crate::validation::{validate_event_form, validate_field};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelMode {
	View,
	Edit,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PanelState {
	mode: PanelMode,
	form: EventForm,
	errors: FormErrors,
}

/// What needs to happen after the form is submitted
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitPlan {
	/// The form didn't pass validation; the panel stays in edit mode.
	Invalid(FormErrors),
	NoSelection,
	/// The submitted values match the selected event.
	Unchanged,
	/// The selected event should be updated with the form values.
	Update { event: Event, form: EventForm },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	Invalid(FormErrors),
	NoSelection,
	Unchanged,
	Updated(Event),
}

/// The remote operations needed to save an event
#[allow(async_fn_in_trait)]
pub trait EventUpdateApi {
	type Error;

	/// Gets the authorization token to send with the update
	async fn id_token(&self) -> Result<String, Self::Error>;

	/// Sends new values for the event to the server. Returns the event as stored by the server.
	async fn update_event(&self, id_token: &str, event: &Event, form: &EventForm) -> Result<Event, Self::Error>;
}

impl PanelState {
	pub fn new(selected: Option<&Event>) -> Self {
		Self {
			mode: PanelMode::View,
			form: selected.map(EventForm::from).unwrap_or_default(),
			errors: FormErrors::new(),
		}
	}

	pub fn mode(&self) -> PanelMode {
		self.mode
	}

	pub fn is_editable(&self) -> bool {
		self.mode == PanelMode::Edit
	}

	pub fn form(&self) -> &EventForm {
		&self.form
	}

	pub fn errors(&self) -> &FormErrors {
		&self.errors
	}

	/// Switches to edit mode, filling the form from the current data of the selected event.
	pub fn enter_edit(&mut self, selected: Option<&Event>) {
		self.reseed(selected);
		self.mode = PanelMode::Edit;
	}

	/// Leaves edit mode without saving anything. Edits are discarded.
	pub fn cancel(&mut self, selected: Option<&Event>) {
		self.reseed(selected);
		self.mode = PanelMode::View;
	}

	/// Updates a single form field and revalidates it. Fields can't change in view mode.
	pub fn set_field(&mut self, field: FormField, value: String) {
		if self.mode != PanelMode::Edit {
			return;
		}
		match validate_field(field, &value) {
			Ok(()) => self.errors.remove(field),
			Err(message) => self.errors.insert(field, message),
		}
		self.form.set_field(field, value);
	}

	/// Handles the form being submitted.
	///
	/// Validation errors keep the panel in edit mode. Otherwise the panel returns to view mode right away, before any
	/// update is sent. An update is only planned if the form differs from the selected event.
	pub fn begin_submit(&mut self, selected: Option<&Event>) -> SubmitPlan {
		let errors = validate_event_form(&self.form);
		if !errors.is_empty() {
			self.errors = errors.clone();
			return SubmitPlan::Invalid(errors);
		}
		self.errors = FormErrors::new();
		self.mode = PanelMode::View;

		let Some(event) = selected else {
			return SubmitPlan::NoSelection;
		};
		let snapshot = EventForm::from(event);
		if snapshot == self.form {
			return SubmitPlan::Unchanged;
		}
		SubmitPlan::Update {
			event: event.clone(),
			form: self.form.clone(),
		}
	}

	fn reseed(&mut self, selected: Option<&Event>) {
		if let Some(event) = selected {
			self.form = EventForm::from(event);
		}
		self.errors = FormErrors::new();
	}
}

/// Carries out a submit plan from [`PanelState::begin_submit`], sending an update when something changed. The
/// updated event returned by the server is passed to `apply`, which is only called after a successful update. API
/// errors are returned as-is.
pub async fn submit_event_changes<A: EventUpdateApi>(
	plan: SubmitPlan,
	api: &A,
	apply: impl FnOnce(Event),
) -> Result<SubmitOutcome, A::Error> {
	let (event, form) = match plan {
		SubmitPlan::Invalid(errors) => return Ok(SubmitOutcome::Invalid(errors)),
		SubmitPlan::NoSelection => return Ok(SubmitOutcome::NoSelection),
		SubmitPlan::Unchanged => return Ok(SubmitOutcome::Unchanged),
		SubmitPlan::Update { event, form } => (event, form),
	};

	let updated = send_event_update(api, &event, &form).await?;
	apply(updated.clone());
	Ok(SubmitOutcome::Updated(updated))
}

/// Sends a planned update: gets a token, then sends the new values for the event.
pub async fn send_event_update<A: EventUpdateApi>(api: &A, event: &Event, form: &EventForm) -> Result<Event, A::Error> {
	let id_token = api.id_token().await?;
	api.update_event(&id_token, event, form).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::messages::events::{replace_event, Contact};
	use futures::executor::block_on;
	use std::cell::RefCell;

	fn event(id: &str, name: &str) -> Event {
		Event {
			id: id.to_owned(),
			name: name.to_owned(),
			hp_url: format!("https://{}.example.com/", id),
			contact: Contact {
				name: String::from("Ren Ito"),
				email: String::from("ren@example.com"),
				phone: String::from("090-0000-0000"),
			},
		}
	}

	#[derive(Default)]
	struct RecordingApi {
		updates: RefCell<Vec<(String, String, EventForm)>>,
		fail: bool,
	}

	impl EventUpdateApi for RecordingApi {
		type Error = String;

		async fn id_token(&self) -> Result<String, String> {
			Ok(String::from("token-1"))
		}

		async fn update_event(&self, id_token: &str, event: &Event, form: &EventForm) -> Result<Event, String> {
			self.updates
				.borrow_mut()
				.push((id_token.to_owned(), event.id.clone(), form.clone()));
			if self.fail {
				return Err(String::from("server unavailable"));
			}
			Ok(Event {
				id: event.id.clone(),
				name: form.name.clone(),
				hp_url: form.hp_url.clone(),
				contact: form.contact.clone(),
			})
		}
	}

	#[test]
	fn starts_in_view_mode_with_selected_values() {
		let selected = event("a", "Alpha");
		let panel = PanelState::new(Some(&selected));
		assert_eq!(panel.mode(), PanelMode::View);
		assert_eq!(panel.form(), &EventForm::from(&selected));
	}

	#[test]
	fn entering_edit_uses_current_selected_values() {
		let mut panel = PanelState::new(Some(&event("a", "Alpha")));
		let mut current = event("a", "Alpha (moved)");
		current.contact.email = String::from("new@example.com");

		panel.enter_edit(Some(&current));
		assert!(panel.is_editable());
		assert_eq!(panel.form(), &EventForm::from(&current));

		panel.set_field(FormField::Name, String::from("Draft"));
		panel.cancel(Some(&current));
		assert_eq!(panel.mode(), PanelMode::View);
		panel.enter_edit(Some(&current));
		assert_eq!(panel.form().name, "Alpha (moved)");
	}

	#[test]
	fn fields_are_locked_in_view_mode() {
		let selected = event("a", "Alpha");
		let mut panel = PanelState::new(Some(&selected));
		panel.set_field(FormField::Name, String::from("Changed"));
		assert_eq!(panel.form().name, "Alpha");
	}

	#[test]
	fn field_errors_follow_changes() {
		let selected = event("a", "Alpha");
		let mut panel = PanelState::new(Some(&selected));
		panel.enter_edit(Some(&selected));

		panel.set_field(FormField::HpUrl, String::from("example"));
		assert!(panel.errors().get(FormField::HpUrl).is_some());
		panel.set_field(FormField::HpUrl, String::from("https://example.com/"));
		assert!(panel.errors().is_empty());
	}

	#[test]
	fn unchanged_submit_skips_network_and_leaves_edit_mode() {
		let selected = event("a", "Alpha");
		let api = RecordingApi::default();
		let mut events = vec![selected.clone()];
		let mut panel = PanelState::new(Some(&selected));
		panel.enter_edit(Some(&selected));

		let plan = panel.begin_submit(Some(&selected));
		let outcome = block_on(submit_event_changes(plan, &api, |updated| {
			replace_event(&mut events, updated);
		}));
		assert_eq!(outcome, Ok(SubmitOutcome::Unchanged));
		assert_eq!(events, vec![selected]);
		assert_eq!(panel.mode(), PanelMode::View);
		assert!(api.updates.borrow().is_empty());
	}

	#[test]
	fn changed_submit_sends_one_update_and_replaces_entry() {
		let first = event("a", "Alpha");
		let selected = event("b", "Beta");
		let last = event("c", "Gamma");
		let api = RecordingApi::default();
		let mut events = vec![first.clone(), selected.clone(), last.clone()];
		let mut panel = PanelState::new(Some(&selected));
		panel.enter_edit(Some(&selected));
		panel.set_field(FormField::Name, String::from("Beta Conference"));
		panel.set_field(FormField::ContactPhone, String::from("03-1111-2222"));

		let plan = panel.begin_submit(Some(&selected));
		assert_eq!(panel.mode(), PanelMode::View);
		let outcome = block_on(submit_event_changes(plan, &api, |updated| {
			replace_event(&mut events, updated);
		}))
		.unwrap();

		let updates = api.updates.borrow();
		assert_eq!(updates.len(), 1);
		let (token, id, form) = &updates[0];
		assert_eq!(token, "token-1");
		assert_eq!(id, "b");
		assert_eq!(form.name, "Beta Conference");
		assert_eq!(form.contact.phone, "03-1111-2222");

		let SubmitOutcome::Updated(updated) = outcome else {
			panic!("expected an update, got {:?}", outcome);
		};
		assert_eq!(events, vec![first, updated, last]);
		assert_eq!(panel.mode(), PanelMode::View);
	}

	#[test]
	fn invalid_submit_stays_in_edit_mode() {
		let selected = event("a", "Alpha");
		let api = RecordingApi::default();
		let mut events = vec![selected.clone()];
		let mut panel = PanelState::new(Some(&selected));
		panel.enter_edit(Some(&selected));
		panel.set_field(FormField::HpUrl, String::from("alpha.example.com"));

		let plan = panel.begin_submit(Some(&selected));
		let outcome = block_on(submit_event_changes(plan, &api, |updated| {
			replace_event(&mut events, updated);
		}))
		.unwrap();
		let SubmitOutcome::Invalid(errors) = outcome else {
			panic!("expected validation errors, got {:?}", outcome);
		};
		assert!(errors.get(FormField::HpUrl).is_some());
		assert!(panel.is_editable());
		assert!(api.updates.borrow().is_empty());
		assert_eq!(events, vec![selected]);
	}

	#[test]
	fn missing_selection_aborts_after_leaving_edit_mode() {
		let selected = event("a", "Alpha");
		let api = RecordingApi::default();
		let mut panel = PanelState::new(Some(&selected));
		panel.enter_edit(Some(&selected));
		panel.set_field(FormField::Name, String::from("Other"));

		let mut applied = Vec::new();
		let plan = panel.begin_submit(None);
		let outcome = block_on(submit_event_changes(plan, &api, |updated| applied.push(updated)));
		assert_eq!(outcome, Ok(SubmitOutcome::NoSelection));
		assert!(applied.is_empty());
		assert_eq!(panel.mode(), PanelMode::View);
		assert!(api.updates.borrow().is_empty());
	}

	#[test]
	fn failed_update_keeps_old_list() {
		let selected = event("a", "Alpha");
		let api = RecordingApi {
			fail: true,
			..RecordingApi::default()
		};
		let mut events = vec![selected.clone()];
		let mut panel = PanelState::new(Some(&selected));
		panel.enter_edit(Some(&selected));
		panel.set_field(FormField::Name, String::from("Alpha 2"));

		let plan = panel.begin_submit(Some(&selected));
		let outcome = block_on(submit_event_changes(plan, &api, |updated| {
			replace_event(&mut events, updated);
		}));
		assert_eq!(outcome, Err(String::from("server unavailable")));
		assert_eq!(api.updates.borrow().len(), 1);
		assert_eq!(events, vec![selected]);
		assert_eq!(panel.mode(), PanelMode::View);
	}
}
