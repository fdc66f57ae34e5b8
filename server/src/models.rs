// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::schema::{events, sessions};
use diesel::{AsChangeset, Insertable, Queryable};
use event_settings_shared::messages::event_form::EventForm;
use event_settings_shared::messages::events::{Contact, Event as EventData};

#[derive(Clone, Insertable, Queryable)]
pub struct Event {
	pub id: String,
	pub name: String,
	pub hp_url: String,
	pub contact_name: String,
	pub contact_email: String,
	pub contact_phone: String,
}

impl From<Event> for EventData {
	fn from(value: Event) -> Self {
		EventData {
			id: value.id,
			name: value.name,
			hp_url: value.hp_url,
			contact: Contact {
				name: value.contact_name,
				email: value.contact_email,
				phone: value.contact_phone,
			},
		}
	}
}

/// The columns of an event that change when its settings are edited
#[derive(AsChangeset)]
#[diesel(table_name = events)]
pub struct EventChanges<'a> {
	pub name: &'a str,
	pub hp_url: &'a str,
	pub contact_name: &'a str,
	pub contact_email: &'a str,
	pub contact_phone: &'a str,
}

impl<'a> From<&'a EventForm> for EventChanges<'a> {
	fn from(form: &'a EventForm) -> Self {
		Self {
			name: &form.name,
			hp_url: &form.hp_url,
			contact_name: &form.contact.name,
			contact_email: &form.contact.email,
			contact_phone: &form.contact.phone,
		}
	}
}

#[derive(Insertable, Queryable)]
pub struct Session {
	pub id: String,
	pub data: String,
}
