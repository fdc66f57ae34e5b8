// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::events::{Contact, Event};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The editable fields of an event. This is both the state of the settings form and the body of an update request.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventForm {
	pub name: String,
	pub hp_url: String,
	pub contact: Contact,
}

impl From<&Event> for EventForm {
	fn from(event: &Event) -> Self {
		Self {
			name: event.name.clone(),
			hp_url: event.hp_url.clone(),
			contact: event.contact.clone(),
		}
	}
}

impl EventForm {
	pub fn field(&self, field: FormField) -> &str {
		match field {
			FormField::Name => &self.name,
			FormField::HpUrl => &self.hp_url,
			FormField::ContactName => &self.contact.name,
			FormField::ContactEmail => &self.contact.email,
			FormField::ContactPhone => &self.contact.phone,
		}
	}

	pub fn set_field(&mut self, field: FormField, value: String) {
		match field {
			FormField::Name => self.name = value,
			FormField::HpUrl => self.hp_url = value,
			FormField::ContactName => self.contact.name = value,
			FormField::ContactEmail => self.contact.email = value,
			FormField::ContactPhone => self.contact.phone = value,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum FormField {
	Name,
	HpUrl,
	ContactName,
	ContactEmail,
	ContactPhone,
}

impl FormField {
	pub const ALL: [FormField; 5] = [
		Self::Name,
		Self::HpUrl,
		Self::ContactName,
		Self::ContactEmail,
		Self::ContactPhone,
	];

	/// The input name used for the field in the form
	pub fn input_name(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::HpUrl => "hp_url",
			Self::ContactName => "contact.name",
			Self::ContactEmail => "contact.email",
			Self::ContactPhone => "contact.phone",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Name => "Event name",
			Self::HpUrl => "Event homepage",
			Self::ContactName => "Contact name",
			Self::ContactEmail => "Contact email address",
			Self::ContactPhone => "Contact phone number",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.input_name())
	}
}

/// Validation messages for each field that failed validation. An empty set of errors means the form is valid.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn get(&self, field: FormField) -> Option<&str> {
		self.0.get(&field).map(|message| message.as_str())
	}

	pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	pub fn remove(&mut self, field: FormField) {
		self.0.remove(&field);
	}

	pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
		self.0.iter().map(|(field, message)| (*field, message.as_str()))
	}
}
