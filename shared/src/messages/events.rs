// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Event {
	pub id: String,
	pub name: String,
	pub hp_url: String,
	pub contact: Contact,
}

/// The person responsible for an event
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Contact {
	pub name: String,
	pub email: String,
	pub phone: String,
}

/// Gets the API path for updating the event with the given ID. The ID is encoded as a single path segment.
pub fn event_api_path(id: &str) -> String {
	format!("/api/event/{}", urlencoding::encode(id))
}

/// Replaces the entries in the event list that have the same ID as the updated event. All other entries are left in
/// place. Returns whether any entry was replaced.
pub fn replace_event(events: &mut [Event], updated: Event) -> bool {
	let mut replaced = false;
	for event in events.iter_mut().filter(|event| event.id == updated.id) {
		*event = updated.clone();
		replaced = true;
	}
	replaced
}
