// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::session_gate::{SessionIdentity, SessionVerifier};
use crate::store::{EventStore, StoreError};
use event_settings_shared::messages::event_form::EventForm;
use event_settings_shared::messages::events::{replace_event, Event};
use std::sync::Mutex;
use tide::http::{Method, Request as HttpRequest, Url};
use tide::utils::async_trait;
use tide::Request;

/// Requests carrying this header are treated as logged in as the user named in the header value.
pub const TEST_SESSION_HEADER: &str = "X-Test-Session";

pub fn request(method: Method, path: &str) -> HttpRequest {
	let url = Url::parse("http://localhost/").unwrap().join(path).unwrap();
	HttpRequest::new(method, url)
}

pub struct HeaderSessionVerifier;

impl SessionVerifier for HeaderSessionVerifier {
	fn session(&self, request: &Request<()>) -> Option<SessionIdentity> {
		let user_id = request.header(TEST_SESSION_HEADER)?.last().as_str().to_owned();
		let token = format!("token-for-{}", user_id);
		Some(SessionIdentity { user_id, token })
	}
}

#[derive(Default)]
pub struct MemoryEventStore {
	events: Mutex<Vec<Event>>,
}

impl MemoryEventStore {
	pub fn new(events: Vec<Event>) -> Self {
		Self {
			events: Mutex::new(events),
		}
	}

	pub fn events(&self) -> Vec<Event> {
		self.events.lock().unwrap().clone()
	}
}

#[async_trait]
impl EventStore for MemoryEventStore {
	async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
		let mut events = self.events();
		events.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
		Ok(events)
	}

	async fn update_event(&self, id: &str, form: &EventForm) -> Result<Option<Event>, StoreError> {
		let updated = Event {
			id: id.to_owned(),
			name: form.name.clone(),
			hp_url: form.hp_url.clone(),
			contact: form.contact.clone(),
		};
		let mut events = self.events.lock().unwrap();
		if replace_event(&mut events, updated.clone()) {
			Ok(Some(updated))
		} else {
			Ok(None)
		}
	}
}
