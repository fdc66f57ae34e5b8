// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use event_settings_shared::messages::event_form::EventForm;
use event_settings_shared::messages::events::{event_api_path, Event};
use event_settings_shared::messages::session::SessionToken;
use event_settings_shared::settings_panel::EventUpdateApi;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::fmt;

/// Errors that can occur when talking to the server's API
#[derive(Debug)]
pub enum ApiError {
	Network(gloo_net::Error),
	Status(u16, String),
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "{}", error),
			Self::Status(401, _) => write!(f, "You're not logged in. Please refresh the page to log in again."),
			Self::Status(status, message) if message.is_empty() => write!(f, "The server responded with {}", status),
			Self::Status(status, message) => write!(f, "The server responded with {}: {}", status, message),
		}
	}
}

impl From<gloo_net::Error> for ApiError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
	if !response.ok() {
		let status = response.status();
		let message = response.text().await.unwrap_or_default();
		return Err(ApiError::Status(status, message));
	}
	Ok(response.json().await?)
}

/// Gets all the events from the server
pub async fn fetch_events() -> Result<Vec<Event>, ApiError> {
	let response = Request::get("/api/events").send().await?;
	read_json(response).await
}

/// Gets the token that authorizes changes for the current session
pub async fn get_id_token() -> Result<String, ApiError> {
	let response = Request::get("/api/session/token").send().await?;
	let session_token: SessionToken = read_json(response).await?;
	Ok(session_token.token)
}

/// Sends new settings for an event, returning the event as the server stored it
pub async fn edit_event(id_token: &str, event: &Event, form: &EventForm) -> Result<Event, ApiError> {
	let response = Request::post(&event_api_path(&event.id))
		.header("Authorization", &format!("Bearer {}", id_token))
		.json(form)?
		.send()
		.await?;
	read_json(response).await
}

/// The server API used when saving the event settings panel
pub struct HttpEventApi;

impl EventUpdateApi for HttpEventApi {
	type Error = ApiError;

	async fn id_token(&self) -> Result<String, ApiError> {
		get_id_token().await
	}

	async fn update_event(&self, id_token: &str, event: &Event, form: &EventForm) -> Result<Event, ApiError> {
		edit_event(id_token, event, form).await
	}
}
