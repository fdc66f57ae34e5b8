// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{check_bearer_token, json_response, require_session};
use crate::session_gate::SessionVerifier;
use crate::store::EventStore;
use async_std::sync::Arc;
use event_settings_shared::messages::event_form::EventForm;
use event_settings_shared::validation::validate_event_form;
use tide::{Request, StatusCode};

/// POST /api/event/:id
///
/// Updates the name, homepage, and contact information of an event. The body is an [EventForm] with the new values,
/// and the request must carry the session token as a bearer token. Responds with the updated event.
pub async fn update_event(
	mut request: Request<()>,
	event_store: Arc<dyn EventStore>,
	sessions: Arc<dyn SessionVerifier>,
) -> tide::Result {
	let session = require_session(&request, sessions.as_ref())?;
	check_bearer_token(&request, &session)?;

	let event_id = match urlencoding::decode(request.param("id")?) {
		Ok(event_id) => event_id.into_owned(),
		Err(_) => {
			return Err(tide::Error::new(
				StatusCode::BadRequest,
				anyhow::Error::msg("Invalid event ID"),
			))
		}
	};
	let form: EventForm = match request.body_json().await {
		Ok(form) => form,
		Err(error) => {
			tide::log::info!("Received invalid event data for event {}: {}", event_id, error);
			return Err(tide::Error::new(
				StatusCode::BadRequest,
				anyhow::Error::msg("Invalid event data"),
			));
		}
	};

	let errors = validate_event_form(&form);
	if !errors.is_empty() {
		return json_response(StatusCode::BadRequest, &errors);
	}

	match event_store.update_event(&event_id, &form).await {
		Ok(Some(event)) => {
			tide::log::info!("User {} updated settings for event {}", session.user_id, event.id);
			json_response(StatusCode::Ok, &event)
		}
		Ok(None) => Err(tide::Error::new(
			StatusCode::NotFound,
			anyhow::Error::msg("No event with that ID"),
		)),
		Err(error) => {
			tide::log::error!("Database error updating event {}: {}", event_id, error);
			Err(tide::Error::new(
				StatusCode::InternalServerError,
				anyhow::Error::msg("Database error"),
			))
		}
	}
}
