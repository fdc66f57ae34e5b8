// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{json_response, require_session};
use crate::session_gate::SessionVerifier;
use crate::store::EventStore;
use async_std::sync::Arc;
use tide::{Request, StatusCode};

/// GET /api/events
///
/// Gets the list of events, ordered by name. Requires a logged-in session.
pub async fn list_events(
	request: Request<()>,
	event_store: Arc<dyn EventStore>,
	sessions: Arc<dyn SessionVerifier>,
) -> tide::Result {
	require_session(&request, sessions.as_ref())?;

	match event_store.list_events().await {
		Ok(events) => json_response(StatusCode::Ok, &events),
		Err(error) => {
			tide::log::error!("API error listing events: {}", error);
			Err(tide::Error::new(
				StatusCode::InternalServerError,
				anyhow::Error::msg("Database error"),
			))
		}
	}
}
