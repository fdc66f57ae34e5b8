// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::session_gate::{SessionIdentity, SessionVerifier};
use crate::store::EventStore;
use async_std::sync::Arc;
use http_types::mime;
use serde::Serialize;
use tide::{Request, Response, Server, StatusCode};

mod list_events;
use list_events::list_events;

mod session_token;
use session_token::session_token;

mod update_event;
use update_event::update_event;

pub fn add_routes(app: &mut Server<()>, event_store: Arc<dyn EventStore>, sessions: Arc<dyn SessionVerifier>) {
	app.at("/api/session/token").get({
		let sessions = Arc::clone(&sessions);
		move |request| session_token(request, Arc::clone(&sessions))
	});
	app.at("/api/events").get({
		let event_store = Arc::clone(&event_store);
		let sessions = Arc::clone(&sessions);
		move |request| list_events(request, Arc::clone(&event_store), Arc::clone(&sessions))
	});
	app.at("/api/event/:id").post({
		let event_store = Arc::clone(&event_store);
		let sessions = Arc::clone(&sessions);
		move |request| update_event(request, Arc::clone(&event_store), Arc::clone(&sessions))
	});
}

#[derive(Debug)]
enum RequestTokenError {
	NoToken,
	InvalidToken,
}

/// Gets the session for the request, failing the request if there's no session.
fn require_session(request: &Request<()>, sessions: &dyn SessionVerifier) -> Result<SessionIdentity, tide::Error> {
	sessions
		.session(request)
		.ok_or_else(|| tide::Error::new(StatusCode::Unauthorized, anyhow::Error::msg("Not logged in")))
}

fn get_bearer_token(request: &Request<()>) -> Result<String, RequestTokenError> {
	let auth_token_header = request.header("Authorization");

	match auth_token_header {
		Some(token_header) => {
			let token_header_value = token_header.last();
			match token_header_value.as_str().strip_prefix("Bearer ") {
				Some(token) if !token.is_empty() => Ok(token.to_owned()),
				_ => Err(RequestTokenError::InvalidToken),
			}
		}
		None => Err(RequestTokenError::NoToken),
	}
}

/// Checks that the request carries the session's token as a bearer token.
fn check_bearer_token(request: &Request<()>, session: &SessionIdentity) -> Result<(), tide::Error> {
	match get_bearer_token(request) {
		Ok(token) if token == session.token => Ok(()),
		Ok(_) | Err(RequestTokenError::InvalidToken) => Err(tide::Error::new(
			StatusCode::Unauthorized,
			anyhow::Error::msg("Not authorized"),
		)),
		Err(RequestTokenError::NoToken) => Err(tide::Error::new(
			StatusCode::BadRequest,
			anyhow::Error::msg("Not authorized"),
		)),
	}
}

fn json_response<T: Serialize>(status: StatusCode, data: &T) -> tide::Result {
	match serde_json::to_string(data) {
		Ok(body) => Ok(Response::builder(status).body(body).content_type(mime::JSON).build()),
		Err(error) => {
			tide::log::error!("API error serializing response: {}", error);
			Err(tide::Error::new(
				StatusCode::InternalServerError,
				anyhow::Error::msg("Failed to generate response"),
			))
		}
	}
}
