// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{json_response, require_session};
use crate::session_gate::SessionVerifier;
use async_std::sync::Arc;
use event_settings_shared::messages::session::SessionToken;
use tide::{Request, StatusCode};

/// GET /api/session/token
///
/// Gets the token for the current session. Requests that change data must send it back as a bearer token.
pub async fn session_token(request: Request<()>, sessions: Arc<dyn SessionVerifier>) -> tide::Result {
	let session = require_session(&request, sessions.as_ref())?;
	json_response(StatusCode::Ok, &SessionToken { token: session.token })
}
