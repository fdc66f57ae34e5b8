// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_std::sync::Arc;
use tide::utils::async_trait;
use tide::{Middleware, Next, Redirect, Request};
use tide_openidconnect::OpenIdConnectRequestExt;

/// Which paths require a logged-in session, and where visitors without one are sent
#[derive(Clone, Debug)]
pub struct GateConfig {
	protected_prefixes: Vec<String>,
	redirect_to: String,
}

impl GateConfig {
	pub fn new(protected_prefixes: Vec<String>, redirect_to: String) -> Self {
		let protected_prefixes = protected_prefixes
			.into_iter()
			.map(|prefix| {
				let trimmed = prefix.trim_end_matches('/');
				if trimmed.is_empty() {
					String::from("/")
				} else {
					trimmed.to_owned()
				}
			})
			.collect();
		Self {
			protected_prefixes,
			redirect_to,
		}
	}

	pub fn protected_prefixes(&self) -> &[String] {
		&self.protected_prefixes
	}

	pub fn redirect_to(&self) -> &str {
		&self.redirect_to
	}

	/// Checks whether the path is one of the protected prefixes or is below one of them. Matching is done on whole
	/// path segments, so "/dashboard" protects "/dashboard/settings" but not "/dashboards".
	pub fn is_protected(&self, path: &str) -> bool {
		self.protected_prefixes.iter().any(|prefix| {
			if prefix == "/" {
				return true;
			}
			match path.strip_prefix(prefix.as_str()) {
				Some(rest) => rest.is_empty() || rest.starts_with('/'),
				None => false,
			}
		})
	}
}

impl Default for GateConfig {
	fn default() -> Self {
		Self::new(
			vec![String::from("/dashboard"), String::from("/event")],
			String::from("/login"),
		)
	}
}

/// The logged-in user behind a request
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionIdentity {
	pub user_id: String,
	pub token: String,
}

/// Looks up the session for a request. Anything short of a complete session is treated as no session.
pub trait SessionVerifier: Send + Sync + 'static {
	fn session(&self, request: &Request<()>) -> Option<SessionIdentity>;
}

/// Reads the session established by the OpenID Connect login flow. Requires the OpenID Connect middleware to be
/// installed ahead of anything that uses it.
pub struct OpenIdSessionVerifier;

impl SessionVerifier for OpenIdSessionVerifier {
	fn session(&self, request: &Request<()>) -> Option<SessionIdentity> {
		if !request.is_authenticated() {
			return None;
		}
		let user_id = request.user_id()?;
		let token = request.access_token()?;
		Some(SessionIdentity { user_id, token })
	}
}

/// Middleware that redirects requests for protected paths when there's no session
pub struct SessionGate {
	config: GateConfig,
	verifier: Arc<dyn SessionVerifier>,
}

impl SessionGate {
	pub fn new(config: GateConfig, verifier: Arc<dyn SessionVerifier>) -> Self {
		Self { config, verifier }
	}
}

#[async_trait]
impl Middleware<()> for SessionGate {
	async fn handle(&self, request: Request<()>, next: Next<'_, ()>) -> tide::Result {
		let path = request.url().path();
		if self.config.is_protected(path) && self.verifier.session(&request).is_none() {
			tide::log::info!("Redirecting request for {} without a session", path);
			return Ok(Redirect::new(self.config.redirect_to()).into());
		}
		Ok(next.run(request).await)
	}
}
