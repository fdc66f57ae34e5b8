// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_std::sync::Arc;
use clap::Parser;
use miette::IntoDiagnostic;
use tide::http::cookies::SameSite;
use tide::sessions::SessionMiddleware;
use tide_openidconnect::{ClientId, ClientSecret, IssuerUrl, OpenIdConnectMiddleware, RedirectUrl};

mod api;
mod args;
mod config;
mod database;
mod models;
mod schema;
mod session;
mod session_gate;
mod store;
#[cfg(test)]
mod test_support;
mod web;

use args::CliArgs;
use config::parse_config;
use database::{connect_db, run_embedded_migrations};
use session::DatabaseSessionStore;
use session_gate::{OpenIdSessionVerifier, SessionGate, SessionVerifier};
use store::{EventStore, PgEventStore};
use web::add_static_routes;

#[async_std::main]
async fn main() -> miette::Result<()> {
	let args = CliArgs::parse();
	let config = Arc::new(parse_config(&args.config)?);

	let db_pool = connect_db(&config)?;
	{
		let mut db_connection = db_pool.get().into_diagnostic()?;
		run_embedded_migrations(&mut db_connection)?;
	}

	if args.migrations_only {
		return Ok(());
	}

	tide::log::start();

	let openid_config = tide_openidconnect::Config {
		issuer_url: IssuerUrl::new(config.openid.issuer_url.clone()).into_diagnostic()?,
		client_id: ClientId::new(config.openid.client_id.clone()),
		client_secret: ClientSecret::new(config.openid.client_secret.clone()),
		redirect_url: RedirectUrl::new(config.openid.redirect_url.clone()).into_diagnostic()?,
		idp_logout_url: None,
	};

	let mut app = tide::new();
	app.with(
		SessionMiddleware::new(DatabaseSessionStore::new(db_pool.clone()), &config.session_secret())
			.with_same_site_policy(SameSite::Lax),
	);
	app.with(
		OpenIdConnectMiddleware::new(&openid_config)
			.await
			.with_login_landing_path(&config.login_landing_path()),
	);

	let gate_config = config.gate_config();
	let sessions: Arc<dyn SessionVerifier> = Arc::new(OpenIdSessionVerifier);
	app.with(SessionGate::new(gate_config.clone(), Arc::clone(&sessions)));

	let event_store: Arc<dyn EventStore> = Arc::new(PgEventStore::new(db_pool));
	api::add_routes(&mut app, event_store, sessions);
	add_static_routes(&mut app, &config.static_dir(), &gate_config)?;

	app.listen(config.listen_addr()).await.into_diagnostic()?;

	Ok(())
}
