// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::session_gate::GateConfig;
use knuffel::Decode;
use miette::{IntoDiagnostic, Result};
use rand::Rng;
use std::fs;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOGIN_LANDING_PATH: &str = "/dashboard";
const MIN_SESSION_SECRET_LENGTH: usize = 32;

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	#[knuffel(child, unwrap(argument))]
	pub listen_addr: Option<String>,
	#[knuffel(child, unwrap(argument))]
	pub static_dir: Option<String>,
	#[knuffel(child, unwrap(argument))]
	pub session_secret: Option<String>,
	#[knuffel(child)]
	pub database: DatabaseArgs,
	#[knuffel(child)]
	pub openid: OpenIdArgs,
	#[knuffel(child)]
	pub gate: Option<GateArgs>,
}

#[derive(Debug, Decode)]
pub struct DatabaseArgs {
	#[knuffel(child, unwrap(argument))]
	pub host: String,
	#[knuffel(child, unwrap(argument))]
	pub port: Option<u16>,
	#[knuffel(child, unwrap(argument))]
	pub username: String,
	#[knuffel(child, unwrap(argument))]
	pub password: String,
	#[knuffel(child, unwrap(argument))]
	pub database: String,
}

#[derive(Debug, Decode)]
pub struct OpenIdArgs {
	#[knuffel(child, unwrap(argument))]
	pub issuer_url: String,
	#[knuffel(child, unwrap(argument))]
	pub client_id: String,
	#[knuffel(child, unwrap(argument))]
	pub client_secret: String,
	#[knuffel(child, unwrap(argument))]
	pub redirect_url: String,
	#[knuffel(child, unwrap(argument))]
	pub landing_path: Option<String>,
}

#[derive(Debug, Decode)]
pub struct GateArgs {
	#[knuffel(children(name = "protect"))]
	pub protect: Vec<ProtectedPrefix>,
	#[knuffel(child, unwrap(argument))]
	pub redirect_to: Option<String>,
}

#[derive(Debug, Decode)]
pub struct ProtectedPrefix {
	#[knuffel(argument)]
	pub prefix: String,
}

impl ConfigDocument {
	pub fn listen_addr(&self) -> String {
		self.listen_addr
			.clone()
			.unwrap_or_else(|| String::from(DEFAULT_LISTEN_ADDR))
	}

	pub fn static_dir(&self) -> String {
		self.static_dir
			.clone()
			.unwrap_or_else(|| String::from(DEFAULT_STATIC_DIR))
	}

	/// Gets the secret used to sign session cookies. If none is configured, a random one is generated, so sessions
	/// won't survive a server restart.
	pub fn session_secret(&self) -> Vec<u8> {
		match self.session_secret.as_ref() {
			Some(secret) => secret.as_bytes().to_vec(),
			None => {
				tide::log::warn!("No session secret is configured; sessions will be lost when the server restarts");
				let mut secret = vec![0u8; 64];
				rand::thread_rng().fill(&mut secret[..]);
				secret
			}
		}
	}

	/// Where the identity provider sends users once they've logged in
	pub fn login_landing_path(&self) -> String {
		self.openid
			.landing_path
			.clone()
			.unwrap_or_else(|| String::from(DEFAULT_LOGIN_LANDING_PATH))
	}

	/// Builds the session gate settings, using the default protected paths for anything not configured.
	pub fn gate_config(&self) -> GateConfig {
		let default_config = GateConfig::default();
		let Some(gate) = self.gate.as_ref() else {
			return default_config;
		};
		let prefixes: Vec<String> = if gate.protect.is_empty() {
			default_config.protected_prefixes().to_vec()
		} else {
			gate.protect.iter().map(|protect| protect.prefix.clone()).collect()
		};
		let redirect_to = gate
			.redirect_to
			.clone()
			.unwrap_or_else(|| default_config.redirect_to().to_owned());
		GateConfig::new(prefixes, redirect_to)
	}

	fn check(&self) -> Result<()> {
		if let Some(secret) = self.session_secret.as_ref() {
			if secret.len() < MIN_SESSION_SECRET_LENGTH {
				return Err(miette::miette!(
					"The session secret must be at least {} bytes long",
					MIN_SESSION_SECRET_LENGTH
				));
			}
		}
		if let Some(landing_path) = self.openid.landing_path.as_ref() {
			if !landing_path.starts_with('/') {
				return Err(miette::miette!(
					"Login landing path \"{}\" must start with a slash",
					landing_path
				));
			}
		}
		if let Some(gate) = self.gate.as_ref() {
			for protect in gate.protect.iter() {
				if !protect.prefix.starts_with('/') {
					return Err(miette::miette!(
						"Protected path \"{}\" must start with a slash",
						protect.prefix
					));
				}
			}
		}
		Ok(())
	}
}

pub fn parse_config(config_path: &str) -> Result<ConfigDocument> {
	let config_file_contents = fs::read_to_string(config_path).into_diagnostic()?;
	parse_config_text(config_path, &config_file_contents)
}

fn parse_config_text(file_name: &str, contents: &str) -> Result<ConfigDocument> {
	let config: ConfigDocument = knuffel::parse(file_name, contents)?;
	config.check()?;
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE_CONFIG: &str = r#"
		database {
			host "localhost"
			username "events"
			password "secret"
			database "events"
		}
		openid {
			issuer_url "https://login.example.com/"
			client_id "event-settings"
			client_secret "client-secret"
			redirect_url "http://localhost:8080/callback"
		}
	"#;

	#[test]
	fn minimal_config_uses_defaults() {
		let config = parse_config_text("config.kdl", BASE_CONFIG).unwrap();
		assert_eq!(config.listen_addr(), DEFAULT_LISTEN_ADDR);
		assert_eq!(config.static_dir(), DEFAULT_STATIC_DIR);
		assert_eq!(config.database.port, None);
		assert_eq!(config.session_secret().len(), 64);
		assert_eq!(config.login_landing_path(), "/dashboard");

		let gate = config.gate_config();
		assert!(gate.is_protected("/dashboard"));
		assert!(gate.is_protected("/event/abc"));
		assert_eq!(gate.redirect_to(), "/login");
	}

	#[test]
	fn gate_block_overrides_defaults() {
		let text = format!(
			"{}\ngate {{\n\tprotect \"/admin\"\n\tredirect_to \"/signin\"\n}}\nlisten_addr \"0.0.0.0:9000\"",
			BASE_CONFIG
		);
		let config = parse_config_text("config.kdl", &text).unwrap();
		assert_eq!(config.listen_addr(), "0.0.0.0:9000");

		let gate = config.gate_config();
		assert!(gate.is_protected("/admin/users"));
		assert!(!gate.is_protected("/dashboard"));
		assert_eq!(gate.redirect_to(), "/signin");
	}

	#[test]
	fn landing_path_can_be_configured() {
		let text = BASE_CONFIG.replace(
			"redirect_url \"http://localhost:8080/callback\"",
			"redirect_url \"http://localhost:8080/callback\"\n\t\t\tlanding_path \"/event\"",
		);
		let config = parse_config_text("config.kdl", &text).unwrap();
		assert_eq!(config.login_landing_path(), "/event");

		let text = BASE_CONFIG.replace(
			"redirect_url \"http://localhost:8080/callback\"",
			"redirect_url \"http://localhost:8080/callback\"\n\t\t\tlanding_path \"event\"",
		);
		assert!(parse_config_text("config.kdl", &text).is_err());
	}

	#[test]
	fn short_session_secret_is_rejected() {
		let text = format!("{}\nsession_secret \"too-short\"", BASE_CONFIG);
		assert!(parse_config_text("config.kdl", &text).is_err());
	}

	#[test]
	fn relative_protected_path_is_rejected() {
		let text = format!("{}\ngate {{\n\tprotect \"dashboard\"\n}}", BASE_CONFIG);
		assert!(parse_config_text("config.kdl", &text).is_err());
	}

	#[test]
	fn missing_database_block_is_an_error() {
		assert!(parse_config_text("config.kdl", "listen_addr \"127.0.0.1:8080\"").is_err());
	}
}
