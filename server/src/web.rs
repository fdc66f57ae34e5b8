// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::session_gate::GateConfig;
use miette::IntoDiagnostic;
use std::path::Path;
use tide::Server;

/// Serves the client application. The pages under the protected paths are all rendered by the client, so each of
/// them gets the client's index page; everything else is looked up in the static directory.
pub fn add_static_routes(app: &mut Server<()>, static_dir: &str, gate_config: &GateConfig) -> miette::Result<()> {
	let index_path = Path::new(static_dir).join("index.html");

	app.at("/").serve_dir(static_dir).into_diagnostic()?;
	app.at("/").serve_file(&index_path).into_diagnostic()?;
	for prefix in gate_config.protected_prefixes() {
		if prefix == "/" {
			continue;
		}
		app.at(prefix).serve_file(&index_path).into_diagnostic()?;
		app.at(&format!("{}/*", prefix)).serve_file(&index_path).into_diagnostic()?;
	}

	Ok(())
}
