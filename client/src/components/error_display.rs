// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::state::AppState;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Shows the errors reported anywhere in the application
#[component]
pub fn ErrorDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let app_state: &AppState = use_context(ctx);
	let errors = create_memo(ctx, || (*app_state.errors().get()).clone());

	view! {
		ctx,
		ul(id="page_errors") {
			Indexed(
				iterable=errors,
				view=|ctx, error| {
					let dismiss_handler = {
						let error = error.clone();
						move |_event: WebEvent| {
							let app_state: &AppState = use_context(ctx);
							app_state.dismiss_error(&error);
						}
					};
					error.to_view(ctx, dismiss_handler)
				}
			)
		}
	}
}
