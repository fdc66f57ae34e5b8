// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::fetch_events;
use crate::components::error_display::ErrorDisplay;
use crate::errors::ErrorData;
use crate::pages::dashboard::DashboardView;
use crate::pages::event_settings::EventSettingsView;
use crate::pages::not_found::NotFoundView;
use crate::pages::start_redirect::StartRedirectView;
use crate::state::AppState;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
enum AppRoutes {
	#[to("/")]
	Index,
	#[to("/dashboard")]
	Dashboard,
	#[to("/event/<id>")]
	Event { id: String },
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let app_state = provide_context(ctx, AppState::new());

	spawn_local_scoped(ctx, async move {
		match fetch_events().await {
			Ok(events) => {
				log::debug!("Loaded {} events", events.len());
				app_state.set_events(events);
			}
			Err(error) => {
				log::error!("Failed to load events: {}", error);
				app_state.set_events_load_failed();
				app_state.report_error(ErrorData::new_with_error("Failed to load the event list.", error));
			}
		}
	});

	view! {
		ctx,
		ErrorDisplay
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					main {
						(match route.get().as_ref() {
							AppRoutes::Index => view! { ctx, StartRedirectView },
							AppRoutes::Dashboard => view! { ctx, DashboardView },
							AppRoutes::Event { id } => {
								let id = id.clone();
								view! { ctx, EventSettingsView(id=id) }
							}
							AppRoutes::NotFound => view! { ctx, NotFoundView },
						})
					}
				}
			}
		)
	}
}
