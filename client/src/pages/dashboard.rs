// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::state::AppState;
use sycamore::prelude::*;

#[component]
pub fn DashboardView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating dashboard page");

	let app_state: &AppState = use_context(ctx);
	let events = create_memo(ctx, || (*app_state.events().get()).clone());
	let events_loaded = create_memo(ctx, || *app_state.events_loaded().get());

	view! {
		ctx,
		h1 { "Events" }
		(if !*events_loaded.get() {
			view! { ctx, p { "Loading events..." } }
		} else if events.get().is_empty() {
			view! { ctx, p { "There are no events yet." } }
		} else {
			view! {
				ctx,
				ul(id="event_list") {
					Keyed(
						iterable=events,
						key=|event| event.id.clone(),
						view=|ctx, event| {
							let event_link = format!("/event/{}", event.id);
							view! {
								ctx,
								li {
									a(href=event_link) { (event.name) }
								}
							}
						}
					)
				}
			}
		})
		p {
			a(href="/logout", rel="external") { "Log out" }
		}
	}
}
