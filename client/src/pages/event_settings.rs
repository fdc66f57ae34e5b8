// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::event_settings_panel::EventSettingsPanel;
use crate::state::AppState;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct EventSettingsViewProps {
	id: String,
}

#[component]
pub fn EventSettingsView<G: Html>(ctx: Scope<'_>, props: EventSettingsViewProps) -> View<G> {
	log::debug!("Activating settings page for event {}", props.id);

	let app_state: &AppState = use_context(ctx);
	let event_id = props.id;
	let selected_event = create_memo(ctx, move || app_state.find_event(&event_id));
	let events_loaded = create_memo(ctx, || *app_state.events_loaded().get());

	view! {
		ctx,
		h1 {
			(match selected_event.get().as_ref() {
				Some(event) => event.name.clone(),
				None => String::from("Event"),
			})
		}
		(if *events_loaded.get() && selected_event.get().is_none() {
			view! { ctx, p(class="event_settings_missing") { "This event doesn't exist." } }
		} else {
			view! { ctx, }
		})
		EventSettingsPanel(selected_event=selected_event)
		p {
			a(href="/dashboard") { "Back to events" }
		}
	}
}
