// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::HttpEventApi;
use crate::errors::ErrorData;
use crate::state::AppState;
use event_settings_shared::messages::event_form::FormField;
use event_settings_shared::messages::events::Event;
use event_settings_shared::settings_panel::{submit_event_changes, PanelState, SubmitOutcome};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

#[derive(Prop)]
pub struct EventSettingsPanelProps<'a> {
	selected_event: &'a ReadSignal<Option<Event>>,
}

#[component]
pub fn EventSettingsPanel<'a, G: Html>(ctx: Scope<'a>, props: EventSettingsPanelProps<'a>) -> View<G> {
	let app_state: &AppState = use_context(ctx);
	let selected_event = props.selected_event;
	let panel = create_signal(ctx, PanelState::new((*selected_event.get_untracked()).as_ref()));

	// While the user isn't editing, the fields follow the selected event.
	create_effect(ctx, move || {
		let selected = selected_event.get();
		if !panel.get_untracked().is_editable() {
			panel.set(PanelState::new((*selected).as_ref()));
		}
	});

	let is_editable = create_memo(ctx, || panel.get().is_editable());

	let edit_handler = move |_event: WebEvent| {
		log::debug!("Entering edit mode for event settings");
		let selected = selected_event.get_untracked();
		panel.modify().enter_edit((*selected).as_ref());
	};

	let cancel_handler = move |_event: WebEvent| {
		log::debug!("Cancelling event settings changes");
		let selected = selected_event.get_untracked();
		panel.modify().cancel((*selected).as_ref());
	};

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		let selected = selected_event.get_untracked();
		let plan = panel.modify().begin_submit((*selected).as_ref());

		spawn_local_scoped(ctx, async move {
			let apply = |updated: Event| app_state.apply_event_update(updated);
			match submit_event_changes(plan, &HttpEventApi, apply).await {
				Ok(SubmitOutcome::Invalid(errors)) => {
					log::debug!("Event settings form has {} invalid fields", errors.len());
				}
				Ok(SubmitOutcome::NoSelection) => log::debug!("No event is selected; nothing to save"),
				Ok(SubmitOutcome::Unchanged) => log::debug!("Event settings are unchanged; not sending an update"),
				Ok(SubmitOutcome::Updated(updated)) => log::debug!("Saved settings for event {}", updated.id),
				Err(error) => {
					log::error!("Failed to save event settings: {}", error);
					app_state.report_error(ErrorData::new_with_error("Failed to save the event settings.", error));
				}
			}
		});
	};

	let fields = View::new_fragment(
		FormField::ALL
			.iter()
			.map(|field| {
				let field = *field;
				view! { ctx, EventEditFormInput(field=field, panel=panel) }
			})
			.collect(),
	);

	view! {
		ctx,
		section(class="event_settings_panel") {
			div(class="event_settings_panel_header") {
				h2 { "Event settings" }
				button(
					type="button",
					class="event_settings_panel_edit",
					disabled=*is_editable.get(),
					on:click=edit_handler,
					aria-label="Edit the event information"
				) {
					"Edit"
				}
			}
			form(class="event_settings_panel_form", on:submit=submit_handler) {
				(fields)
				(if *is_editable.get() {
					view! {
						ctx,
						div(class="event_settings_panel_actions") {
							button(type="button", on:click=cancel_handler) { "Cancel" }
							button(type="submit", aria-label="Save the event information changes") { "Save" }
						}
					}
				} else {
					view! { ctx, }
				})
			}
		}
	}
}

#[derive(Prop)]
struct EventEditFormInputProps<'a> {
	field: FormField,
	panel: &'a Signal<PanelState>,
}

#[component]
fn EventEditFormInput<'a, G: Html>(ctx: Scope<'a>, props: EventEditFormInputProps<'a>) -> View<G> {
	let field = props.field;
	let panel = props.panel;

	let value = create_memo(ctx, move || panel.get().form().field(field).to_owned());
	let error = create_memo(ctx, move || panel.get().errors().get(field).map(String::from));
	let disabled = create_memo(ctx, move || !panel.get().is_editable());

	let input_handler = move |event: WebEvent| {
		let input = event
			.target()
			.and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
		if let Some(input) = input {
			panel.modify().set_field(field, input.value());
		}
	};

	view! {
		ctx,
		fieldset(class="event_settings_field") {
			label {
				span(class="event_settings_field_label") { (field.label()) }
				input(
					type="text",
					name=field.input_name(),
					prop:value=(*value.get()).clone(),
					disabled=*disabled.get(),
					on:input=input_handler
				)
			}
			(if let Some(message) = (*error.get()).clone() {
				view! {
					ctx,
					p(class="event_settings_field_error") { (message) }
				}
			} else {
				view! { ctx, }
			})
		}
	}
}
