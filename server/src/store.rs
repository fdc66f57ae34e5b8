// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::database::DbPool;
use crate::models::{Event as EventDb, EventChanges};
use crate::schema::events;
use diesel::prelude::*;
use event_settings_shared::messages::event_form::EventForm;
use event_settings_shared::messages::events::Event;
use std::fmt;
use tide::utils::async_trait;

#[derive(Debug)]
pub enum StoreError {
	Pool(r2d2::Error),
	Database(diesel::result::Error),
}

impl fmt::Display for StoreError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pool(error) => write!(f, "Failed to get a database connection: {}", error),
			Self::Database(error) => write!(f, "Database query failed: {}", error),
		}
	}
}

impl std::error::Error for StoreError {}

impl From<r2d2::Error> for StoreError {
	fn from(error: r2d2::Error) -> Self {
		Self::Pool(error)
	}
}

impl From<diesel::result::Error> for StoreError {
	fn from(error: diesel::result::Error) -> Self {
		Self::Database(error)
	}
}

/// Persistent storage for events
#[async_trait]
pub trait EventStore: Send + Sync + 'static {
	/// Gets all events, ordered by name
	async fn list_events(&self) -> Result<Vec<Event>, StoreError>;

	/// Overwrites the editable fields of an event. Returns the updated event, or `None` if no event has that ID.
	async fn update_event(&self, id: &str, form: &EventForm) -> Result<Option<Event>, StoreError>;
}

pub struct PgEventStore {
	db_pool: DbPool,
}

impl PgEventStore {
	pub fn new(db_pool: DbPool) -> Self {
		Self { db_pool }
	}
}

#[async_trait]
impl EventStore for PgEventStore {
	async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
		let mut db_connection = self.db_pool.get()?;
		let events: Vec<EventDb> = events::table
			.order((events::name.asc(), events::id.asc()))
			.load(&mut *db_connection)?;
		Ok(events.into_iter().map(|event| event.into()).collect())
	}

	async fn update_event(&self, id: &str, form: &EventForm) -> Result<Option<Event>, StoreError> {
		let mut db_connection = self.db_pool.get()?;
		let event: Option<EventDb> = diesel::update(events::table.find(id))
			.set(EventChanges::from(form))
			.get_result(&mut *db_connection)
			.optional()?;
		Ok(event.map(|event| event.into()))
	}
}
