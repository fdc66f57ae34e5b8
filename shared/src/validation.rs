// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::event_form::{EventForm, FormErrors, FormField};
use url::Url;

pub const MAX_EVENT_NAME_LENGTH: usize = 100;
pub const MAX_CONTACT_NAME_LENGTH: usize = 50;
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Checks every field of the form. The returned errors contain a message for each field that failed.
pub fn validate_event_form(form: &EventForm) -> FormErrors {
	let mut errors = FormErrors::new();
	for field in FormField::ALL {
		if let Err(message) = validate_field(field, form.field(field)) {
			errors.insert(field, message);
		}
	}
	errors
}

/// Checks a single field value, returning the message to show next to the input when it's invalid.
pub fn validate_field(field: FormField, value: &str) -> Result<(), String> {
	if value.trim().is_empty() {
		return Err(String::from("This field is required"));
	}
	match field {
		FormField::Name => check_length(value, MAX_EVENT_NAME_LENGTH),
		FormField::HpUrl => check_homepage_url(value),
		FormField::ContactName => check_length(value, MAX_CONTACT_NAME_LENGTH),
		FormField::ContactEmail => check_email(value),
		FormField::ContactPhone => check_phone(value),
	}
}

fn check_length(value: &str, max_length: usize) -> Result<(), String> {
	if value.chars().count() > max_length {
		Err(format!("Must be at most {} characters", max_length))
	} else {
		Ok(())
	}
}

fn check_homepage_url(value: &str) -> Result<(), String> {
	let invalid = || String::from("Enter a valid URL starting with http:// or https://");
	let url = Url::parse(value).map_err(|_| invalid())?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid());
	}
	match url.host_str() {
		Some(host) if !host.is_empty() => Ok(()),
		_ => Err(invalid()),
	}
}

fn check_email(value: &str) -> Result<(), String> {
	let invalid = || String::from("Enter a valid email address");
	if value.chars().any(char::is_whitespace) {
		return Err(invalid());
	}
	let Some((local, domain)) = value.split_once('@') else {
		return Err(invalid());
	};
	if local.is_empty() || domain.contains('@') || !domain.contains('.') {
		return Err(invalid());
	}
	if domain.split('.').any(|label| label.is_empty()) {
		return Err(invalid());
	}
	Ok(())
}

fn check_phone(value: &str) -> Result<(), String> {
	let invalid = || String::from("Enter a valid phone number");
	let mut digits = 0;
	for (index, c) in value.chars().enumerate() {
		match c {
			'0'..='9' => digits += 1,
			'-' | ' ' | '(' | ')' => (),
			'+' if index == 0 => (),
			_ => return Err(invalid()),
		}
	}
	if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
		Ok(())
	} else {
		Err(invalid())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::messages::events::Contact;

	fn valid_form() -> EventForm {
		EventForm {
			name: String::from("Autumn Festival"),
			hp_url: String::from("https://festival.example.com/2024"),
			contact: Contact {
				name: String::from("Hana Sato"),
				email: String::from("hana@festival.example.com"),
				phone: String::from("+81 90-1234-5678"),
			},
		}
	}

	#[test]
	fn valid_form_has_no_errors() {
		assert!(validate_event_form(&valid_form()).is_empty());
	}

	#[test]
	fn malformed_homepage_url() {
		for url in ["festival.example.com", "ftp://festival.example.com", "https://", "not a url"] {
			let mut form = valid_form();
			form.hp_url = url.to_owned();
			let errors = validate_event_form(&form);
			assert_eq!(errors.len(), 1, "{}", url);
			assert!(errors.get(FormField::HpUrl).is_some(), "{}", url);
		}
	}

	#[test]
	fn required_fields() {
		let errors = validate_event_form(&EventForm::default());
		for field in FormField::ALL {
			assert_eq!(errors.get(field), Some("This field is required"));
		}

		let mut form = valid_form();
		form.contact.name = String::from("   ");
		assert_eq!(validate_event_form(&form).get(FormField::ContactName), Some("This field is required"));
	}

	#[test]
	fn length_limits_count_characters() {
		let mut form = valid_form();
		form.name = "秋".repeat(MAX_EVENT_NAME_LENGTH);
		assert!(validate_event_form(&form).is_empty());
		form.name.push('祭');
		assert!(validate_event_form(&form).get(FormField::Name).is_some());
	}

	#[test]
	fn email_shapes() {
		for email in ["a@b.co", "first.last+tag@mail.example.org"] {
			assert!(validate_field(FormField::ContactEmail, email).is_ok(), "{}", email);
		}
		for email in ["plain", "@example.com", "a@example", "a@b@example.com", "a b@example.com", "a@example..com"] {
			assert!(validate_field(FormField::ContactEmail, email).is_err(), "{}", email);
		}
	}

	#[test]
	fn phone_shapes() {
		for phone in ["0312345678", "090-1234-5678", "(03) 1234 5678", "+1 415 555 0100"] {
			assert!(validate_field(FormField::ContactPhone, phone).is_ok(), "{}", phone);
		}
		for phone in ["12345", "090-1234-567a", "03+1234-5678", "1234567890123456"] {
			assert!(validate_field(FormField::ContactPhone, phone).is_err(), "{}", phone);
		}
	}
}
