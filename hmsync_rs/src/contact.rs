//! Demo-request form.
//!
//! [`validate`] is the schema: five text fields, each with one rule and one
//! human-readable message. [`ContactForm`] is the state behind the form on the
//! page. It keeps the typed values, the inline errors, and runs the submit
//! flow against a [`Notifier`].
//!
//! A successful submission never leaves the page: the visitor sees a
//! confirmation toast and the fields reset.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::notify::Notifier;

pub const NAME_MIN_LEN: usize = 2;
pub const HOSPITAL_NAME_MIN_LEN: usize = 2;
pub const PHONE_MIN_LEN: usize = 10;
pub const MESSAGE_MIN_LEN: usize = 10;

pub const SUBMITTED_TITLE: &str = "Request Submitted!";
pub const SUBMITTED_DESCRIPTION: &str = "We'll get back to you within 24 hours.";

// Lookarounds are not supported by `regex`; the leading-dot and double-dot
// rules are checked separately in `is_valid_email`.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern")
});

/// One of the five form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    HospitalName,
    Phone,
    Message,
}

impl ContactField {
    /// All fields in form order.
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::HospitalName,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Field key as used in markup ids and serialized requests.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::HospitalName => "hospitalName",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name *",
            ContactField::Email => "Email Address *",
            ContactField::HospitalName => "Hospital Name *",
            ContactField::Phone => "Phone Number *",
            ContactField::Message => "Message *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Dr. John Smith",
            ContactField::Email => "john@hospital.com",
            ContactField::HospitalName => "City General Hospital",
            ContactField::Phone => "+1 (555) 123-4567",
            ContactField::Message => "Tell us about your hospital and what you're looking for...",
        }
    }

    /// `data-testid` of the input element.
    pub fn test_id(self) -> &'static str {
        match self {
            ContactField::Name => "input-name",
            ContactField::Email => "input-email",
            ContactField::HospitalName => "input-hospital",
            ContactField::Phone => "input-phone",
            ContactField::Message => "input-message",
        }
    }

    /// HTML input type for single-line fields.
    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "tel",
            _ => "text",
        }
    }

    /// Error message shown when the field fails its rule.
    pub fn error_message(self) -> &'static str {
        match self {
            ContactField::Name => "Name must be at least 2 characters",
            ContactField::Email => "Invalid email address",
            ContactField::HospitalName => "Hospital name is required",
            ContactField::Phone => "Valid phone number required",
            ContactField::Message => "Message must be at least 10 characters",
        }
    }

    /// Check one raw value against this field's rule.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            ContactField::Name => utf16_len(value) >= NAME_MIN_LEN,
            ContactField::Email => is_valid_email(value),
            ContactField::HospitalName => utf16_len(value) >= HOSPITAL_NAME_MIN_LEN,
            ContactField::Phone => utf16_len(value) >= PHONE_MIN_LEN,
            ContactField::Message => utf16_len(value) >= MESSAGE_MIN_LEN,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Length in UTF-16 code units, the unit browsers report for input values.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Email grammar check.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// A demo request as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub hospital_name: String,
    pub phone: String,
    pub message: String,
}

impl ContactRequest {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::HospitalName => &self.hospital_name,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::HospitalName => &mut self.hospital_name,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Inline errors keyed by field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    fn set(&mut self, field: ContactField, ok: bool) {
        if ok {
            self.0.remove(&field);
        } else {
            self.0.insert(field, field.error_message());
        }
    }
}

/// Validate every field. All offending fields are reported, not just the first.
pub fn validate(request: &ContactRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in ContactField::ALL {
        errors.set(field, field.accepts(request.get(field)));
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Result of [`ContactForm::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// State behind the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactRequest,
    errors: FieldErrors,
    submit_attempted: bool,
}

impl ContactForm {
    pub fn values(&self) -> &ContactRequest {
        &self.values
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Update one field. After the first submit attempt the field is
    /// re-validated on every change so its error tracks the input.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        if self.submit_attempted {
            self.errors.set(field, field.accepts(&value));
        }
        *self.values.slot(field) = value;
    }

    /// Validate and, on success, confirm through `notifier` and reset.
    ///
    /// On failure every offending field gets its message and all values are
    /// kept as typed. No notification is shown.
    pub fn submit<N: Notifier + ?Sized>(&mut self, notifier: &mut N) -> SubmitOutcome {
        self.submit_attempted = true;
        match validate(&self.values) {
            Ok(()) => {
                debug!(
                    hospital = %self.values.hospital_name,
                    email = %self.values.email,
                    "demo request accepted"
                );
                notifier.notify(SUBMITTED_TITLE, SUBMITTED_DESCRIPTION);
                self.reset();
                SubmitOutcome::Accepted
            }
            Err(errors) => {
                debug!(invalid = errors.len(), "demo request rejected");
                self.errors = errors;
                SubmitOutcome::Rejected
            }
        }
    }

    /// Clear values, errors and the submitted flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
