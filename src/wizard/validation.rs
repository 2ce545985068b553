//! Per-field validation rules.
//!
//! Identity, contact and document fields are strict. Address, professional
//! and bank fields are free-form and only checked by the backend.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::field::Field;
use super::record::{FieldValue, RegistrationRecord};
use super::step::Step;

static TEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank text or a made selection
    Required,
    TenDigits,
    /// Blank, or exactly ten digits
    OptionalTenDigits,
    Email,
    RequiredAttachment,
}

/// The rule table. Fields without a rule pass through unchecked.
pub fn rule_for(field: Field) -> Option<Rule> {
    use Field::*;
    match field {
        Salutation | Gender | Nationality | LastName | FirstName | MiddleName | Dob => {
            Some(Rule::Required)
        }
        ContactNumber => Some(Rule::TenDigits),
        Email => Some(Rule::Email),
        RelationType | AltNumberType | RelationName => Some(Rule::Required),
        AltNumber => Some(Rule::OptionalTenDigits),
        DocumentType => Some(Rule::Required),
        DocumentNumber(doc) if doc.requires_details() => Some(Rule::Required),
        DocumentFile(doc) if doc.requires_details() => Some(Rule::RequiredAttachment),
        Role | AccessStatus | Country => Some(Rule::Required),
        _ => None,
    }
}

pub fn is_ten_digits(value: &str) -> bool {
    TEN_DIGITS.is_match(value.trim())
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Check one field against its rule, returning the message to show
pub fn check(field: Field, record: &RegistrationRecord) -> Option<String> {
    let rule = rule_for(field)?;
    let value = record.value(field);
    let ok = match (rule, value) {
        (Rule::Required, FieldValue::Text(text)) => !text.trim().is_empty(),
        (Rule::Required, FieldValue::Choice(choice)) => choice.is_some(),
        (Rule::Required | Rule::RequiredAttachment, FieldValue::Attachment(file)) => {
            file.is_some()
        }
        (Rule::TenDigits, FieldValue::Text(text)) => is_ten_digits(text),
        (Rule::OptionalTenDigits, FieldValue::Text(text)) => {
            text.trim().is_empty() || is_ten_digits(text)
        }
        (Rule::Email, FieldValue::Text(text)) => is_email(text),
        _ => true,
    };
    if ok {
        return None;
    }

    let message = match rule {
        Rule::Required | Rule::RequiredAttachment => {
            if value == FieldValue::Choice(None) {
                format!("Please select {}", field.label().to_lowercase())
            } else {
                format!("{} is required", field.label())
            }
        }
        Rule::TenDigits | Rule::OptionalTenDigits => {
            format!("{} must be exactly 10 digits", field.label())
        }
        Rule::Email => {
            if matches!(value, FieldValue::Text(t) if t.trim().is_empty()) {
                format!("{} is required", field.label())
            } else {
                "Enter a valid email address".to_string()
            }
        }
    };
    Some(message)
}

/// Validate the fields of one step only
pub fn validate_step(step: Step, record: &RegistrationRecord) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in step.fields(record) {
        if let Some(message) = check(field, record) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate every step, keyed by step, omitting steps that pass
pub fn validate_record(record: &RegistrationRecord) -> BTreeMap<Step, FieldErrors> {
    Step::ALL
        .iter()
        .map(|step| (*step, validate_step(*step, record)))
        .filter(|(_, errors)| !errors.is_empty())
        .collect()
}

/// Field-level error messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(Field) -> bool) {
        self.0.retain(|field, _| keep(*field));
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field.key(), message))
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(&field.key(), message)?;
        }
        map.end()
    }
}
