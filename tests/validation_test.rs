mod common;

use pretty_assertions::assert_eq;

use fpo_onboard::wizard::validation::{check, is_email, is_ten_digits, validate_record, validate_step};
use fpo_onboard::wizard::{Field, RegistrationRecord, Step};

#[test]
fn test_contact_number_length() {
    assert!(is_ten_digits("1234567890"));
    assert!(!is_ten_digits("123456789"));
    assert!(!is_ten_digits("12345678901"));
    assert!(!is_ten_digits("12345abcde"));
    assert!(!is_ten_digits(""));
}

#[test]
fn test_email_shape() {
    assert!(is_email("a@b.com"));
    assert!(!is_email("a.com"));
    assert!(!is_email("a@b"));
    assert!(!is_email("a b@c.com"));
}

#[test]
fn test_contact_messages() {
    let mut record = RegistrationRecord::default();
    record.contact.contact_number = "123456789".to_string();
    record.contact.email = "a.com".to_string();

    let errors = validate_step(Step::Contact, &record);
    assert_eq!(
        errors.get(Field::ContactNumber),
        Some("Contact number must be exactly 10 digits")
    );
    assert_eq!(errors.get(Field::Email), Some("Enter a valid email address"));

    record.contact.email.clear();
    assert_eq!(
        check(Field::Email, &record).as_deref(),
        Some("Email is required")
    );
}

#[test]
fn test_alt_number_is_optional_but_checked() {
    let mut record = common::complete_record();
    record.relation.alt_number.clear();
    assert!(validate_step(Step::Relation, &record).is_empty());

    record.relation.alt_number = "98765".to_string();
    assert!(validate_step(Step::Relation, &record).contains(Field::AltNumber));
}

#[test]
fn test_whitespace_counts_as_empty() {
    let mut record = common::complete_record();
    record.personal.first_name = "   ".to_string();
    assert_eq!(
        check(Field::FirstName, &record).as_deref(),
        Some("First name is required")
    );
}

#[test]
fn test_unselected_choice_message() {
    let record = RegistrationRecord::default();
    assert_eq!(
        check(Field::RelationType, &record).as_deref(),
        Some("Please select relation type")
    );
}

#[test]
fn test_free_form_steps_pass_empty() {
    let record = RegistrationRecord::default();
    assert!(validate_step(Step::Professional, &record).is_empty());
    assert!(validate_step(Step::Bank, &record).is_empty());

    let address = validate_step(Step::Address, &record);
    assert_eq!(address.len(), 1);
    assert!(address.contains(Field::Country));
}

#[test]
fn test_validate_record_reports_failing_steps_only() {
    let mut record = common::complete_record();
    assert!(validate_record(&record).is_empty());

    record.contact.email = "nope".to_string();
    record.role.role = None;
    let report = validate_record(&record);
    assert_eq!(report.keys().copied().collect::<Vec<_>>(), vec![Step::Contact, Step::Role]);
}

#[test]
fn test_errors_serialize_by_field_key() {
    let mut record = RegistrationRecord::default();
    record.contact.contact_number = "1".to_string();
    record.contact.email = "x@y.org".to_string();

    let errors = validate_step(Step::Contact, &record);
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "contactNumber": "Contact number must be exactly 10 digits" })
    );
}
