mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use fpo_onboard::wizard::{
    Attachment, Country, DocumentType, Field, RegistrationRecord, Role, SubmissionPayload,
    Wizard, WizardOptions,
};

#[test]
fn test_payload_uses_flat_camel_case_keys() {
    let payload = SubmissionPayload::from(&common::complete_record());
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["firstName"], json!("Lakshmi"));
    assert_eq!(value["contactNumber"], json!("9876543210"));
    assert_eq!(value["relationType"], json!("wife-of"));
    assert_eq!(value["altNumberType"], json!("spouse"));
    assert_eq!(value["country"], json!("india"));
    assert_eq!(value["ifscCode"], json!("SBIN0001234"));
    assert_eq!(value["documentType"], json!("ppb"));
    assert_eq!(value["accessStatus"], json!("active"));
    assert!(value.get("photo").is_none());
    assert!(value.get("photoFileName").is_none());
}

#[test]
fn test_new_uploads_carry_metadata_not_bytes() {
    let mut wizard = common::completed_wizard(WizardOptions::standalone());
    wizard.choose_attachment(Field::Photo, common::jpeg("me.jpg")).unwrap();

    let payload = wizard.payload();
    let uploads = payload.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, "photo");
    assert_eq!(uploads[0].1.bytes.len(), 4);

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["photoFileName"], json!("me.jpg"));
    assert_eq!(value["photo"]["contentType"], json!("image/jpeg"));
    assert!(value["photo"].get("bytes").is_none());
}

#[test]
fn test_only_active_document_is_sent() {
    let mut wizard = Wizard::new(WizardOptions::standalone());
    common::walk_to_last_step(&mut wizard);
    wizard.previous().unwrap();

    wizard.input(Field::DocumentType, "pan").unwrap();
    wizard
        .input(Field::DocumentNumber(DocumentType::Pan), "ABCDE1234F")
        .unwrap();
    wizard
        .choose_attachment(Field::DocumentFile(DocumentType::Pan), common::jpeg("pan.jpg"))
        .unwrap();
    wizard.input(Field::DocumentType, "aadhar").unwrap();

    let payload = wizard.payload();
    assert_eq!(payload.document_type, Some(DocumentType::Aadhar));
    assert_eq!(payload.document_number, "");
    assert_eq!(payload.document_file_name, None);
}

#[test]
fn test_reselecting_same_document_keeps_details() {
    let mut wizard = Wizard::new(WizardOptions::standalone());
    wizard.input(Field::DocumentType, "voter-id").unwrap();
    wizard
        .input(Field::DocumentNumber(DocumentType::VoterId), "ABC1234567")
        .unwrap();
    wizard.input(Field::DocumentType, "Voter ID").unwrap();

    assert_eq!(wizard.payload().document_number, "ABC1234567");
}

#[test]
fn test_existing_record_prefills_references() {
    let existing: SubmissionPayload = serde_json::from_value(json!({
        "firstName": "Ravi",
        "lastName": "Kumar",
        "country": "india",
        "role": "manager",
        "documentType": "aadhar",
        "documentNumber": "123412341234",
        "documentFileName": "aadhar.pdf",
        "photoFileName": "x.jpg",
        "passbookFileName": "  "
    }))
    .unwrap();

    let record = RegistrationRecord::from_existing(existing);
    assert_eq!(record.personal.first_name, "Ravi");
    assert_eq!(record.address.country, Some(Country::India));
    assert_eq!(record.role.role, Some(Role::Manager));
    assert_eq!(
        record.personal.photo,
        Some(Attachment::Reference("x.jpg".to_string()))
    );
    assert_eq!(record.bank.passbook, None);

    let details = record.documents.details_for(DocumentType::Aadhar).unwrap();
    assert_eq!(details.number, "123412341234");
    assert_eq!(details.file, Some(Attachment::Reference("aadhar.pdf".to_string())));

    let payload = SubmissionPayload::from(&record);
    assert_eq!(payload.photo_file_name.as_deref(), Some("x.jpg"));
    assert_eq!(payload.document_file_name.as_deref(), Some("aadhar.pdf"));
    assert!(payload.uploads().is_empty());
}
