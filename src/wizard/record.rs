//! The registration record: one struct per step, all owned by the wizard

use std::str::FromStr;

use super::attachment::Attachment;
use super::choices::*;
use super::field::{Field, FieldKind};
use crate::{OnboardError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonalSection {
    pub salutation: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub nationality: String,
    pub dob: String,
    pub photo: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSection {
    pub contact_number: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationSection {
    pub relation_type: Option<RelationType>,
    pub relation_name: String,
    pub alt_number: String,
    pub alt_number_type: Option<AltNumberType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressSection {
    pub country: Option<Country>,
    pub state: String,
    pub district: String,
    pub block: String,
    pub village: String,
    pub pincode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfessionalSection {
    pub education: Option<EducationLevel>,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankSection {
    pub bank_name: String,
    pub account_number: String,
    pub branch_name: String,
    pub ifsc_code: String,
    pub passbook: Option<Attachment>,
}

/// Number and scan of an identity document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentDetails {
    pub number: String,
    pub file: Option<Attachment>,
}

/// The active identity document. Exactly one variant exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    VoterId(DocumentDetails),
    Aadhar(DocumentDetails),
    Pan(DocumentDetails),
    Ppb(DocumentDetails),
}

impl Document {
    pub fn new(document_type: DocumentType, details: DocumentDetails) -> Self {
        match document_type {
            DocumentType::VoterId => Document::VoterId(details),
            DocumentType::Aadhar => Document::Aadhar(details),
            DocumentType::Pan => Document::Pan(details),
            DocumentType::Ppb => Document::Ppb(details),
        }
    }

    pub fn document_type(&self) -> DocumentType {
        match self {
            Document::VoterId(_) => DocumentType::VoterId,
            Document::Aadhar(_) => DocumentType::Aadhar,
            Document::Pan(_) => DocumentType::Pan,
            Document::Ppb(_) => DocumentType::Ppb,
        }
    }

    pub fn details(&self) -> &DocumentDetails {
        match self {
            Document::VoterId(d) | Document::Aadhar(d) | Document::Pan(d) | Document::Ppb(d) => d,
        }
    }

    pub fn details_mut(&mut self) -> &mut DocumentDetails {
        match self {
            Document::VoterId(d) | Document::Aadhar(d) | Document::Pan(d) | Document::Ppb(d) => d,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentsSection {
    pub document: Option<Document>,
}

impl DocumentsSection {
    pub fn document_type(&self) -> Option<DocumentType> {
        self.document.as_ref().map(Document::document_type)
    }

    /// Activate a document type. Returns the previously active type when it
    /// changed; re-selecting the active type keeps its details.
    pub fn select(&mut self, document_type: DocumentType) -> Option<Option<DocumentType>> {
        let previous = self.document_type();
        if previous == Some(document_type) {
            return None;
        }
        self.document = Some(Document::new(document_type, DocumentDetails::default()));
        Some(previous)
    }

    pub fn clear(&mut self) -> Option<DocumentType> {
        self.document.take().map(|d| d.document_type())
    }

    /// Details of `document_type`, if it is the active one
    pub fn details_for(&self, document_type: DocumentType) -> Option<&DocumentDetails> {
        self.document
            .as_ref()
            .filter(|d| d.document_type() == document_type)
            .map(Document::details)
    }

    fn details_for_mut(&mut self, document_type: DocumentType) -> Result<&mut DocumentDetails> {
        match self.document.as_mut() {
            Some(document) if document.document_type() == document_type => {
                Ok(document.details_mut())
            }
            _ => Err(OnboardError::InactiveDocument(document_type.as_str().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleSection {
    pub role: Option<Role>,
    pub access_status: Option<AccessStatus>,
}

/// Read view of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Wire key of the selected option
    Choice(Option<&'static str>),
    Attachment(Option<&'a Attachment>),
}

/// Everything the wizard collects, grouped by step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationRecord {
    pub personal: PersonalSection,
    pub contact: ContactSection,
    pub relation: RelationSection,
    pub address: AddressSection,
    pub professional: ProfessionalSection,
    pub bank: BankSection,
    pub documents: DocumentsSection,
    pub role: RoleSection,
}

impl RegistrationRecord {
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Salutation => FieldValue::Text(&self.personal.salutation),
            Field::FirstName => FieldValue::Text(&self.personal.first_name),
            Field::MiddleName => FieldValue::Text(&self.personal.middle_name),
            Field::LastName => FieldValue::Text(&self.personal.last_name),
            Field::Gender => FieldValue::Text(&self.personal.gender),
            Field::Nationality => FieldValue::Text(&self.personal.nationality),
            Field::Dob => FieldValue::Text(&self.personal.dob),
            Field::Photo => FieldValue::Attachment(self.personal.photo.as_ref()),
            Field::ContactNumber => FieldValue::Text(&self.contact.contact_number),
            Field::Email => FieldValue::Text(&self.contact.email),
            Field::RelationType => {
                FieldValue::Choice(self.relation.relation_type.map(|v| v.as_str()))
            }
            Field::RelationName => FieldValue::Text(&self.relation.relation_name),
            Field::AltNumber => FieldValue::Text(&self.relation.alt_number),
            Field::AltNumberType => {
                FieldValue::Choice(self.relation.alt_number_type.map(|v| v.as_str()))
            }
            Field::Country => FieldValue::Choice(self.address.country.map(|v| v.as_str())),
            Field::State => FieldValue::Text(&self.address.state),
            Field::District => FieldValue::Text(&self.address.district),
            Field::Block => FieldValue::Text(&self.address.block),
            Field::Village => FieldValue::Text(&self.address.village),
            Field::Pincode => FieldValue::Text(&self.address.pincode),
            Field::Education => {
                FieldValue::Choice(self.professional.education.map(|v| v.as_str()))
            }
            Field::Experience => FieldValue::Text(&self.professional.experience),
            Field::BankName => FieldValue::Text(&self.bank.bank_name),
            Field::AccountNumber => FieldValue::Text(&self.bank.account_number),
            Field::BranchName => FieldValue::Text(&self.bank.branch_name),
            Field::IfscCode => FieldValue::Text(&self.bank.ifsc_code),
            Field::Passbook => FieldValue::Attachment(self.bank.passbook.as_ref()),
            Field::DocumentType => {
                FieldValue::Choice(self.documents.document_type().map(|v| v.as_str()))
            }
            Field::DocumentNumber(doc) => FieldValue::Text(
                self.documents
                    .details_for(doc)
                    .map(|d| d.number.as_str())
                    .unwrap_or(""),
            ),
            Field::DocumentFile(doc) => FieldValue::Attachment(
                self.documents.details_for(doc).and_then(|d| d.file.as_ref()),
            ),
            Field::Role => FieldValue::Choice(self.role.role.map(|v| v.as_str())),
            Field::AccessStatus => {
                FieldValue::Choice(self.role.access_status.map(|v| v.as_str()))
            }
        }
    }

    /// Human-readable value for display
    pub fn display(&self, field: Field) -> String {
        match self.value(field) {
            FieldValue::Text(text) => text.to_string(),
            FieldValue::Attachment(attachment) => attachment
                .map(|a| a.file_name().to_string())
                .unwrap_or_default(),
            FieldValue::Choice(None) => String::new(),
            FieldValue::Choice(Some(_)) => {
                let label = match field {
                    Field::RelationType => self.relation.relation_type.map(|v| v.label()),
                    Field::AltNumberType => self.relation.alt_number_type.map(|v| v.label()),
                    Field::Country => self.address.country.map(|v| v.label()),
                    Field::Education => self.professional.education.map(|v| v.label()),
                    Field::DocumentType => self.documents.document_type().map(|v| v.label()),
                    Field::Role => self.role.role.map(|v| v.label()),
                    Field::AccessStatus => self.role.access_status.map(|v| v.label()),
                    _ => None,
                };
                label.unwrap_or_default().to_string()
            }
        }
    }

    /// Write a text or choice field. An empty choice clears the selection.
    pub fn set_text(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Salutation => self.personal.salutation = value.to_string(),
            Field::FirstName => self.personal.first_name = value.to_string(),
            Field::MiddleName => self.personal.middle_name = value.to_string(),
            Field::LastName => self.personal.last_name = value.to_string(),
            Field::Gender => self.personal.gender = value.to_string(),
            Field::Nationality => self.personal.nationality = value.to_string(),
            Field::Dob => self.personal.dob = value.to_string(),
            Field::ContactNumber => self.contact.contact_number = value.to_string(),
            Field::Email => self.contact.email = value.to_string(),
            Field::RelationType => self.relation.relation_type = parse_choice(field, value)?,
            Field::RelationName => self.relation.relation_name = value.to_string(),
            Field::AltNumber => self.relation.alt_number = value.to_string(),
            Field::AltNumberType => self.relation.alt_number_type = parse_choice(field, value)?,
            Field::Country => self.address.country = parse_choice(field, value)?,
            Field::State => self.address.state = value.to_string(),
            Field::District => self.address.district = value.to_string(),
            Field::Block => self.address.block = value.to_string(),
            Field::Village => self.address.village = value.to_string(),
            Field::Pincode => self.address.pincode = value.to_string(),
            Field::Education => self.professional.education = parse_choice(field, value)?,
            Field::Experience => self.professional.experience = value.to_string(),
            Field::BankName => self.bank.bank_name = value.to_string(),
            Field::AccountNumber => self.bank.account_number = value.to_string(),
            Field::BranchName => self.bank.branch_name = value.to_string(),
            Field::IfscCode => self.bank.ifsc_code = value.to_string(),
            Field::DocumentType => match parse_choice::<DocumentType>(field, value)? {
                Some(document_type) => {
                    self.documents.select(document_type);
                }
                None => {
                    self.documents.clear();
                }
            },
            Field::DocumentNumber(doc) => {
                self.documents.details_for_mut(doc)?.number = value.to_string()
            }
            Field::Role => self.role.role = parse_choice(field, value)?,
            Field::AccessStatus => self.role.access_status = parse_choice(field, value)?,
            Field::Photo | Field::Passbook | Field::DocumentFile(_) => {
                return Err(OnboardError::AttachmentField(field.key()))
            }
        }
        Ok(())
    }

    /// Mutable access to an attachment slot
    pub fn attachment_slot(&mut self, field: Field) -> Result<&mut Option<Attachment>> {
        match field {
            Field::Photo => Ok(&mut self.personal.photo),
            Field::Passbook => Ok(&mut self.bank.passbook),
            Field::DocumentFile(doc) => Ok(&mut self.documents.details_for_mut(doc)?.file),
            other => {
                debug_assert_ne!(other.kind(), FieldKind::Attachment);
                Err(OnboardError::NotAnAttachment(other.key()))
            }
        }
    }
}

fn parse_choice<T: FromStr>(field: Field, value: &str) -> Result<Option<T>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| OnboardError::UnknownOption {
            field: field.key(),
            value: value.to_string(),
        })
}
