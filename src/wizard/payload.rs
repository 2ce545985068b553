//! The composite payload handed to the submitter.
//!
//! Flat camelCase keys, the shape the dashboard backend stores. Each
//! attachment slot `x` has `x` (a new upload, when one was chosen) and
//! `xFileName` (the effective file name, new or retained). The same shape
//! pre-fills the wizard in edit mode.

use serde::{Deserialize, Serialize};

use super::attachment::{Attachment, FileHandle};
use super::choices::*;
use super::record::*;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionPayload {
    // Personal
    pub salutation: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub nationality: String,
    pub dob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<FileHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_file_name: Option<String>,

    // Contact
    pub contact_number: String,
    pub email: String,

    // Relation
    pub relation_type: Option<RelationType>,
    pub relation_name: String,
    pub alt_number: String,
    pub alt_number_type: Option<AltNumberType>,

    // Address
    pub country: Option<Country>,
    pub state: String,
    pub district: String,
    pub block: String,
    pub village: String,
    pub pincode: String,

    // Professional
    pub education: Option<EducationLevel>,
    pub experience: String,

    // Bank
    pub bank_name: String,
    pub account_number: String,
    pub branch_name: String,
    pub ifsc_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passbook: Option<FileHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passbook_file_name: Option<String>,

    // Documents
    pub document_type: Option<DocumentType>,
    pub document_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_file: Option<FileHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_file_name: Option<String>,

    // Role
    pub role: Option<Role>,
    pub access_status: Option<AccessStatus>,
}

impl SubmissionPayload {
    /// New uploads keyed by their multipart part name
    pub fn uploads(&self) -> Vec<(&'static str, &FileHandle)> {
        [
            ("photo", self.photo.as_ref()),
            ("passbook", self.passbook.as_ref()),
            ("documentFile", self.document_file.as_ref()),
        ]
        .into_iter()
        .filter_map(|(part, handle)| handle.map(|h| (part, h)))
        .collect()
    }
}

fn split(attachment: Option<&Attachment>) -> (Option<FileHandle>, Option<String>) {
    match attachment {
        Some(attachment) => (
            attachment.new_file().cloned(),
            Some(attachment.file_name().to_string()),
        ),
        None => (None, None),
    }
}

impl From<&RegistrationRecord> for SubmissionPayload {
    fn from(record: &RegistrationRecord) -> Self {
        let (photo, photo_file_name) = split(record.personal.photo.as_ref());
        let (passbook, passbook_file_name) = split(record.bank.passbook.as_ref());
        let document = record.documents.document.as_ref();
        let (document_file, document_file_name) =
            split(document.and_then(|d| d.details().file.as_ref()));

        Self {
            salutation: record.personal.salutation.clone(),
            first_name: record.personal.first_name.clone(),
            middle_name: record.personal.middle_name.clone(),
            last_name: record.personal.last_name.clone(),
            gender: record.personal.gender.clone(),
            nationality: record.personal.nationality.clone(),
            dob: record.personal.dob.clone(),
            photo,
            photo_file_name,
            contact_number: record.contact.contact_number.clone(),
            email: record.contact.email.clone(),
            relation_type: record.relation.relation_type,
            relation_name: record.relation.relation_name.clone(),
            alt_number: record.relation.alt_number.clone(),
            alt_number_type: record.relation.alt_number_type,
            country: record.address.country,
            state: record.address.state.clone(),
            district: record.address.district.clone(),
            block: record.address.block.clone(),
            village: record.address.village.clone(),
            pincode: record.address.pincode.clone(),
            education: record.professional.education,
            experience: record.professional.experience.clone(),
            bank_name: record.bank.bank_name.clone(),
            account_number: record.bank.account_number.clone(),
            branch_name: record.bank.branch_name.clone(),
            ifsc_code: record.bank.ifsc_code.clone(),
            passbook,
            passbook_file_name,
            document_type: document.map(Document::document_type),
            document_number: document
                .map(|d| d.details().number.clone())
                .unwrap_or_default(),
            document_file,
            document_file_name,
            role: record.role.role,
            access_status: record.role.access_status,
        }
    }
}

impl RegistrationRecord {
    /// Pre-fill from an existing record. Attachments become references to
    /// the stored file names; uploads in the input are not carried over.
    pub fn from_existing(existing: SubmissionPayload) -> Self {
        let reference = |name: Option<String>| {
            name.filter(|n| !n.trim().is_empty())
                .map(Attachment::Reference)
        };

        let document = existing.document_type.map(|document_type| {
            Document::new(
                document_type,
                DocumentDetails {
                    number: existing.document_number,
                    file: reference(existing.document_file_name),
                },
            )
        });

        Self {
            personal: PersonalSection {
                salutation: existing.salutation,
                first_name: existing.first_name,
                middle_name: existing.middle_name,
                last_name: existing.last_name,
                gender: existing.gender,
                nationality: existing.nationality,
                dob: existing.dob,
                photo: reference(existing.photo_file_name),
            },
            contact: ContactSection {
                contact_number: existing.contact_number,
                email: existing.email,
            },
            relation: RelationSection {
                relation_type: existing.relation_type,
                relation_name: existing.relation_name,
                alt_number: existing.alt_number,
                alt_number_type: existing.alt_number_type,
            },
            address: AddressSection {
                country: existing.country,
                state: existing.state,
                district: existing.district,
                block: existing.block,
                village: existing.village,
                pincode: existing.pincode,
            },
            professional: ProfessionalSection {
                education: existing.education,
                experience: existing.experience,
            },
            bank: BankSection {
                bank_name: existing.bank_name,
                account_number: existing.account_number,
                branch_name: existing.branch_name,
                ifsc_code: existing.ifsc_code,
                passbook: reference(existing.passbook_file_name),
            },
            documents: DocumentsSection { document },
            role: RoleSection {
                role: existing.role,
                access_status: existing.access_status,
            },
        }
    }
}
