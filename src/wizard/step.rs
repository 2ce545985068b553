use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::Field;
use super::record::RegistrationRecord;

/// One screen of the wizard. Navigation is strictly adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Personal,
    Contact,
    Relation,
    Address,
    Professional,
    Bank,
    Documents,
    Role,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Personal,
        Step::Contact,
        Step::Relation,
        Step::Address,
        Step::Professional,
        Step::Bank,
        Step::Documents,
        Step::Role,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(&self) -> bool {
        *self == Step::Personal
    }

    pub fn is_last(&self) -> bool {
        *self == Step::Role
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Details",
            Step::Contact => "Contact",
            Step::Relation => "Relation",
            Step::Address => "Address",
            Step::Professional => "Professional",
            Step::Bank => "Bank Details",
            Step::Documents => "Documents",
            Step::Role => "Role & Access",
        }
    }

    /// Fields shown on this step, in display order.
    ///
    /// The documents step depends on which document type is selected.
    pub fn fields(&self, record: &RegistrationRecord) -> Vec<Field> {
        match self {
            Step::Personal => vec![
                Field::Salutation,
                Field::FirstName,
                Field::MiddleName,
                Field::LastName,
                Field::Gender,
                Field::Nationality,
                Field::Dob,
                Field::Photo,
            ],
            Step::Contact => vec![Field::ContactNumber, Field::Email],
            Step::Relation => vec![
                Field::RelationType,
                Field::RelationName,
                Field::AltNumber,
                Field::AltNumberType,
            ],
            Step::Address => vec![
                Field::Country,
                Field::State,
                Field::District,
                Field::Block,
                Field::Village,
                Field::Pincode,
            ],
            Step::Professional => vec![Field::Education, Field::Experience],
            Step::Bank => vec![
                Field::BankName,
                Field::AccountNumber,
                Field::BranchName,
                Field::IfscCode,
                Field::Passbook,
            ],
            Step::Documents => {
                let mut fields = vec![Field::DocumentType];
                if let Some(document_type) = record.documents.document_type() {
                    fields.push(Field::DocumentNumber(document_type));
                    fields.push(Field::DocumentFile(document_type));
                }
                fields
            }
            Step::Role => vec![Field::Role, Field::AccessStatus],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.title(), self.index() + 1, Self::COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_navigation() {
        assert_eq!(Step::Personal.next(), Some(Step::Contact));
        assert_eq!(Step::Role.next(), None);
        assert_eq!(Step::Personal.previous(), None);
        assert_eq!(Step::Role.previous(), Some(Step::Documents));
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn documents_step_follows_selection() {
        use crate::wizard::DocumentType;

        let mut record = RegistrationRecord::default();
        assert_eq!(Step::Documents.fields(&record), vec![Field::DocumentType]);

        record.documents.select(DocumentType::Pan);
        assert_eq!(
            Step::Documents.fields(&record),
            vec![
                Field::DocumentType,
                Field::DocumentNumber(DocumentType::Pan),
                Field::DocumentFile(DocumentType::Pan),
            ]
        );
    }

    #[test]
    fn display_shows_position() {
        assert_eq!(Step::Bank.to_string(), "Bank Details (6/8)");
    }
}
