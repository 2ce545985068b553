use std::fmt;

use super::choices;
use super::step::Step;

/// Every input of the registration form.
///
/// Document fields carry the document type they belong to, so errors raised
/// for one document never outlive a switch to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    // Personal
    Salutation,
    FirstName,
    MiddleName,
    LastName,
    Gender,
    Nationality,
    Dob,
    Photo,
    // Contact
    ContactNumber,
    Email,
    // Relation
    RelationType,
    RelationName,
    AltNumber,
    AltNumberType,
    // Address
    Country,
    State,
    District,
    Block,
    Village,
    Pincode,
    // Professional
    Education,
    Experience,
    // Bank
    BankName,
    AccountNumber,
    BranchName,
    IfscCode,
    Passbook,
    // Documents
    DocumentType,
    DocumentNumber(choices::DocumentType),
    DocumentFile(choices::DocumentType),
    // Role
    Role,
    AccessStatus,
}

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
    Attachment,
}

impl Field {
    pub fn step(&self) -> Step {
        use Field::*;
        match self {
            Salutation | FirstName | MiddleName | LastName | Gender | Nationality | Dob | Photo => {
                Step::Personal
            }
            ContactNumber | Email => Step::Contact,
            RelationType | RelationName | AltNumber | AltNumberType => Step::Relation,
            Country | State | District | Block | Village | Pincode => Step::Address,
            Education | Experience => Step::Professional,
            BankName | AccountNumber | BranchName | IfscCode | Passbook => Step::Bank,
            DocumentType | DocumentNumber(_) | DocumentFile(_) => Step::Documents,
            Role | AccessStatus => Step::Role,
        }
    }

    pub fn kind(&self) -> FieldKind {
        use Field::*;
        match self {
            Photo | Passbook | DocumentFile(_) => FieldKind::Attachment,
            RelationType | AltNumberType | Country | Education | DocumentType | Role
            | AccessStatus => FieldKind::Choice,
            _ => FieldKind::Text,
        }
    }

    /// camelCase key used in payloads and error maps
    pub fn key(&self) -> String {
        use Field::*;
        let key = match self {
            Salutation => "salutation",
            FirstName => "firstName",
            MiddleName => "middleName",
            LastName => "lastName",
            Gender => "gender",
            Nationality => "nationality",
            Dob => "dob",
            Photo => "photo",
            ContactNumber => "contactNumber",
            Email => "email",
            RelationType => "relationType",
            RelationName => "relationName",
            AltNumber => "altNumber",
            AltNumberType => "altNumberType",
            Country => "country",
            State => "state",
            District => "district",
            Block => "block",
            Village => "village",
            Pincode => "pincode",
            Education => "education",
            Experience => "experience",
            BankName => "bankName",
            AccountNumber => "accountNumber",
            BranchName => "branchName",
            IfscCode => "ifscCode",
            Passbook => "passbook",
            DocumentType => "documentType",
            DocumentNumber(doc) => return format!("{}Number", doc.field_prefix()),
            DocumentFile(doc) => return format!("{}File", doc.field_prefix()),
            Role => "role",
            AccessStatus => "accessStatus",
        };
        key.to_string()
    }

    pub fn label(&self) -> String {
        use Field::*;
        let label = match self {
            Salutation => "Salutation",
            FirstName => "First name",
            MiddleName => "Middle name",
            LastName => "Last name",
            Gender => "Gender",
            Nationality => "Nationality",
            Dob => "Date of birth",
            Photo => "Photo",
            ContactNumber => "Contact number",
            Email => "Email",
            RelationType => "Relation type",
            RelationName => "Relation name",
            AltNumber => "Alternate number",
            AltNumberType => "Alternate contact relation",
            Country => "Country",
            State => "State",
            District => "District",
            Block => "Block",
            Village => "Village",
            Pincode => "Pincode",
            Education => "Education",
            Experience => "Experience",
            BankName => "Bank name",
            AccountNumber => "Account number",
            BranchName => "Branch name",
            IfscCode => "IFSC code",
            Passbook => "Passbook",
            DocumentType => "Document type",
            DocumentNumber(doc) => return format!("{} number", doc.label()),
            DocumentFile(doc) => return format!("{} document", doc.label()),
            Role => "Role",
            AccessStatus => "Access status",
        };
        label.to_string()
    }

    /// Wire keys of the options a choice field accepts
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Field::RelationType => choices::RelationType::KEYS,
            Field::AltNumberType => choices::AltNumberType::KEYS,
            Field::Country => choices::Country::KEYS,
            Field::Education => choices::EducationLevel::KEYS,
            Field::DocumentType => choices::DocumentType::KEYS,
            Field::Role => choices::Role::KEYS,
            Field::AccessStatus => choices::AccessStatus::KEYS,
            _ => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::choices::*;

    #[test]
    fn option_lists_match_choice_keys() {
        let relation: Vec<_> = RelationType::OPTIONS.iter().map(|o| o.as_str()).collect();
        assert_eq!(Field::RelationType.options(), relation.as_slice());
        let role: Vec<_> = Role::OPTIONS.iter().map(|o| o.as_str()).collect();
        assert_eq!(Field::Role.options(), role.as_slice());
        assert_eq!(
            Field::Education.options(),
            &[
                "primary",
                "secondary",
                "higher-secondary",
                "diploma",
                "graduate",
                "post-graduate"
            ]
        );
        assert!(Field::FirstName.options().is_empty());
    }

    #[test]
    fn every_field_sits_on_a_step_that_lists_it() {
        let mut record = crate::wizard::RegistrationRecord::default();
        record.documents.select(DocumentType::Aadhar);
        for step in Step::ALL {
            for field in step.fields(&record) {
                assert_eq!(field.step(), step, "{field}");
            }
        }
    }

    #[test]
    fn document_keys_carry_the_type() {
        assert_eq!(Field::DocumentNumber(DocumentType::VoterId).key(), "voterIdNumber");
        assert_eq!(Field::DocumentFile(DocumentType::Ppb).key(), "ppbFile");
        assert_eq!(Field::DocumentNumber(DocumentType::Pan).label(), "PAN number");
    }
}
