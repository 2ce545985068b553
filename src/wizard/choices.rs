//! Closed option sets offered by the registration form.
//!
//! Every choice serializes as its kebab-case key and renders with a human
//! label. `OPTIONS` lists the values in display order and `KEYS` their wire
//! keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $key)] $variant),+
        }

        impl $name {
            pub const OPTIONS: &'static [$name] = &[$($name::$variant),+];

            /// Wire keys of `OPTIONS`, same order
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Wire key, as sent to the backend
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $name::OPTIONS
                    .iter()
                    .copied()
                    .find(|option| {
                        option.as_str().eq_ignore_ascii_case(s) || option.label().eq_ignore_ascii_case(s)
                    })
                    .ok_or_else(|| s.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice! {
    /// How the employee relates to the named relative
    pub enum RelationType {
        DaughterOf => ("daughter-of", "D/O"),
        SonOf => ("son-of", "S/O"),
        WifeOf => ("wife-of", "W/O"),
    }
}

choice! {
    /// Relationship of the alternate contact to the employee
    pub enum AltNumberType {
        Father => ("father", "Father"),
        Mother => ("mother", "Mother"),
        Spouse => ("spouse", "Spouse"),
        Brother => ("brother", "Brother"),
        Sister => ("sister", "Sister"),
        Son => ("son", "Son"),
        Daughter => ("daughter", "Daughter"),
        Other => ("other", "Other"),
    }
}

choice! {
    pub enum Country {
        India => ("india", "India"),
        Nepal => ("nepal", "Nepal"),
        Bhutan => ("bhutan", "Bhutan"),
        Bangladesh => ("bangladesh", "Bangladesh"),
        SriLanka => ("sri-lanka", "Sri Lanka"),
    }
}

choice! {
    /// Highest completed education tier
    pub enum EducationLevel {
        Primary => ("primary", "Primary"),
        Secondary => ("secondary", "Secondary (10th)"),
        HigherSecondary => ("higher-secondary", "Higher Secondary (12th)"),
        Diploma => ("diploma", "Diploma"),
        Graduate => ("graduate", "Graduate"),
        PostGraduate => ("post-graduate", "Post Graduate"),
    }
}

choice! {
    /// Identity document the employee registers with
    pub enum DocumentType {
        VoterId => ("voter-id", "Voter ID"),
        Aadhar => ("aadhar", "Aadhar"),
        Pan => ("pan", "PAN"),
        Ppb => ("ppb", "PPB"),
    }
}

choice! {
    pub enum Role {
        Manager => ("manager", "Manager"),
        Employee => ("employee", "Employee"),
    }
}

choice! {
    pub enum AccessStatus {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
    }
}

impl DocumentType {
    /// The PPB sub-record is the only one whose number and file are optional
    pub fn requires_details(&self) -> bool {
        !matches!(self, DocumentType::Ppb)
    }

    /// camelCase prefix used for this document's field keys
    pub fn field_prefix(&self) -> &'static str {
        match self {
            DocumentType::VoterId => "voterId",
            DocumentType::Aadhar => "aadhar",
            DocumentType::Pan => "pan",
            DocumentType::Ppb => "ppb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_labels() {
        assert_eq!("son-of".parse::<RelationType>(), Ok(RelationType::SonOf));
        assert_eq!("W/O".parse::<RelationType>(), Ok(RelationType::WifeOf));
        assert_eq!(" Sri Lanka ".parse::<Country>(), Ok(Country::SriLanka));
        assert_eq!("VOTER-ID".parse::<DocumentType>(), Ok(DocumentType::VoterId));
        assert!("cousin".parse::<AltNumberType>().is_err());
    }

    #[test]
    fn option_counts() {
        assert_eq!(RelationType::OPTIONS.len(), 3);
        assert_eq!(AltNumberType::OPTIONS.len(), 8);
        assert_eq!(EducationLevel::OPTIONS.len(), 6);
        assert_eq!(DocumentType::OPTIONS.len(), 4);
    }

    #[test]
    fn keys_follow_options() {
        let keys: Vec<_> = Country::OPTIONS.iter().map(|o| o.as_str()).collect();
        assert_eq!(Country::KEYS, keys.as_slice());
        let keys: Vec<_> = AccessStatus::OPTIONS.iter().map(|o| o.as_str()).collect();
        assert_eq!(AccessStatus::KEYS, keys.as_slice());
    }

    #[test]
    fn serializes_as_kebab_keys() {
        let json = serde_json::to_string(&EducationLevel::HigherSecondary).unwrap();
        assert_eq!(json, "\"higher-secondary\"");
        let back: DocumentType = serde_json::from_str("\"ppb\"").unwrap();
        assert_eq!(back, DocumentType::Ppb);
    }
}
