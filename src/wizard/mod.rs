//! Stepwise registration wizard.
//!
//! Eight steps (personal, contact, relation, address, professional, bank,
//! documents, role) over one [`RegistrationRecord`]. `next` validates only
//! the current step; `previous` never validates; `submit` is only reachable
//! from the last step and hands the assembled [`SubmissionPayload`] to a
//! [`Submitter`](crate::submit::Submitter).

pub mod attachment;
pub mod choices;
pub mod field;
pub mod navigator;
pub mod payload;
pub mod record;
pub mod step;
pub mod validation;

pub use attachment::{Attachment, AttachmentView, FileHandle};
pub use choices::{AccessStatus, AltNumberType, Country, DocumentType, EducationLevel, RelationType, Role};
pub use field::{Field, FieldKind};
pub use navigator::{
    CloseReason, Presentation, Status, SubmitOutcome, Transition, Wizard, WizardMode,
    WizardOptions,
};
pub use payload::SubmissionPayload;
pub use record::{Document, DocumentDetails, FieldValue, RegistrationRecord};
pub use step::Step;
pub use validation::FieldErrors;
