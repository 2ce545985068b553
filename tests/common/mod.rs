#![allow(dead_code)]

use fpo_onboard::wizard::{Field, FileHandle, RegistrationRecord, Step, Transition, Wizard, WizardOptions};

/// Inputs that satisfy every rule of a step
pub fn valid_inputs(step: Step) -> Vec<(Field, &'static str)> {
    match step {
        Step::Personal => vec![
            (Field::Salutation, "Mrs"),
            (Field::FirstName, "Lakshmi"),
            (Field::MiddleName, "Devi"),
            (Field::LastName, "Rao"),
            (Field::Gender, "Female"),
            (Field::Nationality, "Indian"),
            (Field::Dob, "1988-04-12"),
        ],
        Step::Contact => vec![
            (Field::ContactNumber, "9876543210"),
            (Field::Email, "lakshmi@example.org"),
        ],
        Step::Relation => vec![
            (Field::RelationType, "wife-of"),
            (Field::RelationName, "Suresh Rao"),
            (Field::AltNumber, "9123456780"),
            (Field::AltNumberType, "spouse"),
        ],
        Step::Address => vec![
            (Field::Country, "india"),
            (Field::State, "Telangana"),
            (Field::District, "Warangal"),
            (Field::Block, "Hanamkonda"),
            (Field::Village, "Kazipet"),
            (Field::Pincode, "506003"),
        ],
        Step::Professional => vec![
            (Field::Education, "graduate"),
            (Field::Experience, "6 years"),
        ],
        Step::Bank => vec![
            (Field::BankName, "State Bank of India"),
            (Field::AccountNumber, "30012345678"),
            (Field::BranchName, "Kazipet"),
            (Field::IfscCode, "SBIN0001234"),
        ],
        Step::Documents => vec![(Field::DocumentType, "ppb")],
        Step::Role => vec![(Field::Role, "employee"), (Field::AccessStatus, "active")],
    }
}

/// Fill the wizard's current step with valid values
pub fn fill_current_step(wizard: &mut Wizard) {
    for (field, value) in valid_inputs(wizard.step()) {
        wizard.input(field, value).unwrap();
    }
}

/// Fill and advance until the wizard sits on the last step, filled in
pub fn walk_to_last_step(wizard: &mut Wizard) {
    while !wizard.step().is_last() {
        fill_current_step(wizard);
        match wizard.next().unwrap() {
            Transition::Advanced(_) => {}
            Transition::Blocked(errors) => panic!("blocked on {}: {}", wizard.step(), errors),
        }
    }
    fill_current_step(wizard);
}

pub fn completed_wizard(options: WizardOptions) -> Wizard {
    let mut wizard = Wizard::new(options);
    walk_to_last_step(&mut wizard);
    wizard
}

/// A record that passes every step
pub fn complete_record() -> RegistrationRecord {
    completed_wizard(WizardOptions::standalone()).record().clone()
}

pub fn jpeg(name: &str) -> FileHandle {
    FileHandle::from_bytes(name, vec![0xff, 0xd8, 0xff, 0xe0])
}
