/// Screen modules for the registration wizard
pub mod step;
pub mod success;
