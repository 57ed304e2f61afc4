// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod error;
mod format;
mod identifier;
mod observability;
mod stats;
mod validator;

// This is the public API of the library
pub use error::IdentifierError;
pub use format::{
    car_reg, postal_code, region, region_full, PolishCarRegistration, PolishPostalCode,
    PolishRegionCode, PolishRegionName, Voivodeship,
};
pub use identifier::{
    bank_branch, check_control_number, is_pesel, nip, pesel, regon, validate_bank_branch,
    validate_nip, validate_pesel, validate_regon, BirthDate, BirthRecord, ControlNumber,
    PeselValidation, PolishBankBranchChecksum, PolishNationalIdChecksum, PolishNipChecksum,
    PolishRegonChecksum, Sex,
};
pub use observability::labels::Labels;
pub use stats::ValidationMetrics;
pub use validator::{MeteredValidator, PolishValidator, Validator};
