mod control_number;
mod polish_bank_branch_checksum;
mod polish_national_id_checksum;
mod polish_nip_checksum;
mod polish_regon_checksum;

pub use crate::identifier::control_number::{check_control_number, ControlNumber};
pub use crate::identifier::polish_bank_branch_checksum::{
    bank_branch, validate_bank_branch, PolishBankBranchChecksum,
};
pub use crate::identifier::polish_national_id_checksum::{
    is_pesel, pesel, validate_pesel, BirthDate, BirthRecord, PeselValidation,
    PolishNationalIdChecksum, Sex,
};
pub use crate::identifier::polish_nip_checksum::{nip, validate_nip, PolishNipChecksum};
pub use crate::identifier::polish_regon_checksum::{regon, validate_regon, PolishRegonChecksum};

use crate::IdentifierError;

/// Characters that may be used to group the digits of an identifier.
const SEPARATORS: &[char] = &['-', '/', ' ', '\t', '\n'];

/// Removes separators from `input` and checks that what is left is made of ASCII digits
/// only, with one of the `expected` lengths.
fn sanitize_digits(input: &str, expected: &'static [usize]) -> Result<String, IdentifierError> {
    let digits: String = input.chars().filter(|c| !SEPARATORS.contains(c)).collect();

    if digits.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(IdentifierError::InvalidCharacter(c));
    }
    // all ASCII from here, so the byte length is the number of digits
    if !expected.contains(&digits.len()) {
        return Err(IdentifierError::InvalidLength {
            expected,
            actual: digits.len(),
        });
    }
    Ok(digits)
}
