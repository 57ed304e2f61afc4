use crate::identifier::{sanitize_digits, ControlNumber};
use crate::validator::Validator;
use crate::IdentifierError;

/// NIP (Numer Identyfikacji Podatkowej), the Polish tax identification number.
pub struct PolishNipChecksum;

const NIP_LENGTH: &[usize] = &[10];

const CHECKSUM_WEIGHTS: &[u32] = &[6, 5, 7, 2, 3, 4, 5, 6, 7];

// A remainder of 10 is never issued, so it is not mapped to 0.
const NIP_CONTROL_NUMBER: ControlNumber<'static> = ControlNumber::new(CHECKSUM_WEIGHTS, 11);

/// Validates a NIP and returns its 10 digits without separators.
pub fn validate_nip(input: &str) -> Result<String, IdentifierError> {
    let digits = sanitize_digits(input, NIP_LENGTH)?;
    if !NIP_CONTROL_NUMBER.is_valid(&digits) {
        return Err(IdentifierError::ChecksumMismatch);
    }
    Ok(digits)
}

pub fn nip(input: &str) -> bool {
    validate_nip(input).is_ok()
}

impl Validator for PolishNipChecksum {
    fn is_valid(&self, input: &str) -> bool {
        nip(input)
    }
}
