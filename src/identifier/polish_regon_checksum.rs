use crate::identifier::{sanitize_digits, ControlNumber};
use crate::validator::Validator;
use crate::IdentifierError;

/// REGON, the Polish statistical business register number.
///
/// Entities have a 9-digit number. Local units have 14 digits: the 9 digits of their
/// parent entity followed by 4 digits and a second control digit computed over the
/// first 13 digits.
pub struct PolishRegonChecksum;

const REGON_LENGTHS: &[usize] = &[9, 14];

const CHECKSUM_WEIGHTS: &[u32] = &[8, 9, 2, 3, 4, 5, 6, 7];
const LOCAL_UNIT_CHECKSUM_WEIGHTS: &[u32] = &[2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

const REGON_CONTROL_NUMBER: ControlNumber<'static> =
    ControlNumber::new(CHECKSUM_WEIGHTS, 11);
const LOCAL_UNIT_CONTROL_NUMBER: ControlNumber<'static> =
    ControlNumber::new(LOCAL_UNIT_CHECKSUM_WEIGHTS, 11);

/// Validates a 9- or 14-digit REGON and returns its digits without separators.
pub fn validate_regon(input: &str) -> Result<String, IdentifierError> {
    let digits = sanitize_digits(input, REGON_LENGTHS)?;

    let entity = &digits[..REGON_CONTROL_NUMBER.digit_count()];
    if !REGON_CONTROL_NUMBER.is_valid(entity) {
        return Err(IdentifierError::ChecksumMismatch);
    }
    if digits.len() == LOCAL_UNIT_CONTROL_NUMBER.digit_count()
        && !LOCAL_UNIT_CONTROL_NUMBER.is_valid(&digits)
    {
        return Err(IdentifierError::ChecksumMismatch);
    }
    Ok(digits)
}

pub fn regon(input: &str) -> bool {
    validate_regon(input).is_ok()
}

impl Validator for PolishRegonChecksum {
    fn is_valid(&self, input: &str) -> bool {
        regon(input)
    }
}
