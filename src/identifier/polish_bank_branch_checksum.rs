use crate::identifier::{sanitize_digits, ControlNumber};
use crate::validator::Validator;
use crate::IdentifierError;

/// Polish bank branch number (numer rozliczeniowy), 8 digits including a control digit.
pub struct PolishBankBranchChecksum;

const BANK_BRANCH_LENGTH: &[usize] = &[8];

const CHECKSUM_WEIGHTS: &[u32] = &[7, 1, 3, 9, 7, 11, 3];

const BANK_BRANCH_CONTROL_NUMBER: ControlNumber<'static> =
    ControlNumber::new(CHECKSUM_WEIGHTS, 10);

/// Validates a bank branch number and returns its 8 digits without separators.
pub fn validate_bank_branch(input: &str) -> Result<String, IdentifierError> {
    let digits = sanitize_digits(input, BANK_BRANCH_LENGTH)?;
    if !BANK_BRANCH_CONTROL_NUMBER.is_valid(&digits) {
        return Err(IdentifierError::ChecksumMismatch);
    }
    Ok(digits)
}

pub fn bank_branch(input: &str) -> bool {
    validate_bank_branch(input).is_ok()
}

impl Validator for PolishBankBranchChecksum {
    fn is_valid(&self, input: &str) -> bool {
        bank_branch(input)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_bank_branches() {
        let valid_numbers = vec![
            // NBP
            "10100000",
            // PKO BP
            "10201026",
            "1020-1026",
            // mBank
            "11402004",
            "114 020 04",
            // ING
            "10501445",
        ];
        for number in valid_numbers {
            assert!(PolishBankBranchChecksum.is_valid(number), "{number}");
        }
    }

    #[test]
    fn test_invalid_bank_branches() {
        let invalid_numbers = vec![
            // wrong control digit
            "10201027",
            "11402005",
            // wrong length
            "1020102",
            "102010260",
            // not digits
            "1020102a",
            "",
        ];
        for number in invalid_numbers {
            assert!(!PolishBankBranchChecksum.is_valid(number), "{number}");
        }
    }

    #[test]
    fn exactly_one_control_digit_per_body() {
        for body in ["1020102", "1140200", "9999999", "0000000"] {
            let valid = (0..10)
                .filter(|check| bank_branch(&format!("{body}{check}")))
                .count();
            assert_eq!(valid, 1, "{body}");
        }
    }

    #[test]
    fn returns_sanitized_digits() {
        assert_eq!(
            validate_bank_branch("1020/1026"),
            Ok("10201026".to_string())
        );
        assert_eq!(
            validate_bank_branch("10201027"),
            Err(IdentifierError::ChecksumMismatch)
        );
    }
}
