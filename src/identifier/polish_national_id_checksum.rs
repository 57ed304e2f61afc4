use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::identifier::{sanitize_digits, ControlNumber};
use crate::validator::Validator;
use crate::IdentifierError;

/// PESEL, the Polish national identification number.
///
/// 11 digits: `YYMMDDZZZXQ` where the month carries the century, `X` the sex and `Q` is
/// the control digit.
pub struct PolishNationalIdChecksum;

const PESEL_LENGTH: &[usize] = &[11];

const MULTIPLIERS: &[u32] = &[1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

// the control digit is the last digit of (10 − last digit of the sum)
const PESEL_CONTROL_NUMBER: ControlNumber<'static> = ControlNumber::new(MULTIPLIERS, 10)
    .subtract(10)
    .ten_equals_zero();

const SEX_DIGIT_INDEX: usize = 9;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

/// Birth date as encoded in a PESEL.
///
/// No calendar check is applied: some PESEL numbers are issued with a date that does not
/// exist, and those still decode. Use [`BirthDate::to_naive_date`] for a strict date.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Returns `None` when the encoded date is not a real calendar date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for BirthDate {
    // The day keeps the two digits it is written with in the PESEL, the month does not.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BirthRecord {
    pub date: BirthDate,
    pub sex: Sex,
}

/// Outcome of validating a PESEL. A birth record only exists for a valid number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeselValidation {
    Invalid,
    Valid(BirthRecord),
}

impl PeselValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, PeselValidation::Valid(_))
    }

    pub fn birth_record(&self) -> Option<&BirthRecord> {
        match self {
            PeselValidation::Valid(record) => Some(record),
            PeselValidation::Invalid => None,
        }
    }
}

impl From<Result<BirthRecord, IdentifierError>> for PeselValidation {
    fn from(result: Result<BirthRecord, IdentifierError>) -> Self {
        match result {
            Ok(record) => PeselValidation::Valid(record),
            Err(_) => PeselValidation::Invalid,
        }
    }
}

/// Validates a PESEL and decodes the birth date and sex it carries.
pub fn validate_pesel(input: &str) -> Result<BirthRecord, IdentifierError> {
    let digits = sanitize_digits(input, PESEL_LENGTH)?;
    if !PESEL_CONTROL_NUMBER.is_valid(&digits) {
        return Err(IdentifierError::ChecksumMismatch);
    }

    let digits: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    Ok(decode_birth_record(&digits))
}

pub fn pesel(input: &str) -> PeselValidation {
    validate_pesel(input).into()
}

pub fn is_pesel(input: &str) -> bool {
    validate_pesel(input).is_ok()
}

/// `digits` must hold the 11 digits of a PESEL.
fn decode_birth_record(digits: &[u32]) -> BirthRecord {
    let year = two_digits(digits, 0);
    let encoded_month = two_digits(digits, 2);
    let day = two_digits(digits, 4);

    // 20 is added to the month for each century after the 1900s, 80 for the 1800s
    let century = match encoded_month {
        0..=19 => 1900,
        20..=39 => 2000,
        40..=59 => 2100,
        60..=79 => 2200,
        _ => 1800,
    };

    let sex = if digits[SEX_DIGIT_INDEX] % 2 == 0 {
        Sex::Female
    } else {
        Sex::Male
    };

    BirthRecord {
        date: BirthDate {
            year: century + year as i32,
            month: encoded_month % 20,
            day,
        },
        sex,
    }
}

fn two_digits(digits: &[u32], index: usize) -> u32 {
    digits[index] * 10 + digits[index + 1]
}

impl Validator for PolishNationalIdChecksum {
    fn is_valid(&self, input: &str) -> bool {
        is_pesel(input)
    }
}
