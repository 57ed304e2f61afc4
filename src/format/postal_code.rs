use lazy_static::lazy_static;
use regex::Regex;

use crate::validator::Validator;

lazy_static! {
    static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^[0-9]{2}-[0-9]{3}$").unwrap();
}

/// Polish postal code format, `NN-NNN`.
///
/// `strong` asks for a check against the list of postal codes actually in use. No such
/// list is available, so the flag has no effect and only the format is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolishPostalCode {
    pub strong: bool,
}

pub fn postal_code(code: &str, _strong: bool) -> bool {
    POSTAL_CODE_REGEX.is_match(code)
}

impl Validator for PolishPostalCode {
    fn is_valid(&self, input: &str) -> bool {
        postal_code(input, self.strong)
    }
}
