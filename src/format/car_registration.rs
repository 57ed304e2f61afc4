use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::validator::Validator;

/// Polish vehicle registration plate format.
pub struct PolishCarRegistration;

// Each pattern is matched against the whole plate, ignoring ASCII case.
const PLATE_PATTERNS: &[&str] = &[
    // 2 letter district
    r"[a-z]{2}\d{5}",
    r"[a-z]{2}\d{4}[a-z]",
    r"[a-z]{2}\d{3}[a-z]{2}",
    r"[a-z]{2}\d[a-z]\d{3}",
    r"[a-z]{2}\d[a-z]{2}\d{2}",
    // 3 letter district
    r"[a-z]{3}[a-z]\d{3}",
    r"[a-z]{3}\d{2}[a-z]{2}",
    r"[a-z]{3}\d[a-z]\d{2}",
    r"[a-z]{3}\d{2}[a-z]\d",
    r"[a-z]{3}\d[a-z]{2}\d",
    r"[a-z]{3}[a-z]{2}\d{2}",
    r"[a-z]{3}\d{5}",
    r"[a-z]{3}\d{4}[a-z]",
    r"[a-z]{3}\d{3}[a-z]{2}",
    r"[a-z]{3}[a-z]\d{2}[a-z]",
    r"[a-z]{3}[a-z]\d[a-z]{2}",
    // motorcycles
    r"[a-z]{2}\d{4}",
    r"[a-z]{2}\d{3}[a-z]",
    // temporary
    r"[a-z]\d{5}",
    r"[a-z]\d{4}B",
    // individual
    r"[a-z]\d[a-z]{3}[a-z0-9]{0,2}",
    // classic
    r"[a-z]{2}\d{2}[a-z]",
    r"[a-z]{2}\d{3}",
    r"[a-z]{3}\d[a-z]",
    r"[a-z]{3}\d{2}",
    r"[a-z]{3}[a-z]\d",
    // diplomatic
    r"W\d{6}",
    // military
    r"U[abcdegijk]\d{4,5}T?",
    // special services
    r"H[apmwkbcsn][a-z]{2}\d{3}",
    r"H[apmwkbcsn][a-z]\d{2}[a-z]{2}",
];

lazy_static! {
    static ref PLATE_REGEXES: Vec<Regex> = PLATE_PATTERNS
        .iter()
        .map(|pattern| compile_plate_pattern(pattern).unwrap())
        .collect();
}

fn compile_plate_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(true)
        // ASCII only: no Kelvin sign for `k`, no non-latin digits for `\d`
        .unicode(false)
        .build()
}

/// Returns true if `plate` has the layout of any Polish registration plate.
pub fn car_reg(plate: &str) -> bool {
    PLATE_REGEXES.iter().any(|regex| regex.is_match(plate))
}

impl Validator for PolishCarRegistration {
    fn is_valid(&self, input: &str) -> bool {
        car_reg(input)
    }
}
