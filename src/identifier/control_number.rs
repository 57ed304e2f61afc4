/// A weighted modular checksum ("control number") scheme.
///
/// The control digit is derived from the weighted sum of the digits preceding it:
/// `sum = Σ weights[i] * digit[i]`, reduced modulo `modulus`. Two optional rules then
/// adjust the remainder, in this order:
///  - `subtract(n)`: a remainder `r` with `0 < r < n` becomes `n - r`
///  - `ten_equals_zero()`: a remainder of exactly 10 becomes 0
///
/// Without `ten_equals_zero` a remainder of 10 can never match a single digit, so such
/// numbers are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlNumber<'a> {
    weights: &'a [u32],
    modulus: u32,
    subtract: Option<u32>,
    ten_equals_zero: bool,
}

impl<'a> ControlNumber<'a> {
    pub const fn new(weights: &'a [u32], modulus: u32) -> Self {
        Self {
            weights,
            modulus,
            subtract: None,
            ten_equals_zero: false,
        }
    }

    pub const fn subtract(self, subtract: u32) -> Self {
        Self {
            subtract: Some(subtract),
            ..self
        }
    }

    pub const fn ten_equals_zero(self) -> Self {
        Self {
            ten_equals_zero: true,
            ..self
        }
    }

    pub fn weights(&self) -> &'a [u32] {
        self.weights
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Number of digits covered by this scheme, control digit included.
    pub fn digit_count(&self) -> usize {
        self.weights.len() + 1
    }

    /// Computes the expected control digit from the leading `weights.len()` digits.
    ///
    /// Characters after the weighted positions are ignored. Returns `None` if one of the
    /// weighted positions is missing or is not an ASCII digit. The returned value can be
    /// 10 or more when the scheme does not map it back to a single digit.
    pub fn control_digit(&self, digits: &str) -> Option<u32> {
        if self.modulus == 0 {
            return None;
        }

        let mut chars = digits.chars();
        let mut sum: u64 = 0;
        for weight in self.weights {
            let digit = chars.next()?.to_digit(10)?;
            sum += u64::from(*weight) * u64::from(digit);
        }

        let mut remainder = (sum % u64::from(self.modulus)) as u32;
        if let Some(subtract) = self.subtract {
            if remainder > 0 && remainder < subtract {
                remainder = subtract - remainder;
            }
        }
        if self.ten_equals_zero && remainder == 10 {
            remainder = 0;
        }
        Some(remainder)
    }

    /// Returns true if `digits` has exactly `digit_count()` ASCII digits and the last one
    /// is the expected control digit.
    pub fn is_valid(&self, digits: &str) -> bool {
        if digits.len() != self.digit_count() {
            return false;
        }

        let Some(expected) = self.control_digit(digits) else {
            return false;
        };
        digits.chars().last().and_then(|c| c.to_digit(10)) == Some(expected)
    }

    /// Appends the control digit to `body`, which must hold exactly the weighted digits.
    ///
    /// Returns `None` if `body` has the wrong length or no single digit satisfies the
    /// scheme (e.g. a NIP whose weighted sum leaves a remainder of 10).
    pub fn complete(&self, body: &str) -> Option<String> {
        if body.len() != self.weights.len() {
            return None;
        }
        let control_digit = self.control_digit(body)?;
        let control_char = char::from_digit(control_digit, 10)?;

        let mut number = String::with_capacity(self.digit_count());
        number.push_str(body);
        number.push(control_char);
        Some(number)
    }
}

/// Checks the control digit of `digits` against `weights` and `modulus`.
///
/// `digits` must contain exactly `weights.len() + 1` ASCII digits, the last one being the
/// control digit. Any other input is reported as invalid.
pub fn check_control_number(
    digits: &str,
    weights: &[u32],
    modulus: u32,
    ten_equals_zero: bool,
) -> bool {
    let scheme = ControlNumber::new(weights, modulus);
    if ten_equals_zero {
        scheme.ten_equals_zero().is_valid(digits)
    } else {
        scheme.is_valid(digits)
    }
}
