use thiserror::Error;

/// Why an identifier (NIP, PESEL, REGON, bank branch number) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("The identifier is empty after removing separators")]
    Empty,

    #[error("The identifier contains a character that is not a digit: {0:?}")]
    InvalidCharacter(char),

    #[error("The identifier has {actual} digits, expected {}", display_lengths(.expected))]
    InvalidLength {
        expected: &'static [usize],
        actual: usize,
    },

    #[error("The control digit does not match")]
    ChecksumMismatch,
}

fn display_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(|length| length.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
