use thiserror::Error;

/// Longest input echoed back in an error message.
const MAX_ECHOED_INPUT: usize = 60;

/// Errors raised by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Opb58Error {
    /// The input cannot be encoded or decoded at all, e.g. a negative integer.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// The input contains a character that is not in the alphabet
    #[error("invalid character '{char}' at position {position} in \"{input}\"")]
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
    },
    /// The decoded magnitude does not fit the requested integer type
    #[error("\"{input}\" exceeds the maximum {target} value ({max})")]
    Overflow {
        input: String,
        target: &'static str,
        max: &'static str,
    },
}

impl Opb58Error {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Opb58Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn negative(value: impl std::fmt::Display) -> Self {
        Self::invalid_argument(format!("cannot encode negative value {}", value))
    }

    /// Create an InvalidCharacter error for the symbol starting at byte
    /// `position` of `input`.
    pub fn invalid_character(input: &str, position: usize) -> Self {
        let char = input
            .get(position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Opb58Error::InvalidCharacter {
            char,
            position,
            input: echo(input),
        }
    }

    pub fn overflow(input: &str, target: &'static str, max: &'static str) -> Self {
        Opb58Error::Overflow {
            input: echo(input),
            target,
            max,
        }
    }

    /// True for both kinds of malformed input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Opb58Error::InvalidArgument { .. } | Opb58Error::InvalidCharacter { .. }
        )
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Opb58Error::Overflow { .. })
    }
}

// Truncate long inputs
fn echo(input: &str) -> String {
    if input.chars().count() > MAX_ECHOED_INPUT {
        let head: String = input.chars().take(MAX_ECHOED_INPUT).collect();
        format!("{}...", head)
    } else {
        input.to_string()
    }
}

pub type Result<T> = std::result::Result<T, Opb58Error>;
