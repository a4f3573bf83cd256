use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure for record creation input.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValidationError {
    /// Required text field is empty or whitespace-only.
    EmptyField(&'static str),
    /// Pet age is negative or not a finite number.
    InvalidAge(f64),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` must not be empty"),
            Self::InvalidAge(age) => {
                write!(f, "age must be a finite, non-negative number, got {age}")
            }
        }
    }
}

impl Error for RecordValidationError {}
