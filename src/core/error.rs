//! Error types for catalog loading and reservation submission.

use std::fmt;
use thiserror::Error;

/// One of the four reservation form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    NationalId,
    Category,
    Movie,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::NationalId => write!(f, "national ID"),
            Field::Category => write!(f, "category"),
            Field::Movie => write!(f, "movie"),
        }
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fields: {}", list_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<Field>,
}

impl ValidationError {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

fn list_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure of the add-reservation action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("incomplete or invalid submission: {0}")]
    Incomplete(#[from] ValidationError),
}

/// Malformed national ID mask.
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("mask is empty")]
    Empty,

    #[error("mask '{0}' has no digit slots")]
    NoDigitSlots(String),

    #[error("mask literal '{0}' is a digit or the prompt character")]
    AmbiguousLiteral(char),

    #[error("prompt character '{0}' must not be a digit or whitespace")]
    InvalidPrompt(char),

    #[error("mask pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Malformed catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no categories")]
    Empty,

    #[error("category name at position {0} is blank")]
    BlankCategory(usize),

    #[error("category '{0}' appears more than once")]
    DuplicateCategory(String),

    #[error("category '{0}' has no movies")]
    NoMovies(String),

    #[error("category '{0}' contains a blank movie title")]
    BlankMovie(String),
}
