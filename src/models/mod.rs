pub mod gym_class;
pub mod trainee;
pub mod trainer;

pub use gym_class::{GymClass, Schedule};
pub use trainee::{
    membership_cost, BmiCategory, MembershipPackage, PaymentStatus, Trainee, BMI_DISCLAIMER,
};
pub use trainer::Trainer;

use thiserror::Error;

/// A line that failed to parse into a well-typed entity.
///
/// Corrupt records are reported and skipped on load; they never abort
/// loading the rest of the file.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid value for {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// One entity type's mapping to a single delimited line of its backing file.
///
/// Encoding is total; decoding surfaces `CodecError` for malformed lines.
/// Free-text fields are stored unescaped, so the prompt layer must keep
/// `,` and `;` out of them.
pub trait Record: Sized {
    /// Backing file name, relative to the data directory.
    const FILE_NAME: &'static str;

    fn encode(&self) -> String;

    fn decode(line: &str) -> Result<Self, CodecError>;
}

/// Split a line into exactly `expected` comma-separated fields.
pub(crate) fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, CodecError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(CodecError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

pub(crate) fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, CodecError> {
    value.parse().map_err(|_| CodecError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Administrator credentials, kept in their own single-purpose store.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

impl AdminAccount {
    /// Seed record written when the admin file does not exist yet.
    pub fn default_admin() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl Record for AdminAccount {
    const FILE_NAME: &'static str = "admins.txt";

    fn encode(&self) -> String {
        format!("{},{}", self.username, self.password)
    }

    fn decode(line: &str) -> Result<Self, CodecError> {
        let fields = split_fields(line, 2)?;
        Ok(Self {
            username: fields[0].to_string(),
            password: fields[1].to_string(),
        })
    }
}
