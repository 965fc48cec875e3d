//! Terminal result of a `validate` call
//!
//! An [`Outcome`] is either valid (carrying the input data, passed through
//! untransformed) or invalid (carrying the ordered error list). Call-level
//! faults are *not* outcomes — they travel as `Err(ValidateFault)` on the
//! `validate` call itself.

use super::ValidationError;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

/// A record under validation: field name → value, in key order.
pub type Record = Map<String, Value>;

/// Aggregate result of one `validate` call.
///
/// Synchronous errors appear in field order × config order × rule order.
/// Errors from deferred rules append in arrival order, which is not
/// guaranteed relative to anything else — do not rely on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every applicable rule passed; the input data is handed back as-is.
    Valid(Record),
    /// At least one rule failed.
    Invalid(Vec<ValidationError>),
}

impl Outcome {
    /// Returns true for [`Outcome::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The validated data, if valid.
    #[must_use]
    pub fn data(&self) -> Option<&Record> {
        match self {
            Self::Valid(data) => Some(data),
            Self::Invalid(_) => None,
        }
    }

    /// The error list, if invalid.
    #[must_use]
    pub fn errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Converts to a standard `Result`, consuming the outcome.
    pub fn into_result(self) -> Result<Record, Vec<ValidationError>> {
        match self {
            Self::Valid(data) => Ok(data),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

/// Serializes to the wire shape `{"valid":true,"data":…}` or
/// `{"valid":false,"errors":[…]}`.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid(data) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("valid", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Invalid(errors) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("valid", &false)?;
                state.serialize_field("errors", errors)?;
                state.end()
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
