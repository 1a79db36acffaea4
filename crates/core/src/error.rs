//! Error model: one immutable description of a failure.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Auxiliary context attached to an [`Error`].
///
/// An ordered map, so two maps holding the same entries compare (and hash)
/// equal whatever order the entries were inserted in.
pub type Metadata = BTreeMap<String, Value>;

/// Category of an [`Error`].
///
/// The seven closed categories carry the ordinals `0..=6`. Any other integer
/// discriminator is kept as [`ErrorType::Custom`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorType {
    Failure,
    Unexpected,
    Validation,
    Conflict,
    NotFound,
    Unauthorized,
    Forbidden,
    /// Application-defined category outside the closed set.
    Custom(i32),
}

impl ErrorType {
    /// Integer projection of the category.
    pub fn numeric(self) -> i32 {
        match self {
            ErrorType::Failure => 0,
            ErrorType::Unexpected => 1,
            ErrorType::Validation => 2,
            ErrorType::Conflict => 3,
            ErrorType::NotFound => 4,
            ErrorType::Unauthorized => 5,
            ErrorType::Forbidden => 6,
            ErrorType::Custom(n) => n,
        }
    }

    /// Inverse of [`ErrorType::numeric`]: ordinals of the closed set map back to
    /// their variant, everything else becomes `Custom`.
    pub fn from_numeric(n: i32) -> Self {
        match n {
            0 => ErrorType::Failure,
            1 => ErrorType::Unexpected,
            2 => ErrorType::Validation,
            3 => ErrorType::Conflict,
            4 => ErrorType::NotFound,
            5 => ErrorType::Unauthorized,
            6 => ErrorType::Forbidden,
            n => ErrorType::Custom(n),
        }
    }
}

impl core::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorType::Failure => f.write_str("Failure"),
            ErrorType::Unexpected => f.write_str("Unexpected"),
            ErrorType::Validation => f.write_str("Validation"),
            ErrorType::Conflict => f.write_str("Conflict"),
            ErrorType::NotFound => f.write_str("NotFound"),
            ErrorType::Unauthorized => f.write_str("Unauthorized"),
            ErrorType::Forbidden => f.write_str("Forbidden"),
            ErrorType::Custom(n) => write!(f, "Custom({n})"),
        }
    }
}

impl Serialize for ErrorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.numeric())
    }
}

/// A structured failure record.
///
/// Errors are values: immutable once built, compared by content. Build them
/// through the per-category factories ([`Error::validation`],
/// [`Error::not_found`], ...) or [`Error::custom`], then refine with the
/// consuming `with_*` builders:
///
/// ```
/// use result_or_error_core::{Error, ErrorType};
///
/// let err = Error::validation()
///     .with_code("User.Name")
///     .with_description("Name is too short")
///     .with_metadata_entry("min_length", 3);
///
/// assert_eq!(err.error_type(), ErrorType::Validation);
/// assert_eq!(err.code(), "User.Name");
/// assert_eq!(err.metadata().unwrap()["min_length"], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    code: String,
    description: String,
    #[serde(rename = "type", serialize_with = "serialize_numeric_type")]
    numeric_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
}

fn serialize_numeric_type<S: Serializer>(
    numeric_type: &i32,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    ErrorType::from_numeric(*numeric_type).serialize(serializer)
}

macro_rules! closed_category_factory {
    ($(#[$doc:meta])* $fn_name:ident, $variant:ident, $code:literal, $description:literal) => {
        $(#[$doc])*
        pub fn $fn_name() -> Self {
            Self::build(ErrorType::$variant, $code, $description)
        }
    };
}

impl Error {
    fn build(error_type: ErrorType, code: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            description: description.to_string(),
            numeric_type: error_type.numeric(),
            metadata: None,
        }
    }

    closed_category_factory!(
        /// Generic failure (`General.Failure`).
        failure, Failure, "General.Failure", "A failure has occurred."
    );
    closed_category_factory!(
        /// Unexpected failure (`General.Unexpected`).
        unexpected, Unexpected, "General.Unexpected", "An unexpected error has occurred."
    );
    closed_category_factory!(
        /// Input failed validation (`General.Validation`).
        validation, Validation, "General.Validation", "A validation error has occurred."
    );
    closed_category_factory!(
        /// State conflict, e.g. a duplicate (`General.Conflict`).
        conflict, Conflict, "General.Conflict", "A conflict error has occurred."
    );
    closed_category_factory!(
        /// Requested resource does not exist (`General.NotFound`).
        not_found, NotFound, "General.NotFound", "A 'Not Found' error has occurred."
    );
    closed_category_factory!(
        /// Caller is not authenticated (`General.Unauthorized`).
        unauthorized, Unauthorized, "General.Unauthorized", "An 'Unauthorized' error has occurred."
    );
    closed_category_factory!(
        /// Caller is authenticated but not allowed (`General.Forbidden`).
        forbidden, Forbidden, "General.Forbidden", "A 'Forbidden' error has occurred."
    );

    /// Error with an application-defined integer category.
    ///
    /// `error_type` is not restricted to the closed categories; integers in
    /// `0..=6` are indistinguishable from the matching built-in category.
    pub fn custom(error_type: i32, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            numeric_type: error_type,
            metadata: None,
        }
    }

    pub fn with_code(self, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    /// Replace the metadata map.
    pub fn with_metadata(self, metadata: Metadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..self
        }
    }

    /// Add a single metadata entry, creating the map when absent.
    pub fn with_metadata_entry(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut metadata = self.metadata.unwrap_or_default();
        metadata.insert(key.into(), value.into());
        Self {
            metadata: Some(metadata),
            ..self
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn error_type(&self) -> ErrorType {
        ErrorType::from_numeric(self.numeric_type)
    }

    pub fn numeric_type(&self) -> i32 {
        self.numeric_type
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl std::error::Error for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.description.hash(state);
        self.numeric_type.hash(state);
        match &self.metadata {
            None => state.write_u8(0),
            Some(metadata) => {
                state.write_u8(1);
                state.write_usize(metadata.len());
                for (key, value) in metadata {
                    key.hash(state);
                    hash_json(value, state);
                }
            }
        }
    }
}

/// Hash a JSON value consistently with `Value`'s `PartialEq`.
fn hash_json<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            // 0.0 == -0.0 but their textual forms differ.
            match n.as_f64() {
                Some(f) if n.is_f64() && f == 0.0 => "0.0".hash(state),
                _ => n.to_string().hash(state),
            }
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            state.write_usize(items.len());
            for item in items {
                hash_json(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            state.write_usize(map.len());
            // `Map` equality ignores order; iteration order depends on serde_json features.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, item) in entries {
                key.hash(state);
                hash_json(item, state);
            }
        }
    }
}
