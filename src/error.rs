//! Error types for report translation

use thiserror::Error;

/// The JSON type a field was expected to carry, or what was found instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Missing,
    Null,
    Boolean,
    Integer,
    UnsignedInteger,
    Number,
    String,
    HexString,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: Option<&serde_json::Value>) -> Self {
        use serde_json::Value;
        match value {
            None => JsonKind::Missing,
            Some(Value::Null) => JsonKind::Null,
            Some(Value::Bool(_)) => JsonKind::Boolean,
            Some(Value::Number(n)) if n.is_i64() => JsonKind::Integer,
            Some(Value::Number(n)) if n.is_u64() => JsonKind::UnsignedInteger,
            Some(Value::Number(_)) => JsonKind::Number,
            Some(Value::String(_)) => JsonKind::String,
            Some(Value::Array(_)) => JsonKind::Array,
            Some(Value::Object(_)) => JsonKind::Object,
        }
    }
}

impl std::fmt::Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JsonKind::Missing => "missing",
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::UnsignedInteger => "unsigned integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::HexString => "64-bit integer or hex string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(s)
    }
}

/// Misuse of the group/array grammar of a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An end call had no open scope of the matching kind.
    #[error("{call} with no matching open {expected}")]
    Unbalanced {
        call: &'static str,
        expected: &'static str,
    },
    /// An anonymous group was opened somewhere other than directly inside an array.
    #[error("anonymous group must be opened inside an array")]
    AnonymousOutsideArray,
    /// A named value or scope was written directly inside an array.
    #[error("named entry `{0}` cannot be written directly inside an array")]
    NamedInsideArray(String),
    /// The same key was written twice into one group.
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),
    /// The store was finished while scopes were still open.
    #[error("{0} scope(s) still open")]
    Unclosed(usize),
}

/// Translation error taxonomy. All variants are fatal.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// An expected field was absent or had the wrong JSON type.
    #[error("schema violation at `{field}`: expected {expected}, found {found}")]
    Schema {
        field: String,
        expected: JsonKind,
        found: JsonKind,
    },
    /// The walker asked for a name the name table does not know.
    ///
    /// This is a defect in the crate, never a property of the input.
    #[error("unmapped field name `{0}` (name table out of sync with walker)")]
    UnmappedName(String),
    /// The store rejected a call.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// The input text was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Wraps an error with the location in the document where it happened.
    #[error("in {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TranslateError>,
    },
}

impl TranslateError {
    pub(crate) fn schema(field: impl Into<String>, expected: JsonKind, found: JsonKind) -> Self {
        TranslateError::Schema {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Attach a location such as `devices[0]` to an error.
    pub fn within(self, context: impl Into<String>) -> Self {
        TranslateError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all location wrappers removed.
    pub fn root_cause(&self) -> &TranslateError {
        match self {
            TranslateError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// True when the error points at a defect in this crate rather than bad input.
    pub fn is_programming_error(&self) -> bool {
        matches!(self.root_cause(), TranslateError::UnmappedName(_))
    }

    /// True when the input document did not match the expected schema.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self.root_cause(), TranslateError::Schema { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TranslateError>;
