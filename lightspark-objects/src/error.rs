//! Errors produced while decoding Lightspark API responses.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// An error decoding a JSON value into a typed object.
///
/// Every variant carries the rendered JSON path of the offending value, e.g.
/// `$.entity.nodes.entities[3].blockchain_balance.total_balance`. Decoding is
/// atomic: a caller either gets the fully decoded value or exactly one of
/// these errors.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: JsonType,
        found: JsonType,
    },

    #[error("{path}: missing required field")]
    MissingField { path: String },

    #[error("{path}: `{family}` object is missing `__typename`")]
    MissingTypename { path: String, family: &'static str },

    #[error("{path}: unknown `{family}` variant `{typename}`")]
    UnknownVariant {
        path: String,
        family: &'static str,
        typename: String,
    },

    #[error("{path}: invalid {scalar}: {msg}")]
    ScalarParse {
        path: String,
        scalar: &'static str,
        msg: String,
    },

    #[error("{path}: expected a `{family}` object, found {found}")]
    InvalidInterface {
        path: String,
        family: &'static str,
        found: JsonType,
    },
}

/// The kind of a [`DecodeError`], without its payload. Useful for matching.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DecodeErrorKind {
    TypeMismatch,
    MissingField,
    MissingTypename,
    UnknownVariant,
    ScalarParse,
    InvalidInterface,
}

/// The shape of a JSON value, used to describe type mismatches.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
            Self::MissingField { .. } => DecodeErrorKind::MissingField,
            Self::MissingTypename { .. } => DecodeErrorKind::MissingTypename,
            Self::UnknownVariant { .. } => DecodeErrorKind::UnknownVariant,
            Self::ScalarParse { .. } => DecodeErrorKind::ScalarParse,
            Self::InvalidInterface { .. } =>
                DecodeErrorKind::InvalidInterface,
        }
    }

    /// The JSON path at which decoding failed, e.g. `$.invoice_data.amount`.
    pub fn path(&self) -> &str {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::MissingField { path }
            | Self::MissingTypename { path, .. }
            | Self::UnknownVariant { path, .. }
            | Self::ScalarParse { path, .. }
            | Self::InvalidInterface { path, .. } => path,
        }
    }
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
