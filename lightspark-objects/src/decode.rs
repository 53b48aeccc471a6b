//! The [`FromJson`] decoding framework.
//!
//! Every typed object in this crate decodes from a borrowed
//! [`serde_json::Value`] through [`FromJson`]. Decoding tracks the JSON
//! [`Path`] of the value being decoded as a borrowed linked list on the stack,
//! so the happy path never allocates for paths; the path is rendered into a
//! `String` only once an error is actually produced.
//!
//! ## Required vs optional fields
//!
//! A record field of type `T` is required: if the key is absent or `null`, the
//! record fails with [`DecodeError::MissingField`]. A field of type
//! `Option<T>` is optional: absent and `null` both decode to [`None`]. This is
//! driven by the [`FromJson::absent`] and [`FromJson::null`] hooks. Interface
//! families override [`FromJson::null`] so that a `null` in a required
//! interface slot is reported as [`DecodeError::InvalidInterface`].

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::{
    error::{DecodeError, JsonType},
    unions::{
        AuditLogActor, Connection, Entity, LightningTransaction,
        LightsparkNode, LightsparkNodeOwner, Node, OnChainTransaction,
        PaymentRequest, PaymentRequestData, Transaction,
    },
};

/// The location of a value inside the JSON document being decoded.
#[derive(Copy, Clone, Debug)]
pub enum Path<'a> {
    /// The document root, rendered as `$`.
    Root,
    /// An object member of the parent path.
    Key(&'a Path<'a>, &'a str),
    /// An array element of the parent path.
    Index(&'a Path<'a>, usize),
}

/// Decode `Self` from a borrowed JSON value.
pub trait FromJson: Sized {
    /// Decode a value found at `path`.
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError>;

    /// Called when a record member of this type is absent.
    fn absent(path: Path<'_>) -> Result<Self, DecodeError> {
        Err(DecodeError::MissingField {
            path: path.to_string(),
        })
    }

    /// Called when a record member of this type is JSON `null`.
    fn null(path: Path<'_>) -> Result<Self, DecodeError> {
        Self::absent(path)
    }

    /// Decode a top-level JSON value, starting from the root path `$`.
    #[inline]
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Self::from_json(value, Path::Root)
    }
}

// --- impl Path --- //

impl<'a> Path<'a> {
    /// The path of the object member `key` under this path.
    #[inline]
    pub fn key(&'a self, key: &'a str) -> Path<'a> {
        Path::Key(self, key)
    }

    /// The path of the array element `idx` under this path.
    #[inline]
    pub fn index(&'a self, idx: usize) -> Path<'a> {
        Path::Index(self, idx)
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("$"),
            Self::Key(parent, key) => write!(f, "{parent}.{key}"),
            Self::Index(parent, idx) => write!(f, "{parent}[{idx}]"),
        }
    }
}

// --- Helpers used by the generated decoders --- //

/// Build a [`DecodeError::TypeMismatch`] for `value` found at `path`.
pub fn type_mismatch(
    value: &Value,
    expected: JsonType,
    path: Path<'_>,
) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: JsonType::of(value),
    }
}

/// Require `value` to be a JSON object.
pub fn expect_object<'v>(
    value: &'v Value,
    path: Path<'_>,
) -> Result<&'v Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| type_mismatch(value, JsonType::Object, path))
}

/// Require `value` to be a JSON string.
pub fn expect_str<'v>(
    value: &'v Value,
    path: Path<'_>,
) -> Result<&'v str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| type_mismatch(value, JsonType::String, path))
}

/// Decode the member `key` of `object`, where `path` is the object's path.
///
/// Extra members of `object` are never looked at.
pub fn field<T: FromJson>(
    object: &Map<String, Value>,
    key: &str,
    path: Path<'_>,
) -> Result<T, DecodeError> {
    let field_path = path.key(key);
    match object.get(key) {
        None => T::absent(field_path),
        Some(Value::Null) => T::null(field_path),
        Some(value) => T::from_json(value, field_path),
    }
}

// --- std / serde_json impls --- //

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            _ => T::from_json(value, path).map(Some),
        }
    }

    #[inline]
    fn absent(_path: Path<'_>) -> Result<Self, DecodeError> {
        Ok(None)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        let array = value
            .as_array()
            .ok_or_else(|| type_mismatch(value, JsonType::Array, path))?;

        // No partial lists: the first bad element fails the whole array.
        array
            .iter()
            .enumerate()
            .map(|(idx, elem)| T::from_json(elem, path.index(idx)))
            .collect()
    }
}

impl FromJson for String {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        expect_str(value, path).map(str::to_owned)
    }
}

impl FromJson for bool {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| type_mismatch(value, JsonType::Bool, path))
    }
}

impl FromJson for i64 {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        let number = match value {
            Value::Number(number) => number,
            _ => return Err(type_mismatch(value, JsonType::Number, path)),
        };
        number.as_i64().ok_or_else(|| DecodeError::ScalarParse {
            path: path.to_string(),
            scalar: "i64",
            msg: format!("{number} is not a 64-bit signed integer"),
        })
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| type_mismatch(value, JsonType::Number, path))
    }
}

/// Untyped passthrough, e.g. for free-form webhook payloads.
impl FromJson for Value {
    fn from_json(value: &Value, _path: Path<'_>) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl FromJson for Map<String, Value> {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        expect_object(value, path).cloned()
    }
}

// --- chrono impls --- //

/// RFC 3339 with an explicit offset. Sub-second precision down to nanoseconds
/// is accepted but not required.
impl FromJson for DateTime<Utc> {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        let s = expect_str(value, path)?;
        DateTime::parse_from_rfc3339(s)
            .map(|datetime| datetime.with_timezone(&Utc))
            .map_err(|err| DecodeError::ScalarParse {
                path: path.to_string(),
                scalar: "timestamp",
                msg: format!("'{s}': {err}"),
            })
    }
}

/// ISO 8601 calendar date, `YYYY-MM-DD`.
impl FromJson for NaiveDate {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        let s = expect_str(value, path)?;
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|err| {
            DecodeError::ScalarParse {
                path: path.to_string(),
                scalar: "date",
                msg: format!("'{s}': {err}"),
            }
        })
    }
}

// --- Entry points --- //

/// Decode any [`FromJson`] type from a top-level JSON value.
///
/// ```ignore
/// let balances = decode::<Balances>(&value)?;
/// ```
#[inline]
pub fn decode<T: FromJson>(value: &Value) -> Result<T, DecodeError> {
    T::decode(value)
}

macro_rules! family_entry_points {
    ($($fn_name:ident => $family:ident),* $(,)?) => {
        $(
            #[doc = concat!(
                "Decode a top-level [`", stringify!($family), "`]."
            )]
            #[inline]
            pub fn $fn_name(value: &Value) -> Result<$family, DecodeError> {
                $family::decode(value)
            }
        )*
    }
}

family_entry_points! {
    decode_entity => Entity,
    decode_transaction => Transaction,
    decode_lightning_transaction => LightningTransaction,
    decode_on_chain_transaction => OnChainTransaction,
    decode_payment_request => PaymentRequest,
    decode_payment_request_data => PaymentRequestData,
    decode_node => Node,
    decode_lightspark_node => LightsparkNode,
    decode_connection => Connection,
    decode_lightspark_node_owner => LightsparkNodeOwner,
    decode_audit_log_actor => AuditLogActor,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::error::DecodeErrorKind;

    #[test]
    fn path_rendering() {
        let root = Path::Root;
        let entity = root.key("entity");
        let entities = entity.key("entities");
        let third = entities.index(3);
        let balance = third.key("total_balance");
        assert_eq!(root.to_string(), "$");
        assert_eq!(balance.to_string(), "$.entity.entities[3].total_balance");
    }

    #[test]
    fn required_vs_optional_fields() {
        let value = json!({ "present": "x", "null": null });
        let object = value.as_object().unwrap();

        let present: String = field(object, "present", Path::Root).unwrap();
        assert_eq!(present, "x");

        let null: Option<String> = field(object, "null", Path::Root).unwrap();
        assert_eq!(null, None);
        let absent: Option<String> =
            field(object, "absent", Path::Root).unwrap();
        assert_eq!(absent, None);

        for key in ["null", "absent"] {
            let err = field::<String>(object, key, Path::Root).unwrap_err();
            assert_eq!(err.kind(), DecodeErrorKind::MissingField);
            assert_eq!(err.path(), format!("$.{key}"));
        }
    }

    #[test]
    fn integers_reject_floats_and_overflow() {
        assert_eq!(i64::decode(&json!(-42)).unwrap(), -42);

        let err = i64::decode(&json!(1.5)).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::ScalarParse);
        let err = i64::decode(&json!(u64::MAX)).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::ScalarParse);
        let err = i64::decode(&json!("42")).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
    }

    #[test]
    fn vec_fails_atomically_with_element_path() {
        let err = Vec::<String>::decode(&json!(["a", "b", 3])).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert_eq!(err.path(), "$[2]");
    }

    #[test]
    fn timestamps() {
        let ts = DateTime::<Utc>::decode(&json!("2024-01-02T03:04:05Z"))
            .unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-02T03:04:05+00:00");

        // Offsets are normalized to UTC, nanoseconds are kept.
        let ts = DateTime::<Utc>::decode(&json!(
            "2023-05-17T23:56:47.874449123+02:00"
        ))
        .unwrap();
        assert_eq!(ts.to_rfc3339(), "2023-05-17T21:56:47.874449123+00:00");

        for bad in [json!("2024-01-02"), json!("yesterday")] {
            let err = DateTime::<Utc>::decode(&bad).unwrap_err();
            assert_eq!(err.kind(), DecodeErrorKind::ScalarParse);
        }
    }

    #[test]
    fn dates() {
        let date = NaiveDate::decode(&json!("2024-02-29")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        for bad in [json!("2023-02-29"), json!("2024-01-02T00:00:00Z")] {
            let err = NaiveDate::decode(&bad).unwrap_err();
            assert_eq!(err.kind(), DecodeErrorKind::ScalarParse);
        }
    }
}
