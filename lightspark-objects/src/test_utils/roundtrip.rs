use std::fmt::Debug;

use proptest::{arbitrary::Arbitrary, prop_assert_eq, proptest};
use serde::Serialize;
use serde_json::Value;

use crate::decode::FromJson;

/// Assert that `value` serializes to wire JSON which decodes back to an equal
/// value. Returns the wire JSON for further inspection.
#[track_caller]
pub fn wire_roundtrip_ok<T>(value: &T) -> Value
where
    T: Debug + PartialEq + Serialize + FromJson,
{
    let json = serde_json::to_value(value).unwrap();
    let decoded = T::decode(&json).unwrap();
    assert_eq!(&decoded, value);
    json
}

/// Quickly create a wire-format roundtrip proptest.
///
/// ```ignore
/// wire_roundtrip_proptest::<BitcoinNetwork>();
/// ```
pub fn wire_roundtrip_proptest<T>()
where
    T: Arbitrary + Debug + PartialEq + Serialize + FromJson,
{
    proptest!(|(value1: T)| {
        let json = serde_json::to_value(&value1).unwrap();
        let value2 = T::decode(&json).unwrap();
        prop_assert_eq!(value1, value2);
    });
}
