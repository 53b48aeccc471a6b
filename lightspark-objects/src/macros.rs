//! Declarative macros which generate the type registry.
//!
//! - [`graphql_enum!`] generates a closed enumeration with a leading
//!   `Undefined` sentinel that receives any unrecognized wire value.
//! - [`graphql_object!`] generates a record struct plus its [`FromJson`] and
//!   wire-format [`Serialize`] impls from `field: Type => "wire_name"` rows.
//! - [`impl_entity!`] implements [`EntityRecord`] and id-based equality.
//! - [`graphql_union!`] generates an interface family from a literal
//!   `"Discriminator" => Variant(Type)` dispatch table.
//!
//! [`FromJson`]: crate::decode::FromJson
//! [`Serialize`]: serde::Serialize
//! [`EntityRecord`]: crate::traits::EntityRecord

macro_rules! graphql_enum {
    {
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),*

            $(,)?
        }
    } => {
        $(#[$enum_meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
        pub enum $name {
            /// A value this version of the SDK does not recognize.
            #[default]
            Undefined,

            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every known variant, i.e. all but `Undefined`.
            pub const VARIANTS: &'static [Self] = &[
                $( Self::$variant, )*
            ];

            pub fn as_str(self) -> &'static str {
                match self {
                    Self::Undefined => "undefined",
                    $( Self::$variant => $wire, )*
                }
            }

            /// Unknown wire values decode to `Undefined`; this never fails.
            pub fn from_wire(s: &str) -> Self {
                // this deny attr makes duplicate wire values a compile error
                #[deny(unreachable_patterns)]
                match s {
                    $( $wire => Self::$variant, )*
                    _ => {
                        tracing::debug!(
                            enum_name = stringify!($name),
                            value = s,
                            "Unrecognized enum value, using Undefined",
                        );
                        Self::Undefined
                    }
                }
            }

            #[inline]
            pub fn is_undefined(self) -> bool {
                matches!(self, Self::Undefined)
            }
        }

        // --- standard trait impls --- //

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_wire(s))
            }
        }

        // --- serde --- //

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let s =
                    <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_wire(&s))
            }
        }

        impl $crate::decode::FromJson for $name {
            fn from_json(
                value: &serde_json::Value,
                path: $crate::decode::Path<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                $crate::decode::expect_str(value, path).map(Self::from_wire)
            }
        }

        // --- impl Arbitrary --- //

        // Only known variants: `Undefined` is not a value the server sends.
        #[cfg(any(test, feature = "test-utils"))]
        impl proptest::arbitrary::Arbitrary for $name {
            type Parameters = ();
            type Strategy = proptest::strategy::BoxedStrategy<Self>;

            fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
                use proptest::{sample, strategy::Strategy};
                sample::select(Self::VARIANTS).boxed()
            }
        }
    }
}

macro_rules! graphql_object {
    {
        $( typename = $typename:literal; )?

        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty => $wire:literal
            ),*

            $(,)?
        }
    } => {
        $(#[$struct_meta])*
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::decode::FromJson for $name {
            #[allow(unused_variables)]
            fn from_json(
                value: &serde_json::Value,
                path: $crate::decode::Path<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                let object = $crate::decode::expect_object(value, path)?;
                Ok(Self {
                    $( $field: $crate::decode::field(object, $wire, path)?, )*
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(None)?;
                $( map.serialize_entry("__typename", $typename)?; )?
                $( map.serialize_entry($wire, &self.$field)?; )*
                map.end()
            }
        }

        $(
            impl $name {
                /// The `__typename` discriminator of this object.
                pub const TYPENAME: &'static str = $typename;
            }

            impl $crate::traits::Typename for $name {
                #[inline]
                fn typename(&self) -> &'static str {
                    Self::TYPENAME
                }
            }
        )?
    }
}

macro_rules! impl_entity {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::traits::EntityRecord for $name {
                #[inline]
                fn id(&self) -> &$crate::types::EntityId {
                    &self.id
                }

                #[inline]
                fn created_at(&self) -> $crate::types::Timestamp {
                    self.created_at
                }

                #[inline]
                fn updated_at(&self) -> $crate::types::Timestamp {
                    self.updated_at
                }
            }

            impl PartialEq for $name {
                fn eq(&self, other: &Self) -> bool {
                    self.id == other.id
                }
            }

            impl Eq for $name {}

            impl std::hash::Hash for $name {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash(&self.id, state)
                }
            }
        )*
    }
}

macro_rules! graphql_union {
    {
        $(#[$enum_meta:meta])*
        pub enum $name:ident : $family:literal {
            $(
                $(#[$variant_meta:meta])*
                $typename:literal => $variant:ident($ty:ty)
            ),*

            $(,)?
        }
    } => {
        $(#[$enum_meta])*
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty)
            ),*
        }

        impl $name {
            /// The interface family name, as reported in decode errors.
            pub const FAMILY: &'static str = $family;

            /// The dispatch table's discriminators, in declaration order.
            pub const TYPENAMES: &'static [&'static str] = &[
                $( $typename, )*
            ];
        }

        impl $crate::traits::Typename for $name {
            fn typename(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $typename, )*
                }
            }
        }

        impl $crate::decode::FromJson for $name {
            fn from_json(
                value: &serde_json::Value,
                path: $crate::decode::Path<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                use $crate::error::{DecodeError, JsonType};

                let object = value.as_object().ok_or_else(|| {
                    DecodeError::InvalidInterface {
                        path: path.to_string(),
                        family: $family,
                        found: JsonType::of(value),
                    }
                })?;

                let typename = match object.get("__typename") {
                    None | Some(serde_json::Value::Null) =>
                        return Err(DecodeError::MissingTypename {
                            path: path.to_string(),
                            family: $family,
                        }),
                    Some(typename) => $crate::decode::expect_str(
                        typename,
                        path.key("__typename"),
                    )?,
                };

                #[deny(unreachable_patterns)]
                match typename {
                    $(
                        $typename =>
                            <$ty as $crate::decode::FromJson>::from_json(
                                value, path,
                            )
                            .map(Self::$variant),
                    )*
                    _ => Err(DecodeError::UnknownVariant {
                        path: path.to_string(),
                        family: $family,
                        typename: typename.to_owned(),
                    }),
                }
            }

            fn null(
                path: $crate::decode::Path<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                Err($crate::error::DecodeError::InvalidInterface {
                    path: path.to_string(),
                    family: $family,
                    found: $crate::error::JsonType::Null,
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                match self {
                    $(
                        Self::$variant(inner) =>
                            serde::Serialize::serialize(inner, serializer),
                    )*
                }
            }
        }

        $(
            impl From<$ty> for $name {
                #[inline]
                fn from(inner: $ty) -> Self {
                    Self::$variant(inner)
                }
            }
        )*
    }
}
