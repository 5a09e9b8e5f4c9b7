//! Closed, string-valued enumerations.
//!
//! [`EnumDescriptor`] is the schema-level view used by the model engine;
//! [`wire_enum!`](crate::wire_enum) declares a Rust enum backed by one.

use crate::error::ValidationError;

/// A closed set of canonical wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: &'static str,
    /// Canonical values in declared order.
    pub values: &'static [&'static str],
}

impl EnumDescriptor {
    /// Strict lookup: exact match only, no case folding.
    ///
    /// `None` and `""` are rejected the same way as unknown strings.
    pub fn from_value(&self, value: Option<&str>) -> Result<&'static str, ValidationError> {
        match value {
            None | Some("") => Err(ValidationError::InvalidArgument(
                "Value cannot be null or empty!".to_string(),
            )),
            Some(v) => self
                .values
                .iter()
                .copied()
                .find(|canonical| *canonical == v)
                .ok_or_else(|| {
                    ValidationError::InvalidArgument(format!("Cannot create enum from {v} value!"))
                }),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

/// Declares a closed enum whose variants map one-to-one onto wire strings.
///
/// The generated type gets an associated [`EnumDescriptor`], `as_str`,
/// `from_value`, `Display`, `FromStr`, `TryFrom<&str>` and string-valued
/// serde impls.
///
/// ```
/// use schemata_core::wire_enum;
///
/// wire_enum! {
///     /// Server-side encryption mode.
///     pub enum Encryption {
///         SseS3 => "SSE_S3",
///         SseKms => "SSE_KMS",
///     }
/// }
///
/// assert_eq!("SSE_KMS".parse::<Encryption>().unwrap(), Encryption::SseKms);
/// assert_eq!(Encryption::SseS3.to_string(), "SSE_S3");
/// assert!("sse_s3".parse::<Encryption>().is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant in declared order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const DESCRIPTOR: $crate::enumeration::EnumDescriptor =
                $crate::enumeration::EnumDescriptor {
                    name: stringify!($name),
                    values: &[$($wire),+],
                };

            /// Canonical wire string.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn from_value(value: Option<&str>) -> Result<Self, $crate::ValidationError> {
                let canonical = Self::DESCRIPTOR.from_value(value)?;
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == canonical)
                    .ok_or_else(|| {
                        $crate::ValidationError::InvalidArgument(format!(
                            "Cannot create enum from {canonical} value!"
                        ))
                    })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_value(Some(s))
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::ValidationError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::from_value(Some(s))
            }
        }

        impl From<$name> for $crate::Value {
            fn from(v: $name) -> Self {
                $crate::Value::String(v.as_str().to_string())
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let raw = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(Some(&raw)).map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}
