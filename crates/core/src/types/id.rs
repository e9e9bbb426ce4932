//! Newtype IDs for type-safe entity references.
//!
//! The backend is loose about id encoding: the same course id arrives as
//! `2` from one endpoint and `"2"` from another. IDs therefore deserialize
//! from either a JSON number or a numeric string, and always serialize as a
//! number.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize` as a plain number
/// - `Deserialize` from a number or a numeric string
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Display`, `FromStr`
/// - Conversion methods: `new()`, `as_i32()`
///
/// # Example
///
/// ```rust
/// # use sankalp_core::define_id;
/// define_id!(BatchId);
///
/// let id: BatchId = serde_json::from_str("\"7\"").unwrap();
/// assert_eq!(id, BatchId::new(7));
/// assert_eq!(serde_json::to_string(&id).unwrap(), "7");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                #[serde(untagged)]
                enum Repr {
                    Number(i32),
                    Text(String),
                }

                match Repr::deserialize(deserializer)? {
                    Repr::Number(id) => Ok(Self(id)),
                    Repr::Text(text) => text.parse().map_err(|_| {
                        <D::Error as ::serde::de::Error>::custom(format!(
                            "invalid {}: {text:?}",
                            stringify!($name)
                        ))
                    }),
                }
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(CourseId);
define_id!(ModuleId);
define_id!(MaterialId);
define_id!(RegistrationId);
