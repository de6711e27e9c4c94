//! Fixed-vocabulary enumerations whose serialized form is a display label.
//!
//! Each variant has a stable code (the upper-case identifier callers see in
//! documentation) and a label (the literal text exchanged on the wire). The
//! derived serde impls go through the label; storage uses the `by_code`
//! adapters instead.

/// Declare an enum backed by a code/label table.
///
/// Generates `code()`, `label()`, `from_code()`, `from_label()`, `ALL` and
/// the `Vocabulary` impl, plus `Display`, `FromStr`, `Serialize` and
/// `Deserialize` implementations that go through the label.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($vocabulary:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The stable identifier of this value.
            pub fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            /// The human-readable label, which is also the serialized form.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Look a value up by its stable code.
            pub fn from_code(code: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.code() == code)
            }

            /// Look a value up by its label.
            ///
            /// When two codes share a label, the first declared wins.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.label() == label)
            }
        }

        impl $crate::domain::Vocabulary for $name {
            const NAME: &'static str = $vocabulary;

            fn code(&self) -> &'static str {
                $name::code(self)
            }

            fn from_code(code: &str) -> Option<Self> {
                $name::from_code(code)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| $crate::domain::DomainError::UnknownLabel {
                    vocabulary: $vocabulary,
                    label: s.to_string(),
                })
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse::<$name>().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use labeled_enum;

/// Code-level access to a labeled vocabulary.
///
/// Labels are not unique across a vocabulary, codes are. Anything that must
/// read back exactly what it wrote goes through the code.
pub trait Vocabulary: Sized + Copy {
    /// Vocabulary name used in error messages.
    const NAME: &'static str;

    fn code(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;
}

fn unknown_code<T: Vocabulary, E: serde::de::Error>(code: String) -> E {
    E::custom(super::DomainError::UnknownCode {
        vocabulary: T::NAME,
        code,
    })
}

/// Serde adapter writing a vocabulary value by code.
pub mod by_code {
    use super::{unknown_code, Vocabulary};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Vocabulary, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.code())
    }

    pub fn deserialize<'de, T: Vocabulary, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let code = String::deserialize(deserializer)?;
        T::from_code(&code).ok_or_else(|| unknown_code::<T, D::Error>(code))
    }
}

/// Serde adapter writing an optional vocabulary value by code.
pub mod optional_by_code {
    use super::{unknown_code, Vocabulary};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Vocabulary, S: Serializer>(
        value: &Option<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(value.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T: Vocabulary, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<T>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(code) => T::from_code(&code)
                .map(Some)
                .ok_or_else(|| unknown_code::<T, D::Error>(code)),
            None => Ok(None),
        }
    }
}
