//! Open string enumerations.
//!
//! The API declares enumerations such as `ClusterState` as a set of known
//! strings, but servers may send values newer than the client. The
//! [`string_enum!`](crate::string_enum) macro declares a newtype over a string
//! with one associated constant per known value, so unknown values are kept
//! instead of rejected.
//!
//! ## Examples
//!
//! ```
//! ocm_model_core::string_enum! {
//!     /// Power state of a machine.
//!     pub struct PowerState {
//!         /// The machine is running.
//!         ON = "on",
//!         /// The machine is stopped.
//!         OFF = "off",
//!     }
//! }
//!
//! let state: PowerState = serde_json::from_str(r#""on""#).unwrap();
//! assert_eq!(state, PowerState::ON);
//! assert!(state.is_known());
//!
//! let future: PowerState = serde_json::from_str(r#""suspended""#).unwrap();
//! assert!(!future.is_known());
//! assert_eq!(future.to_string(), "suspended");
//! ```

/// Declares an open string enumeration.
///
/// The generated type derives `Debug`, `Clone`, `Default` (the empty string),
/// `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord` and serializes as a plain
/// JSON string. The calling crate must depend on `serde`.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$const_meta:meta])*
                $constant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name(::std::borrow::Cow<'static, str>);

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $constant: $name = $name(::std::borrow::Cow::Borrowed($value));
            )*

            /// Every value declared by the API, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($value),*];

            /// Creates a value from any string, known or not.
            pub fn new(value: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                Self(value.into())
            }

            /// Returns the wire representation.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the value is one of [`Self::KNOWN`].
            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(&self.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(Self(::std::borrow::Cow::Owned(value.to_owned())))
            }
        }

        impl From<&'static str> for $name {
            fn from(value: &'static str) -> Self {
                Self(::std::borrow::Cow::Borrowed(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(::std::borrow::Cow::Owned(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::string_enum! {
        /// Test enumeration.
        pub struct Flavor {
            VANILLA = "vanilla",
            /// Chocolate.
            CHOCOLATE = "chocolate",
        }
    }

    #[test]
    fn constants_compare_with_parsed_values() {
        let parsed: Flavor = "vanilla".parse().unwrap();
        assert_eq!(parsed, Flavor::VANILLA);
        assert_ne!(parsed, Flavor::CHOCOLATE);
        assert_eq!(Flavor::KNOWN, &["vanilla", "chocolate"]);
    }

    #[test]
    fn unknown_values_round_trip() {
        let parsed: Flavor = serde_json::from_str(r#""pistachio""#).unwrap();
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""pistachio""#);
    }

    #[test]
    fn default_is_the_empty_string() {
        assert_eq!(Flavor::default().as_str(), "");
        assert!(!Flavor::default().is_known());
    }

    #[test]
    fn conversions() {
        assert_eq!(Flavor::from("chocolate"), Flavor::CHOCOLATE);
        assert_eq!(Flavor::from("chocolate".to_string()), Flavor::CHOCOLATE);
        assert_eq!(Flavor::new("vanilla"), Flavor::VANILLA);
        assert_eq!(Flavor::CHOCOLATE.to_string(), "chocolate");
        assert_eq!(Flavor::VANILLA.as_ref(), "vanilla");
    }
}
