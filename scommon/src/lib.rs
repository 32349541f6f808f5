//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use scommon::{AccountId, GenerationOptions, SecretString, TraceId};
//!
//! let account = AccountId::from("account-1");
//! let trace = TraceId::new("trace-1");
//! let secret = SecretString::new("hunter2");
//!
//! let options = GenerationOptions::default().with_temperature(0.7);
//! assert_eq!(account.as_str(), "account-1");
//! assert_eq!(trace.to_string(), "trace-1");
//! assert_eq!(format!("{secret:?}"), "[REDACTED]");
//! assert_eq!(options.temperature, Some(0.7));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use scommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Cross-crate identifier newtypes.
    //!
    //! ```rust
    //! use scommon::{AccountId, TraceId};
    //!
    //! let account = AccountId::new("0b5c2a34");
    //! let trace = TraceId::from("trace-42");
    //!
    //! assert_eq!(account.to_string(), "0b5c2a34");
    //! assert_eq!(trace.as_str(), "trace-42");
    //! ```

    use std::fmt::{Display, Formatter};

    /// Stable identifier of a registered account.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct AccountId(String);

    impl AccountId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }

        pub fn into_inner(self) -> String {
            self.0
        }
    }

    impl Display for AccountId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for AccountId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for AccountId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    /// Per-request correlation id carried through log lines.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct TraceId(String);

    impl TraceId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for TraceId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for TraceId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for TraceId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod model {
    //! Shared generation settings used by request types.
    //!
    //! ```rust
    //! use scommon::GenerationOptions;
    //!
    //! let options = GenerationOptions::default()
    //!     .with_temperature(0.2)
    //!     .with_max_tokens(128);
    //!
    //! assert_eq!(options.temperature, Some(0.2));
    //! assert_eq!(options.max_tokens, Some(128));
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GenerationOptions {
        pub temperature: Option<f32>,
        pub max_tokens: Option<u32>,
    }

    impl GenerationOptions {
        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
            self.max_tokens = Some(max_tokens);
            self
        }
    }
}

pub mod secret {
    //! Redacted, zero-on-drop string holder for keys, signing secrets and passwords.
    //!
    //! ```rust
    //! use scommon::SecretString;
    //!
    //! let secret = SecretString::new("sk-123");
    //! assert_eq!(secret.expose(), "sk-123");
    //! assert_eq!(format!("{secret:?}"), "[REDACTED]");
    //! ```

    #[derive(Clone, PartialEq, Eq)]
    pub struct SecretString {
        value: String,
    }

    impl SecretString {
        pub fn new(value: impl Into<String>) -> Self {
            Self {
                value: value.into(),
            }
        }

        pub fn expose(&self) -> &str {
            self.value.as_str()
        }

        pub fn is_empty(&self) -> bool {
            self.value.is_empty()
        }

        pub fn is_blank(&self) -> bool {
            self.value.trim().is_empty()
        }
    }

    impl std::fmt::Debug for SecretString {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("[REDACTED]")
        }
    }

    impl From<String> for SecretString {
        fn from(value: String) -> Self {
            Self::new(value)
        }
    }

    impl From<&str> for SecretString {
        fn from(value: &str) -> Self {
            Self::new(value)
        }
    }

    impl Drop for SecretString {
        fn drop(&mut self) {
            // Zero bytes are valid UTF-8, so the String invariant holds.
            unsafe {
                self.value.as_mut_vec().fill(0);
            }
        }
    }
}

pub use context::{AccountId, TraceId};
pub use future::BoxFuture;
pub use model::GenerationOptions;
pub use secret::SecretString;
