//! External-provider contracts for text generation and speech synthesis.
//!
//! ```rust
//! use sprovider::{GenerationRequest, ProviderErrorKind, SpeechRequest};
//!
//! let request = GenerationRequest::new("gemini-2.5-pro", "Hello there");
//! assert!(request.validate().is_ok());
//!
//! let speech = SpeechRequest::new("", "en-IN-arohi");
//! assert_eq!(
//!     speech.validate().expect_err("empty text").kind,
//!     ProviderErrorKind::InvalidRequest
//! );
//! ```

pub mod credentials;
pub mod error;
pub mod model;
pub mod prelude;
pub mod provider;
pub mod resilience;

#[cfg(any(feature = "provider-gemini", feature = "provider-murf"))]
pub mod adapters;

pub use credentials::SecureCredentialManager;
pub use error::{ProviderError, ProviderErrorKind};
pub use model::{
    GenerationRequest, GenerationResponse, ProviderId, SpeechRequest, SpeechResponse, TokenUsage,
};
pub use provider::{GenerationProvider, ProviderFuture, SpeechProvider};
pub use resilience::{CallPolicy, NoopOperationHooks, ProviderOperationHooks, execute_with_timeout};
pub use scommon::{GenerationOptions, SecretString};

#[cfg(feature = "provider-gemini")]
pub use adapters::gemini;

#[cfg(feature = "provider-murf")]
pub use adapters::murf;
