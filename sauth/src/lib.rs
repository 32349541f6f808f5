//! Account credentials and session tokens.
//!
//! `CredentialStore` owns "one account per unique username, password never
//! stored in clear form". `SessionIssuer` mints and verifies short-lived
//! access tokens and longer-lived refresh tokens.
//!
//! ```rust
//! use sauth::{SessionConfig, SessionIssuer, TokenErrorKind};
//! use scommon::AccountId;
//!
//! let issuer = SessionIssuer::new(SessionConfig::new("access-secret", "refresh-secret"))
//!     .expect("valid config");
//! let pair = issuer.issue(&AccountId::new("account-1")).expect("signed");
//!
//! assert_eq!(issuer.verify_access(&pair.access_token).expect("valid").as_str(), "account-1");
//! assert_eq!(
//!     issuer.verify_access(&pair.refresh_token).expect_err("wrong kind").kind,
//!     TokenErrorKind::WrongKind
//! );
//! ```

mod adapter;
mod backend;
mod backends;
mod credentials;
mod error;
mod password;
mod tokens;
mod types;

pub mod prelude {
    pub use crate::{
        Account, AccountBackend, AccountBackendConfig, AuthError, AuthErrorKind,
        CredentialStore, InMemoryAccountBackend, SessionAccessGate, SessionConfig, SessionIssuer,
        SqliteAccountBackend, TokenError, TokenErrorKind, TokenPair, create_account_backend,
    };
}

pub use adapter::SessionAccessGate;
pub use backend::{
    AccountBackend, AccountBackendConfig, InMemoryAccountBackend, SqliteAccountBackend,
    create_account_backend,
};
pub use credentials::CredentialStore;
pub use error::{AuthError, AuthErrorKind, TokenError, TokenErrorKind};
pub use tokens::{DEFAULT_ACCESS_TTL, DEFAULT_REFRESH_TTL, SessionConfig, SessionIssuer};
pub use types::{
    AccessGrant, Account, AccountRecord, Claims, PasswordHash, TokenKind, TokenPair,
};
