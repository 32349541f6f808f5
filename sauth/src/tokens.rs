//! Signed access and refresh tokens.
//!
//! Both kinds are stateless HS256 JWTs signed with separate secrets. Validity
//! comes only from the signature and the embedded expiry; there is no
//! revocation list.

use std::time::Duration;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use scommon::{AccountId, SecretString};

use crate::{AccessGrant, AuthError, Claims, TokenError, TokenErrorKind, TokenKind, TokenPair};

pub const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(15 * 60);
pub const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub access_secret: SecretString,
    pub refresh_secret: SecretString,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl SessionConfig {
    pub fn new(
        access_secret: impl Into<SecretString>,
        refresh_secret: impl Into<SecretString>,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: DEFAULT_ACCESS_TTL,
            refresh_ttl: DEFAULT_REFRESH_TTL,
        }
    }

    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    pub fn with_refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.access_secret.is_blank() || self.refresh_secret.is_blank() {
            return Err(AuthError::invalid_request(
                "token signing secrets must not be empty",
            ));
        }

        if self.access_ttl.as_secs() == 0 {
            return Err(AuthError::invalid_request(
                "access token lifetime must be at least one second",
            ));
        }

        if self.access_ttl >= self.refresh_ttl {
            return Err(AuthError::invalid_request(
                "access token lifetime must be shorter than refresh token lifetime",
            ));
        }

        Ok(())
    }
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &SecretString) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.expose().as_bytes()),
            decoding: DecodingKey::from_secret(secret.expose().as_bytes()),
        }
    }
}

pub struct SessionIssuer {
    access: SigningKeys,
    refresh: SigningKeys,
    access_ttl: Duration,
    refresh_ttl: Duration,
    validation: Validation,
}

impl SessionIssuer {
    pub fn new(config: SessionConfig) -> Result<Self, AuthError> {
        config.validate()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            access: SigningKeys::from_secret(&config.access_secret),
            refresh: SigningKeys::from_secret(&config.refresh_secret),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
            validation,
        })
    }

    pub fn issue(&self, account_id: &AccountId) -> Result<TokenPair, AuthError> {
        self.issue_at(account_id, get_current_timestamp())
    }

    /// Mints a pair as if the current time were `now` (unix seconds).
    pub fn issue_at(&self, account_id: &AccountId, now: u64) -> Result<TokenPair, AuthError> {
        let (access_token, access_expires_at) = self.sign(account_id, TokenKind::Access, now)?;
        let (refresh_token, refresh_expires_at) =
            self.sign(account_id, TokenKind::Refresh, now)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    pub fn issue_access(&self, account_id: &AccountId) -> Result<AccessGrant, AuthError> {
        let (access_token, expires_at) =
            self.sign(account_id, TokenKind::Access, get_current_timestamp())?;
        Ok(AccessGrant {
            access_token,
            expires_at,
        })
    }

    pub fn verify_access(&self, token: &str) -> Result<AccountId, TokenError> {
        self.verify(token, TokenKind::Access)
            .map(|claims| AccountId::new(claims.sub))
    }

    pub fn verify_refresh(&self, token: &str) -> Result<AccountId, TokenError> {
        self.verify(token, TokenKind::Refresh)
            .map(|claims| AccountId::new(claims.sub))
    }

    fn keys(&self, kind: TokenKind) -> &SigningKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    fn sign(
        &self,
        account_id: &AccountId,
        kind: TokenKind,
        now: u64,
    ) -> Result<(String, u64), AuthError> {
        let exp = now.saturating_add(self.ttl(kind).as_secs());
        let claims = Claims {
            sub: account_id.as_str().to_string(),
            kind,
            iat: now,
            exp,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys(kind).encoding)
            .map_err(|error| {
                AuthError::signing(format!("failed to sign {} token: {error}", kind.as_str()))
            })?;
        Ok((token, exp))
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let decoded = decode::<Claims>(token, &self.keys(expected).decoding, &self.validation);

        let claims = match decoded {
            Ok(data) => data.claims,
            Err(error) => {
                let error = TokenError::from(error);
                if error.kind == TokenErrorKind::SignatureInvalid
                    && self.signed_as_other_kind(token, expected)
                {
                    return Err(wrong_kind(expected));
                }
                return Err(error);
            }
        };

        if claims.kind != expected {
            return Err(wrong_kind(expected));
        }

        Ok(claims)
    }

    // A token that fails the expected key but verifies under the other one
    // is a well-formed token of the wrong kind.
    fn signed_as_other_kind(&self, token: &str, expected: TokenKind) -> bool {
        let other = match expected {
            TokenKind::Access => TokenKind::Refresh,
            TokenKind::Refresh => TokenKind::Access,
        };

        let mut validation = self.validation.clone();
        validation.validate_exp = false;
        matches!(
            decode::<Claims>(token, &self.keys(other).decoding, &validation),
            Ok(data) if data.claims.kind == other
        )
    }
}

fn wrong_kind(expected: TokenKind) -> TokenError {
    TokenError::wrong_kind(format!("token kind must be {}", expected.as_str()))
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("keys", &"[REDACTED]")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}
