//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, SignedToken, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// The only algorithm tokens are signed with or accepted under
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Service for signing and verifying JWTs with a shared secret
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Generates a new token pair (access + refresh tokens) for a user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(DomainError)` - Signing failed
    pub fn issue_pair(&self, user_id: i64) -> Result<TokenPair, DomainError> {
        let access = self.issue(user_id, self.config.access_token_expiry_seconds)?;
        let refresh = self.issue(user_id, self.config.refresh_token_expiry_seconds)?;
        Ok(TokenPair { access, refresh })
    }

    fn issue(&self, user_id: i64, ttl_seconds: i64) -> Result<SignedToken, DomainError> {
        let claims = Claims::new(user_id, ttl_seconds);
        let token = self.encode_jwt(&claims)?;
        Ok(SignedToken { token, claims })
    }

    /// Encodes claims into a JWT
    pub fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(SIGNING_ALGORITHM), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns its claims
    ///
    /// The header algorithm is checked before the signature so that a token
    /// signed under any other algorithm is refused outright.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is malformed, expired, forged, or lacks `user_id`
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let header =
            decode_header(token).map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;
        if header.alg != SIGNING_ALGORITHM {
            return Err(DomainError::Token(TokenError::UnexpectedAlgorithm));
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| DomainError::Token(map_jwt_error(e.kind())))?;

        Ok(token_data.claims)
    }
}

fn map_jwt_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidAlgorithm => TokenError::UnexpectedAlgorithm,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
            claim: claim.clone(),
        },
        // Claims failed to deserialize: user_id absent or not an integer
        ErrorKind::Json(_) => TokenError::MissingClaim {
            claim: "user_id".to_string(),
        },
        _ => TokenError::InvalidTokenFormat,
    }
}
