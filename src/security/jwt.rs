use crate::security::errors::AuthError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Verifies access tokens issued by the identity provider.
///
/// Tokens are HS256-signed with the project's shared secret; sign-up and
/// sign-in happen at the provider, this service only checks signatures.
pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The provider sets an audience we do not pin.
        validation.validate_aud = false;

        JwtService {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn decode_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        jsonwebtoken::decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!("Token decoding error: {:?}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
    /// Issued at (as UTC timestamp)
    #[serde(default)]
    pub iat: Option<usize>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};

    fn token(secret: &str, sub: &str, exp: usize) -> String {
        let claims = AccessClaims {
            sub: sub.to_string(),
            exp,
            iat: None,
            email: None,
            role: Some("authenticated".to_string()),
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[test]
    fn accepts_token_signed_with_shared_secret() {
        let service = JwtService::new("secret");
        let claims = service
            .decode_token(&token("secret", "user-42", far_future()))
            .unwrap();
        assert_eq!(claims.sub, "user-42");
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let service = JwtService::new("secret");
        let result = service.decode_token(&token("other", "user-42", far_future()));
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn reports_expired_tokens() {
        let service = JwtService::new("secret");
        let result = service.decode_token(&token("secret", "user-42", 1_000));
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }
}
