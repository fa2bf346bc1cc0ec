use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::{entities::token::Claims, errors::AuthError, settings::AppConfig};

/// Verifies bearer tokens issued by the platform's identity provider and
/// extracts the caller's claims. This service only decodes; it never mints
/// tokens.
#[derive(Clone)]
pub struct JwtService {
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}
