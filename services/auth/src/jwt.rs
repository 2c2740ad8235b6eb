//! Token claims decoding
//!
//! The recipe service signs the token it returns from sign-in and
//! registration. The client never holds the signing key, so it only reads the
//! claims: signature and expiry are left for the server to enforce on every
//! authenticated request.

use common::ClientResult;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// JWT claims structure issued by the recipe service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// User ID
    pub user_id: String,
    /// Display name
    pub name: String,
    /// User email
    pub email: String,
    /// Recipe ids the user has saved, when the server embeds them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_recipes: Option<Vec<String>>,
    /// Issued at time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Expiration time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

fn claims_only() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

/// Decode the claims of a session token without verifying its signature
pub fn decode_claims(token: &str) -> ClientResult<Claims> {
    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &claims_only())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn sign(claims: &Claims, alg: Algorithm) -> String {
        encode(
            &Header::new(alg),
            claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .expect("Failed to sign test token")
    }

    fn sample_claims() -> Claims {
        Claims {
            user_id: "665f1c2ab9d1".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            saved_recipes: None,
            iat: Some(1_700_000_000),
            exp: Some(1_700_003_600),
        }
    }

    #[test]
    fn test_decodes_claims_signed_with_unknown_key() {
        let token = sign(&sample_claims(), Algorithm::HS256);
        let claims = decode_claims(&token).expect("Failed to decode claims");
        assert_eq!(claims, sample_claims());
    }

    #[test]
    fn test_expired_tokens_still_decode() {
        let mut claims = sample_claims();
        claims.exp = Some(1);
        let token = sign(&claims, Algorithm::HS512);
        assert_eq!(decode_claims(&token).unwrap().exp, Some(1));
    }

    #[test]
    fn test_saved_recipes_claim_is_optional() {
        let mut claims = sample_claims();
        claims.saved_recipes = Some(vec!["r1".to_string(), "r2".to_string()]);
        let token = sign(&claims, Algorithm::HS256);
        let decoded = decode_claims(&token).unwrap();
        assert_eq!(decoded.saved_recipes, Some(vec!["r1".to_string(), "r2".to_string()]));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("").is_err());
    }
}
