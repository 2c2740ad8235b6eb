//! Session record persisted in client storage

use std::collections::HashSet;

use common::ClientResult;
use serde::{Deserialize, Serialize};

use crate::jwt::decode_claims;

/// Decoded token claims plus the raw token and the cached favorite ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_recipes: Option<Vec<String>>,
}

impl SessionRecord {
    /// Build a record from a freshly issued token
    pub fn from_token(token: &str) -> ClientResult<Self> {
        let claims = decode_claims(token)?;
        Ok(Self {
            user_id: claims.user_id,
            name: claims.name,
            email: claims.email,
            token: token.to_string(),
            saved_recipes: claims.saved_recipes,
        })
    }

    /// Favorite recipe ids as a set; empty when the server never sent any
    pub fn favorite_ids(&self) -> HashSet<String> {
        self.saved_recipes
            .iter()
            .flatten()
            .cloned()
            .collect()
    }
}
