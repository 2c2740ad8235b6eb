//! API models for request and response payloads

use serde::{Deserialize, Serialize};

pub mod recipe;

pub use recipe::{
    CommentRequest, CreateRecipeRequest, CreatedRecipe, Person, Recipe, RecipeComment,
    UpdateRecipeRequest,
};

/// Outcome flag carried by every response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Response envelope with a payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub payload: T,
}

/// Response envelope without a payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAck {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
}

/// Request for user registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request for user sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload of a successful registration or sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    pub token: String,
}
