//! HTTP client for the recipe service
//!
//! Every request carries the bearer token of the current session when one
//! exists. Failures are logged and returned; nothing is retried.

use std::sync::Arc;

use common::{ClientConfig, ClientError, ClientResult, TokenSource};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{error, info};

use crate::models::{
    ApiAck, ApiEnvelope, CommentRequest, CreateRecipeRequest, CreatedRecipe, LoginRequest,
    Recipe, RegisterRequest, TokenPayload, UpdateRecipeRequest,
};

/// Body of a failed request; only the message is of interest
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Recipe service client
#[derive(Clone)]
pub struct RecipeClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenSource>,
}

impl RecipeClient {
    /// Create a new client for the service at `base_url`
    pub fn new(base_url: &str, tokens: Arc<dyn TokenSource>) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::BaseUrl(base_url.to_string()))?;

        let http = Client::builder().build()?;
        info!("Recipe client initialized with URL: {}", base_url);

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &ClientConfig, tokens: Arc<dyn TokenSource>) -> ClientResult<Self> {
        Self::new(&config.api_base_url, tokens)
    }

    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        let builder = self.http.request(method, self.url(segments)?);
        Ok(match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let request = builder.build()?;
        let authenticated = request.headers().contains_key(AUTHORIZATION);

        let response = self.http.execute(request).await.map_err(|e| {
            error!("Request failed: {}", e);
            ClientError::from(e)
        })?;

        let status = response.status();
        let url = response.url().clone();

        // A 401 without a token is a rejected sign-in, not an expired session
        if status == StatusCode::UNAUTHORIZED && authenticated {
            error!("Request to {} was not authorized", url.path());
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                message
            };

            error!("Request to {} failed with {}: {}", url.path(), status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to decode response from {}: {}", url.path(), e);
            ClientError::from(e)
        })
    }

    /// Register a new account
    pub async fn register(
        &self,
        payload: &RegisterRequest,
    ) -> ClientResult<ApiEnvelope<TokenPayload>> {
        info!("Registering account for: {}", payload.email);
        let builder = self.request(Method::POST, &["auth", "register"])?.json(payload);
        self.send(builder).await
    }

    /// Sign in with email and password
    pub async fn login(&self, payload: &LoginRequest) -> ClientResult<ApiEnvelope<TokenPayload>> {
        info!("Login attempt for user: {}", payload.email);
        let builder = self.request(Method::POST, &["auth", "signin"])?.json(payload);
        self.send(builder).await
    }

    /// Get all recipes
    pub async fn get_all_recipes(&self) -> ClientResult<Vec<Recipe>> {
        let builder = self.request(Method::GET, &["recipes"])?;
        let envelope: ApiEnvelope<Vec<Recipe>> = self.send(builder).await?;
        info!("Fetched {} recipes", envelope.payload.len());
        Ok(envelope.payload)
    }

    /// Get a recipe by ID
    pub async fn get_recipe(&self, id: &str) -> ClientResult<Recipe> {
        let builder = self.request(Method::GET, &["recipes", id])?;
        let envelope: ApiEnvelope<Recipe> = self.send(builder).await?;
        Ok(envelope.payload)
    }

    /// Create a recipe
    pub async fn create_recipe(
        &self,
        payload: &CreateRecipeRequest,
    ) -> ClientResult<ApiEnvelope<CreatedRecipe>> {
        info!("Creating recipe: {}", payload.title);
        let builder = self.request(Method::POST, &["recipes"])?.json(payload);
        self.send(builder).await
    }

    /// Update some fields of a recipe
    pub async fn update_recipe(
        &self,
        id: &str,
        payload: &UpdateRecipeRequest,
    ) -> ClientResult<ApiEnvelope<Recipe>> {
        info!("Updating recipe: {}", id);
        let builder = self.request(Method::PATCH, &["recipes", id])?.json(payload);
        self.send(builder).await
    }

    /// Delete a recipe
    pub async fn delete_recipe(&self, id: &str) -> ClientResult<ApiAck> {
        info!("Deleting recipe: {}", id);
        let builder = self.request(Method::DELETE, &["recipes", id])?;
        self.send(builder).await
    }

    /// Get recipes carrying all of `tags`, filtered by the service
    pub async fn get_recipes_by_tags(&self, tags: &[String]) -> ClientResult<Vec<Recipe>> {
        let builder = self
            .request(Method::GET, &["recipes", "filter", "tags"])?
            .query(&[("tags", tags.join(","))]);
        let envelope: ApiEnvelope<Vec<Recipe>> = self.send(builder).await?;
        Ok(envelope.payload)
    }

    /// Add a comment to a recipe
    pub async fn add_comment(&self, id: &str, text: &str) -> ClientResult<ApiEnvelope<Recipe>> {
        info!("Adding comment to recipe: {}", id);
        let payload = CommentRequest {
            text: text.to_string(),
        };
        let builder = self
            .request(Method::POST, &["recipes", id, "comment"])?
            .json(&payload);
        self.send(builder).await
    }

    /// Toggle a recipe in the user's favorites
    ///
    /// Returns the complete favorite id list after the toggle.
    pub async fn save_recipe(&self, id: &str) -> ClientResult<Vec<String>> {
        info!("Toggling favorite for recipe: {}", id);
        let builder = self.request(Method::POST, &["recipes", id, "save"])?;
        let envelope: ApiEnvelope<Vec<String>> = self.send(builder).await?;
        Ok(envelope.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::token::Anonymous;

    fn client(base: &str) -> RecipeClient {
        RecipeClient::new(base, Arc::new(Anonymous)).unwrap()
    }

    #[test]
    fn test_paths_are_joined_under_base() {
        let url = client("http://localhost:5000").url(&["recipes", "r1", "save"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/recipes/r1/save");

        let url = client("https://example.com/api/").url(&["auth", "signin"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/auth/signin");
    }

    #[test]
    fn test_ids_are_escaped() {
        let url = client("http://localhost:5000").url(&["recipes", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/recipes/a%2Fb");
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            RecipeClient::new("not a url", Arc::new(Anonymous)),
            Err(ClientError::BaseUrl(_))
        ));
        assert!(matches!(
            RecipeClient::new("mailto:chef@example.com", Arc::new(Anonymous)),
            Err(ClientError::BaseUrl(_))
        ));
    }
}
