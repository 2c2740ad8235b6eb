//! Create-recipe page

use api::models::CreateRecipeRequest;
use auth::validation::{FormErrors, validate_required, validate_url};
use common::ClientError;
use tracing::info;

use super::{Submission, report, split_list, validate_list};
use crate::recipe_list::split_tags;
use crate::routes::Route;
use crate::state::AppContext;

/// Fields of the recipe form; ingredients and tags are comma separated
#[derive(Debug, Clone, Default)]
pub struct CreateRecipeForm {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub tags: String,
    pub image_url: String,
}

impl CreateRecipeForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("title", validate_required(&self.title, "Title is required"));
        errors.check(
            "ingredients",
            validate_list(&self.ingredients, "Ingredients are required"),
        );
        errors.check("steps", validate_required(&self.steps, "Steps are required"));
        if !self.image_url.trim().is_empty() {
            errors.check("imageUrl", validate_url(&self.image_url));
        }
        errors.into_result()
    }

    /// Request body for `author`
    pub fn to_request(&self, author: String) -> CreateRecipeRequest {
        let image_url = self.image_url.trim();
        CreateRecipeRequest {
            title: self.title.trim().to_string(),
            ingredients: split_list(&self.ingredients),
            steps: self.steps.trim().to_string(),
            tags: Some(split_tags(&self.tags)),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            author: Some(author),
        }
    }

    /// Create the recipe as the signed-in user and go home
    pub async fn submit(&self, ctx: &AppContext) -> Submission {
        if let Err(errors) = self.validate() {
            return Submission::Invalid(errors);
        }

        let Some(user) = ctx.session.current() else {
            return report(ctx, "Creating recipe", ClientError::Unauthorized).await;
        };

        match ctx.api.create_recipe(&self.to_request(user.user_id)).await {
            Ok(response) => {
                info!("Created recipe {}", response.payload.id);
                ctx.notifications.success(response.message).await;
                Submission::Done(Route::Home)
            }
            Err(e) => report(ctx, "Creating recipe", e).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CreateRecipeForm {
        CreateRecipeForm {
            title: " Pancakes ".to_string(),
            ingredients: "flour, milk,, eggs".to_string(),
            steps: "Mix and fry.".to_string(),
            tags: "breakfast, quick, breakfast".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_required_fields() {
        let errors = CreateRecipeForm::default().validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("ingredients"), Some("Ingredients are required"));
        assert_eq!(errors.get("steps"), Some("Steps are required"));
        assert_eq!(errors.get("tags"), None);
        assert_eq!(errors.get("imageUrl"), None);
    }

    #[test]
    fn test_ingredients_need_a_non_blank_item() {
        let mut form = form();
        form.ingredients = " , , ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("ingredients"), Some("Ingredients are required"));
        assert_eq!(errors.get("title"), None);
    }

    #[test]
    fn test_image_url_must_be_a_url_when_given() {
        let mut form = form();
        form.image_url = "not a url".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("imageUrl"), Some("Must be a valid URL"));

        form.image_url = "https://img.example.com/p.png".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_request_splits_lists() {
        let request = form().to_request("u1".to_string());
        assert_eq!(request.title, "Pancakes");
        assert_eq!(request.ingredients, ["flour", "milk", "eggs"]);
        assert_eq!(
            request.tags,
            Some(vec!["breakfast".to_string(), "quick".to_string()])
        );
        assert_eq!(request.image_url, None);
        assert_eq!(request.author.as_deref(), Some("u1"));
    }
}
