//! Recipe detail page: full recipe, comments, edit and delete

use std::fmt;

use api::models::{Recipe, UpdateRecipeRequest};
use auth::validation::{FormErrors, validate_required, validate_url};
use tracing::info;

use super::{Submission, report, split_list, validate_list};
use crate::components::recipe_card::{creator_info, tag_line};
use crate::recipe_list::split_tags;
use crate::routes::Route;
use crate::state::AppContext;

pub struct RecipeDetailPage {
    recipe: Recipe,
    is_favorite: bool,
}

impl RecipeDetailPage {
    pub fn new(recipe: Recipe, is_favorite: bool) -> Self {
        Self {
            recipe,
            is_favorite,
        }
    }

    /// Fetch one recipe; failures are reported and yield `None`
    pub async fn load(ctx: &AppContext, id: &str) -> Option<Self> {
        match ctx.api.get_recipe(id).await {
            Ok(recipe) => {
                let is_favorite = ctx.session.favorite_ids().contains(&recipe.id);
                Some(Self::new(recipe, is_favorite))
            }
            Err(e) => {
                report(ctx, "Loading recipe", e).await;
                None
            }
        }
    }

    fn route(&self) -> Route {
        Route::RecipeDetail(self.recipe.id.clone())
    }

    /// Post a comment and show the updated recipe
    pub async fn add_comment(&mut self, ctx: &AppContext, text: &str) -> Submission {
        let mut errors = FormErrors::new();
        errors.check("text", validate_required(text, "Comment is required"));
        if let Err(errors) = errors.into_result() {
            return Submission::Invalid(errors);
        }

        match ctx.api.add_comment(&self.recipe.id, text.trim()).await {
            Ok(response) => {
                self.recipe = response.payload;
                ctx.notifications.success(response.message).await;
                Submission::Done(self.route())
            }
            Err(e) => report(ctx, "Adding comment", e).await,
        }
    }

    /// Send the changed fields and show the updated recipe
    pub async fn update(&mut self, ctx: &AppContext, form: &UpdateRecipeForm) -> Submission {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(errors) => return Submission::Invalid(errors),
        };

        match ctx.api.update_recipe(&self.recipe.id, &request).await {
            Ok(response) => {
                info!("Updated recipe {}", self.recipe.id);
                self.recipe = response.payload;
                ctx.notifications.success(response.message).await;
                Submission::Done(self.route())
            }
            Err(e) => report(ctx, "Updating recipe", e).await,
        }
    }

    /// Delete the recipe and go home
    pub async fn delete(self, ctx: &AppContext) -> Submission {
        match ctx.api.delete_recipe(&self.recipe.id).await {
            Ok(ack) => {
                info!("Deleted recipe {}", self.recipe.id);
                ctx.notifications.success(ack.message).await;
                Submission::Done(Route::Home)
            }
            Err(e) => report(ctx, "Deleting recipe", e).await,
        }
    }
}

impl fmt::Display for RecipeDetailPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = &self.recipe;
        let marker = if self.is_favorite { "[*]" } else { "[ ]" };

        writeln!(f, "{} {}", marker, recipe.title)?;
        writeln!(f, "{}", tag_line(&recipe.tags))?;
        writeln!(f, "{}", creator_info(&recipe.author))?;
        if let Some(image_url) = recipe.image_url.as_deref().filter(|u| !u.is_empty()) {
            writeln!(f, "Image: {}", image_url)?;
        }

        writeln!(f, "\nIngredients:")?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }
        writeln!(f, "\nSteps:\n{}", recipe.steps.trim())?;

        write!(f, "\nComments ({}):", recipe.comments.len())?;
        for comment in &recipe.comments {
            write!(
                f,
                "\n  {} ({}): {}",
                comment.user.name,
                comment.date.format("%Y-%m-%d"),
                comment.text
            )?;
        }
        Ok(())
    }
}

/// Edited fields; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeForm {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub tags: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateRecipeForm {
    /// Validate the provided fields and build the partial update
    pub fn to_request(&self) -> Result<UpdateRecipeRequest, FormErrors> {
        let mut errors = FormErrors::new();
        if let Some(title) = &self.title {
            errors.check("title", validate_required(title, "Title is required"));
        }
        if let Some(ingredients) = &self.ingredients {
            errors.check(
                "ingredients",
                validate_list(ingredients, "Ingredients are required"),
            );
        }
        if let Some(steps) = &self.steps {
            errors.check("steps", validate_required(steps, "Steps are required"));
        }
        if let Some(image_url) = &self.image_url {
            errors.check("imageUrl", validate_url(image_url));
        }

        let request = UpdateRecipeRequest {
            title: self.title.as_deref().map(|t| t.trim().to_string()),
            ingredients: self.ingredients.as_deref().map(split_list),
            steps: self.steps.as_deref().map(|s| s.trim().to_string()),
            tags: self.tags.as_deref().map(split_tags),
            image_url: self.image_url.as_deref().map(|u| u.trim().to_string()),
        };
        if request.is_empty() {
            errors.check("recipe", Err("Nothing to update".to_string()));
        }

        errors.into_result().map(|()| request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_list::fixtures::recipe;
    use api::models::{Person, RecipeComment};

    #[test]
    fn test_render_lists_ingredients_and_comments() {
        let mut recipe = recipe("r1", "Pancakes", &["breakfast"]);
        recipe.ingredients = vec!["flour".to_string(), "milk".to_string()];
        recipe.steps = "Mix and fry.".to_string();
        recipe.comments = vec![RecipeComment {
            user: Person {
                id: "u2".to_string(),
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
            },
            text: "Lovely".to_string(),
            date: recipe.created_at,
        }];

        let text = RecipeDetailPage::new(recipe, true).to_string();
        assert!(text.starts_with("[*] Pancakes\nbreakfast\nBy Ada <ada@example.com>\n"));
        assert!(text.contains("Ingredients:\n  - flour\n  - milk\n"));
        assert!(text.contains("Steps:\nMix and fry.\n"));
        assert!(text.ends_with("Comments (1):\n  Bob (2024-05-01): Lovely"));
    }

    #[test]
    fn test_update_form_builds_partial_request() {
        let form = UpdateRecipeForm {
            title: Some(" Better ".to_string()),
            tags: Some("a, b".to_string()),
            ..Default::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.title.as_deref(), Some("Better"));
        assert_eq!(request.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(request.steps.is_none());
        assert!(request.ingredients.is_none());
    }

    #[test]
    fn test_update_form_rejects_blank_and_empty_edits() {
        let errors = UpdateRecipeForm::default().to_request().unwrap_err();
        assert_eq!(errors.get("recipe"), Some("Nothing to update"));

        let form = UpdateRecipeForm {
            title: Some("  ".to_string()),
            ingredients: Some(",,".to_string()),
            image_url: Some("ftp://files".to_string()),
            ..Default::default()
        };
        let errors = form.to_request().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("ingredients"), Some("Ingredients are required"));
        assert_eq!(errors.get("imageUrl"), Some("Must be a valid URL"));
    }
}
