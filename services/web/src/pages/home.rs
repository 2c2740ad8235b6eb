//! Home page: searchable, tag-filtered recipe grid with favorites first

use std::collections::HashSet;
use std::fmt::Write as _;

use api::models::Recipe;
use common::ClientError;
use tracing::{error, info};

use super::report;
use crate::components::{RecipeCard, TagFilter};
use crate::favorites;
use crate::recipe_list::{RecipeFilter, RecipeView, available_tags, split_tags, visible_recipes};
use crate::state::AppContext;

pub struct HomePage {
    recipes: Vec<Recipe>,
    filter: RecipeFilter,
    favorites: HashSet<String>,
}

impl HomePage {
    /// Build the page from already fetched data
    pub fn new(recipes: Vec<Recipe>, query: &str, favorites: HashSet<String>) -> Self {
        Self {
            recipes,
            filter: RecipeFilter::from_query_string(query),
            favorites,
        }
    }

    /// Fetch every recipe; a failed fetch leaves the page empty
    pub async fn load(ctx: &AppContext, query: &str) -> Self {
        let recipes = match ctx.api.get_all_recipes().await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("Error fetching recipes: {}", e);
                Vec::new()
            }
        };

        Self::new(recipes, query, ctx.session.favorite_ids())
    }

    /// Recipes carrying every tag in `raw_tags`, filtered by the service
    pub async fn by_tags(ctx: &AppContext, raw_tags: &str) -> Option<Self> {
        let tags = split_tags(raw_tags);
        if tags.is_empty() {
            let err = ClientError::Validation("Select at least one tag".to_string());
            report(ctx, "Filtering by tags", err).await;
            return None;
        }

        match ctx.api.get_recipes_by_tags(&tags).await {
            Ok(recipes) => {
                info!("{} recipes tagged {}", recipes.len(), tags.join(","));
                Some(Self::new(recipes, "", ctx.session.favorite_ids()))
            }
            Err(e) => {
                report(ctx, "Filtering by tags", e).await;
                None
            }
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn visible(&self) -> Vec<RecipeView<'_>> {
        visible_recipes(&self.recipes, &self.filter, &self.favorites)
    }

    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.recipes)
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites.contains(recipe_id)
    }

    /// Replace the search text; returns the new query string
    pub fn set_query(&mut self, query: &str) -> String {
        self.filter.query = query.to_string();
        self.filter.to_query_string()
    }

    /// Select or deselect a tag; returns the new query string
    pub fn toggle_tag(&mut self, tag: &str) -> String {
        self.filter.toggle_tag(tag);
        self.filter.to_query_string()
    }

    /// Deselect every tag; returns the new query string
    pub fn clear_tags(&mut self) -> String {
        self.filter.tags.clear();
        self.filter.to_query_string()
    }

    /// Toggle a favorite and adopt the favorite set stored in the session
    pub async fn toggle_favorite(&mut self, ctx: &AppContext, recipe_id: &str) -> bool {
        let was_favorite = self.is_favorite(recipe_id);
        let is_favorite =
            favorites::toggle_favorite(&ctx.api, &ctx.session, recipe_id, was_favorite).await;
        self.favorites = ctx.session.favorite_ids();
        is_favorite
    }

    pub fn render(&self) -> String {
        let tags = self.available_tags();
        let mut out = String::new();

        let _ = writeln!(out, "Recipes");
        if !self.filter.query.trim().is_empty() {
            let _ = writeln!(out, "Search: {}", self.filter.query.trim());
        }
        let _ = writeln!(out, "{}", TagFilter::new(&tags, &self.filter.tags));

        let visible = self.visible();
        if visible.is_empty() {
            let _ = writeln!(out, "\nNo recipes found.");
        }
        for view in visible {
            let _ = writeln!(out, "\n{}", RecipeCard::new(view));
        }

        let _ = write!(out, "\nCreate a New Recipe: /create-recipe");
        out
    }
}
