//! Recipe list view-model
//!
//! Turns the fetched recipe collection, the search text, the selected tags and
//! the favorite set into the ordered list the home page shows. Search text and
//! tags live in the location query string (`q` and comma-joined `tags`) so
//! they survive navigation and can be shared.

use std::collections::{BTreeSet, HashSet};

use api::models::Recipe;
use url::form_urlencoded;

/// Search text and selected tags of the home page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub query: String,
    pub tags: Vec<String>,
}

impl RecipeFilter {
    /// Read `q` and `tags` from a query string (with or without the leading `?`)
    pub fn from_query_string(query: &str) -> Self {
        let mut filter = RecipeFilter::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => filter.query = value.into_owned(),
                "tags" => filter.tags = split_tags(&value),
                _ => {}
            }
        }

        filter
    }

    /// Encode as a query string; empty parameters are left out
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.query.trim().is_empty() {
            serializer.append_pair("q", &self.query);
        }
        if !self.tags.is_empty() {
            serializer.append_pair("tags", &self.tags.join(","));
        }
        serializer.finish()
    }

    /// Add `tag` if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Whether `recipe` passes both the search text and the tag filter
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_query(recipe) && self.matches_tags(recipe)
    }

    fn matches_query(&self, recipe: &Recipe) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        recipe.title.to_lowercase().contains(&needle)
            || recipe
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(&needle))
            || recipe.steps.to_lowercase().contains(&needle)
    }

    // Every selected tag must be present; an untagged recipe only passes an empty selection.
    fn matches_tags(&self, recipe: &Recipe) -> bool {
        self.tags.iter().all(|tag| recipe.tags.contains(tag))
    }
}

/// Split a comma-joined tag list, dropping blanks and duplicates
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && seen.insert(*tag))
        .map(String::from)
        .collect()
}

/// A recipe as shown in the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeView<'a> {
    pub recipe: &'a Recipe,
    pub is_favorite: bool,
}

/// Filter `recipes`, then move favorites ahead of the rest.
///
/// The sort is stable: within each group recipes keep their fetch order.
pub fn visible_recipes<'a>(
    recipes: &'a [Recipe],
    filter: &RecipeFilter,
    favorites: &HashSet<String>,
) -> Vec<RecipeView<'a>> {
    let mut views: Vec<RecipeView<'a>> = recipes
        .iter()
        .filter(|recipe| filter.matches(recipe))
        .map(|recipe| RecipeView {
            recipe,
            is_favorite: favorites.contains(&recipe.id),
        })
        .collect();

    views.sort_by_key(|view| !view.is_favorite);
    views
}

/// Distinct tags across `recipes`, sorted
pub fn available_tags(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|recipe| recipe.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::recipe;
    use super::*;

    fn ids(views: &[RecipeView<'_>]) -> Vec<String> {
        views.iter().map(|v| v.recipe.id.clone()).collect()
    }

    fn favorites(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn search(query: &str) -> RecipeFilter {
        RecipeFilter {
            query: query.to_string(),
            tags: Vec::new(),
        }
    }

    fn tagged(tags: &[&str]) -> RecipeFilter {
        RecipeFilter {
            query: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_untagged_recipe_excluded_by_tag_selection() {
        let recipes = vec![recipe("1", "Plain", &[]), recipe("2", "Salad", &["veg"])];

        let shown = visible_recipes(&recipes, &tagged(&["veg"]), &HashSet::new());
        assert_eq!(ids(&shown), ["2"]);

        let shown = visible_recipes(&recipes, &tagged(&[]), &HashSet::new());
        assert_eq!(ids(&shown), ["1", "2"]);
    }

    #[test]
    fn test_every_selected_tag_is_required() {
        let recipes = vec![
            recipe("1", "Salad", &["veg"]),
            recipe("2", "Quick salad", &["veg", "quick"]),
        ];
        let shown = visible_recipes(&recipes, &tagged(&["veg", "quick"]), &HashSet::new());
        assert_eq!(ids(&shown), ["2"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring_of_title() {
        let recipes = vec![
            recipe("1", "Chocolate Cake", &[]),
            recipe("2", "Vanilla Cake", &[]),
        ];
        let shown = visible_recipes(&recipes, &search("choc"), &HashSet::new());
        assert_eq!(ids(&shown), ["1"]);

        let shown = visible_recipes(&recipes, &search("CAKE"), &HashSet::new());
        assert_eq!(ids(&shown), ["1", "2"]);
    }

    #[test]
    fn test_query_matches_ingredients_and_steps() {
        let mut by_ingredient = recipe("1", "Brownies", &[]);
        by_ingredient.ingredients = vec!["Dark Chocolate".to_string(), "Eggs".to_string()];
        let mut by_steps = recipe("2", "Mousse", &[]);
        by_steps.steps = "Melt the chocolate slowly.".to_string();
        let unrelated = recipe("3", "Bread", &[]);
        let recipes = vec![by_ingredient, by_steps, unrelated];

        let shown = visible_recipes(&recipes, &search("chocolate"), &HashSet::new());
        assert_eq!(ids(&shown), ["1", "2"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let recipes = vec![
            recipe("1", "Chocolate Cake", &["dessert"]),
            recipe("2", "Hot chocolate", &["drink"]),
            recipe("3", "Vanilla Cake", &["dessert"]),
        ];
        let filter = RecipeFilter {
            query: "choc".to_string(),
            tags: vec!["dessert".to_string()],
        };

        let once: Vec<Recipe> = visible_recipes(&recipes, &filter, &HashSet::new())
            .into_iter()
            .map(|v| v.recipe.clone())
            .collect();
        let twice = visible_recipes(&once, &filter, &HashSet::new());
        assert_eq!(ids(&twice), ["1"]);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_favorites_first_stable_within_groups() {
        let recipes = vec![
            recipe("1", "One", &[]),
            recipe("2", "Two", &[]),
            recipe("3", "Three", &[]),
        ];
        let shown = visible_recipes(&recipes, &RecipeFilter::default(), &favorites(&["2"]));
        assert_eq!(ids(&shown), ["2", "1", "3"]);
        assert!(shown[0].is_favorite);
        assert!(!shown[1].is_favorite);

        let recipes = vec![
            recipe("a", "A", &[]),
            recipe("b", "B", &[]),
            recipe("c", "C", &[]),
            recipe("d", "D", &[]),
        ];
        let shown = visible_recipes(&recipes, &RecipeFilter::default(), &favorites(&["d", "b"]));
        assert_eq!(ids(&shown), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_query_string_round_trip_and_omission() {
        let filter = RecipeFilter::from_query_string("?q=hot%20choc&tags=veg,%20quick,,veg");
        assert_eq!(filter.query, "hot choc");
        assert_eq!(filter.tags, ["veg", "quick"]);

        assert_eq!(filter.to_query_string(), "q=hot+choc&tags=veg%2Cquick");
        assert_eq!(RecipeFilter::default().to_query_string(), "");
        assert_eq!(RecipeFilter::from_query_string(""), RecipeFilter::default());
    }

    #[test]
    fn test_toggle_tag() {
        let mut filter = RecipeFilter::default();
        filter.toggle_tag("veg");
        filter.toggle_tag("quick");
        assert_eq!(filter.tags, ["veg", "quick"]);
        filter.toggle_tag("veg");
        assert_eq!(filter.tags, ["quick"]);
        filter.toggle_tag("  ");
        assert_eq!(filter.tags, ["quick"]);
    }

    #[test]
    fn test_available_tags_sorted_and_distinct() {
        let recipes = vec![
            recipe("1", "A", &["veg", "quick"]),
            recipe("2", "B", &[]),
            recipe("3", "C", &["dessert", "veg"]),
        ];
        assert_eq!(available_tags(&recipes), ["dessert", "quick", "veg"]);
    }
}
