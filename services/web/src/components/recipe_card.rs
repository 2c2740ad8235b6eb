//! Recipe card shown in the home grid

use std::fmt;

use api::models::Person;

use crate::recipe_list::RecipeView;

/// Tags joined for display, or `No Tags`
pub fn tag_line(tags: &[String]) -> String {
    if tags.is_empty() {
        "No Tags".to_string()
    } else {
        tags.join(", ")
    }
}

/// Author line of a card
pub fn creator_info(creator: &Person) -> String {
    format!("By {} <{}>", creator.name, creator.email)
}

/// Card for one entry of the recipe list
pub struct RecipeCard<'a> {
    view: RecipeView<'a>,
}

impl<'a> RecipeCard<'a> {
    pub fn new(view: RecipeView<'a>) -> Self {
        Self { view }
    }
}

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.view.recipe;
        let marker = if self.view.is_favorite { "[*]" } else { "[ ]" };

        writeln!(f, "{} {} ({})", marker, recipe.title, recipe.id)?;
        writeln!(f, "    {}", tag_line(&recipe.tags))?;
        if !recipe.steps.trim().is_empty() {
            writeln!(f, "    {}", recipe.steps.trim())?;
        }
        if let Some(image_url) = recipe.image_url.as_deref().filter(|u| !u.is_empty()) {
            writeln!(f, "    Image: {}", image_url)?;
        }
        write!(f, "    {}", creator_info(&recipe.author))
    }
}
