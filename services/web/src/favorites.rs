//! Favorite toggle
//!
//! The service answers a toggle with the complete favorite list of the user,
//! which replaces the cached list wholesale. Two toggles in flight at once
//! are not coordinated: whichever response lands last wins.

use api::RecipeClient;
use auth::SessionManager;
use tracing::{error, info};

/// Toggle `recipe_id` and return whether it is a favorite afterwards
///
/// On failure the error is logged and `currently_favorite` is returned
/// unchanged; the cached list is not touched.
pub async fn toggle_favorite(
    api: &RecipeClient,
    sessions: &SessionManager,
    recipe_id: &str,
    currently_favorite: bool,
) -> bool {
    let favorites = match api.save_recipe(recipe_id).await {
        Ok(favorites) => favorites,
        Err(e) => {
            error!("Failed to toggle favorite for recipe {}: {}", recipe_id, e);
            return currently_favorite;
        }
    };

    let is_favorite = favorites.iter().any(|id| id == recipe_id);
    if let Err(e) = sessions.replace_saved_recipes(favorites) {
        error!("Failed to store favorites: {}", e);
    }

    info!(
        "Recipe {} is {} a favorite",
        recipe_id,
        if is_favorite { "now" } else { "no longer" }
    );
    is_favorite
}
