//! Pages of the client
//!
//! Each page owns its form or view data and reports through the
//! notification center of the [`AppContext`](crate::state::AppContext).

use auth::validation::FormErrors;
use common::ClientError;
use tracing::error;

use crate::routes::Route;
use crate::state::AppContext;

pub mod create_recipe;
pub mod home;
pub mod recipe_detail;
pub mod sign_in;
pub mod sign_up;

pub use create_recipe::CreateRecipeForm;
pub use home::HomePage;
pub use recipe_detail::{RecipeDetailPage, UpdateRecipeForm};
pub use sign_in::SignInForm;
pub use sign_up::SignUpForm;

/// Result of submitting a form or page action
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Accepted; continue at this route
    Done(Route),
    /// Rejected before any request was sent
    Invalid(FormErrors),
    /// The request failed and an error notification was added
    Failed,
}

/// Log a failed action and show it to the user
pub(crate) async fn report(ctx: &AppContext, action: &str, err: ClientError) -> Submission {
    error!("{} failed: {}", action, err);
    ctx.notifications.error(err.user_message()).await;
    Submission::Failed
}

/// Split a comma-separated field, trimming items and dropping blanks
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// A comma separated field must hold at least one non-blank item
pub(crate) fn validate_list(raw: &str, message: &str) -> Result<(), String> {
    if split_list(raw).is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}
