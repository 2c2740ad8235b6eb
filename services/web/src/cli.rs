//! Command line front end
//!
//! Every command names the page it acts on and passes through the session
//! gate before anything is sent to the recipe service.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use auth::validation::FormErrors;
use clap::{Parser, Subcommand};

use crate::components::Navbar;
use crate::favorites;
use crate::pages::{
    CreateRecipeForm, HomePage, RecipeDetailPage, SignInForm, SignUpForm, Submission,
    UpdateRecipeForm,
};
use crate::recipe_list::{RecipeFilter, split_tags};
use crate::routes::{Location, Navigation, Route, gate};
use crate::state::AppContext;

#[derive(Parser, Debug)]
#[command(name = "cookbook", about = "Share, search and save recipes")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in and store the session
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// List recipes, optionally searched and filtered by tags
    Home {
        /// Search text matched against title, ingredients and steps
        #[arg(long)]
        q: Option<String>,
        /// Comma-separated tags, all required
        #[arg(long)]
        tags: Option<String>,
    },
    /// Open a location such as `/?q=choc&tags=veg` or `/recipes/<id>`
    Open { path: String },
    /// Toggle a recipe in the favorites
    Favorite { id: String },
    /// Create a recipe
    Create {
        #[arg(long)]
        title: String,
        /// Comma-separated ingredients
        #[arg(long)]
        ingredients: String,
        #[arg(long)]
        steps: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "")]
        image_url: String,
    },
    /// Show one recipe with its comments
    Show { id: String },
    /// Comment on a recipe
    Comment { id: String, text: String },
    /// Change fields of a recipe
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        ingredients: Option<String>,
        #[arg(long)]
        steps: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete a recipe
    Delete { id: String },
    /// Recipes carrying all the given tags, filtered by the service
    ByTags { tags: String },
}

impl Command {
    /// Page the command acts on
    pub fn location(&self) -> Result<Location> {
        let location = match self {
            Command::Signup { .. } => Location::new(Route::SignUp),
            Command::Signin { .. } | Command::Logout => Location::new(Route::SignIn),
            Command::Home { q, tags } => {
                let filter = RecipeFilter {
                    query: q.clone().unwrap_or_default(),
                    tags: tags.as_deref().map(split_tags).unwrap_or_default(),
                };
                Location::new(Route::Home).with_query(filter.to_query_string())
            }
            Command::Open { path } => {
                Location::parse(path).ok_or_else(|| anyhow!("Unknown page: {}", path))?
            }
            Command::Favorite { .. } | Command::ByTags { .. } => Location::new(Route::Home),
            Command::Create { .. } => Location::new(Route::CreateRecipe),
            Command::Show { id }
            | Command::Comment { id, .. }
            | Command::Update { id, .. }
            | Command::Delete { id } => Location::new(Route::RecipeDetail(id.clone())),
        };
        Ok(location)
    }
}

/// Run one command and return its output, followed by the navbar
pub async fn execute(ctx: &AppContext, command: Command) -> Result<String> {
    let mut out = match gate(command.location()?, &ctx.session) {
        Navigation::Redirect(location) => format!("Please sign in first: {}", location),
        Navigation::Render(location) => dispatch(ctx, command, location).await,
    };

    let navbar = Navbar::render(ctx).await;
    let _ = write!(out, "\n\n{}", navbar);
    Ok(out)
}

async fn dispatch(ctx: &AppContext, command: Command, location: Location) -> String {
    match command {
        Command::Signup {
            name,
            email,
            password,
        } => {
            let form = SignUpForm {
                name,
                email,
                password,
            };
            describe(form.submit(ctx).await)
        }
        Command::Signin { email, password } => {
            let form = SignInForm { email, password };
            describe(form.submit(ctx).await)
        }
        Command::Logout => {
            if Navbar::logout(ctx).await {
                describe(Submission::Done(Route::SignIn))
            } else {
                describe(Submission::Failed)
            }
        }
        Command::Home { .. } | Command::Open { .. } => open(ctx, location).await,
        Command::Favorite { id } => {
            let was_favorite = ctx.session.favorite_ids().contains(&id);
            let is_favorite =
                favorites::toggle_favorite(&ctx.api, &ctx.session, &id, was_favorite).await;
            if is_favorite {
                format!("Recipe {} is a favorite", id)
            } else {
                format!("Recipe {} is not a favorite", id)
            }
        }
        Command::Create {
            title,
            ingredients,
            steps,
            tags,
            image_url,
        } => {
            let form = CreateRecipeForm {
                title,
                ingredients,
                steps,
                tags,
                image_url,
            };
            describe(form.submit(ctx).await)
        }
        Command::Show { id } => open(ctx, Location::new(Route::RecipeDetail(id))).await,
        Command::Comment { id, text } => match RecipeDetailPage::load(ctx, &id).await {
            Some(mut page) => {
                let submission = page.add_comment(ctx, &text).await;
                after_detail(&page, submission)
            }
            None => describe(Submission::Failed),
        },
        Command::Update {
            id,
            title,
            ingredients,
            steps,
            tags,
            image_url,
        } => match RecipeDetailPage::load(ctx, &id).await {
            Some(mut page) => {
                let form = UpdateRecipeForm {
                    title,
                    ingredients,
                    steps,
                    tags,
                    image_url,
                };
                let submission = page.update(ctx, &form).await;
                after_detail(&page, submission)
            }
            None => describe(Submission::Failed),
        },
        Command::Delete { id } => match RecipeDetailPage::load(ctx, &id).await {
            Some(page) => describe(page.delete(ctx).await),
            None => describe(Submission::Failed),
        },
        Command::ByTags { tags } => match HomePage::by_tags(ctx, &tags).await {
            Some(page) => page.render(),
            None => describe(Submission::Failed),
        },
    }
}

/// Render the page at `location`
async fn open(ctx: &AppContext, location: Location) -> String {
    match location.route {
        Route::Home => HomePage::load(ctx, &location.query).await.render(),
        Route::RecipeDetail(id) => match RecipeDetailPage::load(ctx, &id).await {
            Some(page) => page.to_string(),
            None => describe(Submission::Failed),
        },
        Route::SignIn => {
            "Log in: cookbook signin --email <email> --password <password>".to_string()
        }
        Route::SignUp => {
            "Create an account: cookbook signup --name <name> --email <email> --password <password>"
                .to_string()
        }
        Route::CreateRecipe => {
            "Create a New Recipe: cookbook create --title <title> --ingredients <a,b> --steps <text> [--tags <a,b>] [--image-url <url>]"
                .to_string()
        }
    }
}

fn after_detail(page: &RecipeDetailPage, submission: Submission) -> String {
    match submission {
        Submission::Done(_) => page.to_string(),
        other => describe(other),
    }
}

fn describe(submission: Submission) -> String {
    match submission {
        Submission::Done(route) => format!("Continue at {}", route),
        Submission::Invalid(errors) => field_errors(&errors),
        Submission::Failed => "Request failed".to_string(),
    }
}

fn field_errors(errors: &FormErrors) -> String {
    errors
        .errors()
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cookbook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_home_location_carries_filter() {
        let cli = parse(&["home", "--q", "hot choc", "--tags", "veg, quick"]);
        assert_eq!(
            cli.command.location().unwrap().to_string(),
            "/?q=hot+choc&tags=veg%2Cquick"
        );
    }

    #[test]
    fn test_detail_commands_target_recipe_page() {
        for args in [
            vec!["show", "r1"],
            vec!["comment", "r1", "Nice"],
            vec!["delete", "r1"],
            vec!["update", "r1", "--title", "New"],
        ] {
            let cli = parse(&args);
            assert_eq!(
                cli.command.location().unwrap().route,
                Route::RecipeDetail("r1".to_string())
            );
        }
    }

    #[test]
    fn test_global_config_flag_and_unknown_page() {
        let cli = parse(&["open", "/nowhere", "--config", "cookbook.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("cookbook.toml")));
        assert!(cli.command.location().is_err());
    }
}
