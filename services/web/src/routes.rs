//! Page routing and the session gate

use std::fmt;

use auth::SessionManager;
use tracing::info;

/// Pages of the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignIn,
    SignUp,
    Home,
    CreateRecipe,
    RecipeDetail(String),
}

impl Route {
    /// Match a path (without query string)
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/signin" => Some(Route::SignIn),
            "/signup" => Some(Route::SignUp),
            "/create-recipe" => Some(Route::CreateRecipe),
            _ => trimmed
                .strip_prefix("/recipes/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::RecipeDetail(id.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Home => "/".to_string(),
            Route::CreateRecipe => "/create-recipe".to_string(),
            Route::RecipeDetail(id) => format!("/recipes/{id}"),
        }
    }

    /// Whether the page needs a session
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::SignIn | Route::SignUp)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A route plus its query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub query: String,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            query: String::new(),
        }
    }

    /// Parse `path[?query]`; unknown paths yield `None`
    pub fn parse(location: &str) -> Option<Location> {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        Some(Location {
            route: Route::parse(path)?,
            query: query.to_string(),
        })
    }

    /// Same route with the query string replaced
    pub fn with_query(&self, query: impl Into<String>) -> Location {
        Location {
            route: self.route.clone(),
            query: query.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.route)
        } else {
            write!(f, "{}?{}", self.route, self.query)
        }
    }
}

/// Outcome of routing a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Show the requested page
    Render(Location),
    /// Go elsewhere instead
    Redirect(Location),
}

/// Let protected pages through only when a session record exists
pub fn gate(location: Location, sessions: &SessionManager) -> Navigation {
    if location.route.is_protected() && !sessions.is_authenticated() {
        info!("No session for {}, redirecting to sign-in", location);
        return Navigation::Redirect(Location::new(Route::SignIn));
    }
    Navigation::Render(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::{MemoryStore, jwt::Claims};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::sync::Arc;

    fn sessions(signed_in: bool) -> SessionManager {
        let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
        if signed_in {
            let claims = Claims {
                user_id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                saved_recipes: None,
                iat: None,
                exp: Some(1),
            };
            let token =
                encode(&Header::default(), &claims, &EncodingKey::from_secret(b"k")).unwrap();
            sessions.create_session(&token).unwrap();
        }
        sessions
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/signin"), Some(Route::SignIn));
        assert_eq!(Route::parse("/signup/"), Some(Route::SignUp));
        assert_eq!(Route::parse("/create-recipe"), Some(Route::CreateRecipe));
        assert_eq!(
            Route::parse("/recipes/665f"),
            Some(Route::RecipeDetail("665f".to_string()))
        );
        assert_eq!(Route::parse("/recipes/"), None);
        assert_eq!(Route::parse("/recipes/a/b"), None);
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn test_location_keeps_query() {
        let location = Location::parse("/?q=choc&tags=veg").unwrap();
        assert_eq!(location.route, Route::Home);
        assert_eq!(location.query, "q=choc&tags=veg");
        assert_eq!(location.to_string(), "/?q=choc&tags=veg");
        assert_eq!(location.with_query("").to_string(), "/");
    }

    #[test]
    fn test_gate_redirects_protected_pages_without_session() {
        let signed_out = sessions(false);
        for path in ["/", "/create-recipe", "/recipes/r1"] {
            let location = Location::parse(path).unwrap();
            assert_eq!(
                gate(location, &signed_out),
                Navigation::Redirect(Location::new(Route::SignIn))
            );
        }

        let open = Location::parse("/signup").unwrap();
        assert_eq!(gate(open.clone(), &signed_out), Navigation::Render(open));
    }

    #[test]
    fn test_gate_ignores_token_expiry() {
        let signed_in = sessions(true);
        let home = Location::parse("/?q=cake").unwrap();
        assert_eq!(gate(home.clone(), &signed_in), Navigation::Render(home));
    }
}
