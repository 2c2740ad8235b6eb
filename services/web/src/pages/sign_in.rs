//! Sign-in page

use api::models::LoginRequest;
use auth::validation::{FormErrors, validate_email, validate_required};
use tracing::info;

use super::{Submission, report};
use crate::routes::Route;
use crate::state::AppContext;

/// Fields of the sign-in form
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("email", validate_email(&self.email));
        errors.check(
            "password",
            validate_required(&self.password, "Password is required"),
        );
        errors.into_result()
    }

    /// Sign in, persist the session from the returned token and go home
    pub async fn submit(&self, ctx: &AppContext) -> Submission {
        if let Err(errors) = self.validate() {
            return Submission::Invalid(errors);
        }

        let request = LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        let response = match ctx.api.login(&request).await {
            Ok(response) => response,
            Err(e) => return report(ctx, "Sign-in", e).await,
        };

        match ctx.session.create_session(&response.payload.token) {
            Ok(record) => {
                info!("Signed in as {}", record.user_id);
                ctx.notifications.success(response.message).await;
                Submission::Done(Route::Home)
            }
            Err(e) => report(ctx, "Storing session", e).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_required() {
        let form = SignInForm {
            email: "ada@example.com".to_string(),
            password: "   ".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("email"), None);
    }
}
