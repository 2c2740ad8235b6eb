//! Sign-up page

use api::models::RegisterRequest;
use auth::validation::{FormErrors, validate_email, validate_required};
use tracing::info;

use super::{Submission, report};
use crate::routes::Route;
use crate::state::AppContext;

/// Fields of the registration form
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("name", validate_required(&self.name, "Name is required"));
        errors.check("email", validate_email(&self.email));
        errors.check(
            "password",
            validate_required(&self.password, "Password is required"),
        );
        errors.into_result()
    }

    /// Register the account, then send the user to sign-in
    pub async fn submit(&self, ctx: &AppContext) -> Submission {
        if let Err(errors) = self.validate() {
            return Submission::Invalid(errors);
        }

        let request = RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        match ctx.api.register(&request).await {
            Ok(response) => {
                info!("Registered account for {}", request.email);
                ctx.notifications.success(response.message).await;
                Submission::Done(Route::SignIn)
            }
            Err(e) => report(ctx, "Registration", e).await,
        }
    }
}
