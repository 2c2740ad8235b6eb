//! Input validation utilities

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;

/// Validate that a field is not blank
pub fn validate_required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    validate_required(email, "Email is required")?;

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email.trim()) {
        return Err("Invalid email".to_string());
    }

    Ok(())
}

/// Validate an absolute http(s) URL
pub fn validate_url(value: &str) -> Result<(), String> {
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err("Must be a valid URL".to_string()),
    }
}

/// A rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field errors collected while validating a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one field check
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.errors.push(FieldError { field, message });
        }
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// `Ok(())` when every check passed
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(validate_required("", "Name is required").is_err());
        assert!(validate_required("   ", "Name is required").is_err());
        assert!(validate_required("Ada", "Name is required").is_ok());
    }

    #[test]
    fn test_email_messages() {
        assert_eq!(validate_email("").unwrap_err(), "Email is required");
        assert_eq!(validate_email("ada@").unwrap_err(), "Invalid email");
        assert!(validate_email("ada@example.com").is_ok());
    }

    #[test]
    fn test_url() {
        assert!(validate_url("https://img.example.com/cake.png").is_ok());
        assert!(validate_url("http://localhost:8080/a.jpg").is_ok());
        assert!(validate_url("cake.png").is_err());
        assert!(validate_url("ftp://example.com/cake.png").is_err());
        assert!(validate_url("mailto:chef@example.com").is_err());
    }

    #[test]
    fn test_form_errors_collect_in_order() {
        let mut errors = FormErrors::new();
        errors.check("name", validate_required("", "Name is required"));
        errors.check("email", validate_email("ada@example.com"));
        errors.check("password", validate_required("", "Password is required"));

        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.to_string(), "Name is required; Password is required");
        assert!(errors.into_result().is_err());
    }
}
