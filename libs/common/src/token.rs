//! Bearer token lookup for outgoing requests

/// Supplies the token attached to authenticated requests.
///
/// The HTTP client asks for the token on every request, so a sign-in or
/// logout is picked up by the next call without rebuilding the client.
pub trait TokenSource: Send + Sync {
    /// Current bearer token, if a session exists
    fn bearer_token(&self) -> Option<String>;
}

/// Token source for clients that never authenticate
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenSource for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_token() {
        assert_eq!(Anonymous.bearer_token(), None);
    }
}
