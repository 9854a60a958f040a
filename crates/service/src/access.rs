//! Admin token check.
//!
//! A single shared secret compared as a plain string. There is no hashing,
//! expiry or user identity behind it.

use tracing::warn;

use crate::errors::ServiceError;

pub const ADMIN_WELCOME: &str = "Welcome, admin!";

#[derive(Debug, Clone)]
pub struct AccessPolicy {
    admin_token: String,
}

impl AccessPolicy {
    pub fn new(admin_token: impl Into<String>) -> Self {
        Self { admin_token: admin_token.into() }
    }

    /// Absent or empty token is 401, any other mismatch is 403.
    pub fn check(&self, token: Option<&str>) -> Result<&'static str, ServiceError> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!(event = "admin_token_missing", "admin access without token");
                return Err(ServiceError::Unauthorized("Missing authentication token".into()));
            }
        };
        if token != self.admin_token {
            warn!(event = "admin_token_rejected", "admin access with invalid token");
            return Err(ServiceError::Forbidden("Access denied: invalid admin token".into()));
        }
        Ok(ADMIN_WELCOME)
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new("supersecret")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_unauthorized() {
        let policy = AccessPolicy::default();
        assert!(matches!(policy.check(None), Err(ServiceError::Unauthorized(_))));
        assert!(matches!(policy.check(Some("")), Err(ServiceError::Unauthorized(_))));
    }

    #[test]
    fn wrong_token_is_forbidden() {
        let policy = AccessPolicy::default();
        let err = policy.check(Some("wrong")).unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert_eq!(err.status_code(), 403);
        // no trimming or case folding
        assert!(policy.check(Some("Supersecret")).is_err());
        assert!(policy.check(Some(" supersecret")).is_err());
    }

    #[test]
    fn matching_token_is_granted() {
        assert_eq!(AccessPolicy::default().check(Some("supersecret")).unwrap(), ADMIN_WELCOME);
        assert!(AccessPolicy::new("letmein").check(Some("letmein")).is_ok());
    }
}
