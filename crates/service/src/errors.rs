use thiserror::Error;

/// Every failure a calculation or access request can end in.
///
/// Domain variants display as the bare detail message so the HTTP layer can
/// send `to_string()` to the client unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    UnsupportedOperation(String),
    #[error("{0}")]
    Computation(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::InvalidInput(_) => 400,
            ServiceError::Unauthorized(_) => 401,
            ServiceError::Forbidden(_) => 403,
            ServiceError::NotFound(_) => 404,
            ServiceError::Duplicate(_) => 409,
            ServiceError::UnsupportedMediaType(_) => 415,
            ServiceError::UnsupportedOperation(_) => 422,
            ServiceError::Computation(_) => 500,
            ServiceError::Db(_) | ServiceError::Model(_) => 500,
        }
    }

    /// Failures nobody raised on purpose: storage and model faults.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ServiceError::Db(_) | ServiceError::Model(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_display_bare_detail() {
        let e = ServiceError::Duplicate("Duplicate calculation exists".into());
        assert_eq!(e.to_string(), "Duplicate calculation exists");
        assert_eq!(e.status_code(), 409);
        assert!(!e.is_unexpected());
    }

    #[test]
    fn storage_errors_are_unexpected() {
        let e = ServiceError::Db("connection reset".into());
        assert_eq!(e.status_code(), 500);
        assert!(e.is_unexpected());

        let e: ServiceError = models::errors::ModelError::Db("boom".into()).into();
        assert!(e.is_unexpected());
    }
}
