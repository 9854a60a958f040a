//! Service layer for the calculation API.
//! - `calculation`: domain rules, repository abstraction and the application service.
//! - `access`: the admin token check.
//! - Errors carry the HTTP status they surface as, see [`errors::ServiceError::status_code`].

pub mod errors;
pub mod access;
pub mod calculation;
#[cfg(test)]
pub mod test_support;
