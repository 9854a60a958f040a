use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    access::AccessPolicy,
    calculation::{repo::seaorm::SeaOrmCalculationRepository, CalculationService},
};

pub type Calculations = CalculationService<SeaOrmCalculationRepository>;

/// Shared handler state. Built once at startup around the store handle.
#[derive(Clone)]
pub struct AppState {
    pub calculations: Arc<Calculations>,
    pub access: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, admin_token: impl Into<String>) -> Self {
        let repo = Arc::new(SeaOrmCalculationRepository::new(db));
        Self {
            calculations: Arc::new(CalculationService::new(repo)),
            access: Arc::new(AccessPolicy::new(admin_token)),
        }
    }
}
