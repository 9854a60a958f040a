use sea_orm::DatabaseConnection;

use crate::calculation::domain::{Calculation, NewCalculation, Operation};
use crate::calculation::repository::CalculationRepository;
use crate::errors::ServiceError;
use models::calculation;

/// SeaORM-backed repository over the `calculations` table.
#[derive(Clone)]
pub struct SeaOrmCalculationRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCalculationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl CalculationRepository for SeaOrmCalculationRepository {
    async fn find_matching(&self, operation: Operation, operand1: f64, operand2: Option<f64>) -> Result<Option<Calculation>, ServiceError> {
        Ok(calculation::find_matching(&self.db, operation.as_str(), operand1, operand2).await?)
    }

    async fn insert(&self, new: NewCalculation) -> Result<Calculation, ServiceError> {
        calculation::create(&self.db, new.operation.as_str(), new.operand1, new.operand2, new.result)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<Calculation>, ServiceError> {
        Ok(calculation::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Calculation>, ServiceError> {
        Ok(calculation::find(&self.db, id).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(calculation::delete(&self.db, id).await?)
    }
}
