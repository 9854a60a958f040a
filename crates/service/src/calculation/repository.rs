use async_trait::async_trait;

use super::domain::{Calculation, NewCalculation, Operation};
use crate::errors::ServiceError;

/// Repository abstraction for calculation persistence.
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    async fn find_matching(&self, operation: Operation, operand1: f64, operand2: Option<f64>) -> Result<Option<Calculation>, ServiceError>;
    async fn insert(&self, new: NewCalculation) -> Result<Calculation, ServiceError>;
    async fn list(&self) -> Result<Vec<Calculation>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Calculation>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockCalculationRepository {
        rows: Mutex<Vec<Calculation>>,
        next_id: Mutex<i32>,
    }

    fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, ServiceError> {
        m.lock().map_err(|_| ServiceError::Db("mock repository lock poisoned".into()))
    }

    #[async_trait]
    impl CalculationRepository for MockCalculationRepository {
        async fn find_matching(&self, operation: Operation, operand1: f64, operand2: Option<f64>) -> Result<Option<Calculation>, ServiceError> {
            let rows = lock(&self.rows)?;
            Ok(rows
                .iter()
                .find(|c| c.operation == operation.as_str() && c.operand1 == operand1 && c.operand2 == operand2)
                .cloned())
        }

        async fn insert(&self, new: NewCalculation) -> Result<Calculation, ServiceError> {
            let mut next_id = lock(&self.next_id)?;
            *next_id += 1;
            let row = Calculation {
                id: *next_id,
                operation: new.operation.as_str().to_string(),
                operand1: new.operand1,
                operand2: new.operand2,
                result: new.result,
            };
            lock(&self.rows)?.push(row.clone());
            Ok(row)
        }

        async fn list(&self) -> Result<Vec<Calculation>, ServiceError> {
            Ok(lock(&self.rows)?.clone())
        }

        async fn get(&self, id: i32) -> Result<Option<Calculation>, ServiceError> {
            Ok(lock(&self.rows)?.iter().find(|c| c.id == id).cloned())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut rows = lock(&self.rows)?;
            let before = rows.len();
            rows.retain(|c| c.id != id);
            Ok(rows.len() != before)
        }
    }
}
