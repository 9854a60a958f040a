use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Calculation, CalculationRequest};
use super::repository::CalculationRepository;
use crate::errors::ServiceError;

/// Calculation business service independent of web framework.
///
/// The duplicate check and the insert are two separate store calls with no
/// transaction around them. Two identical requests racing each other can
/// both pass the check and both be stored.
pub struct CalculationService<R: CalculationRepository> {
    repo: Arc<R>,
}

impl<R: CalculationRepository> CalculationService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate, compute, reject exact duplicates, then store.
    #[instrument(skip(self, request), fields(operation = %request.operation))]
    pub async fn create(&self, request: CalculationRequest) -> Result<Calculation, ServiceError> {
        let new = request.evaluate()?;

        if let Some(existing) = self.repo.find_matching(new.operation, new.operand1, new.operand2).await? {
            debug!(existing_id = existing.id, "duplicate calculation");
            return Err(ServiceError::Duplicate("Duplicate calculation exists".into()));
        }

        let created = self.repo.insert(new).await?;
        info!(id = created.id, operation = %created.operation, result = created.result, "calculation_created");
        Ok(created)
    }

    /// All stored calculations by id. An empty store is reported as
    /// `NotFound` rather than an empty list.
    pub async fn list(&self) -> Result<Vec<Calculation>, ServiceError> {
        let rows = self.repo.list().await?;
        if rows.is_empty() {
            return Err(ServiceError::NotFound("No calculations found".into()));
        }
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Calculation, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Calculation with ID {id} not found")))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::NotFound("Calculation not found".into()));
        }
        info!(id, "calculation_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::repo::seaorm::SeaOrmCalculationRepository;
    use crate::calculation::repository::mock::MockCalculationRepository;
    use crate::test_support::get_db;

    fn mock_service() -> CalculationService<MockCalculationRepository> {
        CalculationService::new(Arc::new(MockCalculationRepository::default()))
    }

    fn req(op: &str, a: f64, b: Option<f64>) -> CalculationRequest {
        CalculationRequest::new(op, a, b)
    }

    #[tokio::test]
    async fn create_returns_computed_record() -> anyhow::Result<()> {
        let svc = mock_service();

        let add = svc.create(req("add", 2.0, Some(3.0))).await?;
        assert_eq!(add.result, 5.0);
        assert_eq!(add.operation, "add");
        assert_eq!(add.operand2, Some(3.0));

        let mul = svc.create(req("multiply", 4.0, None)).await?;
        assert_eq!(mul.result, 4.0);
        assert_eq!(mul.operand2, None);

        let sub = svc.create(req("subtract", 10.0, Some(4.0))).await?;
        assert_eq!(sub.result, 6.0);

        assert_ne!(add.id, mul.id);
        assert_ne!(mul.id, sub.id);
        Ok(())
    }

    #[tokio::test]
    async fn second_identical_create_is_duplicate() -> anyhow::Result<()> {
        let svc = mock_service();
        svc.create(req("add", 2.0, Some(3.0))).await?;

        let err = svc.create(req("add", 2.0, Some(3.0))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));
        assert_eq!(err.status_code(), 409);

        // differs only in operand2 presence
        svc.create(req("add", 2.0, None)).await?;
        assert_eq!(svc.list().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn rejected_input_is_not_stored() {
        let svc = mock_service();
        assert!(matches!(svc.create(req("divide", 3.0, Some(0.0))).await, Err(ServiceError::InvalidInput(_))));
        assert!(matches!(svc.create(req("sqrt", -1.0, Some(2.0))).await, Err(ServiceError::InvalidInput(_))));
        assert!(matches!(svc.create(req("foo", 1.0, Some(2.0))).await, Err(ServiceError::UnsupportedOperation(_))));
        assert!(matches!(svc.list().await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn reads_on_empty_store_are_not_found() {
        let svc = mock_service();
        let err = svc.get(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Calculation with ID 1 not found");
        assert!(matches!(svc.list().await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(1).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> anyhow::Result<()> {
        let svc = mock_service();
        let c = svc.create(req("sqrt", 16.0, None)).await?;
        assert_eq!(svc.get(c.id).await?, c);

        svc.delete(c.id).await?;
        assert!(matches!(svc.get(c.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(c.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = CalculationService::new(Arc::new(SeaOrmCalculationRepository::new(db)));

        assert!(matches!(svc.list().await, Err(ServiceError::NotFound(_))));

        let a = svc.create(req("divide", 1.0, Some(3.0))).await?;
        assert_eq!(a.result, 1.0 / 3.0);
        let b = svc.create(req("multiply", 4.0, None)).await?;

        // exact float and NULL matching against the database
        assert!(matches!(svc.create(req("divide", 1.0, Some(3.0))).await, Err(ServiceError::Duplicate(_))));
        assert!(matches!(svc.create(req("multiply", 4.0, None)).await, Err(ServiceError::Duplicate(_))));
        svc.create(req("multiply", 4.0, Some(1.0))).await?;

        let all = svc.list().await?;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], a);
        assert_eq!(all[1], b);

        svc.delete(a.id).await?;
        assert!(matches!(svc.get(a.id).await, Err(ServiceError::NotFound(_))));
        // a deleted row no longer blocks the same inputs
        let again = svc.create(req("divide", 1.0, Some(3.0))).await?;
        assert_ne!(again.id, a.id);
        Ok(())
    }
}
