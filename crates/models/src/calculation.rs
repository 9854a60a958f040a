use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calculations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub operation: String,
    pub operand1: f64,
    pub operand2: Option<f64>,
    pub result: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_operation(op: &str) -> Result<(), errors::ModelError> {
    if op.trim().is_empty() {
        return Err(errors::ModelError::Validation("operation required".into()));
    }
    Ok(())
}

pub fn validate_result(result: f64) -> Result<(), errors::ModelError> {
    if !result.is_finite() {
        return Err(errors::ModelError::Validation("result must be a finite number".into()));
    }
    Ok(())
}

/// First row with exactly these inputs. Floats are compared with SQL `=`;
/// a missing `operand2` only matches rows where it is NULL.
pub async fn find_matching(
    db: &DatabaseConnection,
    operation: &str,
    operand1: f64,
    operand2: Option<f64>,
) -> Result<Option<Model>, errors::ModelError> {
    let finder = Entity::find()
        .filter(Column::Operation.eq(operation))
        .filter(Column::Operand1.eq(operand1));
    let finder = match operand2 {
        Some(v) => finder.filter(Column::Operand2.eq(v)),
        None => finder.filter(Column::Operand2.is_null()),
    };
    Ok(finder.one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    operation: &str,
    operand1: f64,
    operand2: Option<f64>,
    result: f64,
) -> Result<Model, errors::ModelError> {
    validate_operation(operation)?;
    validate_result(result)?;

    let am = ActiveModel {
        operation: Set(operation.to_string()),
        operand1: Set(operand1),
        operand2: Set(operand2),
        result: Set(result),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Returns true when a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
