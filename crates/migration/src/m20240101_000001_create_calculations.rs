//! Create `calculations` table.
//!
//! One row per computed result. `operand2` is nullable because add, subtract,
//! multiply and sqrt accept a missing second operand.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Calculations::Table)
                    .if_not_exists()
                    .col(pk_auto(Calculations::Id))
                    .col(string_len(Calculations::Operation, 32))
                    .col(double(Calculations::Operand1))
                    .col(double_null(Calculations::Operand2))
                    .col(double(Calculations::Result))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Calculations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Calculations {
    Table,
    Id,
    Operation,
    Operand1,
    Operand2,
    Result,
}
