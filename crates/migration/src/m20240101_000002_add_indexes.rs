use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_calculations::Calculations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Lookup index for the duplicate check. Not unique: duplicates are
        // rejected by the service before insert, not by the database.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_calculations_lookup")
                    .table(Calculations::Table)
                    .col(Calculations::Operation)
                    .col(Calculations::Operand1)
                    .col(Calculations::Operand2)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_calculations_lookup")
                    .table(Calculations::Table)
                    .to_owned(),
            )
            .await
    }
}
