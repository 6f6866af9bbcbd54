//! Create `customer_segments` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerSegments::Table)
                    .if_not_exists()
                    .col(uuid(CustomerSegments::Id).primary_key())
                    .col(string_len(CustomerSegments::Name, 128).not_null())
                    .col(text(CustomerSegments::Description).not_null())
                    .col(json_binary(CustomerSegments::Criteria).not_null())
                    .col(timestamp_with_time_zone(CustomerSegments::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CustomerSegments::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CustomerSegments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CustomerSegments { Table, Id, Name, Description, Criteria, CreatedAt, UpdatedAt }
