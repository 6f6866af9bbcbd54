//! Create `opportunities` table with FK to `customers`.
//!
//! Tracks deals in the sales pipeline; `products` is a JSON array of offering labels.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Opportunities::Table)
                    .if_not_exists()
                    .col(uuid(Opportunities::Id).primary_key())
                    .col(uuid(Opportunities::CustomerId).not_null())
                    .col(string_len(Opportunities::Name, 255).not_null())
                    .col(text(Opportunities::Description).not_null())
                    .col(double(Opportunities::Value).not_null())
                    .col(string_len(Opportunities::Stage, 32).not_null())
                    .col(double(Opportunities::Probability).not_null())
                    .col(ColumnDef::new(Opportunities::ExpectedCloseDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Opportunities::ActualCloseDate).timestamp_with_time_zone().null())
                    .col(string_len(Opportunities::Source, 100).not_null())
                    .col(json_binary(Opportunities::Products).not_null())
                    .col(timestamp_with_time_zone(Opportunities::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Opportunities::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opportunities_customer")
                            .from(Opportunities::Table, Opportunities::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Opportunities::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Opportunities {
    Table,
    Id,
    CustomerId,
    Name,
    Description,
    Value,
    Stage,
    Probability,
    ExpectedCloseDate,
    ActualCloseDate,
    Source,
    Products,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }
