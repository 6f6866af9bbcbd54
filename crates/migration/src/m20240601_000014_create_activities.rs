//! Create `activities` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(uuid(Activities::Id).primary_key())
                    .col(ColumnDef::new(Activities::CustomerId).uuid().null())
                    .col(string_len(Activities::ActivityType, 32).not_null())
                    .col(text(Activities::Description).not_null())
                    .col(ColumnDef::new(Activities::ActivityDate).timestamp_with_time_zone().null())
                    .col(string_len(Activities::Status, 32).not_null())
                    .col(string_len(Activities::Priority, 32).not_null())
                    .col(string_len(Activities::Category, 64).not_null())
                    .col(json_binary(Activities::Tags).not_null())
                    .col(json_binary(Activities::Metadata).not_null())
                    .col(timestamp_with_time_zone(Activities::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Activities::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_customer")
                            .from(Activities::Table, Activities::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Activities::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    CustomerId,
    ActivityType,
    Description,
    ActivityDate,
    Status,
    Priority,
    Category,
    Tags,
    Metadata,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }
