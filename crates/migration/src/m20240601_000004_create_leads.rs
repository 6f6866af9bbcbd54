//! Create `leads` table.
//!
//! A lead may later be linked to the customer it converted into.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(uuid(Leads::Id).primary_key())
                    .col(string_len(Leads::FirstName, 128).not_null())
                    .col(string_len(Leads::LastName, 128).not_null())
                    .col(string_len(Leads::Email, 255).not_null())
                    .col(string_len(Leads::Phone, 64).not_null())
                    .col(string_len(Leads::Company, 255).not_null())
                    .col(string_len(Leads::Source, 100).not_null())
                    .col(string_len(Leads::Status, 32).not_null())
                    .col(integer(Leads::Score).not_null())
                    .col(ColumnDef::new(Leads::AssignedTo).uuid().null())
                    .col(ColumnDef::new(Leads::CustomerId).uuid().null())
                    .col(timestamp_with_time_zone(Leads::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Leads::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leads_customer")
                            .from(Leads::Table, Leads::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Leads::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Leads {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Source,
    Status,
    Score,
    AssignedTo,
    CustomerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }
