//! Create `customers` table.
//!
//! Root entity of the CRM; most other tables reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(uuid(Customers::Id).primary_key())
                    .col(string_len(Customers::FirstName, 128).not_null())
                    .col(string_len(Customers::LastName, 128).not_null())
                    .col(string_len(Customers::Email, 255).not_null())
                    .col(string_len(Customers::Phone, 64).not_null())
                    .col(string_len(Customers::CompanyName, 255).not_null())
                    .col(string_len(Customers::JobTitle, 128).not_null())
                    .col(string_len(Customers::Status, 32).not_null())
                    .col(string_len(Customers::CustomerType, 32).not_null())
                    .col(string_len(Customers::Source, 100).not_null())
                    .col(double(Customers::CreditLimit).not_null())
                    .col(double(Customers::TotalSpent).not_null())
                    .col(ColumnDef::new(Customers::LastPurchaseAt).timestamp_with_time_zone().null())
                    .col(json_binary(Customers::Tags).not_null())
                    .col(json_binary(Customers::CustomFields).not_null())
                    .col(timestamp_with_time_zone(Customers::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Customers::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    CompanyName,
    JobTitle,
    Status,
    CustomerType,
    Source,
    CreditLimit,
    TotalSpent,
    LastPurchaseAt,
    Tags,
    CustomFields,
    CreatedAt,
    UpdatedAt,
}
