//! Create `addresses` table with FK to `customers`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(uuid(Addresses::Id).primary_key())
                    .col(uuid(Addresses::CustomerId).not_null())
                    .col(string_len(Addresses::Type, 32).not_null())
                    .col(string_len(Addresses::Street1, 255).not_null())
                    .col(string_len(Addresses::Street2, 255).not_null())
                    .col(string_len(Addresses::City, 100).not_null())
                    .col(string_len(Addresses::State, 100).not_null())
                    .col(string_len(Addresses::PostalCode, 20).not_null())
                    .col(string_len(Addresses::Country, 100).not_null())
                    .col(boolean(Addresses::IsDefault).not_null())
                    .col(timestamp_with_time_zone(Addresses::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Addresses::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_customer")
                            .from(Addresses::Table, Addresses::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Addresses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    CustomerId,
    Type,
    Street1,
    Street2,
    City,
    State,
    PostalCode,
    Country,
    IsDefault,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }
