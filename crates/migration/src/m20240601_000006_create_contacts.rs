//! Create `contacts` table.
//!
//! People at a customer organisation; the customer link is optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(uuid(Contacts::Id).primary_key())
                    .col(ColumnDef::new(Contacts::CustomerId).uuid().null())
                    .col(string_len(Contacts::FirstName, 128).not_null())
                    .col(string_len(Contacts::LastName, 128).not_null())
                    .col(string_len(Contacts::Email, 255).not_null())
                    .col(string_len(Contacts::Phone, 64).not_null())
                    .col(string_len(Contacts::JobTitle, 128).not_null())
                    .col(string_len(Contacts::Role, 32).not_null())
                    .col(timestamp_with_time_zone(Contacts::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Contacts::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contacts_customer")
                            .from(Contacts::Table, Contacts::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, Id, CustomerId, FirstName, LastName, Email, Phone, JobTitle, Role, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Customers { Table, Id }
