//! Create `notes` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(uuid(Notes::Id).primary_key())
                    .col(ColumnDef::new(Notes::CustomerId).uuid().null())
                    .col(text(Notes::Note).not_null())
                    .col(string_len(Notes::NoteType, 64).not_null())
                    .col(string_len(Notes::Author, 128).not_null())
                    .col(ColumnDef::new(Notes::NoteDate).timestamp_with_time_zone().null())
                    .col(string_len(Notes::Status, 64).not_null())
                    .col(string_len(Notes::Priority, 32).not_null())
                    .col(string_len(Notes::Category, 64).not_null())
                    .col(json_binary(Notes::Tags).not_null())
                    .col(json_binary(Notes::Metadata).not_null())
                    .col(timestamp_with_time_zone(Notes::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Notes::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notes_customer")
                            .from(Notes::Table, Notes::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Notes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Notes {
    Table,
    Id,
    CustomerId,
    Note,
    NoteType,
    Author,
    NoteDate,
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
