//! Create `projects` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(uuid(Projects::Id).primary_key())
                    .col(ColumnDef::new(Projects::CustomerId).uuid().null())
                    .col(string_len(Projects::Name, 255).not_null())
                    .col(text(Projects::Description).not_null())
                    .col(string_len(Projects::Status, 32).not_null())
                    .col(ColumnDef::new(Projects::StartDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Projects::EndDate).timestamp_with_time_zone().null())
                    .col(double(Projects::Budget).not_null())
                    .col(double(Projects::Progress).not_null())
                    .col(text(Projects::Notes).not_null())
                    .col(timestamp_with_time_zone(Projects::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Projects::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_customer")
                            .from(Projects::Table, Projects::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    CustomerId,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    Budget,
    Progress,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }
