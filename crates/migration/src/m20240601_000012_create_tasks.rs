//! Create `tasks` table with FK to `projects`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(uuid(Tasks::Id).primary_key())
                    .col(uuid(Tasks::ProjectId).not_null())
                    .col(string_len(Tasks::Name, 255).not_null())
                    .col(text(Tasks::Description).not_null())
                    .col(string_len(Tasks::Status, 32).not_null())
                    .col(ColumnDef::new(Tasks::StartDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Tasks::EndDate).timestamp_with_time_zone().null())
                    .col(string_len(Tasks::Assignee, 128).not_null())
                    .col(string_len(Tasks::TaskType, 64).not_null())
                    .col(string_len(Tasks::Priority, 32).not_null())
                    .col(timestamp_with_time_zone(Tasks::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Tasks::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_project")
                            .from(Tasks::Table, Tasks::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tasks::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    ProjectId,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    Assignee,
    TaskType,
    Priority,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects { Table, Id }
