//! Create `order_items` table with FKs to `orders` and `products`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(uuid(OrderItems::Id).primary_key())
                    .col(uuid(OrderItems::OrderId).not_null())
                    .col(uuid(OrderItems::ProductId).not_null())
                    .col(integer(OrderItems::Quantity).not_null())
                    .col(double(OrderItems::Total).not_null())
                    .col(timestamp_with_time_zone(OrderItems::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(OrderItems::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_product")
                            .from(OrderItems::Table, OrderItems::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderItems { Table, Id, OrderId, ProductId, Quantity, Total, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Orders { Table, Id }

#[derive(DeriveIden)]
enum Products { Table, Id }
