//! Create `orders` table with FKs to `customers` and `addresses`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(uuid(Orders::Id).primary_key())
                    .col(string_len(Orders::OrderNumber, 64).not_null())
                    .col(uuid(Orders::CustomerId).not_null())
                    .col(string_len(Orders::Status, 32).not_null())
                    .col(double(Orders::SubTotal).not_null())
                    .col(double(Orders::TaxAmount).not_null())
                    .col(double(Orders::Discount).not_null())
                    .col(double(Orders::Total).not_null())
                    .col(timestamp_with_time_zone(Orders::OrderDate).not_null())
                    .col(ColumnDef::new(Orders::ShippedDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Orders::DeliveredDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Orders::BillingAddressId).uuid().null())
                    .col(ColumnDef::new(Orders::ShippingAddressId).uuid().null())
                    .col(text(Orders::Notes).not_null())
                    .col(json_binary(Orders::Metadata).not_null())
                    .col(timestamp_with_time_zone(Orders::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Orders::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_billing_address")
                            .from(Orders::Table, Orders::BillingAddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_shipping_address")
                            .from(Orders::Table, Orders::ShippingAddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    OrderNumber,
    CustomerId,
    Status,
    SubTotal,
    TaxAmount,
    Discount,
    Total,
    OrderDate,
    ShippedDate,
    DeliveredDate,
    BillingAddressId,
    ShippingAddressId,
    Notes,
    Metadata,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }

#[derive(DeriveIden)]
enum Addresses { Table, Id }
