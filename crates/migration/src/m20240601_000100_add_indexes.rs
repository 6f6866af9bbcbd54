use sea_orm_migration::prelude::*;

/// (index name, table, column) for every foreign-key lookup column.
const LOOKUP_INDEXES: &[(&str, &str, &str)] = &[
    ("idx_addresses_customer", "addresses", "customer_id"),
    ("idx_opportunities_customer", "opportunities", "customer_id"),
    ("idx_leads_customer", "leads", "customer_id"),
    ("idx_contacts_customer", "contacts", "customer_id"),
    ("idx_orders_customer", "orders", "customer_id"),
    ("idx_order_items_order", "order_items", "order_id"),
    ("idx_payments_order", "payments", "order_id"),
    ("idx_projects_customer", "projects", "customer_id"),
    ("idx_tasks_project", "tasks", "project_id"),
    ("idx_notes_customer", "notes", "customer_id"),
    ("idx_activities_customer", "activities", "customer_id"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in LOOKUP_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .to_owned(),
                )
                .await?;
        }

        // Orders: order_number is unique
        manager
            .create_index(
                Index::create()
                    .name("uniq_orders_order_number")
                    .table(Orders::Table)
                    .col(Orders::OrderNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_orders_order_number").table(Orders::Table).to_owned())
            .await?;
        for (name, table, _) in LOOKUP_INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Orders { Table, OrderNumber }
