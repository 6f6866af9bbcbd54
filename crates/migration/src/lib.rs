//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_customers;
mod m20240601_000002_create_addresses;
mod m20240601_000003_create_opportunities;
mod m20240601_000004_create_leads;
mod m20240601_000005_create_customer_segments;
mod m20240601_000006_create_contacts;
mod m20240601_000007_create_products;
mod m20240601_000008_create_orders;
mod m20240601_000009_create_order_items;
mod m20240601_000010_create_payments;
mod m20240601_000011_create_projects;
mod m20240601_000012_create_tasks;
mod m20240601_000013_create_notes;
mod m20240601_000014_create_activities;
mod m20240601_000100_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_customers::Migration),
            Box::new(m20240601_000002_create_addresses::Migration),
            Box::new(m20240601_000003_create_opportunities::Migration),
            Box::new(m20240601_000004_create_leads::Migration),
            Box::new(m20240601_000005_create_customer_segments::Migration),
            Box::new(m20240601_000006_create_contacts::Migration),
            Box::new(m20240601_000007_create_products::Migration),
            Box::new(m20240601_000008_create_orders::Migration),
            Box::new(m20240601_000009_create_order_items::Migration),
            Box::new(m20240601_000010_create_payments::Migration),
            Box::new(m20240601_000011_create_projects::Migration),
            Box::new(m20240601_000012_create_tasks::Migration),
            Box::new(m20240601_000013_create_notes::Migration),
            Box::new(m20240601_000014_create_activities::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000100_add_indexes::Migration),
        ]
    }
}
