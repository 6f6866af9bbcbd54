//! Persistent CRM records.
//!
//! Every table is a sea-orm entity module (`Model`, `ActiveModel`, `Column`)
//! plus an `Input` payload and a [`record::Record`] implementation that lets
//! the service layer handle all of them through one generic code path.
pub mod errors;
pub mod db;
pub mod enums;
pub mod record;
mod validate;

pub mod customer;
pub mod address;
pub mod opportunity;
pub mod lead;
pub mod customer_segment;
pub mod contact;
pub mod product;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod project;
pub mod task;
pub mod note;
pub mod activity;

pub use errors::ModelError;
pub use record::Record;

#[cfg(test)]
mod tests;
