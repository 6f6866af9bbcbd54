//! Service layer providing CRUD operations on top of models.
//! - `crud`: generic statements, usable on a pooled connection or inside a transaction.
//! - `repository`: capability traits (`Retriever`, `Lister`, ...) and the sea-orm implementation.
//! - `service`: pass-through service over any `Manager`, so handlers can be tested with fakes.
//! - `order_payment`: order + payment written in one transaction.

pub mod errors;
pub mod crud;
pub mod repository;
pub mod service;
pub mod order_payment;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use repository::{ListFilter, Manager, SeaOrmRepository};
pub use service::{CrudService, SeaOrmService};
