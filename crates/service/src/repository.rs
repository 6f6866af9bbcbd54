//! Repository capabilities.
//!
//! Small single-method traits are composed into `Reader`, `Writer` and
//! `Manager` through blanket impls, so a type gets the composite for free once
//! it implements the pieces. `SeaOrmRepository<R>` is the database-backed
//! implementation for any record type.
use std::marker::PhantomData;

use async_trait::async_trait;
use common::pagination::Pagination;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::Record;

use crate::crud;
use crate::errors::ServiceError;

/// Narrowing applied by `Lister::list`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Only rows owned by this customer. Rejected for tables without a customer column.
    pub customer_id: Option<Uuid>,
    pub pagination: Option<Pagination>,
}

#[async_trait]
pub trait Retriever<R: Record>: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<R::Model>, ServiceError>;
}

#[async_trait]
pub trait Lister<R: Record>: Send + Sync {
    async fn list(&self, filter: ListFilter) -> Result<Vec<R::Model>, ServiceError>;
}

#[async_trait]
pub trait Creator<R: Record>: Send + Sync {
    async fn create(&self, input: R::Input) -> Result<R::Model, ServiceError>;
}

#[async_trait]
pub trait Updater<R: Record>: Send + Sync {
    async fn update(&self, id: Uuid, input: R::Input) -> Result<R::Model, ServiceError>;
}

#[async_trait]
pub trait Deleter<R: Record>: Send + Sync {
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

pub trait Reader<R: Record>: Retriever<R> + Lister<R> {}
impl<R: Record, T: Retriever<R> + Lister<R>> Reader<R> for T {}

pub trait Writer<R: Record>: Creator<R> + Updater<R> + Deleter<R> {}
impl<R: Record, T: Creator<R> + Updater<R> + Deleter<R>> Writer<R> for T {}

pub trait Manager<R: Record>: Reader<R> + Writer<R> {}
impl<R: Record, T: Reader<R> + Writer<R>> Manager<R> for T {}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRepository<R: Record> {
    pub db: DatabaseConnection,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> SeaOrmRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _record: PhantomData }
    }
}

impl<R: Record> Clone for SeaOrmRepository<R> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

#[async_trait]
impl<R: Record> Retriever<R> for SeaOrmRepository<R> {
    async fn get(&self, id: Uuid) -> Result<Option<R::Model>, ServiceError> {
        crud::get::<R, _>(&self.db, id).await
    }
}

#[async_trait]
impl<R: Record> Lister<R> for SeaOrmRepository<R> {
    async fn list(&self, filter: ListFilter) -> Result<Vec<R::Model>, ServiceError> {
        crud::list::<R, _>(&self.db, &filter).await
    }
}

#[async_trait]
impl<R: Record> Creator<R> for SeaOrmRepository<R> {
    async fn create(&self, input: R::Input) -> Result<R::Model, ServiceError> {
        crud::create::<R, _>(&self.db, input).await
    }
}

#[async_trait]
impl<R: Record> Updater<R> for SeaOrmRepository<R> {
    async fn update(&self, id: Uuid, input: R::Input) -> Result<R::Model, ServiceError> {
        crud::update::<R, _>(&self.db, id, input).await
    }
}

#[async_trait]
impl<R: Record> Deleter<R> for SeaOrmRepository<R> {
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        crud::delete::<R, _>(&self.db, id).await
    }
}
