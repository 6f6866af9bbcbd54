use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::Record;

use crate::errors::ServiceError;
use crate::repository::{ListFilter, Manager, SeaOrmRepository};

/// Application service for one record type.
/// Forwards to the repository and records structured events for mutations.
pub struct CrudService<R: Record, M: Manager<R>> {
    repo: Arc<M>,
    _record: PhantomData<fn() -> R>,
}

/// The production wiring: a service over the sea-orm repository.
pub type SeaOrmService<R> = CrudService<R, SeaOrmRepository<R>>;

impl<R: Record, M: Manager<R>> Clone for CrudService<R, M> {
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone(), _record: PhantomData }
    }
}

impl<R: Record, M: Manager<R>> CrudService<R, M> {
    pub fn new(repo: Arc<M>) -> Self { Self { repo, _record: PhantomData } }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn get(&self, id: Uuid) -> Result<Option<R::Model>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn list(&self, filter: ListFilter) -> Result<Vec<R::Model>, ServiceError> {
        self.repo.list(filter).await
    }

    #[instrument(skip(self, input), fields(entity = R::NAME))]
    pub async fn create(&self, input: R::Input) -> Result<R::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(entity = R::NAME, id = %R::id(&created), "record_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(entity = R::NAME))]
    pub async fn update(&self, id: Uuid, input: R::Input) -> Result<R::Model, ServiceError> {
        let updated = self.repo.update(id, input).await?;
        info!(entity = R::NAME, id = %id, "record_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(entity = R::NAME, id = %id, "record_deleted");
        }
        Ok(deleted)
    }
}
