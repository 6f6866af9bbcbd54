//! Glue between the per-table entity modules and the generic repository.
//!
//! Implemented on each entity's `Entity` type. The associated types pin the
//! sea-orm model/active-model pair, `Input` is the JSON payload accepted on
//! create and update.
use std::fmt::Debug;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, IntoActiveModel,
    ModelTrait,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

pub trait Record: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel, Column = Self::Column>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Clone
        + Debug
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;
    type Column: ColumnTrait;
    type Input: DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Singular name used in routes, log fields and messages (`customer`, `order_item`).
    const NAME: &'static str;
    const ID: Self::Column;
    const CREATED_AT: Self::Column;
    const UPDATED_AT: Self::Column;
    /// Column holding the owning customer, when the table has one.
    const CUSTOMER_ID: Option<Self::Column> = None;

    fn id(model: &Self::Model) -> Uuid;

    fn validate(_input: &Self::Input) -> Result<(), ModelError> {
        Ok(())
    }

    /// Copy every input field onto the active model. Identity and timestamps are left alone.
    fn apply(input: Self::Input, am: &mut Self::ActiveModel);
}
