//! One HTTP endpoint per record type.
//!
//! `/<name>` dispatches on the verb: `GET` reads one (`?id=`) or lists,
//! `POST` creates, `PUT` replaces, `DELETE` removes. Ids come from the query
//! string; `PUT` also accepts the body's `id` field.
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use common::pagination::Pagination;
use common::types::Message;
use models::Record;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::Value;
use service::{CrudService, ListFilter, SeaOrmRepository, SeaOrmService};
use uuid::Uuid;

use crate::errors::ApiError;

type Svc<R> = Arc<SeaOrmService<R>>;

/// Raw query parameters; parsed by hand so bad values become 400s with a readable message.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    pub id: Option<String>,
    pub customer_id: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Router serving `/<R::NAME>` backed by the sea-orm repository.
pub fn resource<R: Record>(db: DatabaseConnection) -> Router {
    let svc: Svc<R> = Arc::new(CrudService::new(Arc::new(SeaOrmRepository::new(db))));
    Router::new()
        .route(
            &format!("/{}", R::NAME),
            get(read::<R>)
                .post(create::<R>)
                .put(update::<R>)
                .delete(remove::<R>)
                .fallback(method_not_allowed),
        )
        .with_state(svc)
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn parse_uuid(field: &str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::BadRequest(format!("invalid {field}: {raw:?}")))
}

fn parse_page(field: &str, raw: Option<&str>) -> Result<Option<u32>, ApiError> {
    raw.map(|s| s.trim().parse::<u32>().map_err(|_| ApiError::BadRequest(format!("invalid {field}: {s:?}"))))
        .transpose()
}

fn required_id(q: &ResourceQuery) -> Result<Uuid, ApiError> {
    match q.id.as_deref() {
        Some(raw) => parse_uuid("id", raw),
        None => Err(ApiError::BadRequest("missing id".into())),
    }
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(name: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(format!("invalid {name} body: {e}")))
}

async fn read<R: Record>(
    State(svc): State<Svc<R>>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(q) = query?;
    if q.id.is_some() {
        let id = required_id(&q)?;
        let found = svc.get(id).await?.ok_or_else(|| ApiError::NotFound(format!("{} not found", R::NAME)))?;
        return Ok(Json(found).into_response());
    }

    let customer_id = q.customer_id.as_deref().map(|raw| parse_uuid("customer_id", raw)).transpose()?;
    let pagination = Pagination::from_parts(
        parse_page("page", q.page.as_deref())?,
        parse_page("per_page", q.per_page.as_deref())?,
    );
    let rows = svc.list(ListFilter { customer_id, pagination }).await?;
    Ok(Json(rows).into_response())
}

async fn create<R: Record>(
    State(svc): State<Svc<R>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Json(value) = body?;
    let input: R::Input = decode(R::NAME, value)?;
    Ok(Json(svc.create(input).await?))
}

async fn update<R: Record>(
    State(svc): State<Svc<R>>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Query(q) = query?;
    let Json(value) = body?;
    let id = match (q.id.as_deref(), value.get("id")) {
        (Some(raw), _) => parse_uuid("id", raw)?,
        (None, Some(Value::String(raw))) => parse_uuid("id", raw)?,
        (None, Some(_)) => return Err(ApiError::BadRequest("invalid id".into())),
        (None, None) => return Err(ApiError::BadRequest("missing id".into())),
    };
    let input: R::Input = decode(R::NAME, value)?;
    Ok(Json(svc.update(id, input).await?))
}

async fn remove<R: Record>(
    State(svc): State<Svc<R>>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(q) = query?;
    let id = required_id(&q)?;
    if svc.delete(id).await? {
        Ok(Json(Message { message: format!("{} deleted successfully", R::NAME) }))
    } else {
        Err(ApiError::NotFound(format!("{} not found", R::NAME)))
    }
}
