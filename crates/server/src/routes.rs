use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use models::{
    activity, address, contact, customer, customer_segment, lead, note, opportunity, order, order_item, payment,
    product, project, task,
};
use sea_orm::DatabaseConnection;
use service::order_payment::OrderPaymentService;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::ApiError;
use crate::metrics;
use crate::order_payment;
use crate::resource::{method_not_allowed, resource};

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (StatusCode, String) {
    metrics::encode_metrics()
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no such endpoint".into())
}

/// One CRUD endpoint per record type.
fn resources(db: &DatabaseConnection) -> Router {
    Router::new()
        .merge(resource::<customer::Entity>(db.clone()))
        .merge(resource::<address::Entity>(db.clone()))
        .merge(resource::<opportunity::Entity>(db.clone()))
        .merge(resource::<lead::Entity>(db.clone()))
        .merge(resource::<customer_segment::Entity>(db.clone()))
        .merge(resource::<contact::Entity>(db.clone()))
        .merge(resource::<product::Entity>(db.clone()))
        .merge(resource::<order::Entity>(db.clone()))
        .merge(resource::<order_item::Entity>(db.clone()))
        .merge(resource::<payment::Entity>(db.clone()))
        .merge(resource::<project::Entity>(db.clone()))
        .merge(resource::<task::Entity>(db.clone()))
        .merge(resource::<note::Entity>(db.clone()))
        .merge(resource::<activity::Entity>(db.clone()))
}

/// Build the full application router: entity endpoints, order/payment, health and metrics
pub fn build_router(db: DatabaseConnection, cors: CorsLayer) -> Router {
    let payments = Router::new()
        .route(
            "/order_payment",
            post(order_payment::process).fallback(method_not_allowed),
        )
        .with_state(OrderPaymentService::new(db.clone()));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .merge(resources(&db))
        .merge(payments)
        .route_layer(middleware::from_fn(metrics::track))
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
