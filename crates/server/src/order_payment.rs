use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use models::{order, payment};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service::order_payment::OrderPaymentService;

use crate::errors::ApiError;
use crate::resource::decode;

/// `POST /order_payment` body. The payment's `order_id` may be omitted.
#[derive(Debug, Deserialize)]
pub struct OrderPaymentRequest {
    pub order: order::Input,
    pub payment: payment::Input,
}

#[derive(Debug, Serialize)]
pub struct OrderPaymentResponse {
    pub order: order::Model,
    pub payment: payment::Model,
}

pub async fn process(
    State(svc): State<OrderPaymentService>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<OrderPaymentResponse>, ApiError> {
    let Json(value) = body?;
    let req: OrderPaymentRequest = decode("order_payment", value)?;
    let (order, payment) = svc.process_order_with_payment(req.order, req.payment).await?;
    Ok(Json(OrderPaymentResponse { order, payment }))
}
