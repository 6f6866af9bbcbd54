use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::{order, payment};

use crate::crud;
use crate::errors::ServiceError;

/// Writes an order and its first payment atomically.
#[derive(Clone)]
pub struct OrderPaymentService {
    db: DatabaseConnection,
}

impl OrderPaymentService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Create the order, then a payment pointing at it, in one transaction.
    /// Any `order_id` on the payment input is replaced by the new order's id.
    /// On error the transaction is dropped and rolled back, so no order is left without its payment.
    #[instrument(skip_all, fields(order_number = %order_input.order_number))]
    pub async fn process_order_with_payment(
        &self,
        order_input: order::Input,
        mut payment_input: payment::Input,
    ) -> Result<(order::Model, payment::Model), ServiceError> {
        let txn = self.db.begin().await?;

        let order = crud::create::<order::Entity, _>(&txn, order_input).await?;
        payment_input.order_id = order.id;
        let payment = crud::create::<payment::Entity, _>(&txn, payment_input).await?;

        txn.commit().await?;
        info!(order_id = %order.id, payment_id = %payment.id, amount = payment.amount, "order_with_payment_processed");
        Ok((order, payment))
    }
}
