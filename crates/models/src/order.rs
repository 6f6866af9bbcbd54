use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::OrderStatus;
use crate::errors::ModelError;
use crate::record::Record;
use crate::{address, customer, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_number: String,
    pub customer_id: Uuid,
    pub status: OrderStatus,
    pub sub_total: f64,
    pub tax_amount: f64,
    pub discount: f64,
    pub total: f64,
    pub order_date: DateTimeWithTimeZone,
    pub shipped_date: Option<DateTimeWithTimeZone>,
    pub delivered_date: Option<DateTimeWithTimeZone>,
    pub billing_address_id: Option<Uuid>,
    pub shipping_address_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub metadata: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
    BillingAddress,
    ShippingAddress,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
            Relation::BillingAddress => Entity::belongs_to(address::Entity)
                .from(Column::BillingAddressId)
                .to(address::Column::Id)
                .into(),
            Relation::ShippingAddress => Entity::belongs_to(address::Entity)
                .from(Column::ShippingAddressId)
                .to(address::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub order_number: String,
    pub customer_id: Uuid,
    pub status: OrderStatus,
    pub sub_total: f64,
    pub tax_amount: f64,
    pub discount: f64,
    pub total: f64,
    /// Defaults to the time of the write when omitted.
    pub order_date: Option<DateTimeWithTimeZone>,
    pub shipped_date: Option<DateTimeWithTimeZone>,
    pub delivered_date: Option<DateTimeWithTimeZone>,
    pub billing_address_id: Option<Uuid>,
    pub shipping_address_id: Option<Uuid>,
    pub notes: String,
    pub metadata: serde_json::Map<String, Json>,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "order";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const CUSTOMER_ID: Option<Column> = Some(Column::CustomerId);

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::required("order_number", &input.order_number)?;
        validate::max_len("order_number", &input.order_number, 64)?;
        validate::required_id("customer_id", input.customer_id)?;
        validate::non_negative("sub_total", input.sub_total)?;
        validate::non_negative("tax_amount", input.tax_amount)?;
        validate::non_negative("discount", input.discount)?;
        validate::non_negative("total", input.total)?;
        validate::ordered(input.shipped_date.as_ref(), input.delivered_date.as_ref())
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.order_number = Set(input.order_number);
        am.customer_id = Set(input.customer_id);
        am.status = Set(input.status);
        am.sub_total = Set(input.sub_total);
        am.tax_amount = Set(input.tax_amount);
        am.discount = Set(input.discount);
        am.total = Set(input.total);
        am.order_date = Set(input.order_date.unwrap_or_else(|| Utc::now().into()));
        am.shipped_date = Set(input.shipped_date);
        am.delivered_date = Set(input.delivered_date);
        am.billing_address_id = Set(input.billing_address_id);
        am.shipping_address_id = Set(input.shipping_address_id);
        am.notes = Set(input.notes);
        am.metadata = Set(Json::Object(input.metadata));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_number_is_required() {
        let input = Input { customer_id: Uuid::new_v4(), ..Default::default() };
        assert_eq!(
            <Entity as Record>::validate(&input),
            Err(ModelError::Validation("order_number required".into()))
        );
    }

    #[test]
    fn delivery_before_shipping_is_rejected() {
        let shipped: DateTimeWithTimeZone = "2024-06-02T10:00:00+00:00".parse().unwrap();
        let delivered: DateTimeWithTimeZone = "2024-06-01T10:00:00+00:00".parse().unwrap();
        let input = Input {
            order_number: "ORD-1".into(),
            customer_id: Uuid::new_v4(),
            shipped_date: Some(shipped),
            delivered_date: Some(delivered),
            ..Default::default()
        };
        assert!(<Entity as Record>::validate(&input).is_err());
    }

    #[test]
    fn missing_order_date_is_stamped() {
        let mut am = <ActiveModel as ActiveModelBehavior>::new();
        <Entity as Record>::apply(Input::default(), &mut am);
        assert!(am.order_date.is_set());
    }
}
