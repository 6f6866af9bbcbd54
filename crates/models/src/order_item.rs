use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::record::Record;
use crate::{order, product, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub total: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Order,
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Order => Entity::belongs_to(order::Entity)
                .from(Column::OrderId)
                .to(order::Column::Id)
                .into(),
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub total: f64,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "order_item";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::required_id("order_id", input.order_id)?;
        validate::required_id("product_id", input.product_id)?;
        validate::positive("quantity", input.quantity)?;
        validate::non_negative("total", input.total)
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.order_id = Set(input.order_id);
        am.product_id = Set(input.product_id);
        am.quantity = Set(input.quantity);
        am.total = Set(input.total);
    }
}
