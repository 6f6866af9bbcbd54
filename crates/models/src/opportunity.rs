use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{OpportunityProduct, OpportunityStage};
use crate::errors::ModelError;
use crate::record::Record;
use crate::{customer, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "opportunities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub value: f64,
    pub stage: OpportunityStage,
    pub probability: f64,
    pub expected_close_date: Option<DateTimeWithTimeZone>,
    pub actual_close_date: Option<DateTimeWithTimeZone>,
    pub source: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub products: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub customer_id: Uuid,
    pub name: String,
    pub description: String,
    pub value: f64,
    pub stage: OpportunityStage,
    /// Percent chance of closing, 0..=100.
    pub probability: f64,
    pub expected_close_date: Option<DateTimeWithTimeZone>,
    pub actual_close_date: Option<DateTimeWithTimeZone>,
    pub source: String,
    pub products: Vec<OpportunityProduct>,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "opportunity";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const CUSTOMER_ID: Option<Column> = Some(Column::CustomerId);

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::required_id("customer_id", input.customer_id)?;
        validate::required("name", &input.name)?;
        validate::max_lens(&[("name", input.name.as_str(), 255), ("source", input.source.as_str(), 100)])?;
        validate::non_negative("value", input.value)?;
        validate::percentage("probability", input.probability)
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        let products: Vec<&str> = input.products.iter().map(OpportunityProduct::label).collect();
        am.customer_id = Set(input.customer_id);
        am.name = Set(input.name);
        am.description = Set(input.description);
        am.value = Set(input.value);
        am.stage = Set(input.stage);
        am.probability = Set(input.probability);
        am.expected_close_date = Set(input.expected_close_date);
        am.actual_close_date = Set(input.actual_close_date);
        am.source = Set(input.source);
        am.products = Set(Json::from(products));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_out_of_range_is_rejected() {
        let input = Input { customer_id: Uuid::new_v4(), name: "Death Star II".into(), probability: 120.0, ..Default::default() };
        assert!(<Entity as Record>::validate(&input).is_err());
    }

    #[test]
    fn products_are_stored_by_label() {
        let mut am = <ActiveModel as ActiveModelBehavior>::new();
        let input = Input {
            products: vec![OpportunityProduct::TaxStrategy, OpportunityProduct::Other],
            ..Default::default()
        };
        <Entity as Record>::apply(input, &mut am);
        assert_eq!(am.products, Set(serde_json::json!(["tax strategy", "other"])));
    }

    #[test]
    fn unknown_product_fails_decoding() {
        let res = serde_json::from_str::<Input>(r#"{"products":["lightsabers"]}"#);
        assert!(res.is_err());
    }
}
