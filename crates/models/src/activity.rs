use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{ActivityStatus, ActivityType, Priority};
use crate::errors::ModelError;
use crate::record::Record;
use crate::{customer, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    pub activity_type: ActivityType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub activity_date: Option<DateTimeWithTimeZone>,
    pub status: ActivityStatus,
    pub priority: Priority,
    pub category: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub metadata: Json,
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
    pub customer_id: Option<Uuid>,
    pub activity_type: ActivityType,
    pub description: String,
    pub activity_date: Option<DateTimeWithTimeZone>,
    pub status: ActivityStatus,
    pub priority: Priority,
    pub category: String,
    pub tags: Vec<String>,
    pub metadata: serde_json::Map<String, Json>,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "activity";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const CUSTOMER_ID: Option<Column> = Some(Column::CustomerId);

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::max_len("category", &input.category, 64)
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.customer_id = Set(input.customer_id);
        am.activity_type = Set(input.activity_type);
        am.description = Set(input.description);
        am.activity_date = Set(input.activity_date);
        am.status = Set(input.status);
        am.priority = Set(input.priority);
        am.category = Set(input.category);
        am.tags = Set(Json::from(input.tags));
        am.metadata = Set(Json::Object(input.metadata));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn awaiting_statuses_decode() {
        let input: Input = serde_json::from_str(r#"{"activity_type":"call","status":"awaiting_payment"}"#).unwrap();
        assert_eq!(input.activity_type, ActivityType::Call);
        assert_eq!(input.status, ActivityStatus::AwaitingPayment);
        assert_eq!(input.priority, Priority::Medium);
    }

    #[test]
    fn category_wider_than_column_is_rejected() {
        let input = Input { category: "c".repeat(65), ..Default::default() };
        assert_eq!(
            <Entity as Record>::validate(&input),
            Err(ModelError::Validation("category must be at most 64 characters".into()))
        );
        let input = Input { category: "c".repeat(64), ..Default::default() };
        assert!(<Entity as Record>::validate(&input).is_ok());
    }
}
