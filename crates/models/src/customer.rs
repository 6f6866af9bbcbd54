use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{CustomerStatus, CustomerType};
use crate::errors::ModelError;
use crate::record::Record;
use crate::validate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub job_title: String,
    pub status: CustomerStatus,
    pub customer_type: CustomerType,
    pub source: String,
    pub credit_limit: f64,
    pub total_spent: f64,
    pub last_purchase_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub custom_fields: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable customer fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub job_title: String,
    pub status: CustomerStatus,
    pub customer_type: CustomerType,
    pub source: String,
    pub credit_limit: f64,
    pub total_spent: f64,
    pub last_purchase_at: Option<DateTimeWithTimeZone>,
    pub tags: Vec<String>,
    pub custom_fields: serde_json::Map<String, Json>,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "customer";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        if input.first_name.trim().is_empty() && input.last_name.trim().is_empty() {
            return Err(ModelError::validation("first_name or last_name required"));
        }
        validate::max_lens(&[
            ("first_name", input.first_name.as_str(), 128),
            ("last_name", input.last_name.as_str(), 128),
            ("email", input.email.as_str(), 255),
            ("phone", input.phone.as_str(), 64),
            ("company_name", input.company_name.as_str(), 255),
            ("job_title", input.job_title.as_str(), 128),
            ("source", input.source.as_str(), 100),
        ])?;
        validate::email(&input.email)?;
        validate::non_negative("credit_limit", input.credit_limit)?;
        validate::non_negative("total_spent", input.total_spent)
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.first_name = Set(input.first_name);
        am.last_name = Set(input.last_name);
        am.email = Set(input.email);
        am.phone = Set(input.phone);
        am.company_name = Set(input.company_name);
        am.job_title = Set(input.job_title);
        am.status = Set(input.status);
        am.customer_type = Set(input.customer_type);
        am.source = Set(input.source);
        am.credit_limit = Set(input.credit_limit);
        am.total_spent = Set(input.total_spent);
        am.last_purchase_at = Set(input.last_purchase_at);
        am.tags = Set(Json::from(input.tags));
        am.custom_fields = Set(Json::Object(input.custom_fields));
    }
}
