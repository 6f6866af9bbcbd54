use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::LeadStatus;
use crate::errors::ModelError;
use crate::record::Record;
use crate::{customer, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub source: String,
    pub status: LeadStatus,
    pub score: i32,
    pub assigned_to: Option<Uuid>,
    /// Set once the lead converts.
    pub customer_id: Option<Uuid>,
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
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub source: String,
    pub status: LeadStatus,
    pub score: i32,
    pub assigned_to: Option<Uuid>,
    pub customer_id: Option<Uuid>,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "lead";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const CUSTOMER_ID: Option<Column> = Some(Column::CustomerId);

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::max_lens(&[
            ("first_name", input.first_name.as_str(), 128),
            ("last_name", input.last_name.as_str(), 128),
            ("email", input.email.as_str(), 255),
            ("phone", input.phone.as_str(), 64),
            ("company", input.company.as_str(), 255),
            ("source", input.source.as_str(), 100),
        ])?;
        validate::email(&input.email)
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.first_name = Set(input.first_name);
        am.last_name = Set(input.last_name);
        am.email = Set(input.email);
        am.phone = Set(input.phone);
        am.company = Set(input.company);
        am.source = Set(input.source);
        am.status = Set(input.status);
        am.score = Set(input.score);
        am.assigned_to = Set(input.assigned_to);
        am.customer_id = Set(input.customer_id);
    }
}
