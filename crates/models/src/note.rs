use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::Priority;
use crate::errors::ModelError;
use crate::record::Record;
use crate::{customer, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub note: String,
    pub note_type: String,
    pub author: String,
    pub note_date: Option<DateTimeWithTimeZone>,
    pub status: String,
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
    pub note: String,
    pub note_type: String,
    pub author: String,
    pub note_date: Option<DateTimeWithTimeZone>,
    pub status: String,
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

    const NAME: &'static str = "note";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const CUSTOMER_ID: Option<Column> = Some(Column::CustomerId);

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::required("note", &input.note)?;
        validate::max_lens(&[
            ("note_type", input.note_type.as_str(), 64),
            ("author", input.author.as_str(), 128),
            ("status", input.status.as_str(), 64),
            ("category", input.category.as_str(), 64),
        ])
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.customer_id = Set(input.customer_id);
        am.note = Set(input.note);
        am.note_type = Set(input.note_type);
        am.author = Set(input.author);
        am.note_date = Set(input.note_date);
        am.status = Set(input.status);
        am.priority = Set(input.priority);
        am.category = Set(input.category);
        am.tags = Set(Json::from(input.tags));
        am.metadata = Set(Json::Object(input.metadata));
    }
}
