use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::record::Record;
use crate::validate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
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

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub name: String,
    pub price: f64,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "product";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::required("name", &input.name)?;
        validate::max_len("name", &input.name, 255)?;
        validate::non_negative("price", input.price)
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.name = Set(input.name);
        am.price = Set(input.price);
    }
}
