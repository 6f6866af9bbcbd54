use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::AddressType;
use crate::errors::ModelError;
use crate::record::Record;
use crate::{customer, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub address_type: AddressType,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
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

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub address_type: AddressType,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "address";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const CUSTOMER_ID: Option<Column> = Some(Column::CustomerId);

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::required_id("customer_id", input.customer_id)?;
        validate::required("street1", &input.street1)?;
        validate::required("city", &input.city)?;
        validate::required("country", &input.country)?;
        validate::max_lens(&[
            ("street1", input.street1.as_str(), 255),
            ("street2", input.street2.as_str(), 255),
            ("city", input.city.as_str(), 100),
            ("state", input.state.as_str(), 100),
            ("postal_code", input.postal_code.as_str(), 20),
            ("country", input.country.as_str(), 100),
        ])
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.customer_id = Set(input.customer_id);
        am.address_type = Set(input.address_type);
        am.street1 = Set(input.street1);
        am.street2 = Set(input.street2);
        am.city = Set(input.city);
        am.state = Set(input.state);
        am.postal_code = Set(input.postal_code);
        am.country = Set(input.country);
        am.is_default = Set(input.is_default);
    }
}
