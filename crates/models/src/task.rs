use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{Priority, TaskStatus};
use crate::errors::ModelError;
use crate::record::Record;
use crate::{project, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: TaskStatus,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub assignee: String,
    pub task_type: String,
    pub priority: Priority,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Project,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Project => Entity::belongs_to(project::Entity)
                .from(Column::ProjectId)
                .to(project::Column::Id)
                .into(),
        }
    }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Input {
    pub project_id: Uuid,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub assignee: String,
    pub task_type: String,
    pub priority: Priority,
}

impl Record for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Input = Input;

    const NAME: &'static str = "task";
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn id(model: &Model) -> Uuid {
        model.id
    }

    fn validate(input: &Input) -> Result<(), ModelError> {
        validate::required_id("project_id", input.project_id)?;
        validate::required("name", &input.name)?;
        validate::max_lens(&[
            ("name", input.name.as_str(), 255),
            ("assignee", input.assignee.as_str(), 128),
            ("task_type", input.task_type.as_str(), 64),
        ])?;
        validate::ordered(input.start_date.as_ref(), input.end_date.as_ref())
    }

    fn apply(input: Input, am: &mut ActiveModel) {
        am.project_id = Set(input.project_id);
        am.name = Set(input.name);
        am.description = Set(input.description);
        am.status = Set(input.status);
        am.start_date = Set(input.start_date);
        am.end_date = Set(input.end_date);
        am.assignee = Set(input.assignee);
        am.task_type = Set(input.task_type);
        am.priority = Set(input.priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_new_task() {
        let input: Input = serde_json::from_value(serde_json::json!({
            "project_id": Uuid::new_v4(),
            "name": "Deflector shield calibration"
        }))
        .unwrap();
        assert_eq!(input.status, TaskStatus::NotStarted);
        assert_eq!(input.priority, Priority::Medium);
        assert!(<Entity as Record>::validate(&input).is_ok());
    }

    #[test]
    fn invalid_status_fails_decoding() {
        let res = serde_json::from_value::<Input>(serde_json::json!({"status": "done-ish"}));
        assert!(res.is_err());
    }
}
