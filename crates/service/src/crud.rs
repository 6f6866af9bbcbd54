//! Generic statements shared by every record type.
//!
//! Each function is a single round trip (update reads first to report a
//! missing row) and takes any `ConnectionTrait`, so the same code runs on the
//! pool and inside a `DatabaseTransaction`.
use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use models::Record;

use crate::errors::ServiceError;
use crate::repository::ListFilter;

/// Fetch one row by id; `Ok(None)` when absent.
pub async fn get<R: Record, C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<R::Model>, ServiceError> {
    Ok(<R::Entity as EntityTrait>::find().filter(R::ID.eq(id)).one(db).await?)
}

/// All rows ordered by creation time, optionally narrowed to one customer and paged.
pub async fn list<R: Record, C: ConnectionTrait>(db: &C, filter: &ListFilter) -> Result<Vec<R::Model>, ServiceError> {
    let mut query = <R::Entity as EntityTrait>::find();
    if let Some(customer_id) = filter.customer_id {
        let column = R::CUSTOMER_ID
            .ok_or_else(|| ServiceError::Validation(format!("{} cannot be filtered by customer_id", R::NAME)))?;
        query = query.filter(column.eq(customer_id));
    }
    // id breaks ties between rows created in the same instant
    let query = query.order_by_asc(R::CREATED_AT).order_by_asc(R::ID);
    let rows = match filter.pagination {
        Some(p) => {
            let (page_idx, per_page) = p.normalize();
            query.paginate(db, per_page).fetch_page(page_idx).await?
        }
        None => query.all(db).await?,
    };
    Ok(rows)
}

/// Validate, assign id and timestamps, insert and return the stored row.
pub async fn create<R: Record, C: ConnectionTrait>(db: &C, input: R::Input) -> Result<R::Model, ServiceError> {
    R::validate(&input)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut am = <R::ActiveModel as ActiveModelBehavior>::new();
    am.set(R::ID, Uuid::new_v4().into());
    am.set(R::CREATED_AT, now.into());
    am.set(R::UPDATED_AT, now.into());
    R::apply(input, &mut am);
    Ok(am.insert(db).await?)
}

/// Replace every writable field of an existing row. `id` and `created_at` are kept.
pub async fn update<R: Record, C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    input: R::Input,
) -> Result<R::Model, ServiceError> {
    R::validate(&input)?;
    let existing = get::<R, C>(db, id).await?.ok_or_else(|| ServiceError::not_found(R::NAME))?;
    let mut am: R::ActiveModel = existing.into_active_model();
    R::apply(input, &mut am);
    let now: DateTimeWithTimeZone = Utc::now().into();
    am.set(R::UPDATED_AT, now.into());
    am.update(db).await.map_err(|e| match e {
        // deleted between the read and the write
        DbErr::RecordNotUpdated => ServiceError::not_found(R::NAME),
        e => ServiceError::Db(e.to_string()),
    })
}

/// `true` when a row was removed.
pub async fn delete<R: Record, C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ServiceError> {
    let res = <R::Entity as EntityTrait>::delete_many().filter(R::ID.eq(id)).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use common::pagination::Pagination;
    use models::enums::{
        ActivityStatus, ActivityType, AddressType, ContactRole, CustomerStatus, CustomerType, LeadStatus,
        OpportunityProduct, OpportunityStage, OrderStatus, PaymentStatus, Priority, ProjectStatus, TaskStatus,
    };
    use models::{
        activity, address, contact, customer, customer_segment, lead, note, opportunity, order, order_item, payment,
        product, project, task,
    };
    use sea_orm::DatabaseConnection;
    use serde::Serialize;
    use serde_json::{json, Map, Value};

    fn luke() -> customer::Input {
        customer::Input {
            first_name: "Luke".into(),
            last_name: "Skywalker".into(),
            email: "luke@jedi.com".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn customer_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };

        let created = create::<customer::Entity, _>(&db, luke()).await?;
        assert!(!created.id.is_nil());
        assert_eq!(created.created_at, created.updated_at);

        let found = get::<customer::Entity, _>(&db, created.id).await?.expect("created row");
        assert_eq!(found.first_name, "Luke");
        assert_eq!(found.last_name, "Skywalker");
        assert_eq!(found.email, "luke@jedi.com");

        let mut changed = luke();
        changed.status = CustomerStatus::Inactive;
        changed.tags = vec!["jedi".into()];
        let updated = update::<customer::Entity, _>(&db, created.id, changed).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.status, CustomerStatus::Inactive);
        assert_eq!(updated.tags, serde_json::json!(["jedi"]));

        assert!(delete::<customer::Entity, _>(&db, created.id).await?);
        assert!(get::<customer::Entity, _>(&db, created.id).await?.is_none());
        assert!(!delete::<customer::Entity, _>(&db, created.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let input = product::Input { name: "Hyperdrive motivator".into(), price: 10.0 };
        let err = update::<product::Entity, _>(&db, Uuid::new_v4(), input).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_not_written() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let name = format!("bad-{}", Uuid::new_v4());
        let err = create::<product::Entity, _>(&db, product::Input { name: name.clone(), price: -5.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));

        let all = list::<product::Entity, _>(&db, &ListFilter::default()).await?;
        assert!(all.iter().all(|p| p.name != name));
        Ok(())
    }

    #[tokio::test]
    async fn list_by_customer_and_page() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let owner = create::<customer::Entity, _>(&db, luke()).await?;
        for city in ["Mos Eisley", "Mos Espa", "Anchorhead"] {
            let input = address::Input {
                customer_id: owner.id,
                address_type: AddressType::Billing,
                street1: "1 Dune Sea Rd".into(),
                city: city.into(),
                country: "Tatooine".into(),
                ..Default::default()
            };
            create::<address::Entity, _>(&db, input).await?;
        }

        let mine = ListFilter { customer_id: Some(owner.id), pagination: None };
        let all = list::<address::Entity, _>(&db, &mine).await?;
        let cities: Vec<_> = all.iter().map(|a| a.city.as_str()).collect();
        assert_eq!(cities, ["Mos Eisley", "Mos Espa", "Anchorhead"]);

        let second_page = ListFilter { customer_id: Some(owner.id), pagination: Some(Pagination { page: 2, per_page: 2 }) };
        let page = list::<address::Entity, _>(&db, &second_page).await?;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].city, "Anchorhead");

        delete::<customer::Entity, _>(&db, owner.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn customer_filter_on_unrelated_table_is_rejected() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let filter = ListFilter { customer_id: Some(Uuid::new_v4()), pagination: None };
        let err = list::<task::Entity, _>(&db, &filter).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        Ok(())
    }

    /// Timestamps with whole seconds, so they survive Postgres' microsecond precision.
    fn at(ts: &str) -> DateTimeWithTimeZone {
        ts.parse().expect("timestamp literal")
    }

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    /// Every field of `input` reads back with the same JSON value from `model`.
    fn assert_carries<I: Serialize, M: Serialize>(name: &str, input: &I, model: &M) {
        let input = obj(serde_json::to_value(input).expect("input json"));
        let model = obj(serde_json::to_value(model).expect("model json"));
        for (field, expected) in &input {
            assert_eq!(model.get(field), Some(expected), "{name}.{field}");
        }
    }

    /// create, get, update, get, delete for one record type.
    async fn round_trip<R: Record>(db: &DatabaseConnection, first: R::Input, second: R::Input) -> Result<(), anyhow::Error>
    where
        R::Input: Serialize,
    {
        let created = create::<R, _>(db, first.clone()).await?;
        let id = R::id(&created);
        let fetched = get::<R, _>(db, id).await?.expect("created row");
        assert_carries(R::NAME, &first, &fetched);

        update::<R, _>(db, id, second.clone()).await?;
        let refetched = get::<R, _>(db, id).await?.expect("updated row");
        assert_eq!(R::id(&refetched), id);
        assert_carries(R::NAME, &second, &refetched);
        let (before, after) = (obj(serde_json::to_value(&created)?), obj(serde_json::to_value(&refetched)?));
        assert_eq!(before["created_at"], after["created_at"], "{}.created_at", R::NAME);
        assert_ne!(before, after, "{} unchanged by update", R::NAME);

        assert!(delete::<R, _>(db, id).await?);
        assert!(get::<R, _>(db, id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn every_record_type_round_trips() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let db = &db;

        let owner = create::<customer::Entity, _>(db, luke()).await?;
        let part = create::<product::Entity, _>(db, product::Input { name: "Kyber crystal".into(), price: 50.0 }).await?;
        let parent_order = create::<order::Entity, _>(
            db,
            order::Input {
                order_number: format!("ORD-{}", Uuid::new_v4()),
                customer_id: owner.id,
                ..Default::default()
            },
        )
        .await?;
        let parent_project = create::<project::Entity, _>(
            db,
            project::Input { name: "Death Star plans".into(), ..Default::default() },
        )
        .await?;

        round_trip::<customer::Entity>(
            db,
            luke(),
            customer::Input {
                first_name: "Luke".into(),
                last_name: "Skywalker".into(),
                email: "luke@rebellion.org".into(),
                phone: "555-0101".into(),
                company_name: "Rebel Alliance".into(),
                job_title: "Commander".into(),
                status: CustomerStatus::Blocked,
                customer_type: CustomerType::Churned,
                source: "referral".into(),
                credit_limit: 1000.0,
                total_spent: 250.5,
                last_purchase_at: Some(at("2024-05-04T12:00:00+00:00")),
                tags: vec!["jedi".into(), "pilot".into()],
                custom_fields: obj(json!({"squadron": "red", "number": 5})),
            },
        )
        .await?;

        round_trip::<address::Entity>(
            db,
            address::Input {
                customer_id: owner.id,
                street1: "1 Moisture Farm".into(),
                city: "Anchorhead".into(),
                country: "Tatooine".into(),
                ..Default::default()
            },
            address::Input {
                customer_id: owner.id,
                address_type: AddressType::Shipping,
                street1: "Echo Base".into(),
                street2: "Hangar 3".into(),
                city: "North Ridge".into(),
                state: "Ice Fields".into(),
                postal_code: "H0TH".into(),
                country: "Hoth".into(),
                is_default: true,
            },
        )
        .await?;

        round_trip::<opportunity::Entity>(
            db,
            opportunity::Input {
                customer_id: owner.id,
                name: "X-wing refit".into(),
                value: 10_000.0,
                probability: 10.0,
                ..Default::default()
            },
            opportunity::Input {
                customer_id: owner.id,
                name: "X-wing refit".into(),
                description: "Full astromech upgrade".into(),
                value: 12_500.0,
                stage: OpportunityStage::Negotiation,
                probability: 75.0,
                expected_close_date: Some(at("2024-07-01T00:00:00+00:00")),
                actual_close_date: None,
                source: "trade show".into(),
                products: vec![OpportunityProduct::ServiceRecurring, OpportunityProduct::DueDiligence],
            },
        )
        .await?;

        round_trip::<lead::Entity>(
            db,
            lead::Input { first_name: "Wedge".into(), last_name: "Antilles".into(), ..Default::default() },
            lead::Input {
                first_name: "Wedge".into(),
                last_name: "Antilles".into(),
                email: "wedge@rogue.squadron".into(),
                phone: "555-0102".into(),
                company: "Rogue Squadron".into(),
                source: "cold call".into(),
                status: LeadStatus::Qualified,
                score: 87,
                assigned_to: Some(Uuid::new_v4()),
                customer_id: Some(owner.id),
            },
        )
        .await?;

        round_trip::<customer_segment::Entity>(
            db,
            customer_segment::Input { name: "Pilots".into(), ..Default::default() },
            customer_segment::Input {
                name: "Veteran pilots".into(),
                description: "Flew at Yavin".into(),
                criteria: obj(json!({"min_missions": 10, "ships": ["x-wing", "y-wing"]})),
            },
        )
        .await?;

        round_trip::<contact::Entity>(
            db,
            contact::Input { first_name: "Mon".into(), last_name: "Mothma".into(), ..Default::default() },
            contact::Input {
                customer_id: Some(owner.id),
                first_name: "Mon".into(),
                last_name: "Mothma".into(),
                email: "mon@chandrila.gov".into(),
                phone: "555-0103".into(),
                job_title: "Chancellor".into(),
                role: ContactRole::Executive,
            },
        )
        .await?;

        round_trip::<product::Entity>(
            db,
            product::Input { name: "Power converter".into(), price: 0.0 },
            product::Input { name: "Power converter (T-16)".into(), price: 19.99 },
        )
        .await?;

        round_trip::<order::Entity>(
            db,
            order::Input {
                order_number: format!("ORD-{}", Uuid::new_v4()),
                customer_id: owner.id,
                order_date: Some(at("2024-06-01T09:00:00+00:00")),
                ..Default::default()
            },
            order::Input {
                order_number: format!("ORD-{}", Uuid::new_v4()),
                customer_id: owner.id,
                status: OrderStatus::Shipped,
                sub_total: 90.0,
                tax_amount: 9.0,
                discount: 4.0,
                total: 95.0,
                order_date: Some(at("2024-06-01T09:00:00+00:00")),
                shipped_date: Some(at("2024-06-02T09:00:00+00:00")),
                delivered_date: None,
                billing_address_id: None,
                shipping_address_id: None,
                notes: "Leave at the cantina".into(),
                metadata: obj(json!({"gift": true})),
            },
        )
        .await?;

        round_trip::<order_item::Entity>(
            db,
            order_item::Input { order_id: parent_order.id, product_id: part.id, quantity: 1, total: 50.0 },
            order_item::Input { order_id: parent_order.id, product_id: part.id, quantity: 3, total: 150.0 },
        )
        .await?;

        round_trip::<payment::Entity>(
            db,
            payment::Input { order_id: parent_order.id, amount: 50.0, ..Default::default() },
            payment::Input { order_id: parent_order.id, amount: 150.0, status: PaymentStatus::Refunded },
        )
        .await?;

        round_trip::<project::Entity>(
            db,
            project::Input { name: "Shield generator".into(), ..Default::default() },
            project::Input {
                customer_id: Some(owner.id),
                name: "Shield generator".into(),
                description: "Endor moon".into(),
                status: ProjectStatus::OnHold,
                start_date: Some(at("2024-01-01T00:00:00+00:00")),
                end_date: Some(at("2024-12-31T00:00:00+00:00")),
                budget: 1_000_000.0,
                progress: 42.5,
                notes: "Fully operational".into(),
            },
        )
        .await?;

        round_trip::<task::Entity>(
            db,
            task::Input { project_id: parent_project.id, name: "Steal plans".into(), ..Default::default() },
            task::Input {
                project_id: parent_project.id,
                name: "Steal plans".into(),
                description: "Scarif archive".into(),
                status: TaskStatus::InProgress,
                start_date: Some(at("2024-02-01T00:00:00+00:00")),
                end_date: Some(at("2024-02-02T00:00:00+00:00")),
                assignee: "Jyn Erso".into(),
                task_type: "infiltration".into(),
                priority: Priority::Urgent,
            },
        )
        .await?;

        round_trip::<note::Entity>(
            db,
            note::Input { note: "Prefers blue milk".into(), ..Default::default() },
            note::Input {
                customer_id: Some(owner.id),
                note: "Prefers blue milk, chilled".into(),
                note_type: "preference".into(),
                author: "Beru".into(),
                note_date: Some(at("2024-03-03T08:00:00+00:00")),
                status: "open".into(),
                priority: Priority::Low,
                category: "diet".into(),
                tags: vec!["milk".into()],
                metadata: obj(json!({"source": "farm"})),
            },
        )
        .await?;

        round_trip::<activity::Entity>(
            db,
            activity::Input::default(),
            activity::Input {
                customer_id: Some(owner.id),
                activity_type: ActivityType::Meeting,
                description: "Briefing on Yavin 4".into(),
                activity_date: Some(at("2024-04-04T16:00:00+00:00")),
                status: ActivityStatus::AwaitingApproval,
                priority: Priority::High,
                category: "mission".into(),
                tags: vec!["briefing".into(), "rebellion".into()],
                metadata: obj(json!({"room": "war room", "attendees": 30})),
            },
        )
        .await?;

        delete::<order::Entity, _>(db, parent_order.id).await?;
        delete::<product::Entity, _>(db, part.id).await?;
        delete::<project::Entity, _>(db, parent_project.id).await?;
        delete::<customer::Entity, _>(db, owner.id).await?;
        Ok(())
    }
}
