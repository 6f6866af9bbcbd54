use crate::tests::{insert_customer, new_active, test_db};
use crate::{customer, order, payment};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, TransactionTrait};
use uuid::Uuid;

fn order_input(customer_id: Uuid) -> order::Input {
    order::Input {
        order_number: format!("ORD-{}", Uuid::new_v4()),
        customer_id,
        total: 42.0,
        ..Default::default()
    }
}

/// Test order + payment commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let owner = insert_customer(&db, "Han", "Solo").await?;

    let txn = db.begin().await?;
    let o = new_active::<order::Entity>(order_input(owner.id)).insert(&txn).await?;
    let p = new_active::<payment::Entity>(payment::Input { order_id: o.id, amount: 42.0, ..Default::default() })
        .insert(&txn)
        .await?;
    txn.commit().await?;

    let paid_for = p.find_related(order::Entity).one(&db).await?;
    assert_eq!(paid_for.map(|x| x.id), Some(o.id));

    // payments cascade with their order
    order::Entity::delete_by_id(o.id).exec(&db).await?;
    assert!(payment::Entity::find_by_id(p.id).one(&db).await?.is_none());
    customer::Entity::delete_by_id(owner.id).exec(&db).await?;
    Ok(())
}

/// Test rollback leaves no order behind
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let owner = insert_customer(&db, "Chew", "Bacca").await?;

    let txn = db.begin().await?;
    let o = new_active::<order::Entity>(order_input(owner.id)).insert(&txn).await?;
    txn.rollback().await?;

    assert!(order::Entity::find_by_id(o.id).one(&db).await?.is_none());
    customer::Entity::delete_by_id(owner.id).exec(&db).await?;
    Ok(())
}
