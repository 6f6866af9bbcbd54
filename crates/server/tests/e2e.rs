//! End-to-end tests against a real server bound to an ephemeral port.
//! Skipped when `SKIP_DB_TESTS` is set or the database is unreachable.
use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let cfg = configs::AppConfig::load_or_env().map(|c| c.database).unwrap_or_default();
    let db = match models::db::connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(None);
        }
    };
    models::db::migrate(&db).await?;

    let app: Router = routes::build_router(db, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(Some(TestApp { base_url }))
}

#[tokio::test]
async fn e2e_customer_lifecycle() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();
    let url = format!("{}/customer", app.base_url);

    let res = client
        .post(&url)
        .json(&json!({"first_name": "Luke", "last_name": "Skywalker", "email": "luke@jedi.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["id"].as_str().expect("id").to_string();
    assert!(Uuid::parse_str(&id).is_ok());
    assert!(created["created_at"].is_string());
    assert!(created["updated_at"].is_string());

    let got: Value = client.get(&url).query(&[("id", &id)]).send().await?.json().await?;
    assert_eq!(got["first_name"], "Luke");
    assert_eq!(got["last_name"], "Skywalker");
    assert_eq!(got["email"], "luke@jedi.com");

    // PUT a fetched record back with the id only in the body
    let mut changed = got.clone();
    changed["status"] = json!("inactive");
    let res = client.put(&url).json(&changed).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["status"], "inactive");

    let res = client.delete(&url).query(&[("id", &id)]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"message": "customer deleted successfully"}));

    let res = client.get(&url).query(&[("id", &id)]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = client.delete(&url).query(&[("id", &id)]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_addresses_listed_per_customer() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();

    let owner: Value = client
        .post(format!("{}/customer", app.base_url))
        .json(&json!({"first_name": "Leia", "last_name": "Organa"}))
        .send()
        .await?
        .json()
        .await?;
    let owner_id = owner["id"].as_str().expect("id").to_string();

    for kind in ["billing", "shipping"] {
        let res = client
            .post(format!("{}/address", app.base_url))
            .json(&json!({"customer_id": owner_id, "type": kind, "street1": "Palace", "city": "Aldera", "country": "Alderaan"}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }

    let listed: Vec<Value> = client
        .get(format!("{}/address", app.base_url))
        .query(&[("customer_id", &owner_id)])
        .send()
        .await?
        .json()
        .await?;
    let kinds: Vec<_> = listed.iter().map(|a| a["type"].as_str().unwrap_or_default().to_string()).collect();
    assert_eq!(kinds, ["billing", "shipping"]);

    client.delete(format!("{}/customer", app.base_url)).query(&[("id", &owner_id)]).send().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_order_with_payment() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();

    let owner: Value = client
        .post(format!("{}/customer", app.base_url))
        .json(&json!({"first_name": "Han", "last_name": "Solo"}))
        .send()
        .await?
        .json()
        .await?;
    let owner_id = owner["id"].as_str().expect("id").to_string();
    let order_number = format!("ORD-{}", Uuid::new_v4());

    let res = client
        .post(format!("{}/order_payment", app.base_url))
        .json(&json!({
            "order": {"order_number": order_number, "customer_id": owner_id, "total": 250.0},
            "payment": {"amount": 250.0, "status": "completed"}
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["payment"]["order_id"], body["order"]["id"]);
    let order_id = body["order"]["id"].as_str().expect("order id").to_string();

    // a rejected payment rolls the order back
    let res = client
        .post(format!("{}/order_payment", app.base_url))
        .json(&json!({
            "order": {"order_number": format!("ORD-{}", Uuid::new_v4()), "customer_id": owner_id},
            "payment": {"amount": -1.0}
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let orders: Vec<Value> = client
        .get(format!("{}/order", app.base_url))
        .query(&[("customer_id", &owner_id)])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(orders.len(), 1);

    client.delete(format!("{}/order", app.base_url)).query(&[("id", &order_id)]).send().await?;
    client.delete(format!("{}/customer", app.base_url)).query(&[("id", &owner_id)]).send().await?;
    Ok(())
}
