//! End-to-end ingestion over HTTP against a live PostgreSQL.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -- --ignored`

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use careerminer_api::api::build_app;
use careerminer_api::app_state::AppState;
use careerminer_api::domain::Company;
use careerminer_api::persistence::PoolManager;

async fn spawn_server() -> (SocketAddr, Arc<PoolManager>) {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        panic!("DATABASE_URL required");
    };
    let pools = Arc::new(PoolManager::new(url));
    let app = build_app(AppState::new(Arc::clone(&pools)), Duration::from_secs(30));

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, pools)
}

fn payload(company: &str, job_ids: &[&str]) -> serde_json::Value {
    let jobs: Vec<_> = job_ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "jobUrl": format!("https://example.com/jobs/{id}"),
                "jobTitle": "Lineworker",
                "description": "Maintain lines",
                "payRange": "",
                "location": "Rosemead, CA",
                "postingDate": "2025-03-01",
                "jobId": id,
            })
        })
        .collect();
    serde_json::json!({
        "companyName": company,
        "scrapedAt": "2025-03-01T12:00:00Z",
        "searchTerm": "lineworker",
        "totalJobs": jobs.len(),
        "jobs": jobs,
    })
}

#[tokio::test]
#[ignore = "requires database"]
async fn repeated_posts_overwrite_company_document() {
    let (addr, pools) = spawn_server().await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/data/job-information/post");
    let company = Company::SouthernCaliforniaEdison;

    for job_ids in [&["a"][..], &["b", "c"][..]] {
        let Ok(response) = client
            .post(&url)
            .header("Authorization", "Sample")
            .json(&payload(company.as_str(), job_ids))
            .send()
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    let store = careerminer_api::persistence::PostingStore::new(Arc::clone(&pools));
    let Ok(Some(record)) = store.fetch_document(company).await else {
        panic!("expected stored document");
    };
    let Ok(stored) = serde_json::from_str::<serde_json::Value>(&record.document) else {
        panic!("stored document is not json");
    };
    assert_eq!(stored["totalJobs"], 2);
    assert_eq!(stored["jobs"][1]["jobId"], "c");

    let Ok(count) = store.count_for(company).await else {
        panic!("count failed");
    };
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn unknown_company_is_bad_request() {
    let (addr, _) = spawn_server().await;
    let Ok(response) = reqwest::Client::new()
        .post(format!("http://{addr}/data/job-information/post"))
        .header("Authorization", "Sample")
        .json(&payload("Not A Company", &[]))
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
