use crate::support::*;
use axum::http::{Method, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/health").await?;
    assert_status(status, StatusCode::OK, "health");

    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Drug Inventory API is running");
    assert_iso_timestamp(&body["timestamp"]);
    Ok(())
}

#[tokio::test]
async fn companies_are_distinct_and_sorted() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/companies").await?;
    assert_status(status, StatusCode::OK, "companies");

    let data = assert_success_envelope(&body)?;
    assert_eq!(data, &serde_json::json!(FIXTURE_COMPANIES));
    assert!(body.get("pagination").is_none());
    Ok(())
}

#[tokio::test]
async fn companies_of_empty_catalog() -> anyhow::Result<()> {
    let app = TestApp::empty()?;
    let (status, body) = app.get_json("/api/companies").await?;
    assert_status(status, StatusCode::OK, "companies");
    assert_eq!(body["data"], Value::Array(vec![]));
    Ok(())
}

#[tokio::test]
async fn statistics_over_fixture_catalog() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/statistics").await?;
    assert_status(status, StatusCode::OK, "statistics");

    let data = assert_success_envelope(&body)?;
    assert_eq!(data["totalDrugs"], 5);
    assert_eq!(data["totalCompanies"], 3);
    let average = data["averageDrugsPerCompany"].as_f64().unwrap();
    assert!((average - 5.0 / 3.0).abs() < 1e-9, "average = {average}");
    assert_eq!(data["oldestDrug"], "2019-08-10T00:00:00.000Z");
    assert_eq!(data["newestDrug"], "2022-11-05T00:00:00.000Z");
    Ok(())
}

#[tokio::test]
async fn statistics_of_empty_catalog() -> anyhow::Result<()> {
    let app = TestApp::empty()?;
    let (status, body) = app.get_json("/api/statistics").await?;
    assert_status(status, StatusCode::OK, "statistics");

    let data = assert_success_envelope(&body)?;
    assert_eq!(data["totalDrugs"], 0);
    assert_eq!(data["totalCompanies"], 0);
    assert_eq!(data["averageDrugsPerCompany"].as_f64(), Some(0.0));
    assert_eq!(data["oldestDrug"], Value::Null);
    assert_eq!(data["newestDrug"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn table_config_describes_the_grid() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/table-config").await?;
    assert_status(status, StatusCode::OK, "table config");

    let data = assert_success_envelope(&body)?;
    let keys: Vec<&str> = data["columns"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["key"].as_str())
        .collect();
    assert_eq!(keys, ["id", "code", "name", "company", "launchDate"]);

    let launch = &data["columns"][4];
    assert_eq!(launch["type"], "date");
    assert_eq!(launch["format"], "dd.MM.yyyy");
    assert_eq!(data["defaultSort"]["column"], "launchDate");
    assert_eq!(data["defaultSort"]["direction"], "desc");
    assert_eq!(data["pagination"]["defaultPageSize"], 20);
    assert_eq!(
        data["pagination"]["pageSizeOptions"],
        serde_json::json!([10, 20, 50, 100])
    );
    assert_eq!(data["filters"]["company"]["type"], "dropdown");
    Ok(())
}

#[tokio::test]
async fn unknown_routes_are_json_404s() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/unknown-route?x=1").await?;
    assert_status(status, StatusCode::NOT_FOUND, "unknown route");
    assert_error_body(&body, StatusCode::NOT_FOUND, "Not Found");
    assert_eq!(body["message"], "Route /api/unknown-route?x=1 not found");
    Ok(())
}

#[tokio::test]
async fn metrics_are_exposed_in_text_format() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    app.get_json("/api/companies").await?;

    let (status, headers, body) = app.request(Method::GET, "/metrics").await?;
    assert_status(status, StatusCode::OK, "metrics");
    assert!(headers["content-type"]
        .to_str()?
        .starts_with("text/plain"));
    let text = String::from_utf8(body.to_vec())?;
    assert!(text.contains("drug_inventory_http_requests_total"));
    Ok(())
}
