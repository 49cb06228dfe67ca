use crate::support::*;
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn lists_with_default_paging_and_newest_first() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs").await?;
    assert_status(status, StatusCode::OK, "list drugs");

    let data = assert_success_envelope(&body)?;
    assert_eq!(
        codes(data),
        ["TEST004", "TEST002", "TEST005", "TEST001", "TEST003"]
    );

    let first = &data[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Test Drug Delta (Delta Brand)");
    assert_eq!(first["company"], "Mock Labs Ltd");
    assert_eq!(first["launchDate"], "2022-11-05T00:00:00.000Z");
    assert!(first.get("genericName").is_none());
    assert!(first.get("brandName").is_none());

    let pagination = &body["pagination"];
    assert_eq!(pagination["currentPage"], 1);
    assert_eq!(pagination["totalPages"], 1);
    assert_eq!(pagination["totalItems"], 5);
    assert_eq!(pagination["itemsPerPage"], 20);
    assert_eq!(pagination["hasNextPage"], false);
    assert_eq!(pagination["hasPreviousPage"], false);
    Ok(())
}

#[tokio::test]
async fn paginates_with_rank_based_ids() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs?page=2&limit=2").await?;
    assert_status(status, StatusCode::OK, "page 2");

    let data = assert_success_envelope(&body)?;
    let ids: Vec<u64> = data
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["id"].as_u64())
        .collect();
    assert_eq!(ids, [3, 4]);

    let pagination = &body["pagination"];
    assert_eq!(pagination["currentPage"], 2);
    assert_eq!(pagination["totalPages"], 3);
    assert_eq!(pagination["itemsPerPage"], 2);
    assert_eq!(pagination["hasNextPage"], true);
    assert_eq!(pagination["hasPreviousPage"], true);
    Ok(())
}

#[tokio::test]
async fn page_count_properties_hold_for_every_limit() -> anyhow::Result<()> {
    let app = TestApp::with_drugs(&identical_drugs(23))?;

    for limit in [1u64, 2, 5, 7, 10, 22, 23, 24, 100] {
        let total_pages = 23u64.div_ceil(limit);
        for page in 1..=total_pages + 1 {
            let (status, body) = app
                .get_json(&format!("/api/drugs?page={page}&limit={limit}"))
                .await?;
            assert_status(status, StatusCode::OK, "paged listing");

            let skip = (page - 1) * limit;
            let expected_len = limit.min(23u64.saturating_sub(skip));
            let data = body["data"].as_array().unwrap();
            assert_eq!(data.len() as u64, expected_len, "page={page} limit={limit}");

            let pagination = &body["pagination"];
            assert_eq!(pagination["totalPages"], total_pages);
            assert_eq!(pagination["hasNextPage"], page < total_pages);
            assert_eq!(pagination["hasPreviousPage"], page > 1);
            if let Some(first) = data.first() {
                assert_eq!(first["id"], skip + 1);
            }
        }
    }
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs?page=999&limit=2").await?;
    assert_status(status, StatusCode::OK, "page past the end");

    assert_eq!(body["data"], Value::Array(vec![]));
    let pagination = &body["pagination"];
    assert_eq!(pagination["currentPage"], 999);
    assert_eq!(pagination["totalItems"], 5);
    assert_eq!(pagination["totalPages"], 3);
    assert_eq!(pagination["hasNextPage"], false);
    assert_eq!(pagination["hasPreviousPage"], true);
    Ok(())
}

#[tokio::test]
async fn filters_by_company() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs?company=Test%20Pharma%20Inc").await?;
    assert_status(status, StatusCode::OK, "company filter");

    let data = assert_success_envelope(&body)?;
    assert_eq!(codes(data), ["TEST002", "TEST001"]);
    assert_eq!(body["pagination"]["totalItems"], 2);
    Ok(())
}

#[tokio::test]
async fn unknown_company_yields_empty_listing() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs?company=Nonexistent").await?;
    assert_status(status, StatusCode::OK, "unknown company");
    assert_eq!(body["data"], Value::Array(vec![]));
    assert_eq!(body["pagination"]["totalItems"], 0);
    assert_eq!(body["pagination"]["totalPages"], 0);
    Ok(())
}

#[tokio::test]
async fn search_is_case_insensitive() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs?search=ALPHA").await?;
    assert_status(status, StatusCode::OK, "search");

    let data = assert_success_envelope(&body)?;
    assert_eq!(codes(data), ["TEST001"]);
    assert_eq!(data[0]["name"], "Test Drug Alpha (Alpha Brand)");
    Ok(())
}

#[tokio::test]
async fn search_covers_brand_company_and_code() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    let (_, body) = app.get_json("/api/drugs?search=epsilon%20brand").await?;
    assert_eq!(codes(&body["data"]), ["TEST005"]);

    let (_, body) = app.get_json("/api/drugs?search=sample").await?;
    assert_eq!(codes(&body["data"]), ["TEST005"]);

    let (_, body) = app.get_json("/api/drugs?search=test003").await?;
    assert_eq!(codes(&body["data"]), ["TEST003"]);
    Ok(())
}

#[tokio::test]
async fn search_with_special_characters_is_literal() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app
        .get_json("/api/drugs?search=drug-name%20(brand)")
        .await?;
    assert_status(status, StatusCode::OK, "special characters");
    assert_eq!(body["data"], Value::Array(vec![]));

    let (status, body) = app.get_json("/api/drugs?search=%25").await?;
    assert_status(status, StatusCode::OK, "percent sign");
    assert_eq!(body["pagination"]["totalItems"], 0);
    Ok(())
}

#[tokio::test]
async fn combines_company_search_and_sort() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app
        .get_json("/api/drugs?company=Mock%20Labs%20Ltd&search=test&sortBy=name&sortOrder=asc")
        .await?;
    assert_status(status, StatusCode::OK, "combined query");
    assert_eq!(codes(&body["data"]), ["TEST004", "TEST003"]);
    Ok(())
}

#[tokio::test]
async fn every_sort_key_is_monotonic_both_ways() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    for (sort_by, field) in [
        ("code", "code"),
        ("name", "name"),
        ("company", "company"),
        ("launchDate", "launchDate"),
    ] {
        for order in ["asc", "desc"] {
            let (status, body) = app
                .get_json(&format!("/api/drugs?sortBy={sort_by}&sortOrder={order}"))
                .await?;
            assert_status(status, StatusCode::OK, "sorted listing");

            let values: Vec<String> = body["data"]
                .as_array()
                .unwrap()
                .iter()
                .map(|d| d[field].as_str().unwrap_or_default().to_string())
                .collect();
            let mut expected = values.clone();
            expected.sort();
            if order == "desc" {
                expected.reverse();
            }
            assert_eq!(values, expected, "sortBy={sort_by} sortOrder={order}");
        }
    }
    Ok(())
}

#[tokio::test]
async fn ties_keep_the_same_order_across_requests() -> anyhow::Result<()> {
    let app = TestApp::with_drugs(&identical_drugs(12))?;

    let mut orders = Vec::new();
    for _ in 0..3 {
        let mut all = Vec::new();
        for page in 1..=3 {
            let (_, body) = app
                .get_json(&format!("/api/drugs?sortBy=company&limit=5&page={page}"))
                .await?;
            all.extend(codes(&body["data"]));
        }
        orders.push(all);
    }

    assert_eq!(orders[0].len(), 12);
    assert_eq!(orders[0], orders[1]);
    assert_eq!(orders[1], orders[2]);

    let mut unique = orders[0].clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 12, "no record appears on two pages");
    Ok(())
}

#[tokio::test]
async fn empty_filters_are_ignored() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs?company=&search=").await?;
    assert_status(status, StatusCode::OK, "empty filters");
    assert_eq!(body["pagination"]["totalItems"], 5);
    Ok(())
}

#[tokio::test]
async fn rejects_invalid_pages() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    for page in ["0", "-1", "invalid", "1.5"] {
        let (status, body) = app.get_json(&format!("/api/drugs?page={page}")).await?;
        assert_status(status, StatusCode::BAD_REQUEST, "invalid page");
        assert_error_body(&body, StatusCode::BAD_REQUEST, "Validation Error");
        assert_eq!(body["message"], "Invalid query parameters");
        assert_eq!(detail_fields(&body), ["page"], "page={page}");
    }
    Ok(())
}

#[tokio::test]
async fn rejects_out_of_range_limits() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    for limit in ["0", "101", "150", "1.5", "abc"] {
        let (status, body) = app.get_json(&format!("/api/drugs?limit={limit}")).await?;
        assert_status(status, StatusCode::BAD_REQUEST, "invalid limit");
        assert_eq!(detail_fields(&body), ["limit"], "limit={limit}");
    }

    for limit in ["1", "100"] {
        let (status, body) = app.get_json(&format!("/api/drugs?limit={limit}")).await?;
        assert_status(status, StatusCode::OK, "boundary limit");
        assert_eq!(body["pagination"]["itemsPerPage"], limit.parse::<u64>()?);
    }
    Ok(())
}

#[tokio::test]
async fn rejects_unknown_sort_fields_and_orders() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    let (status, body) = app.get_json("/api/drugs?sortBy=invalid").await?;
    assert_status(status, StatusCode::BAD_REQUEST, "invalid sortBy");
    assert_eq!(detail_fields(&body), ["sortBy"]);

    let (status, body) = app.get_json("/api/drugs?sortOrder=sideways").await?;
    assert_status(status, StatusCode::BAD_REQUEST, "invalid sortOrder");
    assert_eq!(detail_fields(&body), ["sortOrder"]);
    Ok(())
}

#[tokio::test]
async fn reports_all_offending_fields_at_once() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app
        .get_json("/api/drugs?page=invalid&limit=-1&sortBy=invalid_field&sortOrder=invalid_order")
        .await?;
    assert_status(status, StatusCode::BAD_REQUEST, "many invalid fields");
    assert_eq!(
        detail_fields(&body),
        ["page", "limit", "sortBy", "sortOrder"]
    );
    for detail in body["details"].as_array().unwrap() {
        assert!(detail["code"].is_string());
        assert!(detail["message"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn ignores_unknown_parameters() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get_json("/api/drugs?foo=bar&limit=2").await?;
    assert_status(status, StatusCode::OK, "unknown parameter");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    Ok(())
}
