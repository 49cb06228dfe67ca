//! Security headers middleware

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

const BASELINE_HEADERS: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-dns-prefetch-control", "off"),
    ("referrer-policy", "no-referrer"),
    ("content-security-policy", "default-src 'none'; frame-ancestors 'none'"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-site"),
];

const HSTS: &str = "max-age=31536000; includeSubDomains";

/// Baseline hardening headers for a JSON-only API. HSTS is added only when
/// the request arrived over HTTPS, directly or via a terminating proxy.
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let is_https = forwarded_https(&req)
        || req
            .uri()
            .scheme_str()
            .is_some_and(|s| s.eq_ignore_ascii_case("https"));

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in BASELINE_HEADERS {
        headers.insert(*name, HeaderValue::from_static(value));
    }
    if is_https {
        headers.insert("strict-transport-security", HeaderValue::from_static(HSTS));
    }

    response
}

fn forwarded_https(req: &Request) -> bool {
    req.headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("https"))
}
