//! HTTP tests for the static pages, health check and 404 handling.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use cfti_site::config::SiteConfig;
use cfti_site::notify::{LogOnly, Notifier};
use cfti_site::server::{AppState, build_router};
use cfti_site::site::Page;

fn router_for(site: SiteConfig) -> Router {
    build_router(AppState::new(site, Notifier::LogOnly(LogOnly)))
}

async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_every_page_shows_company_identity() {
    let site = SiteConfig::sample();
    let app = router_for(site.clone());
    for page in Page::ALL {
        let (status, html) = get(&app, page.path()).await;
        assert_eq!(status, StatusCode::OK, "{}", page.path());
        assert!(html.contains(&site.name), "{} lacks company name", page.path());
        assert!(html.contains(&site.usdot), "{} lacks USDOT", page.path());
        assert!(html.contains(&site.mc), "{} lacks MC", page.path());
        assert!(html.contains(&format!("mailto:{}", site.email)));
    }
}

#[tokio::test]
async fn test_pages_are_html() {
    let req = Request::builder().uri("/services").body(Body::empty()).unwrap();
    let resp = router_for(SiteConfig::sample()).oneshot(req).await.unwrap();
    let ct = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(ct.starts_with("text/html"));
}

#[tokio::test]
async fn test_services_lists_service_types() {
    let (_, html) = get(&router_for(SiteConfig::sample()), "/services").await;
    for name in ["Dry Van", "Reefer", "Power-Only", "Expedited"] {
        assert!(html.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_trailing_slash_resolves_page() {
    let (status, html) = get(&router_for(SiteConfig::sample()), "/drivers/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Competitive Pay"));
}

#[tokio::test]
async fn test_configured_values_are_escaped() {
    let mut site = SiteConfig::sample();
    site.name = "Smith & Sons <Freight>".into();
    let (_, html) = get(&router_for(site), "/about").await;
    assert!(html.contains("Smith &amp; Sons &lt;Freight&gt;"));
    assert!(!html.contains("<Freight>"));
}

#[tokio::test]
async fn test_unknown_path_is_404_page() {
    let site = SiteConfig::sample();
    let (status, html) = get(&router_for(site.clone()), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page Not Found"));
    assert!(html.contains(&site.name));
}

#[tokio::test]
async fn test_favicon_no_content() {
    let (status, body) = get(&router_for(SiteConfig::sample()), "/favicon.ico").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_health_reports_site() {
    let (status, body) = get(&router_for(SiteConfig::sample()), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["site"], "CFTI Freight");
    assert_eq!(v["notify"], "log");
}
