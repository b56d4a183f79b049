use crate::router::handle;
use crate::tests::utils::{body_string, get, storefront, StubCatalog};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_loads_successfully() {
    let app = storefront(StubCatalog::default());
    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Charaka Trading"));
    assert!(body.contains("Why Choose Charaka?"));
    assert!(body.contains(r#"href="/static/main.css""#));
}

#[test]
fn unknown_route_renders_styled_404() {
    let app = storefront(StubCatalog::default());
    let resp = handle(get("/does-not-exist"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Lost in Transit?"));
    assert!(body.contains(r#"href="/vehicles""#));
}

#[test]
fn nested_vehicle_paths_are_not_found() {
    let app = storefront(StubCatalog::default());
    let resp = handle(get("/vehicles/a/b"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Lost in Transit?"));
}

#[test]
fn non_get_methods_are_not_found() {
    let app = storefront(StubCatalog::default());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/vehicles")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 404);
}

#[test]
fn stylesheet_is_served_from_the_binary() {
    let app = storefront(StubCatalog::default());
    let resp = handle(get("/static/main.css"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".vehicle-card"));
}
