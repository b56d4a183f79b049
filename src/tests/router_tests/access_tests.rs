use crate::auth::Role;
use crate::router::handle;
use crate::tests::utils::{body_string, get, get_as, location, storefront, user, StubCatalog};
use std::collections::HashMap;

fn with_staff() -> StubCatalog {
    let mut users = HashMap::new();
    users.insert("admin-token".to_string(), user("amal", Role::Admin));
    users.insert("staff-token".to_string(), user("sunil", Role::Staff));
    users.insert("customer-token".to_string(), user("nimal", Role::Customer));
    StubCatalog {
        users,
        ..StubCatalog::default()
    }
}

#[test]
fn access_denied_page_is_forbidden() {
    let app = storefront(StubCatalog::default());
    let resp = handle(get("/access-denied"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 403);

    let body = body_string(resp);
    assert!(body.contains("Access Denied"));
    assert!(body.contains("Ref ID: "));
}

#[test]
fn anonymous_navbar_offers_login_and_register() {
    let app = storefront(with_staff());
    let body = body_string(handle(get("/"), &app).expect("Handler failed"));
    assert!(body.contains(r#"href="/login""#));
    assert!(body.contains(r#"href="/register""#));
    assert!(!body.contains("/admin/dashboard"));
}

#[test]
fn dashboard_link_follows_analytics_permission() {
    let app = storefront(with_staff());

    let staff = body_string(handle(get_as("/", "staff-token"), &app).expect("Handler failed"));
    assert!(staff.contains(r#"href="/admin/dashboard""#));
    assert!(staff.contains("SU"));
    assert!(!staff.contains("/settings?tab=permissions"));

    let customer =
        body_string(handle(get_as("/", "customer-token"), &app).expect("Handler failed"));
    assert!(!customer.contains("/admin/dashboard"));
    assert!(customer.contains(r#"href="/logout""#));
}

#[test]
fn rejected_token_is_treated_as_anonymous() {
    let app = storefront(with_staff());
    let body = body_string(handle(get_as("/", "stale-token"), &app).expect("Handler failed"));
    assert!(body.contains(r#"href="/login""#));
    assert!(!body.contains(r#"href="/logout""#));
}

#[test]
fn dashboard_redirects_viewers_with_analytics() {
    let app = storefront(with_staff());
    let resp = handle(get_as("/admin/dashboard", "staff-token"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "http://localhost:5173/admin/dashboard");
}

#[test]
fn admin_pages_need_the_admin_role() {
    let app = storefront(with_staff());

    let resp = handle(get_as("/admin/users?page=2", "staff-token"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 403);
    assert!(body_string(resp).contains("Access Denied"));

    let resp = handle(get_as("/admin/users?page=2", "admin-token"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "http://localhost:5173/admin/users?page=2");
}

#[test]
fn anonymous_admin_access_is_denied() {
    let app = storefront(with_staff());
    let resp = handle(get("/admin/dashboard"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 403);
}

#[test]
fn sign_in_routes_go_to_the_account_app() {
    let app = storefront(StubCatalog::default());
    for path in ["/login", "/register", "/logout"] {
        let resp = handle(get(path), &app).expect("Handler failed");
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), format!("http://localhost:5173{path}"));
    }
}

#[test]
fn account_pages_require_a_session() {
    let app = storefront(with_staff());

    let resp = handle(get("/settings?tab=store"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");

    let resp = handle(get_as("/settings?tab=store", "customer-token"), &app).expect("Handler failed");
    assert_eq!(location(&resp), "http://localhost:5173/settings?tab=store");
}
