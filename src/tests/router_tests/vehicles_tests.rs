use crate::router::handle;
use crate::tests::utils::{body_string, get, storefront, vehicle, StubCatalog};
use serde_json::json;

fn showroom() -> StubCatalog {
    StubCatalog {
        vehicles: vec![
            vehicle(json!({
                "_id": "aqua", "brand": "Toyota", "model": "Aqua", "year": 2015,
                "price": 4_500_000, "status": "available", "vehicleNumber": "CAR-1234",
                "createdAt": "2024-01-10T08:00:00Z", "type": "car",
                "images": ["/uploads/aqua-front.jpg", "/uploads/aqua-back.jpg"]
            })),
            vehicle(json!({
                "_id": "vezel", "brand": "Honda", "model": "Vezel", "year": 2017,
                "price": 9_800_000, "status": "sold",
                "createdAt": "2024-03-02T08:00:00Z", "type": "car"
            })),
            vehicle(json!({
                "_id": "fz", "brand": "Yamaha", "model": "FZ", "year": 2021,
                "price": 850_000, "discountType": "percentage", "discountValue": 10,
                "discountedPrice": 765_000, "status": "available",
                "createdAt": "2024-02-14T08:00:00Z", "type": "motorbike",
                "engineCapacity": 150, "bikeType": "sport"
            })),
        ],
        ..StubCatalog::default()
    }
}

fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} missing from page"))
}

#[test]
fn listing_shows_every_vehicle_newest_first() {
    let app = storefront(showroom());
    let resp = handle(get("/vehicles"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing 3 vehicles"));
    assert!(position(&body, "2017 Honda Vezel") < position(&body, "2021 Yamaha FZ"));
    assert!(position(&body, "2021 Yamaha FZ") < position(&body, "2015 Toyota Aqua"));
    // Brand options come from the data, sorted.
    assert!(position(&body, r#"<option value="Honda""#) < position(&body, r#"<option value="Toyota""#));
}

#[test]
fn query_string_narrows_and_sorts_the_listing() {
    let app = storefront(showroom());
    let resp = handle(
        get("/vehicles?status=available&sort=lowest_price&max_price=5000000"),
        &app,
    )
    .expect("Handler failed");

    let body = body_string(resp);
    assert!(body.contains("Showing 2 vehicles"));
    assert!(!body.contains("2017 Honda Vezel"));
    assert!(position(&body, "2021 Yamaha FZ") < position(&body, "2015 Toyota Aqua"));
    // The form echoes the active criteria back.
    assert!(body.contains(r#"value="5000000""#));
    assert!(body.contains(r#"<option value="lowest_price" selected>"#));
}

#[test]
fn search_matches_vehicle_number_case_insensitively() {
    let app = storefront(showroom());
    let body = body_string(handle(get("/vehicles?search=car-12"), &app).expect("Handler failed"));
    assert!(body.contains("Showing 1 vehicle"));
    assert!(body.contains("2015 Toyota Aqua"));
}

#[test]
fn nothing_matching_renders_the_empty_state() {
    let app = storefront(showroom());
    let body = body_string(handle(get("/vehicles?brand=Nissan"), &app).expect("Handler failed"));
    assert!(body.contains("Showing 0 vehicles"));
    assert!(body.contains("No vehicles found"));
}

#[test]
fn discounted_card_shows_both_prices() {
    let app = storefront(showroom());
    let body = body_string(handle(get("/vehicles?brand=Yamaha"), &app).expect("Handler failed"));
    assert!(body.contains("LKR 765,000"));
    assert!(body.contains("LKR 850,000"));
    assert!(body.contains("10% OFF"));
}

#[test]
fn catalog_outage_renders_listing_error_state() {
    let app = storefront(StubCatalog {
        unavailable: true,
        ..StubCatalog::default()
    });
    let resp = handle(get("/vehicles"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("Error loading vehicles. Please try again later."));
    assert!(!body.contains("connection refused"));
}

#[test]
fn detail_page_renders_gallery_and_specs() {
    let app = storefront(showroom());
    let resp = handle(get("/vehicles/aqua"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<h1>2015 Toyota Aqua</h1>"));
    assert!(body.contains("LKR 4,500,000"));
    assert!(body.contains("No description provided."));
    assert!(body.contains("Seating Capacity"));
    assert!(!body.contains("Bike Type"));
    // First image is the main one by default.
    assert!(position(&body, "aqua-front.jpg") < position(&body, "aqua-back.jpg"));
    assert!(body.contains(r#"href="?image=1""#));
}

#[test]
fn image_query_selects_the_main_image() {
    let app = storefront(showroom());

    let body = body_string(handle(get("/vehicles/aqua?image=1"), &app).expect("Handler failed"));
    assert!(position(&body, "aqua-back.jpg") < position(&body, "aqua-front.jpg"));

    // Out of range falls back to the first image.
    let body = body_string(handle(get("/vehicles/aqua?image=9"), &app).expect("Handler failed"));
    assert!(position(&body, "aqua-front.jpg") < position(&body, "aqua-back.jpg"));
}

#[test]
fn motorbike_detail_shows_engine_and_discount() {
    let app = storefront(showroom());
    let body = body_string(handle(get("/vehicles/fz"), &app).expect("Handler failed"));
    assert!(body.contains("Engine Capacity"));
    assert!(body.contains("Bike Type"));
    assert!(!body.contains("Seating Capacity"));
    assert!(body.contains("Save LKR 85,000"));
}

#[test]
fn unknown_vehicle_is_a_404() {
    let app = storefront(showroom());
    let resp = handle(get("/vehicles/nope"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Vehicle not found"));
}

#[test]
fn detail_outage_renders_error_state_inside_layout() {
    let app = storefront(StubCatalog {
        unavailable: true,
        ..StubCatalog::default()
    });
    let resp = handle(get("/vehicles/aqua"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("Error loading this vehicle. Please try again later."));
    assert!(body.contains(r#"class="navbar""#));
    assert!(body.contains(r#"href="/static/main.css""#));
    assert!(!body.contains("connection refused"));
}

#[test]
fn fixed_discount_gallery_badge_names_the_amount() {
    let app = storefront(StubCatalog {
        vehicles: vec![vehicle(json!({
            "_id": "swift", "brand": "Suzuki", "model": "Swift", "year": 2018,
            "price": 5_200_000, "discountType": "fixed", "discountValue": 200_000,
            "discountedPrice": 5_000_000, "type": "car"
        }))],
        ..StubCatalog::default()
    });
    let body = body_string(handle(get("/vehicles/swift"), &app).expect("Handler failed"));
    assert!(body.contains("LKR 200,000 OFF"));
    assert!(body.contains("SPECIAL OFFER"));
    assert!(!body.contains("SAVE LKR"));
}
