use crate::domain::format::{card_discount_badge, format_amount, format_lkr};
use crate::domain::Vehicle;
use maud::{html, Markup};

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

/// Absolute URL for an image path returned by the API.
pub fn image_url(asset_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let sep = if path.starts_with('/') { "" } else { "/" };
    format!("{asset_base}{sep}{path}")
}

/// Swaps a broken image for the placeholder once.
pub fn image_fallback() -> String {
    format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE}'")
}

pub fn status_badge(vehicle: &Vehicle) -> Markup {
    html! {
        @if vehicle.is_unavailable() {
            @if let Some(raw) = &vehicle.status {
                span class="badge badge-status" {
                    (vehicle.status_kind().map_or(raw.as_str(), |status| status.label()))
                }
            }
        }
    }
}

/// Listing-card price: discounted price with the list price struck through,
/// or just the list price.
fn card_price(vehicle: &Vehicle) -> Markup {
    html! {
        div class="price-block" {
            @if let Some(discount) = vehicle.active_discount() {
                p class="price" { (format_lkr(discount.discounted_price)) }
                p class="price-was" { (format_lkr(vehicle.price_or_zero())) }
            } @else {
                p class="price" { (format_lkr(vehicle.price_or_zero())) }
            }
        }
    }
}

pub fn vehicle_card(vehicle: &Vehicle, asset_base: &str) -> Markup {
    let title = vehicle.title();

    html! {
        article class="card vehicle-card" {
            div class="media" {
                @if let Some(first) = vehicle.images().first() {
                    img src=(image_url(asset_base, first)) alt=(title) loading="lazy" onerror=(image_fallback());
                } @else {
                    div class="media-empty" { "No Image Available" }
                }
                @if let Some(discount) = vehicle.active_discount() {
                    span class="badge badge-discount" { (card_discount_badge(&discount)) }
                }
                (status_badge(vehicle))
            }
            div class="card-body" {
                h3 class="card-title" { (title) }
                div class="muted meta" {
                    @if let Some(condition) = &vehicle.condition {
                        span class="badge badge-outline" { (condition) }
                        " • "
                    }
                    @if let Some(km) = vehicle.mileage {
                        span { (format_amount(km)) " km" }
                    }
                }
                (card_price(vehicle))
                dl class="spec-pairs" {
                    dt { "Fuel" }
                    dd class="capitalize" { (vehicle.fuel_type.as_deref().unwrap_or("N/A")) }
                    dt { "Trans" }
                    dd class="capitalize" { (vehicle.transmission.as_deref().unwrap_or("Manual")) }
                }
            }
            div class="card-footer" {
                a class="btn btn-block" href=(format!("/vehicles/{}", urlencode_segment(&vehicle.id))) { "View Details" }
            }
        }
    }
}

/// Percent-encodes an id for use as a single path segment.
pub fn urlencode_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
