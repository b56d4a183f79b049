use crate::auth::Viewer;
use crate::domain::format::{detail_discount_badge, format_amount, format_lkr, gallery_discount_badge};
use crate::domain::{Vehicle, VehicleType};
use crate::templates::base_layout;
use crate::templates::components::{image_fallback, image_url, status_badge};
use maud::{html, Markup};

pub struct VehicleDetailVm<'a> {
    pub vehicle: &'a Vehicle,
    /// Index into `vehicle.images()`, already clamped by the caller.
    pub selected_image: usize,
    pub asset_base: &'a str,
}

fn spec_row(label: &str, value: Markup) -> Markup {
    html! {
        div class="spec-row" {
            span class="muted" { (label) }
            span class="spec-value" { (value) }
        }
    }
}

fn or_na(value: Option<&str>) -> Markup {
    html! { (value.unwrap_or("N/A")) }
}

fn gallery(vm: &VehicleDetailVm<'_>, title: &str) -> Markup {
    let vehicle = vm.vehicle;
    let images = vehicle.images();

    html! {
        div class="gallery-main" {
            @if let Some(path) = images.get(vm.selected_image) {
                img src=(image_url(vm.asset_base, path)) alt=(title) onerror=(image_fallback());
            } @else {
                div class="media-empty" { "No Images Available" }
            }
            @if let Some(discount) = vehicle.active_discount() {
                span class="badge badge-discount badge-lg" { (gallery_discount_badge(&discount)) }
            }
            (status_badge(vehicle))
        }
        @if images.len() > 1 {
            div class="thumbs" {
                @for (index, path) in images.iter().enumerate() {
                    a.thumb.thumb-active[index == vm.selected_image] href=(format!("?image={index}")) {
                        img src=(image_url(vm.asset_base, path)) alt=(format!("Thumbnail {}", index + 1));
                    }
                }
            }
        }
    }
}

fn price_block(vehicle: &Vehicle) -> Markup {
    html! {
        div class="price-block" {
            @if let Some(discount) = vehicle.active_discount() {
                div class="price-line" {
                    h2 class="price price-lg" { (format_lkr(discount.discounted_price)) }
                    span class="badge badge-soft" { (detail_discount_badge(&discount)) }
                }
                div class="price-line" {
                    span class="price-was" { (format_lkr(vehicle.price_or_zero())) }
                    span class="saving" { "Save " (format_lkr(discount.saving)) }
                }
            } @else {
                h2 class="price price-lg" { (format_lkr(vehicle.price_or_zero())) }
            }
        }
    }
}

fn type_specific_specs(vehicle: &Vehicle) -> Markup {
    let kind = vehicle.vehicle_type;

    html! {
        @if kind == Some(VehicleType::Car) {
            (spec_row("Body Type", or_na(vehicle.body_type.as_deref())))
            (spec_row("Seating Capacity", html! {
                @match vehicle.seating_capacity {
                    Some(n) => { (n) " Seats" },
                    None => "N/A",
                }
            }))
        }
        @if matches!(kind, Some(VehicleType::ThreeWheel | VehicleType::Motorbike)) {
            (spec_row("Engine Capacity", or_na(vehicle.engine_capacity.as_deref())))
        }
        @if kind == Some(VehicleType::Motorbike) {
            (spec_row("Bike Type", or_na(vehicle.bike_type.as_deref())))
        }
    }
}

/// Shown instead of the detail page when the catalog could not be reached.
pub fn vehicle_error_page(viewer: &Viewer) -> Markup {
    base_layout(
        "Vehicle",
        viewer,
        html! {
            div class="container section center" {
                p class="error-text" { "Error loading this vehicle. Please try again later." }
                a href="/vehicles" class="btn btn-ghost" { "‹ Back to Vehicles" }
            }
        },
    )
}

pub fn vehicle_detail_page(viewer: &Viewer, vm: &VehicleDetailVm<'_>) -> Markup {
    let vehicle = vm.vehicle;
    let title = vehicle.title();

    base_layout(
        &title,
        viewer,
        html! {
            div class="container section" {
                a href="/vehicles" class="btn btn-ghost back-link" { "‹ Back to Vehicles" }

                div class="detail" {
                    div class="detail-media" {
                        (gallery(vm, &title))

                        h3 { "Description" }
                        div class="card" {
                            p class="description" {
                                (vehicle.description.as_deref().unwrap_or("No description provided."))
                            }
                        }
                    }

                    div class="detail-side" {
                        h1 { (title) }
                        (price_block(vehicle))

                        div class="card" {
                            h3 { "Key Specs" }
                            div class="key-specs" {
                                div {
                                    span class="muted" { "Mileage" }
                                    span {
                                        @match vehicle.mileage {
                                            Some(km) => { (format_amount(km)) " km" },
                                            None => "N/A",
                                        }
                                    }
                                }
                                div {
                                    span class="muted" { "Fuel Type" }
                                    span class="capitalize" { (or_na(vehicle.fuel_type.as_deref())) }
                                }
                                div {
                                    span class="muted" { "Transmission" }
                                    span class="capitalize" { (or_na(vehicle.transmission.as_deref())) }
                                }
                                div {
                                    span class="muted" { "Year" }
                                    span {
                                        @match vehicle.year {
                                            Some(y) => (y),
                                            None => "N/A",
                                        }
                                    }
                                }
                            }
                        }

                        div class="actions" {
                            button type="button" class="btn btn-block btn-lg" { "Contact Seller" }
                            button type="button" class="btn btn-outline btn-block btn-lg" { "Request Info" }
                        }

                        hr;

                        h3 { "All Specifications" }
                        div class="spec-table" {
                            (spec_row("Vehicle Type", html! {
                                @match vehicle.vehicle_type {
                                    Some(kind) => (kind.label()),
                                    None => "N/A",
                                }
                            }))
                            (spec_row("Condition", or_na(vehicle.condition.as_deref())))
                            (type_specific_specs(vehicle))
                            (spec_row("Color", or_na(vehicle.color.as_deref())))
                        }
                    }
                }
            }
        },
    )
}
