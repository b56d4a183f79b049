use crate::auth::Viewer;
use crate::domain::{FilterCriteria, Vehicle};
use crate::templates::base_layout;
use crate::templates::components::{filter_panel, sort_select, vehicle_card};
use maud::{html, Markup};

pub struct VehiclesVm<'a> {
    pub criteria: &'a FilterCriteria,
    pub brands: &'a [String],
    pub vehicles: &'a [&'a Vehicle],
    pub asset_base: &'a str,
}

pub fn vehicles_page(viewer: &Viewer, vm: &VehiclesVm<'_>) -> Markup {
    let count = vm.vehicles.len();

    base_layout(
        "Vehicles",
        viewer,
        html! {
            div class="container section" {
                div class="page-head" {
                    div {
                        h1 { "Available Vehicles" }
                        p class="muted" {
                            "Showing " (count) " " (if count == 1 { "vehicle" } else { "vehicles" })
                        }
                    }
                    div class="page-head-actions" {
                        (sort_select(vm.criteria.sort))
                    }
                }

                div class="listing" {
                    aside class="card sidebar" {
                        (filter_panel(vm.criteria, vm.brands))
                    }

                    div class="listing-main" {
                        @if vm.vehicles.is_empty() {
                            div class="empty-state" {
                                h3 { "No vehicles found" }
                                p class="muted" { "Try adjusting your filters or search terms." }
                                @if !vm.criteria.is_default() {
                                    a href="/vehicles" class="btn btn-link" { "Clear all filters" }
                                }
                            }
                        } @else {
                            div class="grid grid-3" {
                                @for vehicle in vm.vehicles {
                                    (vehicle_card(vehicle, vm.asset_base))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Shown instead of the listing when the catalog could not be fetched.
pub fn vehicles_error_page(viewer: &Viewer) -> Markup {
    base_layout(
        "Vehicles",
        viewer,
        html! {
            div class="container section center" {
                p class="error-text" { "Error loading vehicles. Please try again later." }
                a href="/vehicles" class="btn btn-ghost" { "Retry" }
            }
        },
    )
}
