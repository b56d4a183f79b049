use crate::auth::Viewer;
use crate::templates::base_layout;
use maud::{html, Markup};

pub fn not_found_page(viewer: &Viewer) -> Markup {
    base_layout(
        "Page Not Found",
        viewer,
        html! {
            div class="container error-page" {
                div class="error-icon" {
                    span { "🔍" }
                    span class="error-code" { "404" }
                }
                h1 { "Lost in Transit?" }
                p class="lead muted" {
                    "The page you're looking for has been moved, deleted, or never existed in our inventory. "
                    "Let's get you back on the right track."
                }
                div class="error-actions" {
                    a href="/" class="btn btn-lg" { "Back to Home" }
                    a href="/vehicles" class="btn btn-outline btn-lg" { "Browse Vehicles" }
                }
                div class="error-footnote muted" {
                    p { strong { "Charaka Trading" } }
                    p { "Vehicle Management System" }
                }
            }
        },
    )
}

/// Detail lookups that miss get a shorter message than unknown routes.
pub fn vehicle_not_found_page(viewer: &Viewer) -> Markup {
    base_layout(
        "Vehicle Not Found",
        viewer,
        html! {
            div class="container section center" {
                p class="error-text" { "Vehicle not found" }
                a href="/vehicles" class="btn btn-ghost" { "‹ Back to Vehicles" }
            }
        },
    )
}
