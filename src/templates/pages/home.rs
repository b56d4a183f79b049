// templates/pages/home.rs

use crate::auth::Viewer;
use crate::templates::{base_layout, components::feature_card};
use maud::{html, Markup};

pub fn home_page(viewer: &Viewer) -> Markup {
    base_layout(
        "Home",
        viewer,
        html! {
            section class="hero" {
                div class="hero-overlay" {}
                div class="container hero-content" {
                    h1 {
                        "Experience the " span class="accent" { "Future" } " of Trading"
                    }
                    p class="lead" {
                        "Premium vehicle lifecycle management and secure transactions tailored for the modern era."
                    }
                    div class="hero-actions" {
                        a href="/vehicles" class="btn btn-light btn-lg" { "Browse Inventory →" }
                        a href="/register" class="btn btn-outline btn-lg" { "Join Platform" }
                    }
                }
            }

            section class="container section" {
                div class="section-head" {
                    h2 { "Why Choose Charaka?" }
                    p class="muted" {
                        "We provide a seamless ecosystem for buying, selling, and managing vehicle lifecycles."
                    }
                }
                div class="grid grid-3" {
                    (feature_card(
                        "🛡",
                        "Secure Transactions",
                        "Every transaction is verified and secured. We ensure transparency in every deal.",
                    ))
                    (feature_card(
                        "✓",
                        "Verified Inventory",
                        "All listings are inspected and verified. No surprises, just quality vehicles.",
                    ))
                    (feature_card(
                        "🚚",
                        "Lifecycle Management",
                        "Track the entire history of a vehicle from showroom to resale.",
                    ))
                }
            }

            section class="cta" {
                div class="container" {
                    h2 { "Ready to upgrade your drive?" }
                    p { "Join thousands of satisfied users today." }
                    a href="/register" class="btn btn-light btn-lg" { "Get Started Now" }
                }
            }
        },
    )
}
