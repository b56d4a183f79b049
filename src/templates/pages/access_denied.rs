use crate::auth::Viewer;
use crate::templates::base_layout;
use maud::{html, Markup};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Short uppercase id the user can quote to support.
pub fn reference_id<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(6)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect()
}

pub fn access_denied_page(viewer: &Viewer, reference: &str) -> Markup {
    base_layout(
        "Access Denied",
        viewer,
        html! {
            div class="container error-page" {
                div class="error-icon error-icon-danger" { "⛔" }
                h1 { "Access Denied" }
                p class="lead muted" {
                    "Sorry, you don't have the required permissions to view this page. "
                    "Please contact your system administrator if you believe this is an error."
                }
                div class="error-actions" {
                    a href="javascript:history.back()" class="btn btn-outline" { "← Go Back" }
                    a href="/" class="btn" { "Return Home" }
                    a href="#" class="btn btn-ghost" { "Contact Support" }
                }
                div class="error-footnote ref-id muted" {
                    "Ref ID: " (reference) " • Security Layer Active"
                }
            }
        },
    )
}
