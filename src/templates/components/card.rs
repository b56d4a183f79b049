use maud::{html, Markup};

/// Feature tile used on the landing page.
pub fn feature_card(icon: &str, title: &str, body: &str) -> Markup {
    html! {
        div class="card feature" {
            div class="feature-icon" { (icon) }
            h3 { (title) }
            p class="muted" { (body) }
        }
    }
}
