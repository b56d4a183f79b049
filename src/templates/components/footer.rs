use chrono::{Datelike, Utc};
use maud::{html, Markup};

pub fn footer() -> Markup {
    let year = Utc::now().year();

    html! {
        footer class="footer" {
            div class="container footer-grid" {
                div {
                    a href="/" class="brand" {
                        span class="brand-mark" { "CT" }
                        "Charaka Trading"
                    }
                    p class="muted" {
                        "Premium vehicle trading platform. We ensure quality, security, and transparency in every transaction."
                    }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/vehicles" { "Vehicles" } }
                        li { a href="/login" { "Login" } }
                        li { a href="/register" { "Register" } }
                    }
                }
                div {
                    h3 { "Support" }
                    ul {
                        li { a href="#" { "About Us" } }
                        li { a href="#" { "Contact" } }
                        li { a href="#" { "Privacy Policy" } }
                        li { a href="#" { "Terms of Service" } }
                    }
                }
                div {
                    h3 { "Connect With Us" }
                    ul class="social" {
                        li { a href="#" { "Facebook" } }
                        li { a href="#" { "Twitter" } }
                        li { a href="#" { "Instagram" } }
                        li { a href="#" { "LinkedIn" } }
                    }
                }
            }
            div class="container footer-bottom" {
                p { "© " (year) " Charaka Trading. All rights reserved." }
            }
        }
    }
}
