use crate::auth::{Permission, Viewer};
use maud::{html, Markup};

/// Links shared by the desktop bar and the mobile drawer.
fn primary_links(viewer: &Viewer) -> Markup {
    html! {
        a href="/" class="nav-link" { "Home" }
        a href="/vehicles" class="nav-link" { "Vehicles" }
        @if viewer.can(Permission::AnalyticsView) {
            a href="/admin/dashboard" class="nav-link" { "Dashboard" }
        }
    }
}

fn account_menu(viewer: &Viewer) -> Markup {
    html! {
        @if let Some(user) = viewer.user() {
            details class="account-menu" {
                summary class="avatar" title=(user.username) { (user.initials()) }
                div class="menu" {
                    div class="menu-label" {
                        p class="menu-name" { (user.username) }
                        @if let Some(email) = &user.email {
                            p class="muted" { (email) }
                        }
                    }
                    hr;
                    a href="/profile" { "Profile" }
                    @if viewer.can(Permission::AnalyticsView) {
                        a href="/admin/dashboard" { "Dashboard" }
                    }
                    @if viewer.can(Permission::StoreEdit) {
                        a href="/settings?tab=store" { "Store Settings" }
                    }
                    @if viewer.can(Permission::UserCreate) {
                        a href="/settings?tab=permissions" { "Permissions" }
                    }
                    a href="/settings" { "Settings" }
                    hr;
                    a href="/logout" class="danger" { "Log out" }
                }
            }
        } @else {
            div class="auth-buttons" {
                a href="/login" class="btn btn-ghost" { "Login" }
                a href="/register" class="btn" { "Register" }
            }
        }
    }
}

pub fn navbar(viewer: &Viewer) -> Markup {
    html! {
        header class="navbar" {
            div class="container navbar-inner" {
                a href="/" class="brand" {
                    span class="brand-mark" { "CT" }
                    "Charaka Trading"
                }
                nav class="nav-desktop" { (primary_links(viewer)) }
                div class="nav-desktop" { (account_menu(viewer)) }

                details class="nav-mobile" {
                    summary class="btn btn-ghost" aria-label="Menu" { "☰" }
                    div class="drawer" {
                        p class="drawer-title" { "Charaka Trading" }
                        (primary_links(viewer))
                        @if viewer.is_authenticated() {
                            div class="drawer-section" {
                                p class="muted" { "My Account" }
                                a href="/profile" class="nav-link" { "Profile" }
                                a href="/settings" class="nav-link" { "Settings" }
                                a href="/logout" class="nav-link danger" { "Log out" }
                            }
                        } @else {
                            a href="/login" class="btn btn-ghost" { "Login" }
                            a href="/register" class="btn" { "Register" }
                        }
                    }
                }
            }
        }
    }
}
