use crate::auth::{Permission, Viewer};
use crate::domain::{derive_brand_options, filter_and_sort, FilterCriteria};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, html_with_status, redirect, stylesheet_response};
use crate::state::Storefront;
use crate::templates::pages::{
    access_denied_page, home_page, not_found_page, reference_id, vehicle_detail_page,
    vehicle_error_page, vehicle_not_found_page, vehicles_error_page, vehicles_page, VehicleDetailVm,
    VehiclesVm,
};
use astra::Request;
use std::collections::HashMap;
use url::form_urlencoded;

const SESSION_COOKIE: &str = "token";

pub fn handle(req: Request, app: &Storefront) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    log::debug!("{method} {path}");

    // The stylesheet never needs the viewer.
    if method == "GET" && path == "/static/main.css" {
        return stylesheet_response();
    }

    let viewer = resolve_viewer(&req, app);
    let query = parse_query(&req);

    let result = match (method, path) {
        ("GET", "/") => html_response(home_page(&viewer)),
        ("GET", "/vehicles") => vehicles(&query, app, &viewer),
        ("GET", p) if p.starts_with("/vehicles/") => match vehicle_id(p) {
            Some(id) => vehicle_detail(&id, &query, app, &viewer),
            None => Err(ServerError::NotFound),
        },
        ("GET", "/access-denied") => Err(ServerError::Forbidden),
        ("GET", p) if p == "/admin" || p.starts_with("/admin/") => admin(&req, app, &viewer),
        ("GET", "/login" | "/register" | "/logout") => redirect(&account_url(&req, app)),
        ("GET", "/profile" | "/settings") => {
            if viewer.is_authenticated() {
                redirect(&account_url(&req, app))
            } else {
                redirect("/login")
            }
        }
        _ => Err(ServerError::NotFound),
    };

    match result {
        Err(ServerError::NotFound) => html_with_status(404, not_found_page(&viewer)),
        Err(ServerError::Forbidden) => {
            let reference = reference_id(&mut rand::thread_rng());
            log::info!("Access denied to {path} (ref {reference})");
            html_with_status(403, access_denied_page(&viewer, &reference))
        }
        other => other,
    }
}

fn vehicles(query: &HashMap<String, String>, app: &Storefront, viewer: &Viewer) -> ResultResp {
    let criteria = FilterCriteria::from_query(query);

    let all = match app.catalog.list_vehicles() {
        Ok(all) => all,
        Err(err) => {
            log::error!("Failed to load vehicles: {err}");
            return html_with_status(502, vehicles_error_page(viewer));
        }
    };

    let brands = derive_brand_options(&all);
    let shown = filter_and_sort(&all, &criteria);
    log::debug!("{} of {} vehicles match", shown.len(), all.len());

    html_response(vehicles_page(
        viewer,
        &VehiclesVm {
            criteria: &criteria,
            brands: &brands,
            vehicles: &shown,
            asset_base: &app.config.asset_base_url,
        },
    ))
}

fn vehicle_detail(
    id: &str,
    query: &HashMap<String, String>,
    app: &Storefront,
    viewer: &Viewer,
) -> ResultResp {
    let vehicle = match app.catalog.get_vehicle(id) {
        Ok(Some(vehicle)) => vehicle,
        Ok(None) => return html_with_status(404, vehicle_not_found_page(viewer)),
        Err(err) => {
            log::error!("Failed to load vehicle {id}: {err}");
            return html_with_status(502, vehicle_error_page(viewer));
        }
    };

    let selected_image = query
        .get("image")
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|&index| index < vehicle.images().len())
        .unwrap_or(0);

    html_response(vehicle_detail_page(
        viewer,
        &VehicleDetailVm {
            vehicle: &vehicle,
            selected_image,
            asset_base: &app.config.asset_base_url,
        },
    ))
}

/// Back-office pages live in the account app; the storefront only checks the gate.
fn admin(req: &Request, app: &Storefront, viewer: &Viewer) -> ResultResp {
    let path = req.uri().path().trim_end_matches('/');
    let allowed = if path == "/admin/dashboard" {
        viewer.can(Permission::AnalyticsView)
    } else {
        viewer.is_admin()
    };

    if !allowed {
        return Err(ServerError::Forbidden);
    }
    redirect(&account_url(req, app))
}

/// Same path and query on the account app.
fn account_url(req: &Request, app: &Storefront) -> String {
    let mut url = format!("{}{}", app.config.account_app_url, req.uri().path());
    if let Some(q) = req.uri().query().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// `/vehicles/{id}` with exactly one non-empty segment after the prefix.
fn vehicle_id(path: &str) -> Option<String> {
    let segment = path.strip_prefix("/vehicles/")?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    let id: String = form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())?;
    (!id.trim().is_empty()).then_some(id)
}

fn resolve_viewer(req: &Request, app: &Storefront) -> Viewer {
    let Some(token) = cookie_value(req, SESSION_COOKIE) else {
        return Viewer::Anonymous;
    };

    match app.catalog.current_user(&token) {
        Ok(Some(user)) => Viewer::User(user),
        Ok(None) => Viewer::Anonymous,
        Err(err) => {
            log::warn!("Could not resolve current user: {err}");
            Viewer::Anonymous
        }
    }
}

fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
