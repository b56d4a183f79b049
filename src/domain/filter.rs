// src/domain/filter.rs

use crate::domain::vehicle::Vehicle;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Sentinel used by the status and brand selects for "no restriction".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    LowestPrice,
    HighestPrice,
}

impl SortKey {
    pub const OPTIONS: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::LowestPrice,
        SortKey::HighestPrice,
    ];

    /// Unrecognised keys fall back to `Newest`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "oldest" => SortKey::Oldest,
            "lowest_price" => SortKey::LowestPrice,
            "highest_price" => SortKey::HighestPrice,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::LowestPrice => "lowest_price",
            SortKey::HighestPrice => "highest_price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest Listed",
            SortKey::Oldest => "Oldest Listed",
            SortKey::LowestPrice => "Price: Low to High",
            SortKey::HighestPrice => "Price: High to Low",
        }
    }

    fn compare(self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            SortKey::LowestPrice => a.price_or_zero().total_cmp(&b.price_or_zero()),
            SortKey::HighestPrice => b.price_or_zero().total_cmp(&a.price_or_zero()),
            SortKey::Oldest => a.created_at_or_epoch().cmp(&b.created_at_or_epoch()),
            SortKey::Newest => b.created_at_or_epoch().cmp(&a.created_at_or_epoch()),
        }
    }
}

/// The user's filter and sort choices at one point in time.
///
/// Price bounds are kept as the text the user typed; they are coerced when the
/// filter runs so the form can echo back exactly what was entered.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub status: String,
    pub brand: String,
    pub min_price: String,
    pub max_price: String,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: ALL.to_string(),
            brand: ALL.to_string(),
            min_price: String::new(),
            max_price: String::new(),
            sort: SortKey::Newest,
        }
    }
}

impl FilterCriteria {
    /// Reads the `/vehicles` query string. Missing or empty keys keep their defaults.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let mut criteria = Self::default();
        let get = |key: &str| params.get(key).filter(|v| !v.is_empty()).cloned();

        if let Some(v) = get("search") {
            criteria.search = v;
        }
        if let Some(v) = get("status") {
            criteria.status = v;
        }
        if let Some(v) = get("brand") {
            criteria.brand = v;
        }
        if let Some(v) = get("min_price") {
            criteria.min_price = v;
        }
        if let Some(v) = get("max_price") {
            criteria.max_price = v;
        }
        if let Some(v) = get("sort") {
            criteria.sort = SortKey::parse(&v);
        }

        criteria
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn min_bound(&self) -> Option<f64> {
        parse_price_bound(&self.min_price)
    }

    pub fn max_bound(&self) -> Option<f64> {
        parse_price_bound(&self.max_price)
    }
}

// Criteria with the search text lowercased and price bounds coerced once per call.
struct Predicate<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
    min: Option<f64>,
    max: Option<f64>,
}

impl<'c> Predicate<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search.to_lowercase(),
            min: criteria.min_bound(),
            max: criteria.max_bound(),
        }
    }

    fn matches(&self, vehicle: &Vehicle) -> bool {
        let c = self.criteria;
        let price = vehicle.price_or_zero();

        matches_text(vehicle, &self.needle)
            && (c.status == ALL || vehicle.status.as_deref() == Some(c.status.as_str()))
            && (c.brand == ALL || vehicle.brand.as_deref() == Some(c.brand.as_str()))
            && self.min.map_or(true, |min| price >= min)
            && self.max.map_or(true, |max| price <= max)
    }
}

/// Coerces free-text price input. Blank or unreadable text means "no bound".
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

// `needle` is already lowercased; an empty needle matches everything.
fn matches_text(vehicle: &Vehicle, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&vehicle.brand, &vehicle.model, &vehicle.vehicle_number]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Distinct brands in the full list, sorted ascending on their stored casing.
pub fn derive_brand_options(vehicles: &[Vehicle]) -> Vec<String> {
    vehicles
        .iter()
        .filter_map(|v| v.brand.as_deref())
        .filter(|brand| !brand.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Keeps the vehicles that satisfy every active filter, then orders them by the
/// chosen sort key. The sort is stable, so ties keep their input order.
pub fn filter_and_sort<'a, I>(vehicles: I, criteria: &FilterCriteria) -> Vec<&'a Vehicle>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    let predicate = Predicate::new(criteria);

    let mut matched: Vec<&Vehicle> = vehicles
        .into_iter()
        .filter(|v| predicate.matches(v))
        .collect();

    matched.sort_by(|a, b| criteria.sort.compare(a, b));
    matched
}
