// src/domain/vehicle.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A catalog entry as returned by the REST API.
///
/// Everything except the id is optional so that partial records still load;
/// accessors below supply the documented fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vehicle_number: Option<String>,

    pub price: Option<f64>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<f64>,
    pub discounted_price: Option<f64>,

    /// Raw status as stored upstream ("available", "sold", "reserved").
    pub status: Option<String>,
    pub condition: Option<String>,

    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<f64>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<VehicleType>,
    pub body_type: Option<String>,
    pub seating_capacity: Option<u32>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub engine_capacity: Option<String>,
    pub bike_type: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,

    pub images: Option<Vec<String>>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    None,
    Percentage,
    Fixed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleType {
    Car,
    ThreeWheel,
    Motorbike,
    #[serde(other)]
    Other,
}

impl VehicleType {
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::ThreeWheel => "Three Wheel",
            VehicleType::Motorbike => "Motorbike",
            VehicleType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    Sold,
    Reserved,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Available,
        VehicleStatus::Sold,
        VehicleStatus::Reserved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Sold => "sold",
            VehicleStatus::Reserved => "reserved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Sold => "Sold",
            VehicleStatus::Reserved => "Reserved",
        }
    }
}

/// A discount that passes the display rule: an explicit percentage or fixed
/// discount whose discounted price is below the listed price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDiscount {
    pub kind: DiscountType,
    pub value: f64,
    pub discounted_price: f64,
    pub saving: f64,
}

impl Vehicle {
    /// Listed price, or 0 when the record has none.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Parsed `createdAt`, if it is present and readable.
    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// `createdAt` for ordering; missing or unreadable values sort as the Unix epoch.
    pub fn created_at_or_epoch(&self) -> DateTime<Utc> {
        self.created_at_parsed().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn status_kind(&self) -> Option<VehicleStatus> {
        let raw = self.status.as_deref()?;
        VehicleStatus::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// True when the listing should carry a status badge (anything but "available").
    pub fn is_unavailable(&self) -> bool {
        matches!(self.status.as_deref(), Some(s) if s != VehicleStatus::Available.as_str())
    }

    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }

    /// "2019 Toyota Aqua", skipping whatever parts are missing.
    pub fn title(&self) -> String {
        let year = self.year.map(|y| y.to_string());
        [year.as_deref(), self.brand.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The one place the discount display rule lives; listing cards and the
    /// detail page both call this.
    pub fn active_discount(&self) -> Option<ActiveDiscount> {
        let kind = match self.discount_type? {
            k @ (DiscountType::Percentage | DiscountType::Fixed) => k,
            DiscountType::None | DiscountType::Other => return None,
        };
        let price = self.price?;
        let discounted_price = self.discounted_price?;
        if discounted_price >= price {
            return None;
        }

        Some(ActiveDiscount {
            kind,
            value: self.discount_value.unwrap_or(0.0),
            discounted_price,
            saving: price - discounted_price,
        })
    }
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` (taken as UTC) and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// engineCapacity shows up as "150cc" from some sellers and as 1500 from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(Raw::Text(_)) | None => None,
        Some(Raw::Int(n)) => Some(n.to_string()),
        Some(Raw::Float(n)) => Some(n.to_string()),
    })
}
