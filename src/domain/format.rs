// src/domain/format.rs

use crate::domain::vehicle::{ActiveDiscount, DiscountType};

/// Groups thousands with commas and keeps at most two decimals:
/// 3000000 -> "3,000,000", 1234.5 -> "1,234.5".
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();

    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        let frac = format!("{cents:02}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

pub fn format_lkr(value: f64) -> String {
    format!("LKR {}", format_amount(value))
}

/// Corner badge on listing cards: "10% OFF" or "SAVE LKR 250,000".
pub fn card_discount_badge(discount: &ActiveDiscount) -> String {
    match discount.kind {
        DiscountType::Percentage => format!("{}% OFF", format_amount(discount.value)),
        _ => format!("SAVE {}", format_lkr(discount.value)),
    }
}

/// Corner badge over the detail gallery: "10% OFF" or "LKR 250,000 OFF".
pub fn gallery_discount_badge(discount: &ActiveDiscount) -> String {
    match discount.kind {
        DiscountType::Percentage => format!("{}% OFF", format_amount(discount.value)),
        _ => format!("{} OFF", format_lkr(discount.value)),
    }
}

/// Badge next to the price on the detail page.
pub fn detail_discount_badge(discount: &ActiveDiscount) -> String {
    match discount.kind {
        DiscountType::Percentage => format!("{}% OFF", format_amount(discount.value)),
        _ => "SPECIAL OFFER".to_string(),
    }
}
