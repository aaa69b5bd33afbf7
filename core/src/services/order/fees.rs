//! Delivery and cash-on-delivery fee rules.
//!
//! Fees are a pure function of item weight, recipient city and the amount
//! to collect; callers never supply them.

use crate::domain::entities::order::FeeBreakdown;

/// Base delivery fee inside the home city
pub const HOME_CITY_BASE_FEE: f64 = 60.0;

/// Base delivery fee for every other city
pub const OUTSIDE_CITY_BASE_FEE: f64 = 100.0;

/// Surcharge once the parcel is heavier than half a kilogram
pub const OVER_HALF_KG_SURCHARGE: f64 = 10.0;

/// Charged for each started kilogram above the first
pub const PER_EXTRA_KG_FEE: f64 = 15.0;

/// Cash-on-delivery fee as a percentage of the amount to collect
pub const COD_PERCENT: f64 = 1.0;

pub fn delivery_fee(item_weight: f64, recipient_city: i64, home_city: i64) -> f64 {
    let base = if recipient_city == home_city {
        HOME_CITY_BASE_FEE
    } else {
        OUTSIDE_CITY_BASE_FEE
    };

    if item_weight <= 0.5 {
        base
    } else if item_weight <= 1.0 {
        base + OVER_HALF_KG_SURCHARGE
    } else {
        let extra_kg = (item_weight - 1.0).ceil();
        base + OVER_HALF_KG_SURCHARGE + extra_kg * PER_EXTRA_KG_FEE
    }
}

pub fn cod_fee(amount_to_collect: f64) -> f64 {
    amount_to_collect * COD_PERCENT / 100.0
}

/// Compute every fee of an order
pub fn calculate_fees(
    item_weight: f64,
    recipient_city: i64,
    amount_to_collect: f64,
    home_city: i64,
) -> FeeBreakdown {
    let delivery_fee = delivery_fee(item_weight, recipient_city, home_city);
    let cod_fee = cod_fee(amount_to_collect);
    FeeBreakdown {
        delivery_fee,
        cod_fee,
        total_fee: delivery_fee + cod_fee,
    }
}
