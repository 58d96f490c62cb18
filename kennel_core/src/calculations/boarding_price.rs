//! # Boarding Price Calculation
//!
//! Per-night pricing for boarding (pensionat) bookings with support for:
//! - Base prices per dog size
//! - Weekend surcharges (Friday through Sunday)
//! - Special dates (red days, events, holidays)
//! - Seasons (summer, winter, sport holidays) as multipliers
//!
//! ## Priority Order
//!
//! 1. Special date surcharge (highest priority)
//! 2. Weekend surcharge (only when no special date matched)
//! 3. Season multiplier (always applied, last)
//!
//! Each night is rounded to whole kronor before summing.
//!
//! Note: the pricing size classes (small/medium/large) are the operator's
//! own tiers and do not coincide with the SJVFS space-table bands.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{KennelError, KennelResult};
use crate::units::{Centimeters, Kronor};

/// Pricing size tier, derived from withers height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DogSize {
    /// Under 35 cm
    Small,
    /// 35–54 cm
    Medium,
    /// Over 54 cm
    Large,
}

impl DogSize {
    /// Tier for a withers height.
    pub fn from_height(height: Centimeters) -> Self {
        let h = height.value();
        if h < 35.0 {
            DogSize::Small
        } else if h <= 54.0 {
            DogSize::Medium
        } else {
            DogSize::Large
        }
    }

    /// Display name for UI and price rows
    pub fn display_name(&self) -> &'static str {
        match self {
            DogSize::Small => "small",
            DogSize::Medium => "medium",
            DogSize::Large => "large",
        }
    }
}

impl std::fmt::Display for DogSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Base rate row for one size tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightlyRate {
    /// Price per night before surcharges (SEK)
    pub base_price: Kronor,
    /// Added on Friday-Sunday nights without a special date
    pub weekend_surcharge: Kronor,
}

/// Date category for a special-date row. Informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDateCategory {
    RedDay,
    Holiday,
    Event,
    Custom,
}

/// A single date carrying a fixed surcharge (red day, event, holiday).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialDate {
    pub date: NaiveDate,
    pub name: String,
    pub category: SpecialDateCategory,
    pub price_surcharge: Kronor,
    pub is_active: bool,
}

/// A date range carrying a price multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub name: String,
    /// First day of the season (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the season (inclusive)
    pub end_date: NaiveDate,
    pub price_multiplier: f64,
    pub is_active: bool,
}

/// In-memory price configuration for one organisation.
///
/// The engine takes these tables as plain data; loading them from storage
/// is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PricingTables {
    /// Base rates keyed by size tier
    pub rates: HashMap<DogSize, NightlyRate>,
    pub special_dates: Vec<SpecialDate>,
    pub seasons: Vec<Season>,
}

impl PricingTables {
    /// Rate row for a size tier, or a structured error when the operator
    /// has not configured one.
    pub fn rate_for(&self, size: DogSize) -> KennelResult<NightlyRate> {
        self.rates
            .get(&size)
            .copied()
            .ok_or_else(|| KennelError::price_not_found(size.display_name()))
    }

    /// First active special date matching the given date, if any.
    pub fn special_date_on(&self, date: NaiveDate) -> Option<&SpecialDate> {
        self.special_dates
            .iter()
            .find(|sd| sd.is_active && sd.date == date)
    }

    /// First active season containing the given date, if any.
    pub fn season_on(&self, date: NaiveDate) -> Option<&Season> {
        self.seasons
            .iter()
            .find(|s| s.is_active && s.start_date <= date && date <= s.end_date)
    }
}

/// Price for one night, with the applied rules spelled out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightPrice {
    pub date: NaiveDate,
    /// Rounded to whole kronor
    pub price: Kronor,
    /// Human-readable rule applications, in order
    pub breakdown: Vec<String>,
}

/// Quote for a whole booking over `[start, end)` nights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingQuote {
    pub total_price: Kronor,
    pub nights: usize,
    pub dog_size: DogSize,
    pub nightly_breakdown: Vec<NightPrice>,
}

/// Friday, Saturday, and Sunday nights carry the weekend surcharge.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// Price one night for a dog of the given size tier.
pub fn night_price(
    date: NaiveDate,
    size: DogSize,
    tables: &PricingTables,
) -> KennelResult<NightPrice> {
    let rate = tables.rate_for(size)?;
    let mut breakdown = Vec::new();

    let mut price = rate.base_price;
    breakdown.push(format!("Base price: {} kr", price.value()));

    if let Some(special) = tables.special_date_on(date) {
        price = price + special.price_surcharge;
        breakdown.push(format!(
            "{}: +{} kr",
            special.name,
            special.price_surcharge.value()
        ));
    } else if is_weekend(date) {
        price = price + rate.weekend_surcharge;
        breakdown.push(format!(
            "Weekend surcharge: +{} kr",
            rate.weekend_surcharge.value()
        ));
    }

    if let Some(season) = tables.season_on(date) {
        let before = price;
        price = price * season.price_multiplier;
        breakdown.push(format!(
            "{}: x{} ({} kr -> {} kr)",
            season.name,
            season.price_multiplier,
            before.value(),
            price.round_whole().value()
        ));
    }

    Ok(NightPrice {
        date,
        price: price.round_whole(),
        breakdown,
    })
}

/// Quote a multi-night booking.
///
/// Nights run over `[start_date, end_date)`: the checkout day is not
/// charged. `start_date == end_date` is a zero-night quote, not an error.
pub fn booking_price(
    start_date: NaiveDate,
    end_date: NaiveDate,
    dog_height: Centimeters,
    tables: &PricingTables,
) -> KennelResult<BookingQuote> {
    if end_date < start_date {
        return Err(KennelError::invalid_input(
            "end_date",
            end_date.to_string(),
            "End date is before start date",
        ));
    }

    let dog_size = DogSize::from_height(dog_height);
    let mut nightly_breakdown = Vec::new();
    let mut total_price = Kronor(0.0);

    let mut date = start_date;
    while date < end_date {
        let night = night_price(date, dog_size, tables)?;
        total_price = total_price + night.price;
        nightly_breakdown.push(night);
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    Ok(BookingQuote {
        total_price,
        nights: nightly_breakdown.len(),
        dog_size,
        nightly_breakdown,
    })
}
