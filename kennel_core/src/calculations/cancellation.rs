//! # Cancellation Fee Calculation
//!
//! Computes the cancellation fee for a boarding booking from the
//! organisation's policy and the number of days left until check-in.
//!
//! ## Default Policy
//!
//! | Days until start | Fee   |
//! |------------------|-------|
//! | 7 or more        | 0 %   |
//! | 3–6              | 50 %  |
//! | under 3          | 100 % |
//!
//! A booking whose start date has passed can no longer be cancelled.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::units::Kronor;

/// Fee fractions per notice window. 0.0 = no fee, 1.0 = full price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationPolicy {
    /// Fee fraction with 7+ days of notice
    pub days_7_plus: f64,
    /// Fee fraction with 3-6 days of notice
    pub days_3_to_7: f64,
    /// Fee fraction with under 3 days of notice
    pub days_under_3: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Standard policy used when an organisation has not configured one.
pub static DEFAULT_CANCELLATION_POLICY: Lazy<CancellationPolicy> = Lazy::new(|| {
    CancellationPolicy {
        days_7_plus: 0.0,
        days_3_to_7: 0.5,
        days_under_3: 1.0,
        description: Some(
            "7+ days: no fee, 3-6 days: 50% fee, under 3 days: 100% fee".to_string(),
        ),
    }
});

impl Default for CancellationPolicy {
    fn default() -> Self {
        DEFAULT_CANCELLATION_POLICY.clone()
    }
}

/// Booking lifecycle status as the customer portal sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// Outcome of a cancellation-fee calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationOutcome {
    /// Fee kept by the organisation, rounded to öre
    pub cancellation_fee: Kronor,
    /// Amount returned to the customer, rounded to öre
    pub refund_amount: Kronor,
    /// Whole days between cancellation and check-in; negative once started
    pub days_until_start: i64,
    /// The fraction of the total price charged
    pub fee_percentage: f64,
    /// Which policy rule was applied
    pub policy_applied: String,
    pub can_cancel: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Compute the cancellation fee for a booking.
///
/// `cancellation_date` is usually today; it is a parameter so the
/// calculation stays pure and testable.
pub fn cancellation_fee(
    start_date: NaiveDate,
    total_price: Kronor,
    policy: &CancellationPolicy,
    cancellation_date: NaiveDate,
) -> CancellationOutcome {
    let days_until_start = (start_date - cancellation_date).num_days();

    if days_until_start < 0 {
        return CancellationOutcome {
            cancellation_fee: total_price,
            refund_amount: Kronor(0.0),
            days_until_start,
            fee_percentage: 1.0,
            policy_applied: "Booking has already started".to_string(),
            can_cancel: false,
            reason: Some(
                "The booking has already started and can no longer be cancelled. \
                 Contact the kennel for help."
                    .to_string(),
            ),
        };
    }

    let (fee_percentage, window) = if days_until_start >= 7 {
        (policy.days_7_plus, "7+ days of notice")
    } else if days_until_start >= 3 {
        (policy.days_3_to_7, "3-6 days of notice")
    } else {
        (policy.days_under_3, "Under 3 days of notice")
    };

    let fee = (total_price * fee_percentage).round_ore();
    let refund = (total_price - fee).round_ore();

    CancellationOutcome {
        cancellation_fee: fee,
        refund_amount: refund,
        days_until_start,
        fee_percentage,
        policy_applied: format!("{}: {}% fee", window, fee_percentage * 100.0),
        can_cancel: true,
        reason: None,
    }
}

/// Whether the customer may cancel this booking themselves.
///
/// Checked-in, checked-out, and already-cancelled bookings cannot be
/// cancelled, nor can bookings whose start date has passed. Pending and
/// confirmed bookings can.
pub fn can_customer_cancel(status: BookingStatus, start_date: NaiveDate, today: NaiveDate) -> bool {
    match status {
        BookingStatus::CheckedIn | BookingStatus::CheckedOut | BookingStatus::Cancelled => false,
        BookingStatus::Pending | BookingStatus::Confirmed => {
            (start_date - today).num_days() >= 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_free_cancellation_with_a_week_of_notice() {
        let outcome = cancellation_fee(
            date(2025, 7, 10),
            Kronor(2000.0),
            &DEFAULT_CANCELLATION_POLICY,
            date(2025, 7, 3),
        );
        assert_eq!(outcome.days_until_start, 7);
        assert!(outcome.can_cancel);
        assert_eq!(outcome.cancellation_fee.value(), 0.0);
        assert_eq!(outcome.refund_amount.value(), 2000.0);
    }

    #[test]
    fn test_half_fee_between_three_and_six_days() {
        let outcome = cancellation_fee(
            date(2025, 7, 10),
            Kronor(2000.0),
            &DEFAULT_CANCELLATION_POLICY,
            date(2025, 7, 6),
        );
        assert_eq!(outcome.days_until_start, 4);
        assert_eq!(outcome.fee_percentage, 0.5);
        assert_eq!(outcome.cancellation_fee.value(), 1000.0);
        assert_eq!(outcome.refund_amount.value(), 1000.0);
    }

    #[test]
    fn test_full_fee_under_three_days() {
        let outcome = cancellation_fee(
            date(2025, 7, 10),
            Kronor(1500.0),
            &DEFAULT_CANCELLATION_POLICY,
            date(2025, 7, 8),
        );
        assert_eq!(outcome.days_until_start, 2);
        assert_eq!(outcome.cancellation_fee.value(), 1500.0);
        assert_eq!(outcome.refund_amount.value(), 0.0);
    }

    #[test]
    fn test_started_booking_cannot_be_cancelled() {
        let outcome = cancellation_fee(
            date(2025, 7, 10),
            Kronor(1500.0),
            &DEFAULT_CANCELLATION_POLICY,
            date(2025, 7, 11),
        );
        assert!(!outcome.can_cancel);
        assert_eq!(outcome.refund_amount.value(), 0.0);
        assert!(outcome.reason.is_some());
    }

    #[test]
    fn test_fee_rounds_to_ore() {
        let policy = CancellationPolicy {
            days_3_to_7: 1.0 / 3.0,
            ..CancellationPolicy::default()
        };
        let outcome = cancellation_fee(date(2025, 7, 10), Kronor(100.0), &policy, date(2025, 7, 6));
        assert_eq!(outcome.cancellation_fee.value(), 33.33);
        assert_eq!(outcome.refund_amount.value(), 66.67);
    }

    #[test]
    fn test_customer_cancellation_rules() {
        let start = date(2025, 7, 10);
        let before = date(2025, 7, 1);
        let after = date(2025, 7, 12);

        assert!(can_customer_cancel(BookingStatus::Pending, start, before));
        assert!(can_customer_cancel(BookingStatus::Confirmed, start, before));
        // Start day itself still allows cancellation (fee applies)
        assert!(can_customer_cancel(BookingStatus::Confirmed, start, start));

        assert!(!can_customer_cancel(BookingStatus::CheckedIn, start, before));
        assert!(!can_customer_cancel(BookingStatus::CheckedOut, start, after));
        assert!(!can_customer_cancel(BookingStatus::Cancelled, start, before));
        assert!(!can_customer_cancel(BookingStatus::Confirmed, start, after));
    }
}
