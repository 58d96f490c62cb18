//! # Unit Types
//!
//! Type-safe wrappers for the units the engine works in. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The domain uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! Kennelvy uses metric units throughout, matching the Swedish regulation:
//! - Withers height: centimeters (cm)
//! - Floor area: square meters (m²)
//! - Money: Swedish kronor (SEK)
//!
//! Callers are responsible for unit conversion before invocation; the engine
//! performs no unit detection or conversion.
//!
//! ## Example
//!
//! ```rust
//! use kennel_core::units::{Centimeters, SquareMeters};
//!
//! let height = Centimeters(42.0);
//! let area = SquareMeters(2.5);
//! assert_eq!((area * 2.0).value(), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Withers height in centimeters (mankhöjd)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Floor area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Money in Swedish kronor (SEK)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kronor(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(Kronor);

impl Kronor {
    /// Round to whole kronor (per-night prices are quoted in whole SEK)
    pub fn round_whole(self) -> Self {
        Kronor(self.0.round())
    }

    /// Round to öre (two decimals), used for fees and refunds
    pub fn round_ore(self) -> Self {
        Kronor((self.0 * 100.0).round() / 100.0)
    }
}
