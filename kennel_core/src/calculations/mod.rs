//! # Kennel Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - Plain serializable input records (JSON-first)
//! - Plain serializable result records
//! - Pure calculation functions, no I/O
//!
//! ## Available Calculations
//!
//! - [`occupancy`] - Room occupancy and SJVFS compliance analysis
//! - [`recommendation`] - Ranked room placement for a new dog
//! - [`boarding_price`] - Per-night boarding price with season/surcharge rules
//! - [`cancellation`] - Cancellation fees per organisation policy

pub mod boarding_price;
pub mod cancellation;
pub mod occupancy;
pub mod recommendation;

// Re-export commonly used types
pub use boarding_price::{BookingQuote, DogSize, PricingTables};
pub use cancellation::{CancellationOutcome, CancellationPolicy};
pub use occupancy::{CapacityReport, ComplianceStatus, Dog, Room, RoomOccupancy, RoomType};
pub use recommendation::RoomRecommendation;
