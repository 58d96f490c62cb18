//! # kennel_core - Kennel Capacity & Pricing Engine
//!
//! `kennel_core` is the computational heart of Kennelvy, encoding the Swedish
//! Board of Agriculture's indoor space regulation for dogs (SJVFS 2019:2)
//! along with the rule-based pricing and cancellation policies a dog daycare
//! or boarding business runs on. All inputs and outputs are
//! JSON-serializable, making the engine easy to sit behind any API or UI
//! layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Total where possible**: the capacity calculator absorbs missing data
//!   via documented defaults instead of erroring
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types at the seams that can fail
//!
//! ## Quick Start
//!
//! ```rust
//! use kennel_core::calculations::occupancy::{required_area, Dog};
//! use kennel_core::units::Centimeters;
//!
//! let dogs = vec![
//!     Dog::new("Ville").with_height(Centimeters(30.0)),
//!     Dog::new("Ludde").with_height(Centimeters(40.0)),
//!     Dog::new("Saga").with_height(Centimeters(50.0)),
//! ];
//!
//! // Base area for the tallest dog plus each other dog's own increment
//! assert_eq!(required_area(&dogs).value(), 6.5);
//! ```
//!
//! ## Modules
//!
//! - [`regulations`] - The SJVFS 2019:2 size-class tables
//! - [`calculations`] - Occupancy, placement, pricing, and cancellation
//! - [`facility`] - Facility container (rooms + dogs) with metadata
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Facility file operations with atomic saves

pub mod calculations;
pub mod errors;
pub mod facility;
pub mod file_io;
pub mod regulations;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{KennelError, KennelResult};
pub use facility::{Facility, FacilityMetadata};
pub use file_io::{load_facility, save_facility};
pub use regulations::SizeClass;
