//! # SJVFS 2019:2 Space Requirements
//!
//! Size-class tables for indoor dog housing per the Swedish Board of
//! Agriculture regulation (Jordbruksverkets föreskrifter om hundars
//! hållande, SJVFS 2019:2).
//!
//! ## Overview
//!
//! The regulation sizes indoor boxes and rooms by withers height (mankhöjd).
//! Two parallel tables apply:
//!
//! | Withers height | Single occupant | Per additional dog |
//! |----------------|-----------------|--------------------|
//! | < 25 cm        | 2.0 m²          | +1.0 m²            |
//! | 25–35 cm       | 2.0 m²          | +1.5 m²            |
//! | 36–45 cm       | 2.5 m²          | +1.5 m²            |
//! | 46–55 cm       | 3.5 m²          | +2.0 m²            |
//! | 56–65 cm       | 4.5 m²          | +2.5 m²            |
//! | > 65 cm        | 5.5 m²          | +3.0 m²            |
//!
//! For group housing the required area is the base area for the tallest dog
//! plus each remaining dog's own increment.
//!
//! The `< 25` and `25–35` rows share a base area but carry different
//! increments, so the two bands are kept distinct. Do not merge them.
//!
//! ## Reference
//!
//! SJVFS 2019:2, Chapter 3: space requirements for dogs kept indoors

use serde::{Deserialize, Serialize};

use crate::units::{Centimeters, SquareMeters};

/// Substituted when a dog has no recorded withers height.
///
/// 30 cm falls in the 25–35 cm band (2.0 m² single / +1.5 m² increment).
/// This is a defined fallback, not an error.
pub const DEFAULT_HEIGHT_CM: f64 = 30.0;

// ============================================================================
// Regulation Section References
// ============================================================================

/// SJVFS section references for the rules encoded in this module.
///
/// These constants provide traceable references to the regulation text
/// (Jordbruksverkets föreskrifter om hundars hållande, SJVFS 2019:2).
pub mod sjvfs_ref {
    /// Minimum box/room size for a single dog
    pub const SINGLE_OCCUPANT: &str = "SJVFS 2019:2 3 kap. 12 §";
    /// Space requirements for pair or group housing
    pub const GROUP_HOUSING: &str = "SJVFS 2019:2 3 kap. 13 §";
    /// General welfare requirement invoked by near-capacity warnings
    pub const WELFARE: &str = "SJVFS 2019:2 2 kap. 8 §";
}

/// Withers-height size class per the SJVFS space tables.
///
/// Band edges are inclusive on the upper bound (a 35 cm dog is `Small`,
/// a 36 cm dog is `SmallMedium`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SizeClass {
    /// < 25 cm: 2.0 m² single, +1.0 m² per additional dog
    VerySmall,

    /// 25–35 cm: 2.0 m² single, +1.5 m² per additional dog
    #[default]
    Small,

    /// 36–45 cm: 2.5 m² single, +1.5 m² per additional dog
    SmallMedium,

    /// 46–55 cm: 3.5 m² single, +2.0 m² per additional dog
    Medium,

    /// 56–65 cm: 4.5 m² single, +2.5 m² per additional dog
    MediumLarge,

    /// > 65 cm: 5.5 m² single, +3.0 m² per additional dog
    Large,
}

impl SizeClass {
    /// All size classes, smallest first
    pub const ALL: [SizeClass; 6] = [
        SizeClass::VerySmall,
        SizeClass::Small,
        SizeClass::SmallMedium,
        SizeClass::Medium,
        SizeClass::MediumLarge,
        SizeClass::Large,
    ];

    /// Classify a withers height.
    pub fn from_height(height: Centimeters) -> Self {
        let h = height.value();
        if h < 25.0 {
            SizeClass::VerySmall
        } else if h <= 35.0 {
            SizeClass::Small
        } else if h <= 45.0 {
            SizeClass::SmallMedium
        } else if h <= 55.0 {
            SizeClass::Medium
        } else if h <= 65.0 {
            SizeClass::MediumLarge
        } else {
            SizeClass::Large
        }
    }

    /// Classify an optional recorded height, substituting the default
    /// when none is recorded.
    pub fn from_recorded_height(height: Option<Centimeters>) -> Self {
        Self::from_height(height.unwrap_or(Centimeters(DEFAULT_HEIGHT_CM)))
    }

    /// Minimum box/room area for one dog of this class alone.
    pub fn base_area(&self) -> SquareMeters {
        SquareMeters(match self {
            SizeClass::VerySmall => 2.0,
            SizeClass::Small => 2.0,
            SizeClass::SmallMedium => 2.5,
            SizeClass::Medium => 3.5,
            SizeClass::MediumLarge => 4.5,
            SizeClass::Large => 5.5,
        })
    }

    /// Additional area required when a dog of this class joins a group
    /// as a non-tallest member.
    pub fn group_increment(&self) -> SquareMeters {
        SquareMeters(match self {
            SizeClass::VerySmall => 1.0,
            SizeClass::Small => 1.5,
            SizeClass::SmallMedium => 1.5,
            SizeClass::Medium => 2.0,
            SizeClass::MediumLarge => 2.5,
            SizeClass::Large => 3.0,
        })
    }

    /// Maximum number of same-class dogs that fit in the given area.
    ///
    /// First dog takes the base area, each further dog takes the class
    /// increment: `1 + floor((area - base) / increment)` when the base
    /// fits at all, else 0.
    pub fn max_dogs_for_area(&self, area: SquareMeters) -> u32 {
        let base = self.base_area().value();
        if area.value() < base {
            return 0;
        }
        1 + ((area.value() - base) / self.group_increment().value()).floor() as u32
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SizeClass::VerySmall => "Very small (<25 cm)",
            SizeClass::Small => "Small (25-35 cm)",
            SizeClass::SmallMedium => "Small-medium (36-45 cm)",
            SizeClass::Medium => "Medium (46-55 cm)",
            SizeClass::MediumLarge => "Medium-large (56-65 cm)",
            SizeClass::Large => "Large (>65 cm)",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(h: f64) -> SizeClass {
        SizeClass::from_height(Centimeters(h))
    }

    #[test]
    fn test_band_boundaries() {
        // Lower edges
        assert_eq!(class_of(20.0), SizeClass::VerySmall);
        assert_eq!(class_of(24.9), SizeClass::VerySmall);
        assert_eq!(class_of(25.0), SizeClass::Small);
        // Upper edges are inclusive
        assert_eq!(class_of(35.0), SizeClass::Small);
        assert_eq!(class_of(36.0), SizeClass::SmallMedium);
        assert_eq!(class_of(45.0), SizeClass::SmallMedium);
        assert_eq!(class_of(46.0), SizeClass::Medium);
        assert_eq!(class_of(55.0), SizeClass::Medium);
        assert_eq!(class_of(56.0), SizeClass::MediumLarge);
        assert_eq!(class_of(65.0), SizeClass::MediumLarge);
        assert_eq!(class_of(65.1), SizeClass::Large);
        assert_eq!(class_of(70.0), SizeClass::Large);
    }

    #[test]
    fn test_base_area_table() {
        let expected = [2.0, 2.0, 2.5, 3.5, 4.5, 5.5];
        for (class, want) in SizeClass::ALL.iter().zip(expected) {
            assert_eq!(class.base_area().value(), want, "{}", class);
        }
    }

    #[test]
    fn test_increment_table() {
        let expected = [1.0, 1.5, 1.5, 2.0, 2.5, 3.0];
        for (class, want) in SizeClass::ALL.iter().zip(expected) {
            assert_eq!(class.group_increment().value(), want, "{}", class);
        }
    }

    #[test]
    fn test_two_smallest_bands_stay_distinct() {
        // Same base area, different increments. Intentional in the regulation.
        assert_eq!(
            SizeClass::VerySmall.base_area(),
            SizeClass::Small.base_area()
        );
        assert_ne!(
            SizeClass::VerySmall.group_increment(),
            SizeClass::Small.group_increment()
        );
    }

    #[test]
    fn test_missing_height_defaults_to_small() {
        assert_eq!(SizeClass::from_recorded_height(None), SizeClass::Small);
        assert_eq!(
            SizeClass::from_recorded_height(Some(Centimeters(30.0))),
            SizeClass::Small
        );
    }

    #[test]
    fn test_max_dogs_for_area() {
        // 10 m² of small dogs: 1 + floor((10 - 2) / 1.5) = 1 + 5 = 6
        assert_eq!(SizeClass::Small.max_dogs_for_area(SquareMeters(10.0)), 6);
        // 10 m² of very small dogs: 1 + floor(8 / 1) = 9
        assert_eq!(SizeClass::VerySmall.max_dogs_for_area(SquareMeters(10.0)), 9);
        // Exactly the base area fits one dog
        assert_eq!(SizeClass::Large.max_dogs_for_area(SquareMeters(5.5)), 1);
        // Below the base area fits none
        assert_eq!(SizeClass::Large.max_dogs_for_area(SquareMeters(5.4)), 0);
    }
}
