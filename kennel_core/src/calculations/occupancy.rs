//! # Room Occupancy Calculation
//!
//! Computes legally required floor area, occupancy metrics, and compliance
//! status for a room full of dogs per the SJVFS 2019:2 indoor space tables.
//!
//! ## Assumptions
//!
//! - Required area depends only on the multiset of withers heights present;
//!   never on room identity, dog identity, or call order
//! - Dogs with no recorded height count as 30 cm
//! - Attendance-day lists use Swedish weekday names ("Måndag,Tisdag,...")
//!   and are matched exactly after trimming, not case-folded
//!
//! ## Example
//!
//! ```rust
//! use kennel_core::calculations::occupancy::{required_area, room_occupancy, Dog, Room, RoomType};
//! use kennel_core::units::{Centimeters, SquareMeters};
//!
//! let dogs = vec![
//!     Dog::new("Ville").with_height(Centimeters(30.0)).checked_in(),
//!     Dog::new("Ludde").with_height(Centimeters(40.0)).checked_in(),
//!     Dog::new("Saga").with_height(Centimeters(50.0)).checked_in(),
//! ];
//!
//! // 3.5 m² for the 50 cm dog + 1.5 m² each for the others
//! assert_eq!(required_area(&dogs).value(), 6.5);
//!
//! let room = Room::new("Stora rummet", SquareMeters(12.0), RoomType::Daycare);
//! let occupancy = room_occupancy(&room, &dogs, None);
//! assert_eq!(occupancy.occupancy_percentage, 54);
//! assert!(!occupancy.is_overcrowded);
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::regulations::{sjvfs_ref, SizeClass};
use crate::units::{Centimeters, SquareMeters};

// ============================================================================
// Input Records
// ============================================================================

/// What a room is used for. Informational only; the space tables do not
/// distinguish daycare from boarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    #[default]
    Daycare,
    Boarding,
    Both,
}

/// A dog as the engine consumes it: identity, withers height, and the
/// presence attributes used to decide who is in the room today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    pub id: Uuid,

    pub name: String,

    /// Withers height (mankhöjd). `None` means unrecorded; the engine
    /// substitutes 30 cm.
    pub height_cm: Option<Centimeters>,

    /// Subscription label ("Heltid", "3 dagar/vecka", ...). Informational.
    #[serde(default)]
    pub subscription: Option<String>,

    /// Comma-separated Swedish weekday names the dog attends,
    /// e.g. "Måndag,Tisdag,Onsdag". `None` means every day.
    #[serde(default)]
    pub days: Option<String>,

    /// Presence filter used when no target day is given.
    #[serde(default)]
    pub checked_in: bool,

    /// The room this dog is assigned to, if any.
    #[serde(default)]
    pub room_id: Option<Uuid>,
}

impl Dog {
    /// Create a dog with a fresh id and no recorded height.
    pub fn new(name: impl Into<String>) -> Self {
        Dog {
            id: Uuid::new_v4(),
            name: name.into(),
            height_cm: None,
            subscription: None,
            days: None,
            checked_in: false,
            room_id: None,
        }
    }

    /// Set the recorded withers height.
    pub fn with_height(mut self, height: Centimeters) -> Self {
        self.height_cm = Some(height);
        self
    }

    /// Set the attendance-day list (comma-separated Swedish weekday names).
    pub fn with_days(mut self, days: impl Into<String>) -> Self {
        self.days = Some(days.into());
        self
    }

    /// Assign the dog to a room.
    pub fn in_room(mut self, room_id: Uuid) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Mark the dog as checked in.
    pub fn checked_in(mut self) -> Self {
        self.checked_in = true;
        self
    }

    /// Size class for this dog, substituting the default height if
    /// none is recorded.
    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_recorded_height(self.height_cm)
    }

    /// Recorded height, or the regulatory default of 30 cm.
    pub fn effective_height(&self) -> Centimeters {
        self.height_cm
            .unwrap_or(Centimeters(crate::regulations::DEFAULT_HEIGHT_CM))
    }
}

/// A room with its legally authoritative floor area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,

    pub name: String,

    /// Floor area in m². The legal ceiling for occupancy.
    pub capacity_m2: SquareMeters,

    /// Optional operator-imposed headcount cap. Informational; the
    /// compliance verdict comes from the area tables alone.
    #[serde(default)]
    pub max_dogs: Option<u32>,

    pub room_type: RoomType,
}

impl Room {
    /// Create a room with a fresh id.
    pub fn new(name: impl Into<String>, capacity_m2: SquareMeters, room_type: RoomType) -> Self {
        Room {
            id: Uuid::new_v4(),
            name: name.into(),
            capacity_m2,
            max_dogs: None,
            room_type,
        }
    }
}

// ============================================================================
// Result Records
// ============================================================================

/// Compliance verdict against the SJVFS indoor space requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Within the legal area requirement
    Compliant,
    /// Approaching the legal limit (≥ 85 % occupancy)
    Warning,
    /// Required area exceeds the room's floor area
    Violation,
}

/// Theoretical same-class maximum headcounts for a room area.
///
/// All six per-class maxima are always populated; callers may need any of
/// them (e.g. to render "what if only small dogs" displays).
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_very_small_dogs": 9,
///   "max_small_dogs": 6,
///   "max_small_medium_dogs": 6,
///   "max_medium_dogs": 4,
///   "max_medium_large_dogs": 3,
///   "max_large_dogs": 2,
///   "current_scenario": 6
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityReport {
    /// Only dogs under 25 cm
    pub max_very_small_dogs: u32,
    /// Only 25–35 cm dogs
    pub max_small_dogs: u32,
    /// Only 36–45 cm dogs
    pub max_small_medium_dogs: u32,
    /// Only 46–55 cm dogs
    pub max_medium_dogs: u32,
    /// Only 56–65 cm dogs
    pub max_medium_large_dogs: u32,
    /// Only dogs over 65 cm
    pub max_large_dogs: u32,

    /// The maximum for the size class of the tallest existing dog, or the
    /// small-dog scenario when the room is empty.
    pub current_scenario: u32,
}

impl CapacityReport {
    /// Per-class maximum lookup.
    pub fn for_class(&self, class: SizeClass) -> u32 {
        match class {
            SizeClass::VerySmall => self.max_very_small_dogs,
            SizeClass::Small => self.max_small_dogs,
            SizeClass::SmallMedium => self.max_small_medium_dogs,
            SizeClass::Medium => self.max_medium_dogs,
            SizeClass::MediumLarge => self.max_medium_large_dogs,
            SizeClass::Large => self.max_large_dogs,
        }
    }
}

/// Full occupancy analysis for one room. Computed fresh on every call,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomOccupancy {
    pub room_id: Uuid,
    pub room_name: String,

    /// The room's floor area (m²)
    pub total_capacity_m2: SquareMeters,

    /// Legally required area for the dogs present (m²)
    pub required_m2: SquareMeters,

    /// Remaining area, floored at 0 for display. Violation detection uses
    /// the unfloored comparison, not this field.
    pub available_m2: SquareMeters,

    /// required / capacity × 100, rounded. 0 when capacity is 0.
    pub occupancy_percentage: u32,

    /// Required area exceeds the room's floor area
    pub is_overcrowded: bool,

    /// Occupancy at or above 90 %
    pub is_full: bool,

    /// The dogs counted as present for this analysis
    pub dogs_present: Vec<Dog>,
    pub dogs_count: usize,

    /// How many more dogs would fit under the optimistic same-class scenario
    pub max_additional_dogs: u32,

    pub compliance_status: ComplianceStatus,
    pub compliance_message: String,
}

// ============================================================================
// Core Operations
// ============================================================================

/// Required floor area for a set of dogs sharing a room.
///
/// Single dog: the single-occupant table for its size class. Group: base
/// area for the tallest dog plus each remaining dog's own increment. When
/// several dogs share the maximum height the first occurrence is taken as
/// the tallest; co-tallest dogs share a size class, so the choice cannot
/// change the total.
///
/// Empty input yields 0 m². This is a pure function of the height multiset.
pub fn required_area(dogs: &[Dog]) -> SquareMeters {
    match dogs {
        [] => SquareMeters(0.0),
        [only] => only.size_class().base_area(),
        _ => {
            let tallest_idx = tallest_index(dogs);
            let mut total = dogs[tallest_idx].size_class().base_area();
            for (idx, dog) in dogs.iter().enumerate() {
                if idx != tallest_idx {
                    total = total + dog.size_class().group_increment();
                }
            }
            total
        }
    }
}

/// Index of the first dog with the maximum effective height.
fn tallest_index(dogs: &[Dog]) -> usize {
    let mut best = 0;
    for (idx, dog) in dogs.iter().enumerate().skip(1) {
        if dog.effective_height() > dogs[best].effective_height() {
            best = idx;
        }
    }
    best
}

/// Theoretical maximum headcounts for each size class in a room.
///
/// `current_scenario` picks the class of the tallest existing dog; with no
/// existing dogs it defaults to the small-dog (25–35 cm) scenario, the
/// optimistic assumption for an empty room.
pub fn max_dogs_capacity(room_capacity: SquareMeters, existing_dogs: &[Dog]) -> CapacityReport {
    let max_for = |class: SizeClass| class.max_dogs_for_area(room_capacity);

    let current_class = if existing_dogs.is_empty() {
        SizeClass::Small
    } else {
        existing_dogs[tallest_index(existing_dogs)].size_class()
    };

    CapacityReport {
        max_very_small_dogs: max_for(SizeClass::VerySmall),
        max_small_dogs: max_for(SizeClass::Small),
        max_small_medium_dogs: max_for(SizeClass::SmallMedium),
        max_medium_dogs: max_for(SizeClass::Medium),
        max_medium_large_dogs: max_for(SizeClass::MediumLarge),
        max_large_dogs: max_for(SizeClass::Large),
        current_scenario: max_for(current_class),
    }
}

/// Swedish weekday name as stored in attendance-day lists.
pub fn swedish_day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Måndag",
        Weekday::Tue => "Tisdag",
        Weekday::Wed => "Onsdag",
        Weekday::Thu => "Torsdag",
        Weekday::Fri => "Fredag",
        Weekday::Sat => "Lördag",
        Weekday::Sun => "Söndag",
    }
}

/// Dogs attending on the given weekday.
///
/// A dog with no attendance-day data is present every day. Day names are
/// matched exactly after trimming; callers must populate day lists in the
/// same convention as [`swedish_day_name`].
pub fn filter_dogs_by_day<'a>(dogs: &'a [Dog], target_day: Weekday) -> Vec<&'a Dog> {
    let target_name = swedish_day_name(target_day);
    dogs.iter()
        .filter(|dog| match &dog.days {
            None => true,
            Some(days) => days.split(',').any(|day| day.trim() == target_name),
        })
        .collect()
}

/// Full occupancy analysis for one room.
///
/// With `target_day` set the active dogs come from [`filter_dogs_by_day`];
/// otherwise only checked-in dogs count. This operation cannot fail:
/// missing heights and zero capacities are absorbed via documented
/// defaults.
pub fn room_occupancy(room: &Room, dogs: &[Dog], target_day: Option<Weekday>) -> RoomOccupancy {
    let active_dogs: Vec<Dog> = match target_day {
        Some(day) => filter_dogs_by_day(dogs, day).into_iter().cloned().collect(),
        None => dogs.iter().filter(|dog| dog.checked_in).cloned().collect(),
    };

    let required = required_area(&active_dogs);
    let capacity = room.capacity_m2;
    let available = SquareMeters((capacity.value() - required.value()).max(0.0));

    let occupancy_percentage = if capacity.value() > 0.0 {
        (required.value() / capacity.value() * 100.0).round() as u32
    } else {
        0
    };

    let is_overcrowded = required.value() > capacity.value();
    let is_full = occupancy_percentage >= 90;

    let capacity_report = max_dogs_capacity(capacity, &active_dogs);
    let max_additional_dogs = capacity_report
        .current_scenario
        .saturating_sub(active_dogs.len() as u32);

    let (compliance_status, compliance_message) = if is_overcrowded {
        let scenario = if active_dogs.len() == 1 {
            "a single dog"
        } else {
            "group housing"
        };
        (
            ComplianceStatus::Violation,
            format!(
                "Overcrowded for {}: requires {} m² but the room has {} m² ({})",
                scenario,
                required.value(),
                capacity.value(),
                sjvfs_ref::GROUP_HOUSING,
            ),
        )
    } else if occupancy_percentage >= 85 {
        (
            ComplianceStatus::Warning,
            format!(
                "Near full capacity ({}%). Verify that every dog is doing well per {}",
                occupancy_percentage,
                sjvfs_ref::WELFARE,
            ),
        )
    } else {
        (
            ComplianceStatus::Compliant,
            "Room meets the SJVFS indoor space requirements".to_string(),
        )
    };

    RoomOccupancy {
        room_id: room.id,
        room_name: room.name.clone(),
        total_capacity_m2: capacity,
        required_m2: required,
        available_m2: available,
        occupancy_percentage,
        is_overcrowded,
        is_full,
        dogs_count: active_dogs.len(),
        dogs_present: active_dogs,
        max_additional_dogs,
        compliance_status,
        compliance_message,
    }
}

/// Occupancy analysis for every room, grouping dogs by their `room_id`.
pub fn all_rooms_occupancy(
    rooms: &[Room],
    all_dogs: &[Dog],
    target_day: Option<Weekday>,
) -> Vec<RoomOccupancy> {
    rooms
        .iter()
        .map(|room| {
            let room_dogs: Vec<Dog> = all_dogs
                .iter()
                .filter(|dog| dog.room_id == Some(room.id))
                .cloned()
                .collect();
            room_occupancy(room, &room_dogs, target_day)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(height_cm: f64) -> Dog {
        Dog::new("Test").with_height(Centimeters(height_cm))
    }

    fn dogs(heights: &[f64]) -> Vec<Dog> {
        heights.iter().map(|h| dog(*h)).collect()
    }

    fn daycare(capacity_m2: f64) -> Room {
        Room::new("Test Room", SquareMeters(capacity_m2), RoomType::Daycare)
    }

    #[test]
    fn test_single_dog_band_table() {
        // Representative point and exact boundaries for every band
        let cases = [
            (20.0, 2.0),
            (25.0, 2.0),
            (30.0, 2.0),
            (35.0, 2.0),
            (36.0, 2.5),
            (40.0, 2.5),
            (45.0, 2.5),
            (46.0, 3.5),
            (50.0, 3.5),
            (55.0, 3.5),
            (56.0, 4.5),
            (60.0, 4.5),
            (65.0, 4.5),
            (70.0, 5.5),
        ];
        for (height, expected_m2) in cases {
            assert_eq!(
                required_area(&[dog(height)]).value(),
                expected_m2,
                "height {} cm",
                height
            );
        }
    }

    #[test]
    fn test_empty_room_requires_nothing() {
        assert_eq!(required_area(&[]).value(), 0.0);
    }

    #[test]
    fn test_group_worked_example() {
        // SJVFS example: 30 + 40 + 50 cm dogs.
        // Base 3.5 for the 50 cm dog, +1.5 each for the other two.
        assert_eq!(required_area(&dogs(&[30.0, 40.0, 50.0])).value(), 6.5);
    }

    #[test]
    fn test_group_is_cheaper_than_singles() {
        // Two 50 cm dogs: 3.5 + 2.0 = 5.5, not 7.0
        assert_eq!(required_area(&dogs(&[50.0, 50.0])).value(), 5.5);
    }

    #[test]
    fn test_order_independence() {
        let forward = required_area(&dogs(&[20.0, 30.0, 40.0, 50.0, 60.0, 70.0]));
        let reverse = required_area(&dogs(&[70.0, 60.0, 50.0, 40.0, 30.0, 20.0]));
        let shuffled = required_area(&dogs(&[50.0, 70.0, 20.0, 60.0, 30.0, 40.0]));
        assert_eq!(forward, reverse);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_adding_a_dog_never_decreases_area() {
        let heights = [20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
        let group = dogs(&[30.0, 55.0]);
        let base = required_area(&group);
        for h in heights {
            let mut larger = group.clone();
            larger.push(dog(h));
            assert!(
                required_area(&larger) >= base,
                "adding a {} cm dog shrank the requirement",
                h
            );
        }
    }

    #[test]
    fn test_missing_height_acts_as_30cm() {
        let unmeasured = Dog::new("Okänd");
        assert_eq!(required_area(&[unmeasured.clone()]).value(), 2.0);

        let with_default = required_area(&[unmeasured, dog(50.0)]);
        let with_explicit = required_area(&dogs(&[30.0, 50.0]));
        assert_eq!(with_default, with_explicit);
    }

    #[test]
    fn test_tie_break_takes_one_base_area() {
        // Three co-tallest 50 cm dogs: one base (3.5) + two increments (2.0)
        assert_eq!(required_area(&dogs(&[50.0, 50.0, 50.0])).value(), 7.5);
    }

    #[test]
    fn test_capacity_report_small_band() {
        // 10 m²: 1 + floor((10 - 2) / 1.5) = 6 small dogs
        let report = max_dogs_capacity(SquareMeters(10.0), &[]);
        assert_eq!(report.max_small_dogs, 6);
        assert_eq!(report.max_very_small_dogs, 9);
        assert_eq!(report.max_large_dogs, 2);
        // Empty room defaults the scenario to the optimistic small-dog band
        assert_eq!(report.current_scenario, report.max_small_dogs);
    }

    #[test]
    fn test_capacity_report_scenario_follows_tallest() {
        let report = max_dogs_capacity(SquareMeters(10.0), &dogs(&[30.0, 50.0]));
        assert_eq!(report.current_scenario, report.max_medium_dogs);
        assert_eq!(report.for_class(SizeClass::Medium), report.max_medium_dogs);
    }

    #[test]
    fn test_day_filter_permissive_default() {
        let always = Dog::new("Alltid").with_height(Centimeters(30.0));
        let weekdays = Dog::new("Deltid")
            .with_height(Centimeters(40.0))
            .with_days("Måndag, Tisdag, Onsdag");

        let all = vec![always, weekdays];
        assert_eq!(filter_dogs_by_day(&all, Weekday::Mon).len(), 2);
        assert_eq!(filter_dogs_by_day(&all, Weekday::Thu).len(), 1);
        assert_eq!(filter_dogs_by_day(&all, Weekday::Thu)[0].name, "Alltid");
    }

    #[test]
    fn test_day_filter_is_exact_match() {
        // Lowercase names do not match; the convention is not case-folded
        let lowercase = Dog::new("Fel").with_days("måndag");
        assert!(filter_dogs_by_day(&[lowercase], Weekday::Mon).is_empty());
    }

    #[test]
    fn test_occupancy_uses_checked_in_without_target_day() {
        let checked = dog(50.0).checked_in();
        let absent = dog(70.0);
        let result = room_occupancy(&daycare(10.0), &[checked, absent], None);
        assert_eq!(result.dogs_count, 1);
        assert_eq!(result.required_m2.value(), 3.5);
    }

    #[test]
    fn test_occupancy_zero_capacity_guard() {
        let result = room_occupancy(&daycare(0.0), &[dog(50.0).checked_in()], None);
        assert_eq!(result.occupancy_percentage, 0);
        assert!(result.is_overcrowded);
        assert_eq!(result.compliance_status, ComplianceStatus::Violation);
    }

    #[test]
    fn test_occupancy_available_area_floors_at_zero() {
        let crowd: Vec<Dog> = dogs(&[70.0, 70.0]).into_iter().map(Dog::checked_in).collect();
        // 5.5 + 3.0 = 8.5 m² required in a 5 m² room
        let result = room_occupancy(&daycare(5.0), &crowd, None);
        assert_eq!(result.required_m2.value(), 8.5);
        assert_eq!(result.available_m2.value(), 0.0);
        assert!(result.is_overcrowded);
    }

    #[test]
    fn test_violation_message_names_group_scenario() {
        let crowd: Vec<Dog> = dogs(&[70.0, 70.0]).into_iter().map(Dog::checked_in).collect();
        let result = room_occupancy(&daycare(5.0), &crowd, None);
        assert!(result.compliance_message.contains("group housing"));

        let single = room_occupancy(&daycare(3.0), &[dog(50.0).checked_in()], None);
        assert!(single.compliance_message.contains("a single dog"));
    }

    #[test]
    fn test_compliance_thresholds() {
        // 8.5 m² of 10 m² = exactly 85 % → warning
        let at_85: Vec<Dog> = dogs(&[50.0, 50.0, 50.0, 20.0])
            .into_iter()
            .map(Dog::checked_in)
            .collect();
        let result = room_occupancy(&daycare(10.0), &at_85, None);
        assert_eq!(result.occupancy_percentage, 85);
        assert_eq!(result.compliance_status, ComplianceStatus::Warning);
        assert!(!result.is_full);

        // 9.0 m² of 10 m² = exactly 90 % → still warning, now also full
        let at_90: Vec<Dog> = dogs(&[50.0, 50.0, 50.0, 30.0])
            .into_iter()
            .map(Dog::checked_in)
            .collect();
        let result = room_occupancy(&daycare(10.0), &at_90, None);
        assert_eq!(result.occupancy_percentage, 90);
        assert_eq!(result.compliance_status, ComplianceStatus::Warning);
        assert!(result.is_full);

        // 7.5 m² of 10 m² = 75 % → compliant
        let under: Vec<Dog> = dogs(&[50.0, 50.0, 50.0])
            .into_iter()
            .map(Dog::checked_in)
            .collect();
        let result = room_occupancy(&daycare(10.0), &under, None);
        assert_eq!(result.compliance_status, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_max_additional_dogs() {
        // Two small dogs in 10 m²: small-dog scenario allows 6, so 4 more fit
        let pair: Vec<Dog> = dogs(&[30.0, 30.0]).into_iter().map(Dog::checked_in).collect();
        let result = room_occupancy(&daycare(10.0), &pair, None);
        assert_eq!(result.max_additional_dogs, 4);

        // Empty room falls back to the optimistic small-dog scenario
        let empty = room_occupancy(&daycare(10.0), &[], None);
        assert_eq!(empty.max_additional_dogs, 6);
        assert_eq!(empty.compliance_status, ComplianceStatus::Compliant);
        assert_eq!(empty.occupancy_percentage, 0);
    }

    #[test]
    fn test_all_rooms_groups_by_room_id() {
        let room_a = daycare(10.0);
        let room_b = daycare(6.0);
        let dogs = vec![
            dog(50.0).checked_in().in_room(room_a.id),
            dog(30.0).checked_in().in_room(room_a.id),
            dog(70.0).checked_in().in_room(room_b.id),
            dog(40.0).checked_in(), // unassigned
        ];

        let results = all_rooms_occupancy(&[room_a, room_b], &dogs, None);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].dogs_count, 2);
        assert_eq!(results[0].required_m2.value(), 5.0); // 3.5 + 1.5
        assert_eq!(results[1].dogs_count, 1);
        assert_eq!(results[1].required_m2.value(), 5.5);
    }

    #[test]
    fn test_occupancy_serializes_to_json() {
        let result = room_occupancy(&daycare(10.0), &[dog(50.0).checked_in()], None);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"compliance_status\":\"compliant\""));
        assert!(json.contains("\"required_m2\":3.5"));
    }
}
