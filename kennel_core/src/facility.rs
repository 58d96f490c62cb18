//! # Facility Data Structures
//!
//! The `Facility` struct is the root container for one organisation's rooms
//! and dogs. Facilities serialize to `.kennel` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Facility
//! ├── meta: FacilityMetadata (version, organisation, timestamps)
//! ├── rooms: Vec<Room>
//! └── dogs: Vec<Dog>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kennel_core::facility::Facility;
//! use kennel_core::calculations::occupancy::{Dog, Room, RoomType};
//! use kennel_core::units::{Centimeters, SquareMeters};
//!
//! let mut facility = Facility::new("Glada Tassar AB");
//! let room_id = facility.add_room(Room::new(
//!     "Lilla rummet",
//!     SquareMeters(8.0),
//!     RoomType::Daycare,
//! ));
//! facility.add_dog(Dog::new("Sigge").with_height(Centimeters(38.0)).in_room(room_id));
//!
//! let overview = facility.occupancy_overview(None);
//! assert_eq!(overview.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::occupancy::{all_rooms_occupancy, Dog, Room, RoomOccupancy};
use crate::errors::{KennelError, KennelResult};

/// Current schema version for .kennel files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root facility container.
///
/// This is the top-level struct that gets serialized to `.kennel` files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    /// Facility metadata (version, organisation, timestamps)
    pub meta: FacilityMetadata,

    pub rooms: Vec<Room>,

    pub dogs: Vec<Dog>,
}

/// Metadata stored at the top of every facility file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityMetadata {
    /// Schema version for forward-compatibility checks
    pub version: String,

    /// Organisation display name
    pub organisation: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Facility {
    /// Create a new empty facility.
    pub fn new(organisation: impl Into<String>) -> Self {
        let now = Utc::now();
        Facility {
            meta: FacilityMetadata {
                version: SCHEMA_VERSION.to_string(),
                organisation: organisation.into(),
                created: now,
                modified: now,
            },
            rooms: Vec::new(),
            dogs: Vec::new(),
        }
    }

    /// Add a room. Returns its id.
    pub fn add_room(&mut self, room: Room) -> Uuid {
        let id = room.id;
        self.rooms.push(room);
        self.touch();
        id
    }

    /// Add a dog. Returns its id.
    pub fn add_dog(&mut self, dog: Dog) -> Uuid {
        let id = dog.id;
        self.dogs.push(dog);
        self.touch();
        id
    }

    /// Remove a dog by id. Returns the removed dog if it existed.
    pub fn remove_dog(&mut self, id: Uuid) -> Option<Dog> {
        let idx = self.dogs.iter().position(|d| d.id == id)?;
        let dog = self.dogs.remove(idx);
        self.touch();
        Some(dog)
    }

    /// Look up a room by id.
    pub fn room(&self, id: Uuid) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Look up a dog by id.
    pub fn dog(&self, id: Uuid) -> Option<&Dog> {
        self.dogs.iter().find(|d| d.id == id)
    }

    /// Move a dog to a room. Both ids must exist.
    pub fn assign_dog_to_room(&mut self, dog_id: Uuid, room_id: Uuid) -> KennelResult<()> {
        if self.room(room_id).is_none() {
            return Err(KennelError::invalid_input(
                "room_id",
                room_id.to_string(),
                "No such room in this facility",
            ));
        }
        let dog = self
            .dogs
            .iter_mut()
            .find(|d| d.id == dog_id)
            .ok_or_else(|| {
                KennelError::invalid_input(
                    "dog_id",
                    dog_id.to_string(),
                    "No such dog in this facility",
                )
            })?;
        dog.room_id = Some(room_id);
        self.touch();
        Ok(())
    }

    /// Occupancy analysis for every room in the facility.
    pub fn occupancy_overview(&self, target_day: Option<chrono::Weekday>) -> Vec<RoomOccupancy> {
        all_rooms_occupancy(&self.rooms, &self.dogs, target_day)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}
