//! # File I/O Module
//!
//! Handles facility file operations with safety features:
//! - **Atomic saves**: Write to .tmp, verify, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//!
//! ## File Format
//!
//! Facilities are saved as `.kennel` files containing human-readable JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kennel_core::file_io::{save_facility, load_facility};
//! use kennel_core::facility::Facility;
//! use std::path::Path;
//!
//! let facility = Facility::new("Glada Tassar AB");
//! let path = Path::new("glada_tassar.kennel");
//!
//! save_facility(&facility, path).unwrap();
//! let loaded = load_facility(path).unwrap();
//! ```

use std::fs;
use std::path::Path;

use crate::errors::{KennelError, KennelResult};
use crate::facility::{Facility, SCHEMA_VERSION};

/// Save a facility to disk atomically.
///
/// Writes to a `.tmp` sibling, verifies the JSON parses back, then renames
/// over the target so a crash mid-write never leaves a corrupt file.
pub fn save_facility(facility: &Facility, path: &Path) -> KennelResult<()> {
    let json = serde_json::to_string_pretty(facility).map_err(|e| {
        KennelError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let tmp_path = path.with_extension("kennel.tmp");

    fs::write(&tmp_path, &json).map_err(|e| {
        KennelError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;

    // Verify the temp file is valid before replacing the target
    let written = fs::read_to_string(&tmp_path).map_err(|e| {
        KennelError::file_error("verify", tmp_path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str::<Facility>(&written).map_err(|e| {
        KennelError::SerializationError {
            reason: format!("verification of written file failed: {}", e),
        }
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        KennelError::file_error("rename", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a facility from disk, validating the schema version.
pub fn load_facility(path: &Path) -> KennelResult<Facility> {
    let json = fs::read_to_string(path).map_err(|e| {
        KennelError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let facility: Facility = serde_json::from_str(&json).map_err(|e| {
        KennelError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    if facility.meta.version != SCHEMA_VERSION {
        return Err(KennelError::VersionMismatch {
            file_version: facility.meta.version,
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(facility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    use crate::calculations::occupancy::{Dog, Room, RoomType};
    use crate::units::{Centimeters, SquareMeters};

    fn temp_facility_path(name: &str) -> PathBuf {
        temp_dir().join(format!("kennelvy_test_{}.kennel", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_facility_path("roundtrip");

        let mut facility = Facility::new("Roundtrip AB");
        let room_id = facility.add_room(Room::new(
            "Rum 1",
            SquareMeters(12.0),
            RoomType::Both,
        ));
        facility.add_dog(Dog::new("Sigge").with_height(Centimeters(38.0)).in_room(room_id));

        save_facility(&facility, &path).unwrap();
        let loaded = load_facility(&path).unwrap();

        assert_eq!(loaded.meta.organisation, "Roundtrip AB");
        assert_eq!(loaded.rooms.len(), 1);
        assert_eq!(loaded.dogs.len(), 1);
        assert_eq!(loaded.dogs[0].height_cm, Some(Centimeters(38.0)));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let err = load_facility(Path::new("/nonexistent/nowhere.kennel")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_rejects_version_mismatch() {
        let path = temp_facility_path("version");

        let mut facility = Facility::new("Gammal AB");
        facility.meta.version = "0.0.1".to_string();
        let json = serde_json::to_string_pretty(&facility).unwrap();
        fs::write(&path, json).unwrap();

        let err = load_facility(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let path = temp_facility_path("garbage");
        fs::write(&path, "not json at all").unwrap();

        let err = load_facility(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
