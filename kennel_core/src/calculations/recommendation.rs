//! # Room Placement Recommendation
//!
//! Ranks candidate rooms for a new dog by simulating the placement and
//! scoring the resulting occupancy.
//!
//! ## Scoring
//!
//! | Simulated result              | Score | Reason                       |
//! |-------------------------------|-------|------------------------------|
//! | Violation                     | 0     | would exceed the regulation  |
//! | Warning                       | 3     | possible but near the limit  |
//! | Compliant, occupancy < 50 %   | 10    | excellent, plenty of room    |
//! | Compliant, occupancy < 70 %   | 8     | good, balanced occupancy     |
//! | Compliant, otherwise          | 6     | ok, will be quite full       |
//!
//! Ties on score are broken by resulting occupancy percentage, emptier
//! room first, so the ranking is a deterministic total order.

use serde::{Deserialize, Serialize};

use crate::calculations::occupancy::{room_occupancy, ComplianceStatus, Dog, Room, RoomOccupancy};

/// One ranked placement candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecommendation {
    pub room: Room,

    /// Occupancy as it would look with the new dog added
    pub occupancy: RoomOccupancy,

    /// 0 (illegal) to 10 (plenty of room)
    pub recommendation_score: u32,

    pub reason: String,
}

/// Rank every room for placing `new_dog`, best first.
///
/// Each room's current dog set is taken from `all_dogs` by `room_id`; the
/// new dog is simulated as checked in on top of it. Simulation treats every
/// assigned dog as present, so the ranking reflects the worst case of all
/// assigned dogs attending at once.
pub fn recommend_room_for_dog(
    rooms: &[Room],
    all_dogs: &[Dog],
    new_dog: &Dog,
) -> Vec<RoomRecommendation> {
    let mut recommendations: Vec<RoomRecommendation> = rooms
        .iter()
        .map(|room| {
            let mut simulated: Vec<Dog> = all_dogs
                .iter()
                .filter(|dog| dog.room_id == Some(room.id))
                .cloned()
                .map(|mut dog| {
                    dog.checked_in = true;
                    dog
                })
                .collect();
            let mut candidate = new_dog.clone();
            candidate.checked_in = true;
            simulated.push(candidate);

            let occupancy = room_occupancy(room, &simulated, None);
            let (recommendation_score, reason) = score(&occupancy);

            RoomRecommendation {
                room: room.clone(),
                occupancy,
                recommendation_score,
                reason: reason.to_string(),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.recommendation_score
            .cmp(&a.recommendation_score)
            .then(a.occupancy.occupancy_percentage.cmp(&b.occupancy.occupancy_percentage))
    });
    recommendations
}

fn score(simulated: &RoomOccupancy) -> (u32, &'static str) {
    match simulated.compliance_status {
        ComplianceStatus::Violation => (0, "Would exceed the SJVFS space requirements"),
        ComplianceStatus::Warning => (3, "Possible but near the limit"),
        ComplianceStatus::Compliant => match simulated.occupancy_percentage {
            p if p < 50 => (10, "Excellent - plenty of room"),
            p if p < 70 => (8, "Good - balanced occupancy"),
            _ => (6, "OK - will be quite full"),
        },
    }
}
