//! # Kennelvy CLI Application
//!
//! Terminal interface for the kennel capacity engine. Prompts for a room
//! and its dogs, then prints the SJVFS occupancy analysis as both a human
//! report and JSON.

use std::io::{self, BufRead, Write};

use kennel_core::calculations::occupancy::{room_occupancy, ComplianceStatus, Dog, Room, RoomType};
use kennel_core::regulations::SizeClass;
use kennel_core::units::{Centimeters, SquareMeters};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn status_icon(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Compliant => "✓",
        ComplianceStatus::Warning => "⚠",
        ComplianceStatus::Violation => "✗",
    }
}

fn main() {
    println!("Kennelvy CLI - SJVFS 2019:2 Room Capacity Calculator");
    println!("====================================================");
    println!();

    let capacity_m2 = prompt_f64("Enter room floor area (m²) [10.0]: ", 10.0);
    let dog_count = prompt_usize("Enter number of dogs [3]: ", 3);

    let mut dogs = Vec::with_capacity(dog_count);
    for n in 1..=dog_count {
        let height = prompt_f64(
            &format!("Withers height of dog {} (cm) [30.0]: ", n),
            30.0,
        );
        dogs.push(
            Dog::new(format!("Dog {}", n))
                .with_height(Centimeters(height))
                .checked_in(),
        );
    }

    let room = Room::new("CLI Room", SquareMeters(capacity_m2), RoomType::Daycare);
    let result = room_occupancy(&room, &dogs, None);

    println!();
    println!("═══════════════════════════════════════");
    println!("  ROOM OCCUPANCY RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Floor area:  {:.1} m²", capacity_m2);
    println!("  Dogs:        {}", result.dogs_count);
    println!();
    println!("Space Requirement:");
    println!("  Required:    {:.1} m²", result.required_m2.value());
    println!("  Available:   {:.1} m²", result.available_m2.value());
    println!("  Occupancy:   {}%", result.occupancy_percentage);
    println!("  More dogs:   {} (same-size scenario)", result.max_additional_dogs);
    println!();
    println!("Theoretical maxima for this room:");
    for class in SizeClass::ALL {
        println!(
            "  {:<26} {}",
            class.display_name(),
            class.max_dogs_for_area(SquareMeters(capacity_m2))
        );
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} {:?}",
        status_icon(result.compliance_status),
        result.compliance_status
    );
    println!("  {}", result.compliance_message);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}
