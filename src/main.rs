//! NOAA Station Data Refresh - Entry Point
//!
//! A one-shot utility that:
//! 1. Downloads the NDBC station table and keeps the buoy rows
//! 2. Downloads the Tides & Currents tide-prediction station listing
//! 3. Writes both as pretty-printed JSON next to the executable
//!
//! The two flows run strictly one after another. A failure in either is
//! logged and does not stop the other, and the process exits 0 either way;
//! the client application treats a stale file the same as a missing one.
//!
//! Usage:
//!   cargo run --release        # No arguments, no configuration

use stationgen::output;
use stationgen::refresh;

fn main() {
    println!("🌊 NOAA Station Data Refresh");
    println!("============================\n");

    let client = reqwest::blocking::Client::new();
    let out_dir = output::default_output_dir();
    println!("📁 Output directory: {}\n", out_dir.display());

    // Buoys first, tide stations only after the buoy flow has fully
    // completed or failed.
    println!("📥 Generating buoy station list...");
    match refresh::generate_buoys(&client, &out_dir) {
        Ok(summary) => println!("   ✓ {}", summary),
        Err(e) => eprintln!("   ✗ {}", e),
    }

    println!("\n📥 Generating tide station list...");
    match refresh::generate_tide_stations(&client, &out_dir) {
        Ok(summary) => println!("   ✓ {}", summary),
        Err(e) => eprintln!("   ✗ {}", e),
    }

    println!("\nDone.");
}
