//! Checkpoint and Resume
//!
//! This example captures a calculator mid-expression, stores the checkpoint,
//! and resumes the session in a new calculator.
//!
//! Key concepts:
//! - Checkpoints carry the registers, both screen texts, config and transition log
//! - Serialization formats (JSON for readability, bincode for compactness)
//! - Validation on decode rejects unknown versions and broken registers
//! - A rejected restore leaves the calculator untouched
//!
//! Run with: cargo run --example checkpoint_resume

use std::fs;
use tallyho::{Calculator, Checkpoint, State};

fn main() {
    println!("=== Checkpoint and Resume Example ===\n");

    // Start a session and stop partway through an expression
    let mut calc = Calculator::new();
    calc.press_keys(["1", "2", "0", "+", "3", "5"]).unwrap();
    println!("Session before checkpoint:");
    println!("  history: {:?}", calc.history_text());
    println!("  display: {:?}", calc.display_text());
    println!("  phase:   {}", calc.phase().name());

    let checkpoint = calc.checkpoint();
    println!("\nCreated checkpoint {}", checkpoint.id);

    // JSON
    let json = checkpoint.to_json().unwrap();
    let dir = std::env::temp_dir().join("tallyho-checkpoints");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}.json", checkpoint.id));
    fs::write(&path, &json).unwrap();
    println!("  JSON:    {} bytes -> {}", json.len(), path.display());

    // Binary
    let bytes = checkpoint.to_bytes().unwrap();
    println!("  bincode: {} bytes", bytes.len());

    // Simulate a restart: a fresh calculator picks the session back up
    println!("\nResuming from the JSON file...");
    let loaded = Checkpoint::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    let mut resumed = Calculator::new();
    resumed.restore(loaded).unwrap();
    println!("  history: {:?}", resumed.history_text());
    println!("  display: {:?}", resumed.display_text());

    resumed.press_keys(["*", "2", "="]).unwrap();
    println!("\nAfter * 2 =:");
    println!("  history: {:?}", resumed.history_text());
    println!("  display: {:?}", resumed.display_text());
    println!("  transitions carried over: {}", resumed.transitions().len());

    // The binary form resumes the same way
    let from_bytes = Checkpoint::from_bytes(&bytes).unwrap();
    println!(
        "\nDecoded bincode checkpoint {} with entry {:?}",
        from_bytes.id,
        from_bytes.registers.entry()
    );

    // A checkpoint from a newer format is refused
    println!("\nRestoring an unsupported checkpoint:");
    let mut stale = calc.checkpoint();
    stale.version += 1;
    match resumed.restore(stale) {
        Ok(()) => println!("  restored"),
        Err(e) => println!("  rejected: {}", e),
    }
    println!("  calculator still shows {:?}", resumed.display_text());

    // Cleanup
    fs::remove_dir_all(&dir).ok();

    println!("\nKey Takeaways:");
    println!("- A checkpoint is a plain value; the calculator itself persists nothing");
    println!("- JSON checkpoints are human-readable, bincode ones are compact");
    println!("- Restores are validated before any state is replaced");

    println!("\n=== Example Complete ===");
}
