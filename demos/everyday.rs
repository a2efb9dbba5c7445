//! A tour of the string, conversion, date, random, and storage helpers.
//!
//! Run with: cargo run --example everyday

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use utilkit::{
    bytes_to_human_readable, camel_to_snake, celsius_to_fahrenheit, copy_to_clipboard,
    deep_clone, deep_equal_serialized, format_date, generate_random_string, generate_token_base64,
    get_time_diff, hex_to_rgb, is_email, mask_email, ms_to_time, random_hex_color, random_uuid,
    shuffle_array, slugify, time_ago, truncate_text, unique_array, LocalStorage, MemoryClipboard,
    MemoryStorage, RandomStringOptions,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Settings {
    theme: String,
    accent: String,
    recent_files: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    println!("Strings:");
    println!("  {}", camel_to_snake("userAccountId"));
    println!("  {}", slugify("Hello, World! Rust Edition"));
    println!("  {}", truncate_text("The quick brown fox jumps over the lazy dog", 20));
    println!("  valid email: {}", is_email("ada@example.com"));
    println!("  masked: {}\n", mask_email("ada@example.com")?);

    println!("Conversions:");
    println!("  {}", bytes_to_human_readable(1_337_420));
    println!("  {}", ms_to_time(125_000));
    println!("  20°C = {}°F", celsius_to_fahrenheit(20.0));
    println!("  {:?}\n", hex_to_rgb("#1e90ff")?);

    println!("Dates:");
    let now = Utc::now();
    let started = now - Duration::hours(26) - Duration::minutes(3);
    println!("  started {}", time_ago(started, now));
    println!("  elapsed {}", get_time_diff(started, now));
    println!("  today is {}\n", format_date(&now, "DD/MM/YYYY"));

    println!("Random:");
    println!("  uuid {}", random_uuid());
    println!("  color {}", random_hex_color());
    let pin_options = RandomStringOptions::new()
        .include_uppercase(false)
        .include_lowercase(false);
    println!("  pin {}", generate_random_string(6, &pin_options)?);
    println!("  token {}\n", generate_token_base64(24)?);

    println!("Collections:");
    println!("  {:?}", unique_array(&[3, 1, 3, 2, 1]));
    println!("  {:?}\n", shuffle_array(&["a", "b", "c", "d"]));

    let settings = Settings {
        theme: "dark".to_string(),
        accent: random_hex_color(),
        recent_files: vec!["notes.md".to_string()],
    };
    let copy = deep_clone(&settings)?;
    assert!(deep_equal_serialized(&settings, &copy)?);

    let storage = LocalStorage::new(MemoryStorage::new());
    storage.set("settings", &settings);
    let loaded: Option<Settings> = storage.get("settings");
    println!("Storage round trip: {}", loaded.as_ref() == Some(&settings));

    let mut clipboard = MemoryClipboard::new();
    if copy_to_clipboard(&mut clipboard, &settings.accent) {
        println!("Copied accent {} to clipboard", settings.accent);
    }

    Ok(())
}
