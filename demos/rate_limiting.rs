//! Debounce and throttle side by side.
//!
//! Run with: cargo run --example rate_limiting
//! Set RUST_LOG=utilkit=trace to watch each decision.

use std::error::Error;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use utilkit::{debounce, throttle};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A search box: only the last keystroke in a burst triggers a lookup
    let search = debounce(|query: String| println!("searching for {:?}", query), 200)?;
    for query in ["r", "ru", "rus", "rust"] {
        println!("typed {:?}", query);
        search.call(query.to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    tokio::time::sleep(Duration::from_millis(250)).await;

    // Cancelled before the delay runs out, so nothing is printed
    search.call("never sent".to_string());
    search.cancel();

    // Flushing runs the pending call right away
    search.call("flushed".to_string());
    search.flush();

    // A scroll handler: at most one update every 100ms
    let on_scroll = throttle(|offset: u32| println!("scroll position {}", offset), 100)?;
    for offset in (0..600).step_by(20) {
        let ran = on_scroll.call(offset);
        if !ran {
            println!("  dropped {}", offset);
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    Ok(())
}
