//! # utilkit
//!
//! Small, independent utilities for everyday application code, plus two
//! rate-limiting wrappers.
//!
//! ## What's Inside
//!
//! - **Rate limiting**: [`Debounced`] runs an action once calls stop;
//!   [`Throttled`] runs it at most once per interval
//! - **Strings**: case conversion, slugs, truncation, palindrome/email/URL
//!   checks, email masking
//! - **Conversions**: byte sizes, durations, angles, temperatures, hex/RGB colors
//! - **Dates**: relative time ("3 days ago"), differences, simple formatting
//! - **Random**: UUIDs, colors, strings, secure tokens, with injectable generators
//! - **Collections**: shuffle, de-duplicate, deep clone, deep equality
//! - **Adapters**: clipboard and JSON key-value storage behind swappable providers
//!
//! Every function is stateless except the two wrappers, and every fallible
//! function returns [`Result`] with the crate's [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use utilkit::{bytes_to_human_readable, camel_to_snake, hex_to_rgb, Rgb};
//!
//! assert_eq!(camel_to_snake("myVarName"), "my_var_name");
//! assert_eq!(bytes_to_human_readable(1024), "1.00 KB");
//! assert_eq!(hex_to_rgb("#ffffff")?, Rgb { r: 255, g: 255, b: 255 });
//! # Ok::<(), utilkit::Error>(())
//! ```
//!
//! ### Throttling
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//! use utilkit::{ManualClock, Throttled};
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&runs);
//! let clock = ManualClock::new();
//! let save = Throttled::with_clock(
//!     move |_: ()| { counter.fetch_add(1, Ordering::SeqCst); },
//!     Duration::from_millis(500),
//!     clock.clone(),
//! );
//!
//! save.call(());
//! save.call(());
//! clock.advance(Duration::from_millis(500));
//! save.call(());
//! assert_eq!(runs.load(Ordering::SeqCst), 2);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `trace`/`debug` for rate-limiter decisions,
//! `info`/`error` for clipboard and storage outcomes. Install any subscriber
//! to see them.
//!
//! ## Feature Flags
//!
//! - **`system-clipboard`** (default): [`SystemClipboard`] backed by the
//!   operating system clipboard
//!
//! ## Examples
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`rate_limiting.rs`** - debounce and throttle side by side
//! - **`everyday.rs`** - a tour of the string, conversion, date, and storage helpers
//!
//! Run any of them with: `cargo run --example <name>`

pub mod arrays;
pub mod clipboard;
pub mod clock;
pub mod conversions;
pub mod data;
pub mod dates;
pub mod debounce;
pub mod error;
pub mod options;
pub mod random;
pub mod storage;
pub mod strings;
pub mod throttle;

pub use arrays::{shuffle_array, shuffle_array_with, unique_array, unique_array_by_key};
#[cfg(feature = "system-clipboard")]
pub use clipboard::{copy_to_system_clipboard, SystemClipboard};
pub use clipboard::{copy_to_clipboard, ClipboardProvider, MemoryClipboard};
pub use clock::{Clock, ManualClock, SystemClock};
pub use conversions::{
    bytes_to_human_readable, celsius_to_fahrenheit, deg_to_rad, fahrenheit_to_celsius,
    hex_to_rgb, human_readable_to_bytes, ms_to_time, rad_to_deg, rgb_to_hex, Rgb,
};
pub use data::{deep_clone, deep_equal, deep_equal_serialized};
pub use dates::{
    format_date, get_time_diff, is_leap_year, parse_date, time_ago, time_ago_since, TimeDiff,
};
pub use debounce::{debounce, Debounced};
pub use error::{Error, Result};
pub use options::{
    PalindromeOptions, RandomStringOptions, SlugOptions, TitleCaseOptions, TruncateOptions,
};
pub use random::{
    generate_random_string, generate_random_string_with, generate_token_base64,
    generate_token_base64_with, random_hex_color, random_hex_color_with, random_uuid,
    random_uuid_with,
};
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageBackend};
pub use strings::{
    camel_to_snake, camel_to_upper_snake, capitalize, count_words, is_email, is_palindrome,
    is_palindrome_with, is_url, mask_email, reverse_string, slugify, slugify_with,
    snake_to_camel, snake_to_pascal, to_title_case, to_title_case_with, trim_extra_spaces,
    truncate_text, truncate_text_with,
};
pub use throttle::{throttle, Throttled};
