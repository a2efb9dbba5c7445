//! Random identifiers, colors, strings, and tokens.
//!
//! Each generator has a plain form that uses the thread-local generator and a
//! `_with` form that takes any [`rand::Rng`], so tests can pass a seeded
//! [`StdRng`](rand::rngs::StdRng) and get repeatable output.
//!
//! Tokens are the exception: [`generate_token_base64`] always reads the
//! operating system's secure random source, and the `_with` form only accepts
//! generators marked [`CryptoRng`].
//!
//! ## Examples
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use utilkit::{generate_random_string_with, RandomStringOptions};
//!
//! let options = RandomStringOptions::new();
//! let a = generate_random_string_with(&mut StdRng::seed_from_u64(7), 12, &options)?;
//! let b = generate_random_string_with(&mut StdRng::seed_from_u64(7), 12, &options)?;
//! assert_eq!(a, b);
//! # Ok::<(), utilkit::Error>(())
//! ```

use crate::conversions::Rgb;
use crate::error::{Error, Result};
use crate::options::RandomStringOptions;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use uuid::Uuid;

/// Generates a random version 4 UUID.
///
/// ```rust
/// let id = utilkit::random_uuid();
/// assert_eq!(id.get_version_num(), 4);
/// assert_eq!(id.to_string().len(), 36);
/// ```
#[must_use]
pub fn random_uuid() -> Uuid {
    random_uuid_with(&mut rand::thread_rng())
}

/// Generates a version 4 UUID from `rng`.
pub fn random_uuid_with<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Generates a random `#rrggbb` color.
#[must_use]
pub fn random_hex_color() -> String {
    random_hex_color_with(&mut rand::thread_rng())
}

pub fn random_hex_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    Rgb::from_u32(rng.gen_range(0..=0x00ff_ffff)).to_hex()
}

/// Generates `len` characters drawn uniformly from the option's charset.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the options leave no characters to
/// draw from.
///
/// # Examples
///
/// ```rust
/// use utilkit::{generate_random_string, RandomStringOptions};
///
/// let pin = generate_random_string(6, &RandomStringOptions::new().with_custom_chars("0123456789"))?;
/// assert_eq!(pin.len(), 6);
/// assert!(pin.chars().all(|c| c.is_ascii_digit()));
/// # Ok::<(), utilkit::Error>(())
/// ```
pub fn generate_random_string(len: usize, options: &RandomStringOptions) -> Result<String> {
    generate_random_string_with(&mut rand::thread_rng(), len, options)
}

pub fn generate_random_string_with<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    options: &RandomStringOptions,
) -> Result<String> {
    let charset = options.charset();
    if charset.is_empty() {
        return Err(Error::invalid_argument(
            "no character set available for string generation",
        ));
    }

    Ok((0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect())
}

/// Generates `byte_len` secure random bytes, base64 encoded (standard
/// alphabet, padded).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `byte_len` is zero and
/// [`Error::UnavailableSecureRandom`] when the operating system cannot
/// provide secure randomness.
///
/// ```rust
/// let token = utilkit::generate_token_base64(32)?;
/// assert_eq!(token.len(), 44);
/// # Ok::<(), utilkit::Error>(())
/// ```
pub fn generate_token_base64(byte_len: usize) -> Result<String> {
    generate_token_base64_with(&mut OsRng, byte_len)
}

/// Same as [`generate_token_base64`], reading from a caller-supplied secure
/// generator.
pub fn generate_token_base64_with<R>(rng: &mut R, byte_len: usize) -> Result<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if byte_len == 0 {
        return Err(Error::invalid_argument("token length must be at least one byte"));
    }

    let mut bytes = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut bytes).map_err(|err| {
        tracing::error!(error = %err, "secure random source failed");
        Error::unavailable_secure_random(err)
    })?;
    Ok(STANDARD.encode(bytes))
}
