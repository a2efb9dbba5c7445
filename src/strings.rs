//! String transformations and checks.
//!
//! Everything here is pure: the same input always gives the same output and
//! nothing panics. Only [`mask_email`] can fail.
//!
//! ## Examples
//!
//! ```rust
//! use utilkit::{camel_to_snake, slugify, snake_to_camel, to_title_case};
//!
//! assert_eq!(camel_to_snake("myVarName"), "my_var_name");
//! assert_eq!(snake_to_camel("my_var_name"), "myVarName");
//! assert_eq!(to_title_case("hello world"), "Hello World");
//! assert_eq!(slugify("Hello World!"), "hello-world");
//! ```

use crate::error::{Error, Result};
use crate::options::{PalindromeOptions, SlugOptions, TitleCaseOptions, TruncateOptions};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"));
static SNAKE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([a-z])").expect("valid regex"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]\S*").expect("valid regex"));
static SLUG_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s-]").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts camelCase to snake_case.
///
/// Only a lowercase letter followed by an uppercase one starts a new word, so
/// runs of capitals stay together.
///
/// # Examples
///
/// ```rust
/// use utilkit::camel_to_snake;
///
/// assert_eq!(camel_to_snake("helloWorld"), "hello_world");
/// assert_eq!(camel_to_snake("parseHTTPHeader"), "parse_httpheader");
/// ```
#[must_use]
pub fn camel_to_snake(s: &str) -> String {
    CAMEL_BOUNDARY.replace_all(s, "${1}_${2}").to_lowercase()
}

/// Converts camelCase to UPPER_SNAKE_CASE.
///
/// ```rust
/// assert_eq!(utilkit::camel_to_upper_snake("myVarName"), "MY_VAR_NAME");
/// ```
#[must_use]
pub fn camel_to_upper_snake(s: &str) -> String {
    CAMEL_BOUNDARY.replace_all(s, "${1}_${2}").to_uppercase()
}

/// Converts snake_case to camelCase.
///
/// An underscore is removed only when a lowercase ASCII letter follows it.
#[must_use]
pub fn snake_to_camel(s: &str) -> String {
    SNAKE_BOUNDARY
        .replace_all(s, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// Converts snake_case to PascalCase.
///
/// ```rust
/// assert_eq!(utilkit::snake_to_pascal("my_var_name"), "MyVarName");
/// ```
#[must_use]
pub fn snake_to_pascal(s: &str) -> String {
    upper_first(&snake_to_camel(s))
}

/// Capitalizes the first letter of each word and lowercases the rest.
#[must_use]
pub fn to_title_case(s: &str) -> String {
    to_title_case_with(s, &TitleCaseOptions::default())
}

/// Title-cases `s` according to `options`.
///
/// # Examples
///
/// ```rust
/// use utilkit::{to_title_case_with, TitleCaseOptions};
///
/// let keep = TitleCaseOptions::new().lowercase_rest(false);
/// assert_eq!(to_title_case_with("hElLo wOrLd", &keep), "HElLo WOrLd");
/// ```
#[must_use]
pub fn to_title_case_with(s: &str, options: &TitleCaseOptions) -> String {
    WORD.replace_all(s, |caps: &Captures<'_>| {
        let word = &caps[0];
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };
        let rest = chars.as_str();
        let mut out: String = first.to_uppercase().collect();
        if options.lowercase_rest {
            out.push_str(&rest.to_lowercase());
        } else {
            out.push_str(rest);
        }
        out
    })
    .into_owned()
}

/// Uppercases the first character and leaves the rest alone.
///
/// ```rust
/// assert_eq!(utilkit::capitalize("hello"), "Hello");
/// assert_eq!(utilkit::capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(s: &str) -> String {
    upper_first(s)
}

/// Turns `s` into a lowercase, dash-separated URL slug.
#[must_use]
pub fn slugify(s: &str) -> String {
    slugify_with(s, &SlugOptions::default())
}

/// Slugifies `s` according to `options`.
///
/// The input is trimmed, optionally lowercased, stripped of everything except
/// ASCII letters, digits, whitespace, and `-`, and each whitespace run is
/// replaced by the separator.
#[must_use]
pub fn slugify_with(s: &str, options: &SlugOptions) -> String {
    let trimmed = s.trim();
    let cased = if options.preserve_case {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    };
    let stripped = SLUG_STRIP.replace_all(&cased, "");
    WHITESPACE_RUN
        .replace_all(&stripped, options.separator.as_str())
        .into_owned()
}

/// Cuts `s` to at most `max_len` characters, ending on a word boundary, and
/// appends `...` if anything was cut.
///
/// ```rust
/// assert_eq!(utilkit::truncate_text("Hello world", 8), "Hello...");
/// assert_eq!(utilkit::truncate_text("Hello", 8), "Hello");
/// ```
#[must_use]
pub fn truncate_text(s: &str, max_len: usize) -> String {
    truncate_text_with(s, max_len, &TruncateOptions::default())
}

/// Truncates `s` according to `options`.
///
/// Lengths are counted in characters. The ellipsis is not counted against
/// `max_len`.
#[must_use]
pub fn truncate_text_with(s: &str, max_len: usize, options: &TruncateOptions) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let cut = match s.char_indices().nth(max_len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    };

    let kept = if options.preserve_words {
        match cut.rfind(' ') {
            Some(space) if space > 0 => &cut[..space],
            _ => cut,
        }
    } else {
        cut.trim_end()
    };

    format!("{}{}", kept, options.ellipsis)
}

/// Reverses the characters of `s`.
#[must_use]
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Counts whitespace-separated words.
///
/// Leading and trailing whitespace never counts as an extra empty word.
///
/// ```rust
/// assert_eq!(utilkit::count_words("  the quick   fox "), 3);
/// assert_eq!(utilkit::count_words("   "), 0);
/// ```
#[must_use]
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Collapses whitespace runs to single spaces and trims both ends.
#[must_use]
pub fn trim_extra_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Checks whether `s` reads the same backwards, ignoring case, spaces, and
/// punctuation.
///
/// ```rust
/// assert!(utilkit::is_palindrome("A man a plan a canal Panama"));
/// assert!(utilkit::is_palindrome("Madam"));
/// assert!(!utilkit::is_palindrome("hello"));
/// ```
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    is_palindrome_with(s, &PalindromeOptions::default())
}

/// Palindrome check according to `options`.
///
/// Punctuation is always dropped. With `ignore_spaces(false)` whitespace is
/// kept and must mirror too, so `"nurses run"` no longer matches.
#[must_use]
pub fn is_palindrome_with(s: &str, options: &PalindromeOptions) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || (!options.ignore_spaces && c.is_whitespace()))
        .map(|c| {
            if options.case_sensitive {
                c
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Loose email check: something, `@`, something, `.`, something, no spaces.
#[must_use]
pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Checks for an absolute `http` or `https` URL with a host.
///
/// ```rust
/// assert!(utilkit::is_url("https://www.example.com/path?q=1"));
/// assert!(!utilkit::is_url("ftp://example.com"));
/// assert!(!utilkit::is_url("not a url"));
/// ```
#[must_use]
pub fn is_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Masks an email's local part, keeping its first two characters.
///
/// # Errors
///
/// Returns [`Error::InvalidEmail`] if `email` fails [`is_email`].
///
/// # Examples
///
/// ```rust
/// assert_eq!(utilkit::mask_email("user@domain.com").unwrap(), "us**@domain.com");
/// assert!(utilkit::mask_email("nope").is_err());
/// ```
pub fn mask_email(email: &str) -> Result<String> {
    if !is_email(email) {
        return Err(Error::invalid_email(email));
    }
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| Error::invalid_email(email))?;
    let visible: String = local.chars().take(2).collect();
    Ok(format!("{visible}**@{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("myVarName"), "my_var_name");
        assert_eq!(camel_to_snake("already_snake"), "already_snake");
        assert_eq!(camel_to_snake(""), "");
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("my_var_name"), "myVarName");
        assert_eq!(snake_to_camel("trailing_"), "trailing_");
        assert_eq!(snake_to_camel("x_1"), "x_1");
    }

    #[test]
    fn test_title_case_lowercases_rest() {
        assert_eq!(to_title_case("hELLO wORLD"), "Hello World");
        assert_eq!(to_title_case("it's a dog-eat-dog world"), "It's A Dog-eat-dog World");
    }

    #[test]
    fn test_slugify_variants() {
        assert_eq!(slugify("  Rust  is   FUN  "), "rust-is-fun");
        assert_eq!(slugify("Crème brûlée"), "crme-brle");
        let options = SlugOptions::new().with_separator("_").preserve_case(true);
        assert_eq!(slugify_with("Hello World!", &options), "Hello_World");
    }

    #[test]
    fn test_truncate_without_space_keeps_cut() {
        assert_eq!(truncate_text("Supercalifragilistic", 5), "Super...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_text_with("héllo wörld", 4, &TruncateOptions::new().preserve_words(false)), "héll...");
    }

    #[test]
    fn test_reverse_unicode() {
        assert_eq!(reverse_string("añb"), "bña");
    }

    #[test]
    fn test_trim_extra_spaces() {
        assert_eq!(trim_extra_spaces("  Hello \t\n  world  "), "Hello world");
    }

    #[test]
    fn test_count_words_ignores_edge_whitespace() {
        assert_eq!(count_words(" leading"), 1);
        assert_eq!(count_words("trailing\n"), 1);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_palindrome_options() {
        let strict = PalindromeOptions::new().case_sensitive(true);
        assert!(!is_palindrome_with("Racecar", &strict));
        assert!(is_palindrome_with("racecar", &strict));

        let spaced = PalindromeOptions::new().ignore_spaces(false);
        assert!(!is_palindrome_with("nurses run", &spaced));
        assert!(is_palindrome("nurses run"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("user@domain.com"));
        assert!(!is_email("user@domain"));
        assert!(!is_email("us er@domain.com"));
        assert!(!is_email("a@b@c.com"));
    }

    #[test]
    fn test_mask_email_short_local() {
        assert_eq!(mask_email("a@b.io").unwrap(), "a**@b.io");
        assert!(matches!(mask_email("x"), Err(Error::InvalidEmail(_))));
    }
}
