//! Configuration options for the string and random-string utilities.
//!
//! Functions with a simple default form (for example [`slugify`](crate::slugify))
//! also have a `_with` form that takes one of these option structs:
//!
//! - [`SlugOptions`]: separator and case handling for slugs
//! - [`TruncateOptions`]: ellipsis and word preservation for truncation
//! - [`TitleCaseOptions`]: whether title casing lowercases the rest of each word
//! - [`PalindromeOptions`]: case and whitespace handling for palindrome checks
//! - [`RandomStringOptions`]: character classes for random strings
//!
//! ## Examples
//!
//! ```rust
//! use utilkit::{slugify_with, truncate_text_with, SlugOptions, TruncateOptions};
//!
//! let options = SlugOptions::new().with_separator('_').preserve_case(true);
//! assert_eq!(slugify_with("Hello World!", &options), "Hello_World");
//!
//! let options = TruncateOptions::new().with_ellipsis("..").preserve_words(false);
//! assert_eq!(truncate_text_with("Hello world", 8, &options), "Hello wo..");
//! ```

/// Options for [`slugify_with`](crate::slugify_with).
///
/// # Examples
///
/// ```rust
/// use utilkit::SlugOptions;
///
/// let options = SlugOptions::default();
/// assert_eq!(options.separator, "-");
/// assert!(!options.preserve_case);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugOptions {
    pub separator: String,
    pub preserve_case: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        SlugOptions {
            separator: "-".to_string(),
            preserve_case: false,
        }
    }
}

impl SlugOptions {
    /// Creates default options (`-` separator, lowercased output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator that replaces runs of whitespace.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Keeps the original letter case instead of lowercasing.
    #[must_use]
    pub fn preserve_case(mut self, preserve: bool) -> Self {
        self.preserve_case = preserve;
        self
    }
}

/// Options for [`truncate_text_with`](crate::truncate_text_with).
///
/// With `preserve_words` set (the default), the cut moves back to the last
/// space inside the limit so words are not split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruncateOptions {
    pub ellipsis: String,
    pub preserve_words: bool,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        TruncateOptions {
            ellipsis: "...".to_string(),
            preserve_words: true,
        }
    }
}

impl TruncateOptions {
    /// Creates default options (`...` ellipsis, whole words kept).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text appended after a cut.
    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Sets whether the cut snaps back to a word boundary.
    #[must_use]
    pub fn preserve_words(mut self, preserve: bool) -> Self {
        self.preserve_words = preserve;
        self
    }
}

/// Options for [`to_title_case_with`](crate::to_title_case_with).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleCaseOptions {
    pub lowercase_rest: bool,
}

impl Default for TitleCaseOptions {
    fn default() -> Self {
        TitleCaseOptions {
            lowercase_rest: true,
        }
    }
}

impl TitleCaseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether letters after the first of each word are lowercased.
    #[must_use]
    pub fn lowercase_rest(mut self, lowercase: bool) -> Self {
        self.lowercase_rest = lowercase;
        self
    }
}

/// Options for [`is_palindrome_with`](crate::is_palindrome_with).
///
/// Punctuation is always ignored. Whitespace is ignored unless
/// `ignore_spaces` is turned off.
///
/// # Examples
///
/// ```rust
/// use utilkit::{is_palindrome_with, PalindromeOptions};
///
/// let strict = PalindromeOptions::new().case_sensitive(true);
/// assert!(!is_palindrome_with("Racecar", &strict));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PalindromeOptions {
    pub case_sensitive: bool,
    pub ignore_spaces: bool,
}

impl Default for PalindromeOptions {
    fn default() -> Self {
        PalindromeOptions {
            case_sensitive: false,
            ignore_spaces: true,
        }
    }
}

impl PalindromeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    #[must_use]
    pub fn ignore_spaces(mut self, ignore: bool) -> Self {
        self.ignore_spaces = ignore;
        self
    }
}

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Options for [`generate_random_string`](crate::generate_random_string).
///
/// When `custom_chars` is set and non-empty it replaces the built-in
/// character classes entirely.
///
/// # Examples
///
/// ```rust
/// use utilkit::RandomStringOptions;
///
/// let options = RandomStringOptions::new().include_numbers(false);
/// assert_eq!(options.charset().len(), 52);
///
/// let options = RandomStringOptions::new().with_custom_chars("01");
/// assert_eq!(options.charset(), vec!['0', '1']);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomStringOptions {
    pub include_numbers: bool,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub custom_chars: Option<String>,
}

impl Default for RandomStringOptions {
    fn default() -> Self {
        RandomStringOptions {
            include_numbers: true,
            include_uppercase: true,
            include_lowercase: true,
            custom_chars: None,
        }
    }
}

impl RandomStringOptions {
    /// Creates default options (uppercase, lowercase, and digits).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include_numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self
    }

    #[must_use]
    pub fn include_uppercase(mut self, include: bool) -> Self {
        self.include_uppercase = include;
        self
    }

    #[must_use]
    pub fn include_lowercase(mut self, include: bool) -> Self {
        self.include_lowercase = include;
        self
    }

    /// Uses exactly these characters instead of the built-in classes.
    #[must_use]
    pub fn with_custom_chars(mut self, chars: impl Into<String>) -> Self {
        self.custom_chars = Some(chars.into());
        self
    }

    /// Returns the characters a random string is drawn from.
    ///
    /// May be empty; the generator rejects an empty set.
    #[must_use]
    pub fn charset(&self) -> Vec<char> {
        if let Some(custom) = self.custom_chars.as_deref().filter(|c| !c.is_empty()) {
            return custom.chars().collect();
        }

        let mut chars = String::new();
        if self.include_uppercase {
            chars.push_str(UPPERCASE);
        }
        if self.include_lowercase {
            chars.push_str(LOWERCASE);
        }
        if self.include_numbers {
            chars.push_str(DIGITS);
        }
        chars.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_order_and_size() {
        let charset = RandomStringOptions::default().charset();
        assert_eq!(charset.len(), 62);
        assert_eq!(charset[0], 'A');
        assert_eq!(charset[61], '9');
    }

    #[test]
    fn test_empty_custom_chars_falls_back() {
        let options = RandomStringOptions::new()
            .with_custom_chars("")
            .include_uppercase(false)
            .include_lowercase(false);
        assert_eq!(options.charset().len(), 10);
    }

    #[test]
    fn test_everything_disabled_is_empty() {
        let options = RandomStringOptions::new()
            .include_numbers(false)
            .include_uppercase(false)
            .include_lowercase(false);
        assert!(options.charset().is_empty());
    }
}
