//! Shuffling and de-duplication.

use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Returns a uniformly shuffled copy of `items`.
///
/// ```rust
/// let mut shuffled = utilkit::shuffle_array(&[1, 2, 3, 4]);
/// shuffled.sort();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn shuffle_array<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_array_with(&mut rand::thread_rng(), items)
}

/// Returns a copy of `items` shuffled with `rng` (Fisher-Yates).
pub fn shuffle_array_with<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Removes duplicates, keeping the first occurrence of each value in its
/// original position.
///
/// ```rust
/// assert_eq!(utilkit::unique_array(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
#[must_use]
pub fn unique_array<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}

/// Removes items whose key was already seen, keeping first occurrences.
///
/// Useful for values that are not `Hash` themselves, such as floats or
/// records compared by one field.
///
/// ```rust
/// let words = ["apple", "Avocado", "banana", "blueberry"];
/// let by_initial = utilkit::unique_array_by_key(&words, |w| w.to_ascii_lowercase().chars().next());
/// assert_eq!(by_initial, vec!["apple", "banana"]);
/// ```
pub fn unique_array_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}
