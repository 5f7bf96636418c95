use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value and its count.
///
/// Ties resolve to the value that appears first in the input, so
/// results stay deterministic on small datasets. Returns `None` for
/// empty input.
pub fn most_frequent<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut first_seen: HashMap<T, usize> = HashMap::new();
    for (position, value) in values.into_iter().enumerate() {
        *counts.entry(value).or_insert(0) += 1;
        first_seen.entry(value).or_insert(position);
    }

    counts
        .into_iter()
        .min_by_key(|&(value, count)| (Reverse(count), first_seen[&value]))
}
