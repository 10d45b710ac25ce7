//! Longest common prefix of a candidate set.

/// Longest string that prefixes every key.
///
/// Folds pairwise from the first key, comparing character by character
/// and stopping at the first mismatch or at the end of the shorter key.
/// An empty set has an empty prefix.
pub fn common_prefix<I, S>(keys: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keys = keys.into_iter();
    let Some(first) = keys.next() else {
        return String::new();
    };

    let mut prefix = first.as_ref().to_string();
    for key in keys {
        let shared: usize = prefix
            .chars()
            .zip(key.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}
