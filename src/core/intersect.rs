// intersect.rs - Order-preserving set intersection of identifier lists

use std::collections::HashSet;
use std::hash::Hash;

/// Intersect two identifier sequences.
///
/// The result follows the iteration order of the longer input, filtered by
/// membership in a hash set built from the shorter one. When both inputs
/// have the same length the second argument is treated as the longer side.
/// Duplicates are not suppressed: an element repeated on the longer side
/// appears as many times in the result.
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    // Equal lengths: hash `a`, scan `b`
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let table: HashSet<&T> = short.iter().collect();
    long.iter()
        .filter(|elem| table.contains(elem))
        .cloned()
        .collect()
}

/// Size of the intersection without materializing it.
///
/// Both inputs are expected to be free of duplicates, which holds for every
/// individual's variant list.
pub fn intersect_len<T>(a: &[T], b: &[T]) -> usize
where
    T: Eq + Hash,
{
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let table: HashSet<&T> = short.iter().collect();
    long.iter().filter(|elem| table.contains(elem)).count()
}
