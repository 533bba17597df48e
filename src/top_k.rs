use std::collections::BinaryHeap;

/// `(key, visits)` pairs, most visited first.
pub type RankedList = Vec<(String, u64)>;

/// Selects the `k` entries with the highest visit counts.
///
/// Entries are ordered by `(visits, key)`, so equal counts come out in
/// descending key order. Returns fewer than `k` items when fewer exist.
pub fn top_k<'a, I>(entries: I, k: usize) -> RankedList
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<(u64, &str)> = entries
        .into_iter()
        .map(|(key, visits)| (visits, key))
        .collect();

    let mut ranked = Vec::with_capacity(k.min(heap.len()));
    while ranked.len() < k {
        match heap.pop() {
            Some((visits, key)) => ranked.push((key.to_owned(), visits)),
            None => break,
        }
    }
    ranked
}
