use crate::tables::FrequencyTable;
use anyhow::{Result, bail};

const DJB2_SEED: u64 = 5381;

/// DJB2 over raw bytes with wrapping 64-bit arithmetic.
#[inline]
pub fn djb2(key: &[u8]) -> u64 {
    key.iter().fold(DJB2_SEED, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(byte as u64)
    })
}

/// Maps `key` to a bucket in `[0, bucket_count)`.
#[inline]
pub fn bucket_index(key: &[u8], bucket_count: usize) -> usize {
    (djb2(key) % bucket_count as u64) as usize
}

struct Entry {
    key: String,
    visits: u64,
    next: Option<Box<Entry>>,
}

/// Separate-chaining table with a fixed number of buckets.
///
/// The bucket array never grows: once the number of distinct keys passes the
/// bucket count, chains simply get longer. New keys are pushed at the head
/// of their chain.
pub struct ChainedTable {
    buckets: Vec<Option<Box<Entry>>>,
    len: usize,
}

impl ChainedTable {
    /// Like [`FrequencyTable::new`], but rejects a zero bucket count instead
    /// of panicking.
    pub fn try_new(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            bail!("bucket count must be greater than zero");
        }
        Ok(Self::with_buckets(bucket_count))
    }

    fn with_buckets(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        ChainedTable { buckets, len: 0 }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|head| head.is_some()).count()
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .map(|head| Chain::new(head).count())
            .max()
            .unwrap_or(0)
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        let index = bucket_index(key.as_bytes(), self.buckets.len());
        Chain::new(&self.buckets[index])
            .find(|entry| entry.key == key)
            .map(|entry| entry.visits)
    }
}

impl FrequencyTable for ChainedTable {
    fn new(size: usize) -> Self {
        assert!(size > 0, "bucket count must be greater than zero");
        Self::with_buckets(size)
    }

    fn insert_or_increment(&mut self, key: &str) {
        let index = bucket_index(key.as_bytes(), self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == key {
                entry.visits += 1;
                return;
            }
            cursor = entry.next.as_deref_mut();
        }

        let head = &mut self.buckets[index];
        let next = head.take();
        *head = Some(Box::new(Entry {
            key: key.to_owned(),
            visits: 1,
            next,
        }));
        self.len += 1;
    }

    fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.buckets
            .iter()
            .flat_map(Chain::new)
            .map(|entry| (entry.key.as_str(), entry.visits))
    }
}

impl Drop for ChainedTable {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default recursive drop would use
        // stack proportional to the chain length.
        for head in self.buckets.iter_mut() {
            let mut current = head.take();
            while let Some(mut entry) = current {
                current = entry.next.take();
            }
        }
    }
}

/// Walks one bucket's chain from head to tail.
struct Chain<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Chain<'a> {
    fn new(head: &'a Option<Box<Entry>>) -> Self {
        Chain {
            next: head.as_deref(),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}
