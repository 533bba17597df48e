/// A string-keyed visit counter that only ever grows.
pub trait FrequencyTable {
    fn new(size: usize) -> Self;
    fn insert_or_increment(&mut self, key: &str);
    /// Every `(key, visits)` pair currently stored, in no particular order.
    fn entries(&self) -> impl Iterator<Item = (&str, u64)>;
}
