pub struct Helpers {}

impl Helpers {
    /// # the difference between two vectors
    ///
    /// ## Arguments
    /// * `a` - The first vector
    /// * `b` - The second vector
    ///
    /// ## Returns
    /// * 'Vec<T>' - the elements of `a` that are not in `b`, in the order of `a`
    pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        a.iter().filter(|x| !b.contains(x)).cloned().collect()
    }

    /// # reverse the start of a vector
    /// reverse the first `count` elements in place, leaving the rest untouched
    ///
    /// ## Arguments
    /// * `items` - the elements
    /// * `count` - how many elements to reverse, clamped to the length
    pub fn reverse_prefix<T>(items: &mut [T], count: usize) {
        let count = count.min(items.len());
        items[..count].reverse();
    }
}
