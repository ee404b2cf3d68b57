pub struct Math {}
impl Math {
    /// mean of the values, `None` for an empty slice
    pub fn mean(nums: &[f64]) -> Option<f64> {
        if nums.is_empty() {
            return None;
        }
        let sum: f64 = nums.iter().sum();
        Some(sum / nums.len() as f64)
    }

    /// the smallest finite value, ignoring infinities
    pub fn min_finite<I: IntoIterator<Item = f64>>(nums: I) -> Option<f64> {
        nums.into_iter()
            .filter(|num| num.is_finite())
            .min_by(|a, b| a.total_cmp(b))
    }
}
