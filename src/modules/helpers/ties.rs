use std::collections::BTreeSet;

use crate::modules::helpers::tie_break::SortValue;
use crate::modules::models::grid::GridEntry;
use crate::modules::models::wave::SortKey;

pub struct TieHelper {}

impl TieHelper {
    /// # detect ties
    /// flag both entries of every adjacent pair that share the same primary value.
    /// only used for display, the order of the entries is never changed
    ///
    /// ## Arguments
    /// * `entries` - the entries of a built wave
    /// * `key` - the primary sort key of the wave
    ///
    /// ## Returns
    /// * `BTreeSet<usize>` - indices of the flagged entries
    pub fn detect(entries: &[GridEntry], key: SortKey) -> BTreeSet<usize> {
        let mut flagged = BTreeSet::new();

        for (index, pair) in entries.windows(2).enumerate() {
            let (a, b) = match (pair[0].driver(), pair[1].driver()) {
                (Some(a), Some(b)) => (a, b),
                _ => continue,
            };

            let tied = match (SortValue::of(a, key), SortValue::of(b, key)) {
                (Some(a_value), Some(b_value)) => a_value.is_tied_with(&b_value),
                _ => false,
            };

            if tied {
                flagged.insert(index);
                flagged.insert(index + 1);
            }
        }

        flagged
    }
}
