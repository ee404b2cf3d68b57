use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::modules::helpers::class::ClassHelper;
use crate::modules::helpers::tie_break::{SortValue, TieBreakHelper};
use crate::modules::models::grid::{BuiltWave, Grid, GridDriver, GridEntry};
use crate::modules::models::wave::{GridOrder, SortKey, TieBreaker};

pub struct MergeHelper {}

impl MergeHelper {
    /// # merge a class into its predecessor
    /// merge the class with the class right before it in the current order of the
    /// wave. the combined drivers are sorted again and put where the preceding
    /// class was. every other entry keeps its relative order. classes merged
    /// earlier in the wave count as one block
    ///
    /// ## Arguments
    /// * `wave` - the built wave
    /// * `class` - the class to merge into the class before it
    ///
    /// ## Returns
    /// * `Vec<GridEntry>` - the new entries, unchanged when the class is first or missing
    pub fn merge_classes(wave: &BuiltWave, class: &str) -> Vec<GridEntry> {
        match MergeHelper::merge_groups(wave, class, &wave.merged_groups) {
            Some((entries, _)) => entries,
            None => wave.entries.clone(),
        }
    }

    /// # merge with earlier merges taken into account
    /// same as `merge_classes`, but classes that were merged before are treated as
    /// one block, so the predecessor is the whole block before the class
    ///
    /// ## Arguments
    /// * `wave` - the built wave
    /// * `class` - the class to merge into the block before it
    /// * `groups` - the classes merged so far, one list per merged block
    ///
    /// ## Returns
    /// * `Option<(Vec<GridEntry>, String)>` - the new entries and the first class of
    ///   the block that was merged into, `None` when nothing was merged
    pub fn merge_groups(
        wave: &BuiltWave,
        class: &str,
        groups: &[Vec<String>],
    ) -> Option<(Vec<GridEntry>, String)> {
        let order = MergeHelper::block_order(&wave.entries, groups);
        let target = MergeHelper::group_key(class, groups);
        let predecessor = match order.iter().position(|key| *key == target) {
            Some(0) => {
                debug!(target: "class_merge:merge", "class {} is first in wave {}, nothing to merge", class, wave.config.wave);
                return None;
            }
            Some(index) => order[index - 1].clone(),
            None => {
                warn!(target: "class_merge:merge", "class {} is not part of wave {}", class, wave.config.wave);
                return None;
            }
        };

        let in_merge = |entry: &GridEntry| {
            entry.class().map_or(false, |c| {
                let key = MergeHelper::group_key(c, groups);
                key == target || key == predecessor
            })
        };

        let mut merged: Vec<GridDriver> = wave
            .entries
            .iter()
            .filter(|entry| in_merge(entry))
            .filter_map(GridEntry::driver)
            .cloned()
            .collect();
        MergeHelper::sort_merged(&mut merged, wave.config.sort_key);
        if wave.config.grid_order == GridOrder::SlowestFirst {
            merged.reverse();
        }

        let first = wave.entries.iter().position(|entry| in_merge(entry))?;
        let last = wave.entries.iter().rposition(|entry| in_merge(entry))?;

        let mut merged_block = Some(merged);
        let mut entries: Vec<GridEntry> = Vec::with_capacity(wave.entries.len());
        for (index, entry) in wave.entries.iter().enumerate() {
            if index == first {
                if let Some(block) = merged_block.take() {
                    entries.extend(block.into_iter().map(GridEntry::Real));
                }
            }

            let spacing_inside_merge = entry.is_empty() && index > first && index < last;
            if in_merge(entry) || spacing_inside_merge {
                continue;
            }
            entries.push(entry.clone());
        }

        debug!(target: "class_merge:merge", "merged class {} into {} in wave {}", class, predecessor, wave.config.wave);
        Some((entries, predecessor))
    }

    /// the first class of the merged block holding `class`, or the class itself
    fn group_key(class: &str, groups: &[Vec<String>]) -> String {
        groups
            .iter()
            .find(|group| group.iter().any(|member| member == class))
            .and_then(|group| group.first())
            .map_or_else(|| class.to_string(), String::clone)
    }

    /// the blocks of the wave in order of first appearance
    fn block_order(entries: &[GridEntry], groups: &[Vec<String>]) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        for class in ClassHelper::class_order(entries) {
            let key = MergeHelper::group_key(&class, groups);
            if !order.contains(&key) {
                order.push(key);
            }
        }
        order
    }

    /// the wave with the class merged into its predecessor, the merged blocks
    /// updated so a later merge keeps the block together
    pub fn merge_wave(wave: &BuiltWave, class: &str) -> BuiltWave {
        let mut merged = wave.clone();
        if let Some((entries, predecessor)) =
            MergeHelper::merge_groups(wave, class, &wave.merged_groups)
        {
            merged.entries = entries;
            MergeHistory::join_groups(&mut merged.merged_groups, &predecessor, class);
        }
        merged
    }

    /// # sort merged drivers
    /// times ascending, positions ascending, points descending with the best
    /// time deciding equal points
    ///
    /// ## Arguments
    /// * `drivers` - the drivers of both classes
    /// * `key` - the primary sort key of the wave
    fn sort_merged(drivers: &mut [GridDriver], key: SortKey) {
        drivers.sort_by(|a, b| {
            let primary = match (SortValue::of(a, key), SortValue::of(b, key)) {
                (Some(a_value), Some(b_value)) => a_value.compare(&b_value),
                _ => Ordering::Equal,
            };
            match key {
                SortKey::PointsTotal | SortKey::PointsAverage => primary
                    .then_with(|| TieBreakHelper::compare(a, b, TieBreaker::BestTime)),
                _ => primary,
            }
        });
    }
}

/// The merges the user made, per wave index, in the order they were made.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(transparent)]
pub struct MergeHistory {
    pub merges: BTreeMap<usize, Vec<String>>,
}

impl MergeHistory {
    pub fn new() -> MergeHistory {
        MergeHistory::default()
    }

    /// remember that `class` was merged in the wave at `wave_index`
    pub fn record(&mut self, wave_index: usize, class: &str) {
        self.merges
            .entry(wave_index)
            .or_default()
            .push(class.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.merges.values().all(Vec::is_empty)
    }

    /// # apply the merges
    /// replay the recorded merges on a freshly built grid. classes merged earlier
    /// in the same wave stay together as one block for the merges after them
    ///
    /// ## Arguments
    /// * `grid` - the built grid
    ///
    /// ## Returns
    /// * `Grid` - a new grid with the merges applied
    pub fn apply(&self, grid: &Grid) -> Grid {
        let waves = grid
            .waves
            .iter()
            .enumerate()
            .map(|(index, wave)| match self.merges.get(&index) {
                Some(classes) => MergeHistory::apply_wave(wave, classes),
                None => wave.clone(),
            })
            .collect();

        Grid { waves }
    }

    fn apply_wave(wave: &BuiltWave, classes: &[String]) -> BuiltWave {
        classes
            .iter()
            .fold(wave.clone(), |merged, class| MergeHelper::merge_wave(&merged, class))
    }

    /// # join two merged blocks
    /// put the block holding `class` into the block holding `predecessor`
    ///
    /// ## Arguments
    /// * `groups` - the merged blocks so far
    /// * `predecessor` - a class of the block merged into
    /// * `class` - a class of the block that was merged
    pub fn join_groups(groups: &mut Vec<Vec<String>>, predecessor: &str, class: &str) {
        let mut joined: Vec<String> = Vec::new();
        for member in [predecessor, class] {
            match groups.iter().position(|group| group.iter().any(|c| c == member)) {
                Some(index) => joined.extend(groups.remove(index)),
                None if !joined.iter().any(|c| c == member) => joined.push(member.to_string()),
                None => {}
            }
        }
        groups.push(joined);
    }
}
