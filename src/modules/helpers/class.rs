use std::collections::{BTreeMap, BTreeSet};

use crate::modules::helpers::general::Helpers;
use crate::modules::helpers::math::Math;
use crate::modules::helpers::time::{TimeHelper, NO_CLASS_TIME};
use crate::modules::models::driver::ConsolidatedDriver;
use crate::modules::models::grid::{GridDriver, GridEntry};
use crate::modules::models::wave::WaveConfig;

pub struct ClassHelper {}

impl ClassHelper {
    /// # distinct classes
    ///
    /// ## Arguments
    /// * `drivers` - all consolidated drivers
    ///
    /// ## Returns
    /// * `Vec<String>` - every class label once, sorted
    pub fn distinct_classes(drivers: &[ConsolidatedDriver]) -> Vec<String> {
        drivers
            .iter()
            .map(|driver| driver.class.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// number of drivers per class
    pub fn class_counts(drivers: &[ConsolidatedDriver]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for driver in drivers {
            *counts.entry(driver.class.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// classes that have drivers but are not assigned to any wave
    pub fn unassigned_classes(drivers: &[ConsolidatedDriver], configs: &[WaveConfig]) -> Vec<String> {
        let assigned: Vec<String> = configs
            .iter()
            .flat_map(|config| config.classes.iter().cloned())
            .collect();
        Helpers::difference(&ClassHelper::distinct_classes(drivers), &assigned)
    }

    /// # fastest time of a class
    /// the fastest parseable best time of the class within the given entries
    ///
    /// ## Arguments
    /// * `drivers` - the entries of one wave
    /// * `class` - the class label
    ///
    /// ## Returns
    /// * `f64` - the time in seconds, `NO_CLASS_TIME` when no member has a parseable time
    pub fn fastest_time(drivers: &[GridDriver], class: &str) -> f64 {
        Math::min_finite(
            drivers
                .iter()
                .filter(|driver| driver.class == class)
                .filter_map(|driver| TimeHelper::parse_finite(&driver.best_time)),
        )
        .unwrap_or(NO_CLASS_TIME)
    }

    /// # fastest time per class
    ///
    /// ## Arguments
    /// * `drivers` - the entries of one wave
    /// * `classes` - the classes assigned to the wave
    ///
    /// ## Returns
    /// * `Vec<(String, f64)>` - every class with its fastest time, sorted by class label
    pub fn fastest_times(drivers: &[GridDriver], classes: &[String]) -> Vec<(String, f64)> {
        classes
            .iter()
            .collect::<BTreeSet<&String>>()
            .into_iter()
            .map(|class| (class.clone(), ClassHelper::fastest_time(drivers, class)))
            .collect()
    }

    /// # class order of a wave
    /// the classes in the order they first appear in the entries
    ///
    /// ## Arguments
    /// * `entries` - the entries of a built wave
    ///
    /// ## Returns
    /// * `Vec<String>` - the class labels in order of appearance
    pub fn class_order(entries: &[GridEntry]) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        for class in entries.iter().filter_map(GridEntry::class) {
            if !order.iter().any(|seen| seen == class) {
                order.push(class.to_string());
            }
        }
        order
    }
}
