#![allow(dead_code)]

use starting_grid::modules::models::driver::{ConsolidatedDriver, FileResult};
use starting_grid::modules::models::grid::GridEntry;
use starting_grid::modules::models::wave::{SortKey, WaveConfig};

pub fn timed(name: &str, class: &str, best_time: &str) -> ConsolidatedDriver {
    let mut driver = ConsolidatedDriver::new(name, &format!("{}1", name), class);
    driver.best_time = best_time.to_string();
    driver
}

pub fn pointed(name: &str, class: &str, points: f64, best_time: &str) -> ConsolidatedDriver {
    let mut driver = timed(name, class, best_time);
    driver.points_total = points;
    driver.points_files = 1;
    driver
}

pub fn with_files(mut driver: ConsolidatedDriver, second_bests: &[&str]) -> ConsolidatedDriver {
    driver.files = second_bests
        .iter()
        .enumerate()
        .map(|(index, second_best)| FileResult {
            file_name: format!("race{}.csv", index + 1),
            second_best: second_best.to_string(),
            ..FileResult::default()
        })
        .collect();
    driver
}

pub fn wave(classes: &[&str], sort_key: SortKey) -> WaveConfig {
    WaveConfig {
        classes: classes.iter().map(|class| class.to_string()).collect(),
        sort_key,
        ..WaveConfig::default_for(1)
    }
}

/// driver names of the entries, `_` for an empty position
pub fn names(entries: &[GridEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            GridEntry::Real(driver) => driver.name.clone(),
            GridEntry::Empty => "_".to_string(),
        })
        .collect()
}
