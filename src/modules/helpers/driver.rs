use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::modules::helpers::time::TimeHelper;
use crate::modules::models::driver::{ConsolidatedDriver, FileResult};

/// One already parsed row of one uploaded result file.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultRow {
    pub file_name: String,
    pub name: String,
    pub number: String,
    pub class: String,
    pub best_time: String,
    pub second_best: String,
    pub points: Option<f64>,
    pub position: Option<u32>,
    pub position_in_class: Option<u32>,
}

impl ResultRow {
    fn to_file_result(&self) -> FileResult {
        FileResult {
            file_name: self.file_name.clone(),
            best_time: self.best_time.clone(),
            second_best: self.second_best.clone(),
            points: self.points,
            position: self.position,
            position_in_class: self.position_in_class,
        }
    }
}

pub struct DriverHelpers {}

impl DriverHelpers {
    /// # consolidate result rows
    /// fold the rows of all files into one record per (name, number) pair.
    /// drivers are returned in the order they are first seen
    ///
    /// ## Arguments
    /// * `rows` - the rows of every uploaded file, file by file
    ///
    /// ## Returns
    /// * `Vec<ConsolidatedDriver>` - one record per driver
    pub fn consolidate(rows: &[ResultRow]) -> Vec<ConsolidatedDriver> {
        let mut drivers: Vec<ConsolidatedDriver> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();

        for row in rows {
            let name = row.name.trim();
            let number = row.number.trim();
            if name.is_empty() || number.is_empty() {
                warn!(target: "helpers/driver:consolidate", "skipping row without identity in {}", row.file_name);
                continue;
            }

            let key = (name.to_string(), number.to_string());
            let position = *index.entry(key).or_insert_with(|| {
                drivers.push(ConsolidatedDriver::new(name, number, row.class.trim()));
                drivers.len() - 1
            });

            let driver = &mut drivers[position];
            if driver.class.is_empty() {
                driver.class = row.class.trim().to_string();
            }
            DriverHelpers::add_row(driver, row);
        }

        for driver in drivers.iter_mut() {
            DriverHelpers::update_best_times(driver);
        }

        debug!(target: "helpers/driver:consolidate", "consolidated {} rows into {} drivers", rows.len(), drivers.len());
        drivers
    }

    fn add_row(driver: &mut ConsolidatedDriver, row: &ResultRow) {
        if let Some(points) = row.points {
            driver.points_total += points;
            driver.points_files += 1;
        }
        if let Some(position) = row.position {
            driver.positions.push(position);
        }
        if let Some(position_in_class) = row.position_in_class {
            driver.positions_in_class.push(position_in_class);
        }
        driver.files.push(row.to_file_result());
    }

    /// # update best times
    /// take the two fastest laps over all files, both the best and the
    /// second-best lap of each file count. the earliest file wins an equal time
    ///
    /// ## Arguments
    /// * `driver` - the driver to update
    pub fn update_best_times(driver: &mut ConsolidatedDriver) {
        let mut laps: Vec<(f64, &str, &str)> = Vec::new();
        for file in &driver.files {
            for time in [&file.best_time, &file.second_best] {
                if let Some(seconds) = TimeHelper::parse_finite(time) {
                    laps.push((seconds, time.trim(), file.file_name.as_str()));
                }
            }
        }
        laps.sort_by(|a, b| a.0.total_cmp(&b.0));

        let fastest: Vec<(String, String)> = laps
            .into_iter()
            .take(2)
            .map(|(_, time, file)| (time.to_string(), file.to_string()))
            .collect();

        let mut fastest = fastest.into_iter();
        let (best_time, best_time_file) = match fastest.next() {
            Some((time, file)) => (time, Some(file)),
            None => (String::new(), None),
        };
        let (second_best, second_best_file) = match fastest.next() {
            Some((time, file)) => (time, Some(file)),
            None => (String::new(), None),
        };

        driver.best_time = best_time;
        driver.best_time_file = best_time_file;
        driver.second_best = second_best;
        driver.second_best_file = second_best_file;
    }
}
