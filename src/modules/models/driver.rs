use serde::{Deserialize, Serialize};

use crate::modules::helpers::math::Math;
use crate::modules::helpers::time::TimeHelper;

/// The results of one driver in one uploaded result file.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FileResult {
    pub file_name: String,
    pub best_time: String,
    pub second_best: String,
    pub points: Option<f64>,
    pub position: Option<u32>,
    pub position_in_class: Option<u32>,
}

/// One real-world driver, merged across every uploaded result file.
/// Identified by the (name, number) pair.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsolidatedDriver {
    pub name: String,
    pub number: String,
    pub class: String,
    pub files: Vec<FileResult>,
    pub best_time: String,
    pub best_time_file: Option<String>,
    pub second_best: String,
    pub second_best_file: Option<String>,
    pub points_total: f64,
    pub points_files: usize,
    pub positions: Vec<u32>,
    pub positions_in_class: Vec<u32>,
}

impl ConsolidatedDriver {
    /// # new driver
    /// create a driver with an identity and a class but no results yet
    ///
    /// ## Arguments
    /// * `name` - the name of the driver
    /// * `number` - the car number
    /// * `class` - the class the driver races in
    ///
    /// ## Returns
    /// * `ConsolidatedDriver` - the driver without results
    pub fn new(name: &str, number: &str, class: &str) -> ConsolidatedDriver {
        ConsolidatedDriver {
            name: name.to_string(),
            number: number.to_string(),
            class: class.to_string(),
            ..ConsolidatedDriver::default()
        }
    }

    /// the composite identity of the driver
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.number)
    }

    /// # average points
    /// total points divided by the number of files that awarded points
    ///
    /// ## Returns
    /// * `f64` - the average, `0.0` when no file awarded points
    pub fn average_points(&self) -> f64 {
        if self.points_files == 0 {
            return 0.0;
        }
        self.points_total / self.points_files as f64
    }

    pub fn best_position(&self) -> Option<u32> {
        self.positions.iter().copied().min()
    }

    pub fn best_position_in_class(&self) -> Option<u32> {
        self.positions_in_class.iter().copied().min()
    }

    pub fn average_position_in_class(&self) -> Option<f64> {
        let positions: Vec<f64> = self
            .positions_in_class
            .iter()
            .map(|position| *position as f64)
            .collect();
        Math::mean(&positions)
    }

    /// # best second-best time
    /// the fastest parseable second-best lap over all the files of this driver,
    /// not only the consolidated second-best field
    ///
    /// ## Returns
    /// * `f64` - the time in seconds, `f64::INFINITY` when no file has one
    pub fn best_second_best(&self) -> f64 {
        Math::min_finite(
            self.files
                .iter()
                .filter_map(|file| TimeHelper::parse_finite(&file.second_best)),
        )
        .unwrap_or(f64::INFINITY)
    }
}
