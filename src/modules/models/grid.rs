use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::modules::helpers::ties::TieHelper;
use crate::modules::models::driver::ConsolidatedDriver;
use crate::modules::models::wave::WaveConfig;

/// A driver placed on the grid.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GridDriver {
    pub class: String,
    pub number: String,
    pub name: String,
    pub best_time: String,
    pub second_best: String,
    pub points: f64,
    pub position: Option<u32>,
    #[serde(skip)]
    pub source: Arc<ConsolidatedDriver>,
}

impl GridDriver {
    pub fn from_driver(driver: &Arc<ConsolidatedDriver>) -> GridDriver {
        GridDriver {
            class: driver.class.clone(),
            number: driver.number.clone(),
            name: driver.name.clone(),
            best_time: driver.best_time.clone(),
            second_best: driver.second_best.clone(),
            points: driver.points_total,
            position: driver.best_position(),
            source: Arc::clone(driver),
        }
    }
}

/// One grid position: either a driver or a deliberately empty slot.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GridEntry {
    Real(GridDriver),
    Empty,
}

impl GridEntry {
    pub fn driver(&self) -> Option<&GridDriver> {
        match self {
            GridEntry::Real(driver) => Some(driver),
            GridEntry::Empty => None,
        }
    }

    pub fn class(&self) -> Option<&str> {
        self.driver().map(|driver| driver.class.as_str())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridEntry::Empty)
    }
}

/// A wave after building: its configuration and the ordered entries.
/// The empty positions after the wave are only counted, never stored as entries.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BuiltWave {
    pub config: WaveConfig,
    pub entries: Vec<GridEntry>,
    pub empty_positions_after: usize,
    /// classes merged into one block, in block order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merged_groups: Vec<Vec<String>>,
}

impl BuiltWave {
    /// number of grid positions this wave occupies, trailing empty positions included
    pub fn position_count(&self) -> usize {
        self.entries.len() + self.empty_positions_after
    }

    pub fn drivers(&self) -> impl Iterator<Item = &GridDriver> {
        self.entries.iter().filter_map(GridEntry::driver)
    }

    pub fn ties(&self) -> BTreeSet<usize> {
        TieHelper::detect(&self.entries, self.config.sort_key)
    }
}

#[derive(Serialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub waves: Vec<BuiltWave>,
}

impl Grid {
    pub fn total_positions(&self) -> usize {
        self.waves.iter().map(BuiltWave::position_count).sum()
    }

    /// the tie flags of every wave, in wave order
    pub fn ties(&self) -> Vec<BTreeSet<usize>> {
        self.waves.iter().map(BuiltWave::ties).collect()
    }
}
