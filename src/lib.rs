use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::helpers::merge::MergeHistory;
use crate::modules::models::driver::ConsolidatedDriver;
use crate::modules::models::grid::{Grid, GridEntry};
use crate::modules::models::wave::WaveConfig;

pub mod errors;
pub mod modules;

pub use crate::modules::grid_builder::GridBuilder;

/// Everything needed to build a grid: the drivers, the wave configuration and
/// the merges the user made.
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GridRequest {
    pub drivers: Vec<ConsolidatedDriver>,
    pub waves: Vec<WaveConfig>,
    pub merges: MergeHistory,
}

/// The built grid as handed to the renderers.
#[derive(Clone, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    pub waves: Vec<GridResponseWave>,
    pub total_positions: usize,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GridResponseWave {
    pub config: WaveConfig,
    pub entries: Vec<GridEntry>,
    pub empty_positions_after: usize,
    pub ties: BTreeSet<usize>,
}

impl GridRequest {
    /// # build the requested grid
    /// validate the input, build every wave and replay the recorded merges
    ///
    /// ## Returns
    /// * `CustomResult<Grid>` - the grid, or the first validation error found
    pub fn build(&self) -> CustomResult<Grid> {
        let grid = GridBuilder::build_checked(&self.drivers, &self.waves)?;
        if self.merges.is_empty() {
            return Ok(grid);
        }
        Ok(self.merges.apply(&grid))
    }
}

impl GridResponse {
    pub fn from_grid(grid: &Grid) -> GridResponse {
        GridResponse {
            waves: grid
                .waves
                .iter()
                .map(|wave| GridResponseWave {
                    config: wave.config.clone(),
                    entries: wave.entries.clone(),
                    empty_positions_after: wave.empty_positions_after,
                    ties: wave.ties(),
                })
                .collect(),
            total_positions: grid.total_positions(),
        }
    }
}
