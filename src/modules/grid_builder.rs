use std::cmp::Ordering;
use std::sync::Arc;

use log::{debug, trace, warn};

use crate::errors::CustomResult;
use crate::modules::helpers::class::ClassHelper;
use crate::modules::helpers::general::Helpers;
use crate::modules::helpers::tie_break::{SortValue, TieBreakHelper};
use crate::modules::helpers::validation::validate_input;
use crate::modules::models::driver::ConsolidatedDriver;
use crate::modules::models::grid::{BuiltWave, Grid, GridDriver, GridEntry};
use crate::modules::models::wave::{GridOrder, Inversion, SortKey, WaveConfig};

pub struct GridBuilder {}

impl GridBuilder {
    /// # build the grid
    /// build every wave in configuration order. building never fails, bad data
    /// only moves entries to the back
    ///
    /// ## Arguments
    /// * `drivers` - the consolidated drivers
    /// * `configs` - one configuration per wave
    ///
    /// ## Returns
    /// * `Grid` - one built wave per configuration
    pub fn build(drivers: &[ConsolidatedDriver], configs: &[WaveConfig]) -> Grid {
        let shared: Vec<Arc<ConsolidatedDriver>> =
            drivers.iter().cloned().map(Arc::new).collect();

        let waves: Vec<BuiltWave> = configs
            .iter()
            .map(|config| GridBuilder::build_wave(&shared, config))
            .collect();

        debug!(target: "grid_builder:build", "built {} waves from {} drivers", waves.len(), drivers.len());
        Grid { waves }
    }

    /// # build the grid after validating the input
    ///
    /// ## Arguments
    /// * `drivers` - the consolidated drivers
    /// * `configs` - one configuration per wave
    ///
    /// ## Returns
    /// * `CustomResult<Grid>` - the grid, or the first validation error found
    pub fn build_checked(drivers: &[ConsolidatedDriver], configs: &[WaveConfig]) -> CustomResult<Grid> {
        validate_input(drivers, configs)?;
        Ok(GridBuilder::build(drivers, configs))
    }

    /// # build one wave
    /// filter, sort, reorder the classes, invert and attach the trailing spacing
    ///
    /// ## Arguments
    /// * `drivers` - all drivers
    /// * `config` - the configuration of the wave
    ///
    /// ## Returns
    /// * `BuiltWave` - the ordered wave
    pub fn build_wave(drivers: &[Arc<ConsolidatedDriver>], config: &WaveConfig) -> BuiltWave {
        let mut wave_drivers: Vec<GridDriver> = drivers
            .iter()
            .filter(|driver| config.has_class(&driver.class))
            .map(GridDriver::from_driver)
            .collect();

        if wave_drivers.is_empty() {
            debug!(target: "grid_builder:build_wave", "wave {} has no drivers", config.wave);
        }

        GridBuilder::sort_drivers(&mut wave_drivers, config);

        let mut entries: Vec<GridEntry> = match config.grid_order {
            GridOrder::Straight | GridOrder::Unknown => {
                wave_drivers.into_iter().map(GridEntry::Real).collect()
            }
            GridOrder::FastestFirst | GridOrder::SlowestFirst => {
                GridBuilder::order_classes(wave_drivers, config)
            }
        };

        GridBuilder::invert(&mut entries, config.inversion);

        trace!(target: "grid_builder:build_wave", "wave {} has {} entries", config.wave, entries.len());
        BuiltWave {
            config: config.clone(),
            entries,
            empty_positions_after: config.empty_positions_after,
            merged_groups: Vec::new(),
        }
    }

    /// # primary sort
    /// stable sort of the drivers by the sort key of the wave. points are sorted
    /// high to low with the configured tie breakers deciding equal points.
    /// an unknown sort key leaves the drivers as they are
    ///
    /// ## Arguments
    /// * `drivers` - the drivers of the wave
    /// * `config` - the configuration of the wave
    pub fn sort_drivers(drivers: &mut [GridDriver], config: &WaveConfig) {
        match config.sort_key {
            SortKey::Position | SortKey::BestTime | SortKey::SecondBest | SortKey::BestSecondBest => {
                drivers.sort_by(|a, b| GridBuilder::compare_primary(a, b, config.sort_key));
            }
            SortKey::PointsTotal | SortKey::PointsAverage => {
                drivers.sort_by(|a, b| {
                    GridBuilder::compare_primary(a, b, config.sort_key)
                        .then_with(|| TieBreakHelper::cascade(a, b, &config.tie_breakers))
                });
            }
            SortKey::Unknown => {
                warn!(target: "grid_builder:sort_drivers", "unknown sort key for wave {}, keeping input order", config.wave);
            }
        }
    }

    fn compare_primary(a: &GridDriver, b: &GridDriver, key: SortKey) -> Ordering {
        match (SortValue::of(a, key), SortValue::of(b, key)) {
            (Some(a_value), Some(b_value)) => a_value.compare(&b_value),
            _ => Ordering::Equal,
        }
    }

    /// # order the classes
    /// put the class blocks in order of their fastest time and place the
    /// configured empty positions between them
    ///
    /// ## Arguments
    /// * `sorted` - the drivers after the primary sort
    /// * `config` - the configuration of the wave
    ///
    /// ## Returns
    /// * `Vec<GridEntry>` - the class blocks with spacing in between
    fn order_classes(sorted: Vec<GridDriver>, config: &WaveConfig) -> Vec<GridEntry> {
        let mut class_times = ClassHelper::fastest_times(&sorted, &config.classes);
        match config.grid_order {
            GridOrder::FastestFirst => class_times.sort_by(|a, b| a.1.total_cmp(&b.1)),
            GridOrder::SlowestFirst => class_times.sort_by(|a, b| b.1.total_cmp(&a.1)),
            GridOrder::Straight | GridOrder::Unknown => {}
        }

        let mut entries: Vec<GridEntry> = Vec::with_capacity(sorted.len());
        for (class, fastest) in class_times {
            let block: Vec<GridEntry> = sorted
                .iter()
                .filter(|driver| driver.class == class)
                .cloned()
                .map(GridEntry::Real)
                .collect();
            if block.is_empty() {
                continue;
            }

            trace!(target: "grid_builder:order_classes", "class {} ({}s) with {} drivers", class, fastest, block.len());
            if !entries.is_empty() {
                entries.extend((0..config.empty_positions_between_classes).map(|_| GridEntry::Empty));
            }
            entries.extend(block);
        }

        entries
    }

    /// # invert
    /// reverse the whole wave or only its first entries
    ///
    /// ## Arguments
    /// * `entries` - the entries, empty positions between classes included
    /// * `inversion` - how to invert
    pub fn invert(entries: &mut [GridEntry], inversion: Inversion) {
        match inversion {
            Inversion::Off | Inversion::Unknown => {}
            Inversion::All => entries.reverse(),
            Inversion::Top(count) => Helpers::reverse_prefix(entries, count),
        }
    }
}
