use std::collections::{HashMap, HashSet};

use log::{error, warn};
use snafu::ensure;

use crate::errors::{
    ClassInMultipleWavesSnafu, CustomResult, DuplicateDriverSnafu, MissingIdentitySnafu,
    StartTypeOrderSnafu, WaveOrdinalSnafu,
};
use crate::modules::models::driver::ConsolidatedDriver;
use crate::modules::models::wave::{StartType, WaveConfig};

/// # validate drivers
/// every driver has a name and a number, and every (name, number) pair may
/// only occur once
///
/// ## Arguments
/// * `drivers` - the consolidated drivers
pub fn validate_drivers(drivers: &[ConsolidatedDriver]) -> CustomResult<()> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for (index, driver) in drivers.iter().enumerate() {
        ensure!(
            !driver.name.trim().is_empty() && !driver.number.trim().is_empty(),
            MissingIdentitySnafu {
                index,
                name: driver.name.clone(),
                number: driver.number.clone(),
            }
        );
        if !seen.insert(driver.key()) {
            error!(target: "validation:drivers", "duplicate driver {} #{}", driver.name, driver.number);
            return DuplicateDriverSnafu {
                name: driver.name.clone(),
                number: driver.number.clone(),
            }
            .fail();
        }
    }
    Ok(())
}

/// # validate wave configuration
/// waves are numbered 1..=n in order, a flying wave never follows a standing
/// wave and a class belongs to at most one wave
///
/// ## Arguments
/// * `configs` - the wave configurations
pub fn validate_waves(configs: &[WaveConfig]) -> CustomResult<()> {
    let mut standing_seen = false;
    let mut class_waves: HashMap<&str, usize> = HashMap::new();

    for (index, config) in configs.iter().enumerate() {
        ensure!(
            config.wave == index + 1,
            WaveOrdinalSnafu {
                index,
                found: config.wave,
                expected: index + 1,
            }
        );

        match config.start_type {
            StartType::Standing => standing_seen = true,
            StartType::Flying => {
                ensure!(!standing_seen, StartTypeOrderSnafu { wave: config.wave });
            }
            StartType::Unknown => {
                warn!(target: "validation:waves", "wave {} has an unknown start type, start order not checked", config.wave);
            }
        }

        for class in &config.classes {
            match class_waves.get(class.as_str()) {
                Some(first) if *first != config.wave => {
                    return ClassInMultipleWavesSnafu {
                        class: class.clone(),
                        first: *first,
                        second: config.wave,
                    }
                    .fail();
                }
                Some(_) => {}
                None => {
                    class_waves.insert(class, config.wave);
                }
            }
        }
    }

    Ok(())
}

/// validate both the drivers and the wave configuration
pub fn validate_input(drivers: &[ConsolidatedDriver], configs: &[WaveConfig]) -> CustomResult<()> {
    validate_drivers(drivers)?;
    validate_waves(configs)
}
