use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub enum StartType {
    #[default]
    Flying,
    Standing,
    #[serde(other)]
    Unknown,
}

/// The value a wave is primarily ordered by.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Position,
    #[default]
    BestTime,
    SecondBest,
    BestSecondBest,
    PointsTotal,
    PointsAverage,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub enum GridOrder {
    #[default]
    Straight,
    FastestFirst,
    SlowestFirst,
    /// built like `Straight`
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase", tag = "mode", content = "count")]
pub enum Inversion {
    #[default]
    Off,
    All,
    /// reverse only the first `n` entries
    Top(usize),
    /// left alone like `Off`
    #[serde(other)]
    Unknown,
}

/// A single criterion used to separate two entries with the same primary value.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum TieBreaker {
    BestTime,
    SecondBest,
    BestPositionInClass,
    BestPosition,
    Alphabetical,
    Manual,
    #[serde(other)]
    Unknown,
}

/// The configuration of one wave as authored by the user.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveConfig {
    pub wave: usize,
    pub start_type: StartType,
    pub classes: Vec<String>,
    pub sort_key: SortKey,
    pub grid_order: GridOrder,
    pub inversion: Inversion,
    pub empty_positions_after: usize,
    pub empty_positions_between_classes: usize,
    pub tie_breakers: [Option<TieBreaker>; 3],
}

impl Default for WaveConfig {
    fn default() -> WaveConfig {
        WaveConfig::default_for(1)
    }
}

impl WaveConfig {
    /// # default wave
    /// the configuration a new wave starts with
    ///
    /// ## Arguments
    /// * `wave` - the 1-based ordinal of the wave
    ///
    /// ## Returns
    /// * `WaveConfig` - a wave without classes, sorted by best time
    pub fn default_for(wave: usize) -> WaveConfig {
        WaveConfig {
            wave,
            start_type: StartType::Flying,
            classes: Vec::new(),
            sort_key: SortKey::BestTime,
            grid_order: GridOrder::Straight,
            inversion: Inversion::Off,
            empty_positions_after: 0,
            empty_positions_between_classes: 0,
            tie_breakers: [Some(TieBreaker::SecondBest), Some(TieBreaker::Alphabetical), None],
        }
    }

    /// # resize wave list
    /// change the number of waves. existing waves are kept as they are, new waves
    /// get the defaults. a new wave after a standing wave is standing as well
    ///
    /// ## Arguments
    /// * `configs` - the current configuration
    /// * `count` - the new number of waves
    ///
    /// ## Returns
    /// * `Vec<WaveConfig>` - the resized configuration
    pub fn resize(configs: &[WaveConfig], count: usize) -> Vec<WaveConfig> {
        let mut resized: Vec<WaveConfig> = configs.iter().take(count).cloned().collect();

        while resized.len() < count {
            let mut wave = WaveConfig::default_for(resized.len() + 1);
            if let Some(previous) = resized.last() {
                if previous.start_type == StartType::Standing {
                    wave.start_type = StartType::Standing;
                }
            }
            resized.push(wave);
        }

        resized
    }

    /// the configured tie breakers in order, skipping empty slots
    pub fn active_tie_breakers(&self) -> impl Iterator<Item = TieBreaker> + '_ {
        self.tie_breakers.iter().flatten().copied()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
