use std::cmp::Ordering;

use crate::modules::helpers::time::{TimeHelper, NO_POSITION};
use crate::modules::models::grid::GridDriver;
use crate::modules::models::wave::{SortKey, TieBreaker};

/// The value an entry is primarily ordered by.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SortValue {
    /// seconds, lower is better
    Time(f64),
    /// points, higher is better
    Points(f64),
    /// finishing position, lower is better
    Position(u32),
}

impl SortValue {
    /// # sort value of an entry
    ///
    /// ## Arguments
    /// * `driver` - the grid entry
    /// * `key` - the primary sort key of the wave
    ///
    /// ## Returns
    /// * `Option<SortValue>` - the value, `None` for an unknown key
    pub fn of(driver: &GridDriver, key: SortKey) -> Option<SortValue> {
        match key {
            SortKey::Position => Some(SortValue::Position(
                driver.position.unwrap_or(NO_POSITION),
            )),
            SortKey::BestTime => Some(SortValue::Time(TimeHelper::parse(&driver.best_time))),
            SortKey::SecondBest => Some(SortValue::Time(TimeHelper::parse(&driver.second_best))),
            SortKey::BestSecondBest => Some(SortValue::Time(driver.source.best_second_best())),
            SortKey::PointsTotal => Some(SortValue::Points(driver.points)),
            SortKey::PointsAverage => Some(SortValue::Points(driver.source.average_points())),
            SortKey::Unknown => None,
        }
    }

    /// compare two values of the same kind so that the better value sorts first
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Time(a), SortValue::Time(b)) => a.total_cmp(b),
            (SortValue::Points(a), SortValue::Points(b)) => b.total_cmp(a),
            (SortValue::Position(a), SortValue::Position(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// equality as shown to the user: times within a millisecond, everything else exact
    pub fn is_tied_with(&self, other: &SortValue) -> bool {
        match (self, other) {
            (SortValue::Time(a), SortValue::Time(b)) => TimeHelper::approx_eq(*a, *b),
            (SortValue::Points(a), SortValue::Points(b)) => a == b,
            (SortValue::Position(a), SortValue::Position(b)) => a == b,
            _ => false,
        }
    }
}

pub struct TieBreakHelper {}

impl TieBreakHelper {
    /// # compare by one tie breaker
    ///
    /// ## Arguments
    /// * `a` - the first entry
    /// * `b` - the second entry
    /// * `criterion` - the tie breaker to apply
    ///
    /// ## Returns
    /// * `Ordering` - `Less` when `a` goes first. `Manual` and unknown criteria are always `Equal`
    pub fn compare(a: &GridDriver, b: &GridDriver, criterion: TieBreaker) -> Ordering {
        match criterion {
            TieBreaker::BestTime => {
                TimeHelper::parse(&a.best_time).total_cmp(&TimeHelper::parse(&b.best_time))
            }
            TieBreaker::SecondBest => {
                TimeHelper::parse(&a.second_best).total_cmp(&TimeHelper::parse(&b.second_best))
            }
            TieBreaker::BestPositionInClass => {
                let a_position = a.source.best_position_in_class().unwrap_or(NO_POSITION);
                let b_position = b.source.best_position_in_class().unwrap_or(NO_POSITION);
                a_position.cmp(&b_position)
            }
            TieBreaker::BestPosition => {
                let a_position = a.position.unwrap_or(NO_POSITION);
                let b_position = b.position.unwrap_or(NO_POSITION);
                a_position.cmp(&b_position)
            }
            TieBreaker::Alphabetical => TieBreakHelper::compare_names(&a.name, &b.name),
            TieBreaker::Manual | TieBreaker::Unknown => Ordering::Equal,
        }
    }

    /// # cascade tie breakers
    /// apply the tie breakers in order until one of them separates the entries.
    /// empty slots are skipped
    ///
    /// ## Arguments
    /// * `a` - the first entry
    /// * `b` - the second entry
    /// * `criteria` - up to three tie breakers
    ///
    /// ## Returns
    /// * `Ordering` - the first non-equal result, or `Equal` when still tied
    pub fn cascade(a: &GridDriver, b: &GridDriver, criteria: &[Option<TieBreaker>]) -> Ordering {
        criteria
            .iter()
            .flatten()
            .map(|criterion| TieBreakHelper::compare(a, b, *criterion))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// case-insensitive name comparison. names differing only in case are equal
    pub fn compare_names(a: &str, b: &str) -> Ordering {
        let a_folded: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
        let b_folded: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();
        a_folded.cmp(&b_folded)
    }
}
