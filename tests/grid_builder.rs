mod common;

use common::{names, pointed, timed, wave, with_files};
use starting_grid::errors::Error;
use starting_grid::modules::models::driver::ConsolidatedDriver;
use starting_grid::modules::models::grid::GridEntry;
use starting_grid::modules::models::wave::{GridOrder, Inversion, SortKey, TieBreaker, WaveConfig};
use starting_grid::GridBuilder;

fn five_timed() -> Vec<ConsolidatedDriver> {
    vec![
        timed("C", "X", "62.0"),
        timed("A", "X", "1:00.000"),
        timed("E", "X", "64.0"),
        timed("B", "X", "61.0"),
        timed("D", "X", "63.0"),
    ]
}

#[test]
fn best_time_sorts_ascending() {
    let grid = GridBuilder::build(&five_timed(), &[wave(&["X"], SortKey::BestTime)]);
    assert_eq!(names(&grid.waves[0].entries), ["A", "B", "C", "D", "E"]);
}

#[test]
fn drivers_without_a_time_go_last() {
    let drivers = vec![
        timed("nothing", "X", ""),
        timed("garbage", "X", "DNF"),
        timed("fast", "X", "59.9"),
    ];
    let grid = GridBuilder::build(&drivers, &[wave(&["X"], SortKey::BestTime)]);
    assert_eq!(
        names(&grid.waves[0].entries),
        ["fast", "nothing", "garbage"],
        "unparseable times keep their input order behind the real times",
    );
}

#[test]
fn second_best_sorts_on_second_best_field() {
    let mut a = timed("a", "X", "60.0");
    a.second_best = "63.0".to_string();
    let mut b = timed("b", "X", "61.0");
    b.second_best = "62.0".to_string();

    let grid = GridBuilder::build(&[a, b], &[wave(&["X"], SortKey::SecondBest)]);
    assert_eq!(names(&grid.waves[0].entries), ["b", "a"]);
}

#[test]
fn best_second_best_looks_at_every_file() {
    let mut a = with_files(timed("a", "X", "60.0"), &["", "59.0"]);
    a.second_best = String::new();
    let mut b = with_files(timed("b", "X", "60.0"), &["60.0", "61.0"]);
    b.second_best = "58.0".to_string();

    let grid = GridBuilder::build(&[b, a], &[wave(&["X"], SortKey::BestSecondBest)]);
    assert_eq!(names(&grid.waves[0].entries), ["a", "b"]);
}

#[test]
fn position_sorts_ascending_with_missing_last() {
    let mut a = timed("a", "X", "");
    a.positions = vec![4, 2];
    let b = timed("b", "X", "");
    let mut c = timed("c", "X", "");
    c.positions = vec![1];

    let grid = GridBuilder::build(&[a, b, c], &[wave(&["X"], SortKey::Position)]);
    assert_eq!(names(&grid.waves[0].entries), ["c", "a", "b"]);
}

#[test]
fn points_total_ties_use_the_tie_breakers() {
    let drivers = vec![
        pointed("A", "X", 10.0, "62.0"),
        pointed("C", "X", 8.0, "60.0"),
        pointed("B", "X", 10.0, "61.0"),
    ];
    let mut config = wave(&["X"], SortKey::PointsTotal);
    config.tie_breakers = [
        Some(TieBreaker::BestTime),
        Some(TieBreaker::Alphabetical),
        Some(TieBreaker::Manual),
    ];

    let grid = GridBuilder::build(&drivers, &[config]);
    assert_eq!(names(&grid.waves[0].entries), ["B", "A", "C"]);
}

#[test]
fn points_average_sorts_descending() {
    let mut a = pointed("a", "X", 20.0, "");
    a.points_files = 2;
    let b = pointed("b", "X", 15.0, "");
    let none = timed("none", "X", "");

    let grid = GridBuilder::build(&[none, a, b], &[wave(&["X"], SortKey::PointsAverage)]);
    assert_eq!(names(&grid.waves[0].entries), ["b", "a", "none"]);
}

#[test]
fn unknown_sort_key_keeps_input_order() {
    let grid = GridBuilder::build(&five_timed(), &[wave(&["X"], SortKey::Unknown)]);
    assert_eq!(names(&grid.waves[0].entries), ["C", "A", "E", "B", "D"]);
}

#[test]
fn invert_top_count() {
    let mut config = wave(&["X"], SortKey::BestTime);
    config.inversion = Inversion::Top(2);
    let grid = GridBuilder::build(&five_timed(), &[config]);
    assert_eq!(names(&grid.waves[0].entries), ["B", "A", "C", "D", "E"]);
}

#[test]
fn invert_all() {
    let mut config = wave(&["X"], SortKey::BestTime);
    config.inversion = Inversion::All;
    let grid = GridBuilder::build(&five_timed(), &[config]);
    assert_eq!(names(&grid.waves[0].entries), ["E", "D", "C", "B", "A"]);
}

#[test]
fn invert_count_larger_than_wave_reverses_everything() {
    let mut config = wave(&["X"], SortKey::BestTime);
    config.inversion = Inversion::Top(12);
    let grid = GridBuilder::build(&five_timed(), &[config]);
    assert_eq!(names(&grid.waves[0].entries), ["E", "D", "C", "B", "A"]);
}

fn two_classes() -> Vec<ConsolidatedDriver> {
    vec![
        timed("alpha1", "Alpha", "1:10.000"),
        timed("bravo2", "Bravo", "65.0"),
        timed("alpha2", "Alpha", "72.0"),
        timed("bravo1", "Bravo", "60.0"),
    ]
}

#[test]
fn fastest_class_first_with_spacing_between_classes() {
    let mut config = wave(&["Alpha", "Bravo"], SortKey::BestTime);
    config.grid_order = GridOrder::FastestFirst;
    config.empty_positions_between_classes = 1;

    let grid = GridBuilder::build(&two_classes(), &[config]);
    let entries = &grid.waves[0].entries;
    assert_eq!(names(entries), ["bravo1", "bravo2", "_", "alpha1", "alpha2"]);
    assert!(!entries.last().map_or(true, GridEntry::is_empty), "no spacing after the last class");
}

#[test]
fn slowest_class_first() {
    let mut config = wave(&["Bravo", "Alpha"], SortKey::BestTime);
    config.grid_order = GridOrder::SlowestFirst;
    config.empty_positions_between_classes = 2;

    let grid = GridBuilder::build(&two_classes(), &[config]);
    assert_eq!(
        names(&grid.waves[0].entries),
        ["alpha1", "alpha2", "_", "_", "bravo1", "bravo2"]
    );
}

#[test]
fn class_without_times_is_slowest() {
    let mut drivers = two_classes();
    drivers.push(timed("charlie1", "Charlie", ""));
    let mut config = wave(&["Charlie", "Alpha", "Bravo"], SortKey::BestTime);
    config.grid_order = GridOrder::FastestFirst;

    let grid = GridBuilder::build(&drivers, &[config]);
    assert_eq!(
        names(&grid.waves[0].entries),
        ["bravo1", "bravo2", "alpha1", "alpha2", "charlie1"]
    );
}

#[test]
fn equal_class_times_keep_label_order() {
    let drivers = vec![timed("z", "Zulu", "60.0"), timed("a", "Alpha", "60.0")];
    let mut config = wave(&["Zulu", "Alpha"], SortKey::BestTime);
    config.grid_order = GridOrder::FastestFirst;

    let grid = GridBuilder::build(&drivers, &[config]);
    assert_eq!(names(&grid.waves[0].entries), ["a", "z"]);
}

#[test]
fn inversion_applies_after_class_spacing() {
    let mut config = wave(&["Alpha", "Bravo"], SortKey::BestTime);
    config.grid_order = GridOrder::FastestFirst;
    config.empty_positions_between_classes = 1;
    config.inversion = Inversion::All;

    let grid = GridBuilder::build(&two_classes(), &[config]);
    assert_eq!(
        names(&grid.waves[0].entries),
        ["alpha2", "alpha1", "_", "bravo2", "bravo1"]
    );
}

#[test]
fn trailing_spacing_is_counted_not_stored() {
    let mut first = wave(&["Alpha"], SortKey::BestTime);
    first.empty_positions_after = 2;
    let mut second = wave(&["Bravo"], SortKey::BestTime);
    second.wave = 2;

    let grid = GridBuilder::build(&two_classes(), &[first, second]);
    assert_eq!(grid.waves[0].entries.len(), 2);
    assert!(grid.waves[0].entries.iter().all(|entry| !entry.is_empty()));
    assert_eq!(grid.waves[0].empty_positions_after, 2);
    assert_eq!(grid.waves[0].position_count(), 4);
    assert_eq!(grid.total_positions(), 6);
}

#[test]
fn wave_without_classes_is_still_emitted() {
    let mut empty = WaveConfig::default_for(2);
    empty.classes.clear();
    let configs = vec![wave(&["Alpha", "Bravo"], SortKey::BestTime), empty];

    let grid = GridBuilder::build(&two_classes(), &configs);
    assert_eq!(grid.waves.len(), 2);
    assert!(grid.waves[1].entries.is_empty());
    assert_eq!(grid.waves[1].config.wave, 2);
}

#[test]
fn waves_only_take_their_own_classes() {
    let mut second = wave(&["Bravo"], SortKey::BestTime);
    second.wave = 2;
    let grid = GridBuilder::build(&two_classes(), &[wave(&["Alpha"], SortKey::BestTime), second]);

    assert_eq!(names(&grid.waves[0].entries), ["alpha1", "alpha2"]);
    assert_eq!(names(&grid.waves[1].entries), ["bravo1", "bravo2"]);
}

#[test]
fn building_twice_gives_the_same_grid() {
    let mut config = wave(&["Alpha", "Bravo"], SortKey::PointsTotal);
    config.grid_order = GridOrder::FastestFirst;
    config.tie_breakers = [Some(TieBreaker::Manual), None, None];
    let drivers: Vec<ConsolidatedDriver> = two_classes()
        .into_iter()
        .map(|mut driver| {
            driver.points_total = 5.0;
            driver
        })
        .collect();

    let first = GridBuilder::build(&drivers, &[config.clone()]);
    let second = GridBuilder::build(&drivers, &[config]);
    assert_eq!(first, second);
}

#[test]
fn build_checked_rejects_duplicate_drivers() {
    let drivers = vec![timed("a", "X", "60.0"), timed("a", "X", "61.0")];
    let result = GridBuilder::build_checked(&drivers, &[wave(&["X"], SortKey::BestTime)]);
    assert!(matches!(result, Err(Error::DuplicateDriverError { .. })));
}

#[test]
fn grid_entries_keep_a_reference_to_their_driver() {
    let mut driver = timed("a", "X", "60.0");
    driver.positions_in_class = vec![3, 1];
    let grid = GridBuilder::build(&[driver], &[wave(&["X"], SortKey::BestTime)]);

    let entry = grid.waves[0].drivers().next().expect("one driver");
    assert_eq!(entry.source.best_position_in_class(), Some(1));
    assert_eq!(entry.number, "a1");
}

#[test]
fn unknown_grid_order_builds_straight() {
    let drivers = vec![
        timed("slow", "Y", "70.0"),
        timed("fast", "X", "60.0"),
        timed("mid", "Y", "65.0"),
    ];
    let mut straight = wave(&["X", "Y"], SortKey::BestTime);
    straight.empty_positions_between_classes = 1;
    let mut unknown = straight.clone();
    unknown.grid_order = GridOrder::Unknown;

    let expected = GridBuilder::build(&drivers, &[straight]);
    let grid = GridBuilder::build(&drivers, &[unknown]);
    assert_eq!(names(&grid.waves[0].entries), ["fast", "mid", "slow"]);
    assert_eq!(grid.waves[0].entries, expected.waves[0].entries);
}

#[test]
fn unknown_inversion_leaves_the_order_alone() {
    let mut config = wave(&["X"], SortKey::BestTime);
    config.inversion = Inversion::Unknown;

    let grid = GridBuilder::build(&five_timed(), &[config]);
    assert_eq!(names(&grid.waves[0].entries), ["A", "B", "C", "D", "E"]);
}
