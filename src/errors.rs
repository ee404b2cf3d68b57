use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("driver {} (#{}) appears more than once", name, number))]
    DuplicateDriverError { name: String, number: String },

    #[snafu(display("driver at index {} has an empty name or number ({:?} #{:?})", index, name, number))]
    MissingIdentityError {
        index: usize,
        name: String,
        number: String,
    },

    #[snafu(display("wave {} has a flying start after a standing wave", wave))]
    StartTypeOrderError { wave: usize },

    #[snafu(display("class {} is assigned to wave {} and wave {}", class, first, second))]
    ClassInMultipleWavesError {
        class: String,
        first: usize,
        second: usize,
    },

    #[snafu(display("wave at index {} has ordinal {} (expected {})", index, found, expected))]
    WaveOrdinalError {
        index: usize,
        found: usize,
        expected: usize,
    },

    #[snafu(display("could not read {}: {}", path.display(), source))]
    ReadInputError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("could not parse grid request: {}", source))]
    ParseInputError { source: serde_json::Error },

    #[snafu(display("could not write grid response: {}", source))]
    WriteOutputError { source: serde_json::Error },

    #[snafu(display("failed to setup logging: {}", source))]
    LoggingError { source: fern::InitError },
}

pub type CustomResult<T> = Result<T, Error>;
