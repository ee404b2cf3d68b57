use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info, warn};
use snafu::ResultExt;

use starting_grid::errors::{CustomResult, LoggingSnafu, ParseInputSnafu, ReadInputSnafu, WriteOutputSnafu};
use starting_grid::modules::helpers::class::ClassHelper;
use starting_grid::modules::helpers::config::Settings;
use starting_grid::modules::helpers::logging::setup_logging;
use starting_grid::{GridRequest, GridResponse};

fn load_request(path: &Path) -> CustomResult<GridRequest> {
    let body = fs::read_to_string(path).context(ReadInputSnafu { path })?;
    serde_json::from_str(&body).context(ParseInputSnafu)
}

fn run(input: &Path) -> CustomResult<()> {
    let request = load_request(input)?;
    info!(target: "build_grid", "loaded {} drivers and {} waves from {}", request.drivers.len(), request.waves.len(), input.display());

    for class in ClassHelper::unassigned_classes(&request.drivers, &request.waves) {
        warn!(target: "build_grid", "class {} is not assigned to any wave", class);
    }

    let grid = request.build()?;
    let response = GridResponse::from_grid(&grid);
    info!(target: "build_grid", "grid has {} positions over {} waves", response.total_positions, response.waves.len());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &response).context(WriteOutputSnafu)?;
    writeln!(handle).ok();

    Ok(())
}

fn main() -> ExitCode {
    let settings = Settings::from_env();
    if let Err(err) = setup_logging(&settings).context(LoggingSnafu) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    let input: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.input.clone());

    match run(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "build_grid", "{}", err);
            ExitCode::FAILURE
        }
    }
}
