use fern::Dispatch;

use crate::modules::helpers::config::Settings;

/// # setup logging
/// log to stderr, and to the configured log file when there is one
///
/// ## Arguments
/// * `settings` - the settings holding the level and the log file
pub fn setup_logging(settings: &Settings) -> Result<(), fern::InitError> {
    let mut base_config = Dispatch::new()
        .level(settings.logging_level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(path) = &settings.log_file {
        base_config = base_config.chain(fern::log_file(path)?);
    }

    base_config.apply()?;

    Ok(())
}
