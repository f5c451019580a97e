use std::path::{Path, PathBuf};
use chrono::Offset;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::log_config::LogConfig;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError>
{
    match level.trim().to_lowercase().as_str() {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" | "" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'")))
    }
}

/// Installs the global logger.
///
/// Records always go to stdout with colored levels. When `log.folder` is set
/// they are also appended, uncolored, to `<folder>/<service_name>.log`.
pub fn setup_logging(log: &LogConfig, service_name: &str) -> Result<(), CustomError>
{
    let level = parse_log_level(&log.level)?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let stdout = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .chain(stdout);

    if !log.folder.trim().is_empty() {
        let folder = Path::new(&log.folder);
        std::fs::create_dir_all(folder)
            .map_err(|e| CustomError::new(&format!("log folder '{}' unusable: {e}", folder.display())))?;
        let file = fern::log_file(log_file_path(folder, service_name))
            .map_err(|e| CustomError::new(&format!("log file unusable: {e}")))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{:width$}][{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                        record.level(),
                        record.target(),
                        message,
                        width = 5
                    ))
                })
                .chain(file)
        );
    }

    dispatch.apply().map_err(|_| CustomError::new("Failed to initialize logging."))?;
    info!("logging initialized.");
    Ok(())
}

pub fn log_file_path(folder: &Path, service_name: &str) -> PathBuf
{
    folder.join(format!("{service_name}.log"))
}

/// Returns the running executable and the folder that contains it.
pub fn module_root_folder() -> std::io::Result<(PathBuf, PathBuf)>
{
    let executable = std::env::current_exe()?;
    let root = match executable.parent() {
        None => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("executable '{}' has no parent folder", executable.display())
            ));
        }
        Some(parent) => parent.to_path_buf()
    };
    Ok((executable, root))
}

pub fn new_guid() -> String
{
    uuid::Uuid::new_v4().to_string()
}

/// Name and whole-hour UTC offset of the local time zone.
pub fn zone_info() -> (String, i32)
{
    let now = chrono::Local::now();
    let offset_seconds = now.offset().fix().local_minus_utc();
    (now.format("%Z").to_string(), offset_seconds / 3600)
}
