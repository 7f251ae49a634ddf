use std::collections::HashMap;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use derive_more::Display;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::json::JsonEncoder;
use log4rs::encode::pattern::PatternEncoder;

const LOG_FILE: &str = "linda-client.log";

#[derive(Debug, Display)]
pub enum LoggerError {
    #[display(fmt = "open log file: {}", _0)]
    File(io::Error),

    #[display(fmt = "logger config: {}", _0)]
    Config(String),

    #[display(fmt = "logger already set: {}", _0)]
    SetLogger(log::SetLoggerError),
}

impl Error for LoggerError {}

/// Install the global logger. Can only succeed once per process.
pub fn init<S: ::std::hash::BuildHasher>(
    filter: &str,
    log_to_console: bool,
    console_show_file_and_line: bool,
    log_to_file: bool,
    log_path: PathBuf,
    modules_level: &HashMap<String, String, S>,
) -> Result<(), LoggerError> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            if console_show_file_and_line {
                "[{d} {h({l})} {t} {f}:{L}] {m}{n}"
            } else {
                "[{d} {h({l})} {t}] {m}{n}"
            },
        )))
        .build();

    let mut appenders = vec![];
    if log_to_console {
        appenders.push("console");
    }

    let mut config_builder =
        Config::builder().appender(Appender::builder().build("console", Box::new(console)));

    if log_to_file {
        let file = FileAppender::builder()
            .encoder(Box::new(JsonEncoder::new()))
            .build(log_path.join(LOG_FILE))
            .map_err(LoggerError::File)?;

        config_builder = config_builder.appender(Appender::builder().build("file", Box::new(file)));
        appenders.push("file");
    }

    for (module, level) in modules_level {
        let module_logger = Logger::builder()
            .additive(false)
            .appenders(appenders.iter().copied())
            .build(module, convert_level(level));
        config_builder = config_builder.logger(module_logger);
    }

    let root = Root::builder()
        .appenders(appenders.iter().copied())
        .build(convert_level(filter));
    let config = config_builder.build(root).map_err(|e| LoggerError::Config(e.to_string()))?;

    log4rs::init_config(config).map_err(LoggerError::SetLogger)?;
    Ok(())
}

fn convert_level(level: &str) -> LevelFilter {
    match level {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        f => {
            eprintln!("invalid logger.filter {}, use info", f);
            LevelFilter::Info
        }
    }
}
