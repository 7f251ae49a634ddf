use std::collections::HashMap;
use std::path::PathBuf;

use serde_derive::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct ConfigLogger {
    #[serde(default = "default_filter")]
    pub filter:                     String,
    #[serde(default = "default_true")]
    pub log_to_console:             bool,
    #[serde(default)]
    pub console_show_file_and_line: bool,
    #[serde(default)]
    pub log_to_file:                bool,
    #[serde(default = "default_log_path")]
    pub log_path:                   PathBuf,
    #[serde(default)]
    pub modules_level:              HashMap<String, String>,
}

impl Default for ConfigLogger {
    fn default() -> Self {
        ConfigLogger {
            filter:                     default_filter(),
            log_to_console:             true,
            console_show_file_and_line: false,
            log_to_file:                false,
            log_path:                   default_log_path(),
            modules_level:              HashMap::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: ConfigLogger,
}

fn default_filter() -> String {
    "info".to_owned()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> PathBuf {
    PathBuf::from("logs")
}
