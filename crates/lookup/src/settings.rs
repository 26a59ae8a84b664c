use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;

pub const CONFIG_VARIABLE: &str = "CARIBOU_LOOKUP_CONFIG";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub log_level: LogLevel,
    pub output: OutputFormat,
}

impl Settings {
    /// Reads the settings file named on the command line or in
    /// `CARIBOU_LOOKUP_CONFIG`. Without either, the defaults apply.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        match config_path(path, env::var_os(CONFIG_VARIABLE)) {
            Some(path) => Self::read(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// An empty variable counts as unset.
fn config_path(argument: Option<PathBuf>, variable: Option<OsString>) -> Option<PathBuf> {
    argument.or_else(|| {
        variable
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            output: OutputFormat::Text,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level after `steps` repetitions of `-v`, capped at `Trace`.
    #[must_use]
    pub fn raised(self, steps: u8) -> Self {
        const LEVELS: [LogLevel; 6] = [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        LEVELS[(self as usize + usize::from(steps)).min(LEVELS.len() - 1)]
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        assert_eq!(
            Settings::default(),
            Settings {
                log_level: LogLevel::Warn,
                output: OutputFormat::Text,
            }
        );
    }

    #[rstest]
    #[case("", Settings::default())]
    #[case(
        "log_level = \"debug\"\noutput = \"json\"\n",
        Settings { log_level: LogLevel::Debug, output: OutputFormat::Json }
    )]
    #[case(
        "output = \"json\"\n",
        Settings { log_level: LogLevel::Warn, output: OutputFormat::Json }
    )]
    #[case(
        "log_level = \"off\"\n",
        Settings { log_level: LogLevel::Off, output: OutputFormat::Text }
    )]
    fn test_settings_from_toml(#[case] content: &str, #[case] expected: Settings) {
        assert_eq!(toml::from_str::<Settings>(content).unwrap(), expected);
    }

    #[rstest]
    #[case("log_level = \"verbose\"\n")]
    #[case("output = \"yaml\"\n")]
    #[case("output = 1\n")]
    fn test_settings_from_toml_invalid(#[case] content: &str) {
        assert!(toml::from_str::<Settings>(content).is_err());
    }

    #[test]
    fn test_settings_read() {
        let path = env::temp_dir().join(format!("caribou-lookup-{}.toml", std::process::id()));
        fs::write(&path, "log_level = \"trace\"\n").unwrap();

        let settings = Settings::read(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.unwrap().log_level, LogLevel::Trace);
    }

    #[test]
    fn test_settings_read_missing_file() {
        let path = env::temp_dir().join("caribou-lookup-missing.toml");
        let error = Settings::read(&path).unwrap_err();

        assert_eq!(
            error.to_string(),
            format!("reading config file {}", path.display())
        );
    }

    #[rstest]
    #[case(None, None, None)]
    #[case(None, Some(""), None)]
    #[case(None, Some("env.toml"), Some("env.toml"))]
    #[case(Some("cli.toml"), Some("env.toml"), Some("cli.toml"))]
    #[case(Some("cli.toml"), None, Some("cli.toml"))]
    fn test_config_path(
        #[case] argument: Option<&str>,
        #[case] variable: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            config_path(argument.map(PathBuf::from), variable.map(OsString::from)),
            expected.map(PathBuf::from)
        );
    }

    #[test]
    fn test_settings_load_from_variable() {
        let path = env::temp_dir().join(format!("caribou-lookup-env-{}.toml", std::process::id()));
        fs::write(&path, "output = \"json\"\n").unwrap();

        // SAFETY: no other test in this crate reads or writes the variable.
        unsafe { env::set_var(CONFIG_VARIABLE, &path) };
        let from_file = Settings::load(None);
        unsafe { env::set_var(CONFIG_VARIABLE, "") };
        let empty = Settings::load(None);
        unsafe { env::remove_var(CONFIG_VARIABLE) };
        let unset = Settings::load(None);
        fs::remove_file(&path).unwrap();

        assert_eq!(from_file.unwrap().output, OutputFormat::Json);
        assert_eq!(empty.unwrap(), Settings::default());
        assert_eq!(unset.unwrap(), Settings::default());
    }

    #[rstest]
    #[case(LogLevel::Warn, 0, LogLevel::Warn)]
    #[case(LogLevel::Warn, 1, LogLevel::Info)]
    #[case(LogLevel::Warn, 2, LogLevel::Debug)]
    #[case(LogLevel::Warn, 9, LogLevel::Trace)]
    #[case(LogLevel::Off, 1, LogLevel::Error)]
    fn test_log_level_raised(
        #[case] level: LogLevel,
        #[case] steps: u8,
        #[case] expected: LogLevel,
    ) {
        assert_eq!(level.raised(steps), expected);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    }
}
